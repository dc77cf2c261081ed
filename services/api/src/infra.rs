use chrono::NaiveDate;
use living_legacy::error::AppError;
use living_legacy::legacy::ProjectStore;
use metrics_exporter_prometheus::PrometheusHandle;
use serde::de::DeserializeOwned;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) projects: Arc<ProjectStore>,
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

/// Reads a JSON document such as a saved scoping session or priority map.
pub(crate) fn read_json_file<T: DeserializeOwned>(path: &Path) -> Result<T, AppError> {
    let raw = std::fs::read_to_string(path)?;
    serde_json::from_str(&raw).map_err(|err| {
        AppError::Io(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            format!("{}: {err}", path.display()),
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use living_legacy::legacy::ScopingSession;

    #[test]
    fn parse_date_accepts_iso_dates() {
        assert_eq!(
            parse_date(" 2026-10-19 "),
            Ok(NaiveDate::from_ymd_opt(2026, 10, 19).expect("valid date"))
        );
        assert!(parse_date("19/10/2026").is_err());
    }

    #[test]
    fn read_json_file_reports_bad_documents() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("session.json");
        std::fs::write(&path, "{ not json").expect("write");

        let result = read_json_file::<ScopingSession>(&path);
        assert!(matches!(
            result,
            Err(AppError::Io(err)) if err.kind() == std::io::ErrorKind::InvalidData
        ));
    }
}
