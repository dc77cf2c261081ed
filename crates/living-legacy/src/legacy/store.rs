use super::export::ExportError;
use super::project::ProjectRecord;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::info;

/// Saves finalized projects as pretty JSON files under a single directory.
#[derive(Debug, Clone)]
pub struct ProjectStore {
    dir: PathBuf,
}

impl ProjectStore {
    /// Opens the store, creating the directory if needed.
    pub fn new(dir: impl Into<PathBuf>) -> io::Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn file_name(record: &ProjectRecord) -> String {
        format!(
            "legacy_{}_{}.json",
            record.file_safe_subject(),
            record.project_id
        )
    }

    pub fn save(&self, record: &ProjectRecord) -> Result<PathBuf, ExportError> {
        let path = self.dir.join(Self::file_name(record));
        let json = serde_json::to_string_pretty(record)?;
        fs::write(&path, json)?;
        info!(path = %path.display(), "project saved");
        Ok(path)
    }

    pub fn load(&self, path: impl AsRef<Path>) -> Result<ProjectRecord, ExportError> {
        let path = path.as_ref();
        let path = if path.is_absolute() || path.exists() {
            path.to_path_buf()
        } else {
            self.dir.join(path)
        };
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::legacy::domain::ScopingAnswer;
    use crate::legacy::project::SubjectDetails;
    use indexmap::IndexMap;

    fn record() -> ProjectRecord {
        let mut scoping_details = IndexMap::new();
        scoping_details.insert(
            "Which chapters of your life story feel most important to capture? (Select all that apply)"
                .to_string(),
            ScopingAnswer::selections(["Childhood & early years"]),
        );
        ProjectRecord {
            project_id: "20260214_181500".to_string(),
            created_at: "2026-02-14T18:15:00".to_string(),
            legacy_type: "Full Life Story".to_string(),
            legacy_description: "A full memoir".to_string(),
            subject: SubjectDetails {
                name: "Rosa Maria Diaz".to_string(),
                relationship: "I'm capturing a parent's story".to_string(),
            },
            scoping_details,
            target_audience: vec!["My Children".to_string()],
            audience_notes: String::new(),
            delivery_formats: vec!["Audio Recording".to_string()],
            timeline: "No rush".to_string(),
            additional_notes: String::new(),
        }
    }

    #[test]
    fn save_uses_subject_and_id_in_file_name() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = ProjectStore::new(dir.path().join("projects")).expect("store");

        let path = store.save(&record()).expect("saved");

        assert_eq!(
            path.file_name().and_then(|name| name.to_str()),
            Some("legacy_Rosa_Maria_Diaz_20260214_181500.json")
        );
        let raw = fs::read_to_string(&path).expect("readable");
        assert!(raw.contains("\n  \"project_id\": \"20260214_181500\""));
    }

    #[test]
    fn save_keeps_path_characters_out_of_file_name() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = ProjectStore::new(dir.path()).expect("store");
        let mut record = record();
        record.subject.name = "Mary/Maria Lopez".to_string();

        let path = store.save(&record).expect("saved");
        assert_eq!(path.parent(), Some(dir.path()));
        assert_eq!(
            path.file_name().and_then(|name| name.to_str()),
            Some("legacy_Mary_Maria_Lopez_20260214_181500.json")
        );

        record.subject.name = "../..\\etc\0".to_string();
        assert_eq!(record.file_safe_subject(), "______etc_");
        assert_eq!(store.save(&record).expect("saved").parent(), Some(dir.path()));
    }

    #[test]
    fn load_round_trips_saved_record() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = ProjectStore::new(dir.path()).expect("store");
        let saved = store.save(&record()).expect("saved");

        let by_name = store
            .load(ProjectStore::file_name(&record()))
            .expect("loads by name");
        let by_path = store.load(&saved).expect("loads by path");

        assert_eq!(by_name, record());
        assert_eq!(by_path, by_name);
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = ProjectStore::new(dir.path()).expect("store");

        assert!(matches!(
            store.load("legacy_nobody_1.json"),
            Err(ExportError::Io(_))
        ));
    }
}
