use crate::legacy::domain::ScopingAnswer;
use crate::legacy::project::ProjectRecord;
use chrono::NaiveDate;

const FOOTER: &str = "Living Legacy -- Preserving stories that matter.";

/// One-page project brief. Multi-choice answers are folded into a single
/// "Key Themes" line; non-empty text answers are listed under their prompt.
pub fn render_project_brief(record: &ProjectRecord, generated_on: NaiveDate) -> String {
    let mut lines = vec![
        "Living Legacy Project Brief".to_string(),
        format!("{}'s {}", record.subject.name, record.legacy_type),
        format!("Generated {}", generated_on.format("%B %d, %Y")),
        String::new(),
    ];

    field(&mut lines, "Subject", &record.subject.name);
    if !record.subject.relationship.is_empty() {
        field(&mut lines, "Relationship", &record.subject.relationship);
    }
    field(
        &mut lines,
        "Legacy Type",
        &format!("{} -- {}", record.legacy_type, record.legacy_description),
    );
    field(
        &mut lines,
        "Target Audience",
        &record.target_audience.join(", "),
    );
    if !record.audience_notes.is_empty() {
        field(&mut lines, "Audience Notes", &record.audience_notes);
    }

    let themes = record.key_themes();
    if !themes.is_empty() {
        field(&mut lines, "Key Themes", &themes.join(", "));
    }

    for (prompt, answer) in &record.scoping_details {
        if let ScopingAnswer::Text(value) = answer {
            if !value.trim().is_empty() {
                lines.push(format!("{prompt}:"));
                lines.push(format!("  {value}"));
                lines.push(String::new());
            }
        }
    }

    field(
        &mut lines,
        "Delivery Format(s)",
        &record.delivery_formats.join(", "),
    );
    if !record.timeline.is_empty() {
        field(&mut lines, "Timeline", &record.timeline);
    }
    if !record.additional_notes.is_empty() {
        field(&mut lines, "Additional Notes", &record.additional_notes);
    }

    lines.push(FOOTER.to_string());
    lines.join("\n")
}

fn field(lines: &mut Vec<String>, label: &str, value: &str) {
    lines.push(format!("{label}: {value}"));
    lines.push(String::new());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::legacy::catalog::LegacyCatalog;
    use crate::legacy::project::ScopingSession;

    #[test]
    fn brief_collects_themes_and_text_answers() {
        let session = ScopingSession {
            archetype: "Military & Service".to_string(),
            answers: [
                (
                    "service_scope".to_string(),
                    ScopingAnswer::text("US Navy, 1990-1994"),
                ),
                (
                    "service_themes".to_string(),
                    ScopingAnswer::selections(["Brotherhood & camaraderie"]),
                ),
            ]
            .into_iter()
            .collect(),
            subject_name: "Aunt Ruth".to_string(),
            subject_relationship: "I'm capturing a parent's story".to_string(),
            audiences: vec!["My Grandchildren".to_string()],
            audience_notes: String::new(),
            delivery_formats: vec!["Written Book / Memoir".to_string()],
            timeline: String::new(),
            additional_notes: "Bring the photo albums".to_string(),
        };
        let created = NaiveDate::from_ymd_opt(2026, 5, 1)
            .and_then(|date| date.and_hms_opt(12, 0, 0))
            .expect("valid timestamp");
        let record =
            ProjectRecord::build(&LegacyCatalog::standard(), &session, created).expect("record");

        let brief = render_project_brief(&record, created.date());

        assert!(brief.starts_with("Living Legacy Project Brief\nAunt Ruth's Military & Service"));
        assert!(brief.contains("Generated May 01, 2026"));
        assert!(brief.contains("Key Themes: Brotherhood & camaraderie"));
        assert!(brief.contains("What branch and era of service?:\n  US Navy, 1990-1994"));
        assert!(brief.contains("Additional Notes: Bring the photo albums"));
        assert!(!brief.contains("Timeline:"));
        assert!(brief.ends_with(FOOTER));
    }
}
