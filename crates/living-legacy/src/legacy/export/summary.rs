use crate::legacy::project::ProjectRecord;

const RULE_WIDTH: usize = 60;

/// Plain-text project scope summary suitable for download.
pub fn render_text_summary(record: &ProjectRecord) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let mut lines: Vec<String> = Vec::new();

    lines.push(rule.clone());
    lines.push("LIVING LEGACY — PROJECT SCOPE SUMMARY".to_string());
    lines.push(rule.clone());
    lines.push(format!("Created: {}", record.created_at));
    lines.push(format!("Project ID: {}", record.project_id));
    lines.push(String::new());

    lines.push(format!("LEGACY TYPE: {}", record.legacy_type));
    lines.push(format!("  {}", record.legacy_description));
    lines.push(String::new());

    lines.push("SUBJECT".to_string());
    lines.push(format!("  Name: {}", record.subject.name));
    lines.push(format!("  Relationship: {}", record.subject.relationship));
    lines.push(String::new());

    lines.push("SCOPING DETAILS".to_string());
    for (question, answer) in &record.scoping_details {
        lines.push(format!("  Q: {question}"));
        lines.push(format!("  A: {}", answer.display()));
        lines.push(String::new());
    }

    lines.push("TARGET AUDIENCE".to_string());
    lines.push(format!("  {}", record.target_audience.join(", ")));
    if !record.audience_notes.is_empty() {
        lines.push(format!("  Notes: {}", record.audience_notes));
    }
    lines.push(String::new());

    lines.push("DELIVERY FORMAT(S)".to_string());
    lines.push(format!("  {}", record.delivery_formats.join(", ")));
    lines.push(String::new());

    lines.push(format!("TIMELINE: {}", record.timeline));
    lines.push(String::new());

    if !record.additional_notes.is_empty() {
        lines.push("ADDITIONAL NOTES".to_string());
        lines.push(format!("  {}", record.additional_notes));
        lines.push(String::new());
    }

    lines.push(rule.clone());
    lines.push("Thank you for preserving what matters most.".to_string());
    lines.push(rule);
    lines.join("\n")
}
