use crate::legacy::plan::{InterviewPlan, QuestionPriority};
use crate::legacy::project::ProjectRecord;
use chrono::NaiveDate;
use std::fmt::Write;

pub const INTERVIEW_TIPS: [&str; 9] = [
    "Find a quiet, comfortable place with minimal distractions.",
    "Let the storyteller speak freely. Follow the story, not just the script.",
    "Use follow-up prompts like: \"Tell me more about that\" or \"How did that make you feel?\"",
    "Silence is okay. Give them time to think and remember.",
    "Record the interview if possible (audio or video) in addition to taking notes.",
    "It's fine to skip questions or change the order. This guide is a starting point.",
    "If emotions come up, be patient and compassionate. Some stories need time.",
    "Focus on specific memories and details rather than generalities.",
    "Take breaks as needed. This doesn't have to happen in one sitting.",
];

const CLOSING_MESSAGE: &str = "Every question is a doorway into a memory. \
Not every door needs to be opened today. \
Take your time, enjoy the conversation, and let the stories come.";

/// Interview guide as plain text: title block, tips, an optional priority
/// legend, numbered questions per category, and a closing note.
///
/// Priority annotations appear only for questions with an explicit priority.
pub fn render_interview_guide(
    record: &ProjectRecord,
    plan: &InterviewPlan,
    prepared_on: NaiveDate,
) -> String {
    let mut out = String::new();
    let title = format!("{}'s {}", record.subject.name, record.legacy_type);

    let _ = writeln!(out, "Living Legacy  |  Interview Guide");
    let _ = writeln!(out);
    let _ = writeln!(out, "INTERVIEW GUIDE");
    let _ = writeln!(out, "{title}");
    let _ = writeln!(out, "Prepared on {}", prepared_on.format("%B %d, %Y"));
    let _ = writeln!(
        out,
        "Target audience: {}",
        record.target_audience.join(", ")
    );
    let _ = writeln!(out, "Captured by: {}", record.subject.relationship);
    if !record.audience_notes.is_empty() {
        let _ = writeln!(out, "Audience notes: {}", record.audience_notes);
    }

    section(&mut out, "Tips for a Great Interview");
    for tip in INTERVIEW_TIPS {
        let _ = writeln!(out, "  - {tip}");
    }

    if plan.has_priorities() {
        section(&mut out, "Priority Legend");
        for priority in QuestionPriority::ordered() {
            let _ = writeln!(
                out,
                "  [{}] {}",
                priority.label().to_uppercase(),
                priority.legend()
            );
        }
    }

    for (category, questions) in plan.questions().iter() {
        section(&mut out, category);
        for (number, question) in questions.iter().enumerate() {
            let annotation = plan
                .explicit_priority(question)
                .map(|priority| format!("  [{}]", priority.label().to_uppercase()))
                .unwrap_or_default();
            let _ = writeln!(out, "{}. {question}{annotation}", number + 1);
            let _ = writeln!(out, "   Notes: ______________________________________________");
            let _ = writeln!(out);
        }
    }

    section(&mut out, "Thank you for preserving what matters most.");
    let _ = writeln!(out, "{CLOSING_MESSAGE}");
    out
}

fn section(out: &mut String, title: &str) {
    let _ = writeln!(out);
    let _ = writeln!(out, "{title}");
    let _ = writeln!(out, "{}", "-".repeat(title.chars().count()));
}
