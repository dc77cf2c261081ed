use crate::commands::prepare;
use crate::infra::parse_date;
use chrono::{Local, NaiveDate};
use clap::Args;
use living_legacy::error::AppError;
use living_legacy::legacy::export::{render_interview_guide, render_project_brief};
use living_legacy::legacy::{
    write_exports, InterviewPlan, ProjectStore, QuestionPriority, ScopingAnswer, ScopingSession,
};
use std::collections::HashMap;
use std::path::PathBuf;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Save the demo project JSON to this directory
    #[arg(long)]
    pub(crate) output_dir: Option<PathBuf>,
    /// Write the summary, brief, guide, and question exports to this directory
    #[arg(long)]
    pub(crate) export_dir: Option<PathBuf>,
    /// Override the date printed on the exports (defaults to today)
    #[arg(long, value_parser = parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Skip printing the full interview guide
    #[arg(long)]
    pub(crate) brief_only: bool,
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        output_dir,
        export_dir,
        today,
        brief_only,
    } = args;
    let today = today.unwrap_or_else(|| Local::now().date_naive());

    println!("Living Legacy demo");
    let session = demo_session();
    let (record, mut plan) = prepare(&session, None)?;
    highlight_priorities(&mut plan)?;

    println!(
        "- {} for {} ({} categories, {} questions, {} must ask)",
        record.legacy_type,
        record.subject.name,
        plan.category_count(),
        plan.question_count(),
        plan.must_ask_count()
    );
    println!(
        "- Categories: {}",
        plan.questions().category_names().join(" -> ")
    );

    println!("\n{}", render_project_brief(&record, today));
    if !brief_only {
        println!("\n{}", render_interview_guide(&record, &plan, today));
    }

    if let Some(dir) = output_dir {
        let saved = ProjectStore::new(dir)?.save(&record)?;
        println!("\nProject saved to {}", saved.display());
    }
    if let Some(dir) = export_dir {
        for path in write_exports(&dir, &record, &plan, today)? {
            println!("Wrote {}", path.display());
        }
    }
    Ok(())
}

pub(crate) fn demo_session() -> ScopingSession {
    let mut answers = HashMap::new();
    answers.insert(
        "time_depth".to_string(),
        ScopingAnswer::text("As far back as I can remember"),
    );
    answers.insert(
        "themes".to_string(),
        ScopingAnswer::selections([
            "Travel & Adventures",
            "Military Service",
            "Cultural Heritage & Traditions",
        ]),
    );
    answers.insert(
        "tone".to_string(),
        ScopingAnswer::text("Warm and conversational — like sitting on the porch together"),
    );

    ScopingSession {
        archetype: "Full Life Story".to_string(),
        answers,
        subject_name: "Eleanor Hayes".to_string(),
        subject_relationship: "I'm capturing a grandparent's story".to_string(),
        audiences: vec!["My Grandchildren".to_string(), "Future Generations".to_string()],
        audience_notes: "The grandkids are 8 to 15, so keep it approachable.".to_string(),
        delivery_formats: vec![
            "Audio Recording".to_string(),
            "Written Book / Memoir".to_string(),
        ],
        timeline: "Within the next few months".to_string(),
        additional_notes: "She has a box of letters from her time overseas.".to_string(),
    }
}

/// Flags the first question of every category as must ask.
fn highlight_priorities(plan: &mut InterviewPlan) -> Result<(), AppError> {
    let openers: Vec<String> = plan
        .questions()
        .iter()
        .filter_map(|(_, questions)| questions.first().cloned())
        .collect();
    for question in openers {
        plan.set_priority(&question, QuestionPriority::MustAsk)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_session_is_complete() {
        let (record, mut plan) = prepare(&demo_session(), None).expect("demo session is valid");
        highlight_priorities(&mut plan).expect("priorities");

        assert_eq!(record.file_safe_subject(), "Eleanor_Hayes");
        assert_eq!(plan.must_ask_count(), plan.category_count());
        assert_eq!(
            plan.questions().category_names().last(),
            Some(&"Reflection & Legacy")
        );
    }

    #[test]
    fn demo_writes_exports() {
        let dir = tempfile::tempdir().expect("tempdir");
        run_demo(DemoArgs {
            output_dir: Some(dir.path().join("projects")),
            export_dir: Some(dir.path().join("exports")),
            today: NaiveDate::from_ymd_opt(2026, 10, 19),
            brief_only: true,
        })
        .expect("demo runs");

        assert!(dir
            .path()
            .join("exports/project_brief_Eleanor_Hayes.txt")
            .exists());
    }
}
