use crate::infra::{parse_date, read_json_file};
use chrono::{Local, NaiveDate};
use clap::Args;
use living_legacy::config::AppConfig;
use living_legacy::error::AppError;
use living_legacy::legacy::export::{render_interview_guide, render_text_summary};
use living_legacy::legacy::{
    write_exports, AnswerKind, InterviewPlan, LegacyCatalog, ProjectRecord, ProjectStore,
    QuestionPriority, QuestionSelector, ScopingSession,
};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

#[derive(Args, Debug, Default)]
pub(crate) struct CatalogArgs {
    /// Show the scoping questions for one legacy type
    #[arg(long)]
    pub(crate) archetype: Option<String>,
}

#[derive(Args, Debug)]
pub(crate) struct QuestionsArgs {
    /// Scoping session JSON file
    #[arg(long)]
    pub(crate) session: PathBuf,
    /// JSON object mapping question text to "Must Ask", "Nice to Have", or "Optional"
    #[arg(long)]
    pub(crate) priorities: Option<PathBuf>,
    /// Date printed on the guide (YYYY-MM-DD, defaults to today)
    #[arg(long, value_parser = parse_date)]
    pub(crate) date: Option<NaiveDate>,
}

#[derive(Args, Debug)]
pub(crate) struct ScopeArgs {
    /// Scoping session JSON file
    #[arg(long)]
    pub(crate) session: PathBuf,
    /// Directory the project JSON is saved to (defaults to LEGACY_PROJECTS_DIR)
    #[arg(long)]
    pub(crate) output_dir: Option<PathBuf>,
    /// Also write the summary, brief, guide, and question exports here
    #[arg(long)]
    pub(crate) export_dir: Option<PathBuf>,
    /// JSON object mapping question text to a priority label
    #[arg(long)]
    pub(crate) priorities: Option<PathBuf>,
    /// Date stamped on the exports (YYYY-MM-DD, defaults to today)
    #[arg(long, value_parser = parse_date)]
    pub(crate) date: Option<NaiveDate>,
}

pub(crate) fn run_catalog(args: CatalogArgs) -> Result<(), AppError> {
    let catalog = LegacyCatalog::shared();

    let Some(name) = args.archetype else {
        println!("Legacy types");
        for archetype in catalog.list_archetypes() {
            println!("- {} {}", archetype.icon, archetype.name);
            println!("    {}", archetype.description);
        }
        println!("\nAudiences");
        for option in catalog.audience_options() {
            println!("- {} {}", option.icon, option.label);
        }
        println!("\nDelivery formats");
        for option in catalog.delivery_formats() {
            println!("- {} {}", option.icon, option.label);
        }
        println!("\nTimelines");
        for timeline in catalog.timeline_options() {
            println!("- {timeline}");
        }
        return Ok(());
    };

    let archetype = catalog.get_archetype(&name)?;
    println!("{} {}", archetype.icon, archetype.name);
    println!("{}\n", archetype.description);
    for question in &archetype.questions {
        println!("[{}] {} ({})", question.key, question.prompt, question.kind.label());
        match question.kind {
            AnswerKind::FreeText => {
                if let Some(placeholder) = question.placeholder {
                    println!("    {placeholder}");
                }
            }
            AnswerKind::SingleChoice | AnswerKind::MultiChoice => {
                for option in &question.options {
                    println!("    - {option}");
                }
            }
        }
    }
    Ok(())
}

pub(crate) fn run_questions(args: QuestionsArgs) -> Result<(), AppError> {
    let session: ScopingSession = read_json_file(&args.session)?;
    let today = args.date.unwrap_or_else(|| Local::now().date_naive());
    let (record, plan) = prepare(&session, args.priorities.as_deref())?;

    println!("{}", render_interview_guide(&record, &plan, today));
    Ok(())
}

pub(crate) fn run_scope(args: ScopeArgs) -> Result<(), AppError> {
    let session: ScopingSession = read_json_file(&args.session)?;
    let today = args.date.unwrap_or_else(|| Local::now().date_naive());
    let output_dir = match args.output_dir {
        Some(dir) => dir,
        None => AppConfig::load()?.storage.projects_dir,
    };

    let (record, plan) = prepare(&session, args.priorities.as_deref())?;
    let store = ProjectStore::new(&output_dir)?;
    let saved = store.save(&record)?;

    println!("{}", render_text_summary(&record));
    println!("\nProject saved to {}", saved.display());
    println!(
        "Interview plan: {} categories, {} questions ({} must ask)",
        plan.category_count(),
        plan.question_count(),
        plan.must_ask_count()
    );

    if let Some(dir) = args.export_dir {
        for path in write_exports(&dir, &record, &plan, today)? {
            println!("Wrote {}", path.display());
        }
    }
    Ok(())
}

/// Builds the record and the prioritized interview plan for a session.
pub(crate) fn prepare(
    session: &ScopingSession,
    priorities: Option<&Path>,
) -> Result<(ProjectRecord, InterviewPlan), AppError> {
    let record = ProjectRecord::build(
        LegacyCatalog::shared(),
        session,
        Local::now().naive_local(),
    )?;
    let selection = QuestionSelector::standard().select(&session.scope());
    let mut plan = InterviewPlan::from_selection(selection);

    if let Some(path) = priorities {
        let overrides: BTreeMap<String, QuestionPriority> = read_json_file(path)?;
        for (question, priority) in overrides {
            plan.set_priority(&question, priority)?;
        }
    }
    Ok((record, plan))
}

#[cfg(test)]
mod tests {
    use super::*;
    use living_legacy::legacy::{PlanError, ScopingAnswer};

    fn write_session(dir: &Path) -> PathBuf {
        let session = ScopingSession {
            archetype: "Full Life Story".to_string(),
            answers: [(
                "themes".to_string(),
                ScopingAnswer::selections(["Travel & Adventures"]),
            )]
            .into_iter()
            .collect(),
            subject_name: "Walter Gray".to_string(),
            subject_relationship: "I'm capturing a parent's story".to_string(),
            audiences: vec!["My Children".to_string()],
            audience_notes: String::new(),
            delivery_formats: vec!["Audio Recording".to_string()],
            timeline: "No rush — I'm just exploring for now".to_string(),
            additional_notes: String::new(),
        };
        let path = dir.join("session.json");
        std::fs::write(&path, serde_json::to_string(&session).expect("json")).expect("write");
        path
    }

    #[test]
    fn prepare_applies_priority_overrides() {
        let dir = tempfile::tempdir().expect("tempdir");
        let session_path = write_session(dir.path());
        let priorities_path = dir.path().join("priorities.json");
        std::fs::write(
            &priorities_path,
            r#"{"What are you most proud of?": "Must Ask"}"#,
        )
        .expect("write");

        let session: ScopingSession = read_json_file(&session_path).expect("session");
        let (record, plan) = prepare(&session, Some(&priorities_path)).expect("prepared");

        assert_eq!(record.subject.name, "Walter Gray");
        assert_eq!(plan.must_ask_count(), 1);
        assert!(plan
            .questions()
            .category_names()
            .contains(&"Adventures & Experiences"));
    }

    #[test]
    fn prepare_rejects_priorities_for_unplanned_questions() {
        let dir = tempfile::tempdir().expect("tempdir");
        let session_path = write_session(dir.path());
        let priorities_path = dir.path().join("priorities.json");
        std::fs::write(&priorities_path, r#"{"Typo question not in plan?": "Must Ask"}"#)
            .expect("write");

        let session: ScopingSession = read_json_file(&session_path).expect("session");
        let result = prepare(&session, Some(&priorities_path));

        assert!(matches!(
            result,
            Err(AppError::Plan(PlanError::UnknownQuestion(question)))
                if question == "Typo question not in plan?"
        ));
    }

    #[test]
    fn scope_saves_project_and_exports() {
        let dir = tempfile::tempdir().expect("tempdir");
        let session = write_session(dir.path());
        let output_dir = dir.path().join("projects");
        let export_dir = dir.path().join("exports");

        run_scope(ScopeArgs {
            session,
            output_dir: Some(output_dir.clone()),
            export_dir: Some(export_dir.clone()),
            priorities: None,
            date: NaiveDate::from_ymd_opt(2026, 10, 19),
        })
        .expect("scope runs");

        let saved: Vec<_> = std::fs::read_dir(&output_dir)
            .expect("projects dir")
            .filter_map(Result::ok)
            .collect();
        assert_eq!(saved.len(), 1);
        assert!(export_dir.join("interview_guide_Walter_Gray.txt").exists());
        assert!(export_dir.join("interview_questions_Walter_Gray.csv").exists());
    }

    #[test]
    fn catalog_rejects_unknown_archetype() {
        let result = run_catalog(CatalogArgs {
            archetype: Some("Pirate Tales".to_string()),
        });
        assert!(matches!(result, Err(AppError::Catalog(_))));
    }
}
