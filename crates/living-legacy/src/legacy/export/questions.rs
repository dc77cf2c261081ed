use super::ExportError;
use crate::legacy::plan::{InterviewPlan, QuestionPriority};
use crate::legacy::project::ProjectRecord;
use crate::legacy::questions::CategorySelection;
use serde::Serialize;
use std::collections::BTreeMap;

/// Structured question export consumed by the JSON download.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionExport<'a> {
    pub project_id: &'a str,
    pub subject: &'a str,
    pub legacy_type: &'a str,
    pub questions: &'a CategorySelection,
    pub priorities: BTreeMap<&'a str, QuestionPriority>,
}

impl<'a> QuestionExport<'a> {
    /// Every question in the plan gets a priority, defaulted where unset.
    pub fn from_plan(record: &'a ProjectRecord, plan: &'a InterviewPlan) -> Self {
        let priorities = plan
            .questions()
            .iter()
            .flat_map(|(_, questions)| questions.iter())
            .map(|question| (question.as_str(), plan.priority(question)))
            .collect();

        Self {
            project_id: &record.project_id,
            subject: &record.subject.name,
            legacy_type: &record.legacy_type,
            questions: plan.questions(),
            priorities,
        }
    }

    pub fn to_json_pretty(&self) -> Result<String, ExportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionRow<'a> {
    pub category: &'a str,
    pub number: usize,
    pub question: &'a str,
    pub priority: QuestionPriority,
}

/// Flattens the plan to `category,number,question,priority` rows.
pub fn questions_csv(plan: &InterviewPlan) -> Result<String, ExportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    for (category, questions) in plan.questions().iter() {
        for (index, question) in questions.iter().enumerate() {
            writer.serialize(QuestionRow {
                category,
                number: index + 1,
                question,
                priority: plan.priority(question),
            })?;
        }
    }

    let bytes = writer
        .into_inner()
        .map_err(|err| ExportError::Io(err.into_error()))?;
    Ok(String::from_utf8(bytes)?)
}
