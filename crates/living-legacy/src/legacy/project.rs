use super::catalog::LegacyCatalog;
use super::domain::{AnswerKind, ProjectScope, ScopeError, ScopingAnswer};
use chrono::NaiveDateTime;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::info;

/// Everything collected while scoping a project, before it is finalized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScopingSession {
    pub archetype: String,
    #[serde(default)]
    pub answers: HashMap<String, ScopingAnswer>,
    pub subject_name: String,
    pub subject_relationship: String,
    pub audiences: Vec<String>,
    #[serde(default)]
    pub audience_notes: String,
    pub delivery_formats: Vec<String>,
    #[serde(default)]
    pub timeline: String,
    #[serde(default)]
    pub additional_notes: String,
}

impl ScopingSession {
    pub fn scope(&self) -> ProjectScope {
        ProjectScope {
            archetype: self.archetype.clone(),
            answers: self.answers.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectDetails {
    pub name: String,
    pub relationship: String,
}

/// Finalized project data, serialized as the saved project file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub project_id: String,
    pub created_at: String,
    pub legacy_type: String,
    pub legacy_description: String,
    pub subject: SubjectDetails,
    /// Answers keyed by question prompt, in the archetype's question order.
    pub scoping_details: IndexMap<String, ScopingAnswer>,
    pub target_audience: Vec<String>,
    pub audience_notes: String,
    pub delivery_formats: Vec<String>,
    pub timeline: String,
    pub additional_notes: String,
}

impl ProjectRecord {
    pub fn build(
        catalog: &LegacyCatalog,
        session: &ScopingSession,
        now: NaiveDateTime,
    ) -> Result<Self, ScopeError> {
        let archetype = catalog.get_archetype(&session.archetype)?;
        session.scope().validate(archetype)?;

        if session.audiences.is_empty() {
            return Err(ScopeError::MissingAudience);
        }
        if session.subject_name.trim().is_empty() {
            return Err(ScopeError::MissingSubjectName);
        }
        if session.delivery_formats.is_empty() {
            return Err(ScopeError::MissingDeliveryFormat);
        }

        check_labels(
            "audience",
            &session.audiences,
            catalog.audience_options().iter().map(|option| option.label),
        )?;
        check_labels(
            "delivery format",
            &session.delivery_formats,
            catalog.delivery_formats().iter().map(|option| option.label),
        )?;
        if !session.timeline.is_empty() {
            check_labels(
                "timeline",
                std::slice::from_ref(&session.timeline),
                catalog.timeline_options().iter().copied(),
            )?;
        }
        check_labels(
            "subject relationship",
            std::slice::from_ref(&session.subject_relationship),
            catalog.subject_relationships().iter().copied(),
        )?;

        let scoping_details = archetype
            .questions
            .iter()
            .map(|question| {
                let answer = session
                    .answers
                    .get(question.key)
                    .cloned()
                    .unwrap_or_else(|| match question.kind {
                        AnswerKind::MultiChoice => ScopingAnswer::Selections(Vec::new()),
                        AnswerKind::SingleChoice | AnswerKind::FreeText => {
                            ScopingAnswer::default()
                        }
                    });
                (question.prompt.to_string(), answer)
            })
            .collect();

        let record = Self {
            project_id: now.format("%Y%m%d_%H%M%S").to_string(),
            created_at: now.format("%Y-%m-%dT%H:%M:%S%.f").to_string(),
            legacy_type: archetype.name.to_string(),
            legacy_description: archetype.description.to_string(),
            subject: SubjectDetails {
                name: session.subject_name.trim().to_string(),
                relationship: session.subject_relationship.clone(),
            },
            scoping_details,
            target_audience: session.audiences.clone(),
            audience_notes: session.audience_notes.clone(),
            delivery_formats: session.delivery_formats.clone(),
            timeline: session.timeline.clone(),
            additional_notes: session.additional_notes.clone(),
        };

        info!(
            project_id = %record.project_id,
            legacy_type = %record.legacy_type,
            "project scope finalized"
        );
        Ok(record)
    }

    /// Subject name reduced to `[A-Za-z0-9_-]` for export file names; every
    /// other character, path separators included, becomes `_`.
    pub fn file_safe_subject(&self) -> String {
        self.subject
            .name
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                    c
                } else {
                    '_'
                }
            })
            .collect()
    }

    /// Every multi-choice label picked during scoping, in question order.
    pub fn key_themes(&self) -> Vec<&str> {
        self.scoping_details
            .values()
            .filter_map(|answer| match answer {
                ScopingAnswer::Selections(labels) => Some(labels),
                ScopingAnswer::Text(_) => None,
            })
            .flatten()
            .map(String::as_str)
            .collect()
    }
}

fn check_labels<'a>(
    field: &'static str,
    values: &[String],
    known: impl Iterator<Item = &'a str> + Clone,
) -> Result<(), ScopeError> {
    for value in values {
        if !known.clone().any(|label| label == value.as_str()) {
            return Err(ScopeError::UnknownSelection {
                field,
                value: value.clone(),
            });
        }
    }
    Ok(())
}
