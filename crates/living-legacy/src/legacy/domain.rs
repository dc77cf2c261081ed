use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnswerKind {
    SingleChoice,
    MultiChoice,
    FreeText,
}

impl AnswerKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::SingleChoice => "single-choice",
            Self::MultiChoice => "multi-choice",
            Self::FreeText => "free-text",
        }
    }

    /// Free text can never match a theme label, so only choice kinds feed the selector.
    pub const fn drives_expansion(self) -> bool {
        !matches!(self, Self::FreeText)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ScopingQuestion {
    pub key: &'static str,
    pub prompt: &'static str,
    pub kind: AnswerKind,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<&'static str>,
}

impl ScopingQuestion {
    pub fn offers(&self, label: &str) -> bool {
        self.options.iter().any(|option| *option == label)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LegacyArchetype {
    pub name: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
    pub questions: Vec<ScopingQuestion>,
}

impl LegacyArchetype {
    pub fn question(&self, key: &str) -> Option<&ScopingQuestion> {
        self.questions.iter().find(|question| question.key == key)
    }
}

/// Audience, delivery format, and similar labelled picks offered by the wizard.
#[derive(Debug, Clone, Serialize)]
pub struct ChoiceOption {
    pub label: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
}

/// A user's answer to one scoping question.
///
/// `Text` carries either a single-choice label or free text; the question's
/// [`AnswerKind`] decides which.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScopingAnswer {
    Selections(Vec<String>),
    Text(String),
}

impl ScopingAnswer {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    pub fn selections<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Selections(labels.into_iter().map(Into::into).collect())
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Self::Selections(labels) => labels.is_empty(),
            Self::Text(value) => value.trim().is_empty(),
        }
    }

    /// Human readable form used by the summary exports. An empty selection renders
    /// as a single dash placeholder.
    pub fn display(&self) -> String {
        match self {
            Self::Selections(labels) if labels.is_empty() => "—".to_string(),
            Self::Selections(labels) => labels.join(", "),
            Self::Text(value) => value.clone(),
        }
    }
}

impl Default for ScopingAnswer {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

/// The finalized scope handed to the question selector.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectScope {
    pub archetype: String,
    #[serde(default)]
    pub answers: HashMap<String, ScopingAnswer>,
}

impl ProjectScope {
    pub fn new(archetype: impl Into<String>) -> Self {
        Self {
            archetype: archetype.into(),
            answers: HashMap::new(),
        }
    }

    pub fn with_answer(mut self, key: impl Into<String>, answer: ScopingAnswer) -> Self {
        self.answers.insert(key.into(), answer);
        self
    }

    pub fn answer(&self, key: &str) -> Option<&ScopingAnswer> {
        self.answers.get(key)
    }

    /// Checks every answer against the archetype's question definitions.
    ///
    /// Keys must belong to the archetype, multi-choice answers must be
    /// selections of offered labels without repeats, and single-choice answers
    /// must be an offered label or empty. Answers are checked in question
    /// declaration order, then unknown keys in sorted order, so the first
    /// reported error is stable.
    pub fn validate(&self, archetype: &LegacyArchetype) -> Result<(), ScopeError> {
        if self.archetype != archetype.name {
            return Err(ScopeError::ArchetypeMismatch {
                expected: archetype.name.to_string(),
                found: self.archetype.clone(),
            });
        }

        for question in &archetype.questions {
            if let Some(answer) = self.answers.get(question.key) {
                check_answer(question, answer)?;
            }
        }

        let mut unknown: Vec<&String> = self
            .answers
            .keys()
            .filter(|key| archetype.question(key).is_none())
            .collect();
        unknown.sort();
        if let Some(key) = unknown.first() {
            return Err(ScopeError::UnknownQuestion {
                archetype: archetype.name.to_string(),
                key: (*key).clone(),
            });
        }

        Ok(())
    }
}

fn check_answer(question: &ScopingQuestion, answer: &ScopingAnswer) -> Result<(), ScopeError> {
    let key = question.key;
    match (question.kind, answer) {
        (AnswerKind::MultiChoice, ScopingAnswer::Selections(labels)) => {
            let mut seen = HashSet::new();
            for label in labels {
                if !question.offers(label) {
                    return Err(ScopeError::OptionNotOffered {
                        key: key.to_string(),
                        label: label.clone(),
                    });
                }
                if !seen.insert(label.as_str()) {
                    return Err(ScopeError::DuplicateSelection {
                        key: key.to_string(),
                        label: label.clone(),
                    });
                }
            }
            Ok(())
        }
        (AnswerKind::SingleChoice, ScopingAnswer::Text(label)) => {
            if !label.is_empty() && !question.offers(label) {
                return Err(ScopeError::OptionNotOffered {
                    key: key.to_string(),
                    label: label.clone(),
                });
            }
            Ok(())
        }
        (AnswerKind::FreeText, ScopingAnswer::Text(_)) => Ok(()),
        (expected, _) => Err(ScopeError::AnswerKindMismatch {
            key: key.to_string(),
            expected,
        }),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("unknown legacy type '{name}': please choose a valid option")]
    NotFound { name: String },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScopeError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error("scope was built for '{found}' but validated against '{expected}'")]
    ArchetypeMismatch { expected: String, found: String },
    #[error("'{key}' is not a scoping question for {archetype}")]
    UnknownQuestion { archetype: String, key: String },
    #[error("answer to '{key}' must be {}", .expected.label())]
    AnswerKindMismatch { key: String, expected: AnswerKind },
    #[error("'{label}' is not an option for '{key}': please choose a valid option")]
    OptionNotOffered { key: String, label: String },
    #[error("'{label}' was selected more than once for '{key}'")]
    DuplicateSelection { key: String, label: String },
    #[error("'{value}' is not a valid {field}: please choose a valid option")]
    UnknownSelection { field: &'static str, value: String },
    #[error("please select at least one audience")]
    MissingAudience,
    #[error("please provide the subject's name")]
    MissingSubjectName,
    #[error("please select at least one delivery format")]
    MissingDeliveryFormat,
}
