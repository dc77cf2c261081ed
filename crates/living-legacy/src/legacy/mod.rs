//! The Living Legacy questionnaire: the archetype catalog, the interview
//! question selector, and everything built on a finalized project scope.

pub mod catalog;
pub mod domain;
pub mod export;
pub mod plan;
pub mod project;
pub mod questions;
pub mod store;

pub use catalog::LegacyCatalog;
pub use domain::{
    AnswerKind, CatalogError, ChoiceOption, LegacyArchetype, ProjectScope, ScopeError,
    ScopingAnswer, ScopingQuestion,
};
pub use export::{write_exports, ExportError};
pub use plan::{InterviewPlan, PlanError, QuestionPriority};
pub use project::{ProjectRecord, ScopingSession, SubjectDetails};
pub use questions::{CategorySelection, QuestionBank, QuestionSelector, CLOSING_CATEGORY};
pub use store::ProjectStore;
