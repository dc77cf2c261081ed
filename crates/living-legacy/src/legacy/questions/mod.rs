mod bank;
mod selector;
mod sequence;

pub use bank::{QuestionBank, QuestionCategory, CLOSING_CATEGORY};
pub use selector::{CategorySelection, QuestionSelector};
pub use sequence::CategorySequence;
