use super::questions::CategorySelection;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum QuestionPriority {
    #[serde(rename = "Must Ask")]
    MustAsk,
    #[default]
    #[serde(rename = "Nice to Have")]
    NiceToHave,
    #[serde(rename = "Optional")]
    Optional,
}

impl QuestionPriority {
    pub const fn ordered() -> [Self; 3] {
        [Self::MustAsk, Self::NiceToHave, Self::Optional]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::MustAsk => "Must Ask",
            Self::NiceToHave => "Nice to Have",
            Self::Optional => "Optional",
        }
    }

    pub const fn legend(self) -> &'static str {
        match self {
            Self::MustAsk => "Essential questions that form the core of the legacy.",
            Self::NiceToHave => "Valuable questions if time and energy allow.",
            Self::Optional => {
                "Bonus questions -- great if the conversation goes there naturally."
            }
        }
    }
}

impl fmt::Display for QuestionPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for QuestionPriority {
    type Err = PlanError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase().replace(['_', '-'], " ");
        match normalized.as_str() {
            "must ask" => Ok(Self::MustAsk),
            "nice to have" => Ok(Self::NiceToHave),
            "optional" => Ok(Self::Optional),
            _ => Err(PlanError::UnknownPriority(value.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlanError {
    #[error("category '{0}' is not part of this interview plan")]
    UnknownCategory(String),
    #[error("category '{category}' has no question #{number}")]
    QuestionOutOfRange { category: String, number: usize },
    #[error("category '{0}' already exists")]
    DuplicateCategory(String),
    #[error("category name cannot be blank")]
    BlankCategoryName,
    #[error("question text cannot be blank")]
    BlankQuestion,
    #[error("'{0}' is not a question in this interview plan")]
    UnknownQuestion(String),
    #[error("'{0}' is not a priority: use Must Ask, Nice to Have, or Optional")]
    UnknownPriority(String),
}

/// An editable copy of a [`CategorySelection`] with a per-question priority
/// overlay. Priorities are keyed by question text; questions without an
/// explicit entry count as [`QuestionPriority::NiceToHave`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterviewPlan {
    questions: CategorySelection,
    #[serde(default)]
    priorities: BTreeMap<String, QuestionPriority>,
}

impl InterviewPlan {
    pub fn from_selection(questions: CategorySelection) -> Self {
        Self {
            questions,
            priorities: BTreeMap::new(),
        }
    }

    pub fn questions(&self) -> &CategorySelection {
        &self.questions
    }

    /// Explicitly assigned priorities only.
    pub fn priorities(&self) -> &BTreeMap<String, QuestionPriority> {
        &self.priorities
    }

    /// True when a question currently in the plan carries an explicit priority.
    pub fn has_priorities(&self) -> bool {
        self.planned_priorities().next().is_some()
    }

    pub fn priority(&self, question: &str) -> QuestionPriority {
        self.priorities.get(question).copied().unwrap_or_default()
    }

    pub fn explicit_priority(&self, question: &str) -> Option<QuestionPriority> {
        self.priorities.get(question).copied()
    }

    pub fn category_count(&self) -> usize {
        self.questions.len()
    }

    pub fn question_count(&self) -> usize {
        self.questions.total_questions()
    }

    pub fn must_ask_count(&self) -> usize {
        self.planned_priorities()
            .filter(|priority| *priority == QuestionPriority::MustAsk)
            .count()
    }

    pub fn set_priority(
        &mut self,
        question: &str,
        priority: QuestionPriority,
    ) -> Result<(), PlanError> {
        let question = question.trim();
        if question.is_empty() {
            return Err(PlanError::BlankQuestion);
        }
        if !self.contains_question(question) {
            return Err(PlanError::UnknownQuestion(question.to_string()));
        }
        self.priorities.insert(question.to_string(), priority);
        Ok(())
    }

    /// Replaces question `number` (1-based) in `category`. Blank text removes
    /// the question, mirroring a cleared edit field.
    pub fn edit_question(
        &mut self,
        category: &str,
        number: usize,
        text: &str,
    ) -> Result<(), PlanError> {
        let text = text.trim();
        if text.is_empty() {
            return self.remove_question(category, number);
        }

        let list = self.category_mut(category)?;
        let slot = number
            .checked_sub(1)
            .and_then(|index| list.get_mut(index))
            .ok_or_else(|| PlanError::QuestionOutOfRange {
                category: category.to_string(),
                number,
            })?;
        let previous = std::mem::replace(slot, text.to_string());

        if let Some(priority) = self.priorities.remove(&previous) {
            self.priorities.insert(text.to_string(), priority);
        }
        Ok(())
    }

    /// Removes question `number` (1-based); a category left empty is dropped.
    pub fn remove_question(&mut self, category: &str, number: usize) -> Result<(), PlanError> {
        let list = self.category_mut(category)?;
        if number == 0 || number > list.len() {
            return Err(PlanError::QuestionOutOfRange {
                category: category.to_string(),
                number,
            });
        }
        let removed = list.remove(number - 1);
        let now_empty = list.is_empty();

        if now_empty {
            let mut categories = std::mem::take(&mut self.questions).into_inner();
            categories.shift_remove(category);
            self.questions = categories.into();
        }
        if !self.contains_question(&removed) {
            self.priorities.remove(&removed);
        }
        Ok(())
    }

    pub fn add_question(&mut self, category: &str, text: &str) -> Result<(), PlanError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(PlanError::BlankQuestion);
        }
        self.category_mut(category)?.push(text.to_string());
        self.priorities
            .insert(text.to_string(), QuestionPriority::NiceToHave);
        Ok(())
    }

    pub fn add_category(&mut self, name: &str, first_question: &str) -> Result<(), PlanError> {
        let name = name.trim();
        let first_question = first_question.trim();
        if name.is_empty() {
            return Err(PlanError::BlankCategoryName);
        }
        if first_question.is_empty() {
            return Err(PlanError::BlankQuestion);
        }
        if self.questions.questions(name).is_some() {
            return Err(PlanError::DuplicateCategory(name.to_string()));
        }

        let mut categories = std::mem::take(&mut self.questions).into_inner();
        categories.insert(name.to_string(), vec![first_question.to_string()]);
        self.questions = categories.into();
        self.priorities
            .insert(first_question.to_string(), QuestionPriority::NiceToHave);
        Ok(())
    }

    fn category_mut(&mut self, category: &str) -> Result<&mut Vec<String>, PlanError> {
        self.questions
            .questions_mut(category)
            .ok_or_else(|| PlanError::UnknownCategory(category.to_string()))
    }

    /// Explicit priorities of questions still in the plan; entries loaded for
    /// questions that are gone are skipped.
    fn planned_priorities(&self) -> impl Iterator<Item = QuestionPriority> + '_ {
        self.priorities
            .iter()
            .filter(|(question, _)| self.contains_question(question))
            .map(|(_, priority)| *priority)
    }

    fn contains_question(&self, question: &str) -> bool {
        self.questions
            .iter()
            .any(|(_, questions)| questions.iter().any(|q| q == question))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexMap;

    fn sample_plan() -> InterviewPlan {
        let mut categories = IndexMap::new();
        categories.insert(
            "Values & Life Lessons".to_string(),
            vec![
                "What's worth fighting for?".to_string(),
                "How do you define a good life?".to_string(),
            ],
        );
        categories.insert(
            "Reflection & Legacy".to_string(),
            vec!["What are you most proud of?".to_string()],
        );
        InterviewPlan::from_selection(categories.into())
    }

    #[test]
    fn priorities_default_to_nice_to_have() {
        let mut plan = sample_plan();
        assert_eq!(
            plan.priority("What's worth fighting for?"),
            QuestionPriority::NiceToHave
        );
        assert!(!plan.has_priorities());

        plan.set_priority("What's worth fighting for?", QuestionPriority::MustAsk)
            .expect("priority set");
        assert_eq!(plan.must_ask_count(), 1);
        assert_eq!(
            plan.explicit_priority("What's worth fighting for?"),
            Some(QuestionPriority::MustAsk)
        );
    }

    #[test]
    fn edit_carries_priority_to_new_text() {
        let mut plan = sample_plan();
        plan.set_priority("How do you define a good life?", QuestionPriority::Optional)
            .expect("priority set");

        plan.edit_question("Values & Life Lessons", 2, "  What makes a life well lived?  ")
            .expect("edit applies");

        let questions = plan
            .questions()
            .questions("Values & Life Lessons")
            .expect("category kept");
        assert_eq!(questions[1], "What makes a life well lived?");
        assert_eq!(
            plan.explicit_priority("What makes a life well lived?"),
            Some(QuestionPriority::Optional)
        );
        assert!(plan
            .explicit_priority("How do you define a good life?")
            .is_none());
    }

    #[test]
    fn removing_last_question_drops_category() {
        let mut plan = sample_plan();
        plan.edit_question("Reflection & Legacy", 1, "   ")
            .expect("blank edit removes");

        assert_eq!(
            plan.questions().category_names(),
            vec!["Values & Life Lessons"]
        );
        assert_eq!(plan.question_count(), 2);
        assert_eq!(
            plan.remove_question("Values & Life Lessons", 3),
            Err(PlanError::QuestionOutOfRange {
                category: "Values & Life Lessons".to_string(),
                number: 3
            })
        );
    }

    #[test]
    fn add_question_and_category() {
        let mut plan = sample_plan();
        plan.add_question("Reflection & Legacy", "What would you tell your grandchildren?")
            .expect("question added");
        plan.add_category("Hobbies & Pastimes", "What do you do for fun?")
            .expect("category added");

        assert_eq!(plan.category_count(), 3);
        assert_eq!(
            plan.questions().category_names().last(),
            Some(&"Hobbies & Pastimes")
        );
        assert_eq!(
            plan.add_category("Hobbies & Pastimes", "Another?"),
            Err(PlanError::DuplicateCategory("Hobbies & Pastimes".to_string()))
        );
        assert_eq!(
            plan.add_category(" ", "Question?"),
            Err(PlanError::BlankCategoryName)
        );
        assert_eq!(
            plan.add_question("Missing", "Question?"),
            Err(PlanError::UnknownCategory("Missing".to_string()))
        );
    }

    #[test]
    fn priorities_only_apply_to_planned_questions() {
        let mut plan = sample_plan();
        assert_eq!(
            plan.set_priority("Typo question not in plan?", QuestionPriority::MustAsk),
            Err(PlanError::UnknownQuestion(
                "Typo question not in plan?".to_string()
            ))
        );
        assert_eq!(plan.must_ask_count(), 0);
        assert!(!plan.has_priorities());
    }

    #[test]
    fn stale_priorities_are_not_counted() {
        let json = r#"{
            "questions": {"Reflection & Legacy": ["What are you most proud of?"]},
            "priorities": {"A question that was removed?": "Must Ask"}
        }"#;
        let plan: InterviewPlan = serde_json::from_str(json).expect("plan parses");

        assert_eq!(plan.must_ask_count(), 0);
        assert!(!plan.has_priorities());
    }

    #[test]
    fn priority_parses_labels() {
        assert_eq!(
            "must ask".parse::<QuestionPriority>(),
            Ok(QuestionPriority::MustAsk)
        );
        assert_eq!(
            "Nice-to-have".parse::<QuestionPriority>(),
            Ok(QuestionPriority::NiceToHave)
        );
        assert!("urgent".parse::<QuestionPriority>().is_err());
    }
}
