use super::bank::{QuestionBank, CLOSING_CATEGORY};
use super::sequence::CategorySequence;
use crate::legacy::catalog::LegacyCatalog;
use crate::legacy::domain::{ProjectScope, ScopingAnswer};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Ordered category name to question list mapping produced for one scope.
///
/// Question lists are owned copies; editing them never reaches the pool.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategorySelection {
    categories: IndexMap<String, Vec<String>>,
}

impl CategorySelection {
    pub fn category_names(&self) -> Vec<&str> {
        self.categories.keys().map(String::as_str).collect()
    }

    pub fn questions(&self, category: &str) -> Option<&[String]> {
        self.categories.get(category).map(Vec::as_slice)
    }

    pub fn questions_mut(&mut self, category: &str) -> Option<&mut Vec<String>> {
        self.categories.get_mut(category)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.categories
            .iter()
            .map(|(name, questions)| (name.as_str(), questions.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn total_questions(&self) -> usize {
        self.categories.values().map(Vec::len).sum()
    }

    pub fn into_inner(self) -> IndexMap<String, Vec<String>> {
        self.categories
    }
}

impl From<IndexMap<String, Vec<String>>> for CategorySelection {
    fn from(categories: IndexMap<String, Vec<String>>) -> Self {
        Self { categories }
    }
}

/// Derives the interview categories for a [`ProjectScope`].
///
/// Never fails: unknown archetypes, unmapped labels, and pool misses all
/// contribute nothing.
#[derive(Debug, Clone, Copy)]
pub struct QuestionSelector<'a> {
    catalog: &'a LegacyCatalog,
    bank: &'a QuestionBank,
}

impl QuestionSelector<'static> {
    pub fn standard() -> Self {
        Self::new(LegacyCatalog::shared(), QuestionBank::shared())
    }
}

impl<'a> QuestionSelector<'a> {
    pub fn new(catalog: &'a LegacyCatalog, bank: &'a QuestionBank) -> Self {
        Self { catalog, bank }
    }

    /// Ordered, de-duplicated category names before pool resolution.
    pub fn category_sequence(&self, scope: &ProjectScope) -> CategorySequence {
        let mut sequence: CategorySequence = self
            .bank
            .default_categories(&scope.archetype)
            .iter()
            .copied()
            .collect();

        if let Ok(archetype) = self.catalog.get_archetype(&scope.archetype) {
            for question in &archetype.questions {
                if !question.kind.drives_expansion() {
                    continue;
                }
                let Some(answer) = scope.answer(question.key) else {
                    continue;
                };

                match answer {
                    ScopingAnswer::Selections(labels) => {
                        for label in labels {
                            self.expand(&mut sequence, label);
                        }
                    }
                    ScopingAnswer::Text(label) => self.expand(&mut sequence, label),
                }
            }
        }

        sequence.move_to_end(CLOSING_CATEGORY);
        sequence
    }

    pub fn select(&self, scope: &ProjectScope) -> CategorySelection {
        let sequence = self.category_sequence(scope);
        let mut categories = IndexMap::with_capacity(sequence.len());

        for name in sequence.iter() {
            match self.bank.category(name) {
                Some(category) if !category.questions.is_empty() => {
                    let questions = category
                        .questions
                        .iter()
                        .map(|question| question.to_string())
                        .collect();
                    categories.insert(name.to_string(), questions);
                }
                _ => debug!(category = name, "category has no questions in the pool"),
            }
        }

        debug!(
            archetype = %scope.archetype,
            categories = ?categories.keys().collect::<Vec<_>>(),
            "derived interview categories"
        );

        CategorySelection { categories }
    }

    fn expand(&self, sequence: &mut CategorySequence, label: &str) {
        if let Some(category) = self.bank.category_for_theme(label) {
            sequence.insert(category);
        }
    }
}
