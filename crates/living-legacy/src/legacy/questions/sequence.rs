use indexmap::IndexSet;

/// Insertion-ordered set of category names with constant-time membership.
///
/// The first insertion of a name fixes its position; later inserts of the
/// same name are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategorySequence {
    names: IndexSet<&'static str>,
}

impl CategorySequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` when the name was not already present.
    pub fn insert(&mut self, name: &'static str) -> bool {
        self.names.insert(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Places `name` last, inserting it when absent.
    pub fn move_to_end(&mut self, name: &'static str) {
        self.names.shift_remove(name);
        self.names.insert(name);
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.names.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn last(&self) -> Option<&'static str> {
        self.names.last().copied()
    }
}

impl FromIterator<&'static str> for CategorySequence {
    fn from_iter<I: IntoIterator<Item = &'static str>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().collect(),
        }
    }
}

impl Extend<&'static str> for CategorySequence {
    fn extend<I: IntoIterator<Item = &'static str>>(&mut self, iter: I) {
        self.names.extend(iter);
    }
}
