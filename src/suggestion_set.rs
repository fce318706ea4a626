//! Snapshot of suggestion data for one query
//!
//! A `SuggestionSet` is produced by every accepted fetch and fully replaces
//! the previous one. The items are opaque to the controller: it only indexes
//! into them and hands the selected one to the commit function.

/// Ordered suggestions together with the query that produced them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionSet<T> {
    query: String,
    items: Vec<T>,
}

impl<T> SuggestionSet<T> {
    pub fn new(query: impl Into<String>, items: Vec<T>) -> Self {
        Self {
            query: query.into(),
            items,
        }
    }

    /// The query this set was fetched for
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }
}

impl<'a, T> IntoIterator for &'a SuggestionSet<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
#[path = "suggestion_set_tests.rs"]
mod suggestion_set_tests;
