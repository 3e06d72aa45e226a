//! Ordered, identity-keyed in-memory collection.
//!
//! # Responsibility
//! - Own records in insertion order.
//! - Provide exact-match lookup and removal by identity.
//!
//! # Invariants
//! - Iteration order equals append order; removal never reorders the rest.
//! - Lookups compare ids exactly; there is no partial matching.

use crate::model::Identified;

/// Owned ordered collection keyed by `Identified::id`.
///
/// Lookup is a linear scan; boards hold tens of records, not thousands.
#[derive(Debug, Clone)]
pub struct Collection<T: Identified> {
    items: Vec<T>,
}

impl<T: Identified> Default for Collection<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Identified> Collection<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|item| item.id() == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut T> {
        self.items.iter_mut().find(|item| item.id() == id)
    }

    pub fn at_mut(&mut self, index: usize) -> Option<&mut T> {
        self.items.get_mut(index)
    }

    /// Detaches the record with `id`, returning it when present.
    pub fn remove(&mut self, id: &str) -> Option<T> {
        let index = self.position(id)?;
        Some(self.items.remove(index))
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::Collection;
    use crate::model::Identified;

    #[derive(Debug, PartialEq)]
    struct Item(&'static str);

    impl Identified for Item {
        fn id(&self) -> &str {
            self.0
        }
    }

    #[test]
    fn keeps_insertion_order_across_removal() {
        let mut items = Collection::new();
        items.push(Item("a"));
        items.push(Item("b"));
        items.push(Item("c"));

        assert_eq!(items.remove("b"), Some(Item("b")));
        let ids: Vec<&str> = items.iter().map(|item| item.0).collect();
        assert_eq!(ids, vec!["a", "c"]);
    }

    #[test]
    fn lookup_is_exact_match_only() {
        let mut items = Collection::new();
        items.push(Item("abc-123"));

        assert!(items.get("abc").is_none());
        assert!(items.get("abc-123").is_some());
        assert_eq!(items.remove("missing"), None);
        assert_eq!(items.len(), 1);
    }
}
