//! Ordered lookup by identifier.

use crate::error::{InventoryError, Result};
use crate::models::Identified;
use std::collections::HashMap;

/// Entities in source order, with O(1) lookup by id.
#[derive(Debug, Clone)]
pub struct IdIndex<T> {
    items: Vec<T>,
    positions: HashMap<String, usize>,
}

impl<T: Identified> IdIndex<T> {
    pub fn new() -> IdIndex<T> {
        IdIndex {
            items: Vec::new(),
            positions: HashMap::new(),
        }
    }

    /// Add an entity. A second entity with the same id is malformed input.
    pub fn insert(&mut self, collection: &str, item: T) -> Result<()> {
        let id = item.id().to_string();
        if self.positions.contains_key(&id) {
            return Err(InventoryError::malformed(
                collection,
                id,
                "duplicate id in collection",
            ));
        }
        self.positions.insert(id, self.items.len());
        self.items.push(item);
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.positions.get(id).map(|&pos| &self.items[pos])
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut T> {
        match self.positions.get(id) {
            Some(&pos) => self.items.get_mut(pos),
            None => None,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.items.iter_mut()
    }
}

impl<T: Identified> Default for IdIndex<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Item(&'static str, u32);

    impl Identified for Item {
        fn id(&self) -> &str {
            self.0
        }
    }

    #[test]
    fn test_keeps_source_order() {
        let mut index = IdIndex::new();
        for (i, id) in ["c", "a", "b"].into_iter().enumerate() {
            index.insert("items", Item(id, i as u32)).unwrap();
        }
        let ids: Vec<&str> = index.iter().map(|i| i.0).collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
        assert_eq!(index.get("a").map(|i| i.1), Some(1));
        assert!(index.get("z").is_none());
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let mut index = IdIndex::new();
        index.insert("items", Item("a", 0)).unwrap();
        let err = index.insert("items", Item("a", 1)).unwrap_err();
        assert!(matches!(err, InventoryError::MalformedInput { .. }));
        assert_eq!(index.len(), 1);
    }
}
