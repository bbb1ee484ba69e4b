//! Multi-select membership. Order is insertion order, membership unique.

use crate::host::ObjectId;

#[derive(Debug, Default)]
pub struct SelectionManager {
    selected: Vec<ObjectId>,
}

impl SelectionManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select a single object, replacing any previous selection.
    pub fn select(&mut self, id: ObjectId) {
        self.selected.clear();
        self.selected.push(id);
    }

    /// Add to the current selection. Duplicate adds are no-ops.
    pub fn add_to_selection(&mut self, id: ObjectId) {
        if !self.selected.contains(&id) {
            self.selected.push(id);
        }
    }

    pub fn remove_from_selection(&mut self, id: ObjectId) {
        self.selected.retain(|s| *s != id);
    }

    /// Toggle membership. Returns true when the object is selected afterwards.
    pub fn toggle_selection(&mut self, id: ObjectId) -> bool {
        if self.is_selected(id) {
            self.remove_from_selection(id);
            false
        } else {
            self.selected.push(id);
            true
        }
    }

    pub fn is_selected(&self, id: ObjectId) -> bool {
        self.selected.contains(&id)
    }

    pub fn get_selected(&self) -> &[ObjectId] {
        &self.selected
    }

    pub fn selection_count(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_replaces_previous() {
        let mut sel = SelectionManager::new();
        sel.select(ObjectId(1));
        sel.select(ObjectId(2));
        assert_eq!(sel.get_selected(), &[ObjectId(2)]);
    }

    #[test]
    fn test_duplicate_add_is_noop() {
        let mut sel = SelectionManager::new();
        sel.add_to_selection(ObjectId(7));
        sel.add_to_selection(ObjectId(7));
        assert_eq!(sel.selection_count(), 1);
    }

    #[test]
    fn test_toggle_twice_restores_membership() {
        let mut sel = SelectionManager::new();
        sel.add_to_selection(ObjectId(1));
        assert!(!sel.toggle_selection(ObjectId(1)));
        assert!(sel.toggle_selection(ObjectId(1)));
        assert!(sel.is_selected(ObjectId(1)));
    }

    #[test]
    fn test_add_order_does_not_change_membership() {
        let mut a = SelectionManager::new();
        a.add_to_selection(ObjectId(1));
        a.add_to_selection(ObjectId(2));

        let mut b = SelectionManager::new();
        b.add_to_selection(ObjectId(2));
        b.add_to_selection(ObjectId(1));

        for id in [ObjectId(1), ObjectId(2)] {
            assert_eq!(a.is_selected(id), b.is_selected(id));
        }
        assert_eq!(a.selection_count(), b.selection_count());
    }
}
