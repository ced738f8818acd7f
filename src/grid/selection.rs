use std::collections::HashSet;

/// Set of selected tile indices, bounded by the number of items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionState {
    selected: HashSet<usize>,
    total: usize,
}

impl SelectionState {
    pub fn new(total: usize) -> Self {
        Self {
            selected: HashSet::new(),
            total,
        }
    }

    /// Flips membership of `index`. Returns whether it is selected afterwards.
    /// Out-of-range indices are ignored.
    pub fn toggle(&mut self, index: usize) -> bool {
        if index >= self.total {
            return false;
        }
        if self.selected.contains(&index) {
            self.selected.remove(&index);
            false
        } else {
            self.selected.insert(index);
            true
        }
    }

    pub fn clear_all(&mut self) {
        self.selected.clear();
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selected.contains(&index)
    }

    pub fn count(&self) -> usize {
        self.selected.len()
    }

    pub fn can_clear(&self) -> bool {
        !self.selected.is_empty()
    }

    /// Selected indices in ascending order.
    pub fn indices(&self) -> Vec<usize> {
        let mut indices: Vec<usize> = self.selected.iter().copied().collect();
        indices.sort_unstable();
        indices
    }

    pub fn counter_label(&self) -> String {
        format!("Selected: {} of {}", self.count(), self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_empty() {
        let selection = SelectionState::new(24);
        assert_eq!(selection.count(), 0);
        assert!(!selection.can_clear());
        assert_eq!(selection.counter_label(), "Selected: 0 of 24");
    }

    #[test]
    fn test_toggle_twice_restores_previous_state() {
        let mut selection = SelectionState::new(24);
        selection.toggle(3);
        selection.toggle(9);

        for i in 0..24 {
            let before = selection.clone();
            selection.toggle(i);
            selection.toggle(i);
            assert_eq!(selection, before, "index {}", i);
        }
    }

    #[test]
    fn test_toggle_flips_membership() {
        let mut selection = SelectionState::new(24);
        for i in 0..24 {
            let was_selected = selection.is_selected(i);
            let now_selected = selection.toggle(i);
            assert_eq!(now_selected, !was_selected);
            assert_eq!(selection.is_selected(i), !was_selected);
        }
    }

    #[test]
    fn test_toggle_out_of_range_is_ignored() {
        let mut selection = SelectionState::new(24);
        assert!(!selection.toggle(24));
        assert!(!selection.toggle(usize::MAX));
        assert_eq!(selection.count(), 0);
    }

    #[test]
    fn test_count_never_exceeds_total() {
        let mut selection = SelectionState::new(24);
        for i in 0..30 {
            selection.toggle(i);
        }
        assert_eq!(selection.count(), 24);
        assert_eq!(selection.counter_label(), "Selected: 24 of 24");
    }

    #[test]
    fn test_clear_all_empties_any_state() {
        let mut selection = SelectionState::new(24);
        selection.clear_all();
        assert_eq!(selection.count(), 0);

        for i in (0..24).step_by(3) {
            selection.toggle(i);
        }
        assert!(selection.can_clear());
        selection.clear_all();
        assert_eq!(selection.count(), 0);
        assert!(!selection.can_clear());
    }

    #[test]
    fn test_selection_scenario() {
        let mut selection = SelectionState::new(24);

        selection.toggle(0);
        assert_eq!(selection.indices(), vec![0]);
        assert_eq!(selection.counter_label(), "Selected: 1 of 24");

        selection.toggle(5);
        assert_eq!(selection.indices(), vec![0, 5]);
        assert_eq!(selection.counter_label(), "Selected: 2 of 24");

        selection.toggle(0);
        assert_eq!(selection.indices(), vec![5]);
        assert_eq!(selection.counter_label(), "Selected: 1 of 24");

        selection.clear_all();
        assert!(selection.indices().is_empty());
        assert_eq!(selection.counter_label(), "Selected: 0 of 24");
        assert!(!selection.can_clear());
    }
}
