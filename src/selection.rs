/// GridState Row Selection
///
/// Tracks the set of selected record ids for one grid instance.
/// Selection is independent of filter state: an id selected while its
/// row was visible stays selected if a later filter hides the row. The
/// header "select all" checkbox state is derived from the visible ids,
/// never stored.

use std::collections::HashSet;

/// The set of selected record ids.
///
/// # Examples
///
/// ```
/// use gridstate::RowSelection;
///
/// let mut selection = RowSelection::new();
/// selection.toggle("1");
/// assert!(selection.is_selected("1"));
///
/// selection.select_all(&["1".to_string(), "2".to_string()], true);
/// assert_eq!(selection.len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RowSelection {
    ids: HashSet<String>,
}

impl RowSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips membership of `id` in the selection set.
    pub fn toggle(&mut self, id: &str) {
        if !self.ids.remove(id) {
            self.ids.insert(id.to_string());
        }
    }

    /// Replaces the selection with exactly the visible ids when `checked`,
    /// or empties it when unchecked. "Select all" is scoped to what is on
    /// screen, not additive: a prior selection of hidden rows is dropped.
    /// An empty visible set clears the selection.
    pub fn select_all(&mut self, visible_ids: &[String], checked: bool) {
        if checked {
            self.ids = visible_ids.iter().cloned().collect();
        } else {
            self.ids.clear();
        }
    }

    /// Empties the selection.
    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Derived state for the header checkbox: true iff the visible set is
    /// non-empty, the selection has the same size, and every visible id is
    /// selected. The explicit per-id check guards against a stale
    /// selection of different rows coincidentally matching the count.
    pub fn is_all_selected(&self, visible_ids: &[String]) -> bool {
        !visible_ids.is_empty()
            && self.ids.len() == visible_ids.len()
            && visible_ids.iter().all(|id| self.ids.contains(id))
    }

    /// Iterates over the selected ids, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(|id| id.as_str())
    }
}
