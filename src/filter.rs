/// GridState Predicate Engine and Filter Index
///
/// The predicate engine derives the visible subset of a record snapshot
/// from a free-text query plus per-column filter sets. The filter index
/// derives the distinct value list (with occurrence counts) that feeds a
/// column's filter popover.
///
/// Both are pure functions of their inputs: the engine holds no record
/// data and never mutates the snapshot.

use crate::value::FieldValue;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Per-column filter state: a mapping from column id to the set of
/// accepted string values. An absent or empty set means "no restriction
/// on this column".
///
/// # Examples
///
/// ```
/// use gridstate::FilterSet;
///
/// let mut filters = FilterSet::new();
/// filters.toggle_value("status", "published");
/// assert!(filters.is_value_selected("status", "published"));
///
/// // Toggling again removes the value and deactivates the column.
/// filters.toggle_value("status", "published");
/// assert!(!filters.is_active());
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilterSet {
    columns: HashMap<String, HashSet<String>>,
}

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips membership of `value` in the column's accepted set.
    /// Removing the last value drops the column entry entirely, so an
    /// exhausted filter reads as "no restriction" rather than "match nothing".
    pub fn toggle_value(&mut self, column: &str, value: &str) {
        let set = self.columns.entry(column.to_string()).or_default();
        if !set.remove(value) {
            set.insert(value.to_string());
        }
        if set.is_empty() {
            self.columns.remove(column);
        }
    }

    /// Removes every filter on every column.
    pub fn clear(&mut self) {
        self.columns.clear();
    }

    /// Removes the filter on a single column.
    pub fn clear_column(&mut self, column: &str) {
        self.columns.remove(column);
    }

    /// Returns the accepted value set for a column, if one is active.
    pub fn accepted(&self, column: &str) -> Option<&HashSet<String>> {
        self.columns.get(column)
    }

    pub fn is_value_selected(&self, column: &str, value: &str) -> bool {
        self.columns
            .get(column)
            .map(|set| set.contains(value))
            .unwrap_or(false)
    }

    /// True if any column carries a non-empty filter.
    pub fn is_active(&self) -> bool {
        !self.columns.is_empty()
    }

    /// Column ids with an active filter, in no particular order.
    pub fn active_columns(&self) -> Vec<&str> {
        self.columns.keys().map(|k| k.as_str()).collect()
    }

    /// Iterates over (column, accepted set) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &HashSet<String>)> {
        self.columns.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// Computes the indices of records surviving the search query and every
/// active column filter, preserving snapshot order.
///
/// A record is visible iff the lower-cased text from `search_text`
/// contains the lower-cased query as a substring (an empty query always
/// passes) AND, for every column with an active filter, the record's
/// field value for that column intersects the accepted set. Scalar
/// fields test direct membership; list fields pass when at least one
/// element is accepted (OR within the row, AND across columns).
pub fn visible_indices<R>(
    records: &[R],
    query: &str,
    filters: &FilterSet,
    field: &dyn Fn(&R, &str) -> FieldValue,
    search_text: &dyn Fn(&R) -> String,
) -> Vec<usize> {
    let needle = query.trim().to_lowercase();

    records
        .iter()
        .enumerate()
        .filter(|&(_, record)| {
            if !needle.is_empty() && !search_text(record).to_lowercase().contains(&needle) {
                return false;
            }
            filters
                .iter()
                .all(|(column, accepted)| field(record, column).matches_filter(accepted))
        })
        .map(|(index, _)| index)
        .collect()
}

/// A distinct value and the number of records carrying it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueCount {
    pub value: String,
    pub count: usize,
}

/// Derives the distinct value set for a column with occurrence counts,
/// sorted by count descending (ties broken by value, ascending, so the
/// ordering is deterministic).
///
/// The scan deliberately covers the whole unfiltered snapshot: filter
/// option lists must not shrink as other filters narrow the view. List
/// fields contribute one count per element.
///
/// # Examples
///
/// ```
/// use gridstate::{unique_values, FieldValue};
///
/// let records = vec!["draft", "published", "published"];
/// let counts = unique_values(&records, "status", &|r: &&str, _| FieldValue::from(*r));
/// assert_eq!(counts[0].value, "published");
/// assert_eq!(counts[0].count, 2);
/// ```
pub fn unique_values<R>(
    records: &[R],
    column: &str,
    field: &dyn Fn(&R, &str) -> FieldValue,
) -> Vec<ValueCount> {
    let mut counts: HashMap<String, usize> = HashMap::new();

    for record in records {
        for term in field(record, column).index_terms() {
            *counts.entry(term).or_insert(0) += 1;
        }
    }

    let mut result: Vec<ValueCount> = counts
        .into_iter()
        .map(|(value, count)| ValueCount { value, count })
        .collect();

    result.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.value.cmp(&b.value)));
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row {
        id: &'static str,
        status: &'static str,
        tags: Vec<&'static str>,
    }

    fn sample_rows() -> Vec<Row> {
        vec![
            Row { id: "1", status: "published", tags: vec!["a", "b"] },
            Row { id: "2", status: "draft", tags: vec!["b"] },
        ]
    }

    fn field(row: &Row, column: &str) -> FieldValue {
        match column {
            "id" => FieldValue::from(row.id),
            "status" => FieldValue::from(row.status),
            "tags" => FieldValue::from(row.tags.clone()),
            _ => FieldValue::Null,
        }
    }

    fn search_text(row: &Row) -> String {
        format!("{} {}", row.id, row.status)
    }

    #[test]
    fn test_empty_query_and_filters_pass_everything() {
        let rows = sample_rows();
        let visible = visible_indices(&rows, "", &FilterSet::new(), &field, &search_text);
        assert_eq!(visible, vec![0, 1]);
    }

    #[test]
    fn test_scalar_filter() {
        let rows = sample_rows();
        let mut filters = FilterSet::new();
        filters.toggle_value("status", "published");

        let visible = visible_indices(&rows, "", &filters, &field, &search_text);
        assert_eq!(visible, vec![0]);
    }

    #[test]
    fn test_list_filter_or_semantics() {
        let rows = sample_rows();
        let mut filters = FilterSet::new();
        filters.toggle_value("tags", "b");

        // Both rows carry tag "b".
        let visible = visible_indices(&rows, "", &filters, &field, &search_text);
        assert_eq!(visible, vec![0, 1]);
    }

    #[test]
    fn test_filters_and_across_columns() {
        let rows = sample_rows();
        let mut filters = FilterSet::new();
        filters.toggle_value("tags", "b");
        filters.toggle_value("status", "draft");

        let visible = visible_indices(&rows, "", &filters, &field, &search_text);
        assert_eq!(visible, vec![1]);
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let rows = sample_rows();
        let visible = visible_indices(&rows, "PUBLI", &FilterSet::new(), &field, &search_text);
        assert_eq!(visible, vec![0]);

        let visible = visible_indices(&rows, "nomatch", &FilterSet::new(), &field, &search_text);
        assert!(visible.is_empty());
    }

    #[test]
    fn test_search_composes_with_filters() {
        let rows = sample_rows();
        let mut filters = FilterSet::new();
        filters.toggle_value("tags", "b");

        // Search narrows the filter result further.
        let visible = visible_indices(&rows, "draft", &filters, &field, &search_text);
        assert_eq!(visible, vec![1]);
    }

    #[test]
    fn test_unknown_filter_column_hides_all_rows() {
        // A filter on a column the accessor does not know yields Null for
        // every row, and Null never matches, so nothing is visible. The
        // grid controller guards against this by refusing filters on
        // unknown columns before they reach the engine.
        let rows = sample_rows();
        let mut filters = FilterSet::new();
        filters.toggle_value("missing", "x");

        let visible = visible_indices(&rows, "", &filters, &field, &search_text);
        assert!(visible.is_empty());
    }

    #[test]
    fn test_toggle_removes_and_drops_empty_sets() {
        let mut filters = FilterSet::new();
        filters.toggle_value("status", "draft");
        filters.toggle_value("status", "draft");
        assert!(!filters.is_active());
        assert!(filters.accepted("status").is_none());
    }

    #[test]
    fn test_unique_values_counts_and_order() {
        let rows = sample_rows();
        let counts = unique_values(&rows, "tags", &field);
        assert_eq!(
            counts,
            vec![
                ValueCount { value: "b".to_string(), count: 2 },
                ValueCount { value: "a".to_string(), count: 1 },
            ]
        );
    }

    #[test]
    fn test_unique_values_ignore_active_filters() {
        // The index reads the unfiltered snapshot by construction; callers
        // pass the full record slice regardless of filter state.
        let rows = sample_rows();
        let counts = unique_values(&rows, "status", &field);
        assert_eq!(counts.len(), 2);
    }

    #[test]
    fn test_unique_values_unknown_column_is_empty() {
        let rows = sample_rows();
        assert!(unique_values(&rows, "missing", &field).is_empty());
    }
}
