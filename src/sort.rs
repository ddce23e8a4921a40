/// GridState Sort Engine
///
/// Applies a single active (column, direction) pair to an
/// already-filtered index list. Sorting is stable: records comparing
/// equal keep their relative order from the input, which preserves the
/// meaningful default order established upstream by search and filters.

use crate::value::FieldValue;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Sort order specification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    /// Ascending order (smallest first)
    Ascending,
    /// Descending order (largest first)
    Descending,
}

impl SortOrder {
    pub fn reversed(self) -> SortOrder {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }
}

/// The active sort: one column and a direction. At most one sort column
/// is active at a time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub column: String,
    pub order: SortOrder,
}

impl SortSpec {
    /// Create an ascending sort on the given column.
    pub fn ascending(column: impl Into<String>) -> Self {
        SortSpec {
            column: column.into(),
            order: SortOrder::Ascending,
        }
    }

    /// Create a descending sort on the given column.
    pub fn descending(column: impl Into<String>) -> Self {
        SortSpec {
            column: column.into(),
            order: SortOrder::Descending,
        }
    }
}

/// Sorts a filtered index list in place according to `spec`.
///
/// No-op when `spec` is `None`. Null field values sort after every
/// non-null value regardless of direction; the direction reverses only
/// the comparison between two non-null values.
pub fn sort_indices<R>(
    indices: &mut [usize],
    records: &[R],
    spec: Option<&SortSpec>,
    field: &dyn Fn(&R, &str) -> FieldValue,
) {
    let Some(spec) = spec else {
        return;
    };

    indices.sort_by(|&a, &b| {
        let val_a = records.get(a).map(|r| field(r, &spec.column));
        let val_b = records.get(b).map(|r| field(r, &spec.column));
        compare_values(&val_a, &val_b, spec.order)
    });
}

/// Compare two field values according to the sort order.
fn compare_values(
    val_a: &Option<FieldValue>,
    val_b: &Option<FieldValue>,
    order: SortOrder,
) -> Ordering {
    let a_is_null = val_a.as_ref().map(|v| v.is_null()).unwrap_or(true);
    let b_is_null = val_b.as_ref().map(|v| v.is_null()).unwrap_or(true);

    // Nulls always sort last, independent of direction.
    match (a_is_null, b_is_null) {
        (true, true) => return Ordering::Equal,
        (true, false) => return Ordering::Greater,
        (false, true) => return Ordering::Less,
        (false, false) => {}
    }

    let base_cmp = match (val_a.as_ref().unwrap(), val_b.as_ref().unwrap()) {
        (FieldValue::Number(a), FieldValue::Number(b)) => {
            a.partial_cmp(b).unwrap_or(Ordering::Equal)
        }
        (FieldValue::Text(a), FieldValue::Text(b)) => a.cmp(b),
        (FieldValue::Bool(a), FieldValue::Bool(b)) => a.cmp(b),
        (FieldValue::List(a), FieldValue::List(b)) => a.cmp(b),
        // Mixed types - compare by debug form for deterministic ordering
        (a, b) => format!("{:?}", a).cmp(&format!("{:?}", b)),
    };

    match order {
        SortOrder::Ascending => base_cmp,
        SortOrder::Descending => base_cmp.reverse(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row {
        label: &'static str,
        rank: Option<f64>,
    }

    fn field(row: &Row, column: &str) -> FieldValue {
        match column {
            "label" => FieldValue::from(row.label),
            "rank" => FieldValue::from(row.rank),
            _ => FieldValue::Null,
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { label: "b", rank: Some(2.0) },
            Row { label: "a", rank: Some(3.0) },
            Row { label: "b", rank: Some(1.0) },
        ]
    }

    #[test]
    fn test_no_spec_is_noop() {
        let records = rows();
        let mut indices = vec![2, 0, 1];
        sort_indices(&mut indices, &records, None, &field);
        assert_eq!(indices, vec![2, 0, 1]);
    }

    #[test]
    fn test_ascending_text() {
        let records = rows();
        let mut indices = vec![0, 1, 2];
        sort_indices(&mut indices, &records, Some(&SortSpec::ascending("label")), &field);
        assert_eq!(indices, vec![1, 0, 2]);
    }

    #[test]
    fn test_stability_on_ties() {
        // Rows 0 and 2 share label "b"; their input order must survive
        // under both directions.
        let records = rows();

        let mut ascending = vec![0, 1, 2];
        sort_indices(&mut ascending, &records, Some(&SortSpec::ascending("label")), &field);
        assert_eq!(ascending, vec![1, 0, 2]);

        let mut descending = vec![0, 1, 2];
        sort_indices(&mut descending, &records, Some(&SortSpec::descending("label")), &field);
        assert_eq!(descending, vec![0, 2, 1]);
    }

    #[test]
    fn test_numeric_ordering_is_not_lexicographic() {
        let records = vec![
            Row { label: "x", rank: Some(10.0) },
            Row { label: "y", rank: Some(9.0) },
        ];
        let mut indices = vec![0, 1];
        sort_indices(&mut indices, &records, Some(&SortSpec::ascending("rank")), &field);
        assert_eq!(indices, vec![1, 0]);
    }

    #[test]
    fn test_nulls_sort_last_in_both_directions() {
        let records = vec![
            Row { label: "x", rank: None },
            Row { label: "y", rank: Some(1.0) },
            Row { label: "z", rank: Some(2.0) },
        ];

        let mut ascending = vec![0, 1, 2];
        sort_indices(&mut ascending, &records, Some(&SortSpec::ascending("rank")), &field);
        assert_eq!(ascending, vec![1, 2, 0]);

        let mut descending = vec![0, 1, 2];
        sort_indices(&mut descending, &records, Some(&SortSpec::descending("rank")), &field);
        assert_eq!(descending, vec![2, 1, 0]);
    }

    #[test]
    fn test_unknown_column_leaves_order_unchanged() {
        // Every value is Null, every pair compares equal, and the stable
        // sort keeps the input order.
        let records = rows();
        let mut indices = vec![0, 1, 2];
        sort_indices(&mut indices, &records, Some(&SortSpec::ascending("missing")), &field);
        assert_eq!(indices, vec![0, 1, 2]);
    }
}
