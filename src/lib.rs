/// GridState - Headless Data-Grid State Engine
///
/// The state machine behind tabular list views: free-text search,
/// per-column set filtering, stable single-column sorting, row
/// selection, and a column layout manager with drag-to-reorder and live
/// resize, composed behind one generic `GridController`.
///
/// Records stay opaque and caller-owned; the engine holds display state
/// only and reaches record fields through consumer-supplied accessors.

pub mod filter;
pub mod grid;
pub mod layout;
pub mod selection;
pub mod sort;
pub mod value;

pub use filter::{unique_values, visible_indices, FilterSet, ValueCount};
pub use grid::{GridController, GridViewState};
pub use layout::{ColumnDef, ColumnLayout, HeaderGesture, DEFAULT_MIN_WIDTH};
pub use selection::RowSelection;
pub use sort::{sort_indices, SortOrder, SortSpec};
pub use value::FieldValue;
