/// GridState Grid Controller
///
/// The composition root wiring the predicate engine, sort engine,
/// selection tracker, and column layout into one view-model for a list
/// view. The controller owns display state only; records are an opaque,
/// read-only snapshot refreshed by the caller, reached exclusively
/// through consumer-supplied accessors, so one controller type serves
/// every list view regardless of row shape.
///
/// The derived pipeline (records -> predicate -> sort) is recomputed
/// lazily and memoized against a generation counter that only search,
/// filter, sort, and snapshot changes advance. Layout work such as a
/// column resize never invalidates the row pipeline.

use crate::filter::{unique_values, visible_indices, FilterSet, ValueCount};
use crate::layout::{ColumnDef, ColumnLayout, HeaderGesture};
use crate::selection::RowSelection;
use crate::sort::{sort_indices, SortOrder, SortSpec};
use crate::value::FieldValue;
use log::debug;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::collections::BTreeMap;

/// Serializable snapshot of a grid's display state, for debugging and
/// devtool surfaces. Filter sets are flattened to sorted lists so the
/// output is deterministic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridViewState {
    pub search: String,
    pub sort: Option<SortSpec>,
    pub filters: BTreeMap<String, Vec<String>>,
    pub columns: Vec<ColumnDef>,
}

#[derive(Debug, Default)]
struct VisibleCache {
    indices: Vec<usize>,
    /// Generation the cache was computed at; zero means never computed.
    generation: u64,
}

/// Display-state controller for one tabular list view.
///
/// # Examples
///
/// ```
/// use gridstate::{ColumnDef, FieldValue, GridController};
///
/// struct Article {
///     id: String,
///     title: String,
///     status: String,
/// }
///
/// let mut grid = GridController::new(
///     vec![
///         ColumnDef::new("title", "Title", 240.0),
///         ColumnDef::new("status", "Status", 120.0),
///     ],
///     |a: &Article| a.id.clone(),
///     |a, column| match column {
///         "title" => FieldValue::from(a.title.as_str()),
///         "status" => FieldValue::from(a.status.as_str()),
///         _ => FieldValue::Null,
///     },
///     |a| format!("{} {}", a.title, a.status),
/// )
/// .unwrap();
///
/// grid.set_records(vec![
///     Article { id: "1".into(), title: "Hello".into(), status: "published".into() },
///     Article { id: "2".into(), title: "Draft notes".into(), status: "draft".into() },
/// ]);
///
/// grid.toggle_filter_value("status", "published");
/// assert_eq!(grid.visible_ids(), vec!["1".to_string()]);
/// ```
pub struct GridController<R> {
    records: Vec<R>,
    layout: ColumnLayout,

    row_id: Box<dyn Fn(&R) -> String>,
    field: Box<dyn Fn(&R, &str) -> FieldValue>,
    search_text: Box<dyn Fn(&R) -> String>,

    search: String,
    filters: FilterSet,
    sort: Option<SortSpec>,
    selection: RowSelection,

    /// Bumped on every change that affects the derived row pipeline.
    generation: u64,
    visible: RefCell<VisibleCache>,
}

impl<R> GridController<R> {
    /// Creates a controller for a view described by `columns`, with the
    /// accessors decoupling the engine from the record shape:
    /// `row_id` yields the stable unique id, `field` the value for a
    /// (record, column id) pair, and `search_text` the text the free-text
    /// search matches against.
    pub fn new(
        columns: Vec<ColumnDef>,
        row_id: impl Fn(&R) -> String + 'static,
        field: impl Fn(&R, &str) -> FieldValue + 'static,
        search_text: impl Fn(&R) -> String + 'static,
    ) -> Result<Self, String> {
        Ok(GridController {
            records: Vec::new(),
            layout: ColumnLayout::new(columns)?,
            row_id: Box::new(row_id),
            field: Box::new(field),
            search_text: Box::new(search_text),
            search: String::new(),
            filters: FilterSet::new(),
            sort: None,
            selection: RowSelection::new(),
            generation: 1,
            visible: RefCell::new(VisibleCache::default()),
        })
    }

    fn bump(&mut self) {
        self.generation += 1;
    }

    // === Record snapshot ===

    /// Replaces the record snapshot, e.g. after the caller refetched.
    /// Display state (search, filters, sort, selection, layout) is kept.
    pub fn set_records(&mut self, records: Vec<R>) {
        self.records = records;
        self.bump();
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    // === Search ===

    pub fn set_search(&mut self, query: impl Into<String>) {
        let query = query.into();
        if self.search != query {
            self.search = query;
            self.bump();
        }
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    // === Filters ===

    /// Flips one accepted value on a column's filter. Unknown or
    /// non-filterable columns are ignored; views may pass stale ids
    /// during transition states.
    pub fn toggle_filter_value(&mut self, column: &str, value: &str) {
        match self.layout.get(column) {
            Some(def) if def.filterable => {
                self.filters.toggle_value(column, value);
                self.bump();
            }
            _ => debug!("ignoring filter toggle on column '{}'", column),
        }
    }

    pub fn clear_filters(&mut self) {
        if self.filters.is_active() {
            self.filters.clear();
            self.bump();
        }
    }

    pub fn filters(&self) -> &FilterSet {
        &self.filters
    }

    pub fn is_filter_value_selected(&self, column: &str, value: &str) -> bool {
        self.filters.is_value_selected(column, value)
    }

    /// Distinct values with occurrence counts for a column's filter
    /// popover, scanned over the unfiltered snapshot so the option list
    /// does not shrink as other filters narrow the view.
    pub fn unique_values_for(&self, column: &str) -> Vec<ValueCount> {
        unique_values(&self.records, column, &*self.field)
    }

    // === Sort ===

    /// Sets the active sort. Unknown or non-sortable columns are ignored.
    pub fn set_sort(&mut self, column: &str, order: SortOrder) {
        match self.layout.get(column) {
            Some(def) if def.sortable => {
                let spec = Some(SortSpec {
                    column: column.to_string(),
                    order,
                });
                if self.sort != spec {
                    self.sort = spec;
                    self.bump();
                }
            }
            _ => debug!("ignoring sort on column '{}'", column),
        }
    }

    /// Header-click sort cycle: ascending on first click, descending on
    /// the second, cleared on the third.
    pub fn toggle_sort(&mut self, column: &str) {
        match &self.sort {
            Some(spec) if spec.column == column => match spec.order {
                SortOrder::Ascending => self.set_sort(column, SortOrder::Descending),
                SortOrder::Descending => self.clear_sort(),
            },
            _ => self.set_sort(column, SortOrder::Ascending),
        }
    }

    pub fn clear_sort(&mut self) {
        if self.sort.is_some() {
            self.sort = None;
            self.bump();
        }
    }

    pub fn sort(&self) -> Option<&SortSpec> {
        self.sort.as_ref()
    }

    // === Derived pipeline ===

    fn refresh_visible(&self) {
        let mut cache = self.visible.borrow_mut();
        if cache.generation == self.generation {
            return;
        }

        let mut indices = visible_indices(
            &self.records,
            &self.search,
            &self.filters,
            &*self.field,
            &*self.search_text,
        );
        sort_indices(&mut indices, &self.records, self.sort.as_ref(), &*self.field);

        debug!(
            "recomputed visible rows: {} of {} (generation {})",
            indices.len(),
            self.records.len(),
            self.generation
        );
        cache.indices = indices;
        cache.generation = self.generation;
    }

    /// The filtered and sorted rows, in display order.
    pub fn visible_rows(&self) -> Vec<&R> {
        self.refresh_visible();
        let cache = self.visible.borrow();
        cache
            .indices
            .iter()
            .filter_map(|&index| self.records.get(index))
            .collect()
    }

    /// Ids of the visible rows, in display order.
    pub fn visible_ids(&self) -> Vec<String> {
        self.visible_rows()
            .into_iter()
            .map(|record| (self.row_id)(record))
            .collect()
    }

    pub fn visible_len(&self) -> usize {
        self.refresh_visible();
        self.visible.borrow().indices.len()
    }

    // === Selection ===

    pub fn toggle_select(&mut self, id: &str) {
        self.selection.toggle(id);
    }

    /// Checks or unchecks the header select-all checkbox: checked
    /// replaces the selection with exactly the currently visible ids,
    /// unchecked clears it.
    pub fn select_all_visible(&mut self, checked: bool) {
        let visible = self.visible_ids();
        self.selection.select_all(&visible, checked);
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selection.is_selected(id)
    }

    pub fn selection_count(&self) -> usize {
        self.selection.len()
    }

    /// Derived header checkbox state: every visible row is selected and
    /// the visible set is non-empty.
    pub fn is_all_visible_selected(&self) -> bool {
        self.selection.is_all_selected(&self.visible_ids())
    }

    pub fn selection(&self) -> &RowSelection {
        &self.selection
    }

    // === Column layout ===

    pub fn layout(&self) -> &ColumnLayout {
        &self.layout
    }

    pub fn columns(&self) -> &[ColumnDef] {
        self.layout.columns()
    }

    pub fn reorder_column(&mut self, from: usize, to: usize) {
        self.layout.reorder(from, to);
    }

    pub fn set_column_width(&mut self, column: &str, width: f64) {
        self.layout.set_width(column, width);
    }

    pub fn begin_drag(&mut self, column: &str) {
        self.layout.begin_drag(column);
    }

    pub fn drag_column_over(&mut self, hover: usize) {
        self.layout.drag_over(hover);
    }

    pub fn begin_resize(&mut self, column: &str, pointer_x: f64) {
        self.layout.begin_resize(column, pointer_x);
    }

    pub fn resize_to(&mut self, pointer_x: f64) {
        self.layout.resize_to(pointer_x);
    }

    /// Ends any in-progress header gesture; see [`ColumnLayout::release`].
    pub fn release_pointer(&mut self) {
        self.layout.release();
    }

    pub fn gesture(&self) -> &HeaderGesture {
        self.layout.gesture()
    }

    // === Snapshots ===

    /// Serializable snapshot of the current display state.
    pub fn view_state(&self) -> GridViewState {
        let filters = self
            .filters
            .iter()
            .map(|(column, accepted)| {
                let mut values: Vec<String> = accepted.iter().cloned().collect();
                values.sort();
                (column.to_string(), values)
            })
            .collect();

        GridViewState {
            search: self.search.clone(),
            sort: self.sort.clone(),
            filters,
            columns: self.layout.columns().to_vec(),
        }
    }
}
