/// GridState Column Layout Manager
///
/// Maintains the ordered column definitions for one grid and the pointer
/// gesture state machine driving drag-to-reorder and live resize.
/// Sticky columns (selection checkbox, row actions, status) are pinned
/// at the front of the order, exempt from reordering, and positioned at
/// a cumulative left offset computed from the committed layout.
///
/// Gestures are explicit states owned by the layout instance rather than
/// module-level pointer listeners: a gesture begins with `begin_drag` or
/// `begin_resize`, advances on move events, and always ends through the
/// single `release` path, so no state can leak across gestures or
/// instances.

use log::{debug, trace};
use serde::{Deserialize, Serialize};

/// Default minimum width (px) applied when a column does not specify one.
pub const DEFAULT_MIN_WIDTH: f64 = 60.0;

/// Definition of one grid column.
///
/// Invariant: `width >= min_width` at all times; constructors and
/// setters clamp rather than reject.
///
/// # Examples
///
/// ```
/// use gridstate::ColumnDef;
///
/// let col = ColumnDef::new("title", "Title", 240.0);
/// assert!(col.sortable && col.filterable && !col.sticky);
///
/// let actions = ColumnDef::new("actions", "", 80.0)
///     .sticky()
///     .sortable(false)
///     .filterable(false);
/// assert!(actions.sticky);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnDef {
    /// Unique id, matching a record field key.
    pub id: String,
    pub label: String,
    pub width: f64,
    pub min_width: f64,
    /// Pinned columns are excluded from reordering.
    pub sticky: bool,
    pub sortable: bool,
    pub filterable: bool,
}

impl ColumnDef {
    pub fn new(id: impl Into<String>, label: impl Into<String>, width: f64) -> Self {
        let width = width.max(1.0);
        ColumnDef {
            id: id.into(),
            label: label.into(),
            width,
            // A column narrower than the default minimum keeps its given
            // width as its floor instead of being widened silently.
            min_width: DEFAULT_MIN_WIDTH.min(width),
            sticky: false,
            sortable: true,
            filterable: true,
        }
    }

    /// Sets the minimum width, raising the current width if needed.
    pub fn with_min_width(mut self, min_width: f64) -> Self {
        self.min_width = min_width.max(0.0);
        self.width = self.width.max(self.min_width);
        self
    }

    pub fn sticky(mut self) -> Self {
        self.sticky = true;
        self
    }

    pub fn sortable(mut self, sortable: bool) -> Self {
        self.sortable = sortable;
        self
    }

    pub fn filterable(mut self, filterable: bool) -> Self {
        self.filterable = filterable;
        self
    }
}

/// Pointer gesture state for the header row.
#[derive(Debug, Clone, PartialEq)]
pub enum HeaderGesture {
    Idle,
    /// A non-sticky column header is being dragged; `index` tracks its
    /// current position in the layout.
    Dragging { column: String, index: usize },
    /// A resize handle is held; the new width is always derived from the
    /// absolute pointer delta against these captured origins, so a
    /// gesture paused indefinitely resumes correctly on the next move.
    Resizing {
        column: String,
        origin_width: f64,
        origin_x: f64,
    },
}

/// Ordered column definitions plus the active header gesture.
///
/// The order is always a permutation of the constructed column set, with
/// every sticky column ahead of every non-sticky one and the relative
/// sticky order fixed for the lifetime of the layout.
#[derive(Debug, Clone)]
pub struct ColumnLayout {
    columns: Vec<ColumnDef>,
    sticky_count: usize,
    gesture: HeaderGesture,
}

impl ColumnLayout {
    /// Builds a layout from column definitions.
    ///
    /// Sticky columns are moved to the front, preserving their relative
    /// order among themselves and the relative order of the rest.
    /// Returns an error if two definitions share an id.
    pub fn new(defs: Vec<ColumnDef>) -> Result<Self, String> {
        for (i, def) in defs.iter().enumerate() {
            if defs[..i].iter().any(|d| d.id == def.id) {
                return Err(format!("Duplicate column id '{}'", def.id));
            }
        }

        let mut columns: Vec<ColumnDef> = defs.iter().filter(|d| d.sticky).cloned().collect();
        let sticky_count = columns.len();
        columns.extend(defs.into_iter().filter(|d| !d.sticky));

        Ok(ColumnLayout {
            columns,
            sticky_count,
            gesture: HeaderGesture::Idle,
        })
    }

    pub fn columns(&self) -> &[ColumnDef] {
        &self.columns
    }

    /// The current column id order.
    pub fn order(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.id.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Number of sticky columns pinned at the front of the order.
    pub fn sticky_count(&self) -> usize {
        self.sticky_count
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.id == id)
    }

    pub fn get(&self, id: &str) -> Option<&ColumnDef> {
        self.columns.iter().find(|c| c.id == id)
    }

    /// Moves the column at `from` to position `to`.
    ///
    /// No-op when either index is out of range, equal to the other, or
    /// falls within the sticky prefix: sticky columns are never displaced
    /// and non-sticky columns never cross into a sticky slot.
    pub fn reorder(&mut self, from: usize, to: usize) {
        if from == to
            || from >= self.columns.len()
            || to >= self.columns.len()
            || from < self.sticky_count
            || to < self.sticky_count
        {
            return;
        }

        let column = self.columns.remove(from);
        debug!("reorder column '{}' {} -> {}", column.id, from, to);
        self.columns.insert(to, column);
    }

    /// Sets a column's width, clamped to its minimum. Unknown ids no-op.
    pub fn set_width(&mut self, id: &str, width: f64) {
        if let Some(col) = self.columns.iter_mut().find(|c| c.id == id) {
            col.width = width.max(col.min_width);
        }
    }

    /// Left pin offset for a sticky column: the running sum of the widths
    /// of sticky columns preceding it in the committed layout. Returns
    /// `None` for non-sticky or unknown ids.
    pub fn sticky_left_offset(&self, id: &str) -> Option<f64> {
        let index = self.index_of(id)?;
        if index >= self.sticky_count {
            return None;
        }
        Some(self.columns[..index].iter().map(|c| c.width).sum())
    }

    // === Header gesture state machine ===

    pub fn gesture(&self) -> &HeaderGesture {
        &self.gesture
    }

    /// Begins a drag gesture on a column header.
    ///
    /// No-op unless the gesture is idle and the column exists and is
    /// non-sticky.
    pub fn begin_drag(&mut self, id: &str) {
        if self.gesture != HeaderGesture::Idle {
            return;
        }
        let Some(index) = self.index_of(id) else {
            return;
        };
        if index < self.sticky_count {
            return;
        }
        trace!("begin drag on '{}' at index {}", id, index);
        self.gesture = HeaderGesture::Dragging {
            column: id.to_string(),
            index,
        };
    }

    /// Handles the pointer hovering over the header at `hover` while
    /// dragging. Reorders the dragged column to `hover` and re-tracks its
    /// index; repeated hovers over the same position are no-ops, as are
    /// hovers over sticky or out-of-range positions.
    pub fn drag_over(&mut self, hover: usize) {
        let HeaderGesture::Dragging { index, .. } = &self.gesture else {
            return;
        };
        let current = *index;
        if hover == current || hover < self.sticky_count || hover >= self.columns.len() {
            return;
        }

        self.reorder(current, hover);
        if let HeaderGesture::Dragging { index, .. } = &mut self.gesture {
            *index = hover;
        }
    }

    /// Begins a resize gesture on a column's resize handle, capturing the
    /// starting width and pointer position. No-op unless idle and the
    /// column exists.
    pub fn begin_resize(&mut self, id: &str, pointer_x: f64) {
        if self.gesture != HeaderGesture::Idle {
            return;
        }
        let Some(col) = self.get(id) else {
            return;
        };
        trace!("begin resize on '{}' at x={}", id, pointer_x);
        self.gesture = HeaderGesture::Resizing {
            column: id.to_string(),
            origin_width: col.width,
            origin_x: pointer_x,
        };
    }

    /// Applies a live resize for the current pointer position:
    /// `max(min_width, origin_width + (pointer_x - origin_x))`.
    pub fn resize_to(&mut self, pointer_x: f64) {
        let HeaderGesture::Resizing {
            column,
            origin_width,
            origin_x,
        } = &self.gesture
        else {
            return;
        };
        let id = column.clone();
        let width = origin_width + (pointer_x - origin_x);
        self.set_width(&id, width);
    }

    /// Ends whatever gesture is in progress and returns to idle.
    ///
    /// This is the only exit from `Dragging` and `Resizing`, covering
    /// normal pointer release, the pointer leaving the viewport, and
    /// teardown mid-gesture alike. A drag is committed as-is; there are
    /// no cancel/revert semantics.
    pub fn release(&mut self) {
        if self.gesture != HeaderGesture::Idle {
            trace!("release gesture {:?}", self.gesture);
        }
        self.gesture = HeaderGesture::Idle;
    }
}
