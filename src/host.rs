//! Contract between the pinned-header wrapper and the scrollable list it
//! wraps.

use crate::adapter::SectionAdapter;
use crate::view::{Margins, View};

use std::rc::Rc;

/// Snapshot of which rows a scroll host currently shows.
///
/// `None` in both fields means the viewport shows no rows at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollState {
    /// Position of the first row with any part inside the viewport.
    pub first_visible: Option<usize>,

    /// Position of the first row entirely inside the viewport.
    ///
    /// `None` when every visible row is clipped by a viewport edge.
    pub first_fully_visible: Option<usize>,
}

/// A change to the adapter's data set, queued by the host.
///
/// The wrapper only cares that *something* changed (any change retires the
/// pinned header until the next layout pass), but hosts report the precise
/// change so they can reuse the same queue for their own bookkeeping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataChange {
    /// The whole data set changed.
    Changed,
    /// `len` rows starting at `start` changed in place.
    RangeChanged {
        /// First affected position.
        start: usize,
        /// Number of affected rows.
        len: usize,
    },
    /// `len` rows were inserted at `start`.
    RangeInserted {
        /// First inserted position.
        start: usize,
        /// Number of inserted rows.
        len: usize,
    },
    /// `len` rows starting at `start` were removed.
    RangeRemoved {
        /// First removed position.
        start: usize,
        /// Number of removed rows.
        len: usize,
    },
    /// `len` rows moved from `from` to `to`.
    RangeMoved {
        /// Old position of the first moved row.
        from: usize,
        /// New position of the first moved row.
        to: usize,
        /// Number of moved rows.
        len: usize,
    },
}

/// A scrollable list view that can host a pinned section header.
///
/// The wrapper never inspects the host's internals; everything it needs goes
/// through this interface, polled once per layout pass and after each
/// consumed event.
pub trait ScrollHost: View {
    /// Gives the host the adapter to pull rows from.
    fn attach_adapter(&mut self, adapter: Rc<dyn SectionAdapter>);

    /// Detaches the current adapter, if any.
    fn detach_adapter(&mut self);

    /// Returns the current visible-row snapshot.
    fn scroll_state(&self) -> ScrollState;

    /// Returns the viewport-relative top edge of the row at `position`.
    ///
    /// Negative when the row starts above the viewport. `None` when the row
    /// does not intersect the viewport at all.
    fn row_top(&self, position: usize) -> Option<isize>;

    /// Takes all data changes queued since the last call.
    fn drain_changes(&mut self) -> Vec<DataChange>;

    /// Padding between the host's edges and its content area.
    ///
    /// The pinned header is laid out inside this padding.
    fn padding(&self) -> Margins {
        Margins::zeroes()
    }
}
