//! The data-side contract a list must satisfy to support pinned headers.

use crate::view::View;

use std::error::Error;
use std::fmt;

/// Capability contract for adapters backing a section-aware list.
///
/// On top of the usual row-count/row-building duties, an adapter exposes the
/// section index: for any row, which header row owns it, and where the next
/// header lives. Both queries are called on every scroll tick and must be
/// cheap (O(1) or O(log n)).
///
/// Invariants expected from implementations:
///
/// * `section_position(p) <= Some(p)`, and it is monotonically non-decreasing
///   as `p` increases.
/// * For a header at `h`, `next_section_position(h)` is the position of the
///   first header after `h`, or `None` if `h` starts the last section.
pub trait SectionAdapter {
    /// Number of rows in the data set.
    fn row_count(&self) -> usize;

    /// Number of distinct row kinds this adapter produces.
    ///
    /// Must be at least 2 (headers and regular items); this is checked when
    /// the adapter is attached.
    fn kind_count(&self) -> usize;

    /// Returns `true` if the row at `position` is a section header.
    fn is_section_header(&self, position: usize) -> bool;

    /// Returns the position of the section header owning `position`.
    ///
    /// A header owns itself. Returns `None` if no header precedes `position`
    /// (including the empty data set).
    fn section_position(&self, position: usize) -> Option<usize>;

    /// Returns the position of the first section header after `section`.
    ///
    /// Returns `None` if `section` starts the last section.
    fn next_section_position(&self, section: usize) -> Option<usize>;

    /// Creates and binds the view for the row at `position`.
    fn build_row(&self, position: usize) -> Box<dyn View>;
}

/// Error returned when attaching a misconfigured adapter.
///
/// Misconfiguration is reported eagerly at attach time; letting it through
/// would only surface later as confusing rendering glitches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// The adapter reports fewer than two row kinds.
    ///
    /// Pinning needs at least two kinds of rows: section headers and regular
    /// items.
    TooFewRowKinds {
        /// The number of row kinds the adapter reported.
        found: usize,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            ConfigError::TooFewRowKinds { found } => write!(
                f,
                "adapter must expose at least two row kinds (headers and items), found {found}"
            ),
        }
    }
}

impl Error for ConfigError {}
