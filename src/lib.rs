//! Pinned section headers for scrollable list views.
//!
//! This crate wraps a scrollable, section-structured list and keeps the
//! current section's header pinned to the top of the viewport:
//!
//! * While a section's rows scroll by, its header floats over the list,
//!   casting a small shadow.
//! * When the next section's header reaches the top, it pushes the pinned
//!   one off before taking its place.
//! * Taps and long presses on the pinned header are routed to a listener
//!   instead of the rows hidden underneath.
//!
//! The list itself is not provided here. Any view implementing
//! [`ScrollHost`] can be wrapped; the wrapper only polls its scroll state,
//! so no hooks are needed inside the host. Row data comes from a
//! [`SectionAdapter`], which exposes the section structure (which rows are
//! headers, and where the next header is) on top of row building.
//!
//! ```rust
//! use pinned_list::{PinnedListView, ScrollHost};
//!
//! fn wrap<H: ScrollHost>(list: H) -> PinnedListView<H> {
//!     PinnedListView::new(list).shadow_visible(true)
//! }
//! ```

#![deny(missing_docs)]

macro_rules! new_default {
    ($t:ty) => {
        impl Default for $t {
            fn default() -> Self {
                Self::new()
            }
        }
    };
}

#[macro_use]
pub mod view;

pub mod adapter;
pub mod backend;
pub mod event;
pub mod gesture;
pub mod host;
pub mod offset;
pub mod resolver;
pub mod section;
pub mod style;

mod pinned_view;
mod printer;
mod rect;
mod vec;
mod with;
mod xy;

#[cfg(test)]
mod test_util;

pub use crate::adapter::{ConfigError, SectionAdapter};
pub use crate::host::{DataChange, ScrollHost, ScrollState};
pub use crate::pinned_view::{PinnedListView, SectionTouchListener};
pub use crate::printer::Printer;
pub use crate::rect::Rect;
pub use crate::vec::Vec2;
pub use crate::view::View;
pub use crate::with::With;
pub use crate::xy::XY;
