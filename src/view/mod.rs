//! Base elements required to build views.
//!
//! Views are the main building blocks of the user interface.
//!
//! A view can delegate part or all of its responsibilities to child views,
//! forming a view tree. The root of this tree is managed by the embedder.
//!
//! The lifecycle of a view is as follows:
//!
//! * Layout: the view is given a size and prepares itself to draw on an area
//!   of that size.
//! * Draw: the view draws itself on a [`Printer`](crate::Printer).
//! * Event: the view reacts to incoming [`Event`](crate::event::Event)s.
//!
//! This module defines the [`View`] trait, the [`ViewWrapper`] trait for
//! composing views, and the [`Margins`] helper.

mod margins;
mod view_trait;

#[macro_use]
mod view_wrapper;

pub use self::margins::Margins;
pub use self::view_trait::View;
pub use self::view_wrapper::ViewWrapper;
