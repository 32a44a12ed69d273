//! Define the backend trait for actual terminal output.
//!
//! This crate doesn't print anything by itself: it delegates this job to a
//! backend, which handles the actual output, usually through a
//! terminal-handling library.

use crate::style::{ColorPair, Effect};
use crate::Vec2;
use unicode_width::UnicodeWidthStr;

/// Trait defining the required methods to be an output backend.
///
/// A backend is the interface between the abstract view tree and the actual
/// output, like a terminal. Input (and the event loop feeding
/// [`Event`](crate::event::Event)s to the views) stays with the embedder.
pub trait Backend {
    /// Should return `true` if this backend supports colors.
    fn has_colors(&self) -> bool;

    /// Main method used for printing.
    fn print_at(&self, pos: Vec2, text: &str);

    /// Efficient method to print repetitions of the same text.
    ///
    /// Usually used to draw horizontal lines/borders.
    fn print_at_rep(&self, pos: Vec2, repetitions: usize, text: &str) {
        if repetitions > 0 {
            self.print_at(pos, text);

            let width = text.width();
            let mut pos = pos;
            let mut dupes_left = repetitions - 1;

            while dupes_left > 0 {
                pos = pos + (width, 0);
                self.print_at(pos, text);
                dupes_left -= 1;
            }
        }
    }

    /// Starts using a new color.
    ///
    /// This should return the previously active color.
    ///
    /// Any call to `print_at` from now on should use the given color.
    fn set_color(&self, colors: ColorPair) -> ColorPair;

    /// Enables the given effect.
    ///
    /// Any call to `print_at` from now on should use the given effect.
    fn set_effect(&self, effect: Effect);

    /// Disables the given effect.
    fn unset_effect(&self, effect: Effect);

    /// Returns a name to identify the backend.
    ///
    /// Mostly used for debugging.
    fn name(&self) -> &str {
        "unknown"
    }
}

/// Dummy backend that does nothing.
///
/// Mostly used for testing.
pub struct Dummy;

impl Dummy {
    /// Creates a new dummy backend.
    pub fn init() -> Box<dyn Backend>
    where
        Self: Sized,
    {
        Box::new(Dummy)
    }
}

impl Backend for Dummy {
    fn has_colors(&self) -> bool {
        false
    }

    fn print_at(&self, _: Vec2, _: &str) {}

    fn set_color(&self, colors: ColorPair) -> ColorPair {
        colors
    }

    fn set_effect(&self, _: Effect) {}

    fn unset_effect(&self, _: Effect) {}

    fn name(&self) -> &str {
        "dummy"
    }
}
