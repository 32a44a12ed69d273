//! Provide higher-level abstraction to draw things on backends.

use crate::backend::Backend;
use crate::style::{ColorPair, Effect};
use crate::with::With;
use crate::Vec2;

use enumset::EnumSet;
use std::cmp::min;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Convenient interface to draw on a subset of the screen.
///
/// The area it can print on is defined by `offset` and `size`.
///
/// The part of the content it will print is defined by `content_offset`
/// and `size`.
#[derive(Clone)]
pub struct Printer<'b> {
    /// Offset into the window this printer should start drawing at.
    ///
    /// A print request at `x` will really print at `x + offset`.
    pub offset: Vec2,

    /// Size of the area we are allowed to draw on.
    ///
    /// Anything outside of this should be discarded.
    pub output_size: Vec2,

    /// Size allocated to the view.
    ///
    /// This should be the same value as the one given in the last call to
    /// `View::layout`.
    pub size: Vec2,

    /// Offset into the view for this printer.
    ///
    /// The view being drawn can ignore it, but anything to the top-left of
    /// this will actually be discarded, so it can be used to skip that part.
    ///
    /// A print request at `x` will really print at `x - content_offset`.
    pub content_offset: Vec2,

    /// Backend used to actually draw things
    backend: &'b dyn Backend,
}

impl<'b> Printer<'b> {
    /// Creates a new printer on the given window.
    pub fn new<T: Into<Vec2>>(size: T, backend: &'b dyn Backend) -> Self {
        let size = size.into();
        Printer {
            offset: Vec2::zero(),
            content_offset: Vec2::zero(),
            output_size: size,
            size,
            backend,
        }
    }

    /// Returns `true` if the backend can draw colors.
    pub fn has_colors(&self) -> bool {
        self.backend.has_colors()
    }

    /// Prints some text at the given position.
    pub fn print<S: Into<Vec2>>(&self, start: S, text: &str) {
        let start = start.into();

        // We accept requests between `content_offset` and
        // `content_offset + output_size`.
        if !start.strictly_lt(self.output_size + self.content_offset) {
            return;
        }

        // If start < content_offset, part of the text will not be visible.
        let hidden_part = self.content_offset.saturating_sub(start);
        if hidden_part.y > 0 {
            // Since we are printing a single line, there's nothing we can do.
            return;
        }

        let mut graphemes = text.graphemes(true);

        // Drop the graphemes hidden to the left of the visible area.
        // A double-width grapheme may make us overshoot by one cell.
        let mut skipped = 0;
        while skipped < hidden_part.x {
            match graphemes.next() {
                Some(g) => skipped += g.width(),
                None => return,
            }
        }

        let start = (start + (skipped, 0)) - self.content_offset;

        let room = self.output_size.x.saturating_sub(start.x);
        if room == 0 {
            return;
        }

        // Drop the end of the text if it's too long.
        // We want the "width" of the string, not the number of bytes.
        let mut visible = String::new();
        let mut width = 0;
        for g in graphemes {
            let w = g.width();
            if width + w > room {
                break;
            }
            visible.push_str(g);
            width += w;
        }

        if visible.is_empty() {
            return;
        }

        self.backend.print_at(start + self.offset, &visible);
    }

    /// Prints a horizontal line using the given character.
    pub fn print_hline<T: Into<Vec2>>(&self, start: T, width: usize, c: &str) {
        let start = start.into();

        // Nothing to be done if the start is too far to the bottom/right.
        if !start.strictly_lt(self.output_size + self.content_offset) {
            return;
        }

        let hidden_part = self.content_offset.saturating_sub(start);
        if hidden_part.y > 0 || hidden_part.x >= width {
            // We're printing a single line, so we can't do much here.
            return;
        }

        // Skip `hidden_part`
        let start = start + hidden_part;
        let width = width - hidden_part.x;

        let start = start - self.content_offset;

        // Don't write too much if we're close to the end
        let repetitions = min(width, self.output_size.x - start.x) / c.width();

        self.backend
            .print_at_rep(start + self.offset, repetitions, c);
    }

    /// Call the given closure with a colored printer,
    /// that will apply the given color on prints.
    pub fn with_color<F>(&self, c: ColorPair, f: F)
    where
        F: FnOnce(&Printer<'_>),
    {
        let old = self.backend.set_color(c);
        f(self);
        self.backend.set_color(old);
    }

    /// Call the given closure with a modified printer
    /// that will apply the given effect on prints.
    pub fn with_effect<F>(&self, effect: Effect, f: F)
    where
        F: FnOnce(&Printer<'_>),
    {
        self.backend.set_effect(effect);
        f(self);
        self.backend.unset_effect(effect);
    }

    /// Call the given closure with a modified printer
    /// that will apply each given effect on prints.
    pub fn with_effects<F>(&self, effects: EnumSet<Effect>, f: F)
    where
        F: FnOnce(&Printer<'_>),
    {
        for effect in effects.iter() {
            self.backend.set_effect(effect);
        }
        f(self);
        for effect in effects.iter() {
            self.backend.unset_effect(effect);
        }
    }

    /// Returns a sub-printer with the given offset.
    ///
    /// It will print in an area slightly to the bottom/right.
    pub fn offset<S>(&self, offset: S) -> Self
    where
        S: Into<Vec2>,
    {
        let offset = offset.into();
        self.clone().with(|s| {
            // If we are drawing a part of the content,
            // let's reduce this first.
            let consumed = Vec2::min(s.content_offset, offset);

            let offset = offset - consumed;
            s.content_offset = s.content_offset - consumed;

            s.offset = s.offset + offset;

            s.output_size = s.output_size.saturating_sub(offset);
            s.size = s.size.saturating_sub(offset);
        })
    }

    /// Returns a new sub-printer with a cropped area.
    ///
    /// The new printer size will be the minimum of `size` and its current
    /// size. Any size reduction happens at the bottom-right.
    pub fn cropped<S>(&self, size: S) -> Self
    where
        S: Into<Vec2>,
    {
        self.clone().with(|s| {
            let size = size.into();
            s.output_size = Vec2::min(s.output_size, size);
            s.size = Vec2::min(s.size, size);
        })
    }

    /// Returns a new sub-printer with a content offset.
    ///
    /// This is useful for parent views that only show a subset of their
    /// child, like a scrolling viewport or a header partially pushed off
    /// the top of its window.
    pub fn content_offset<S>(&self, offset: S) -> Self
    where
        S: Into<Vec2>,
    {
        self.clone().with(|s| {
            s.content_offset = s.content_offset + offset;
        })
    }
}
