//! Fake adapters, hosts and backends for tests.

use crate::adapter::SectionAdapter;
use crate::backend::Backend;
use crate::event::{Event, EventResult, MouseEvent};
use crate::host::{DataChange, ScrollHost, ScrollState};
use crate::style::{ColorPair, Effect};
use crate::view::{Margins, View};
use crate::{Printer, Vec2};

use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// In-memory adapter over a list of `(label, item_count)` sections.
///
/// Each section contributes one header row followed by `item_count` item
/// rows. Every row is two lines tall.
pub struct FakeAdapter {
    prefix: usize,
    sections: Vec<(&'static str, usize)>,
    kinds: usize,
    /// Number of `build_row` calls, for recreation checks.
    pub builds: Cell<usize>,
}

impl FakeAdapter {
    pub fn new(sections: &[(&'static str, usize)]) -> Self {
        FakeAdapter {
            prefix: 0,
            sections: sections.to_vec(),
            kinds: 2,
            builds: Cell::new(0),
        }
    }

    /// Like [`new`](Self::new), but with `prefix` plain rows before the
    /// first header.
    pub fn headerless_prefix(prefix: usize, sections: &[(&'static str, usize)]) -> Self {
        FakeAdapter {
            prefix,
            ..FakeAdapter::new(sections)
        }
    }

    pub fn with_kinds(mut self, kinds: usize) -> Self {
        self.kinds = kinds;
        self
    }

    fn header_positions(&self) -> impl Iterator<Item = usize> + '_ {
        let mut next = self.prefix;
        self.sections.iter().map(move |&(_, items)| {
            let header = next;
            next += 1 + items;
            header
        })
    }

    fn label(&self, position: usize) -> String {
        for (header, &(label, items)) in self.header_positions().zip(&self.sections) {
            if position == header {
                return label.to_string();
            }
            if position <= header + items {
                return format!("{label}{}", position - header);
            }
        }
        format!("r{position}")
    }
}

impl SectionAdapter for FakeAdapter {
    fn row_count(&self) -> usize {
        self.prefix
            + self
                .sections
                .iter()
                .map(|&(_, items)| 1 + items)
                .sum::<usize>()
    }

    fn kind_count(&self) -> usize {
        self.kinds
    }

    fn is_section_header(&self, position: usize) -> bool {
        self.header_positions().any(|header| header == position)
    }

    fn section_position(&self, position: usize) -> Option<usize> {
        self.header_positions()
            .take_while(|&header| header <= position)
            .last()
    }

    fn next_section_position(&self, section: usize) -> Option<usize> {
        self.header_positions().find(|&header| header > section)
    }

    fn build_row(&self, position: usize) -> Box<dyn View> {
        self.builds.set(self.builds.get() + 1);
        Box::new(RowView::new(self.label(position), 2))
    }
}

/// A row rendered as its label on the first line, blank below.
pub struct RowView {
    label: String,
    height: usize,
}

impl RowView {
    pub fn new(label: impl Into<String>, height: usize) -> Self {
        RowView {
            label: label.into(),
            height,
        }
    }
}

impl View for RowView {
    fn draw(&self, printer: &Printer<'_>) {
        printer.print((0, 0), &self.label);
        for y in 1..self.height {
            printer.print_hline((0, y), printer.size.x, " ");
        }
    }

    fn required_size(&mut self, constraint: Vec2) -> Vec2 {
        Vec2::new(constraint.x, self.height)
    }
}

/// Scriptable scroll host: fixed row height, manual scroll position, queued
/// data changes, and a log of forwarded events.
pub struct FakeHost {
    adapter: Option<Rc<dyn SectionAdapter>>,
    pub row_height: usize,
    pub scroll_top: usize,
    viewport: Vec2,
    pub padding: Margins,
    changes: Vec<DataChange>,
    /// Every event forwarded to this host.
    pub events: Vec<Event>,
}

impl FakeHost {
    pub fn new() -> Self {
        FakeHost {
            adapter: None,
            row_height: 2,
            scroll_top: 0,
            viewport: Vec2::zero(),
            padding: Margins::zeroes(),
            changes: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Scrolls so that viewport line 0 shows content line `line`.
    pub fn scroll_to_line(&mut self, line: usize) {
        self.scroll_top = line;
    }

    pub fn push_change(&mut self, change: DataChange) {
        self.changes.push(change);
    }

    fn row_count(&self) -> usize {
        self.adapter.as_ref().map_or(0, |a| a.row_count())
    }

    fn raw_top(&self, position: usize) -> isize {
        (position * self.row_height) as isize - self.scroll_top as isize
    }

    fn intersects(&self, position: usize) -> bool {
        let top = self.raw_top(position);
        top < self.viewport.y as isize && top + self.row_height as isize > 0
    }
}

impl View for FakeHost {
    fn draw(&self, printer: &Printer<'_>) {
        let Some(adapter) = self.adapter.as_ref() else {
            return;
        };
        let origin = self.padding.top_left();
        for position in 0..adapter.row_count() {
            let top = self.raw_top(position);
            if self.intersects(position) && top >= 0 {
                printer.print(origin + (0, top as usize), &format!("r{position}"));
            }
        }
    }

    fn layout(&mut self, size: Vec2) {
        self.viewport = size;
    }

    fn on_event(&mut self, event: Event) -> EventResult {
        self.events.push(event);
        match event {
            Event::Mouse {
                event: MouseEvent::WheelDown,
                ..
            } => {
                self.scroll_top += self.row_height;
                EventResult::consumed()
            }
            Event::Mouse {
                event: MouseEvent::WheelUp,
                ..
            } => {
                self.scroll_top = self.scroll_top.saturating_sub(self.row_height);
                EventResult::consumed()
            }
            _ => EventResult::Ignored,
        }
    }
}

impl ScrollHost for FakeHost {
    fn attach_adapter(&mut self, adapter: Rc<dyn SectionAdapter>) {
        self.adapter = Some(adapter);
    }

    fn detach_adapter(&mut self) {
        self.adapter = None;
    }

    fn scroll_state(&self) -> ScrollState {
        let mut state = ScrollState::default();
        for position in 0..self.row_count() {
            let top = self.raw_top(position);
            if state.first_visible.is_none() && self.intersects(position) {
                state.first_visible = Some(position);
            }
            if state.first_fully_visible.is_none()
                && top >= 0
                && top + self.row_height as isize <= self.viewport.y as isize
            {
                state.first_fully_visible = Some(position);
            }
            if state.first_visible.is_some() && state.first_fully_visible.is_some() {
                break;
            }
        }
        state
    }

    fn row_top(&self, position: usize) -> Option<isize> {
        self.intersects(position).then(|| self.raw_top(position))
    }

    fn drain_changes(&mut self) -> Vec<DataChange> {
        std::mem::take(&mut self.changes)
    }

    fn padding(&self) -> Margins {
        self.padding
    }
}

/// Backend writing into an in-memory character grid, one `char` per cell.
pub struct CaptureBackend {
    size: Vec2,
    cells: RefCell<Vec<Vec<(char, ColorPair)>>>,
    current: RefCell<ColorPair>,
}

impl CaptureBackend {
    pub fn new<T: Into<Vec2>>(size: T) -> Self {
        let size = size.into();
        CaptureBackend {
            size,
            cells: RefCell::new(vec![
                vec![(' ', ColorPair::terminal_default()); size.x];
                size.y
            ]),
            current: RefCell::new(ColorPair::terminal_default()),
        }
    }

    /// Returns row `y` as a string.
    pub fn line(&self, y: usize) -> String {
        self.cells.borrow()[y].iter().map(|&(c, _)| c).collect()
    }

    pub fn color_at(&self, pos: Vec2) -> ColorPair {
        self.cells.borrow()[pos.y][pos.x].1
    }
}

impl Backend for CaptureBackend {
    fn has_colors(&self) -> bool {
        true
    }

    fn print_at(&self, pos: Vec2, text: &str) {
        if pos.y >= self.size.y {
            return;
        }
        let mut cells = self.cells.borrow_mut();
        let color = *self.current.borrow();
        for (i, c) in text.chars().enumerate() {
            let x = pos.x + i;
            if x >= self.size.x {
                break;
            }
            cells[pos.y][x] = (c, color);
        }
    }

    fn set_color(&self, color: ColorPair) -> ColorPair {
        self.current.replace(color)
    }

    fn set_effect(&self, _effect: Effect) {}

    fn unset_effect(&self, _effect: Effect) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fake_adapter_section_index_is_monotone() {
        let adapter = FakeAdapter::new(&[("A", 3), ("B", 2), ("C", 0)]);

        let mut last = None;
        for position in 0..adapter.row_count() {
            let section = adapter.section_position(position);
            assert!(section <= Some(position));
            assert!(section >= last);
            last = section;
        }

        assert!(adapter.is_section_header(4));
        assert!(!adapter.is_section_header(5));
        assert_eq!(adapter.next_section_position(4), Some(7));
        assert_eq!(adapter.next_section_position(7), None);
    }
}
