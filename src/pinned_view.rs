//! Wrapper view floating a pinned section header over a scrollable list.

use crate::adapter::{ConfigError, SectionAdapter};
use crate::event::{Event, EventResult, MouseButton, MouseEvent};
use crate::gesture::{Gesture, GestureRecognizer};
use crate::host::{ScrollHost, ScrollState};
use crate::offset;
use crate::rect::Rect;
use crate::resolver::{resolve, PinDecision};
use crate::section::{Overlay, PinnedSection};
use crate::style::{ColorPair, Effect, Linear, Rgb};
use crate::view::{View, ViewWrapper};
use crate::with::With;
use crate::{Printer, Vec2};

use lazy_static::lazy_static;
use std::rc::Rc;
use std::time::Instant;

lazy_static! {
    /// Shadow fade, darkest against the header's bottom edge.
    static ref SHADOW_GRADIENT: Linear = Linear {
        start: Rgb::gray(0xa0),
        middle: vec![(0.5, Rgb::gray(0x50))],
        end: Rgb::gray(0x00),
    };
}

const DEFAULT_SHADOW_HEIGHT: usize = 1;

struct Shadow {
    gradient: Linear,
    height: usize,
}

impl Shadow {
    fn new() -> Self {
        Shadow {
            gradient: SHADOW_GRADIENT.clone(),
            height: DEFAULT_SHADOW_HEIGHT,
        }
    }
}

/// Receives taps and long presses landing on the pinned header.
pub trait SectionTouchListener {
    /// A tap landed on the pinned header for the section at `position`.
    fn on_click(&mut self, header: &dyn View, position: usize);

    /// A long press landed on the pinned header for the section at
    /// `position`.
    fn on_long_click(&mut self, header: &dyn View, position: usize);
}

/// Wraps a [`ScrollHost`] and keeps the current section header pinned to the
/// top of its viewport.
///
/// The wrapper polls the host's scroll state after every layout pass and
/// every consumed event, so it needs no hooks inside the host itself. The
/// pinned header is a separate view built from the adapter; it floats over
/// the host, casts a small shadow, and slides out of the way when the next
/// section header reaches the top.
///
/// ```rust
/// # use pinned_list::{PinnedListView, SectionAdapter};
/// # fn attach(mut list: PinnedListView<impl pinned_list::ScrollHost>,
/// #           adapter: std::rc::Rc<dyn SectionAdapter>) {
/// list.set_adapter(adapter).expect("adapter must have header and item kinds");
/// # }
/// ```
pub struct PinnedListView<H> {
    host: H,
    adapter: Option<Rc<dyn SectionAdapter>>,
    overlay: Overlay,
    shadow: Option<Shadow>,
    gestures: GestureRecognizer,
    /// Section position of the header being pressed, while a pointer press
    /// is captured.
    capture: Option<usize>,
    listener: Option<Box<dyn SectionTouchListener>>,
    last_size: Vec2,
}

impl<H: ScrollHost> PinnedListView<H> {
    /// Wraps `host`. The shadow starts enabled.
    pub fn new(host: H) -> Self {
        PinnedListView {
            host,
            adapter: None,
            overlay: Overlay::None,
            shadow: Some(Shadow::new()),
            gestures: GestureRecognizer::new(),
            capture: None,
            listener: None,
            last_size: Vec2::zero(),
        }
    }

    /// Attaches `adapter` to both this wrapper and the host.
    ///
    /// Fails, keeping the previous adapter, when `adapter` does not expose
    /// separate header and item row kinds.
    pub fn set_adapter(&mut self, adapter: Rc<dyn SectionAdapter>) -> Result<(), ConfigError> {
        let kinds = adapter.kind_count();
        if kinds < 2 {
            return Err(ConfigError::TooFewRowKinds { found: kinds });
        }

        log::debug!("attaching section adapter with {} rows", adapter.row_count());
        self.overlay = Overlay::None;
        self.host.attach_adapter(Rc::clone(&adapter));
        self.adapter = Some(adapter);
        Ok(())
    }

    /// Detaches the adapter and drops the pinned header.
    pub fn detach_adapter(&mut self) {
        self.adapter = None;
        self.overlay = Overlay::None;
        self.host.detach_adapter();
    }

    /// Enables or disables the shadow under the pinned header.
    pub fn set_shadow_visible(&mut self, visible: bool) {
        self.shadow = visible.then(Shadow::new);
    }

    /// Enables or disables the shadow. Chainable variant.
    #[must_use]
    pub fn shadow_visible(self, visible: bool) -> Self {
        self.with(|s| s.set_shadow_visible(visible))
    }

    /// Sets the shadow height in rows. Re-enables the shadow if needed.
    pub fn set_shadow_height(&mut self, height: usize) {
        let mut shadow = self.shadow.take().unwrap_or_else(Shadow::new);
        shadow.height = height;
        self.shadow = Some(shadow);
    }

    /// Sets the listener receiving taps and long presses on the pinned
    /// header.
    pub fn set_touch_listener<L>(&mut self, listener: L)
    where
        L: SectionTouchListener + 'static,
    {
        self.listener = Some(Box::new(listener));
    }

    /// Sets the touch listener. Chainable variant.
    #[must_use]
    pub fn touch_listener<L>(self, listener: L) -> Self
    where
        L: SectionTouchListener + 'static,
    {
        self.with(|s| s.set_touch_listener(listener))
    }

    /// Position of the currently pinned section header, if any.
    pub fn pinned_position(&self) -> Option<usize> {
        self.overlay.pinned().map(|section| section.position)
    }

    /// Replaces the clock used for long-press detection.
    pub fn set_gesture_clock<F>(&mut self, clock: F)
    where
        F: Fn() -> Instant + 'static,
    {
        self.gestures = GestureRecognizer::with_clock(clock);
    }

    /// Re-evaluates the pinned header against the host's current state.
    ///
    /// Any pending data change retires the header for the rest of this
    /// tick; the next pass rebuilds it against the new data.
    fn update_pinned(&mut self) {
        if !self.host.drain_changes().is_empty() {
            self.overlay.retire();
            return;
        }

        let Some(adapter) = self.adapter.clone() else {
            self.overlay.retire();
            return;
        };

        let state = self.host.scroll_state();
        let pinned = self.pinned_position();

        match resolve(&*adapter, pinned, state) {
            PinDecision::Idle => (),
            PinDecision::Unpin => self.overlay.retire(),
            PinDecision::Keep => self.recompute_offsets(&*adapter, state),
            PinDecision::Pin(position) => {
                self.create_pinned(&*adapter, position);
                self.recompute_offsets(&*adapter, state);
            }
        }
    }

    /// Builds and lays out a fresh header view for the row at `position`.
    fn create_pinned(&mut self, adapter: &dyn SectionAdapter, position: usize) {
        let padding = self.host.padding();
        let width = self.last_size.x.saturating_sub(padding.horizontal());
        let max_height = self.last_size.y.saturating_sub(padding.vertical());

        let mut view = adapter.build_row(position);
        let required = view.required_size(Vec2::new(width, max_height));
        let size = Vec2::new(width, required.y.min(max_height));
        view.layout(size);

        log::debug!("pinning section header at position {position}");

        self.overlay.pin(PinnedSection {
            view,
            position,
            size,
            translate_y: 0,
            shadow_distance: 0,
        });
    }

    /// Refreshes the push-off translation and shadow clip of the pinned
    /// header.
    fn recompute_offsets(&mut self, adapter: &dyn SectionAdapter, state: ScrollState) {
        let shadow_height = self.shadow.as_ref().map_or(0, |shadow| shadow.height);
        let exact_top =
            state.first_visible.is_some() && state.first_visible == state.first_fully_visible;

        let Some(section) = self.overlay.pinned_mut() else {
            return;
        };

        let next_top = adapter
            .next_section_position(section.position)
            .and_then(|position| self.host.row_top(position));

        let offsets = offset::compute(
            section.size.y as isize,
            next_top,
            shadow_height,
            exact_top,
            section.translate_y,
        );
        section.translate_y = offsets.translate_y;
        section.shadow_distance = offsets.shadow_distance;
    }

    /// Area of the pinned header in view coordinates, shrunk while being
    /// pushed off. `None` when nothing is pinned or the header is fully
    /// pushed out.
    fn hit_rect(&self) -> Option<Rect> {
        let section = self.overlay.pinned()?;
        let lift = (-section.translate_y) as usize;
        let height = section.size.y.checked_sub(lift)?;
        if height == 0 {
            return None;
        }
        Some(Rect::from_size(
            self.host.padding().top_left(),
            (section.size.x, height),
        ))
    }

    fn draw_overlay(&self, printer: &Printer<'_>) {
        let Some(section) = self.overlay.pinned() else {
            return;
        };

        let lift = (-section.translate_y) as usize;
        if lift >= section.size.y {
            return;
        }
        let visible = section.size.y - lift;
        let padding = self.host.padding();

        let header_printer = printer
            .offset(padding.top_left())
            .cropped((section.size.x, visible))
            .content_offset((0, lift));
        section.view.draw(&header_printer);

        if let Some(shadow) = &self.shadow {
            let clip = shadow.height.min(section.shadow_distance.max(0) as usize);
            if clip > 0 {
                let shadow_printer = printer
                    .offset((padding.left, padding.top + visible))
                    .cropped((section.size.x, clip));
                draw_shadow(&shadow_printer, shadow, clip);
            }
        }
    }

    /// Handles pointer events aimed at the pinned header.
    ///
    /// While a press started on the header, every pointer event is captured
    /// here so the host never sees a half-delivered press sequence. The
    /// final release is still forwarded, letting the host reset its own
    /// pointer state.
    fn route_touch(&mut self, event: &Event) -> Option<EventResult> {
        let Event::Mouse {
            offset,
            position,
            event: mouse,
        } = *event
        else {
            return None;
        };

        let local = match position.checked_sub(offset) {
            Some(local) => local,
            None if self.capture.is_some() => {
                // The pointer escaped above or left of the view while
                // captured. Drop the capture; a release still goes to the
                // host so it can reset its own pointer state.
                self.capture = None;
                self.gestures.cancel();
                if matches!(mouse, MouseEvent::Release(MouseButton::Left))
                    && self.host.on_event(*event).is_consumed()
                {
                    self.update_pinned();
                }
                return Some(EventResult::consumed());
            }
            None => return None,
        };

        match mouse {
            MouseEvent::Press(MouseButton::Left) if self.capture.is_none() => {
                let pressed = {
                    let rect = self.hit_rect()?;
                    if !rect.contains(local) {
                        return None;
                    }
                    self.overlay.pinned()?.position
                };
                log::debug!("capturing pointer press on pinned header {pressed}");
                self.capture = Some(pressed);
                self.gestures.press(local);
                Some(EventResult::consumed())
            }
            _ if self.capture.is_some() => {
                match mouse {
                    MouseEvent::Hold(MouseButton::Left) => {
                        if self.gestures.hold(local) == Some(Gesture::LongPress) {
                            if let Some(position) = self.capture {
                                self.fire(Gesture::LongPress, position);
                            }
                        }
                    }
                    MouseEvent::Release(MouseButton::Left) => {
                        let captured = self.capture.take();
                        let gesture = self.gestures.release(local);
                        if let (Some(position), Some(gesture)) = (captured, gesture) {
                            self.fire(gesture, position);
                        }
                        if self.host.on_event(*event).is_consumed() {
                            self.update_pinned();
                        }
                    }
                    _ => (),
                }
                Some(EventResult::consumed())
            }
            _ => None,
        }
    }

    /// Notifies the listener, provided the section is still pinned.
    fn fire(&mut self, gesture: Gesture, position: usize) {
        let Some(section) = self.overlay.pinned() else {
            return;
        };
        if section.position != position {
            return;
        }
        let Some(listener) = self.listener.as_mut() else {
            return;
        };
        match gesture {
            Gesture::Tap => listener.on_click(&*section.view, position),
            Gesture::LongPress => listener.on_long_click(&*section.view, position),
            Gesture::Cancelled => (),
        }
    }

    inner_getters!(self.host: H);
}

fn draw_shadow(printer: &Printer<'_>, shadow: &Shadow, clip: usize) {
    for y in 0..clip {
        let x = if shadow.height <= 1 {
            0f32
        } else {
            y as f32 / (shadow.height - 1) as f32
        };
        let color = shadow.gradient.interpolate(x);
        if printer.has_colors() {
            printer.with_color(ColorPair::solid(color), |printer| {
                printer.print_hline((0, y), printer.size.x, " ");
            });
        } else {
            printer.with_effect(Effect::Dim, |printer| {
                printer.print_hline((0, y), printer.size.x, "░");
            });
        }
    }
}

impl<H: ScrollHost> ViewWrapper for PinnedListView<H> {
    crate::wrap_impl!(self.host: H);

    fn wrap_layout(&mut self, size: Vec2) {
        self.last_size = size;
        self.host.layout(size);
        self.update_pinned();
    }

    fn wrap_draw(&self, printer: &Printer<'_>) {
        self.host.draw(printer);
        self.draw_overlay(printer);
    }

    fn wrap_on_event(&mut self, event: Event) -> EventResult {
        if let Some(result) = self.route_touch(&event) {
            return result;
        }

        let result = self.host.on_event(event);
        if result.is_consumed() {
            self.update_pinned();
        }
        result
    }
}
