//! Small press/hold/release gesture recognizer for the pinned header.
//!
//! Terminal backends report mouse press, hold and release as separate
//! events; this module folds them into taps and long presses, mirroring
//! what pointer-based UIs do with a gesture detector.

use crate::Vec2;

use std::time::{Duration, Instant};

/// How long a press must be held, without moving, to count as a long press.
pub const LONG_PRESS_TIMEOUT: Duration = Duration::from_millis(500);

/// A recognized gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    /// Press and release in place, within the long-press timeout.
    Tap,

    /// Press held in place past the long-press timeout.
    LongPress,

    /// The pointer moved away between press and release.
    Cancelled,
}

struct PressState {
    started: Instant,
    origin: Vec2,
    moved: bool,
    long_fired: bool,
}

/// Turns raw press/hold/release reports into [`Gesture`]s.
///
/// Feed it every pointer event aimed at the tracked area; it fires each
/// gesture at most once per press.
pub struct GestureRecognizer {
    clock: Box<dyn Fn() -> Instant>,
    press: Option<PressState>,
}

impl GestureRecognizer {
    /// Creates a recognizer using the system clock.
    pub fn new() -> Self {
        GestureRecognizer::with_clock(Instant::now)
    }

    /// Creates a recognizer reading time from `clock`.
    ///
    /// Lets tests drive long-press detection without sleeping.
    pub fn with_clock<F>(clock: F) -> Self
    where
        F: Fn() -> Instant + 'static,
    {
        GestureRecognizer {
            clock: Box::new(clock),
            press: None,
        }
    }

    /// Starts tracking a press at `position`.
    pub fn press(&mut self, position: Vec2) {
        self.press = Some(PressState {
            started: (self.clock)(),
            origin: position,
            moved: false,
            long_fired: false,
        });
    }

    /// Reports the pointer being held at `position`.
    ///
    /// Returns [`Gesture::LongPress`] once, when the press has stayed in
    /// place past the timeout.
    pub fn hold(&mut self, position: Vec2) -> Option<Gesture> {
        let now = (self.clock)();
        let press = self.press.as_mut()?;

        if position != press.origin {
            press.moved = true;
        }

        if !press.moved && !press.long_fired && now - press.started >= LONG_PRESS_TIMEOUT {
            press.long_fired = true;
            return Some(Gesture::LongPress);
        }

        None
    }

    /// Ends the press at `position` and returns the resulting gesture.
    ///
    /// Returns `None` when no press was being tracked, or when the long
    /// press already fired during a hold.
    pub fn release(&mut self, position: Vec2) -> Option<Gesture> {
        let now = (self.clock)();
        let press = self.press.take()?;

        if press.moved || position != press.origin {
            return Some(Gesture::Cancelled);
        }

        if press.long_fired {
            return None;
        }

        if now - press.started >= LONG_PRESS_TIMEOUT {
            Some(Gesture::LongPress)
        } else {
            Some(Gesture::Tap)
        }
    }

    /// Drops the tracked press without firing anything.
    pub fn cancel(&mut self) {
        self.press = None;
    }
}

new_default!(GestureRecognizer);

#[cfg(test)]
mod tests {
    use super::*;

    use std::cell::Cell;
    use std::rc::Rc;

    fn manual_clock() -> (Rc<Cell<Instant>>, GestureRecognizer) {
        let now = Rc::new(Cell::new(Instant::now()));
        let clock = Rc::clone(&now);
        (now, GestureRecognizer::with_clock(move || clock.get()))
    }

    #[test]
    fn quick_release_is_a_tap() {
        let (now, mut gestures) = manual_clock();
        gestures.press(Vec2::new(2, 0));
        now.set(now.get() + Duration::from_millis(100));
        assert_eq!(gestures.release(Vec2::new(2, 0)), Some(Gesture::Tap));
    }

    #[test]
    fn held_press_fires_long_press_once() {
        let (now, mut gestures) = manual_clock();
        gestures.press(Vec2::new(2, 0));
        now.set(now.get() + Duration::from_millis(600));
        assert_eq!(gestures.hold(Vec2::new(2, 0)), Some(Gesture::LongPress));
        assert_eq!(gestures.hold(Vec2::new(2, 0)), None);
        // The release after a fired long press is silent.
        assert_eq!(gestures.release(Vec2::new(2, 0)), None);
    }

    #[test]
    fn late_release_without_hold_is_a_long_press() {
        let (now, mut gestures) = manual_clock();
        gestures.press(Vec2::new(2, 0));
        now.set(now.get() + Duration::from_millis(600));
        assert_eq!(gestures.release(Vec2::new(2, 0)), Some(Gesture::LongPress));
    }

    #[test]
    fn movement_cancels() {
        let (now, mut gestures) = manual_clock();
        gestures.press(Vec2::new(2, 0));
        now.set(now.get() + Duration::from_millis(100));
        assert_eq!(gestures.hold(Vec2::new(3, 0)), None);
        assert_eq!(gestures.release(Vec2::new(2, 0)), Some(Gesture::Cancelled));
    }

    #[test]
    fn cancel_swallows_the_press() {
        let (_now, mut gestures) = manual_clock();
        gestures.press(Vec2::new(2, 0));
        gestures.cancel();
        assert_eq!(gestures.release(Vec2::new(2, 0)), None);
    }
}
