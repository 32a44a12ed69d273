//! Decides, from a scroll snapshot, what should happen to the pinned header.

use crate::adapter::SectionAdapter;
use crate::host::ScrollState;

/// Outcome of a pin resolution pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinDecision {
    /// Nothing is pinned and nothing needs to be.
    Idle,

    /// The current pinned header must be retired.
    Unpin,

    /// The current pinned header stays; only its offsets need refreshing.
    Keep,

    /// The header at this position must be pinned (replacing any current
    /// one).
    Pin(usize),
}

/// Resolves the pin decision for one scroll tick.
///
/// `pinned` is the position of the currently pinned header, if any. The
/// rules, in order:
///
/// 1. Empty viewport: unpin whatever is pinned.
/// 2. The pinned header's own row is the first *fully* visible one, so the
///    real row is back on screen: unpin.
/// 3. The first visible row still belongs to the pinned section: keep.
/// 4. Otherwise pin the section owning the first visible row, or unpin when
///    no header precedes it.
pub fn resolve(
    adapter: &dyn SectionAdapter,
    pinned: Option<usize>,
    state: ScrollState,
) -> PinDecision {
    let first_visible = match state.first_visible {
        Some(position) => position,
        None => {
            return match pinned {
                Some(_) => PinDecision::Unpin,
                None => PinDecision::Idle,
            }
        }
    };

    if pinned.is_some() && pinned == state.first_fully_visible {
        return PinDecision::Unpin;
    }

    let target = adapter.section_position(first_visible);

    if pinned.is_some() && pinned == target {
        return PinDecision::Keep;
    }

    match target {
        Some(position) => PinDecision::Pin(position),
        None if pinned.is_some() => PinDecision::Unpin,
        None => PinDecision::Idle,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::FakeAdapter;

    // Sections A(3 items), B(2), C(0): headers at 0, 4 and 7, 8 rows total.
    fn adapter() -> FakeAdapter {
        FakeAdapter::new(&[("A", 3), ("B", 2), ("C", 0)])
    }

    fn state(first_visible: usize, first_fully_visible: usize) -> ScrollState {
        ScrollState {
            first_visible: Some(first_visible),
            first_fully_visible: Some(first_fully_visible),
        }
    }

    #[test]
    fn empty_viewport_unpins() {
        let adapter = adapter();
        assert_eq!(
            resolve(&adapter, None, ScrollState::default()),
            PinDecision::Idle
        );
        assert_eq!(
            resolve(&adapter, Some(0), ScrollState::default()),
            PinDecision::Unpin
        );
    }

    #[test]
    fn header_fully_visible_again_unpins() {
        let adapter = adapter();
        // Row 4 is header B; when it is first-fully-visible the real row is
        // back on screen.
        assert_eq!(resolve(&adapter, Some(4), state(4, 4)), PinDecision::Unpin);
    }

    #[test]
    fn mid_section_scroll_keeps_current_pin() {
        let adapter = adapter();
        // Rows 5 and 6 belong to section B (header 4).
        assert_eq!(resolve(&adapter, Some(4), state(5, 6)), PinDecision::Keep);
        assert_eq!(resolve(&adapter, Some(4), state(6, 6)), PinDecision::Keep);
    }

    #[test]
    fn crossing_into_next_section_replaces_pin() {
        let adapter = adapter();
        // Row 7 is header C; once it owns the first visible row, C takes
        // over from B.
        assert_eq!(resolve(&adapter, Some(4), state(7, 7)), PinDecision::Pin(7));
    }

    #[test]
    fn scrolling_back_up_pins_previous_section() {
        let adapter = adapter();
        // Row 6 belongs to section B again, so B replaces C.
        assert_eq!(resolve(&adapter, Some(7), state(6, 6)), PinDecision::Pin(4));
    }

    #[test]
    fn no_preceding_header_never_pins() {
        // Three leading rows before the first header.
        let adapter = FakeAdapter::headerless_prefix(3, &[("A", 2)]);
        assert_eq!(resolve(&adapter, None, state(1, 1)), PinDecision::Idle);
        assert_eq!(resolve(&adapter, Some(3), state(1, 1)), PinDecision::Unpin);
    }

    #[test]
    fn decision_is_stable_for_unchanged_state() {
        let adapter = adapter();
        let snapshot = state(6, 6);
        let first = resolve(&adapter, Some(4), snapshot);
        assert_eq!(first, PinDecision::Keep);
        assert_eq!(resolve(&adapter, Some(4), snapshot), first);
    }
}
