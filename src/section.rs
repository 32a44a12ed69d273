//! Overlay slots holding the currently pinned (or recently unpinned) header.

use crate::view::View;
use crate::Vec2;

/// A header view lifted out of the list to float over the viewport.
pub struct PinnedSection {
    /// The header's own view, built from the adapter and laid out to the
    /// viewport width.
    pub view: Box<dyn View>,

    /// Adapter position of the header row this overlay mirrors.
    pub position: usize,

    /// Size the view was laid out with.
    pub size: Vec2,

    /// Vertical translation applied when the next section pushes this one
    /// off. Always `<= 0`.
    pub translate_y: isize,

    /// Distance to the next section's top edge, used to clip the shadow.
    /// Negative while being pushed off.
    pub shadow_distance: isize,
}

impl std::fmt::Debug for PinnedSection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PinnedSection")
            .field("position", &self.position)
            .field("size", &self.size)
            .field("translate_y", &self.translate_y)
            .field("shadow_distance", &self.shadow_distance)
            .finish()
    }
}

/// State of the pinned-header overlay.
///
/// `Retired` keeps the last unpinned header around as a recycle candidate, so
/// re-pinning the same section need not rebuild its view from scratch.
#[derive(Debug, Default)]
pub enum Overlay {
    /// No header is pinned.
    #[default]
    None,

    /// A header is pinned and drawn over the viewport.
    Pinned(PinnedSection),

    /// The previously pinned header, kept for recycling. Not drawn.
    Retired(PinnedSection),
}

impl Overlay {
    /// Returns the pinned section, if one is active.
    pub fn pinned(&self) -> Option<&PinnedSection> {
        match self {
            Overlay::Pinned(section) => Some(section),
            _ => None,
        }
    }

    /// Mutable variant of [`pinned`](Self::pinned).
    pub fn pinned_mut(&mut self) -> Option<&mut PinnedSection> {
        match self {
            Overlay::Pinned(section) => Some(section),
            _ => None,
        }
    }

    /// Moves an active pinned section to the retired slot.
    ///
    /// No-op when nothing is pinned. The retired copy keeps its view but
    /// resets its shadow, since a retired header casts none.
    pub fn retire(&mut self) {
        if let Overlay::Pinned(mut section) = std::mem::take(self) {
            section.shadow_distance = 0;
            *self = Overlay::Retired(section);
        }
    }

    /// Installs `section` as the active pinned header.
    ///
    /// Any retired candidate is dropped; callers have already decided to
    /// build fresh.
    pub fn pin(&mut self, section: PinnedSection) {
        if let Overlay::Retired(old) = std::mem::take(self) {
            log::debug!(
                "dropping retired header for position {} in favor of {}",
                old.position,
                section.position
            );
        }
        *self = Overlay::Pinned(section);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Stub;
    impl View for Stub {
        fn draw(&self, _printer: &crate::Printer<'_>) {}
    }

    fn section(position: usize) -> PinnedSection {
        PinnedSection {
            view: Box::new(Stub),
            position,
            size: Vec2::new(10, 1),
            translate_y: 0,
            shadow_distance: 2,
        }
    }

    #[test]
    fn retire_keeps_position_and_clears_shadow() {
        let mut overlay = Overlay::None;
        overlay.pin(section(4));
        assert_eq!(overlay.pinned().map(|s| s.position), Some(4));

        overlay.retire();
        assert!(overlay.pinned().is_none());
        match overlay {
            Overlay::Retired(s) => {
                assert_eq!(s.position, 4);
                assert_eq!(s.shadow_distance, 0);
            }
            _ => panic!("expected a retired section"),
        }
    }

    #[test]
    fn retire_without_pin_is_a_no_op() {
        let mut overlay = Overlay::None;
        overlay.retire();
        assert!(matches!(overlay, Overlay::None));
    }
}
