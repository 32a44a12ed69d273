//! Offset math for the push-off animation and shadow clipping.

/// Vertical placement of the pinned header relative to the viewport top.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Offsets {
    /// Distance from the pinned header's bottom edge to the next section's
    /// top edge. Negative while the next section overlaps the header.
    pub shadow_distance: isize,

    /// Upward translation applied to the header. Always `<= 0`.
    pub translate_y: isize,
}

/// Computes the header placement for one tick.
///
/// `header_bottom` is the pinned header's bottom edge in viewport rows (its
/// height, since it sits at the top). `next_top` is the viewport-relative top
/// of the next section header, when that header intersects the viewport.
///
/// With no next section in sight the header sits flush at the top. The
/// shadow then spans its full height, except when the real header row is
/// exactly at the viewport top (`exact_top`): drawing a shadow there would
/// paint over the row right below the real header.
pub fn compute(
    header_bottom: isize,
    next_top: Option<isize>,
    shadow_height: usize,
    exact_top: bool,
    current_translate: isize,
) -> Offsets {
    match next_top {
        None => Offsets {
            shadow_distance: if exact_top { 0 } else { shadow_height as isize },
            translate_y: current_translate,
        },
        Some(next_top) => {
            let distance = next_top - header_bottom;
            Offsets {
                shadow_distance: distance,
                translate_y: distance.min(0),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_section_far_away_leaves_header_flush() {
        let offsets = compute(2, Some(5), 1, false, 0);
        assert_eq!(offsets.translate_y, 0);
        assert_eq!(offsets.shadow_distance, 3);
    }

    #[test]
    fn next_section_overlap_pushes_header_up() {
        let offsets = compute(2, Some(1), 1, false, 0);
        assert_eq!(offsets.translate_y, -1);
        assert_eq!(offsets.shadow_distance, -1);
    }

    #[test]
    fn next_section_touching_bottom_does_not_translate() {
        let offsets = compute(2, Some(2), 1, false, 0);
        assert_eq!(offsets.translate_y, 0);
        assert_eq!(offsets.shadow_distance, 0);
    }

    #[test]
    fn no_next_section_keeps_translation_and_full_shadow() {
        let offsets = compute(2, None, 1, false, -1);
        assert_eq!(offsets.translate_y, -1);
        assert_eq!(offsets.shadow_distance, 1);
    }

    #[test]
    fn exact_top_suppresses_shadow() {
        let offsets = compute(2, None, 1, true, 0);
        assert_eq!(offsets.shadow_distance, 0);
    }
}
