//! Colors, effects and gradients used when drawing.

use enumset::EnumSetType;

/// A 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red component.
    pub r: u8,
    /// Green component.
    pub g: u8,
    /// Blue component.
    pub b: u8,
}

impl Rgb {
    /// Creates a new color from its components.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }

    /// Creates a gray color with the same value on all components.
    pub const fn gray(value: u8) -> Self {
        Rgb::new(value, value, value)
    }

    /// Linearly interpolates each component between `self` and `other`.
    ///
    /// `x` is clamped to `[0, 1]`; `0` returns `self`, `1` returns `other`.
    pub fn interpolate(self, other: Rgb, x: f32) -> Rgb {
        let x = x.clamp(0f32, 1f32);
        let lerp = |a: u8, b: u8| (f32::from(a) + (f32::from(b) - f32::from(a)) * x).round() as u8;
        Rgb::new(
            lerp(self.r, other.r),
            lerp(self.g, other.g),
            lerp(self.b, other.b),
        )
    }
}

/// A single color used when drawing cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// The terminal's own default color for this side.
    TerminalDefault,
    /// An exact 24-bit color.
    Rgb(Rgb),
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Color::Rgb(rgb)
    }
}

/// Combines a front and a back color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColorPair {
    /// Color used for the foreground.
    pub front: Color,
    /// Color used for the background.
    pub back: Color,
}

impl ColorPair {
    /// Returns a color pair using the terminal defaults on both sides.
    pub const fn terminal_default() -> Self {
        ColorPair {
            front: Color::TerminalDefault,
            back: Color::TerminalDefault,
        }
    }

    /// Returns a color pair painting both sides with the same color.
    ///
    /// Useful to fill a solid area regardless of the character printed.
    pub fn solid<C: Into<Color>>(color: C) -> Self {
        let color = color.into();
        ColorPair {
            front: color,
            back: color,
        }
    }
}

/// Text effect to apply on prints.
#[derive(EnumSetType, Debug, Hash)]
pub enum Effect {
    /// No effect.
    Simple,
    /// Prints foreground with reduced intensity.
    Dim,
    /// Prints foreground in bold.
    Bold,
    /// Swaps foreground and background colors.
    Reverse,
}

/// A linear gradient interpolating colors for floats between 0 and 1.
#[derive(Debug, Clone)]
pub struct Linear {
    /// Color for the start of the gradient.
    pub start: Rgb,

    /// List of (position, color) intermediate points in the gradient.
    ///
    /// Positions should be in `[0, 1]` and sorted.
    pub middle: Vec<(f32, Rgb)>,

    /// Color for the end of the gradient.
    pub end: Rgb,
}

impl Linear {
    /// Create a simple gradient with only a start and end colors.
    pub fn new(start: Rgb, end: Rgb) -> Self {
        Linear {
            start,
            end,
            middle: Vec::new(),
        }
    }

    /// Create a gradient with evenly spaced colors.
    ///
    /// * Returns `None` if `colors` is empty.
    /// * Returns a constant "gradient" (same start and end) if
    ///   `colors.len() == 1`.
    /// * Returns a piecewise gradient between all colors otherwise.
    pub fn evenly_spaced(colors: &[Rgb]) -> Option<Self> {
        let (&start, rest) = colors.split_first()?;

        let Some((&end, rest)) = rest.split_last() else {
            return Some(Self::new(start, start));
        };

        let step = 1f32 / (colors.len() - 1) as f32;
        let middle = rest
            .iter()
            .enumerate()
            .map(|(i, &color)| (step * (i + 1) as f32, color))
            .collect();

        Some(Linear { start, middle, end })
    }

    /// Interpolate the color for the given position.
    pub fn interpolate(&self, x: f32) -> Rgb {
        if x <= 0f32 {
            return self.start;
        }
        if x >= 1f32 {
            return self.end;
        }

        let mut last = (0f32, self.start);
        for point in self.points() {
            if x > point.0 {
                last = point;
                continue;
            }

            let d = point.0 - last.0;
            let x = if d == 0f32 { 0f32 } else { (x - last.0) / d };

            return last.1.interpolate(point.1, x);
        }

        // Only reachable if `x` is NaN.
        self.end
    }

    /// Iterates on the points of this gradient.
    pub fn points(&self) -> impl Iterator<Item = (f32, Rgb)> + '_ {
        std::iter::once((0f32, self.start))
            .chain(self.middle.iter().copied())
            .chain(std::iter::once((1f32, self.end)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interpolate_endpoints() {
        let gradient = Linear::new(Rgb::gray(0), Rgb::gray(100));
        assert_eq!(gradient.interpolate(-1f32), Rgb::gray(0));
        assert_eq!(gradient.interpolate(0f32), Rgb::gray(0));
        assert_eq!(gradient.interpolate(0.5), Rgb::gray(50));
        assert_eq!(gradient.interpolate(1f32), Rgb::gray(100));
        assert_eq!(gradient.interpolate(2f32), Rgb::gray(100));
    }

    #[test]
    fn evenly_spaced_middle_points() {
        let gradient =
            Linear::evenly_spaced(&[Rgb::gray(200), Rgb::gray(100), Rgb::gray(0)]).unwrap();
        assert_eq!(gradient.middle, vec![(0.5, Rgb::gray(100))]);
        assert_eq!(gradient.interpolate(0.25), Rgb::gray(150));
        assert_eq!(gradient.interpolate(0.75), Rgb::gray(50));

        assert!(Linear::evenly_spaced(&[]).is_none());
    }
}
