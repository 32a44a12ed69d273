//! Points on the 2D character grid.

use crate::XY;

use std::cmp::{max, min, Ordering};
use std::ops::{Add, Sub};

/// Simple 2D size, in cells.
pub type Vec2 = XY<usize>;

impl<T: PartialOrd> PartialOrd for XY<T> {
    /// `a < b` <=> `a.x < b.x && a.y < b.y`
    fn partial_cmp(&self, other: &XY<T>) -> Option<Ordering> {
        if self == other {
            Some(Ordering::Equal)
        } else if self.x < other.x && self.y < other.y {
            Some(Ordering::Less)
        } else if self.x > other.x && self.y > other.y {
            Some(Ordering::Greater)
        } else {
            None
        }
    }
}

impl XY<usize> {
    /// Returns a `Vec2` with `0` in each axis.
    pub fn zero() -> Self {
        Self::new(0, 0)
    }

    /// Saturating subtraction. Computes `self - other`, saturating at 0.
    ///
    /// Never panics.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use pinned_list::Vec2;
    /// let u = Vec2::new(1, 2);
    /// let v = Vec2::new(2, 1);
    /// assert_eq!(u.saturating_sub(v), Vec2::new(0, 1));
    /// ```
    pub fn saturating_sub<O: Into<Self>>(&self, other: O) -> Self {
        let other = other.into();
        self.zip_map(other, usize::saturating_sub)
    }

    /// Checked subtraction. Computes `self - other` if possible.
    ///
    /// Returns `None` if `self.x < other.x || self.y < other.y`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use pinned_list::Vec2;
    /// let xy = Vec2::new(1, 2);
    /// assert_eq!(xy.checked_sub((1, 1)), Some(Vec2::new(0, 1)));
    /// assert_eq!(xy.checked_sub((2, 2)), None);
    /// ```
    pub fn checked_sub<O: Into<Self>>(&self, other: O) -> Option<Self> {
        let other = other.into();
        if self.fits(other) {
            Some(*self - other)
        } else {
            None
        }
    }

    /// Returns a signed version of this vector.
    pub fn signed(self) -> XY<isize> {
        self.map(|v| v as isize)
    }

    /// Returns `true` if `self` could fit inside `other`.
    ///
    /// Shortcut for `self.x <= other.x && self.y <= other.y`.
    pub fn fits_in<O: Into<Self>>(&self, other: O) -> bool {
        let other = other.into();
        self.x <= other.x && self.y <= other.y
    }

    /// Returns `true` if `other` could fit inside `self`.
    ///
    /// Shortcut for `self.x >= other.x && self.y >= other.y`.
    pub fn fits<O: Into<Self>>(&self, other: O) -> bool {
        let other = other.into();
        self.x >= other.x && self.y >= other.y
    }

    /// Returns `true` if `self < other` on both axes.
    pub fn strictly_lt<O: Into<Self>>(&self, other: O) -> bool {
        let other = other.into();
        self.x < other.x && self.y < other.y
    }

    /// Returns a new `Vec2` that is a maximum per coordinate.
    pub fn max<A: Into<Vec2>, B: Into<Vec2>>(a: A, b: B) -> Self {
        let a = a.into();
        let b = b.into();
        a.zip_map(b, max)
    }

    /// Returns a new `Vec2` that is a minimum per coordinate.
    pub fn min<A: Into<Vec2>, B: Into<Vec2>>(a: A, b: B) -> Self {
        let a = a.into();
        let b = b.into();
        a.zip_map(b, min)
    }
}

impl<T: Add<Output = T>, O: Into<XY<T>>> Add<O> for XY<T> {
    type Output = XY<T>;

    fn add(self, other: O) -> Self {
        self.zip_map(other.into(), Add::add)
    }
}

impl<T: Sub<Output = T>, O: Into<XY<T>>> Sub<O> for XY<T> {
    type Output = XY<T>;

    fn sub(self, other: O) -> Self {
        self.zip_map(other.into(), Sub::sub)
    }
}

#[cfg(test)]
mod tests {
    use super::Vec2;

    #[test]
    fn test_from() {
        let vi: Vec2 = (4, 5).into();
        assert_eq!(vi, Vec2::new(4, 5));
    }

    #[test]
    fn test_min_max() {
        let a = Vec2::new(1, 5);
        let b = Vec2::new(3, 2);
        assert_eq!(Vec2::min(a, b), Vec2::new(1, 2));
        assert_eq!(Vec2::max(a, b), Vec2::new(3, 5));
    }

    #[test]
    fn test_fits() {
        assert!(Vec2::new(3, 3).fits(Vec2::new(2, 3)));
        assert!(!Vec2::new(3, 3).fits(Vec2::new(2, 4)));
        assert!(Vec2::new(1, 1).fits_in((1, 2)));
        assert!(Vec2::new(0, 0).strictly_lt((1, 1)));
        assert!(!Vec2::new(1, 0).strictly_lt((1, 1)));
    }
}
