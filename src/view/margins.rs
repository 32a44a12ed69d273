use crate::Vec2;

/// Four values representing each direction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Margins {
    /// Left margin
    pub left: usize,
    /// Right margin
    pub right: usize,
    /// Top margin
    pub top: usize,
    /// Bottom margin
    pub bottom: usize,
}

impl Margins {
    /// Creates a new `Margins` object with zero margins.
    pub fn zeroes() -> Self {
        Self::lrtb(0, 0, 0, 0)
    }

    /// Creates a new `Margins` object from the Left, Right, Top, Bottom fields.
    pub fn lrtb(left: usize, right: usize, top: usize, bottom: usize) -> Self {
        Margins {
            left,
            right,
            top,
            bottom,
        }
    }

    /// Creates a new `Margins` object from the Left and Right fields.
    ///
    /// Top and Bottom will be 0.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use pinned_list::view::Margins;
    /// let margins = Margins::lr(1, 2);
    /// assert_eq!(margins.horizontal(), 3);
    /// assert_eq!(margins.vertical(), 0);
    /// ```
    pub fn lr(left: usize, right: usize) -> Self {
        Self::lrtb(left, right, 0, 0)
    }

    /// Creates a new `Margins` object from the Top and Bottom fields.
    ///
    /// Left and Right will be 0.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use pinned_list::view::Margins;
    /// let margins = Margins::tb(1, 2);
    /// assert_eq!(margins.vertical(), 3);
    /// assert_eq!(margins.horizontal(), 0);
    /// ```
    pub fn tb(top: usize, bottom: usize) -> Self {
        Self::lrtb(0, 0, top, bottom)
    }

    /// Returns left + right.
    pub fn horizontal(&self) -> usize {
        self.left + self.right
    }

    /// Returns top + bottom.
    pub fn vertical(&self) -> usize {
        self.top + self.bottom
    }

    /// Returns the top-left corner as a `Vec2`.
    pub fn top_left(&self) -> Vec2 {
        Vec2::new(self.left, self.top)
    }
}
