/// A generic structure with a value for each axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct XY<T> {
    /// X-axis value
    pub x: T,
    /// Y-axis value
    pub y: T,
}

impl<T> XY<T> {
    /// Creates a new `XY` from the given values.
    pub fn new(x: T, y: T) -> Self {
        XY { x, y }
    }

    /// Swaps the x and y values.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use pinned_list::XY;
    /// let xy = XY::new(1, 2);
    /// assert_eq!(xy.swap(), XY::new(2, 1));
    /// ```
    pub fn swap(self) -> Self {
        XY::new(self.y, self.x)
    }

    /// Returns `f(self.x, self.y)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use pinned_list::XY;
    /// let xy = XY::new(1, 2);
    /// assert_eq!(xy.fold(std::cmp::max), 2);
    /// ```
    pub fn fold<U, F>(self, f: F) -> U
    where
        F: FnOnce(T, T) -> U,
    {
        f(self.x, self.y)
    }

    /// Creates a new `XY` by applying `f` to `x` and `y`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use pinned_list::XY;
    /// let xy = XY::new(1, 2);
    /// assert_eq!(xy.map(|v| v * 2), XY::new(2, 4));
    /// ```
    pub fn map<U, F>(self, f: F) -> XY<U>
    where
        F: Fn(T) -> U,
    {
        XY::new(f(self.x), f(self.y))
    }

    /// Creates a new `XY` by applying `f` to both `self` and `other`, axis by
    /// axis.
    pub fn zip_map<U, V, F>(self, other: XY<U>, f: F) -> XY<V>
    where
        F: Fn(T, U) -> V,
    {
        XY::new(f(self.x, other.x), f(self.y, other.y))
    }

    /// Returns a new `XY` of tuples made by zipping `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use pinned_list::XY;
    /// let xy = XY::new(1, 2).zip(XY::new("a", "b"));
    /// assert_eq!(xy, XY::new((1, "a"), (2, "b")));
    /// ```
    pub fn zip<U>(self, other: XY<U>) -> XY<(T, U)> {
        XY::new((self.x, other.x), (self.y, other.y))
    }

    /// Returns a `XY` with references to this one's values.
    pub fn as_ref(&self) -> XY<&T> {
        XY::new(&self.x, &self.y)
    }
}

impl<T: Clone> XY<T> {
    /// Returns a new `XY` with the same value on both axes.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use pinned_list::XY;
    /// let xy = XY::both_from(42);
    /// assert_eq!(xy, XY::new(42, 42));
    /// ```
    pub fn both_from(value: T) -> Self {
        XY::new(value.clone(), value)
    }
}

impl<T> From<(T, T)> for XY<T> {
    fn from((x, y): (T, T)) -> Self {
        XY::new(x, y)
    }
}
