/// Blanket helper turning setter-style methods into chainable builders.
pub trait With: Sized {
    /// Calls the given closure on `self` and returns it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use pinned_list::With;
    /// let v = vec![1, 2].with(|v| v.push(3));
    /// assert_eq!(v, vec![1, 2, 3]);
    /// ```
    fn with<F: FnOnce(&mut Self)>(mut self, f: F) -> Self {
        f(&mut self);
        self
    }
}

impl<T: Sized> With for T {}
