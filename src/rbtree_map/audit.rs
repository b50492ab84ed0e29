use super::RBTreeMap;
use crate::{Color, Violation};

impl<K, V> RBTreeMap<K, V> {
    /// Returns the color of the root node, or `None` for an empty map.
    ///
    /// After any sequence of insertions this is `Some(Color::Black)` for a
    /// non-empty map.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree_map::{Color, RBTreeMap};
    ///
    /// let mut map = RBTreeMap::new();
    /// assert_eq!(map.root_color(), None);
    /// map.insert("k", "v");
    /// assert_eq!(map.root_color(), Some(Color::Black));
    /// ```
    #[must_use]
    pub fn root_color(&self) -> Option<Color> {
        self.raw.root_color()
    }

    /// Verifies every red-black invariant.
    ///
    /// Where [`check`](Self::check) looks only at key order and parent links,
    /// `audit` also requires a black root, no red node with a red child, and
    /// the same number of black nodes on every root-to-leaf path. The first
    /// broken invariant found is returned.
    ///
    /// Intended for tests and debugging; a map built only through this API
    /// always passes.
    ///
    /// # Errors
    ///
    /// Returns the first [`Violation`] encountered.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree_map::RBTreeMap;
    ///
    /// let map: RBTreeMap<_, _> = (0..1000).map(|i| (i, ())).collect();
    /// assert_eq!(map.audit(), Ok(()));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n)
    pub fn audit(&self) -> Result<(), Violation>
    where
        K: Ord,
    {
        self.raw.audit()
    }
}
