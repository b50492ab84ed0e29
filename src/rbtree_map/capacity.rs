use super::RBTreeMap;
use crate::raw::RawRBTreeMap;

impl<K, V> RBTreeMap<K, V> {
    /// Creates an empty map with room for at least `capacity` entries before
    /// the node arena reallocates.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree_map::RBTreeMap;
    ///
    /// let map: RBTreeMap<i32, i32> = RBTreeMap::with_capacity(32);
    /// assert!(map.is_empty());
    /// ```
    ///
    /// # Complexity
    ///
    /// O(capacity) for memory allocation.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        RBTreeMap {
            raw: RawRBTreeMap::with_capacity(capacity),
        }
    }

    /// Returns the number of entries the map can hold without reallocating.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree_map::RBTreeMap;
    ///
    /// let mut map = RBTreeMap::with_capacity(32);
    /// assert!(map.capacity() >= 32);
    ///
    /// map.insert(1, "a");
    /// assert!(map.capacity() >= 32);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.raw.capacity()
    }
}
