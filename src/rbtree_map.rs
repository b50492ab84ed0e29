use alloc::vec::Vec;
use core::borrow::Borrow;
use core::fmt;
use core::ops::Index;

use crate::raw::RawRBTreeMap;

mod audit;
mod capacity;

/// An ordered map based on a [red-black tree].
///
/// Keys must implement [`Ord`]; the map stores entries so that an in-order
/// walk yields them in ascending key order, and rebalances on every insertion
/// so that lookups and insertions take O(log n) comparisons.
///
/// The map only grows: entries can be inserted or have their value replaced,
/// but never removed. Nodes live in a single arena owned by the map; parent
/// links are arena indices and never keep anything alive.
///
/// It is a logic error for a key to be modified in such a way that the key's ordering relative to
/// any other key, as determined by the [`Ord`] trait, changes while it is in the map. This is
/// normally only possible through [`Cell`], [`RefCell`], global state, I/O, or unsafe code.
/// The behavior resulting from such a logic error is not specified, but will be encapsulated to the
/// `RBTreeMap` that observed the logic error and not result in undefined behavior. [`check`] and
/// [`audit`] are the tools for noticing it.
///
/// All mutation goes through `&mut self`. The map holds no locks; sharing one across
/// threads needs an external `Mutex` or `RwLock`.
///
/// # Examples
///
/// ```
/// use rbtree_map::RBTreeMap;
///
/// let mut planets = RBTreeMap::new();
/// planets.insert("Mercury", 0.4);
/// planets.insert("Venus", 0.7);
/// planets.insert("Earth", 1.0);
///
/// assert_eq!(planets.get("Venus"), Some(&0.7));
/// assert_eq!(planets.insert("Earth", 1.01), Some(1.0));
/// assert_eq!(planets.keys(), [&"Earth", &"Mercury", &"Venus"]);
/// assert!(planets.check());
/// ```
///
/// An `RBTreeMap` with a known list of items can be initialized from an array:
///
/// ```
/// use rbtree_map::RBTreeMap;
///
/// let map = RBTreeMap::from([(10, "a"), (20, "b"), (30, "c")]);
/// assert_eq!(map.to_string(), "(10:a/R) 20:b/B (30:c/R)");
/// ```
///
/// [red-black tree]: https://en.wikipedia.org/wiki/Red%E2%80%93black_tree
/// [`Cell`]: core::cell::Cell
/// [`RefCell`]: core::cell::RefCell
/// [`check`]: RBTreeMap::check
/// [`audit`]: RBTreeMap::audit
pub struct RBTreeMap<K, V> {
    raw: RawRBTreeMap<K, V>,
}

impl<K, V> RBTreeMap<K, V> {
    /// Makes a new, empty `RBTreeMap`.
    ///
    /// Does not allocate anything on its own.
    ///
    /// # Complexity
    ///
    /// O(1)
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree_map::RBTreeMap;
    ///
    /// let mut map = RBTreeMap::new();
    ///
    /// // entries can now be inserted into the empty map
    /// map.insert(1, "a");
    /// ```
    #[must_use]
    pub const fn new() -> RBTreeMap<K, V> {
        RBTreeMap {
            raw: RawRBTreeMap::new(),
        }
    }

    /// Returns a reference to the value corresponding to the key.
    ///
    /// The key may be any borrowed form of the map's key type, but the ordering
    /// on the borrowed form *must* match the ordering on the key type.
    ///
    /// # Complexity
    ///
    /// O(log n)
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree_map::RBTreeMap;
    ///
    /// let mut map = RBTreeMap::new();
    /// map.insert(1, "a");
    /// assert_eq!(map.get(&1), Some(&"a"));
    /// assert_eq!(map.get(&2), None);
    /// ```
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q> + Ord,
        Q: ?Sized + Ord,
    {
        self.raw.get(key)
    }

    /// Returns the key-value pair corresponding to the supplied key.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree_map::RBTreeMap;
    ///
    /// let mut map = RBTreeMap::new();
    /// map.insert(1, "a");
    /// assert_eq!(map.get_key_value(&1), Some((&1, &"a")));
    /// assert_eq!(map.get_key_value(&2), None);
    /// ```
    pub fn get_key_value<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q> + Ord,
        Q: ?Sized + Ord,
    {
        self.raw.get_key_value(key)
    }

    /// Returns `true` if the map contains a value for the specified key.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree_map::RBTreeMap;
    ///
    /// let mut map = RBTreeMap::new();
    /// map.insert(1, "a");
    /// assert_eq!(map.contains_key(&1), true);
    /// assert_eq!(map.contains_key(&2), false);
    /// ```
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q> + Ord,
        Q: ?Sized + Ord,
    {
        self.raw.get(key).is_some()
    }

    /// Returns a mutable reference to the value corresponding to the key.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree_map::RBTreeMap;
    ///
    /// let mut map = RBTreeMap::new();
    /// map.insert(1, "a");
    /// if let Some(x) = map.get_mut(&1) {
    ///     *x = "b";
    /// }
    /// assert_eq!(map[&1], "b");
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q> + Ord,
        Q: ?Sized + Ord,
    {
        self.raw.get_mut(key)
    }

    /// Inserts a key-value pair into the map.
    ///
    /// If the map did not have this key present, a new red leaf is attached and
    /// the tree is rebalanced; `None` is returned.
    ///
    /// If the map did have this key present, the value is updated and the old
    /// value is returned. The tree's shape does not change and the key is not
    /// updated.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree_map::RBTreeMap;
    ///
    /// let mut map = RBTreeMap::new();
    /// assert_eq!(map.insert(37, "a"), None);
    /// assert_eq!(map.is_empty(), false);
    ///
    /// map.insert(37, "b");
    /// assert_eq!(map.insert(37, "c"), Some("b"));
    /// assert_eq!(map[&37], "c");
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn insert(&mut self, key: K, value: V) -> Option<V>
    where
        K: Ord,
    {
        self.raw.insert(key, value)
    }

    /// Returns the number of elements in the map.
    ///
    /// The count is not cached; every call walks the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree_map::RBTreeMap;
    ///
    /// let mut a = RBTreeMap::new();
    /// assert_eq!(a.len(), 0);
    /// a.insert(1, "a");
    /// assert_eq!(a.len(), 1);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n)
    #[must_use]
    pub fn len(&self) -> usize {
        self.raw.size()
    }

    /// Returns `true` if the map contains no elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree_map::RBTreeMap;
    ///
    /// let mut a = RBTreeMap::new();
    /// assert!(a.is_empty());
    /// a.insert(1, "a");
    /// assert!(!a.is_empty());
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Returns the number of nodes on the longest path from the root to a
    /// leaf, or 0 for an empty map.
    ///
    /// Red-black balancing keeps this at most `2 * log2(len + 1)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree_map::RBTreeMap;
    ///
    /// let mut map = RBTreeMap::new();
    /// assert_eq!(map.depth(), 0);
    /// for i in 0..7 {
    ///     map.insert(i, ());
    /// }
    /// assert_eq!(map.depth(), 4);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n)
    #[must_use]
    pub fn depth(&self) -> usize {
        self.raw.depth()
    }

    /// Returns the keys of the map in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree_map::RBTreeMap;
    ///
    /// let map = RBTreeMap::from([(2, "b"), (1, "a"), (3, "c")]);
    /// assert_eq!(map.keys(), [&1, &2, &3]);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n)
    #[must_use]
    pub fn keys(&self) -> Vec<&K> {
        self.raw.keys()
    }

    /// Checks that every node's children are strictly ordered around it and
    /// link back to it.
    ///
    /// Node colors are not examined; [`audit`](Self::audit) covers those too.
    /// An empty map always passes.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree_map::RBTreeMap;
    ///
    /// let map: RBTreeMap<_, _> = (0..100).map(|i| (i, i * i)).collect();
    /// assert!(map.check());
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n)
    #[must_use]
    pub fn check(&self) -> bool
    where
        K: Ord,
    {
        self.raw.check()
    }
}

impl<K: Clone, V: Clone> Clone for RBTreeMap<K, V> {
    fn clone(&self) -> Self {
        RBTreeMap { raw: self.raw.clone() }
    }
}

impl<K: PartialEq, V: PartialEq> PartialEq for RBTreeMap<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.raw.entries() == other.raw.entries()
    }
}

impl<K: Eq, V: Eq> Eq for RBTreeMap<K, V> {}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for RBTreeMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.raw.entries()).finish()
    }
}

/// In-order dump of the tree annotated with node colors.
///
/// Each node prints as `key:value/B` or `key:value/R`, its left subtree in
/// parentheses before it and its right subtree in parentheses after it.
/// An empty map prints `-`.
///
/// ```
/// use rbtree_map::RBTreeMap;
///
/// let mut map = RBTreeMap::new();
/// assert_eq!(map.to_string(), "-");
///
/// map.insert(10, 'x');
/// map.insert(5, 'y');
/// map.insert(1, 'z');
/// assert_eq!(map.to_string(), "(1:z/R) 5:y/B (10:x/R)");
/// ```
impl<K: fmt::Display, V: fmt::Display> fmt::Display for RBTreeMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.raw.render(f)
    }
}

impl<K, V> Default for RBTreeMap<K, V> {
    fn default() -> Self {
        RBTreeMap::new()
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for RBTreeMap<K, V> {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = RBTreeMap::new();
        map.extend(iter);
        map
    }
}

impl<K: Ord, V> Extend<(K, V)> for RBTreeMap<K, V> {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

impl<'a, K: Ord + Copy, V: Copy> Extend<(&'a K, &'a V)> for RBTreeMap<K, V> {
    fn extend<I: IntoIterator<Item = (&'a K, &'a V)>>(&mut self, iter: I) {
        self.extend(iter.into_iter().map(|(&key, &value)| (key, value)));
    }
}

impl<K, Q, V> Index<&Q> for RBTreeMap<K, V>
where
    K: Borrow<Q> + Ord,
    Q: ?Sized + Ord,
{
    type Output = V;

    /// Returns a reference to the value corresponding to the supplied key.
    ///
    /// # Panics
    ///
    /// Panics if the key is not present in the `RBTreeMap`.
    #[inline]
    fn index(&self, key: &Q) -> &V {
        self.get(key).expect("no entry found for key")
    }
}

impl<K: Ord, V, const N: usize> From<[(K, V); N]> for RBTreeMap<K, V> {
    /// Converts a `[(K, V); N]` into a `RBTreeMap<K, V>`.
    ///
    /// If any entries in the array have equal keys, all but the last entry are discarded.
    ///
    /// ```
    /// use rbtree_map::RBTreeMap;
    ///
    /// let map1 = RBTreeMap::from([(1, 2), (3, 4)]);
    /// let map2: RBTreeMap<_, _> = [(1, 2), (3, 4)].into();
    /// assert_eq!(map1, map2);
    /// ```
    fn from(arr: [(K, V); N]) -> Self {
        arr.into_iter().collect()
    }
}
