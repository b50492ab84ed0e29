use core::borrow::Borrow;
use core::cmp::Ordering;
use core::mem;

use super::arena::Arena;
use super::handle::Handle;
use super::node::{Color, Disposition, Node, Side};

/// The core red-black tree backing `RBTreeMap`.
///
/// Every node lives in `nodes`; child links own downward through handles and
/// parent links are plain back-references into the same arena.
#[derive(Clone)]
pub(crate) struct RawRBTreeMap<K, V> {
    /// Arena storing all tree nodes.
    pub(super) nodes: Arena<Node<K, V>>,
    /// Handle to the root node, if the tree is non-empty.
    pub(super) root: Option<Handle>,
}

impl<K, V> RawRBTreeMap<K, V> {
    /// Creates a new, empty tree.
    pub(crate) const fn new() -> Self {
        Self {
            nodes: Arena::new(),
            root: None,
        }
    }

    /// Creates a new tree with room for `capacity` nodes.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Arena::with_capacity(capacity),
            root: None,
        }
    }

    /// Returns the number of nodes the arena can hold without reallocating.
    pub(crate) fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    /// Returns true if the tree has no root.
    pub(crate) const fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns the color of the root node, if any.
    pub(crate) fn root_color(&self) -> Option<Color> {
        self.root.map(|root| self.nodes.get(root).color)
    }

    #[inline]
    pub(super) fn node(&self, handle: Handle) -> &Node<K, V> {
        self.nodes.get(handle)
    }

    #[inline]
    pub(super) fn node_mut(&mut self, handle: Handle) -> &mut Node<K, V> {
        self.nodes.get_mut(handle)
    }

    /// Reports whether `handle` is its parent's left or right child.
    ///
    /// # Panics
    ///
    /// Panics if the node has no parent or if neither of the parent's links
    /// points back at it.
    pub(super) fn dir(&self, handle: Handle) -> Side {
        let Some(parent) = self.node(handle).parent else {
            panic!("`RawRBTreeMap::dir()` - node has no parent!");
        };
        match self.node(parent).side_of(handle) {
            Some(side) => side,
            None => panic!("`RawRBTreeMap::dir()` - node is not a child of its parent!"),
        }
    }

    /// Returns the other child of `handle`'s parent.
    ///
    /// # Panics
    ///
    /// Same conditions as [`dir`](Self::dir).
    pub(super) fn brother(&self, handle: Handle) -> Option<Handle> {
        let Some(parent) = self.node(handle).parent else {
            panic!("`RawRBTreeMap::brother()` - node has no parent!");
        };
        let parent = self.node(parent);
        match parent.side_of(handle) {
            Some(side) => parent.child(side.opposite()),
            None => panic!("`RawRBTreeMap::brother()` - node is not a child of its parent!"),
        }
    }

    /// Descends from the root by comparison.
    ///
    /// Returns `None` for an empty tree. Otherwise the returned node either
    /// holds an equal key, or is the parent whose empty slot the key belongs in.
    pub(crate) fn find<Q>(&self, key: &Q) -> Option<(Handle, Disposition)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let mut current = self.root?;

        loop {
            let node = self.node(current);
            let (side, disposition) = match key.cmp(node.key.borrow()) {
                Ordering::Equal => return Some((current, Disposition::Exact)),
                Ordering::Less => (Side::Left, Disposition::AttachLeft),
                Ordering::Greater => (Side::Right, Disposition::AttachRight),
            };
            match node.child(side) {
                Some(child) => current = child,
                None => return Some((current, disposition)),
            }
        }
    }

    /// Returns the key-value pair corresponding to the key.
    pub(crate) fn get_key_value<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        match self.find(key)? {
            (handle, Disposition::Exact) => {
                let node = self.node(handle);
                Some((&node.key, &node.value))
            }
            _ => None,
        }
    }

    /// Returns a reference to the value corresponding to the key.
    pub(crate) fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.get_key_value(key).map(|(_, value)| value)
    }

    /// Returns a mutable reference to the value corresponding to the key.
    pub(crate) fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        match self.find(key)? {
            (handle, Disposition::Exact) => Some(&mut self.node_mut(handle).value),
            _ => None,
        }
    }

    /// Inserts a key-value pair, returning the previous value if the key was present.
    ///
    /// An existing key keeps its node and only has its value swapped. A new key
    /// is attached as a red leaf and the tree is rebalanced from there.
    pub(crate) fn insert(&mut self, key: K, value: V) -> Option<V>
    where
        K: Ord,
    {
        let Some((parent, disposition)) = self.find(&key) else {
            self.root = Some(self.nodes.alloc(Node::new(key, value, Color::Black, None)));
            return None;
        };

        let side = match disposition {
            Disposition::Exact => return Some(mem::replace(&mut self.node_mut(parent).value, value)),
            Disposition::AttachLeft => Side::Left,
            Disposition::AttachRight => Side::Right,
        };

        let child = self.nodes.alloc(Node::new(key, value, Color::Red, Some(parent)));
        self.node_mut(parent).set_child(side, Some(child));
        self.fix_up(child);
        None
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use alloc::vec::Vec;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn tree_of(keys: &[i32]) -> RawRBTreeMap<i32, i32> {
        let mut tree = RawRBTreeMap::new();
        for &key in keys {
            tree.insert(key, key * 10);
        }
        tree
    }

    fn handle_of(tree: &RawRBTreeMap<i32, i32>, key: i32) -> Handle {
        match tree.find(&key) {
            Some((handle, Disposition::Exact)) => handle,
            other => panic!("key {key} not in tree: {other:?}"),
        }
    }

    #[test]
    fn empty_tree() {
        let tree: RawRBTreeMap<i32, i32> = RawRBTreeMap::new();
        assert!(tree.is_empty());
        assert_eq!(tree.find(&1), None);
        assert_eq!(tree.get(&1), None);
        assert_eq!(tree.root_color(), None);
    }

    #[test]
    fn first_insert_is_black_root() {
        let mut tree = RawRBTreeMap::new();
        assert_eq!(tree.insert(7, "seven"), None);

        let root = tree.root.unwrap();
        assert_eq!(tree.node(root).color, Color::Black);
        assert_eq!(tree.node(root).parent, None);
        assert_eq!(tree.get(&7), Some(&"seven"));
    }

    #[test]
    fn find_reports_attachment_slot() {
        let tree = tree_of(&[20, 10, 30]);
        let ten = handle_of(&tree, 10);
        let thirty = handle_of(&tree, 30);

        assert_eq!(tree.find(&5), Some((ten, Disposition::AttachLeft)));
        assert_eq!(tree.find(&15), Some((ten, Disposition::AttachRight)));
        assert_eq!(tree.find(&25), Some((thirty, Disposition::AttachLeft)));
        assert_eq!(tree.find(&35), Some((thirty, Disposition::AttachRight)));
        assert_eq!(tree.find(&20), Some((tree.root.unwrap(), Disposition::Exact)));
    }

    #[test]
    fn replace_keeps_structure() {
        let mut tree = tree_of(&[1, 2, 3, 4, 5]);
        let before = tree.nodes.len();
        let root = tree.root;

        assert_eq!(tree.insert(4, 400), Some(40));
        assert_eq!(tree.nodes.len(), before);
        assert_eq!(tree.root, root);
        assert_eq!(tree.get(&4), Some(&400));
    }

    #[test]
    fn get_mut_updates_in_place() {
        let mut tree = tree_of(&[3, 1, 2]);
        *tree.get_mut(&1).unwrap() += 1;
        assert_eq!(tree.get(&1), Some(&11));
        assert_eq!(tree.get_mut(&9), None);
    }

    #[test]
    fn dir_and_brother() {
        let tree = tree_of(&[20, 10, 30]);
        let ten = handle_of(&tree, 10);
        let thirty = handle_of(&tree, 30);

        assert_eq!(tree.dir(ten), Side::Left);
        assert_eq!(tree.dir(thirty), Side::Right);
        assert_eq!(tree.brother(ten), Some(thirty));
        assert_eq!(tree.brother(thirty), Some(ten));

        let lone = tree_of(&[20, 10]);
        assert_eq!(lone.brother(handle_of(&lone, 10)), None);
    }

    #[test]
    #[should_panic(expected = "`RawRBTreeMap::dir()` - node has no parent!")]
    fn dir_of_root_panics() {
        let tree = tree_of(&[1]);
        tree.dir(tree.root.unwrap());
    }

    #[test]
    #[should_panic(expected = "`RawRBTreeMap::brother()` - node has no parent!")]
    fn brother_of_root_panics() {
        let tree = tree_of(&[20, 10, 30]);
        tree.brother(tree.root.unwrap());
    }

    #[test]
    #[should_panic(expected = "`RawRBTreeMap::dir()` - node is not a child of its parent!")]
    fn dir_on_corrupt_link_panics() {
        let mut tree = tree_of(&[20, 10, 30]);
        let ten = handle_of(&tree, 10);
        let thirty = handle_of(&tree, 30);
        // 10 claims 30 as its parent; 30 has no children.
        tree.node_mut(ten).parent = Some(thirty);
        tree.dir(ten);
    }

    #[test]
    #[should_panic(expected = "`RawRBTreeMap::brother()` - node is not a child of its parent!")]
    fn brother_on_corrupt_link_panics() {
        let mut tree = tree_of(&[20, 10, 30]);
        let ten = handle_of(&tree, 10);
        let root = tree.root.unwrap();
        tree.node_mut(root).left = None;
        tree.brother(ten);
    }

    proptest! {
        #[test]
        fn insert_then_get(keys in prop::collection::vec(-500i32..500, 0..300)) {
            let mut tree = RawRBTreeMap::new();
            let mut seen: Vec<i32> = Vec::new();

            for &key in &keys {
                let previous = tree.insert(key, key * 10);
                prop_assert_eq!(previous.is_some(), seen.contains(&key));
                if !seen.contains(&key) {
                    seen.push(key);
                }
            }
            for &key in &seen {
                prop_assert_eq!(tree.get(&key), Some(&(key * 10)));
            }
            prop_assert_eq!(tree.get(&1000), None);
        }
    }
}
