use log::trace;

use super::handle::Handle;
use super::node::Side;
use super::raw_rbtree_map::RawRBTreeMap;

impl<K, V> RawRBTreeMap<K, V> {
    /// Lifts `handle`, a left child, above its parent.
    ///
    /// ```text
    ///       p          n
    ///      / \        / \
    ///     n   c  ->  a   p
    ///    / \            / \
    ///   a   b          b   c
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if `handle` has no parent or is not its parent's left child.
    pub(super) fn rotate_right(&mut self, handle: Handle) {
        assert!(
            self.dir(handle) == Side::Left,
            "`RawRBTreeMap::rotate_right()` - node is not a left child!"
        );
        self.lift(handle, Side::Left);
    }

    /// Lifts `handle`, a right child, above its parent. Mirror of
    /// [`rotate_right`](Self::rotate_right).
    ///
    /// # Panics
    ///
    /// Panics if `handle` has no parent or is not its parent's right child.
    pub(super) fn rotate_left(&mut self, handle: Handle) {
        assert!(
            self.dir(handle) == Side::Right,
            "`RawRBTreeMap::rotate_left()` - node is not a right child!"
        );
        self.lift(handle, Side::Right);
    }

    /// Rotates `handle` into its parent's position, whichever side it hangs from.
    pub(super) fn rotate(&mut self, handle: Handle) {
        match self.dir(handle) {
            Side::Right => self.rotate_left(handle),
            Side::Left => self.rotate_right(handle),
        }
    }

    // `handle` is the `side` child of its parent. Only three links move: the
    // inner subtree crosses over to the old parent, the old parent drops below
    // `handle`, and the grandparent (or root) slot is repointed.
    fn lift(&mut self, handle: Handle, side: Side) {
        let Some(parent) = self.node(handle).parent else {
            panic!("`RawRBTreeMap::lift()` - node has no parent!");
        };
        let grandparent = self.node(parent).parent;
        let parent_side = grandparent.map(|_| self.dir(parent));
        let inner = self.node(handle).child(side.opposite());

        trace!(
            "rotate {}: node {} above {}",
            match side {
                Side::Left => "right",
                Side::Right => "left",
            },
            handle,
            parent
        );

        self.node_mut(parent).set_child(side, inner);
        if let Some(inner) = inner {
            self.node_mut(inner).parent = Some(parent);
        }

        self.node_mut(handle).set_child(side.opposite(), Some(parent));
        self.node_mut(parent).parent = Some(handle);

        self.node_mut(handle).parent = grandparent;
        match (grandparent, parent_side) {
            (Some(grandparent), Some(parent_side)) => self.node_mut(grandparent).set_child(parent_side, Some(handle)),
            _ => self.root = Some(handle),
        }
    }
}
