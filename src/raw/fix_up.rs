use log::trace;

use super::handle::Handle;
use super::node::Color;
use super::raw_rbtree_map::RawRBTreeMap;

impl<K, V> RawRBTreeMap<K, V> {
    /// Restores the red-black invariants after `handle` was attached as a red leaf.
    ///
    /// Walks upward while a red node has a red parent:
    ///
    /// - red uncle: recolor parent and uncle black, grandparent red, and
    ///   continue from the grandparent;
    /// - black or missing uncle, node and parent on the same side: rotate the
    ///   parent above the grandparent and swap their colors;
    /// - black or missing uncle, zig-zag: rotate the node up twice, paint it
    ///   black and the old grandparent red.
    ///
    /// A rotation always ends the walk. A node that reaches the root is painted black.
    pub(super) fn fix_up(&mut self, mut handle: Handle) {
        loop {
            let Some(parent) = self.node(handle).parent else {
                trace!("fix_up: node {handle} is the root");
                self.node_mut(handle).color = Color::Black;
                return;
            };
            if !self.node(parent).is_red() {
                return;
            }

            let Some(grandparent) = self.node(parent).parent else {
                panic!("`RawRBTreeMap::fix_up()` - red node at the root!");
            };
            debug_assert!(
                !self.node(grandparent).is_red(),
                "`RawRBTreeMap::fix_up()` - red node with a red parent above the fix-up point!"
            );

            let uncle = self.brother(parent).filter(|&uncle| self.node(uncle).is_red());
            if let Some(uncle) = uncle {
                trace!("fix_up: red uncle at node {uncle}, recoloring");
                self.node_mut(parent).color = Color::Black;
                self.node_mut(uncle).color = Color::Black;
                self.node_mut(grandparent).color = Color::Red;
                handle = grandparent;
                continue;
            }

            if self.dir(handle) == self.dir(parent) {
                trace!("fix_up: straight line at node {handle}");
                self.rotate(parent);
                self.node_mut(parent).color = Color::Black;
            } else {
                trace!("fix_up: zig-zag at node {handle}");
                self.rotate(handle);
                self.rotate(handle);
                self.node_mut(handle).color = Color::Black;
            }
            self.node_mut(grandparent).color = Color::Red;
            return;
        }
    }
}
