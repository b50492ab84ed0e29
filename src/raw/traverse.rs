use alloc::vec::Vec;
use core::fmt::{self, Display, Write};

use smallvec::SmallVec;

use super::handle::Handle;
use super::node::Node;
use super::raw_rbtree_map::RawRBTreeMap;

/// Explicit traversal stack. Red-black height is logarithmic, so this rarely spills.
type Stack<T> = SmallVec<[T; 32]>;

/// One pending step of the `render` walk.
enum Step<'a, K, V> {
    Enter(&'a Node<K, V>),
    Emit(&'a Node<K, V>),
    Text(&'static str),
}

impl<K, V> RawRBTreeMap<K, V> {
    /// Visits every node in ascending key order.
    pub(super) fn for_each_in_order<'a, F>(&'a self, mut visit: F)
    where
        F: FnMut(&'a Node<K, V>),
    {
        let mut stack: Stack<Handle> = SmallVec::new();
        let mut current = self.root;

        loop {
            while let Some(handle) = current {
                stack.push(handle);
                current = self.node(handle).left;
            }
            let Some(handle) = stack.pop() else {
                return;
            };
            let node = self.node(handle);
            visit(node);
            current = node.right;
        }
    }

    /// Returns the number of nodes reachable from the root.
    pub(crate) fn size(&self) -> usize {
        let mut size = 0;
        self.for_each_in_order(|_| size += 1);
        size
    }

    /// Returns the number of nodes on the longest root-to-leaf path.
    pub(crate) fn depth(&self) -> usize {
        let mut stack: Stack<(Handle, usize)> = SmallVec::new();
        stack.extend(self.root.map(|root| (root, 1)));
        let mut deepest = 0;

        while let Some((handle, depth)) = stack.pop() {
            deepest = deepest.max(depth);
            let node = self.node(handle);
            stack.extend(node.left.map(|left| (left, depth + 1)));
            stack.extend(node.right.map(|right| (right, depth + 1)));
        }
        deepest
    }

    /// Returns all keys in ascending order.
    pub(crate) fn keys(&self) -> Vec<&K> {
        let mut keys = Vec::new();
        self.for_each_in_order(|node| keys.push(&node.key));
        keys
    }

    /// Returns all entries in ascending key order.
    pub(crate) fn entries(&self) -> Vec<(&K, &V)> {
        let mut entries = Vec::new();
        self.for_each_in_order(|node| entries.push((&node.key, &node.value)));
        entries
    }

    /// Checks strict key ordering between every node and its children, and
    /// that every child's parent link names that node.
    ///
    /// Colors are not inspected; see [`audit`](Self::audit) for that.
    pub(crate) fn check(&self) -> bool
    where
        K: Ord,
    {
        let mut stack: Stack<Handle> = SmallVec::new();
        stack.extend(self.root);

        while let Some(handle) = stack.pop() {
            let node = self.node(handle);
            if let Some(left) = node.left {
                let child = self.node(left);
                if child.key >= node.key || child.parent != Some(handle) {
                    return false;
                }
                stack.push(left);
            }
            if let Some(right) = node.right {
                let child = self.node(right);
                if node.key >= child.key || child.parent != Some(handle) {
                    return false;
                }
                stack.push(right);
            }
        }
        true
    }

    /// Writes the in-order dump: `(left) key:value/C (right)`, where `C` is
    /// `B` or `R`. An empty tree renders as `-`.
    pub(crate) fn render<W: Write>(&self, out: &mut W) -> fmt::Result
    where
        K: Display,
        V: Display,
    {
        let Some(root) = self.root else {
            return out.write_str("-");
        };

        let mut stack: Stack<Step<'_, K, V>> = SmallVec::new();
        stack.push(Step::Enter(self.node(root)));

        while let Some(step) = stack.pop() {
            match step {
                Step::Enter(node) => {
                    // Pushed in reverse of the order they are written.
                    if let Some(right) = node.right {
                        stack.push(Step::Text(")"));
                        stack.push(Step::Enter(self.node(right)));
                        stack.push(Step::Text(" ("));
                    }
                    stack.push(Step::Emit(node));
                    if let Some(left) = node.left {
                        stack.push(Step::Text(") "));
                        stack.push(Step::Enter(self.node(left)));
                        stack.push(Step::Text("("));
                    }
                }
                Step::Emit(node) => write!(out, "{}:{}/{}", node.key, node.value, node.color.tag())?,
                Step::Text(text) => out.write_str(text)?,
            }
        }
        Ok(())
    }
}
