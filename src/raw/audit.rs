use alloc::vec;
use core::fmt;

use smallvec::SmallVec;

use super::handle::Handle;
use super::node::{Color, Side};
use super::raw_rbtree_map::RawRBTreeMap;

/// A broken red-black invariant, as reported by [`RBTreeMap::audit`].
///
/// `depth` is the 1-based level of the offending node, counted from the root.
///
/// [`RBTreeMap::audit`]: crate::RBTreeMap::audit
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Violation {
    /// The root records a parent.
    RootHasParent,
    /// The root is red.
    RedRoot,
    /// A child's key is not strictly on the correct side of its parent's key.
    Unordered { depth: usize, side: ChildSide },
    /// A child's parent link does not name the node that holds it.
    BrokenParentLink { depth: usize, side: ChildSide },
    /// A red node has a red child.
    RedRed { depth: usize, side: ChildSide },
    /// The two subtrees of a node have different black-heights.
    BlackHeight { depth: usize, left: usize, right: usize },
}

/// Which child of the node at `depth` a [`Violation`] refers to.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum ChildSide {
    Left,
    Right,
}

impl From<Side> for ChildSide {
    fn from(side: Side) -> Self {
        match side {
            Side::Left => ChildSide::Left,
            Side::Right => ChildSide::Right,
        }
    }
}

impl fmt::Display for ChildSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ChildSide::Left => "left",
            ChildSide::Right => "right",
        })
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Violation::RootHasParent => f.write_str("root node has a parent link"),
            Violation::RedRoot => f.write_str("root node is red"),
            Violation::Unordered { depth, side } => {
                write!(f, "{side} child of node at depth {depth} is out of order")
            }
            Violation::BrokenParentLink { depth, side } => {
                write!(f, "{side} child of node at depth {depth} does not link back to it")
            }
            Violation::RedRed { depth, side } => {
                write!(f, "red node at depth {depth} has a red {side} child")
            }
            Violation::BlackHeight { depth, left, right } => write!(
                f,
                "node at depth {depth} has black-heights {left} (left) and {right} (right)"
            ),
        }
    }
}

impl core::error::Error for Violation {}

impl<K: Ord, V> RawRBTreeMap<K, V> {
    /// Verifies every red-black invariant, stopping at the first violation.
    ///
    /// Covers what [`check`](Self::check) does plus root color, red-red edges
    /// and black-height balance.
    pub(crate) fn audit(&self) -> Result<(), Violation> {
        let Some(root) = self.root else {
            return Ok(());
        };
        let root_node = self.node(root);
        if root_node.parent.is_some() {
            return Err(Violation::RootHasParent);
        }
        if root_node.is_red() {
            return Err(Violation::RedRoot);
        }

        // Black-height of each finished subtree, counting its own root.
        let mut heights = vec![0usize; self.nodes.len()];
        // (node, depth, children already pushed)
        let mut stack: SmallVec<[(Handle, usize, bool); 32]> = SmallVec::new();
        stack.push((root, 1, false));

        while let Some((handle, depth, expanded)) = stack.pop() {
            let node = self.node(handle);

            if expanded {
                let height_of = |child: Option<Handle>| child.map_or(0, |child| heights[child.index()]);
                let (left, right) = (height_of(node.left), height_of(node.right));
                if left != right {
                    return Err(Violation::BlackHeight { depth, left, right });
                }
                heights[handle.index()] = left + usize::from(node.color == Color::Black);
                continue;
            }

            stack.push((handle, depth, true));
            for side in [Side::Left, Side::Right] {
                let Some(child) = node.child(side) else {
                    continue;
                };
                let child_node = self.node(child);
                let ordered = match side {
                    Side::Left => child_node.key < node.key,
                    Side::Right => node.key < child_node.key,
                };
                if !ordered {
                    return Err(Violation::Unordered { depth, side: side.into() });
                }
                if child_node.parent != Some(handle) {
                    return Err(Violation::BrokenParentLink { depth, side: side.into() });
                }
                if node.is_red() && child_node.is_red() {
                    return Err(Violation::RedRed { depth, side: side.into() });
                }
                stack.push((child, depth + 1, false));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::raw::node::Disposition;
    use alloc::string::ToString;
    use pretty_assertions::assert_eq;

    fn tree_of(keys: &[i32]) -> RawRBTreeMap<i32, ()> {
        let mut tree = RawRBTreeMap::new();
        for &key in keys {
            tree.insert(key, ());
        }
        tree
    }

    fn handle_of(tree: &RawRBTreeMap<i32, ()>, key: i32) -> Handle {
        match tree.find(&key) {
            Some((handle, Disposition::Exact)) => handle,
            other => panic!("key {key} not in tree: {other:?}"),
        }
    }

    #[test]
    fn valid_trees_pass() {
        assert_eq!(tree_of(&[]).audit(), Ok(()));
        assert_eq!(tree_of(&[1]).audit(), Ok(()));
        assert_eq!(tree_of(&[5, 3, 8, 1, 4, 7, 9, 2, 6]).audit(), Ok(()));
    }

    #[test]
    fn red_root() {
        let mut tree = tree_of(&[10, 20, 30]);
        let root = tree.root.unwrap();
        tree.node_mut(root).color = Color::Red;
        assert_eq!(tree.audit(), Err(Violation::RedRoot));
    }

    #[test]
    fn red_red_edge() {
        // 20B(10B(5R), 30B): repaint 10 red.
        let mut tree = tree_of(&[20, 10, 30, 5]);
        let ten = handle_of(&tree, 10);
        tree.node_mut(ten).color = Color::Red;
        assert_eq!(
            tree.audit(),
            Err(Violation::RedRed {
                depth: 2,
                side: ChildSide::Left
            })
        );
    }

    #[test]
    fn unequal_black_heights() {
        let mut tree = tree_of(&[20, 10, 30]);
        let ten = handle_of(&tree, 10);
        tree.node_mut(ten).color = Color::Black;
        assert_eq!(
            tree.audit(),
            Err(Violation::BlackHeight {
                depth: 1,
                left: 1,
                right: 0
            })
        );
    }

    #[test]
    fn ordering_and_links() {
        let mut tree = tree_of(&[10, 20, 30]);
        let thirty = handle_of(&tree, 30);
        tree.node_mut(thirty).key = 15;
        assert_eq!(
            tree.audit(),
            Err(Violation::Unordered {
                depth: 1,
                side: ChildSide::Right
            })
        );

        let mut tree = tree_of(&[10, 20, 30]);
        let ten = handle_of(&tree, 10);
        let thirty = handle_of(&tree, 30);
        tree.node_mut(thirty).parent = Some(ten);
        assert_eq!(
            tree.audit(),
            Err(Violation::BrokenParentLink {
                depth: 1,
                side: ChildSide::Right
            })
        );
    }

    #[test]
    fn root_with_parent() {
        let mut tree = tree_of(&[10, 20, 30]);
        let root = tree.root.unwrap();
        let ten = handle_of(&tree, 10);
        tree.node_mut(root).parent = Some(ten);
        assert_eq!(tree.audit(), Err(Violation::RootHasParent));
    }

    #[test]
    fn messages() {
        assert_eq!(Violation::RedRoot.to_string(), "root node is red");
        assert_eq!(
            Violation::RedRed {
                depth: 3,
                side: ChildSide::Right
            }
            .to_string(),
            "red node at depth 3 has a red right child"
        );
        assert_eq!(
            Violation::BlackHeight {
                depth: 1,
                left: 2,
                right: 1
            }
            .to_string(),
            "node at depth 1 has black-heights 2 (left) and 1 (right)"
        );
    }
}
