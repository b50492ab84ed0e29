use super::handle::Handle;

/// The color of a red-black tree node.
///
/// # Examples
///
/// ```
/// use rbtree_map::{Color, RBTreeMap};
///
/// let mut map = RBTreeMap::new();
/// map.insert(1, "a");
/// assert_eq!(map.root_color(), Some(Color::Black));
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Color {
    Red,
    Black,
}

impl Color {
    /// The one-letter tag used by the map's `Display` output.
    pub(crate) const fn tag(self) -> char {
        match self {
            Color::Red => 'R',
            Color::Black => 'B',
        }
    }
}

/// Which child slot of its parent a node occupies.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Side {
    Left,
    Right,
}

impl Side {
    #[inline]
    pub(crate) const fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Outcome of descending the tree for a key.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Disposition {
    /// The node holds an equal key.
    Exact,
    /// The node is the would-be parent; the key belongs in its empty left slot.
    AttachLeft,
    /// The node is the would-be parent; the key belongs in its empty right slot.
    AttachRight,
}

#[derive(Clone)]
pub(crate) struct Node<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
    pub(crate) color: Color,
    // Back-reference only; ownership runs from the arena.
    pub(crate) parent: Option<Handle>,
    pub(crate) left: Option<Handle>,
    pub(crate) right: Option<Handle>,
}

impl<K, V> Node<K, V> {
    /// Creates a childless node.
    pub(crate) const fn new(key: K, value: V, color: Color, parent: Option<Handle>) -> Self {
        Self {
            key,
            value,
            color,
            parent,
            left: None,
            right: None,
        }
    }

    #[inline]
    pub(crate) fn is_red(&self) -> bool {
        self.color == Color::Red
    }

    #[inline]
    pub(crate) fn child(&self, side: Side) -> Option<Handle> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    #[inline]
    pub(crate) fn set_child(&mut self, side: Side, child: Option<Handle>) {
        match side {
            Side::Left => self.left = child,
            Side::Right => self.right = child,
        }
    }

    /// Returns which side `child` hangs from, or `None` if it is not a child of this node.
    #[inline]
    pub(crate) fn side_of(&self, child: Handle) -> Option<Side> {
        if self.left == Some(child) {
            Some(Side::Left)
        } else if self.right == Some(child) {
            Some(Side::Right)
        } else {
            None
        }
    }
}
