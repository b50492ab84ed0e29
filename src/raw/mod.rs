mod arena;
mod audit;
mod fix_up;
mod handle;
mod node;
mod raw_rbtree_map;
mod rotate;
mod traverse;

pub use audit::{ChildSide, Violation};
pub use node::Color;
pub(crate) use raw_rbtree_map::RawRBTreeMap;
