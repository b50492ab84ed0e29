//! Red-black tree map for Rust.
//!
//! This crate provides [`RBTreeMap`], an ordered map kept balanced by the
//! classic red-black insertion algorithm: every new key is attached as a red
//! leaf, then a bottom-up fix-up recolors and rotates until the red-black
//! invariants hold again.
//!
//! - [`insert`](RBTreeMap::insert) / [`get`](RBTreeMap::get) - O(log n)
//! - [`len`](RBTreeMap::len), [`depth`](RBTreeMap::depth), [`keys`](RBTreeMap::keys) - O(n) walks
//! - [`check`](RBTreeMap::check) - key order and parent-link audit
//! - [`audit`](RBTreeMap::audit) - full red-black invariant audit
//!
//! # Example
//!
//! ```
//! use rbtree_map::{Color, RBTreeMap};
//!
//! let mut map = RBTreeMap::new();
//! map.insert(10, "ten");
//! map.insert(20, "twenty");
//! map.insert(30, "thirty");
//!
//! // The ascending run was rotated around 20.
//! assert_eq!(map.to_string(), "(10:ten/R) 20:twenty/B (30:thirty/R)");
//! assert_eq!(map.root_color(), Some(Color::Black));
//!
//! // Replacing a value leaves the shape alone.
//! assert_eq!(map.insert(10, "TEN"), Some("ten"));
//! assert_eq!(map.keys(), [&10, &20, &30]);
//! assert_eq!(map.depth(), 2);
//! assert!(map.check());
//! ```
//!
//! # Features
//!
//! - **`no_std` compatible** - Only requires `alloc`, no standard library dependency
//! - **Insert-only** - Entries are never removed, so nodes never move between arena slots
//! - **Arena storage** - Nodes live in one `Vec`; parent links are indices, not owners
//!
//! # Logging
//!
//! Rotations and fix-up cases are reported through the [`log`] facade at
//! `trace` level. Nothing is logged unless the application installs a logger.
//!
//! # Panics
//!
//! A node whose parent does not link back to it is a corrupted tree, not a
//! runtime condition. The internal rotation and direction helpers panic on it.
//! This cannot happen through the public API.

#![no_std]
// These forbid rules and lint groups are meant to be very restrictive.
#![forbid(unsafe_code)]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]
// Enable coverage attributes for nightly builds.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

extern crate alloc;

mod raw;

pub mod rbtree_map;

pub use raw::{ChildSide, Color, Violation};
pub use rbtree_map::RBTreeMap;
