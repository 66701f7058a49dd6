//! # Ordered collections on a height-balanced binary search tree
//!
//! `avl-collections` provides two ordered containers that share one
//! [AVL-tree](https://en.wikipedia.org/wiki/AVL_tree) core: [`AvlMap`], a
//! key-to-value map, and [`AvlMultiset`], a sorted collection that counts
//! duplicate insertions.  Each node stores a two-bit balance factor rather
//! than full subtree heights, and both insertion and removal rebalance on
//! the way back out of the recursion by propagating a single height-changed
//! signal.
//!
//! Removal picks the replacement for a two-child node from the deeper of
//! its subtrees, which avoids rebalancing work the classical
//! always-use-the-successor strategy would trigger.  The map keeps
//! per-operation rotation counters ([`RotationStats`]) so that effect is
//! observable.
//!
//! The containers are single-threaded; wrap them externally if you need
//! concurrent access.

mod avl;

pub use avl::multiset::AvlMultiset;
pub use avl::{AvlMap, RotationStats, RotationTallies};
