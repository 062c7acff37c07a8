//! The data structures themselves, one module per family.
//!
//! # Purpose
//! Each submodule corresponds to one of the classic structures: [`linked`] holds the singly
//! linked list (the most complete of the set), [`binary_tree`] an unbalanced search tree, and
//! [`graph`] an adjacency-list graph with its traversals. They share no state; every type here is
//! an independent, single-threaded, in-memory container.

#[cfg(feature = "binary-tree")]
pub mod binary_tree;
#[cfg(feature = "graph")]
pub mod graph;
#[cfg(feature = "linked")]
pub mod linked;
