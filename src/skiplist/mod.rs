// Copyright (c) Sienna Satterwhite, CesiumDB Contributors
// SPDX-License-Identifier: GPL-3.0-only WITH Classpath-exception-2.0

//! A skip set which keeps its elements sorted while allowing faster access
//! than a standard linked list.
//!
//! Skip lists use a probabilistic distribution of nodes over the internal
//! levels, whereby the lowest level (level 0) contains all the nodes, and each
//! level `n > 0` will contain a random subset of the nodes on level `n - 1`.
//!
//! Most commonly, a geometric distribution is used whereby the chance that a
//! node occupies level `n` is `p` times the chance of occupying level `n-1`
//! (with `0 < p < 1`).
//!
//! Every level is a circular chain through a head sentinel, and nodes are
//! addressed by handles into an arena owned by the set.
//!
//! ```text
//! Level 2:  HEAD ────────────────────► 30 ─────────────► HEAD
//! Level 1:  HEAD ──────► 20 ─────────► 30 ─────────────► HEAD
//! Level 0:  HEAD ──► 10 ──► 20 ──► 25 ──► 30 ──► 40 ───► HEAD
//! ```
//!
//! It is very unlikely that this will need to be changed as the default should
//! suffice, but if need be custom level generators can be implemented.

mod iter;
mod level_generator;
mod node;
mod set;

pub use iter::{
    IntoIter,
    Iter,
};
pub use level_generator::{
    GeometricalLevelGenerator,
    LevelGenerator,
};
pub use set::SkipSet;
