// Copyright (c) Sienna Satterwhite, CesiumDB Contributors
// SPDX-License-Identifier: GPL-3.0-only WITH Classpath-exception-2.0

/// Tunables for the skip set.
pub mod config;
/// Errors returned by the skip set.
pub mod errs;

/// A probabilistic ordered [`skip list`] set.
///
/// [`skip list`]: https://en.wikipedia.org/wiki/Skip_list
pub mod skiplist;

pub use config::Config;
pub use errs::{
    Error,
    Result,
};
pub use skiplist::SkipSet;
