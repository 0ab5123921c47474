// Copyright (c) Sienna Satterwhite, CesiumDB Contributors
// SPDX-License-Identifier: GPL-3.0-only WITH Classpath-exception-2.0

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("the skip set is empty")]
    Empty,
    #[error("destination of length {len} cannot hold {required} elements starting at {start}")]
    InvalidArgument {
        start: usize,
        len: usize,
        required: usize,
    },
    #[error("invalid configuration: {0}")]
    InvalidConfig(&'static str),
}

pub type Result<T> = std::result::Result<T, Error>;
