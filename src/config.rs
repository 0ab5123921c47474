// Copyright (c) Sienna Satterwhite, CesiumDB Contributors
// SPDX-License-Identifier: GPL-3.0-only WITH Classpath-exception-2.0

use getset::CopyGetters;

use crate::errs::{
    Error::InvalidConfig,
    Result,
};

/// The default number of levels. With `p = 0.5` this stays efficient up to
/// roughly 2^32 elements.
pub const DEFAULT_MAX_LEVEL: usize = 32;

/// The largest accepted `max_level`. With `p = 0.5`, 64 levels already cover
/// any element count a `usize` can address.
pub const MAX_LEVEL_LIMIT: usize = usize::BITS as usize;

/// The default chance that a node is promoted to the next level.
pub const DEFAULT_PROBABILITY: f64 = 0.5;

/// Tunables for a [`SkipSet`](crate::skiplist::SkipSet). They are fixed once
/// the set is constructed.
#[derive(Debug, Clone, Copy, PartialEq, CopyGetters)]
#[getset(get_copy = "pub")]
pub struct Config {
    /// Maximum number of levels the head sentinel is sized for.
    max_level: usize,
    /// Level promotion probability, in `(0, 1)`.
    probability: f64,
}

impl Config {
    pub fn new(max_level: usize, probability: f64) -> Self {
        Self {
            max_level,
            probability,
        }
    }

    pub fn with_max_level(mut self, max_level: usize) -> Self {
        self.max_level = max_level;
        self
    }

    pub fn with_probability(mut self, probability: f64) -> Self {
        self.probability = probability;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_level == 0 {
            return Err(InvalidConfig("max_level must be non-zero"));
        }
        if self.max_level > MAX_LEVEL_LIMIT {
            return Err(InvalidConfig("max_level is too large"));
        }
        // also rejects NaN
        if !(self.probability > 0.0 && self.probability < 1.0) {
            return Err(InvalidConfig("probability must be in (0, 1)"));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_LEVEL, DEFAULT_PROBABILITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = Config::default();
        assert_eq!(config.max_level(), DEFAULT_MAX_LEVEL);
        assert_eq!(config.probability(), DEFAULT_PROBABILITY);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = Config::default().with_max_level(4).with_probability(0.25);
        assert_eq!(config, Config::new(4, 0.25));
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(Config::new(0, 0.5).validate().is_err());
        assert!(Config::new(8, 0.0).validate().is_err());
        assert!(Config::new(8, 1.0).validate().is_err());
        assert!(Config::new(8, f64::NAN).validate().is_err());
        assert!(Config::new(MAX_LEVEL_LIMIT + 1, 0.5).validate().is_err());
        assert!(Config::new(usize::MAX, 0.5).validate().is_err());
        assert!(Config::new(MAX_LEVEL_LIMIT, 0.5).validate().is_ok());
    }
}
