// Copyright (c) Sienna Satterwhite, CesiumDB Contributors
// SPDX-License-Identifier: GPL-3.0-only WITH Classpath-exception-2.0

use rand::{
    rngs::SmallRng,
    Rng,
    SeedableRng,
};

use crate::{
    config::Config,
    errs::Result,
};

/// Upon the insertion of a new node in the set, the node is replicated to
/// higher levels with a certain probability as determined by a
/// `LevelGenerator`.
pub trait LevelGenerator {
    /// The total number of levels that are assumed to exist for this level
    /// generator.
    fn total(&self) -> usize;
    /// Generate the height of a new node given the number of levels currently
    /// in use.
    ///
    /// The result must be in `[1, min(active + 1, self.total())]`: a node
    /// always sits on level 0 and may open at most one new level.
    fn random(&mut self, active: usize) -> usize;
}

/// A level generator which will produce geometrically distributed heights.
///
/// The probability of generating height `n + 1` is `p` times the probability
/// of generating height `n`, truncated at the active level count plus one and
/// at the total number of levels.
///
/// Cloning reseeds the random source, so a clone never replays the height
/// sequence of the original.
#[derive(Debug)]
pub struct GeometricalLevelGenerator<R = SmallRng> {
    total: usize,
    p: f64,
    rng: R,
}

impl GeometricalLevelGenerator<SmallRng> {
    /// Create a new GeometricalLevelGenerator with `total` number of levels,
    /// and `p` as the probability that a given node is present in the next
    /// level.
    ///
    /// # Panics
    ///
    /// `p` must be between 0 and 1 and will panic otherwise.  Similarly,
    /// `total` must be at greater or equal to 1.
    pub fn new(total: usize, p: f64) -> Self {
        Self::with_rng(total, p, SmallRng::from_entropy())
    }

    pub fn try_new(total: usize, p: f64) -> Result<Self> {
        Self::try_with_rng(total, p, SmallRng::from_entropy())
    }
}

impl<R: Rng> GeometricalLevelGenerator<R> {
    /// Same as [`GeometricalLevelGenerator::new`] but draws from `rng`. Use a
    /// seeded or scripted source to make heights reproducible.
    ///
    /// # Panics
    ///
    /// On the same inputs as [`GeometricalLevelGenerator::new`].
    pub fn with_rng(total: usize, p: f64, rng: R) -> Self {
        match Self::try_with_rng(total, p, rng) {
            | Ok(lg) => lg,
            | Err(e) => panic!("{}", e),
        }
    }

    pub fn try_with_rng(total: usize, p: f64, rng: R) -> Result<Self> {
        Config::new(total, p).validate()?;
        Ok(GeometricalLevelGenerator { total, p, rng })
    }
}

impl<R: SeedableRng> Clone for GeometricalLevelGenerator<R> {
    fn clone(&self) -> Self {
        GeometricalLevelGenerator {
            total: self.total,
            p: self.p,
            rng: R::from_entropy(),
        }
    }
}

impl<R: Rng> LevelGenerator for GeometricalLevelGenerator<R> {
    fn random(&mut self, active: usize) -> usize {
        let mut h = 1;
        while h <= active && h < self.total && self.rng.gen::<f64>() < self.p {
            h += 1;
        }
        h
    }

    fn total(&self) -> usize {
        self.total
    }
}
