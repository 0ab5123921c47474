// Copyright (c) Sienna Satterwhite, CesiumDB Contributors
// SPDX-License-Identifier: GPL-3.0-only WITH Classpath-exception-2.0

//! An always-ordered skip set.

use std::{
    fmt,
    iter::FromIterator,
    mem,
};

use tracing::{
    debug,
    instrument,
    trace,
};

use crate::{
    config::{
        Config,
        MAX_LEVEL_LIMIT,
    },
    errs::{
        Error::{
            Empty,
            InvalidArgument,
        },
        Result,
    },
    skiplist::{
        iter::{
            IntoIter,
            Iter,
        },
        level_generator::{
            GeometricalLevelGenerator,
            LevelGenerator,
        },
        node::{
            Link,
            NodeArena,
            SkipNode,
            HEAD,
        },
    },
};

/// The skip set stores unique elements such that they are always sorted while
/// providing expected `O(log n)` insertion, removal and lookup, and `O(1)`
/// access to the minimum.
///
/// Elements are ordered by their [`Ord`] implementation, which must be a
/// total order. Inserting an element equal to one already present leaves the
/// set untouched; use [`SkipSet::replace`] to swap the stored element.
///
/// # Examples
///
/// ```
/// use skipset::SkipSet;
///
/// let mut set = SkipSet::new();
/// for i in [5, 1, 3, 2, 4] {
///     set.insert(i);
/// }
/// assert_eq!(set.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
/// assert_eq!(set.delete_min(), Ok(1));
/// assert_eq!(set.peek(), Ok(&2));
/// ```
#[derive(Clone)]
pub struct SkipSet<T, G = GeometricalLevelGenerator> {
    arena: NodeArena<T>,
    len: usize,
    // number of levels currently in use, always in [1, max_level]
    levels: usize,
    level_generator: G,
    // per-level predecessors, reused across mutations
    update: Vec<Link>,
}

// ///////////////////////////////////////////////
// Inherent methods
// ///////////////////////////////////////////////

impl<T: Ord> SkipSet<T> {
    /// Create a new set with 32 levels and a promotion probability of 0.5.
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Create a new set with the given tunables.
    ///
    /// # Panics
    ///
    /// When `config` does not pass [`Config::validate`].
    pub fn with_config(config: Config) -> Self {
        Self::with_level_generator(GeometricalLevelGenerator::new(
            config.max_level(),
            config.probability(),
        ))
    }

    pub fn try_with_config(config: Config) -> Result<Self> {
        let lg = GeometricalLevelGenerator::try_new(config.max_level(), config.probability())?;
        Ok(Self::with_level_generator(lg))
    }
}

impl<T: Ord, G: LevelGenerator> SkipSet<T, G> {
    /// Create a new set drawing node heights from `level_generator`. The head
    /// is sized for `level_generator.total()` levels.
    ///
    /// # Panics
    ///
    /// When the generator reports zero levels or more than
    /// [`MAX_LEVEL_LIMIT`].
    pub fn with_level_generator(level_generator: G) -> Self {
        let total = level_generator.total();
        assert!(total > 0, "level generator must provide at least one level");
        assert!(
            total <= MAX_LEVEL_LIMIT,
            "level generator provides {} levels, at most {} are supported",
            total,
            MAX_LEVEL_LIMIT
        );
        debug!(max_level = total, "creating skip set");
        SkipSet {
            arena: NodeArena::new(total),
            len: 0,
            levels: 1,
            level_generator,
            update: vec![HEAD; total],
        }
    }

    /// Returns the number of elements in the set.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the set holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The number of levels currently in use. An empty set always has one.
    #[inline]
    pub fn levels(&self) -> usize {
        self.levels
    }

    /// The maximum number of levels the set can grow to.
    #[inline]
    pub fn max_level(&self) -> usize {
        self.level_generator.total()
    }

    /// Inserts `value`, returning `false` and dropping it if an equal element
    /// is already present.
    #[instrument(level = "trace", skip_all)]
    pub fn insert(&mut self, value: T) -> bool {
        let mut update = mem::take(&mut self.update);
        let found = self.search(&value, Some(update.as_mut_slice()));
        let inserted = if self.holds(found, &value) {
            false
        } else {
            self.link(value, &mut update);
            true
        };
        self.update = update;
        inserted
    }

    /// Inserts `value`, replacing and returning an equal element if there was
    /// one. Replacing never changes the shape of the set.
    #[instrument(level = "trace", skip_all)]
    pub fn replace(&mut self, value: T) -> Option<T> {
        let mut update = mem::take(&mut self.update);
        let found = self.search(&value, Some(update.as_mut_slice()));
        let old = if self.holds(found, &value) {
            self.arena.get_mut(found).value.replace(value)
        } else {
            self.link(value, &mut update);
            None
        };
        self.update = update;
        old
    }

    /// Removes the element equal to `value` and returns it.
    #[instrument(level = "trace", skip_all)]
    pub fn remove(&mut self, value: &T) -> Option<T> {
        let mut update = mem::take(&mut self.update);
        let found = self.search(value, Some(update.as_mut_slice()));
        let removed = if self.holds(found, value) {
            self.unlink(found, &update)
        } else {
            None
        };
        self.update = update;
        removed
    }

    /// Returns `true` if an element equal to `value` is present.
    pub fn contains(&self, value: &T) -> bool {
        self.find(value).is_some()
    }

    /// Returns the stored element equal to `value`.
    pub fn find(&self, value: &T) -> Option<&T> {
        let found = self.search(value, None);
        if self.holds(found, value) {
            Some(self.arena.value(found))
        } else {
            None
        }
    }

    /// Returns the smallest element, or [`Error::Empty`](crate::errs::Error::Empty).
    pub fn peek(&self) -> Result<&T> {
        self.try_peek().ok_or(Empty)
    }

    /// Returns the smallest element, if any. This is `O(1)`.
    pub fn try_peek(&self) -> Option<&T> {
        let first = self.arena.get(HEAD).next(0);
        if first == HEAD {
            None
        } else {
            Some(self.arena.value(first))
        }
    }

    /// Removes and returns the smallest element, or [`Error::Empty`](crate::errs::Error::Empty).
    pub fn delete_min(&mut self) -> Result<T> {
        self.try_delete_min().ok_or(Empty)
    }

    /// Removes and returns the smallest element, if any.
    #[instrument(level = "trace", skip_all)]
    pub fn try_delete_min(&mut self) -> Option<T> {
        let first = self.arena.get(HEAD).next(0);
        if first == HEAD {
            return None;
        }

        // the minimum is preceded by the head on every level it occupies
        let mut update = mem::take(&mut self.update);
        update[..self.levels].fill(HEAD);
        let removed = self.unlink(first, &update);
        self.update = update;
        removed
    }

    /// Returns the largest element, if any. Expected `O(log n)`.
    pub fn last(&self) -> Option<&T> {
        let mut cur = HEAD;
        for level in (0..self.levels).rev() {
            loop {
                let next = self.arena.get(cur).next(level);
                if next == HEAD {
                    break;
                }
                cur = next;
            }
        }
        if cur == HEAD {
            None
        } else {
            Some(self.arena.value(cur))
        }
    }

    /// Drops every element and returns the set to its initial state.
    pub fn clear(&mut self) {
        debug!(len = self.len, levels = self.levels, "clearing skip set");
        let total = self.max_level();
        self.arena.reset(total);
        self.update.fill(HEAD);
        self.len = 0;
        self.levels = 1;
    }

    /// Returns an iterator over the elements in ascending order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.arena, self.arena.get(HEAD).next(0), self.len)
    }

    /// Clones the elements, in ascending order, into `dest` starting at
    /// `start`.
    ///
    /// Fails with [`Error::InvalidArgument`](crate::errs::Error::InvalidArgument) when `start` is past the end of
    /// `dest` or the remaining room cannot hold every element. `dest` is left
    /// untouched in that case.
    pub fn copy_into(&self, dest: &mut [T], start: usize) -> Result<()>
    where
        T: Clone,
    {
        if start > dest.len() || dest.len() - start < self.len {
            return Err(InvalidArgument {
                start,
                len: dest.len(),
                required: self.len,
            });
        }
        for (slot, value) in dest[start..].iter_mut().zip(self.iter()) {
            slot.clone_from(value);
        }
        Ok(())
    }

    // ///////////////////////////////////////////////
    // Internal helpers
    // ///////////////////////////////////////////////

    /// Descends from the highest active level to level 0, advancing on each
    /// level while the next element is strictly less than `value`. When
    /// `update` is given, the last node visited on each level is recorded in
    /// it.
    ///
    /// Returns the level 0 successor of the final position: the first node
    /// not less than `value`, or [`HEAD`] if there is none.
    fn search(&self, value: &T, mut update: Option<&mut [Link]>) -> Link {
        let mut cur = HEAD;
        for level in (0..self.levels).rev() {
            loop {
                let next = self.arena.get(cur).next(level);
                if next == HEAD || self.arena.value(next) >= value {
                    break;
                }
                cur = next;
            }
            if let Some(update) = update.as_deref_mut() {
                update[level] = cur;
            }
        }
        self.arena.get(cur).next(0)
    }

    #[inline]
    fn holds(&self, link: Link, value: &T) -> bool {
        link != HEAD && self.arena.value(link) == value
    }

    /// Splices a new node holding `value` after the predecessors in `update`.
    fn link(&mut self, value: T, update: &mut [Link]) {
        // heights outside the generator contract would break the level
        // invariants, so they are pulled back into range
        let height = self
            .level_generator
            .random(self.levels)
            .clamp(1, (self.levels + 1).min(self.max_level()));

        if height > self.levels {
            // nothing occupies the new levels yet
            update[self.levels..height].fill(HEAD);
            trace!(from = self.levels, to = height, "growing levels");
            self.levels = height;
        }

        let link = self.arena.alloc(SkipNode::new(value, height));
        for (level, &prev) in update.iter().enumerate().take(height) {
            let next = self.arena.get(prev).next(level);
            self.arena.get_mut(link).set_next(level, next);
            self.arena.get_mut(prev).set_next(level, link);
        }
        self.len += 1;
    }

    /// Unlinks `target` from every level it occupies, releases its slot and
    /// drops any levels left empty.
    fn unlink(&mut self, target: Link, update: &[Link]) -> Option<T> {
        let height = self.arena.get(target).height();
        for (level, &prev) in update.iter().enumerate().take(height) {
            debug_assert_eq!(self.arena.get(prev).next(level), target);
            let next = self.arena.get(target).next(level);
            self.arena.get_mut(prev).set_next(level, next);
        }
        let value = self.arena.release(target);
        self.len -= 1;

        let before = self.levels;
        while self.levels > 1 && self.arena.get(HEAD).next(self.levels - 1) == HEAD {
            self.levels -= 1;
        }
        if self.levels != before {
            trace!(from = before, to = self.levels, "shrinking levels");
        }

        value
    }
}

// ///////////////////////////////////////////////
// Trait implementation
// ///////////////////////////////////////////////

impl<T: Ord> Default for SkipSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug, G> fmt::Debug for SkipSet<T, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let first = self.arena.get(HEAD).next(0);
        f.debug_set()
            .entries(Iter::new(&self.arena, first, self.len))
            .finish()
    }
}

impl<T: Ord, G: LevelGenerator> PartialEq for SkipSet<T, G> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Ord, G: LevelGenerator> Eq for SkipSet<T, G> {}

impl<T: Ord, G: LevelGenerator> Extend<T> for SkipSet<T, G> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iterable: I) {
        for value in iterable {
            self.insert(value);
        }
    }
}

impl<T: Ord> FromIterator<T> for SkipSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = SkipSet::new();
        set.extend(iter);
        set
    }
}

impl<T: Ord, G: LevelGenerator> IntoIterator for SkipSet<T, G> {
    type IntoIter = IntoIter<T, G>;
    type Item = T;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}

impl<'a, T: Ord, G: LevelGenerator> IntoIterator for &'a SkipSet<T, G> {
    type IntoIter = Iter<'a, T>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ///////////////////////////////////////////////
// Tests
// ///////////////////////////////////////////////
