// Copyright (c) Sienna Satterwhite, CesiumDB Contributors
// SPDX-License-Identifier: GPL-3.0-only WITH Classpath-exception-2.0

use std::iter::FusedIterator;

use crate::skiplist::{
    level_generator::LevelGenerator,
    node::{
        Link,
        NodeArena,
        HEAD,
    },
    set::SkipSet,
};

/// Borrowing iterator over a [`SkipSet`], in ascending order. It walks the
/// base level from the head until the chain wraps back around.
pub struct Iter<'a, T> {
    arena: &'a NodeArena<T>,
    cur: Link,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(arena: &'a NodeArena<T>, first: Link, len: usize) -> Self {
        Iter {
            arena,
            cur: first,
            remaining: len,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cur == HEAD {
            return None;
        }
        let value = self.arena.value(self.cur);
        self.cur = self.arena.get(self.cur).next(0);
        self.remaining -= 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            arena: self.arena,
            cur: self.cur,
            remaining: self.remaining,
        }
    }
}

/// Consuming iterator over a [`SkipSet`]. Each step removes the current
/// minimum, so the elements come out in ascending order.
pub struct IntoIter<T, G> {
    set: SkipSet<T, G>,
}

impl<T: Ord, G: LevelGenerator> IntoIter<T, G> {
    pub(crate) fn new(set: SkipSet<T, G>) -> Self {
        IntoIter { set }
    }
}

impl<T: Ord, G: LevelGenerator> Iterator for IntoIter<T, G> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.set.try_delete_min()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.set.len();
        (len, Some(len))
    }
}

impl<T: Ord, G: LevelGenerator> ExactSizeIterator for IntoIter<T, G> {}

impl<T: Ord, G: LevelGenerator> FusedIterator for IntoIter<T, G> {}

#[cfg(test)]
mod tests {
    use crate::skiplist::SkipSet;

    #[test]
    fn test_iter_fused() {
        let set: SkipSet<u8> = [2, 1].into_iter().collect();
        let mut iter = set.iter();
        assert_eq!(iter.next(), Some(&1));
        assert_eq!(iter.next(), Some(&2));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
        assert_eq!(iter.len(), 0);
    }

    #[test]
    fn test_iter_clone_resumes() {
        let set: SkipSet<u8> = (0..5).collect();
        let mut iter = set.iter();
        iter.next();
        let rest: Vec<_> = iter.clone().copied().collect();
        assert_eq!(rest, vec![1, 2, 3, 4]);
        assert_eq!(iter.next(), Some(&1));
    }

    #[test]
    fn test_into_iter_len() {
        let set: SkipSet<u8> = (0..5).collect();
        let mut iter = set.into_iter();
        assert_eq!(iter.len(), 5);
        assert_eq!(iter.next(), Some(0));
        assert_eq!(iter.len(), 4);
        assert_eq!(iter.collect::<Vec<_>>(), vec![1, 2, 3, 4]);
    }
}
