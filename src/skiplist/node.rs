// Copyright (c) Sienna Satterwhite, CesiumDB Contributors
// SPDX-License-Identifier: GPL-3.0-only WITH Classpath-exception-2.0

/// Handle to a node inside a [`NodeArena`].
pub(crate) type Link = usize;

/// The head sentinel always lives in the first slot. Every level is circular,
/// so a link equal to `HEAD` marks the end of that level.
pub(crate) const HEAD: Link = 0;

/// SkipNodes make up the SkipSet. The head node has no value, every other
/// live node does.
///
/// The height of a node is the length of `links` and is fixed once the node
/// is created. `links[i]` is the next node on level `i`.
#[derive(Clone, Debug)]
pub(crate) struct SkipNode<T> {
    pub(crate) value: Option<T>,
    links: Vec<Link>,
}

impl<T> SkipNode<T> {
    /// Create a new head node whose every level points back at itself.
    pub(crate) fn head(total_levels: usize) -> Self {
        SkipNode {
            value: None,
            links: vec![HEAD; total_levels],
        }
    }

    /// Create a new node with the given value. The links all point at the
    /// head and have to be spliced by the caller.
    pub(crate) fn new(value: T, height: usize) -> Self {
        debug_assert!(height > 0);
        SkipNode {
            value: Some(value),
            links: vec![HEAD; height],
        }
    }

    #[inline]
    pub(crate) fn height(&self) -> usize {
        self.links.len()
    }

    #[inline]
    pub(crate) fn next(&self, level: usize) -> Link {
        self.links[level]
    }

    #[inline]
    pub(crate) fn set_next(&mut self, level: usize, link: Link) {
        self.links[level] = link;
    }
}

/// Owns every node of a set. Links are indices into `nodes`, which keeps the
/// circular head free of self-referential ownership. Slots of removed nodes
/// are recycled through `free`.
#[derive(Clone, Debug)]
pub(crate) struct NodeArena<T> {
    nodes: Vec<SkipNode<T>>,
    free: Vec<Link>,
}

impl<T> NodeArena<T> {
    pub(crate) fn new(total_levels: usize) -> Self {
        NodeArena {
            nodes: vec![SkipNode::head(total_levels)],
            free: Vec::new(),
        }
    }

    #[inline]
    pub(crate) fn get(&self, link: Link) -> &SkipNode<T> {
        &self.nodes[link]
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, link: Link) -> &mut SkipNode<T> {
        &mut self.nodes[link]
    }

    /// The value held by a live node. Must not be called with [`HEAD`].
    #[inline]
    pub(crate) fn value(&self, link: Link) -> &T {
        debug_assert_ne!(link, HEAD);
        match &self.nodes[link].value {
            | Some(v) => v,
            | None => unreachable!("link {} does not hold a value", link),
        }
    }

    pub(crate) fn alloc(&mut self, node: SkipNode<T>) -> Link {
        match self.free.pop() {
            | Some(link) => {
                self.nodes[link] = node;
                link
            },
            | None => {
                self.nodes.push(node);
                self.nodes.len() - 1
            },
        }
    }

    /// Vacates the slot behind `link` and hands back its value. The caller
    /// must have unlinked the node from every level first.
    pub(crate) fn release(&mut self, link: Link) -> Option<T> {
        debug_assert_ne!(link, HEAD);
        let node = &mut self.nodes[link];
        let value = node.value.take();
        node.links = Vec::new();
        self.free.push(link);
        value
    }

    /// Drops every node and starts over with a fresh head.
    pub(crate) fn reset(&mut self, total_levels: usize) {
        self.nodes.clear();
        self.free.clear();
        self.nodes.push(SkipNode::head(total_levels));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_head_is_circular() {
        let arena: NodeArena<u32> = NodeArena::new(4);
        let head = arena.get(HEAD);
        assert_eq!(head.height(), 4);
        assert!(head.value.is_none());
        for level in 0..4 {
            assert_eq!(head.next(level), HEAD);
        }
    }

    #[test]
    fn test_released_slots_are_reused() {
        let mut arena = NodeArena::new(4);
        let a = arena.alloc(SkipNode::new(1, 1));
        let b = arena.alloc(SkipNode::new(2, 3));
        assert_ne!(a, b);
        assert_eq!(*arena.value(b), 2);
        assert_eq!(arena.get(b).height(), 3);

        assert_eq!(arena.release(a), Some(1));
        let c = arena.alloc(SkipNode::new(3, 2));
        assert_eq!(c, a);
        assert_eq!(*arena.value(c), 3);
        assert_eq!(arena.get(c).height(), 2);
    }

    #[test]
    fn test_reset() {
        let mut arena = NodeArena::new(2);
        let a = arena.alloc(SkipNode::new("a", 2));
        arena.get_mut(HEAD).set_next(0, a);
        arena.reset(2);
        assert_eq!(arena.get(HEAD).next(0), HEAD);
        assert_eq!(arena.alloc(SkipNode::new("b", 1)), 1);
    }
}
