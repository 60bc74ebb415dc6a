//! Frontier disciplines for the exploration loop.
//!
//! The loop in [`explore`](crate::explore) is the same for every
//! algorithm; only the order in which candidates leave the frontier
//! changes.

use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, VecDeque};

use pathviz_core::Point;

/// A cell waiting on the frontier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Candidate {
    pub(crate) pos: Point,
    /// Accumulated weight from the source.
    pub(crate) cost: i32,
    /// Priority: `cost` plus the heuristic estimate.
    pub(crate) key: i32,
}

pub(crate) trait Frontier {
    fn push(&mut self, node: Candidate);

    fn pop(&mut self) -> Option<Candidate>;

    /// Push the successors of one expanded node, given in direction order.
    fn push_successors(&mut self, nodes: &[Candidate]) {
        for &n in nodes {
            self.push(n);
        }
    }
}

/// LIFO frontier for depth-first search.
#[derive(Default)]
pub(crate) struct Stack {
    items: Vec<Candidate>,
}

impl Frontier for Stack {
    fn push(&mut self, node: Candidate) {
        self.items.push(node);
    }

    fn pop(&mut self) -> Option<Candidate> {
        self.items.pop()
    }

    /// Successors go on in reverse so the first direction is popped first,
    /// which reproduces the visit order of a recursive depth-first search.
    fn push_successors(&mut self, nodes: &[Candidate]) {
        self.items.extend(nodes.iter().rev().copied());
    }
}

/// FIFO frontier for breadth-first search.
#[derive(Default)]
pub(crate) struct Queue {
    items: VecDeque<Candidate>,
}

impl Frontier for Queue {
    fn push(&mut self, node: Candidate) {
        self.items.push_back(node);
    }

    fn pop(&mut self) -> Option<Candidate> {
        self.items.pop_front()
    }
}

#[derive(Debug)]
struct Entry {
    node: Candidate,
    /// Insertion counter; equal keys pop in insertion order.
    seq: u64,
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.node.key == other.node.key && self.seq == other.seq
    }
}

impl Eq for Entry {}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.node
            .key
            .cmp(&other.node.key)
            .then(self.seq.cmp(&other.seq))
    }
}

/// Min-priority frontier keyed by [`Candidate::key`] for Dijkstra and A*.
#[derive(Default)]
pub(crate) struct Priority {
    heap: BinaryHeap<Reverse<Entry>>,
    seq: u64,
}

impl Frontier for Priority {
    fn push(&mut self, node: Candidate) {
        let seq = self.seq;
        self.seq += 1;
        self.heap.push(Reverse(Entry { node, seq }));
    }

    fn pop(&mut self) -> Option<Candidate> {
        self.heap.pop().map(|Reverse(e)| e.node)
    }
}
