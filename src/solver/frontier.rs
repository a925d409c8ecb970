use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, VecDeque};

use super::node::SearchNode;

/// Nodes waiting to be expanded, the order is what distinguishes the search methods.
pub(crate) trait Frontier<'a> {
    fn push(&mut self, node: &'a SearchNode<'a>);
    fn pop(&mut self) -> Option<&'a SearchNode<'a>>;
    fn len(&self) -> usize;
}

#[derive(Debug, Default)]
pub(crate) struct Fifo<'a>(VecDeque<&'a SearchNode<'a>>);

impl<'a> Fifo<'a> {
    pub(crate) fn new() -> Self {
        Fifo(VecDeque::new())
    }
}

impl<'a> Frontier<'a> for Fifo<'a> {
    fn push(&mut self, node: &'a SearchNode<'a>) {
        self.0.push_back(node);
    }

    fn pop(&mut self) -> Option<&'a SearchNode<'a>> {
        self.0.pop_front()
    }

    fn len(&self) -> usize {
        self.0.len()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Priority {
    /// h only
    Heuristic,
    /// g + h
    Cost,
}

#[derive(Debug)]
struct Entry<'a> {
    key: u32,
    seq: u64,
    node: &'a SearchNode<'a>,
}

impl PartialOrd for Entry<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Entry<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        // the node itself never takes part - equal keys go by insertion order
        (self.key, self.seq).cmp(&(other.key, other.seq))
    }
}

impl PartialEq for Entry<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key && self.seq == other.seq
    }
}

impl Eq for Entry<'_> {}

/// Lowest key first, stable among equal keys.
#[derive(Debug)]
pub(crate) struct PriorityFrontier<'a> {
    heap: BinaryHeap<Reverse<Entry<'a>>>,
    priority: Priority,
    seq: u64,
}

impl<'a> PriorityFrontier<'a> {
    pub(crate) fn new(priority: Priority) -> Self {
        Self {
            heap: BinaryHeap::new(),
            priority,
            seq: 0,
        }
    }
}

impl<'a> Frontier<'a> for PriorityFrontier<'a> {
    fn push(&mut self, node: &'a SearchNode<'a>) {
        let key = match self.priority {
            Priority::Heuristic => node.h,
            Priority::Cost => node.cost(),
        };
        self.heap.push(Reverse(Entry {
            key,
            seq: self.seq,
            node,
        }));
        self.seq += 1;
    }

    fn pop(&mut self) -> Option<&'a SearchNode<'a>> {
        self.heap.pop().map(|Reverse(entry)| entry.node)
    }

    fn len(&self) -> usize {
        self.heap.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Dir;
    use crate::state::State;

    fn nodes() -> Vec<SearchNode<'static>> {
        let goal = State::goal();
        let other = goal.apply(Dir::Down).unwrap();
        vec![
            SearchNode::new(goal, None, None, 0, 5),
            SearchNode::new(other, None, None, 4, 1),
            SearchNode::new(goal, None, None, 1, 3),
            SearchNode::new(other, None, None, 2, 3),
        ]
    }

    fn drain<'a, F: Frontier<'a>>(mut frontier: F, nodes: &'a [SearchNode<'a>]) -> Vec<(u32, u32)> {
        for node in nodes {
            frontier.push(node);
        }
        assert_eq!(frontier.len(), nodes.len());
        let mut order = Vec::new();
        while let Some(node) = frontier.pop() {
            order.push((node.dist, node.h));
        }
        order
    }

    #[test]
    fn fifo() {
        let nodes = nodes();
        let order = drain(Fifo::new(), &nodes);
        assert_eq!(order, [(0, 5), (4, 1), (1, 3), (2, 3)]);
    }

    #[test]
    fn by_heuristic() {
        let nodes = nodes();
        let order = drain(PriorityFrontier::new(Priority::Heuristic), &nodes);
        // h ties keep insertion order
        assert_eq!(order, [(4, 1), (1, 3), (2, 3), (0, 5)]);
    }

    #[test]
    fn by_cost() {
        let nodes = nodes();
        let order = drain(PriorityFrontier::new(Priority::Cost), &nodes);
        // costs 5, 5, 4, 5
        assert_eq!(order, [(1, 3), (0, 5), (4, 1), (2, 3)]);
    }
}
