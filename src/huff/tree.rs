// src/huff/tree.rs

//! Prefix-code tree construction via Huffman's greedy merge.

use crate::huff::freq::FreqTable;
use crate::huff::PSEUDO_EOF;
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// Node in a prefix-code tree.
///
/// Children are exclusively owned, so the tree is strictly shaped (no
/// sharing, no cycles) and is dropped wholesale when the root goes out of
/// scope at the end of one compress or decompress call. `weight` only
/// matters during construction; trees rebuilt from a serialized header
/// carry weight 0 throughout.
#[derive(Debug, Clone)]
pub enum HuffNode {
    Leaf {
        value: u16,
        weight: u64,
    },
    Internal {
        weight: u64,
        left: Box<HuffNode>,
        right: Box<HuffNode>,
    },
}

impl HuffNode {
    pub fn weight(&self) -> u64 {
        match self {
            HuffNode::Leaf { weight, .. } => *weight,
            HuffNode::Internal { weight, .. } => *weight,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, HuffNode::Leaf { .. })
    }

    /// Number of leaves in the subtree.
    pub fn leaf_count(&self) -> usize {
        match self {
            HuffNode::Leaf { .. } => 1,
            HuffNode::Internal { left, right, .. } => left.leaf_count() + right.leaf_count(),
        }
    }
}

// Nodes are ordered by weight alone; ties fall wherever the heap puts
// them, which is deterministic within one run but otherwise unspecified.
impl PartialEq for HuffNode {
    fn eq(&self, other: &Self) -> bool {
        self.weight() == other.weight()
    }
}

impl Eq for HuffNode {}

impl PartialOrd for HuffNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HuffNode {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight().cmp(&other.weight())
    }
}

/// Builds the optimal prefix-code tree for the given frequency table.
///
/// One leaf is created per byte value with a nonzero count, plus exactly
/// one synthetic leaf for the end-of-stream marker with weight 1. The two
/// lowest-weight nodes are repeatedly merged under a fresh internal node
/// until a single root remains. An empty input therefore still yields a
/// valid tree: the lone end-of-stream leaf.
pub fn build_tree(counts: &FreqTable) -> HuffNode {
    let mut heap = BinaryHeap::new();

    for (value, &count) in counts.iter().enumerate() {
        if count > 0 {
            heap.push(Reverse(HuffNode::Leaf {
                value: value as u16,
                weight: count,
            }));
        }
    }
    heap.push(Reverse(HuffNode::Leaf {
        value: PSEUDO_EOF,
        weight: 1,
    }));

    while heap.len() > 1 {
        let Reverse(left) = heap.pop().expect("heap holds at least two nodes");
        let Reverse(right) = heap.pop().expect("heap holds at least two nodes");
        heap.push(Reverse(HuffNode::Internal {
            weight: left.weight() + right.weight(),
            left: Box::new(left),
            right: Box::new(right),
        }));
    }

    let Reverse(root) = heap.pop().expect("heap holds at least the end-of-stream leaf");
    root
}
