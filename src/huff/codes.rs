// src/huff/codes.rs

//! Code-table derivation: root-to-leaf bit paths for every symbol.

use crate::huff::tree::HuffNode;
use crate::huff::PSEUDO_EOF;
use bitvec::order::Msb0;
use bitvec::prelude::*;

/// A single variable-length code, MSB-first (first bit = first descent).
pub type Code = BitVec<u8, Msb0>;

/// Mapping from symbol value (0..=256) to its code, populated only for
/// symbols that have a leaf in the tree.
pub struct CodeTable {
    codes: Vec<Option<Code>>,
}

impl CodeTable {
    /// The code for `symbol`, if the tree has a leaf for it. Symbols past
    /// the end-of-stream marker have no slot and return `None`.
    pub fn get(&self, symbol: u16) -> Option<&BitSlice<u8, Msb0>> {
        self.codes.get(symbol as usize)?.as_deref()
    }

    /// The end-of-stream terminator code. Always present.
    pub fn eof_code(&self) -> &BitSlice<u8, Msb0> {
        self.get(PSEUDO_EOF)
            .expect("every tree carries an end-of-stream leaf")
    }
}

/// Walks the tree depth-first, appending 0 for a left descent and 1 for a
/// right descent, and records the accumulated path at each leaf.
///
/// A degenerate tree of one leaf (empty input) assigns that leaf the empty
/// path; the payload codec treats a zero-length code as writing nothing,
/// and the decoder never consults it because such a root terminates the
/// walk immediately.
pub fn derive_codes(root: &HuffNode) -> CodeTable {
    let mut table = CodeTable {
        codes: vec![None; usize::from(PSEUDO_EOF) + 1],
    };
    let mut path = Code::new();
    walk(root, &mut path, &mut table);
    table
}

fn walk(node: &HuffNode, path: &mut Code, table: &mut CodeTable) {
    match node {
        HuffNode::Leaf { value, .. } => {
            table.codes[usize::from(*value)] = Some(path.clone());
        }
        HuffNode::Internal { left, right, .. } => {
            path.push(false);
            walk(left, path, table);
            path.pop();
            path.push(true);
            walk(right, path, table);
            path.pop();
        }
    }
}
