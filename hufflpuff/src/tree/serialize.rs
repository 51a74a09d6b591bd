//! The tree is stored in postorder: left subtree, right subtree, node.
//!
//! A parent is a single `0` bit, a leaf is a `1` bit followed by its symbol in 8 bits. A reader
//! rebuilds the tree with a stack: a leaf is pushed, a parent pops its right and left child and is
//! pushed. The number of symbols is stored outside the tree, since a lone leaf looks the same as
//! the start of a bigger tree.

use crate::tree::tree_node::Node;
use crate::tree::tree_node::NodeId;
use crate::tree::Tree;
use crate::MAX_NUM_NODES;
use bitstream::BitReader;
use bitstream::BitWriter;
use common::HuffError;
use common::Result;
use std::io;
use std::io::Write;

const PARENT_MARKER: u32 = 0;
const LEAF_MARKER: u32 = 1;

/// writes the structure of the tree, without counts
pub fn write_tree<W: Write>(tree: &Tree, writer: &mut BitWriter<W>) -> io::Result<()> {
    let mut result = Ok(());
    tree.walk_tree_postorder(tree.root_node, &mut |node| {
        if result.is_err() {
            return;
        }
        result = match node.symbol() {
            Some(symbol) => writer.write_bits(LEAF_MARKER << 8 | symbol as u32, 9),
            None => writer.write_bits(PARENT_MARKER, 1),
        };
    });
    result
}

/// Rebuilds a tree written by [`write_tree`] with `num_symbols` leaves.
///
/// Returns `None` for 0 symbols. The nodes of the rebuilt tree have a count of 0.
pub fn read_tree(reader: &mut BitReader<'_>, num_symbols: u16) -> Result<Option<Tree>> {
    if num_symbols == 0 {
        return Ok(None);
    }
    if num_symbols as usize > u8::MAX as usize + 1 {
        return Err(HuffError::MalformedTree("more symbols than byte values"));
    }

    let mut nodes = Vec::new();
    nodes.try_reserve_exact(MAX_NUM_NODES)?;
    let mut stack: Vec<NodeId> = Vec::new();
    stack.try_reserve_exact(num_symbols as usize)?;
    let mut seen = [false; 256];
    let mut symbols_read = 0;

    while !(symbols_read == num_symbols && stack.len() == 1) {
        let node = if reader.read_bit()? {
            if symbols_read == num_symbols {
                return Err(HuffError::MalformedTree("more leaves than symbols"));
            }
            let symbol = reader.read_bits(8)? as u8;
            if seen[symbol as usize] {
                return Err(HuffError::MalformedTree("duplicate symbol"));
            }
            seen[symbol as usize] = true;
            symbols_read += 1;
            Node::leaf(symbol, 0)
        } else {
            let right = stack.pop();
            let left = stack.pop();
            match (left, right) {
                (Some(left), Some(right)) => Node::parent(left, right, 0),
                _ => return Err(HuffError::MalformedTree("parent without two children")),
            }
        };
        stack.push(nodes.len() as NodeId);
        nodes.push(node);
    }

    let root = nodes.len() as NodeId - 1;
    Ok(Some(Tree::new(nodes, root)))
}
