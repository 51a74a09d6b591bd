use crate::queue::PriorityQueue;
use crate::tree::tree_node::BitCode;
use crate::tree::tree_node::Node;
use crate::tree::tree_node::NodeId;
use crate::tree::Tree;
use crate::CodeTable;
use crate::MAX_CODE_LENGTH;
use crate::MAX_NUM_NODES;
use common::CountsTable;
use common::HuffError;
use common::Result;
use log::Level::Trace;
use log::*;

/// Decides the queue order between nodes with the same count.
///
/// Leaves come before parents. Leaves are ordered by symbol, parents by creation order, older
/// parents first. The order is part of the format, a different order builds a different tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum TieBreak {
    Leaf(u8),
    Parent(u16),
}

/// Ordered by count, then by tie break. No two entries of a queue compare equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct QueueEntry {
    count: u64,
    tie_break: TieBreak,
    node: NodeId,
}

/// Puts a leaf node for every symbol with a count into the queue. The leaves are the first nodes
/// in `nodes`, ordered by symbol.
fn make_huffman_queue(
    counts: &CountsTable,
    nodes: &mut Vec<Node>,
) -> Result<PriorityQueue<QueueEntry>> {
    let mut queue = PriorityQueue::with_capacity(counts.len())?;
    for (byte, count) in counts.iter().enumerate().filter(|(_, count)| **count != 0) {
        let node = nodes.len() as NodeId;
        nodes.push(Node::leaf(byte as u8, *count));
        queue.enqueue(QueueEntry {
            count: *count,
            tie_break: TieBreak::Leaf(byte as u8),
            node,
        })?;
    }
    Ok(queue)
}

/// Creates a huffman tree by merging the two nodes with the lowest count until one node is left.
///
/// The first node taken from the queue becomes the left child. Returns `None` if no symbol has a
/// count. A single symbol results in a tree with only a leaf.
pub fn build_tree(counts: &CountsTable) -> Result<Option<Tree>> {
    let mut nodes = Vec::new();
    nodes.try_reserve_exact(MAX_NUM_NODES)?;

    let mut queue = make_huffman_queue(counts, &mut nodes)?;
    if queue.is_empty() {
        debug!("no symbols, no tree");
        return Ok(None);
    }

    let mut num_parents: u16 = 0;
    while queue.len() > 1 {
        let left = queue.dequeue()?;
        let right = queue.dequeue()?;
        let count = left.count + right.count;

        let node = nodes.len() as NodeId;
        nodes.push(Node::parent(left.node, right.node, count));
        queue.enqueue(QueueEntry {
            count,
            tie_break: TieBreak::Parent(num_parents),
            node,
        })?;
        num_parents += 1;
    }
    let root = queue.dequeue()?;

    let tree = Tree::new(nodes, root.node);
    debug!(
        "built tree: symbols {} parents {} depth {} estimated size {}",
        tree.get_num_symbol_nodes(),
        tree.get_num_parent_nodes(),
        tree.get_depth(),
        tree.estimate_compressed_size()
    );
    Ok(Some(tree))
}

/// converts the tree into a table with the prefix code for each symbol
///
/// Walking left adds a 0, walking right a 1. Symbols not in the tree have a code with 0 bits.
pub fn tree_to_table(tree: &Tree) -> Result<CodeTable> {
    let mut symbol_lookup_table = [BitCode::default(); u8::MAX as usize + 1];
    let mut too_long = None;

    tree.walk_tree(tree.root_node, &mut |node, transitions, depth| {
        if let Some(symbol) = node.symbol() {
            if depth > MAX_CODE_LENGTH {
                too_long.get_or_insert((symbol, depth));
                return;
            }
            // a tree with only a root leaf has no transitions, the symbol still needs a bit
            symbol_lookup_table[symbol as usize] = BitCode {
                bits: transitions,
                number_bits: depth.max(1) as u8,
            };
        }
    });
    if let Some((symbol, number_bits)) = too_long {
        return Err(HuffError::CodeTooLong {
            symbol,
            number_bits,
        });
    }

    if log_enabled!(Trace) {
        for (symbol, code) in symbol_lookup_table.iter().enumerate() {
            if code.number_bits != 0 {
                trace!("{}: {:?}", symbol, code);
            }
        }
    }

    Ok(symbol_lookup_table)
}

/// will validate the table to have generated correct prefix properties for all symbols.
/// This validation is rather slow and should not be used in a regular compression execution.
pub fn test_prefix_property(table: &CodeTable) {
    let codes: Vec<&BitCode> = table.iter().filter(|code| code.number_bits != 0).collect();
    for node in &codes {
        for comp_node in &codes {
            if core::ptr::eq(*node, *comp_node) || comp_node.number_bits > node.number_bits {
                continue;
            }
            // find any node with less or equal bits which has the same prefix
            let bit_diff = node.number_bits - comp_node.number_bits;
            if (node.bits >> bit_diff) == comp_node.bits {
                panic!(
                    "invalid prefix detected between {:?} and {:?}",
                    node, comp_node
                );
            }
        }
    }
}
