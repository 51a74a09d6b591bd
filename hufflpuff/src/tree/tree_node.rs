/// position of a node in the node array of a tree
pub type NodeId = u16;

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// a symbol, limited to single byte alphabet
    Leaf { symbol: u8 },
    /// a parent always owns exactly two children
    Parent { left: NodeId, right: NodeId },
}

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Node {
    /// the number of occurences, for a parent the sum of both children
    pub(crate) count: u64,
    pub(crate) kind: NodeKind,
}

impl Node {
    pub(crate) fn leaf(symbol: u8, count: u64) -> Self {
        Node {
            count,
            kind: NodeKind::Leaf { symbol },
        }
    }

    pub(crate) fn parent(left: NodeId, right: NodeId, count: u64) -> Self {
        Node {
            count,
            kind: NodeKind::Parent { left, right },
        }
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn symbol(&self) -> Option<u8> {
        match self.kind {
            NodeKind::Leaf { symbol } => Some(symbol),
            NodeKind::Parent { .. } => None,
        }
    }

    pub fn children(&self) -> Option<(NodeId, NodeId)> {
        match self.kind {
            NodeKind::Leaf { .. } => None,
            NodeKind::Parent { left, right } => Some((left, right)),
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.symbol().is_some()
    }
}

impl core::fmt::Debug for Node {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.kind {
            NodeKind::Leaf { symbol } => f.write_fmt(format_args!(
                "Node{{ symbol:{:?} count:{} }}",
                symbol, self.count
            )),
            NodeKind::Parent { left, right } => f.write_fmt(format_args!(
                "Node{{ count:{} left:{} right:{} }}",
                self.count, left, right
            )),
        }
    }
}

/// The prefix code of a symbol. `bits` is aligned to the least significant bit, the first bit
/// of the code (the transition from the root node) is the highest one.
#[derive(Default, Clone, Copy, PartialEq, Eq)]
pub struct BitCode {
    pub(crate) bits: u128,
    pub(crate) number_bits: u8,
}

impl BitCode {
    pub fn bits(&self) -> u128 {
        self.bits
    }
    pub fn number_bits(&self) -> u8 {
        self.number_bits
    }
}

impl core::fmt::Debug for BitCode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_fmt(format_args!(
            "BitCode{{ bits:{:0width$b} number_bits:{:?} }}",
            self.bits,
            self.number_bits,
            width = self.number_bits as usize
        ))
    }
}
