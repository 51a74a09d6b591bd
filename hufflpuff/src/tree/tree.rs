use super::tree_node::Node;
use super::tree_node::NodeId;
use crate::tree::render_tree::render_plan_to;

#[derive(Debug)]
pub struct Tree {
    pub(crate) nodes: Vec<Node>,
    /// the root node owns, directly or indirectly, every other node of the tree
    pub(crate) root_node: NodeId,
    pub(crate) num_symbol_nodes: u16,
}

impl Tree {
    pub(crate) fn new(nodes: Vec<Node>, root_node: NodeId) -> Self {
        let num_symbol_nodes = nodes.iter().filter(|node| node.is_leaf()).count() as u16;
        Tree {
            nodes,
            root_node,
            num_symbol_nodes,
        }
    }

    pub fn get_node(&self, node_pos: NodeId) -> &Node {
        &self.nodes[node_pos as usize]
    }
    pub fn get_root_node(&self) -> &Node {
        &self.nodes[self.root_node as usize]
    }
    pub fn get_root_node_pos(&self) -> NodeId {
        self.root_node
    }
    pub fn get_num_symbol_nodes(&self) -> u16 {
        self.num_symbol_nodes
    }
    pub fn get_num_parent_nodes(&self) -> u16 {
        self.nodes.len() as u16 - self.num_symbol_nodes
    }

    /// depth of the deepest leaf. A tree with a single leaf has a depth of 0.
    pub fn get_depth(&self) -> usize {
        let mut max_depth = 0;
        self.walk_tree(self.root_node, &mut |_node, _transitions, depth| {
            max_depth = max_depth.max(depth);
        });
        max_depth
    }

    /// returns estimated compressed size of the payload in byte
    pub fn estimate_compressed_size(&self) -> usize {
        let mut size_in_bits = 0;
        self.walk_tree(self.root_node, &mut |node, _transitions, depth| {
            if node.is_leaf() {
                // a lone root leaf is still coded with one bit
                size_in_bits += node.count as usize * depth.max(1);
            }
        });
        ((size_in_bits as f32) / 8.0).ceil() as usize
    }

    /// Visits every node below and including `start_node_pos` in preorder, left child first.
    ///
    /// `fun` receives the node, the transitions from `start_node_pos` (left = 0, right = 1, first
    /// transition in the highest bit) and the depth. Transitions only hold the last 128 steps.
    pub fn walk_tree<F>(&self, start_node_pos: NodeId, fun: &mut F)
    where
        F: FnMut(&Node, u128, usize),
    {
        let mut stack = Vec::with_capacity(self.get_num_symbol_nodes() as usize);
        stack.push((start_node_pos, 0_u128, 0_usize));
        while let Some((node_pos, transitions, depth)) = stack.pop() {
            let node = self.get_node(node_pos);
            fun(node, transitions, depth);
            if let Some((left, right)) = node.children() {
                stack.push((right, (transitions << 1) | 1, depth + 1));
                stack.push((left, transitions << 1, depth + 1));
            }
        }
    }

    /// Visits every node below and including `start_node_pos` in postorder: left subtree, right
    /// subtree, node.
    pub fn walk_tree_postorder<F>(&self, start_node_pos: NodeId, fun: &mut F)
    where
        F: FnMut(&Node),
    {
        // the flag marks nodes whose children are already on the stack
        let mut stack = Vec::with_capacity(self.nodes.len());
        stack.push((start_node_pos, false));
        while let Some((node_pos, expanded)) = stack.pop() {
            let node = self.get_node(node_pos);
            match node.children() {
                Some((left, right)) if !expanded => {
                    stack.push((node_pos, true));
                    stack.push((right, false));
                    stack.push((left, false));
                }
                _ => fun(node),
            }
        }
    }
}

impl std::fmt::Display for Tree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        render_plan_to(self, f)
    }
}
