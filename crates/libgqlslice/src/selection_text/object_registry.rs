use crate::selection_text::SelectionNode;
use indexmap::IndexMap;

/// Handle to a [`SelectionNode`] owned by an [`ObjectRegistry`].
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct NodeId(usize);

/// Arena of every [`SelectionNode`] produced while parsing one input.
///
/// Named blocks are deduplicated across the whole run: resolving a name that
/// was seen before returns the existing node, so fields from every block of
/// that name merge into one place. Anonymous nodes are never indexed.
#[derive(Clone, Debug, Default)]
pub struct ObjectRegistry {
    by_name: IndexMap<String, NodeId>,
    nodes: Vec<SelectionNode>,
}
impl ObjectRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn allocate_anonymous(&mut self) -> NodeId {
        self.push(SelectionNode::new(""))
    }

    pub fn get(&self, node: NodeId) -> Option<&SelectionNode> {
        self.nodes.get(node.0)
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of nodes, anonymous ones included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn lookup(&self, name: &str) -> Option<NodeId> {
        self.by_name.get(name).copied()
    }

    /// Named nodes in first-seen order.
    pub fn named(&self) -> impl Iterator<Item = (&str, NodeId)> {
        self.by_name.iter().map(|(name, node)| (name.as_str(), *node))
    }

    /// Only ever called with handles this registry handed out.
    pub(crate) fn node_mut(&mut self, node: NodeId) -> &mut SelectionNode {
        &mut self.nodes[node.0]
    }

    fn push(&mut self, node: SelectionNode) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    /// Find the node called `name`, or allocate and index a new one.
    pub fn resolve(&mut self, name: &str) -> NodeId {
        if let Some(existing) = self.lookup(name) {
            log::debug!("Merging repeated selection block `{name}`.");
            return existing;
        }
        let id = self.push(SelectionNode::new(name));
        self.by_name.insert(name.to_string(), id);
        id
    }
}
