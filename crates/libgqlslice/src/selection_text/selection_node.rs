use crate::selection_text::NodeId;
use indexmap::IndexMap;

/// One named selection block.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SelectionNode {
    children: Vec<NodeId>,
    fields: IndexMap<String, bool>,
    name: String,
}
impl SelectionNode {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self {
            children: vec![],
            fields: IndexMap::new(),
            name: name.into(),
        }
    }

    /// Append `child` unless it is already a child. Returns `false` if it
    /// was.
    pub(crate) fn add_child(&mut self, child: NodeId) -> bool {
        if self.children.contains(&child) {
            return false;
        }
        self.children.push(child);
        true
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Field names in first-seen order, each mapped to whether the field
    /// opened a nested block.
    pub fn fields(&self) -> &IndexMap<String, bool> {
        &self.fields
    }

    pub fn is_anonymous(&self) -> bool {
        self.name.is_empty()
    }

    /// The block's name. Empty for anonymous blocks.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Record `field_name`. A field that opened a nested block anywhere
    /// stays marked as a parent.
    pub(crate) fn record_field(&mut self, field_name: &str, is_parent: bool) {
        let entry = self.fields.entry(field_name.to_string()).or_insert(is_parent);
        *entry |= is_parent;
    }
}
