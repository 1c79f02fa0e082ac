use crate::selection_text::NodeId;
use crate::selection_text::ObjectRegistry;
use indexmap::IndexMap;
use serde::Deserialize;
use serde::Serialize;

/// Owned snapshot of a node and everything beneath it.
///
/// Because repeated blocks merge, a registry can contain cycles (a block
/// nested inside another block of the same name). A node that is already on
/// the path from the root is emitted once more with `recursive` set and
/// nothing beneath it.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct SelectionTree {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<SelectionTree>,
    pub fields: IndexMap<String, bool>,
    pub name: String,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub recursive: bool,
}
impl SelectionTree {
    /// Returns `None` if `node` did not come from `registry`.
    pub fn from_registry(registry: &ObjectRegistry, node: NodeId) -> Option<Self> {
        Self::build(registry, node, &mut vec![])
    }

    fn build(
        registry: &ObjectRegistry,
        node: NodeId,
        path: &mut Vec<NodeId>,
    ) -> Option<Self> {
        let selection_node = registry.get(node)?;
        if path.contains(&node) {
            return Some(Self {
                children: vec![],
                fields: IndexMap::new(),
                name: selection_node.name().to_string(),
                recursive: true,
            });
        }

        path.push(node);
        let children = selection_node.children().iter()
            .filter_map(|child| Self::build(registry, *child, path))
            .collect();
        path.pop();

        Some(Self {
            children,
            fields: selection_node.fields().clone(),
            name: selection_node.name().to_string(),
            recursive: false,
        })
    }

    fn write_indented(
        &self,
        f: &mut std::fmt::Formatter<'_>,
        indent: usize,
    ) -> std::fmt::Result {
        let pad = "  ".repeat(indent);
        let name = if self.name.is_empty() {
            "<anonymous>"
        } else {
            self.name.as_str()
        };
        if self.recursive {
            return writeln!(f, "{pad}{name} {{ ... }}");
        }

        writeln!(f, "{pad}{name} {{")?;
        let mut written = vec![false; self.children.len()];
        for (field_name, is_parent) in &self.fields {
            let child_pos = self.children.iter()
                .enumerate()
                .position(|(pos, child)| !written[pos] && &child.name == field_name);
            match child_pos {
                Some(pos) if *is_parent => {
                    written[pos] = true;
                    self.children[pos].write_indented(f, indent + 1)?;
                },
                _ => writeln!(f, "{pad}  {field_name}")?,
            }
        }
        for (child, _) in self.children.iter().zip(written).filter(|(_, done)| !done) {
            child.write_indented(f, indent + 1)?;
        }
        writeln!(f, "{pad}}}")
    }
}
impl std::fmt::Display for SelectionTree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.write_indented(f, 0)
    }
}
