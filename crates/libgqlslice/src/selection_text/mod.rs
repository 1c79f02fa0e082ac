//! A tolerant, line-oriented reader for GraphQL selection text.
//!
//! This does not parse GraphQL. It reads one trimmed line at a time and
//! recovers a tree of named selection blocks, their field names, and which
//! of those fields open nested blocks. Unbalanced or truncated input is
//! accepted.

mod object_registry;
mod selection_lines;
mod selection_node;
mod selection_text_parser;
mod selection_tree;

pub use object_registry::NodeId;
pub use object_registry::ObjectRegistry;
pub use selection_lines::selection_lines;
pub use selection_node::SelectionNode;
pub use selection_text_parser::ParsedObject;
pub use selection_text_parser::SelectionTextParser;
pub use selection_text_parser::selection_name;
pub use selection_tree::SelectionTree;

/// Split `text` into selection lines and parse every top-level block into
/// `registry`.
pub fn parse_selection_text(registry: &mut ObjectRegistry, text: &str) -> Vec<NodeId> {
    let lines = selection_lines(text);
    SelectionTextParser::new(registry).parse_all(lines.as_slice())
}
