use std::collections::HashSet;

/// Type names a full-closure traversal has already processed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VisitedSet {
    type_names: HashSet<String>,
}
impl VisitedSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, type_name: &str) -> bool {
        self.type_names.contains(type_name)
    }

    pub fn len(&self) -> usize {
        self.type_names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.type_names.is_empty()
    }

    /// Mark `type_name` as processed. Returns `false` if it already was.
    pub fn mark(&mut self, type_name: &str) -> bool {
        if self.type_names.contains(type_name) {
            return false;
        }
        self.type_names.insert(type_name.to_string())
    }
}
