use indexmap::IndexMap;
use indexmap::IndexSet;

/// Per-type record of every field name selected on that type, accumulated
/// across all selection paths of a query walk. Field names are only ever
/// added.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VisitedRegistry {
    fields_by_type: IndexMap<String, IndexSet<String>>,
}
impl VisitedRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains_type(&self, type_name: &str) -> bool {
        self.fields_by_type.contains_key(type_name)
    }

    /// The accumulated field names for `type_name`, in first-selected order.
    pub fn fields(&self, type_name: &str) -> Option<&IndexSet<String>> {
        self.fields_by_type.get(type_name)
    }

    pub fn record_field(&mut self, type_name: &str, field_name: &str) {
        self.record_type(type_name).insert(field_name.to_string());
    }

    /// Ensure an entry exists for `type_name`, even if no field ends up being
    /// selected on it.
    pub fn record_type(&mut self, type_name: &str) -> &mut IndexSet<String> {
        if !self.fields_by_type.contains_key(type_name) {
            self.fields_by_type.insert(type_name.to_string(), IndexSet::new());
        }
        &mut self.fields_by_type[type_name]
    }

    pub fn type_names(&self) -> impl Iterator<Item = &str> {
        self.fields_by_type.keys().map(String::as_str)
    }
}
