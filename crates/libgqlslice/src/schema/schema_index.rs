use crate::operation::OperationKind;
use crate::schema::SchemaIndexBuilder;
use crate::types::TypeDefinition;
use indexmap::IndexMap;

/// Read-only catalogue of every type defined by a schema, keyed by type
/// name and kept in definition order.
#[derive(Clone, Debug, PartialEq)]
pub struct SchemaIndex {
    pub(crate) mutation_type_name: Option<String>,
    pub(crate) query_type_name: Option<String>,
    pub(crate) subscription_type_name: Option<String>,
    pub(crate) types: IndexMap<String, TypeDefinition>,
}
impl SchemaIndex {
    /// Returns every type in this [`SchemaIndex`], including the built-in
    /// scalars.
    pub fn all_types(&self) -> &IndexMap<String, TypeDefinition> {
        &self.types
    }

    /// Helper function that just delegates to [`SchemaIndexBuilder::new()`].
    pub fn builder() -> SchemaIndexBuilder {
        SchemaIndexBuilder::new()
    }

    /// Look up a type that closures are allowed to descend into: present in
    /// the index and not built-in.
    pub fn custom_type(&self, type_name: &str) -> Option<&TypeDefinition> {
        self.types.get(type_name).filter(|type_def| !type_def.built_in())
    }

    pub fn get_type(&self, type_name: &str) -> Option<&TypeDefinition> {
        self.types.get(type_name)
    }

    /// Name of the object type backing the given root operation.
    ///
    /// An explicit `schema { ... }` block wins; otherwise the conventional
    /// `Query`/`Mutation`/`Subscription` names are used when such a type
    /// exists.
    pub fn root_type_name(&self, operation: OperationKind) -> Option<&str> {
        match operation {
            OperationKind::Mutation => self.mutation_type_name.as_deref(),
            OperationKind::Query => self.query_type_name.as_deref(),
            OperationKind::Subscription => self.subscription_type_name.as_deref(),
        }
    }

    pub fn root_type(&self, operation: OperationKind) -> Option<&TypeDefinition> {
        self.root_type_name(operation)
            .and_then(|type_name| self.types.get(type_name))
    }
}
