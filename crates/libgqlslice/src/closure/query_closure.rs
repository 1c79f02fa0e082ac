use crate::ast;
use crate::closure::ClosureError;
use crate::closure::FragmentAssembler;
use crate::closure::VisitedRegistry;
use crate::closure::argument_stub::synthesize_argument_stub;
use crate::closure::fragment_writer;
use crate::operation::OperationKind;
use crate::schema::SchemaIndex;
use crate::types::TypeAnnotation;
use crate::types::TypeDefinition;
use indexmap::IndexSet;

type Result<T> = std::result::Result<T, ClosureError>;

/// Parse `query_src` and return the schema fragments its operations need.
pub fn slice_query(index: &SchemaIndex, query_src: &str) -> Result<Vec<String>> {
    let doc = ast::query::parse(query_src)
        .map_err(|err| ClosureError::QueryParseError(err.to_string()))?;
    QueryClosureWalker::new(index).walk_document(&doc)
}

/// Walks the selection sets of a query document against a [`SchemaIndex`]
/// and collects, for every composite type reached, exactly the fields that
/// were selected on it.
///
/// Output is post-order: a type's slot is fixed once all of its selected
/// children have been walked, so nested types come before the types that
/// reference them. The text of each type fragment is only produced at the
/// very end from the fully accumulated field set, so a type reached through
/// several selection paths lists the union of the fields each path selected.
///
/// Fragment spreads and inline fragments are not expanded.
#[derive(Debug)]
pub struct QueryClosureWalker<'schema> {
    index: &'schema SchemaIndex,
    output: FragmentAssembler,
    visited: VisitedRegistry,
}
impl<'schema> QueryClosureWalker<'schema> {
    pub fn new(index: &'schema SchemaIndex) -> Self {
        Self {
            index,
            output: FragmentAssembler::new(),
            visited: VisitedRegistry::new(),
        }
    }

    /// Render every collected fragment in emission order.
    pub fn finish(self) -> Vec<String> {
        let Self {
            index,
            output,
            visited,
        } = self;
        let no_fields = IndexSet::new();
        output.finish_with(|type_name| {
            let type_def = index.get_type(type_name)?;
            let selected = visited.fields(type_name).unwrap_or(&no_fields);
            Some(fragment_writer::write_selected_type(type_def, selected))
        })
    }

    pub fn visited(&self) -> &VisitedRegistry {
        &self.visited
    }

    /// Walk every operation in `doc` and render the result.
    pub fn walk_document(mut self, doc: &ast::query::Document) -> Result<Vec<String>> {
        for def in &doc.definitions {
            match def {
                ast::query::Definition::Operation(op) => self.walk_operation(op)?,
                ast::query::Definition::Fragment(frag_def) => log::debug!(
                    "Not expanding fragment definition `{}`.",
                    frag_def.name,
                ),
            }
        }
        Ok(self.finish())
    }

    pub fn walk_operation(&mut self, op: &ast::query::OperationDefinition) -> Result<()> {
        let no_variables: &[ast::query::VariableDefinition] = &[];
        let (operation, variable_defs, selection_set) = match op {
            ast::query::OperationDefinition::SelectionSet(selection_set) =>
                (OperationKind::Query, no_variables, selection_set),
            ast::query::OperationDefinition::Query(query) => (
                OperationKind::Query,
                query.variable_definitions.as_slice(),
                &query.selection_set,
            ),
            ast::query::OperationDefinition::Mutation(mutation) => (
                OperationKind::Mutation,
                mutation.variable_definitions.as_slice(),
                &mutation.selection_set,
            ),
            ast::query::OperationDefinition::Subscription(_) =>
                return Err(ClosureError::unsupported_operation(OperationKind::Subscription)),
        };

        for variable_def in variable_defs {
            let annot = TypeAnnotation::from_ast_type(&variable_def.var_type);
            self.push_argument_stub(annot.base_name());
        }

        let index = self.index;
        let root_type = index.root_type(operation)
            .ok_or_else(|| ClosureError::TypeNotFound {
                type_name: index.root_type_name(operation)
                    .unwrap_or(operation.default_root_type_name())
                    .to_string(),
            })?;

        for selection in &selection_set.items {
            if let ast::query::Selection::Field(field) = selection {
                self.visit_field(field, root_type);
            }
        }

        Ok(())
    }

    fn push_argument_stub(&mut self, type_name: &str) {
        let Some(input_type) = self.index.custom_type(type_name) else {
            return;
        };
        if self.output.contains(input_type.name()) {
            return;
        }
        self.output.push(
            input_type.name(),
            synthesize_argument_stub(input_type.name(), Some(input_type.kind())),
        );
    }

    /// Stub out the input types of arguments passed to fields of `type_def`.
    /// Only fields that were selected directly beneath `type_def` with at
    /// least one argument are considered.
    fn synthesize_argument_inputs(
        &mut self,
        type_def: &TypeDefinition,
        fields_with_args: &IndexSet<&str>,
    ) {
        for field_def in type_def.fields() {
            if !fields_with_args.contains(field_def.name()) {
                continue;
            }
            for arg in field_def.arguments() {
                self.push_argument_stub(arg.type_annotation().base_name());
            }
        }
    }

    fn visit_field(
        &mut self,
        field: &ast::query::Field,
        parent_type: &'schema TypeDefinition,
    ) {
        let Some(field_def) = parent_type.field(field.name.as_str()) else {
            log::debug!(
                "Skipping `{}`: not a field of `{}`.",
                field.name,
                parent_type.name(),
            );
            return;
        };

        let index = self.index;
        let base_type_name = field_def.type_annotation().base_name();
        let Some(type_def) = index.custom_type(base_type_name) else {
            log::trace!("`{}.{}` is a leaf.", parent_type.name(), field.name);
            return;
        };

        self.visited.record_type(type_def.name());

        let mut fields_with_args = IndexSet::new();
        for selection in &field.selection_set.items {
            let ast::query::Selection::Field(child) = selection else {
                log::debug!(
                    "Not expanding fragment selection beneath `{}.{}`.",
                    parent_type.name(),
                    field.name,
                );
                continue;
            };
            self.visited.record_field(type_def.name(), child.name.as_str());
            if !child.arguments.is_empty() {
                fields_with_args.insert(child.name.as_str());
            }
            self.visit_field(child, type_def);
        }

        self.synthesize_argument_inputs(type_def, &fields_with_args);
        self.output.defer(type_def.name());
    }
}
