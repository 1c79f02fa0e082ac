use crate::closure::ClosureError;
use crate::closure::DepthBudget;
use crate::closure::FieldSignature;
use crate::closure::FragmentAssembler;
use crate::closure::IgnoreSet;
use crate::closure::VisitedSet;
use crate::closure::fragment_writer;
use crate::operation::OperationKind;
use crate::schema::SchemaIndex;
use crate::types::TypeKind;
use crate::types::is_custom_type_name;

type Result<T> = std::result::Result<T, ClosureError>;

/// The result of slicing a single root field: its signature plus the full
/// fragments of the types its arguments and return type reach.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldSlice {
    pub fragments: Vec<String>,
    pub signature: FieldSignature,
}

/// Render the full closure of `type_name`, bounded by `depth`.
pub fn slice_type(
    index: &SchemaIndex,
    type_name: &str,
    depth: DepthBudget,
    ignored: &IgnoreSet,
) -> Result<Vec<String>> {
    let mut walker = TypeClosureWalker::new(index, ignored, depth);
    walker.visit_type(type_name)?;
    Ok(walker.finish())
}

/// Render the signature of the root field named by `field_path` (for
/// example `"query job_job"`) and the full closure of its custom argument
/// types followed by its return type.
///
/// All starting points share one depth budget and one visited set.
pub fn slice_field(
    index: &SchemaIndex,
    field_path: &str,
    depth: DepthBudget,
    ignored: &IgnoreSet,
) -> Result<FieldSlice> {
    let tokens: Vec<&str> = field_path.split_whitespace().collect();
    let [operation_keyword, field_name] = tokens.as_slice() else {
        return Err(ClosureError::MalformedFieldPath {
            input: field_path.to_string(),
        });
    };

    let operation = match OperationKind::from_keyword(operation_keyword) {
        Some(operation @ (OperationKind::Query | OperationKind::Mutation)) => operation,
        _ => return Err(ClosureError::UnsupportedOperation {
            operation: operation_keyword.to_string(),
        }),
    };

    let root_type_name = index.root_type_name(operation)
        .unwrap_or(operation.default_root_type_name());
    let root_type = index.get_type(root_type_name)
        .ok_or_else(|| ClosureError::TypeNotFound {
            type_name: root_type_name.to_string(),
        })?;
    let field_def = root_type.field(field_name)
        .ok_or_else(|| ClosureError::FieldNotFound {
            field_name: field_name.to_string(),
            type_name: root_type_name.to_string(),
        })?;

    let mut walker = TypeClosureWalker::new(index, ignored, depth);
    for arg in field_def.arguments() {
        let arg_type_name = arg.type_annotation().base_name();
        if is_custom_type_name(arg_type_name) {
            walker.visit_type(arg_type_name)?;
        }
    }
    let return_type_name = field_def.type_annotation().base_name();
    if is_custom_type_name(return_type_name) {
        walker.visit_type(return_type_name)?;
    }

    Ok(FieldSlice {
        fragments: walker.finish(),
        signature: FieldSignature::from_field_def(field_def),
    })
}

/// Expands types outward through their fields, emitting complete (not
/// field-filtered) definitions, children before parents.
///
/// For every type reached, in this order: an ignored type is skipped
/// outright; an exhausted [`DepthBudget`] stops the walk, otherwise one unit
/// is consumed; a type already visited is skipped.
#[derive(Debug)]
pub struct TypeClosureWalker<'a> {
    depth: DepthBudget,
    ignored: &'a IgnoreSet,
    index: &'a SchemaIndex,
    output: FragmentAssembler,
    visited: VisitedSet,
}
impl<'a> TypeClosureWalker<'a> {
    pub fn new(
        index: &'a SchemaIndex,
        ignored: &'a IgnoreSet,
        depth: DepthBudget,
    ) -> Self {
        Self {
            depth,
            ignored,
            index,
            output: FragmentAssembler::new(),
            visited: VisitedSet::new(),
        }
    }

    pub fn depth(&self) -> DepthBudget {
        self.depth
    }

    pub fn finish(self) -> Vec<String> {
        self.output.finish()
    }

    pub fn visit_type(&mut self, type_name: &str) -> Result<()> {
        if self.ignored.contains(type_name) {
            log::debug!("Skipping ignored type `{type_name}`.");
            return Ok(());
        }

        if !self.depth.try_consume() {
            log::trace!("Depth budget exhausted before reaching `{type_name}`.");
            return Ok(());
        }

        if !self.visited.mark(type_name) {
            return Ok(());
        }

        let index = self.index;
        let type_def = index.get_type(type_name)
            .ok_or_else(|| ClosureError::TypeNotFound {
                type_name: type_name.to_string(),
            })?;
        let fragment = fragment_writer::write_full_type(type_def)?;

        if matches!(type_def.kind(), TypeKind::InputObject | TypeKind::Object) {
            for field in type_def.fields() {
                let nested_type_name = field.type_annotation().base_name();
                if is_custom_type_name(nested_type_name) {
                    self.visit_type(nested_type_name)?;
                }
            }
        }

        self.output.push(type_def.name(), fragment);
        Ok(())
    }

    pub fn visited(&self) -> &VisitedSet {
        &self.visited
    }
}
