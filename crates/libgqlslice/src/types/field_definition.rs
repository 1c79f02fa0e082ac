use crate::ast;
use crate::types::ArgumentDefinition;
use crate::types::TypeAnnotation;

/// Represents a field declared on an object, interface, or input object
/// type. Input object fields never carry arguments.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldDefinition {
    pub(crate) arguments: Vec<ArgumentDefinition>,
    pub(crate) description: Option<String>,
    pub(crate) name: String,
    pub(crate) type_annotation: TypeAnnotation,
}
impl FieldDefinition {
    pub(crate) fn from_ast_field(field: &ast::schema::Field) -> Self {
        Self {
            arguments: field.arguments.iter()
                .map(ArgumentDefinition::from_ast)
                .collect(),
            description: field.description.to_owned(),
            name: field.name.to_owned(),
            type_annotation: TypeAnnotation::from_ast_type(&field.field_type),
        }
    }

    pub(crate) fn from_ast_input_value(input_val: &ast::schema::InputValue) -> Self {
        Self {
            arguments: vec![],
            description: input_val.description.to_owned(),
            name: input_val.name.to_owned(),
            type_annotation: TypeAnnotation::from_ast_type(&input_val.value_type),
        }
    }

    pub fn arguments(&self) -> &[ArgumentDefinition] {
        self.arguments.as_slice()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn type_annotation(&self) -> &TypeAnnotation {
        &self.type_annotation
    }
}
