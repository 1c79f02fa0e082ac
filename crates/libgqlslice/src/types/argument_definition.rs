use crate::ast;
use crate::types::TypeAnnotation;

#[derive(Clone, Debug, PartialEq)]
pub struct ArgumentDefinition {
    pub(crate) name: String,
    pub(crate) type_annotation: TypeAnnotation,
}
impl ArgumentDefinition {
    pub(crate) fn from_ast(input_val: &ast::schema::InputValue) -> Self {
        Self {
            name: input_val.name.to_owned(),
            type_annotation: TypeAnnotation::from_ast_type(&input_val.value_type),
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn type_annotation(&self) -> &TypeAnnotation {
        &self.type_annotation
    }
}
