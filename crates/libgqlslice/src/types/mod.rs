mod argument_definition;
mod builtins;
mod field_definition;
mod type_annotation;
mod type_definition;
mod type_kind;

pub use argument_definition::ArgumentDefinition;
pub use builtins::BUILTIN_SCALAR_NAMES;
pub use builtins::is_custom_type_name;
pub use field_definition::FieldDefinition;
pub use type_annotation::TypeAnnotation;
pub use type_definition::TypeDefinition;
pub use type_kind::TypeKind;
