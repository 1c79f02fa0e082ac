use crate::ast;
use crate::types::FieldDefinition;
use crate::types::TypeKind;

/// A named type known to a [`SchemaIndex`](crate::schema::SchemaIndex).
#[derive(Clone, Debug, PartialEq)]
pub struct TypeDefinition {
    pub(crate) built_in: bool,
    pub(crate) description: Option<String>,
    pub(crate) enum_values: Vec<String>,
    pub(crate) fields: Vec<FieldDefinition>,
    pub(crate) kind: TypeKind,
    pub(crate) name: String,
}
impl TypeDefinition {
    pub(crate) fn builtin_scalar(name: &str) -> Self {
        Self {
            built_in: true,
            description: None,
            enum_values: vec![],
            fields: vec![],
            kind: TypeKind::Scalar,
            name: name.to_string(),
        }
    }

    pub(crate) fn from_ast(type_def: &ast::schema::TypeDefinition) -> Self {
        use ast::schema::TypeDefinition as AstTypeDef;
        match type_def {
            AstTypeDef::Enum(enum_def) => Self {
                built_in: false,
                description: enum_def.description.to_owned(),
                enum_values: enum_def.values.iter()
                    .map(|value| value.name.to_owned())
                    .collect(),
                fields: vec![],
                kind: TypeKind::Enum,
                name: enum_def.name.to_owned(),
            },

            AstTypeDef::InputObject(inputobj_def) => Self {
                built_in: false,
                description: inputobj_def.description.to_owned(),
                enum_values: vec![],
                fields: inputobj_def.fields.iter()
                    .map(FieldDefinition::from_ast_input_value)
                    .collect(),
                kind: TypeKind::InputObject,
                name: inputobj_def.name.to_owned(),
            },

            AstTypeDef::Interface(iface_def) => Self {
                built_in: false,
                description: iface_def.description.to_owned(),
                enum_values: vec![],
                fields: iface_def.fields.iter()
                    .map(FieldDefinition::from_ast_field)
                    .collect(),
                kind: TypeKind::Interface,
                name: iface_def.name.to_owned(),
            },

            AstTypeDef::Object(obj_def) => Self {
                built_in: false,
                description: obj_def.description.to_owned(),
                enum_values: vec![],
                fields: obj_def.fields.iter()
                    .map(FieldDefinition::from_ast_field)
                    .collect(),
                kind: TypeKind::Object,
                name: obj_def.name.to_owned(),
            },

            AstTypeDef::Scalar(scalar_def) => Self {
                built_in: false,
                description: scalar_def.description.to_owned(),
                enum_values: vec![],
                fields: vec![],
                kind: TypeKind::Scalar,
                name: scalar_def.name.to_owned(),
            },

            AstTypeDef::Union(union_def) => Self {
                built_in: false,
                description: union_def.description.to_owned(),
                enum_values: vec![],
                fields: vec![],
                kind: TypeKind::Union,
                name: union_def.name.to_owned(),
            },
        }
    }

    /// Indicates whether this is one of the implicitly-defined scalars every
    /// schema carries. Built-in types never take part in a closure.
    pub fn built_in(&self) -> bool {
        self.built_in
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn enum_values(&self) -> &[String] {
        self.enum_values.as_slice()
    }

    /// Look up a declared field by name.
    pub fn field(&self, field_name: &str) -> Option<&FieldDefinition> {
        self.fields.iter().find(|field| field.name == field_name)
    }

    /// All declared fields, in declaration order.
    pub fn fields(&self) -> &[FieldDefinition] {
        self.fields.as_slice()
    }

    pub fn kind(&self) -> TypeKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
