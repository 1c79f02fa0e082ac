use crate::ast;

/// Represents the annotated type of a
/// [`FieldDefinition`](crate::types::FieldDefinition) or
/// [`ArgumentDefinition`](crate::types::ArgumentDefinition), including any
/// list and non-null wrapping.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TypeAnnotation {
    List {
        inner: Box<TypeAnnotation>,
        nullable: bool,
    },
    Named {
        name: String,
        nullable: bool,
    },
}
impl TypeAnnotation {
    /// Recursively unwrap list and non-null modifiers and return the name of
    /// the inner-most named type.
    pub fn base_name(&self) -> &str {
        match self {
            Self::List { inner, .. } => inner.base_name(),
            Self::Named { name, .. } => name.as_str(),
        }
    }

    pub(crate) fn from_ast_type(ast_type: &ast::schema::Type) -> Self {
        Self::from_ast_type_impl(ast_type, /* nullable = */ true)
    }

    fn from_ast_type_impl(ast_type: &ast::schema::Type, nullable: bool) -> Self {
        match ast_type {
            ast::schema::Type::ListType(inner) => Self::List {
                inner: Box::new(Self::from_ast_type_impl(inner, true)),
                nullable,
            },

            ast::schema::Type::NamedType(name) => Self::Named {
                name: name.to_owned(),
                nullable,
            },

            ast::schema::Type::NonNullType(inner) =>
                Self::from_ast_type_impl(inner, false),
        }
    }

    /// Indicates if this [`TypeAnnotation`] is nullable at its outermost
    /// level.
    pub fn nullable(&self) -> bool {
        match self {
            Self::List { nullable, .. } => *nullable,
            Self::Named { nullable, .. } => *nullable,
        }
    }
}
impl std::fmt::Display for TypeAnnotation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::List { inner, .. } => write!(f, "[{inner}]")?,
            Self::Named { name, .. } => f.write_str(name)?,
        }
        if !self.nullable() {
            f.write_str("!")?;
        }
        Ok(())
    }
}
