use crate::operation::OperationKind;
use crate::types::TypeKind;
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum ClosureError {
    #[error("Field `{field_name}` is not defined on type `{type_name}`")]
    FieldNotFound {
        field_name: String,
        type_name: String,
    },

    #[error(
        "Malformed field path `{input}`: expected `<query|mutation> \
        <field_name>`, for example `mutation create_job`"
    )]
    MalformedFieldPath {
        input: String,
    },

    #[error("Failed to parse query document: {0}")]
    QueryParseError(String),

    #[error("Type `{type_name}` not found in schema")]
    TypeNotFound {
        type_name: String,
    },

    #[error("GraphQL operation type is not supported: {operation}")]
    UnsupportedOperation {
        operation: String,
    },

    #[error("Unknown type kind {kind} for type `{type_name}`")]
    UnsupportedTypeKind {
        kind: TypeKind,
        type_name: String,
    },
}
impl ClosureError {
    /// Indicates an error that means the schema (or query) and this crate
    /// disagree about what GraphQL looks like, as opposed to a caller asking
    /// for something that simply isn't there.
    pub fn is_unrecoverable(&self) -> bool {
        matches!(
            self,
            Self::QueryParseError(_) | Self::UnsupportedTypeKind { .. },
        )
    }

    pub(crate) fn unsupported_operation(operation: OperationKind) -> Self {
        Self::UnsupportedOperation {
            operation: operation.keyword().to_string(),
        }
    }
}
