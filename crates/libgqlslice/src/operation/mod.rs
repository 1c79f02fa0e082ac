mod operation_kind;

pub use operation_kind::OperationKind;
