//! Schema reduction: compute the closure of types a query, field, or type
//! needs and render it as independent SDL fragments.

mod argument_stub;
mod closure_error;
mod depth_budget;
mod field_signature;
mod fragment_assembler;
mod fragment_writer;
mod ignore_set;
mod query_closure;
mod type_closure;
mod visited_registry;
mod visited_set;

pub use argument_stub::synthesize_argument_stub;
pub use closure_error::ClosureError;
pub use depth_budget::DEFAULT_DEPTH;
pub use depth_budget::DepthBudget;
pub use field_signature::FieldArgumentSignature;
pub use field_signature::FieldSignature;
pub use fragment_assembler::FragmentAssembler;
pub use fragment_writer::CONVENTIONAL_SCALAR_NAMES;
pub use ignore_set::IgnoreSet;
pub use ignore_set::IgnoreSetError;
pub use query_closure::QueryClosureWalker;
pub use query_closure::slice_query;
pub use type_closure::FieldSlice;
pub use type_closure::TypeClosureWalker;
pub use type_closure::slice_field;
pub use type_closure::slice_type;
pub use visited_registry::VisitedRegistry;
pub use visited_set::VisitedSet;

#[cfg(test)]
mod tests;
