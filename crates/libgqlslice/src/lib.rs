pub mod ast;
pub mod closure;
pub mod file_reader;
pub mod operation;
pub mod schema;
pub mod selection_text;
pub mod source_extract;
pub mod types;

#[cfg(test)]
mod test_utils;

pub use schema::SchemaIndex;
pub use schema::SchemaIndexBuilder;
pub use schema::SchemaIndexBuildError;
