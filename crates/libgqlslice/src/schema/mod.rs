mod schema_index;
mod schema_index_builder;

pub use schema_index::SchemaIndex;
pub use schema_index_builder::SchemaIndexBuilder;
pub use schema_index_builder::SchemaIndexBuildError;
