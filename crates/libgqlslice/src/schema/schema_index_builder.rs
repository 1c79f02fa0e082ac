use crate::ast;
use crate::file_reader;
use crate::schema::SchemaIndex;
use crate::types::BUILTIN_SCALAR_NAMES;
use crate::types::FieldDefinition;
use crate::types::TypeDefinition;
use crate::types::TypeKind;
use indexmap::IndexMap;
use std::path::Path;
use std::path::PathBuf;
use thiserror::Error;

type Result<T> = std::result::Result<T, SchemaIndexBuildError>;

/// Utility for building a [`SchemaIndex`] from one or more SDL sources.
///
/// Type extensions (`extend type ...`) are queued and merged into their
/// base definitions at [`build()`](SchemaIndexBuilder::build) time, so
/// sources may be loaded in any order.
#[derive(Debug)]
pub struct SchemaIndexBuilder {
    mutation_type_name: Option<String>,
    pending_extensions: Vec<(PathBuf, ast::schema::TypeExtension)>,
    query_type_name: Option<String>,
    str_load_counter: u16,
    subscription_type_name: Option<String>,
    types: IndexMap<String, TypeDefinition>,
}
impl SchemaIndexBuilder {
    pub fn build(mut self) -> Result<SchemaIndex> {
        for (file_path, ext) in std::mem::take(&mut self.pending_extensions) {
            self.apply_type_extension(file_path.as_path(), ext)?;
        }

        for builtin_name in BUILTIN_SCALAR_NAMES {
            if !self.types.contains_key(builtin_name) {
                self.types.insert(
                    builtin_name.to_string(),
                    TypeDefinition::builtin_scalar(builtin_name),
                );
            }
        }

        let query_type_name = self.query_type_name.take()
            .or_else(|| self.conventional_root_name("Query"));
        let mutation_type_name = self.mutation_type_name.take()
            .or_else(|| self.conventional_root_name("Mutation"));
        let subscription_type_name = self.subscription_type_name.take()
            .or_else(|| self.conventional_root_name("Subscription"));

        log::debug!(
            "Built schema index with {} types (query root: {:?}, mutation \
            root: {:?}).",
            self.types.len(),
            query_type_name,
            mutation_type_name,
        );

        Ok(SchemaIndex {
            mutation_type_name,
            query_type_name,
            subscription_type_name,
            types: self.types,
        })
    }

    pub fn new() -> Self {
        Self {
            mutation_type_name: None,
            pending_extensions: vec![],
            query_type_name: None,
            str_load_counter: 0,
            subscription_type_name: None,
            types: IndexMap::new(),
        }
    }

    pub fn load_file(
        self,
        file_path: impl AsRef<Path>,
    ) -> Result<Self> {
        self.load_files(vec![file_path])
    }

    pub fn load_files(
        mut self,
        file_paths: Vec<impl AsRef<Path>>,
    ) -> Result<Self> {
        for file_path in file_paths {
            let file_path = file_path.as_ref();
            let file_content = file_reader::read_content(file_path)
                .map_err(|err| SchemaIndexBuildError::SchemaFileReadError(
                    Box::new(err),
                ))?;
            self = self.load_str(
                Some(file_path.to_path_buf()),
                file_content.as_str(),
            )?;
        }
        Ok(self)
    }

    pub fn load_str(
        mut self,
        file_path: Option<PathBuf>,
        content: &str,
    ) -> Result<Self> {
        let file_path =
            if let Some(file_path) = file_path {
                file_path
            } else {
                let ctr = self.str_load_counter;
                self.str_load_counter += 1;
                PathBuf::from(format!("str://{ctr}"))
            };

        let ast_doc = ast::schema::parse(content)
            .map_err(|err| SchemaIndexBuildError::ParseError {
                file: file_path.to_owned(),
                err: err.to_string(),
            })?;

        for def in ast_doc.definitions {
            self.visit_ast_def(file_path.as_path(), def)?;
        }

        Ok(self)
    }

    fn apply_type_extension(
        &mut self,
        file_path: &Path,
        ext: ast::schema::TypeExtension,
    ) -> Result<()> {
        use ast::schema::TypeExtension;
        let (type_name, expected_kind) = match &ext {
            TypeExtension::Enum(ext) => (ext.name.as_str(), TypeKind::Enum),
            TypeExtension::InputObject(ext) => (ext.name.as_str(), TypeKind::InputObject),
            TypeExtension::Interface(ext) => (ext.name.as_str(), TypeKind::Interface),
            TypeExtension::Object(ext) => (ext.name.as_str(), TypeKind::Object),
            TypeExtension::Scalar(ext) => (ext.name.as_str(), TypeKind::Scalar),
            TypeExtension::Union(ext) => (ext.name.as_str(), TypeKind::Union),
        };

        let Some(type_def) = self.types.get_mut(type_name) else {
            return Err(SchemaIndexBuildError::ExtensionOfUndefinedType {
                file: file_path.to_path_buf(),
                type_name: type_name.to_string(),
            });
        };

        if type_def.kind != expected_kind {
            return Err(SchemaIndexBuildError::InvalidExtensionType {
                defined_kind: type_def.kind,
                extension_kind: expected_kind,
                file: file_path.to_path_buf(),
                type_name: type_name.to_string(),
            });
        }

        match ext {
            TypeExtension::Enum(ext) => type_def.enum_values.extend(
                ext.values.into_iter().map(|value| value.name),
            ),
            TypeExtension::InputObject(ext) => type_def.fields.extend(
                ext.fields.iter().map(FieldDefinition::from_ast_input_value),
            ),
            TypeExtension::Interface(ext) => type_def.fields.extend(
                ext.fields.iter().map(FieldDefinition::from_ast_field),
            ),
            TypeExtension::Object(ext) => type_def.fields.extend(
                ext.fields.iter().map(FieldDefinition::from_ast_field),
            ),
            // Scalar and union extensions only add directives/members, neither
            // of which is tracked by the index.
            TypeExtension::Scalar(_) | TypeExtension::Union(_) => (),
        }

        Ok(())
    }

    /// The conventional root name, but only if it names an object type.
    fn conventional_root_name(&self, type_name: &str) -> Option<String> {
        match self.types.get(type_name) {
            Some(type_def) if type_def.kind == TypeKind::Object =>
                Some(type_name.to_string()),
            _ => None,
        }
    }

    fn visit_ast_def(
        &mut self,
        file_path: &Path,
        def: ast::schema::Definition,
    ) -> Result<()> {
        use ast::schema::Definition;
        match def {
            Definition::SchemaDefinition(schema_def) =>
                self.visit_ast_schemablock_def(file_path, schema_def),
            Definition::TypeDefinition(type_def) =>
                self.visit_ast_type_def(file_path, type_def),
            Definition::TypeExtension(type_ext) => {
                self.pending_extensions.push((file_path.to_path_buf(), type_ext));
                Ok(())
            },
            Definition::DirectiveDefinition(directive_def) => {
                log::trace!(
                    "Skipping directive definition `@{}`.",
                    directive_def.name,
                );
                Ok(())
            },
        }
    }

    fn visit_ast_schemablock_def(
        &mut self,
        file_path: &Path,
        schema_def: ast::schema::SchemaDefinition,
    ) -> Result<()> {
        let roots = [
            ("query", schema_def.query, &mut self.query_type_name),
            ("mutation", schema_def.mutation, &mut self.mutation_type_name),
            ("subscription", schema_def.subscription, &mut self.subscription_type_name),
        ];
        for (operation, type_name, slot) in roots {
            let Some(type_name) = type_name else {
                continue;
            };
            if let Some(existing) = slot.as_ref() {
                return Err(SchemaIndexBuildError::DuplicateOperationDefinition {
                    file: file_path.to_path_buf(),
                    operation: operation.to_string(),
                    type_name1: existing.to_owned(),
                    type_name2: type_name,
                });
            }
            *slot = Some(type_name);
        }
        Ok(())
    }

    fn visit_ast_type_def(
        &mut self,
        file_path: &Path,
        type_def: ast::schema::TypeDefinition,
    ) -> Result<()> {
        let type_def = TypeDefinition::from_ast(&type_def);
        if self.types.contains_key(type_def.name()) {
            return Err(SchemaIndexBuildError::DuplicateTypeDefinition {
                file: file_path.to_path_buf(),
                type_name: type_def.name,
            });
        }
        self.types.insert(type_def.name.to_owned(), type_def);
        Ok(())
    }
}
impl Default for SchemaIndexBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum SchemaIndexBuildError {
    #[error(
        "The {operation} root operation type was declared more than once \
        (`{type_name1}` and `{type_name2}`)"
    )]
    DuplicateOperationDefinition {
        file: PathBuf,
        operation: String,
        type_name1: String,
        type_name2: String,
    },

    #[error("Multiple GraphQL types named `{type_name}` were defined")]
    DuplicateTypeDefinition {
        file: PathBuf,
        type_name: String,
    },

    #[error("Attempted to extend `{type_name}`, which is not defined elsewhere")]
    ExtensionOfUndefinedType {
        file: PathBuf,
        type_name: String,
    },

    #[error(
        "Attempted to extend the {defined_kind} type `{type_name}` with an \
        {extension_kind} extension"
    )]
    InvalidExtensionType {
        defined_kind: TypeKind,
        extension_kind: TypeKind,
        file: PathBuf,
        type_name: String,
    },

    #[error("Error parsing schema string from {file:?}: {err}")]
    ParseError {
        file: PathBuf,
        err: String,
    },

    #[error("Failure while trying to read a schema file from disk: {0}")]
    SchemaFileReadError(Box<file_reader::ReadContentError>),
}
