use crate::file_reader;
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;

type Result<T> = std::result::Result<T, IgnoreSetError>;

/// Type names a full-closure traversal must never expand.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct IgnoreSet {
    line_count: usize,
    type_names: HashSet<String>,
}
impl IgnoreSet {
    pub fn contains(&self, type_name: &str) -> bool {
        self.type_names.contains(type_name)
    }

    pub fn from_file(file_path: impl AsRef<Path>) -> Result<Self> {
        let content = file_reader::read_content(file_path.as_ref())
            .map_err(|err| IgnoreSetError::FileReadError(Box::new(err)))?;
        Ok(Self::from_lines(content.as_str()))
    }

    /// Parse a newline-delimited list of type names. Blank lines (including
    /// the usual trailing one) count towards [`line_count()`](Self::line_count)
    /// but are never entries.
    pub fn from_lines(content: &str) -> Self {
        let mut line_count = 0;
        let mut type_names = HashSet::new();
        for line in content.split('\n') {
            line_count += 1;
            let type_name = line.trim();
            if !type_name.is_empty() {
                type_names.insert(type_name.to_string());
            }
        }
        Self {
            line_count,
            type_names,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.type_names.is_empty()
    }

    pub fn len(&self) -> usize {
        self.type_names.len()
    }

    pub fn line_count(&self) -> usize {
        self.line_count
    }
}
impl<S: Into<String>> FromIterator<S> for IgnoreSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let type_names: HashSet<String> = iter.into_iter().map(Into::into).collect();
        Self {
            line_count: type_names.len(),
            type_names,
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum IgnoreSetError {
    #[error("Failed to read the ignored-types file: {0}")]
    FileReadError(Box<file_reader::ReadContentError>),
}
