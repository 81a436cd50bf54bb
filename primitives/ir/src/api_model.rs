//! Validated, deterministically ordered view of an [`ApiDocument`].
//!
//! The document's mappings have no defined enumeration order. `ApiModel` moves
//! every entry into an arena and keeps a name-sorted index next to it, so all
//! iteration happens in lexicographic order regardless of how the JSON was
//! laid out or how the hash map happened to iterate.

use std::collections::BTreeMap;
use std::io::Read;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::api_description::{ApiDocument, MethodDescription, TypeDescription};

/// Errors raised while loading a schema document.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// The schema file could not be read.
    #[error("failed to read schema {path}: {source}")]
    Read {
        /// Location that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The document is not valid JSON or does not match the expected shape.
    #[error("malformed schema document: {0}")]
    Json(#[from] serde_json::Error),
    /// A type field or method parameter lists no type alternatives.
    #[error("{owner}.{field} has no type alternatives")]
    MissingTypeAlternative {
        /// Owning type or method name.
        owner: String,
        /// Offending field or parameter.
        field: String,
    },
    /// A method lists no return type alternatives.
    #[error("method {0} has no return type")]
    MissingReturnType(String),
    /// A field or parameter has an empty identifier.
    #[error("{0} has a field with an empty identifier")]
    EmptyIdentifier(String),
}

/// Convenient result type for schema loading.
pub type Result<T> = std::result::Result<T, SchemaError>;

#[derive(Debug, Clone)]
struct Entry<T> {
    name: String,
    value: T,
}

/// Read-only, name-ordered API model.
#[derive(Debug, Clone, Default)]
pub struct ApiModel {
    types: Vec<Entry<TypeDescription>>,
    methods: Vec<Entry<MethodDescription>>,
    type_order: Vec<usize>,
    method_order: Vec<usize>,
    type_index: BTreeMap<String, usize>,
    method_index: BTreeMap<String, usize>,
}

impl ApiModel {
    /// Load and validate a schema document from `path`.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|source| SchemaError::Read { path: path.to_path_buf(), source })?;
        let model = Self::from_json(&content)?;
        tracing::debug!(
            path = %path.display(),
            types = model.type_count(),
            methods = model.method_count(),
            "loaded schema"
        );
        Ok(model)
    }

    /// Load and validate a schema document from any reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let document: ApiDocument = serde_json::from_reader(reader)?;
        Self::from_document(document)
    }

    /// Load and validate a schema document from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        let document: ApiDocument = serde_json::from_str(json)?;
        Self::from_document(document)
    }

    /// Validate `document` and build the sorted index over it.
    pub fn from_document(document: ApiDocument) -> Result<Self> {
        let types: Vec<Entry<TypeDescription>> =
            document.types.into_iter().map(|(name, value)| Entry { name, value }).collect();
        let methods: Vec<Entry<MethodDescription>> =
            document.methods.into_iter().map(|(name, value)| Entry { name, value }).collect();

        for entry in &types {
            validate_type(&entry.name, &entry.value)?;
        }
        for entry in &methods {
            validate_method(&entry.name, &entry.value)?;
        }

        let type_order = sorted_order(&types);
        let method_order = sorted_order(&methods);
        let type_index = name_index(&types);
        let method_index = name_index(&methods);

        Ok(Self { types, methods, type_order, method_order, type_index, method_index })
    }

    /// Record types in lexicographic name order.
    pub fn types(&self) -> impl Iterator<Item = (&str, &TypeDescription)> + '_ {
        self.type_order.iter().map(|&idx| {
            let entry = &self.types[idx];
            (entry.name.as_str(), &entry.value)
        })
    }

    /// Methods in lexicographic name order.
    pub fn methods(&self) -> impl Iterator<Item = (&str, &MethodDescription)> + '_ {
        self.method_order.iter().map(|&idx| {
            let entry = &self.methods[idx];
            (entry.name.as_str(), &entry.value)
        })
    }

    /// Look up a record type by exact name.
    pub fn get_type(&self, name: &str) -> Option<&TypeDescription> {
        self.type_index.get(name).map(|&idx| &self.types[idx].value)
    }

    /// Look up a method by exact name.
    pub fn get_method(&self, name: &str) -> Option<&MethodDescription> {
        self.method_index.get(name).map(|&idx| &self.methods[idx].value)
    }

    /// Whether `name` exactly matches a declared record type.
    pub fn is_declared_type(&self, name: &str) -> bool { self.type_index.contains_key(name) }

    /// Number of declared record types.
    pub fn type_count(&self) -> usize { self.types.len() }

    /// Number of declared methods.
    pub fn method_count(&self) -> usize { self.methods.len() }
}

fn sorted_order<T>(entries: &[Entry<T>]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..entries.len()).collect();
    order.sort_by(|&a, &b| entries[a].name.cmp(&entries[b].name));
    order
}

fn name_index<T>(entries: &[Entry<T>]) -> BTreeMap<String, usize> {
    entries.iter().enumerate().map(|(idx, entry)| (entry.name.clone(), idx)).collect()
}

fn validate_type(name: &str, ty: &TypeDescription) -> Result<()> {
    for field in &ty.fields {
        if field.field.is_empty() {
            return Err(SchemaError::EmptyIdentifier(name.to_string()));
        }
        if field.types.is_empty() {
            return Err(SchemaError::MissingTypeAlternative {
                owner: name.to_string(),
                field: field.field.clone(),
            });
        }
    }
    Ok(())
}

fn validate_method(name: &str, method: &MethodDescription) -> Result<()> {
    for param in &method.fields {
        if param.parameter.is_empty() {
            return Err(SchemaError::EmptyIdentifier(name.to_string()));
        }
        if param.types.is_empty() {
            return Err(SchemaError::MissingTypeAlternative {
                owner: name.to_string(),
                field: param.parameter.clone(),
            });
        }
    }
    if method.returns.is_empty() {
        return Err(SchemaError::MissingReturnType(name.to_string()));
    }
    Ok(())
}
