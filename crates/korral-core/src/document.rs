//! Dynamic manifest documents and their per-file grouping
//!
//! A `Document` wraps one parsed manifest as a `serde_yaml::Value`. The
//! pipeline only reads and writes `apiVersion`, `kind` and a few `metadata`
//! fields; everything else passes through untouched.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::Deserialize;
use serde_yaml::{Mapping, Value};

use crate::error::{CoreError, Result};
use crate::gvk::GroupVersionKind;

/// One parsed manifest
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    value: Value,
}

impl Document {
    pub fn new(value: Value) -> Self {
        Self { value }
    }

    /// Parse a single manifest.
    pub fn from_yaml(input: &str) -> Result<Self> {
        Ok(Self::new(serde_yaml::from_str(input)?))
    }

    /// Parse a multi-document stream, skipping empty documents (a file may
    /// contain several manifests separated by `---`).
    pub fn parse_all(input: &str) -> Result<Vec<Document>> {
        let mut documents = Vec::new();
        for deserializer in serde_yaml::Deserializer::from_str(input) {
            let value = Value::deserialize(deserializer)?;
            if value.is_null() {
                continue;
            }
            documents.push(Document::new(value));
        }
        Ok(documents)
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Walk nested mappings by field name.
    pub fn get(&self, path: &[&str]) -> Option<&Value> {
        let mut current = &self.value;
        for field in path {
            current = current.get(field)?;
        }
        Some(current)
    }

    pub fn get_str(&self, path: &[&str]) -> Option<&str> {
        self.get(path).and_then(Value::as_str)
    }

    /// String field that must be present and non-empty.
    pub fn required_str(&self, path: &[&str]) -> Result<&str> {
        match self.get_str(path) {
            Some(value) if !value.is_empty() => Ok(value),
            _ => Err(CoreError::MissingField {
                field: path.join("."),
            }),
        }
    }

    pub fn api_version(&self) -> Result<&str> {
        self.required_str(&["apiVersion"])
    }

    pub fn kind(&self) -> Result<&str> {
        self.required_str(&["kind"])
    }

    pub fn name(&self) -> Result<&str> {
        self.required_str(&["metadata", "name"])
    }

    /// `metadata.namespace`; `None` when absent or empty.
    pub fn namespace(&self) -> Option<&str> {
        self.get_str(&["metadata", "namespace"])
            .filter(|namespace| !namespace.is_empty())
    }

    pub fn gvk(&self) -> Result<GroupVersionKind> {
        Ok(GroupVersionKind::from_api_version_and_kind(
            self.api_version()?,
            self.kind()?,
        ))
    }

    fn metadata_mut(&mut self) -> Option<&mut Mapping> {
        let root = self.value.as_mapping_mut()?;
        let metadata = root
            .entry(Value::from("metadata"))
            .or_insert_with(|| Value::Mapping(Mapping::new()));
        if !metadata.is_mapping() {
            *metadata = Value::Mapping(Mapping::new());
        }
        metadata.as_mapping_mut()
    }

    /// Set `metadata.namespace`, creating the metadata mapping if needed.
    pub fn set_namespace(&mut self, namespace: &str) {
        if let Some(metadata) = self.metadata_mut() {
            metadata.insert(Value::from("namespace"), Value::from(namespace));
        }
    }

    /// Remove `metadata.namespace` entirely.
    pub fn clear_namespace(&mut self) {
        if let Some(metadata) = self.metadata_mut() {
            metadata.remove("namespace");
        }
    }

    /// `metadata.annotations` as a string map; non-string values are
    /// ignored.
    pub fn annotations(&self) -> IndexMap<String, String> {
        let mut annotations = IndexMap::new();
        if let Some(Value::Mapping(mapping)) = self.get(&["metadata", "annotations"]) {
            for (key, value) in mapping {
                if let (Some(key), Some(value)) = (key.as_str(), value.as_str()) {
                    annotations.insert(key.to_string(), value.to_string());
                }
            }
        }
        annotations
    }

    /// Replace `metadata.annotations`; an empty map removes the field.
    pub fn set_annotations(&mut self, annotations: &IndexMap<String, String>) {
        let Some(metadata) = self.metadata_mut() else {
            return;
        };
        if annotations.is_empty() {
            metadata.remove("annotations");
            return;
        }
        let mut mapping = Mapping::new();
        for (key, value) in annotations {
            mapping.insert(Value::from(key.as_str()), Value::from(value.as_str()));
        }
        metadata.insert(Value::from("annotations"), Value::Mapping(mapping));
    }

    /// Serialize back to YAML (single document, trailing newline, no leading
    /// separator).
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(&self.value)?)
    }
}

/// Documents grouped by the input file they came from, preserving input
/// order. Stages rewrite the list attached to each file without losing the
/// file association.
#[derive(Debug, Default)]
pub struct DocumentSet {
    files: IndexMap<PathBuf, Vec<Document>>,
}

impl DocumentSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach (or replace) the documents for an input file.
    pub fn insert(&mut self, path: impl Into<PathBuf>, documents: Vec<Document>) {
        self.files.insert(path.into(), documents);
    }

    pub fn get(&self, path: &Path) -> &[Document] {
        self.files.get(path).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn paths(&self) -> Vec<PathBuf> {
        self.files.keys().cloned().collect()
    }

    /// Iterate `(file, documents)` pairs in insertion order.
    pub fn files(&self) -> impl Iterator<Item = (&Path, &[Document])> {
        self.files
            .iter()
            .map(|(path, documents)| (path.as_path(), documents.as_slice()))
    }

    /// Consume the set, yielding owned `(file, documents)` pairs.
    pub fn into_files(self) -> impl Iterator<Item = (PathBuf, Vec<Document>)> {
        self.files.into_iter()
    }

    /// Iterate every document across all files.
    pub fn documents(&self) -> impl Iterator<Item = &Document> {
        self.files.values().flatten()
    }

    pub fn document_count(&self) -> usize {
        self.files.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}
