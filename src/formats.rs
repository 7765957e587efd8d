//! Format registry for tree serialization
//!
//! This module provides a pluggable registry system for tree output
//! formats. Each format implements the `Formatter` trait and can be
//! registered with `FormatRegistry`. The built-in formats are the
//! canonical notation plus JSON and YAML views of the tree structure.

use std::collections::HashMap;
use std::fmt;

use crate::notation;
use crate::tree::Tree;

/// Error that can occur during formatting
#[derive(Debug, Clone, PartialEq)]
pub enum FormatError {
    /// Format not found in registry
    FormatNotFound(String),
    /// Error during serialization
    SerializationError(String),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::FormatNotFound(name) => write!(f, "Format '{name}' not found"),
            FormatError::SerializationError(msg) => write!(f, "Serialization error: {msg}"),
        }
    }
}

impl std::error::Error for FormatError {}

/// Trait for tree formatters
///
/// Implementors provide a way to serialize a tree to a string
/// representation.
pub trait Formatter: Send + Sync {
    /// The name of this format (e.g., "notation", "json")
    fn name(&self) -> &str;

    /// Serialize a tree to this format
    fn serialize(&self, tree: &Tree<String>) -> Result<String, FormatError>;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }
}

/// The canonical parenthesized notation
pub struct NotationFormatter;

impl Formatter for NotationFormatter {
    fn name(&self) -> &str {
        "notation"
    }

    fn serialize(&self, tree: &Tree<String>) -> Result<String, FormatError> {
        Ok(notation::serialize(tree))
    }

    fn description(&self) -> &str {
        "Compact parenthesized notation, the parser's input format"
    }
}

/// Pretty-printed JSON view of the tree structure
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn serialize(&self, tree: &Tree<String>) -> Result<String, FormatError> {
        serde_json::to_string_pretty(tree)
            .map_err(|e| FormatError::SerializationError(e.to_string()))
    }

    fn description(&self) -> &str {
        "Pretty-printed JSON"
    }
}

/// YAML view of the tree structure
pub struct YamlFormatter;

impl Formatter for YamlFormatter {
    fn name(&self) -> &str {
        "yaml"
    }

    fn serialize(&self, tree: &Tree<String>) -> Result<String, FormatError> {
        serde_yaml::to_string(tree).map_err(|e| FormatError::SerializationError(e.to_string()))
    }

    fn description(&self) -> &str {
        "YAML"
    }
}

/// Registry of tree formatters
///
/// Provides a centralized registry for all available output formats.
/// Formats can be registered and retrieved by name.
pub struct FormatRegistry {
    formatters: HashMap<String, Box<dyn Formatter>>,
}

impl FormatRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        FormatRegistry {
            formatters: HashMap::new(),
        }
    }

    /// Register a formatter
    ///
    /// If a formatter with the same name already exists, it will be replaced.
    pub fn register<F: Formatter + 'static>(&mut self, formatter: F) {
        self.formatters
            .insert(formatter.name().to_string(), Box::new(formatter));
    }

    /// Get a formatter by name
    pub fn get(&self, name: &str) -> Option<&dyn Formatter> {
        self.formatters.get(name).map(|f| f.as_ref())
    }

    /// Check if a format exists
    pub fn has(&self, name: &str) -> bool {
        self.formatters.contains_key(name)
    }

    /// Serialize a tree using the specified format
    pub fn serialize(&self, tree: &Tree<String>, format: &str) -> Result<String, FormatError> {
        let formatter = self
            .get(format)
            .ok_or_else(|| FormatError::FormatNotFound(format.to_string()))?;
        formatter.serialize(tree)
    }

    /// List all available format names (sorted)
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formatters.keys().cloned().collect();
        names.sort();
        names
    }

    /// Create a registry with the built-in formatters
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.register(NotationFormatter);
        registry.register(JsonFormatter);
        registry.register(YamlFormatter);

        registry
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
