//! Ordered node configuration aggregate.
//!
//! `NodeConf` is the collection handed to the connection layer when a node
//! joins the cluster. Entries are raw descriptor strings: this module keeps
//! them opaque and performs no address resolution.

use serde::{Deserialize, Serialize};

use crate::error::{ConfError, Result};

/// A single node descriptor entry.
///
/// The descriptor format (hostname, address, identifier) is the concern of
/// the connection layer consuming the configuration; here it is an opaque
/// non-empty string without whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeConfEntry(String);

impl NodeConfEntry {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for NodeConfEntry {
    fn from(s: String) -> Self {
        NodeConfEntry(s)
    }
}

impl From<&str> for NodeConfEntry {
    fn from(s: &str) -> Self {
        NodeConfEntry(s.to_string())
    }
}

impl std::fmt::Display for NodeConfEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Ordered collection of node descriptor entries.
///
/// Entry order equals insertion order, and duplicate descriptors are kept as
/// separate entries; deduplication, if wanted, belongs to the consumer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeConf {
    entries: Vec<NodeConfEntry>,
}

impl NodeConf {
    /// Create an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one descriptor to the configuration.
    ///
    /// Rejects descriptors that cannot be a single configuration token:
    /// empty strings and strings containing whitespace. Anything else is
    /// accepted verbatim; no further syntax checking happens here.
    pub fn add_entry(&mut self, descriptor: &str) -> Result<()> {
        if descriptor.is_empty() || descriptor.contains(char::is_whitespace) {
            return Err(ConfError::InvalidDescriptor(descriptor.to_string()));
        }

        self.entries.push(NodeConfEntry::from(descriptor));
        Ok(())
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> &[NodeConfEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, NodeConfEntry> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a NodeConf {
    type Item = &'a NodeConfEntry;
    type IntoIter = std::slice::Iter<'a, NodeConfEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
