//! Readers that build a [`NodeConf`] from external input.
//!
//! [`ConfigStringReader`] is the core: a single-pass, synchronous transform
//! from a whitespace-delimited string to an ordered [`NodeConf`].
//! [`ConfigFileReader`] layers file ingestion on top of the same path.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::conf::NodeConf;
use crate::error::Result;
use crate::tokenizer;

/// Parses a node configuration out of an in-memory string.
///
/// The reader holds the full input string for its lifetime and never mutates
/// it, so [`read`](ConfigStringReader::read) may be called repeatedly and
/// yields an equivalent configuration each time. Independent readers can run
/// on separate threads without coordination.
#[derive(Debug, Clone)]
pub struct ConfigStringReader {
    source: String,
}

impl ConfigStringReader {
    /// Create a reader over `source`.
    ///
    /// No validation happens here; an empty `source` is accepted and parses
    /// to an empty configuration.
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }

    /// The raw input string.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Parse `source` into a freshly built [`NodeConf`].
    ///
    /// One entry is appended per whitespace-delimited token, in left-to-right
    /// order. If an insertion fails the error propagates as-is and no partial
    /// configuration is returned.
    pub fn read(&self) -> Result<NodeConf> {
        let tokens = tokenizer::split(&self.source);

        let mut conf = NodeConf::new();
        for token in &tokens {
            conf.add_entry(token)?;
        }

        debug!(entries = conf.len(), "parsed node configuration string");
        Ok(conf)
    }
}

/// Parses a node configuration out of a whitespace-delimited text file.
///
/// Thin ingestion layer over [`ConfigStringReader`]: the file contents are
/// read into memory and parsed with identical semantics.
#[derive(Debug, Clone)]
pub struct ConfigFileReader {
    path: PathBuf,
}

impl ConfigFileReader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the file and parse its contents.
    pub fn read(&self) -> Result<NodeConf> {
        let contents = fs::read_to_string(&self.path)?;
        debug!(path = %self.path.display(), "read node configuration file");
        ConfigStringReader::new(contents).read()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry_names(conf: &NodeConf) -> Vec<&str> {
        conf.iter().map(|e| e.as_str()).collect()
    }

    #[test]
    fn test_read_basic() {
        let reader = ConfigStringReader::new("node1 node2 node3");
        let conf = reader.read().unwrap();
        assert_eq!(entry_names(&conf), vec!["node1", "node2", "node3"]);
    }

    #[test]
    fn test_read_empty_source() {
        let conf = ConfigStringReader::new("").read().unwrap();
        assert!(conf.is_empty());
    }

    #[test]
    fn test_read_whitespace_only_source() {
        let conf = ConfigStringReader::new(" \t\n  ").read().unwrap();
        assert_eq!(conf.len(), 0);
    }

    #[test]
    fn test_read_surrounding_and_repeated_whitespace() {
        let conf = ConfigStringReader::new("  nodeA   nodeB  ").read().unwrap();
        assert_eq!(entry_names(&conf), vec!["nodeA", "nodeB"]);
    }

    #[test]
    fn test_read_single_token() {
        let conf = ConfigStringReader::new("nodeX").read().unwrap();
        assert_eq!(entry_names(&conf), vec!["nodeX"]);
    }

    #[test]
    fn test_read_preserves_duplicates() {
        let conf = ConfigStringReader::new("nodeA nodeA").read().unwrap();
        assert_eq!(entry_names(&conf), vec!["nodeA", "nodeA"]);
    }

    #[test]
    fn test_read_is_idempotent() {
        let reader = ConfigStringReader::new("n1 n2\tn3");
        let first = reader.read().unwrap();
        let second = reader.read().unwrap();
        assert_eq!(first, second);
        assert_eq!(reader.source(), "n1 n2\tn3");
    }

    #[test]
    fn test_read_mixed_whitespace_delimiters() {
        let conf = ConfigStringReader::new("a\tb\nc d").read().unwrap();
        assert_eq!(entry_names(&conf), vec!["a", "b", "c", "d"]);
    }
}
