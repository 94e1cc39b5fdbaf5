//! Node configuration parsing for cluster connection setup.
//!
//! This crate turns a whitespace-delimited string of node descriptors into an
//! ordered [`NodeConf`] collection, including:
//! - Whitespace tokenization of configuration strings
//! - An ordered, duplicate-preserving node configuration aggregate
//! - String and file based configuration readers
//!
//! Descriptors are kept opaque: address formats, resolution and connection
//! establishment belong to the layers consuming the configuration.

pub mod conf;
pub mod error;
pub mod reader;
pub mod tokenizer;

pub use conf::{NodeConf, NodeConfEntry};
pub use error::{ConfError, Result};
pub use reader::{ConfigFileReader, ConfigStringReader};
