use thiserror::Error;
use std::io;

#[derive(Error, Debug)]
pub enum ConfError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid node descriptor: {0}")]
    InvalidDescriptor(String),
}

pub type Result<T> = std::result::Result<T, ConfError>;
