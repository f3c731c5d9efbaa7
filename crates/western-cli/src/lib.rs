//! Western CLI Library
//!
//! Command-line front end for the western showdown: argument handling,
//! configuration, diagnostics and the command implementations.

pub mod commands;
pub mod config;
pub mod diagnostics;

// CLI-specific error handling
pub mod error {
    use std::ops::Range;
    use std::path::PathBuf;
    use thiserror::Error;

    #[derive(Error, Debug)]
    pub enum CliError {
        #[error("IO error: {0}")]
        Io(#[from] std::io::Error),

        #[error("Configuration error: {0}")]
        Config(String),

        #[error("Failed to parse config file {}: {message}", path.display())]
        ConfigParse {
            path: PathBuf,
            src: String,
            span: Option<Range<usize>>,
            message: String,
        },

        #[error("Invalid input: {0}")]
        InvalidInput(String),
    }

    pub type Result<T> = std::result::Result<T, CliError>;
}

pub use error::{CliError, Result};
