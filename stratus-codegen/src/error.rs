//! Code generation errors

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CodegenError {
    /// The resource specification itself is invalid
    #[error(transparent)]
    Specification(#[from] stratus_core::Error),

    /// Two property types map to the same Rust struct in one module
    #[error("Struct name collision in module {module}: {first} and {second} both map to {struct_name}")]
    NameCollision {
        module: String,
        struct_name: String,
        first: String,
        second: String,
    },

    /// Writing generated files failed
    #[error("Failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type CodegenResult<T> = Result<T, CodegenError>;
