use std::collections::TryReserveError;
use std::path::PathBuf;

use thiserror::Error;

pub type BoxedError = Box<dyn std::error::Error + Send + Sync>;

/// Everything that can abort a classification run. All variants are
/// terminal; nothing is retried.
#[derive(Debug, Error)]
pub enum Error {
    #[error("could not read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not import graph")]
    GraphImport(#[source] BoxedError),

    #[error("no operation named {0:?} in graph")]
    EndpointNotFound(String),

    #[error("could not load image {path}")]
    ImageLoad {
        path: PathBuf,
        #[source]
        source: BoxedError,
    },

    #[error("unsupported image format: expected 8-bit RGB, got {found}")]
    UnsupportedFormat { found: String },

    #[error("input shape mismatch: graph declares {declared:?}, image is {actual:?}")]
    ShapeMismatch {
        declared: Vec<i64>,
        actual: Vec<i64>,
    },

    #[error("could not allocate {what}")]
    Resource {
        what: &'static str,
        #[source]
        source: TryReserveError,
    },

    #[error("could not run session")]
    Execution(#[source] BoxedError),

    #[error("output tensor has no elements")]
    EmptyTensor,
}

/// Failure while tearing a session down. Kept apart from [`Error`]: once a
/// result has been produced, teardown problems are reported but do not
/// invalidate it.
#[derive(Debug, Error)]
#[error("session teardown failed")]
pub struct TeardownError(#[source] pub BoxedError);

pub type Result<T, E = Error> = std::result::Result<T, E>;
