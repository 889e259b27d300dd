use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::request::list::ListKind;

pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong between reading the command line and finishing a run
///
/// The first five variants are raised while resolving inputs and abort the whole program before
/// any run starts. `Materialize` and `Serialize` only ever end a single run.
#[derive(Debug, Error)]
pub enum Error {
    #[error("{what} file {} not found", path.display())]
    MissingFile { what: &'static str, path: PathBuf },

    #[error("Can't read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("No valid entries found in {}", path.display())]
    EmptyList { path: PathBuf },

    #[error("Invalid {kind} value '{text}' on line {line} in {}", path.display())]
    Parse {
        kind: ListKind,
        path: PathBuf,
        line: usize,
        text: String,
    },

    #[error("{0}")]
    Validation(String),

    #[error("Can't write config file {}: {source}", path.display())]
    Materialize {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Can't serialise config: {0}")]
    Serialize(#[from] serde_json::Error),
}
