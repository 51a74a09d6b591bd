use std::collections::TryReserveError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HuffError {
    #[error("could not read source {path:?}: {source}")]
    SourceRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("allocation failed: {0}")]
    Allocation(#[from] TryReserveError),
    #[error("dequeue on an empty queue")]
    EmptyQueue,
    #[error("code for symbol {symbol} needs {number_bits} bits")]
    CodeTooLong { symbol: u8, number_bits: usize },
    #[error("malformed tree: {0}")]
    MalformedTree(&'static str),
    #[error("invalid header: {0}")]
    InvalidHeader(&'static str),
    #[error("unexpected end of bitstream")]
    UnexpectedEndOfStream,
    #[error("output {0:?} would overwrite its source")]
    OutputIsSource(PathBuf),
    #[error("output {0:?} already exists")]
    OutputExists(PathBuf),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, HuffError>;
