use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid extension: {path:?} is not a .{expected} file")]
    InvalidExtension {
        path: PathBuf,
        expected: &'static str,
    },
    #[error("Unsupported format: {0:?}")]
    UnsupportedFormat(PathBuf),
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

impl From<binrw::Error> for Error {
    fn from(err: binrw::Error) -> Self {
        match err {
            binrw::Error::Io(io) => Error::Io(io),
            binrw::Error::Backtrace(bt) => Error::from(*bt.error),
            other => Error::InvalidData(other.to_string()),
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
