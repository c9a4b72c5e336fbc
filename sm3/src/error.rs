#[cfg(feature = "std")]
use std::io;
#[cfg(feature = "std")]
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to allocate {requested} bytes for the padded message")]
    Allocation { requested: usize },
    #[error("message of {len} bytes exceeds the SM3 length limit")]
    MessageTooLong { len: usize },
    #[cfg(feature = "std")]
    #[error("failed to open {}: {source}", path.display())]
    FileOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[cfg(feature = "std")]
    #[error("failed to read {}: {source}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
