use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::error::Error;
use crate::pad::pad_owned;
use crate::sm3::{digest_padded, Output};

/// Loads the whole file into memory.
pub fn read_file<P: AsRef<Path>>(path: P) -> Result<Vec<u8>, Error> {
    let path = path.as_ref();
    let mut file = File::open(path).map_err(|source| Error::FileOpen {
        path: path.to_path_buf(),
        source,
    })?;

    let mut contents = Vec::new();
    file.read_to_end(&mut contents)
        .map_err(|source| Error::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
    debug!(path = %path.display(), bytes = contents.len(), "read file");
    Ok(contents)
}

/// SM3 digest of a file's contents, padded in the buffer it was read into.
pub fn hash_file<P: AsRef<Path>>(path: P) -> Result<Output, Error> {
    let padded = pad_owned(read_file(path)?)?;
    Ok(digest_padded(&padded))
}
