// Stopset
//
// Stop-word list loading and lookup for text processing pipelines
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use super::error::StoreError;

/// An externally-managed handle to stop-word list bytes.
///
/// Hosting frameworks adapt their own resource types behind this trait; the \
///   store never sees anything but a fresh byte stream.
pub trait DataResource {
    fn open_stream(&self) -> Result<Box<dyn Read>, StoreError>;
}

/// Path-backed resource adapter (plain list file on disk).
pub struct FileDataResource {
    path: PathBuf,
}

impl FileDataResource {
    pub fn new<P: AsRef<Path>>(path: P) -> FileDataResource {
        FileDataResource {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl DataResource for FileDataResource {
    fn open_stream(&self) -> Result<Box<dyn Read>, StoreError> {
        match File::open(&self.path) {
            Ok(file) => Ok(Box::new(file)),
            Err(err) => Err(StoreError::Open {
                path: self.path.clone(),
                source: err,
            }),
        }
    }
}
