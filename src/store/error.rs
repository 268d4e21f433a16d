// Stopset
//
// Stop-word list loading and lookup for text processing pipelines
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// I/O failure while acquiring or consuming a stop-word source.
///
/// This is the only error family the store surfaces; malformed list lines \
///   are skipped, never reported.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("cannot open stop-word source: {}", path.display())]
    Open {
        path: PathBuf,

        #[source]
        source: io::Error,
    },

    #[error("cannot read stop-word source")]
    Read(#[from] io::Error),
}
