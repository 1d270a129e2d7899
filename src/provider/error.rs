//! Source scanning failures.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("failed to read {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Some files could not be scanned. Classes from the files that did
    /// scan are already in the registry when this is returned.
    #[error("failed to scan {count} file(s):\n  {}", .details.join("\n  "))]
    Failed { count: usize, details: Vec<String> },
}
