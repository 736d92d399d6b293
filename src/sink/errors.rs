/// Errors from the output sink layer.
use std::path::PathBuf;

use thiserror::Error;

/// Failures while delivering the payload to its destination.
#[derive(Debug, Error)]
pub enum SinkError {
    /// No clipboard utility was found on `PATH`. Callers fall back to stdout.
    #[error("No clipboard utility found (tried pbcopy, xclip, xsel, clip.exe)")]
    NoClipboard,

    /// The clipboard utility could not be started or fed.
    #[error("Failed to run clipboard utility '{program}': {source}")]
    ClipboardSpawn {
        /// Utility name.
        program: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The clipboard utility ran but exited unsuccessfully.
    #[error("Clipboard utility '{program}' exited with {status}")]
    ClipboardFailed {
        /// Utility name.
        program: String,
        /// Exit status reported by the child.
        status: std::process::ExitStatus,
    },

    /// Writing the output file failed.
    #[error("Failed to write '{}': {source}", path.display())]
    Write {
        /// Destination path.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Writing to stdout failed (e.g. closed pipe).
    #[error("Failed to write to stdout: {0}")]
    Stdout(#[source] std::io::Error),
}
