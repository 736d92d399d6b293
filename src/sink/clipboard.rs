/// Clipboard sinks backed by platform copy utilities.
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use tracing::debug;

use super::errors::SinkError;

/// Something that can place text on the system clipboard.
pub trait ClipboardSink {
    /// Short name for diagnostics.
    fn name(&self) -> &str;

    /// Replace the clipboard contents with `text`.
    ///
    /// # Errors
    ///
    /// Returns `SinkError` if the text could not be handed over.
    fn copy(&self, text: &str) -> Result<(), SinkError>;
}

/// Copy utilities in lookup order: macOS, X11 (two flavours), Windows/WSL.
pub const CANDIDATES: [(&str, &[&str]); 4] = [
    ("pbcopy", &[]),
    ("xclip", &["-selection", "clipboard"]),
    ("xsel", &["--clipboard", "--input"]),
    ("clip.exe", &[]),
];

/// A clipboard utility run as a child process, fed through stdin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandClipboard {
    /// Utility name as looked up.
    pub program: String,
    /// Resolved executable path.
    pub path: PathBuf,
    /// Fixed arguments.
    pub args: Vec<String>,
}

impl CommandClipboard {
    #[must_use]
    pub fn new(program: &str, path: PathBuf, args: &[&str]) -> Self {
        Self {
            program: program.to_owned(),
            path,
            args: args.iter().map(|a| (*a).to_owned()).collect(),
        }
    }
}

impl ClipboardSink for CommandClipboard {
    fn name(&self) -> &str {
        &self.program
    }

    fn copy(&self, text: &str) -> Result<(), SinkError> {
        let spawn_err = |source| SinkError::ClipboardSpawn {
            program: self.program.clone(),
            source,
        };

        let mut child = Command::new(&self.path)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .spawn()
            .map_err(spawn_err)?;

        if let Some(mut stdin) = child.stdin.take() {
            let written = stdin.write_all(text.as_bytes());
            // Closing stdin lets the utility see EOF.
            drop(stdin);
            if let Err(source) = written {
                // Reap the child before reporting; it may still be running.
                let _ = child.kill();
                let _ = child.wait();
                return Err(spawn_err(source));
            }
        }

        let status = child.wait().map_err(spawn_err)?;
        if status.success() {
            Ok(())
        } else {
            Err(SinkError::ClipboardFailed {
                program: self.program.clone(),
                status,
            })
        }
    }
}

/// Find the first available clipboard utility on `PATH`.
#[must_use]
pub fn detect() -> Option<CommandClipboard> {
    detect_with(|program| which::which(program).ok())
}

/// Try [`CANDIDATES`] in order using `lookup` to resolve executables.
#[must_use]
pub fn detect_with(lookup: impl Fn(&str) -> Option<PathBuf>) -> Option<CommandClipboard> {
    CANDIDATES.iter().find_map(|(program, args)| {
        let path = lookup(program)?;
        debug!(program, path = %path.display(), "clipboard utility found");
        Some(CommandClipboard::new(program, path, args))
    })
}
