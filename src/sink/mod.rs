/// Output sinks: clipboard, file, stdout.
pub mod clipboard;
pub mod errors;

use std::io::Write;
use std::path::Path;

use tracing::{info, warn};

pub use clipboard::{ClipboardSink, detect};
pub use errors::SinkError;

use crate::types::OutputMode;

/// Deliver `body` to the sink selected by `mode`.
///
/// `find_clipboard` is only called in clipboard mode. When it finds nothing, or
/// the utility it finds fails, the body is written to `stdout` instead and the
/// call still succeeds.
///
/// # Errors
///
/// Returns `SinkError` when the file or stdout cannot be written.
pub fn deliver<W, P, C>(
    body: &str,
    mode: &OutputMode,
    find_clipboard: P,
    stdout: &mut W,
) -> Result<(), SinkError>
where
    W: Write,
    P: FnOnce() -> Option<C>,
    C: ClipboardSink,
{
    match mode {
        OutputMode::Print => write_stdout(body, stdout),
        OutputMode::File(path) => {
            write_file(body, path)?;
            info!("Schema written to {}", path.display());
            Ok(())
        }
        OutputMode::Clipboard => {
            let copied = match find_clipboard() {
                Some(sink) => sink.copy(body).map(|()| sink.name().to_owned()),
                None => Err(SinkError::NoClipboard),
            };
            match copied {
                Ok(name) => {
                    info!("Schema copied to clipboard via {name}");
                    Ok(())
                }
                Err(err) => {
                    warn!("{err}; printing to stdout instead");
                    write_stdout(body, stdout)
                }
            }
        }
    }
}

/// Write `body` verbatim, without a trailing newline.
fn write_stdout<W: Write>(body: &str, out: &mut W) -> Result<(), SinkError> {
    out.write_all(body.as_bytes()).map_err(SinkError::Stdout)?;
    out.flush().map_err(SinkError::Stdout)
}

/// Overwrite `path` with `body`. Parent directories are not created.
fn write_file(body: &str, path: &Path) -> Result<(), SinkError> {
    std::fs::write(path, body).map_err(|source| SinkError::Write {
        path: path.to_owned(),
        source,
    })
}
