/// Diagnostics on stderr: error reporting and stage timing.
///
/// stdout is reserved for the schema payload, so nothing here touches it.
use std::io::Write;

use tracing::debug;

use crate::introspection::IntrospectError;

/// Write a fatal error to stderr.
pub fn write_error(err: &IntrospectError) {
    let stderr = std::io::stderr();
    let mut out = stderr.lock();
    let _ = writeln!(out, "Error: {err}");
    if let IntrospectError::EmptyQuery { .. } | IntrospectError::QueryNotFound { .. } = err {
        let _ = writeln!(
            out,
            "  The introspection query document ships with the tool; reinstall it or pass --query FILE."
        );
    }
}

// --- Stage timer ---

/// A RAII timer that logs elapsed milliseconds at debug level on drop.
///
/// Visible only with `--debug` (or a matching `RUST_LOG`).
pub struct StageTimer {
    label: &'static str,
    start: std::time::Instant,
}

impl StageTimer {
    #[must_use]
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            start: std::time::Instant::now(),
        }
    }
}

impl Drop for StageTimer {
    fn drop(&mut self) {
        let ms = self.start.elapsed().as_secs_f64() * 1000.0;
        debug!(stage = self.label, "finished in {ms:.2}ms");
    }
}
