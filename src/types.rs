/// Invocation configuration shared by every pipeline stage.
///
/// Built once from the parsed command line and read-only afterwards.
use std::path::PathBuf;

/// Where the fetched schema goes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Copy to the system clipboard, falling back to stdout.
    #[default]
    Clipboard,
    /// Write to stdout verbatim.
    Print,
    /// Overwrite the given file.
    File(PathBuf),
}

/// Everything one run needs, derived from the command line.
#[derive(Debug, Clone)]
pub struct InvocationConfig {
    /// GraphQL endpoint URL.
    pub endpoint: String,
    /// Selected sink.
    pub output: OutputMode,
    /// Raw `"Key: Value"` header strings, in command-line order.
    pub headers: Vec<String>,
    /// Query document override. `None` uses the installed/bundled document.
    pub query_file: Option<PathBuf>,
    /// Debug logging and stage timings.
    pub debug: bool,
}
