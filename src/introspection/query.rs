/// Locating and reading the introspection query document.
///
/// The document is a JSON request envelope (`{"query": "...", ...}`) and is
/// sent as-is. It is never parsed here.
use std::borrow::Cow;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::errors::IntrospectError;

/// File name of the document when installed next to the executable.
pub const QUERY_FILE_NAME: &str = "introspection_query.json";

/// The document shipped with the crate.
pub const BUNDLED_QUERY: &str = include_str!("../../resources/introspection_query.json");

/// A loaded query document and where it came from.
#[derive(Debug, Clone)]
pub struct QueryDocument {
    /// Raw JSON text.
    pub body: Cow<'static, str>,
    /// Human-readable origin, for diagnostics.
    pub origin: String,
}

/// Load the query document.
///
/// An explicit `override_path` must exist. Without one, a document installed
/// beside the running executable takes precedence over the bundled copy.
///
/// # Errors
///
/// Returns `IntrospectError::QueryNotFound` / `QueryRead` when the file cannot
/// be read and `EmptyQuery` when the document is blank.
pub fn load(override_path: Option<&Path>) -> Result<QueryDocument, IntrospectError> {
    if let Some(path) = override_path {
        return read_file(path);
    }

    if let Some(path) = installed_path().filter(|p| p.is_file()) {
        return read_file(&path);
    }

    debug!("using bundled introspection query");
    checked(QueryDocument {
        body: Cow::Borrowed(BUNDLED_QUERY),
        origin: "bundled resource".to_owned(),
    })
}

/// Expected path of the installed document, derived from the executable path.
#[must_use]
pub fn installed_path() -> Option<PathBuf> {
    let exe = std::env::current_exe().ok()?;
    Some(exe.parent()?.join(QUERY_FILE_NAME))
}

fn read_file(path: &Path) -> Result<QueryDocument, IntrospectError> {
    debug!(path = %path.display(), "reading introspection query");
    let body = std::fs::read_to_string(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            IntrospectError::QueryNotFound {
                path: path.to_owned(),
            }
        } else {
            IntrospectError::QueryRead {
                path: path.to_owned(),
                source,
            }
        }
    })?;
    checked(QueryDocument {
        body: Cow::Owned(body),
        origin: format!("'{}'", path.display()),
    })
}

fn checked(doc: QueryDocument) -> Result<QueryDocument, IntrospectError> {
    if doc.body.trim().is_empty() {
        return Err(IntrospectError::EmptyQuery { origin: doc.origin });
    }
    Ok(doc)
}
