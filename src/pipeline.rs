/// The run itself: load query, send it, validate, deliver.
use std::io::Write;

use crate::cli::StageTimer;
use crate::introspection::{self, IntrospectError};
use crate::sink::{self, ClipboardSink};
use crate::types::InvocationConfig;

/// Run one introspection against the real clipboard and stdout.
///
/// # Errors
///
/// Returns `IntrospectError` for any fatal condition; a missing or failing
/// clipboard utility is not one.
pub fn run(config: &InvocationConfig) -> Result<(), IntrospectError> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_with(config, sink::detect, &mut out)
}

/// [`run`] with the clipboard lookup and stdout supplied by the caller.
///
/// # Errors
///
/// See [`run`].
pub fn run_with<W, P, C>(
    config: &InvocationConfig,
    find_clipboard: P,
    stdout: &mut W,
) -> Result<(), IntrospectError>
where
    W: Write,
    P: FnOnce() -> Option<C>,
    C: ClipboardSink,
{
    let t_query = StageTimer::new("load_query");
    let query = introspection::load(config.query_file.as_deref())?;
    drop(t_query);

    let t_request = StageTimer::new("request");
    let client = introspection::build_client()?;
    let body = introspection::execute(&client, &config.endpoint, &config.headers, &query.body)?;
    drop(t_request);

    introspection::validate(&body)?;

    let _t_deliver = StageTimer::new("deliver");
    sink::deliver(&body, &config.output, find_clipboard, stdout)?;
    Ok(())
}
