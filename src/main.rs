#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! gql-introspect: fetch a GraphQL schema by introspection.

mod cli;
mod introspection;
mod logging;
mod pipeline;
mod sink;
mod types;

use clap::Parser;

use cli::{Cli, write_error};

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            std::process::exit(clap_exit_code(&err));
        }
    };
    let config = cli.into_config();

    if let Err(err) = logging::setup_logging(config.debug) {
        eprintln!("Warning: logging disabled: {err:#}");
    }

    if let Err(err) = pipeline::run(&config) {
        write_error(&err);
        std::process::exit(err.exit_code());
    }
}

/// Exit code for a parse outcome clap reports as an error. `--help` and
/// `--version` print to stdout and exit 0; every real usage error exits 1.
fn clap_exit_code(err: &clap::Error) -> i32 {
    i32::from(err.use_stderr())
}

#[cfg(test)]
mod tests {
    use clap::error::ErrorKind;

    use super::*;

    const ENDPOINT: &str = "https://api.example.com/graphql";

    fn exit_code(args: &[&str]) -> (ErrorKind, i32) {
        let argv = std::iter::once("gql-introspect").chain(args.iter().copied());
        let err = Cli::try_parse_from(argv).unwrap_err();
        (err.kind(), clap_exit_code(&err))
    }

    #[test]
    fn test_no_args_exits_1() {
        assert_eq!(
            exit_code(&[]),
            (ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand, 1)
        );
    }

    #[test]
    fn test_unknown_option_exits_1() {
        assert_eq!(
            exit_code(&[ENDPOINT, "--bogus"]),
            (ErrorKind::UnknownArgument, 1)
        );
    }

    #[test]
    fn test_missing_option_value_exits_1() {
        assert_eq!(exit_code(&[ENDPOINT, "-o"]).1, 1);
    }

    #[test]
    fn test_help_exits_0() {
        assert_eq!(exit_code(&["-h"]), (ErrorKind::DisplayHelp, 0));
        assert_eq!(exit_code(&[ENDPOINT, "--help"]), (ErrorKind::DisplayHelp, 0));
    }

    #[test]
    fn test_version_exits_0() {
        assert_eq!(exit_code(&["--version"]), (ErrorKind::DisplayVersion, 0));
        assert_eq!(exit_code(&["-V"]), (ErrorKind::DisplayVersion, 0));
    }
}
