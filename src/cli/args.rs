/// CLI argument definitions via clap derive.
use std::path::PathBuf;

use clap::Parser;
use clap::builder::NonEmptyStringValueParser;

use crate::types::{InvocationConfig, OutputMode};

/// gql-introspect: fetch a GraphQL schema by introspection.
#[derive(Debug, Parser)]
#[command(
    name = "gql-introspect",
    about = "Run the GraphQL introspection query against an endpoint and copy, print, or save the result",
    version,
    arg_required_else_help = true,
    after_help = "Examples:\n  \
                  gql-introspect https://api.example.com/graphql\n  \
                  gql-introspect https://api.example.com/graphql --print | jq .\n  \
                  gql-introspect https://api.example.com/graphql -H \"Authorization: Bearer TOKEN\" -o schema.json"
)]
pub struct Cli {
    /// GraphQL endpoint URL.
    #[arg(value_name = "ENDPOINT", value_parser = NonEmptyStringValueParser::new())]
    pub endpoint: String,

    /// Write the schema to FILE (overwrites).
    #[arg(
        short = 'o',
        long,
        value_name = "FILE",
        overrides_with_all = ["print", "clipboard"]
    )]
    pub output: Option<PathBuf>,

    /// Print the schema to stdout.
    #[arg(short = 'p', long, overrides_with_all = ["output", "clipboard"])]
    pub print: bool,

    /// Copy the schema to the clipboard (default).
    #[arg(short = 'c', long, overrides_with_all = ["output", "print"])]
    pub clipboard: bool,

    /// Extra request header as "Key: Value". Repeatable.
    #[arg(short = 'H', long = "header", value_name = "HEADER", action = clap::ArgAction::Append)]
    pub headers: Vec<String>,

    /// Read the query document from FILE instead of the bundled one.
    #[arg(short = 'q', long = "query", value_name = "FILE")]
    pub query: Option<PathBuf>,

    /// Log debug details and stage timings to stderr.
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// Resolve the selected output mode. Mode flags override each other, so at
    /// most one of them is still set here.
    #[must_use]
    pub fn output_mode(&self) -> OutputMode {
        if let Some(path) = &self.output {
            OutputMode::File(path.clone())
        } else if self.print {
            OutputMode::Print
        } else {
            OutputMode::Clipboard
        }
    }

    /// Consume the parsed arguments into the run configuration.
    #[must_use]
    pub fn into_config(self) -> InvocationConfig {
        let output = self.output_mode();
        InvocationConfig {
            endpoint: self.endpoint,
            output,
            headers: self.headers,
            query_file: self.query,
            debug: self.debug,
        }
    }
}
