use std::path::PathBuf;

use clap::Parser;

use super::basic;
use crate::{
    query::QueryKind,
    textbuf::span::{self, Position, SourceSpan},
};

#[derive(Parser, Debug)]
#[clap(author, about, version)]
pub enum MainConfig {
    /// Print the query for the term at a position.
    ///
    /// Exits with status 1 when there is no term there.
    Term {
        #[command(flatten)]
        cursor: Cursor,

        /// Selected span ("LINE:COL-LINE:COL"), used instead of the
        /// position when not empty.
        #[arg(short, long, value_parser(span::parse_span))]
        selection: Option<SourceSpan>,

        /// Query to build.
        #[arg(short, long, value_enum, default_value_t = QueryKind::Check)]
        kind: QueryKind,

        #[command(flatten)]
        config: basic::Config,
    },
    /// Render a raw `Check` answer read from stdin.
    ///
    /// Exits with status 1 when there is nothing to show.
    Render {
        #[command(flatten)]
        config: basic::Config,
    },
    /// Ask an engine program for the type of the term at a position.
    ///
    /// Exits with status 1 when there is nothing to show.
    Hover {
        #[command(flatten)]
        cursor: Cursor,

        /// Program answering queries. It receives the query on stdin
        /// and must print the raw answer on stdout.
        #[arg(short, long)]
        engine: String,

        /// Arguments passed to the engine program.
        #[arg(last = true)]
        engine_args: Vec<String>,

        #[command(flatten)]
        config: basic::Config,
    },
}

impl MainConfig {
    pub fn config(&self) -> &basic::Config {
        match self {
            MainConfig::Term { config, .. }
            | MainConfig::Render { config }
            | MainConfig::Hover { config, .. } => config,
        }
    }
}

/// Where to look for the term.
#[derive(clap::Args, Debug, Clone)]
pub struct Cursor {
    /// Cursor position ("LINE:COL", zero-based, columns in chars).
    #[arg(short, long, value_parser(span::parse_position))]
    pub position: Position,

    /// File holding the buffer. Reads stdin when absent.
    pub file: Option<PathBuf>,
}
