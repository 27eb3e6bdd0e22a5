//! Queries sent to the proving engine about the term under the cursor.

use std::fmt;

use clap::ValueEnum;

use crate::term::QueryTerm;

/// Kind of query, named after the engine command it issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum QueryKind {
    /// Print the type of the term.
    Check,
    /// Find where the name or notation is defined.
    Locate,
    /// Search for lemmas mentioning the term.
    Search,
    /// Print general information about the term.
    About,
    /// Search for lemmas mentioning the term (legacy command).
    SearchAbout,
    /// Print the definition of the term.
    Print,
}

impl QueryKind {
    /// Engine command name.
    pub fn vernacular(&self) -> &'static str {
        match self {
            QueryKind::Check => "Check",
            QueryKind::Locate => "Locate",
            QueryKind::Search => "Search",
            QueryKind::About => "About",
            QueryKind::SearchAbout => "SearchAbout",
            QueryKind::Print => "Print",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub kind: QueryKind,
    pub term: QueryTerm,
}

impl Query {
    pub fn new(kind: QueryKind, term: QueryTerm) -> Query {
        Query { kind, term }
    }

    /// Query used for hovers: the type of the term.
    pub fn check(term: QueryTerm) -> Query {
        Query::new(QueryKind::Check, term)
    }

    /// Command text to submit, e.g. `Check "++".`.
    pub fn command(&self) -> String {
        format!("{} {}.", self.kind.vernacular(), self.term.text())
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.command())
    }
}
