use clap::Args;

use crate::{
    hover::HoverProvider,
    response::SymbolPrettyPrinter,
    term::TermLocator,
    textbuf::{regexes, CharClasses},
    Result,
};

/// Configuration shared by all subcommands, parsed from command line.
#[derive(Args, Debug, Clone)]
pub struct Config {
    /// Pattern matching identifiers, used as the word class.
    ///
    /// Defaults to Coq qualified identifiers such as `Nat.add`.
    #[arg(
        long,
        env = "COQ_HOVER_IDENTIFIER_PATTERN",
        default_value = regexes::QUALIFIED_IDENT_PATTERN
    )]
    pub identifier_pattern: String,

    /// Pattern matching notations, tried when no identifier is under the
    /// cursor.
    ///
    /// Notations which are not identifiers are quoted in queries.
    #[arg(
        long,
        env = "COQ_HOVER_NOTATION_PATTERN",
        default_value = regexes::NOTATION_PATTERN
    )]
    pub notation_pattern: String,

    /// Log level, messages are written to stderr.
    #[arg(long, default_value_t = log::LevelFilter::Warn)]
    pub log_level: log::LevelFilter,
}

impl Config {
    pub fn char_classes(&self) -> Result<CharClasses> {
        CharClasses::new(&self.identifier_pattern, &self.notation_pattern)
    }

    pub fn locator(&self) -> Result<TermLocator> {
        Ok(TermLocator::new(self.char_classes()?))
    }

    pub fn hover_provider(&self) -> Result<HoverProvider> {
        Ok(HoverProvider::new(
            self.locator()?,
            SymbolPrettyPrinter::coq()?,
        ))
    }
}
