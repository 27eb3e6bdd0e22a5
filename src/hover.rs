//! Hover pipeline: term under the cursor, `Check` query, compact type.

use log::debug;

use crate::query::Query;
use crate::response::{self, SymbolPrettyPrinter};
use crate::term::TermLocator;
use crate::textbuf::{Position, TextBuffer};

/// Content-type label of the hover payload.
pub const HOVER_LANGUAGE: &str = "coq";

/// Tooltip payload handed back to the editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hover {
    pub language: String,
    pub value: String,
}

impl Hover {
    pub fn new(value: String) -> Hover {
        Hover {
            language: HOVER_LANGUAGE.to_string(),
            value,
        }
    }
}

/// Answers queries. This is the session with the proving engine.
///
/// Implementors map engine errors and timeouts to `None`.
pub trait ProofEngine {
    fn hover_query(&self, query: &Query) -> Option<String>;
}

pub struct HoverProvider {
    locator: TermLocator,
    printer: SymbolPrettyPrinter,
}

impl HoverProvider {
    pub fn new(locator: TermLocator, printer: SymbolPrettyPrinter) -> HoverProvider {
        HoverProvider { locator, printer }
    }

    /// Returns the hover for the term at `position`, if the engine knows
    /// its type.
    pub fn provide(
        &self,
        buffer: &TextBuffer,
        position: Position,
        engine: &dyn ProofEngine,
    ) -> Option<Hover> {
        let term = self.locator.resolve(buffer, position, None)?;
        let query = Query::check(term);

        debug!("hover query: {}", query);
        let raw = engine.hover_query(&query)?;

        self.render(&raw)
    }

    /// Turn a raw `Check` answer into a hover. Empty types are never
    /// rendered.
    pub fn render(&self, raw: &str) -> Option<Hover> {
        let type_text = response::parse(raw)?;
        let value = self.printer.prettify(&type_text);

        if value.is_empty() {
            None
        } else {
            Some(Hover::new(value))
        }
    }
}
