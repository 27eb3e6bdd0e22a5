use std::fmt;

/// Term to submit to the proving engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryTerm {
    /// Plain or qualified identifier, e.g. `Nat.add`, sent as is.
    Identifier(String),
    /// Notation literal, e.g. `++`, sent between double quotes.
    Notation(String),
}

impl QueryTerm {
    /// Text as expected by the engine, quotes included for notations.
    pub fn text(&self) -> String {
        match self {
            QueryTerm::Identifier(text) => text.clone(),
            QueryTerm::Notation(text) => format!("\"{}\"", text),
        }
    }

    pub fn is_quoted(&self) -> bool {
        matches!(self, QueryTerm::Notation(_))
    }
}

impl fmt::Display for QueryTerm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            QueryTerm::Identifier(text) => write!(f, "{}", text),
            QueryTerm::Notation(text) => write!(f, "\"{}\"", text),
        }
    }
}
