//! This module defines the character classes used to find terms in a
//! buffer.
//!
//! The identifier class is also the word class of the editor: hovering
//! anywhere over `Nat.add` designates the whole qualified name.

use regex::Regex;

use crate::Result;

/// Qualified identifier: letters, digits, underscores and primes, in
/// dot-separated segments.
pub const QUALIFIED_IDENT_PATTERN: &str = r"[\p{L}\p{N}_']+(?:\.[\p{L}\p{N}_']+)*";

/// Notation: any run of chars except separators, control chars and the
/// double quote.
pub const NOTATION_PATTERN: &str = r#"[^\p{Z}\p{C}"]+"#;

/// Compiled identifier and notation classes, along with their anchored
/// (end-to-end) variants.
#[derive(Debug, Clone)]
pub struct CharClasses {
    identifier: Regex,
    notation: Regex,
    identifier_exact: Regex,
    notation_exact: Regex,
}

impl CharClasses {
    pub fn new(identifier: &str, notation: &str) -> Result<CharClasses> {
        Ok(CharClasses {
            identifier: Regex::new(identifier)?,
            notation: Regex::new(notation)?,
            identifier_exact: Regex::new(&anchored(identifier))?,
            notation_exact: Regex::new(&anchored(notation))?,
        })
    }

    /// Classes for Coq identifiers and notations.
    pub fn coq() -> Result<CharClasses> {
        CharClasses::new(QUALIFIED_IDENT_PATTERN, NOTATION_PATTERN)
    }

    pub fn identifier(&self) -> &Regex {
        &self.identifier
    }

    pub fn notation(&self) -> &Regex {
        &self.notation
    }

    pub fn is_identifier(&self, text: &str) -> bool {
        self.identifier_exact.is_match(text)
    }

    pub fn is_notation(&self, text: &str) -> bool {
        self.notation_exact.is_match(text)
    }
}

fn anchored(pattern: &str) -> String {
    format!(r"\A(?:{})\z", pattern)
}
