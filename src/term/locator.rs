use log::{debug, trace};

use super::QueryTerm;
use crate::textbuf::{CharClasses, Position, SourceSpan, TextBuffer};

/// Finds the term under the cursor and decides whether it is an
/// identifier or a notation literal.
#[derive(Debug, Clone)]
pub struct TermLocator {
    classes: CharClasses,
}

impl TermLocator {
    pub fn new(classes: CharClasses) -> TermLocator {
        TermLocator { classes }
    }

    /// Returns the term designated by `selection`, or else by `position`.
    ///
    /// A non-empty selection is taken as is. Otherwise the identifier
    /// under the cursor is preferred over the notation under the cursor.
    /// Returns `None` when nothing but whitespace is found.
    pub fn resolve(
        &self,
        buffer: &TextBuffer,
        position: Position,
        selection: Option<&SourceSpan>,
    ) -> Option<QueryTerm> {
        let span = match selection {
            Some(span) if !span.is_empty() => *span,
            _ => self.span_at(buffer, position)?,
        };
        trace!("candidate span {} for position {}", span, position);

        let term = self.classify(&buffer.text_in(&span));
        debug!("resolved {} to {:?}", position, term);
        term
    }

    /// Classify `full` as an identifier or a notation literal.
    ///
    /// A text made only of notation chars which is not a qualified
    /// identifier is a notation.
    pub fn classify(&self, full: &str) -> Option<QueryTerm> {
        let trimmed = full.trim();
        if trimmed.is_empty() {
            return None;
        }

        if self.classes.is_notation(full) && !self.classes.is_identifier(full) {
            Some(QueryTerm::Notation(full.to_string()))
        } else {
            Some(QueryTerm::Identifier(trimmed.to_string()))
        }
    }

    fn span_at(&self, buffer: &TextBuffer, position: Position) -> Option<SourceSpan> {
        buffer
            .word_range_at(position, self.classes.identifier())
            .or_else(|| buffer.word_range_at(position, self.classes.notation()))
    }
}
