use std::fmt;
use std::str::FromStr;

use crate::{error::Error, Result};

/// Location in a text buffer.
///
/// Both fields are zero-based, and `column` counts chars (Unicode scalar
/// values), not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Position {
        Position { line, column }
    }
}

impl FromStr for Position {
    type Err = Error;

    /// Parse a `"LINE:COL"` string, e.g. `"12:4"`.
    fn from_str(src: &str) -> Result<Self> {
        let (line, column) = src
            .split_once(':')
            .ok_or_else(|| Error::ExpectedPosition(src.to_string()))?;

        Ok(Position {
            line: line.trim().parse::<usize>()?,
            column: column.trim().parse::<usize>()?,
        })
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Half-open range `[start, end)` into a text buffer, identifying a
/// candidate token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceSpan {
    pub start: Position,
    pub end: Position,
}

impl SourceSpan {
    pub fn new(start: Position, end: Position) -> SourceSpan {
        SourceSpan { start, end }
    }

    /// Span covering `start..end` columns on a single line.
    pub fn on_line(line: usize, start: usize, end: usize) -> SourceSpan {
        SourceSpan {
            start: Position::new(line, start),
            end: Position::new(line, end),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

impl FromStr for SourceSpan {
    type Err = Error;

    /// Parse a `"LINE:COL-LINE:COL"` string, e.g. `"0:4-0:11"`.
    fn from_str(src: &str) -> Result<Self> {
        let (start, end) = src
            .split_once('-')
            .ok_or_else(|| Error::ExpectedSpan(src.to_string()))?;

        let start = Position::from_str(start).map_err(|_| Error::ExpectedSpan(src.to_string()))?;
        let end = Position::from_str(end).map_err(|_| Error::ExpectedSpan(src.to_string()))?;

        Ok(SourceSpan { start, end })
    }
}

impl fmt::Display for SourceSpan {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{},{})", self.start, self.end)
    }
}

/// Parse a position, used during CLI parsing.
pub fn parse_position(src: &str) -> Result<Position> {
    Position::from_str(src)
}

/// Parse a span, used during CLI parsing.
pub fn parse_span(src: &str) -> Result<SourceSpan> {
    SourceSpan::from_str(src)
}
