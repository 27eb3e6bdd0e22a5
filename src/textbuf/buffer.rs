use regex::Regex;

use super::span::{Position, SourceSpan};

/// Read-only, line-oriented view over the editor buffer.
pub struct TextBuffer<'a> {
    pub lines: Vec<&'a str>,
}

impl<'a> TextBuffer<'a> {
    pub fn new(buffer: &'a str) -> TextBuffer<'a> {
        let lines = buffer
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .collect();

        TextBuffer { lines }
    }

    /// Returns the text covered by `span`.
    ///
    /// Lines of a multi-line span are joined with `\n`. Columns past the
    /// end of a line are clamped to the line end, and lines past the end
    /// of the buffer are ignored.
    pub fn text_in(&self, span: &SourceSpan) -> String {
        if span.is_empty() {
            return String::new();
        }

        let SourceSpan { start, end } = *span;

        let mut pieces: Vec<&'a str> = Vec::new();
        for index in start.line..=end.line {
            let line = match self.lines.get(index) {
                Some(line) => *line,
                None => break,
            };

            let from = if index == start.line {
                byte_offset(line, start.column)
            } else {
                0
            };
            let to = if index == end.line {
                byte_offset(line, end.column)
            } else {
                line.len()
            };

            pieces.push(line.get(from..to.max(from)).unwrap_or(""));
        }

        pieces.join("\n")
    }

    /// Returns the span of the first non-empty match of `class` on the
    /// position's line which contains the position's column.
    ///
    /// The end of a match is inclusive here: a cursor placed right after
    /// a word still designates that word.
    pub fn word_range_at(&self, position: Position, class: &Regex) -> Option<SourceSpan> {
        let line: &str = self.lines.get(position.line)?;

        class
            .find_iter(line)
            .filter(|m| !m.as_str().is_empty())
            .map(|m| {
                let start = line[..m.start()].chars().count();
                let end = start + m.as_str().chars().count();
                (start, end)
            })
            .find(|&(start, end)| start <= position.column && position.column <= end)
            .map(|(start, end)| SourceSpan::on_line(position.line, start, end))
    }
}

/// Byte offset of the char at `column`, clamped to the line length.
fn byte_offset(line: &str, column: usize) -> usize {
    line.char_indices()
        .nth(column)
        .map_or(line.len(), |(offset, _)| offset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn split_lines() {
        let buffer = TextBuffer::new("Definition x := 1.\r\nCheck x.\n");
        assert_eq!(buffer.lines, vec!["Definition x := 1.", "Check x.", ""]);
    }

    #[test]
    fn text_in_single_line() {
        let buffer = TextBuffer::new("Check Nat.add.");
        let span = SourceSpan::on_line(0, 6, 13);
        assert_eq!(buffer.text_in(&span), "Nat.add");
    }

    #[test]
    fn text_in_multi_line() {
        let buffer = TextBuffer::new("forall A,\n  A -> A\nend");
        let span = SourceSpan::new(Position::new(0, 7), Position::new(1, 3));
        assert_eq!(buffer.text_in(&span), "A,\n  A");
    }

    #[test]
    fn text_in_unicode_and_clamped() {
        let buffer = TextBuffer::new("λ x ⇒ x");
        assert_eq!(buffer.text_in(&SourceSpan::on_line(0, 4, 5)), "⇒");
        assert_eq!(buffer.text_in(&SourceSpan::on_line(0, 6, 40)), "x");
        assert_eq!(buffer.text_in(&SourceSpan::on_line(7, 0, 1)), "");
    }

    #[test]
    fn word_range_inclusive_end() {
        let buffer = TextBuffer::new("foo bar");
        let class = Regex::new(r"\w+").unwrap();

        let at_end = buffer.word_range_at(Position::new(0, 3), &class);
        assert_eq!(at_end, Some(SourceSpan::on_line(0, 0, 3)));

        let inside = buffer.word_range_at(Position::new(0, 5), &class);
        assert_eq!(inside, Some(SourceSpan::on_line(0, 4, 7)));
    }

    #[test]
    fn word_range_missing() {
        let buffer = TextBuffer::new("foo   bar");
        let class = Regex::new(r"\w+").unwrap();

        assert_eq!(buffer.word_range_at(Position::new(0, 4), &class), None);
        assert_eq!(buffer.word_range_at(Position::new(3, 0), &class), None);
    }

    #[test]
    fn word_range_counts_chars() {
        let buffer = TextBuffer::new("∀ n, n ≤ n");
        let class = Regex::new(r"\w+").unwrap();

        let range = buffer.word_range_at(Position::new(0, 5), &class);
        assert_eq!(range, Some(SourceSpan::on_line(0, 5, 6)));
    }
}
