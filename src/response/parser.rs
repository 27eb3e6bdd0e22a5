use log::trace;

/// Separates the printed type from the notation definitions the engine
/// appends to disambiguate it.
const WHERE_SEPARATOR: &str = "\nwhere\n";

/// Follows the echoed term, precedes the type.
const TYPE_MARKER: &str = "\n\t : ";

/// Indent the engine puts before each continuation line of a long type.
const CONTINUATION_INDENT: &str = "       ";

/// Extract the type expression from the answer to a `Check` query.
///
/// The expected layout is
///
/// ```text
/// <echoed term>
/// \t : <type>
///        <continuation, indented by 7 spaces>
/// where
/// <notation definitions>
/// ```
///
/// The `where` block is dropped, and only one 7-space indent is removed
/// from each line. Returns `None` when the answer has no type marker or
/// when nothing is left to show.
pub fn parse(raw: &str) -> Option<String> {
    let head = raw.split(WHERE_SEPARATOR).next().unwrap_or("");

    let (_echo, type_text) = head.split_once(TYPE_MARKER)?;

    let type_text = type_text
        .split('\n')
        .map(|line| line.strip_prefix(CONTINUATION_INDENT).unwrap_or(line))
        .collect::<Vec<_>>()
        .join("\n");

    let type_text = type_text.trim();
    trace!("parsed type: {:?}", type_text);

    if type_text.is_empty() {
        None
    } else {
        Some(type_text.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn simple_type() {
        assert_eq!(parse("a\n\t : nat\n"), Some("nat".to_string()));
    }

    #[test]
    fn where_block_is_dropped() {
        assert_eq!(
            parse("a\n\t : nat\nwhere\nb := 1\n"),
            Some("nat".to_string())
        );
    }

    #[test]
    fn only_first_where_block_splits() {
        let raw = "a\n\t : nat\nwhere\n?x : nat\nwhere\n?y : nat\n";
        assert_eq!(parse(raw), Some("nat".to_string()));
    }

    #[test]
    fn empty_response() {
        assert_eq!(parse(""), None);
    }

    #[test]
    fn missing_marker() {
        assert_eq!(parse("Error: The reference foo was not found."), None);
    }

    #[test]
    fn empty_type() {
        assert_eq!(parse("a\n\t : \n"), None);
        assert_eq!(parse("a\n\t :   \n       \nwhere\nb\n"), None);
    }

    #[test]
    fn continuation_indent_removed_once() {
        assert_eq!(
            parse("a\n\t : A ->\n       B\n"),
            Some("A ->\nB".to_string())
        );

        // Nine spaces: two of them belong to the type layout.
        assert_eq!(
            parse("a\n\t : A ->\n         B\n"),
            Some("A ->\n  B".to_string())
        );

        // Less than seven spaces are left alone.
        assert_eq!(
            parse("a\n\t : A ->\n   B\n"),
            Some("A ->\n   B".to_string())
        );
    }

    #[test]
    fn first_marker_only() {
        let raw = "f\n\t : nat\n\t : nat\n";
        assert_eq!(parse(raw), Some("nat\n\t : nat".to_string()));
    }

    #[test]
    fn long_forall() {
        let raw = "plus_comm\n\t : forall n m : nat,\n       n + m = m + n\n";
        assert_eq!(
            parse(raw),
            Some("forall n m : nat,\nn + m = m + n".to_string())
        );
    }
}
