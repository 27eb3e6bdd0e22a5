use fancy_regex::Regex;

use crate::Result;

/// Whitespace, as understood by the `\s` of the editor's regex engine:
/// Unicode White_Space without U+0085, plus U+FEFF.
const SPACE_CLASS: &str = r"[\x{09}-\x{0D}\x{20}\x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}]";

/// Word chars, as understood by the `\b` of the editor's regex engine.
const WORD_CLASS: &str = r"[A-Za-z0-9_]";

/// Condition on the chars around an occurrence of a rule's token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boundary {
    /// Neither neighbour is an ASCII word char. The start and the end of
    /// the text count as boundaries.
    Word,
    /// Both neighbours exist and are whitespace. Neighbours are not
    /// consumed, so `a -> b -> c` has two matches.
    Whitespace,
}

/// Rewrite every bounded occurrence of `token` into `glyph`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    pub token: &'static str,
    pub boundary: Boundary,
    pub glyph: &'static str,
}

impl Rule {
    pub const fn new(token: &'static str, boundary: Boundary, glyph: &'static str) -> Rule {
        Rule {
            token,
            boundary,
            glyph,
        }
    }

    /// Pattern matching the token, with its boundary as lookarounds.
    pub fn pattern(&self) -> String {
        let token = fancy_regex::escape(self.token);
        match self.boundary {
            Boundary::Word => format!("(?<!{w}){}(?!{w})", token, w = WORD_CLASS),
            Boundary::Whitespace => format!("(?<={s}){}(?={s})", token, s = SPACE_CLASS),
        }
    }
}

/// Glyph substitutions, applied in this order.
///
/// `<->` is listed before `->`, so it is consumed as a whole.
pub const SYMBOL_RULES: [Rule; 11] = [
    Rule::new("fun", Boundary::Word, "λ"),
    Rule::new("forall", Boundary::Word, "∀"),
    Rule::new("exists", Boundary::Word, "∃"),
    Rule::new(r"\/", Boundary::Whitespace, "∨"),
    Rule::new(r"/\", Boundary::Whitespace, "∧"),
    Rule::new("<->", Boundary::Whitespace, "⟷"),
    Rule::new("->", Boundary::Whitespace, "➞"),
    Rule::new("<=", Boundary::Whitespace, "≤"),
    Rule::new(">=", Boundary::Whitespace, "≥"),
    Rule::new("<>", Boundary::Whitespace, "≠"),
    Rule::new("~", Boundary::Whitespace, "¬"),
];

/// A rule with its pattern compiled.
#[derive(Debug, Clone)]
struct Rewrite {
    regex: Regex,
    glyph: &'static str,
}

impl Rewrite {
    /// Returns a copy of `text` where every match became the glyph.
    fn apply(&self, text: &str) -> String {
        let mut output = String::with_capacity(text.len());
        let mut copied = 0;

        for m in self.regex.find_iter(text).map_while(|m| m.ok()) {
            output.push_str(&text[copied..m.start()]);
            output.push_str(self.glyph);
            copied = m.end();
        }

        output.push_str(&text[copied..]);
        output
    }
}

/// Rewrites ASCII keywords and operators into compact Unicode glyphs.
#[derive(Debug, Clone)]
pub struct SymbolPrettyPrinter {
    rewrites: Vec<Rewrite>,
}

impl SymbolPrettyPrinter {
    /// Compile `rules`, kept in order. Rules with an empty token are
    /// ignored.
    pub fn new(rules: &[Rule]) -> Result<SymbolPrettyPrinter> {
        let rewrites = rules
            .iter()
            .filter(|rule| !rule.token.is_empty())
            .map(|rule| {
                Ok(Rewrite {
                    regex: Regex::new(&rule.pattern())?,
                    glyph: rule.glyph,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(SymbolPrettyPrinter { rewrites })
    }

    /// Printer for the glyphs of `SYMBOL_RULES`.
    pub fn coq() -> Result<SymbolPrettyPrinter> {
        SymbolPrettyPrinter::new(&SYMBOL_RULES)
    }

    /// Apply each rule to the output of the previous one.
    pub fn prettify(&self, type_text: &str) -> String {
        self.rewrites
            .iter()
            .fold(type_text.to_string(), |text, rewrite| rewrite.apply(&text))
    }
}
