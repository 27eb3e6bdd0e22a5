//! Turn a raw `Check` answer from the proving engine into a compact,
//! single-purpose type rendering.

mod parser;
mod pretty;

pub use parser::parse;
pub use pretty::{Boundary, Rule, SymbolPrettyPrinter, SYMBOL_RULES};
