//! Resolve a cursor position or a selection into the term to ask the
//! proving engine about.

mod locator;
mod query_term;

pub use locator::TermLocator;
pub use query_term::QueryTerm;
