//! Hover support for the Coq proof assistant.
//!
//! Three stateless steps turn a cursor position into a compact type:
//!
//! - `term::TermLocator` finds the identifier or notation under the cursor,
//! - `response::parse` strips the engine answer to a `Check` query down to
//!   the type expression,
//! - `response::SymbolPrettyPrinter` rewrites keywords and operators into
//!   Unicode glyphs.
//!
//! `hover::HoverProvider` chains them around a `hover::ProofEngine`.

pub mod config;
pub mod engine;
pub mod error;
pub mod hover;
pub mod logger;
pub mod query;
pub mod response;
pub mod term;
pub mod textbuf;

pub use error::Error;
pub type Result<T> = std::result::Result<T, Error>;
