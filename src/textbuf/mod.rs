mod buffer;
pub mod regexes;
pub mod span;

pub use buffer::TextBuffer;
pub use regexes::CharClasses;
pub use span::{Position, SourceSpan};
