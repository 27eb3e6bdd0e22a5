pub mod basic;
pub mod extended;

pub use basic::Config;
pub use extended::{Cursor, MainConfig};
