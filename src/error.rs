#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Invalid character class pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    #[error("Invalid glyph rule: {0}")]
    InvalidRule(#[from] fancy_regex::Error),

    #[error("Expected a position formatted as LINE:COL, got `{0}`")]
    ExpectedPosition(String),

    #[error("Expected a span formatted as LINE:COL-LINE:COL, got `{0}`")]
    ExpectedSpan(String),

    #[error("Failed to parse integer")]
    ExpectedInt(#[from] std::num::ParseIntError),

    #[error("Failed to install the logger")]
    Logger(#[from] log::SetLoggerError),

    #[error("IOError: `{0}`")]
    Io(#[from] std::io::Error),
}
