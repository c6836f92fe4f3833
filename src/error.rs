use std::io;

/// Failure to convert the fields of a line that matched the header grammar.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseError {
    #[error("invalid {field} value '{value}'")]
    InvalidNumber { field: &'static str, value: String },

    #[error("start time {0} is outside the representable calendar range")]
    TimestampOutOfRange(String),
}

/// Invalid option values, reported before any input is read.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid date '{value}', expected format YYYY-MM-DD HH:MM:SS")]
    InvalidDate { value: String },

    #[error("empty time window: start {start} is not before end {end}")]
    EmptyWindow { start: String, end: String },
}

#[derive(Debug, thiserror::Error)]
pub enum LongReqError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, LongReqError>;
