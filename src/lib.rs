pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod parsers;
pub mod processors;
pub mod utils;

// 주요 기능 재내보내기(re-exporting)
pub use config::{AnalyzerOptions, Subject};
pub use error::{ConfigError, LongReqError, ParseError};
pub use models::{ParseWindow, RequestKey, RequestTimeline, Snapshot};
pub use output::write_report;
pub use parsers::{parse_log, LongRequestLog};
