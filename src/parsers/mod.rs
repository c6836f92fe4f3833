pub mod header;
pub mod timeline;

pub use header::{classify, ProgressHeader};
pub use timeline::{parse_log, LongRequestLog, ParseStats};
