pub mod constants;
pub mod encoding;
pub mod logger;
pub mod time;

pub use self::encoding::{decode_line, open_log_reader, read_raw_line};
pub use self::logger::Logger;
pub use self::time::{epoch_to_local, format_date, format_seconds, parse_date};
