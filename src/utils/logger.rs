use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use std::sync::Once;
use std::sync::OnceLock;

// 전역 로거 인스턴스를 저장할 정적 변수
static LOGGER: OnceLock<Mutex<Option<File>>> = OnceLock::new();
static VERBOSE: AtomicBool = AtomicBool::new(false);
static INIT: Once = Once::new();

/// Diagnostics sink. stdout belongs to the report, so messages go to stderr
/// (only when verbose) and to the optional log file.
pub struct Logger;

impl Logger {
    pub fn init(log_path: Option<&str>, verbose: bool) {
        INIT.call_once(|| {
            VERBOSE.store(verbose, Ordering::Relaxed);

            let Some(log_path) = log_path else {
                LOGGER.get_or_init(|| Mutex::new(None));
                return;
            };
            let log_path = Path::new(log_path);

            // 디렉토리가 없으면 생성
            let log_dir = log_path.parent().unwrap_or_else(|| Path::new("."));
            if !log_dir.as_os_str().is_empty() && !log_dir.exists() {
                if let Err(e) = fs::create_dir_all(log_dir) {
                    eprintln!("cannot create log directory {}: {e}", log_dir.display());
                    LOGGER.get_or_init(|| Mutex::new(None));
                    return;
                }
            }

            // 로그 파일 열기
            let file = OpenOptions::new().create(true).append(true).open(log_path);

            match file {
                Ok(file) => {
                    LOGGER.get_or_init(|| Mutex::new(Some(file)));
                }
                Err(e) => {
                    eprintln!("cannot open log file {}: {e}", log_path.display());
                    LOGGER.get_or_init(|| Mutex::new(None));
                }
            }
        });
    }

    pub fn is_verbose() -> bool {
        VERBOSE.load(Ordering::Relaxed)
    }

    pub fn log(message: &str) {
        if Self::is_verbose() {
            eprintln!("{message}");
        }
        Self::write_file(message, "");
    }

    pub fn log_error(message: &str) {
        // 에러는 verbose 여부와 관계없이 항상 출력
        eprintln!("{message}");
        Self::write_file(message, "ERROR: ");
    }

    fn write_file(message: &str, prefix: &str) {
        if let Some(logger) = LOGGER.get() {
            if let Ok(mut file_guard) = logger.lock() {
                if let Some(file) = file_guard.as_mut() {
                    if let Err(e) = writeln!(file, "{prefix}{message}") {
                        eprintln!("failed to write log file: {e}");
                    }
                }
            }
        }
    }

    pub fn flush() -> std::io::Result<()> {
        if let Some(logger) = LOGGER.get() {
            if let Ok(mut file_guard) = logger.lock() {
                if let Some(file) = file_guard.as_mut() {
                    file.flush()?;
                }
            }
        }
        Ok(())
    }
}

// 매크로 정의
#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {{
        let message = format!($($arg)*);
        $crate::utils::Logger::log(&message);
    }};
}

#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {{
        let message = format!($($arg)*);
        $crate::utils::Logger::log_error(&message);
    }};
}
