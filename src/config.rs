use crate::models::ParseWindow;
use crate::utils::constants::{DEFAULT_LIMIT, DEFAULT_PRECISION};
use clap::ValueEnum;

/// Which report to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Subject {
    /// Slowest requests with all their snapshots
    #[default]
    Requests,
    /// Most frequent snapshot fingerprints
    Snapshots,
}

/// Resolved analyzer settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalyzerOptions {
    pub limit: usize,
    pub precision: usize,
    pub window: ParseWindow,
}

impl Default for AnalyzerOptions {
    fn default() -> Self {
        AnalyzerOptions {
            limit: DEFAULT_LIMIT,
            precision: DEFAULT_PRECISION,
            window: ParseWindow::default(),
        }
    }
}
