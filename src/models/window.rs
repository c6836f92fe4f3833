use crate::error::ConfigError;
use crate::utils::format_date;
use chrono::NaiveDateTime;

/// Half-open `[start, end)` filter on request start times.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseWindow {
    start: NaiveDateTime,
    end: NaiveDateTime,
}

impl Default for ParseWindow {
    fn default() -> Self {
        Self {
            start: NaiveDateTime::MIN,
            end: NaiveDateTime::MAX,
        }
    }
}

impl ParseWindow {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Result<Self, ConfigError> {
        if start >= end {
            return Err(ConfigError::EmptyWindow {
                start: format_date(&start),
                end: format_date(&end),
            });
        }
        Ok(Self { start, end })
    }

    /// Build a window from optional bounds, open-ended where a bound is missing.
    pub fn from_bounds(
        start: Option<NaiveDateTime>,
        end: Option<NaiveDateTime>,
    ) -> Result<Self, ConfigError> {
        let default = Self::default();
        Self::new(start.unwrap_or(default.start), end.unwrap_or(default.end))
    }

    pub fn contains(&self, value: &NaiveDateTime) -> bool {
        self.start <= *value && *value < self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::parse_date;

    #[test]
    fn test_window_is_half_open() {
        let start = parse_date("2015-03-02 10:00:00").unwrap();
        let end = parse_date("2015-03-02 11:00:00").unwrap();
        let window = ParseWindow::new(start, end).unwrap();

        assert!(window.contains(&start));
        assert!(window.contains(&parse_date("2015-03-02 10:59:59").unwrap()));
        assert!(!window.contains(&end));
        assert!(!window.contains(&parse_date("2015-03-02 09:59:59").unwrap()));
    }

    #[test]
    fn test_default_window_accepts_everything() {
        let window = ParseWindow::default();
        assert!(window.contains(&parse_date("1970-01-01 00:00:00").unwrap()));
        assert!(window.contains(&parse_date("2999-12-31 23:59:59").unwrap()));
    }

    #[test]
    fn test_empty_window_is_rejected() {
        let date = parse_date("2015-03-02 10:00:00").unwrap();
        assert!(matches!(
            ParseWindow::new(date, date),
            Err(ConfigError::EmptyWindow { .. })
        ));
    }

    #[test]
    fn test_from_bounds_keeps_open_ends() {
        let end = parse_date("2015-03-02 11:00:00").unwrap();
        let window = ParseWindow::from_bounds(None, Some(end)).unwrap();
        assert_eq!(window.start, NaiveDateTime::MIN);
        assert_eq!(window.end, end);
    }
}
