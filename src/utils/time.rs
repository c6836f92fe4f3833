//! 날짜/시간 변환 유틸리티

use crate::error::{ConfigError, ParseError};
use crate::utils::constants::DATE_FORMAT;
use chrono::{DateTime, Local, NaiveDateTime};

/// Parse a `--start`/`--end` boundary in `YYYY-MM-DD HH:MM:SS` form.
pub fn parse_date(value: &str) -> Result<NaiveDateTime, ConfigError> {
    NaiveDateTime::parse_from_str(value.trim(), DATE_FORMAT).map_err(|_| ConfigError::InvalidDate {
        value: value.to_string(),
    })
}

/// Convert fractional Unix epoch seconds into local calendar time.
pub fn epoch_to_local(seconds: f64) -> Result<NaiveDateTime, ParseError> {
    if !seconds.is_finite() || seconds < 0.0 || seconds >= i64::MAX as f64 {
        return Err(ParseError::TimestampOutOfRange(seconds.to_string()));
    }

    let mut secs = seconds.trunc() as i64;
    let mut nanos = ((seconds - seconds.trunc()) * 1e9).round() as u32;
    if nanos >= 1_000_000_000 {
        secs += 1;
        nanos = 0;
    }

    DateTime::from_timestamp(secs, nanos)
        .map(|utc| utc.with_timezone(&Local).naive_local())
        .ok_or_else(|| ParseError::TimestampOutOfRange(seconds.to_string()))
}

pub fn format_date(value: &NaiveDateTime) -> String {
    value.format(DATE_FORMAT).to_string()
}

/// Render seconds as `%.12g` would, keeping a trailing `.0` on integral
/// values (`12.0`, `1234567.12346`, `1e+16`).
pub fn format_seconds(value: f64) -> String {
    if !value.is_finite() {
        return format!("{value}");
    }
    if value == 0.0 {
        return "0.0".to_string();
    }

    // 12 significant digits; the exponent is taken after rounding
    let sci = format!("{value:.11e}");
    let (mantissa, exp) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let exp: i32 = exp.parse().unwrap_or(0);

    if !(-4..12).contains(&exp) {
        let sign = if exp < 0 { '-' } else { '+' };
        return format!("{}e{sign}{:02}", trim_fraction(mantissa), exp.abs());
    }

    let decimals = (11 - exp) as usize;
    let fixed = format!("{value:.decimals$}");
    let trimmed = trim_fraction(&fixed);
    if trimmed.contains('.') {
        trimmed.to_string()
    } else {
        format!("{trimmed}.0")
    }
}

fn trim_fraction(text: &str) -> &str {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text
    }
}
