use crate::errors::{AppError, AppResult};
use crate::utils::colors::{CYAN, GREEN, RED, RESET, YELLOW};
use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

/// Compliance ranking for one day. The derived order `OK < INFO < WARN <
/// ERROR` doubles as the report filter scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Severity {
    Ok,
    Info,
    Warn,
    Error,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Ok => "OK",
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Severity::Ok => GREEN,
            Severity::Info => CYAN,
            Severity::Warn => YELLOW,
            Severity::Error => RED,
        }
    }

    pub fn paint(&self) -> String {
        format!("{}{}{}", self.color(), self.as_str(), RESET)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Threshold for status reports: show days at or above a severity,
/// everything, or nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeverityFilter {
    Min(Severity),
    None,
}

impl SeverityFilter {
    pub fn parse(s: &str) -> AppResult<Self> {
        match s.to_lowercase().as_str() {
            "all" | "ok" => Ok(SeverityFilter::Min(Severity::Ok)),
            "info" => Ok(SeverityFilter::Min(Severity::Info)),
            "warn" | "warning" => Ok(SeverityFilter::Min(Severity::Warn)),
            "error" => Ok(SeverityFilter::Min(Severity::Error)),
            "none" => Ok(SeverityFilter::None),
            _ => Err(AppError::UnknownSeverityFilter(s.to_string())),
        }
    }

    pub fn admits(&self, sev: Severity) -> bool {
        match self {
            SeverityFilter::Min(min) => sev >= *min,
            SeverityFilter::None => false,
        }
    }
}

/// One day's classification. Derived, never persisted. `reason` explains a
/// non-OK class; `info` is display context independent of the class.
#[derive(Debug, Clone)]
pub struct DayStatus {
    pub date: NaiveDate,
    pub severity: Severity,
    pub reason: Option<String>,
    pub info: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_is_ordered() {
        assert!(Severity::Ok < Severity::Info);
        assert!(Severity::Info < Severity::Warn);
        assert!(Severity::Warn < Severity::Error);
    }

    #[test]
    fn filter_parses_names_and_edges() {
        assert!(SeverityFilter::parse("all").unwrap().admits(Severity::Ok));
        assert!(
            SeverityFilter::parse("WARN")
                .unwrap()
                .admits(Severity::Error)
        );
        assert!(!SeverityFilter::parse("warn").unwrap().admits(Severity::Info));
        assert!(!SeverityFilter::parse("none").unwrap().admits(Severity::Error));
        assert!(matches!(
            SeverityFilter::parse("loud"),
            Err(AppError::UnknownSeverityFilter(_))
        ));
    }
}
