use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Inclusive date range applied to deliveries. A missing bound is unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ReportFilter {
    pub start: Option<Date>,
    pub end: Option<Date>,
}

impl ReportFilter {
    pub fn new(start: Option<Date>, end: Option<Date>) -> Self {
        Self { start, end }
    }

    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Build a filter from raw `YYYY-MM-DD` request parameters.
    ///
    /// Each bound is parsed on its own. A bound that is empty or fails to
    /// parse is treated as absent rather than rejected.
    pub fn from_params(start: Option<&str>, end: Option<&str>) -> Self {
        Self {
            start: start.and_then(|raw| parse_bound("start", raw)),
            end: end.and_then(|raw| parse_bound("end", raw)),
        }
    }

    pub fn contains(&self, date: Date) -> bool {
        self.start.is_none_or(|start| date >= start) && self.end.is_none_or(|end| date <= end)
    }

    pub fn is_unbounded(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }
}

fn parse_bound(which: &str, raw: &str) -> Option<Date> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    match Date::strptime("%Y-%m-%d", raw) {
        Ok(date) => Some(date),
        Err(e) => {
            tracing::warn!(
                bound = which,
                value = raw,
                error = %e,
                "unparsable filter date, bound ignored"
            );
            None
        }
    }
}
