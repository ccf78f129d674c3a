use std::collections::BTreeMap;

use chrono::NaiveDate;

/// Metric values keyed by canonical facility name. A `BTreeMap` keeps
/// downstream iteration alphabetical.
pub type FacilityMetrics = BTreeMap<String, f64>;

/// Per-facility patient counts from the census report.
pub type CensusCounts = BTreeMap<String, u32>;

/// Reporting window lifted from the productivity workbook's date-range cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekWindow {
    /// Start date rendered as `MMDD` with leading zeros stripped, the label
    /// the reporting tool keys weeks by (`01/05` becomes `105`).
    pub week: String,
    pub start: NaiveDate,
}

impl WeekWindow {
    /// Parse a `MM/DD/YYYY - MM/DD/YYYY` range cell. Only the start date
    /// matters; anything unparsable yields `None`.
    pub fn from_date_range(raw: &str) -> Option<Self> {
        let start_text = raw.split('-').next()?.trim();
        let start = NaiveDate::parse_from_str(start_text, "%m/%d/%Y").ok()?;
        let week = start
            .format("%m%d")
            .to_string()
            .trim_start_matches('0')
            .to_string();
        Some(Self { week, start })
    }

    pub fn iso_date(&self) -> String {
        self.start.format("%Y-%m-%d").to_string()
    }
}
