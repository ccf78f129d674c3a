use std::path::Path;

use calamine::{Data, Range, Reader};

use crate::errors::ExtractError;
use crate::facility::normalize_facility_name;
use crate::model::{FacilityMetrics, WeekWindow};

use super::common::{label_at, open_report, parse_percent, round_to, sheet_range};

/// Productivity report: one sheet per facility. A `Site:` row names the
/// facility, `TOTALS` rows carry the efficiency percentage in the last
/// column. Sheets end with a grand-total row, so the last `TOTALS` value
/// seen wins.
pub struct ProductivityReport;

impl ProductivityReport {
    pub(crate) const NAME: &'static str = "PRODUCTIVITY";
    const LABEL_COL: u32 = 1;
    const VALUE_COL: u32 = 14;
    const DATE_RANGE_COL: u32 = 2;

    pub fn extract(path: &Path) -> Result<FacilityMetrics, ExtractError> {
        let mut workbook = open_report(Self::NAME, path)?;
        let mut metrics = FacilityMetrics::new();
        for sheet in workbook.sheet_names().to_vec() {
            let range = sheet_range(Self::NAME, &mut workbook, &sheet)?;
            if let Some((facility, value)) = Self::scan_sheet(&sheet, &range)? {
                metrics.insert(facility, value);
            }
        }
        Ok(metrics)
    }

    pub(crate) fn scan_sheet(
        sheet: &str,
        range: &Range<Data>,
    ) -> Result<Option<(String, f64)>, ExtractError> {
        let Some(end) = range.end() else {
            return Ok(None);
        };

        let mut current_facility: Option<String> = None;
        let mut last_totals: Option<f64> = None;

        for row in 0..=end.0 {
            let Some(label) = label_at(range, row, Self::LABEL_COL) else {
                continue;
            };

            if label.contains("Site:") {
                let name = label.replace("Site:", "");
                current_facility = Some(normalize_facility_name(&name));
            }

            if label.contains("TOTALS") && current_facility.is_some() {
                if let Some(cell) = range.get_value((row, Self::VALUE_COL)) {
                    if let Some(value) = parse_percent(Self::NAME, sheet, row, cell)? {
                        last_totals = Some(value);
                    }
                }
            }
        }

        Ok(current_facility
            .zip(last_totals)
            .map(|(facility, value)| (facility, round_to(value, 1))))
    }

    /// Reporting window from the first sheet's `Date Range:` row. Absent or
    /// unparsable cells are not an error; the combiner falls back to its
    /// default week.
    pub fn extract_week_window(path: &Path) -> Result<Option<WeekWindow>, ExtractError> {
        let mut workbook = open_report(Self::NAME, path)?;
        let names = workbook.sheet_names().to_vec();
        let Some(first) = names.first() else {
            return Ok(None);
        };
        let range = sheet_range(Self::NAME, &mut workbook, first)?;
        Ok(Self::scan_week_window(&range))
    }

    pub(crate) fn scan_week_window(range: &Range<Data>) -> Option<WeekWindow> {
        let end = range.end()?;
        for row in 0..=end.0 {
            let is_label = matches!(
                range.get_value((row, Self::LABEL_COL)),
                Some(Data::String(s)) if s == "Date Range:"
            );
            if !is_label {
                continue;
            }
            let raw = label_at(range, row, Self::DATE_RANGE_COL)?;
            return WeekWindow::from_date_range(&raw);
        }
        None
    }
}
