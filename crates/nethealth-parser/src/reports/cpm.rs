use std::path::Path;

use calamine::{Data, Range, Reader};

use crate::errors::ExtractError;
use crate::facility::normalize_facility_name;
use crate::model::FacilityMetrics;

use super::common::{label_at, open_report, parse_currency, round_to, sheet_range};

/// CPM report: one sheet per facility, expense rows grouped under a
/// `Site of Service` banner. The `TOTAL EXPENSES` row carries the expense
/// per paid minute in the last column; the first one found per sheet wins.
pub struct CpmReport;

impl CpmReport {
    pub(crate) const NAME: &'static str = "CPM";
    const LABEL_COL: u32 = 0;
    const FACILITY_COL: u32 = 4;
    const VALUE_COL: u32 = 13;

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

        for row in 0..=end.0 {
            let Some(label) = label_at(range, row, Self::LABEL_COL) else {
                continue;
            };

            if label.contains("Site of Service") {
                // The banner occasionally omits the name cell; keep the
                // previous facility in that case.
                if let Some(name) = label_at(range, row, Self::FACILITY_COL) {
                    current_facility = Some(normalize_facility_name(&name));
                }
            }

            if label.contains("TOTAL EXPENSES") {
                if let Some(facility) = current_facility.as_ref() {
                    if let Some(cell) = range.get_value((row, Self::VALUE_COL)) {
                        if let Some(value) = parse_currency(Self::NAME, sheet, row, cell)? {
                            return Ok(Some((facility.clone(), round_to(value, 2))));
                        }
                    }
                }
            }
        }

        Ok(None)
    }
}
