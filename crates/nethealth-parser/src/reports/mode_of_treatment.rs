use std::path::Path;

use calamine::{Data, Range, Reader};

use crate::errors::ExtractError;
use crate::facility::normalize_facility_name;
use crate::model::FacilityMetrics;

use super::common::{label_at, open_report, parse_fraction, round_to, sheet_range};

/// Mode of treatment report: a single flat sheet, one row per facility
/// below a header row, with the concurrent/group fraction in the final
/// C/G % column.
pub struct ModeOfTreatmentReport;

impl ModeOfTreatmentReport {
    pub(crate) const NAME: &'static str = "MODE_OF_TREATMENT";
    const HEADER_LABEL: &'static str = "Facility";
    const FACILITY_COL: u32 = 0;
    const VALUE_COL: u32 = 30;

    pub fn extract(path: &Path) -> Result<FacilityMetrics, ExtractError> {
        let mut workbook = open_report(Self::NAME, path)?;
        let names = workbook.sheet_names().to_vec();
        let Some(first) = names.first() else {
            return Ok(FacilityMetrics::new());
        };
        let range = sheet_range(Self::NAME, &mut workbook, first)?;
        Self::scan_sheet(first, &range)
    }

    pub(crate) fn scan_sheet(
        sheet: &str,
        range: &Range<Data>,
    ) -> Result<FacilityMetrics, ExtractError> {
        let mut metrics = FacilityMetrics::new();
        let Some(end) = range.end() else {
            return Ok(metrics);
        };

        let Some(header_row) = (0..=end.0).find(|&row| {
            label_at(range, row, Self::FACILITY_COL)
                .is_some_and(|label| label.contains(Self::HEADER_LABEL))
        }) else {
            return Ok(metrics);
        };

        for row in header_row + 1..=end.0 {
            let Some(name) = label_at(range, row, Self::FACILITY_COL) else {
                continue;
            };
            let facility = normalize_facility_name(&name);

            // Rows missing the percentage cell contribute nothing; the
            // combiner omits the field for those facilities.
            if let Some(cell) = range.get_value((row, Self::VALUE_COL)) {
                if let Some(value) = parse_fraction(Self::NAME, sheet, row, cell)? {
                    metrics.insert(facility, round_to(value, 2));
                }
            }
        }

        Ok(metrics)
    }
}
