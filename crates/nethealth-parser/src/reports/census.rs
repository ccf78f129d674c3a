use std::path::Path;

use calamine::{Data, Range, Reader};

use crate::errors::ExtractError;
use crate::facility::normalize_facility_name;
use crate::model::CensusCounts;

use super::common::{cell_str, open_report, sheet_range};

/// Census report: one sheet per facility, one row per patient. The metric
/// is the count of rows billed under Medicare Part B.
pub struct CensusReport;

impl CensusReport {
    pub(crate) const NAME: &'static str = "CENSUS";
    const SITE_LABEL: &'static str = "Site(s) of Service:";
    const PAYER_LABEL: &'static str = "Medicare Part B";
    const LABEL_COL: u32 = 0;
    const FACILITY_COL: u32 = 1;
    const PAYER_COL: u32 = 1;

    pub fn extract(path: &Path) -> Result<CensusCounts, ExtractError> {
        let mut workbook = open_report(Self::NAME, path)?;
        let mut counts = CensusCounts::new();
        for sheet in workbook.sheet_names().to_vec() {
            let range = sheet_range(Self::NAME, &mut workbook, &sheet)?;
            if let Some((facility, count)) = Self::scan_sheet(&range) {
                counts.insert(facility, count);
            }
        }
        Ok(counts)
    }

    /// Sheets without a site banner (or with a blank name cell) are skipped.
    pub(crate) fn scan_sheet(range: &Range<Data>) -> Option<(String, u32)> {
        let end = range.end()?;

        let mut facility: Option<String> = None;
        let mut site_row_seen = false;
        let mut count = 0u32;

        for row in 0..=end.0 {
            if !site_row_seen {
                let is_site_row = matches!(
                    range.get_value((row, Self::LABEL_COL)),
                    Some(Data::String(s)) if s == Self::SITE_LABEL
                );
                if is_site_row {
                    site_row_seen = true;
                    facility = range
                        .get_value((row, Self::FACILITY_COL))
                        .and_then(cell_str)
                        .map(|name| normalize_facility_name(&name));
                }
            }

            let is_payer_row = matches!(
                range.get_value((row, Self::PAYER_COL)),
                Some(Data::String(s)) if s == Self::PAYER_LABEL
            );
            if is_payer_row {
                count += 1;
            }
        }

        facility.map(|facility| (facility, count))
    }
}
