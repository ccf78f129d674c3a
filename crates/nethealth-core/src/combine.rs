use std::collections::BTreeSet;

use serde::Serialize;
use tracing::warn;

use nethealth_parser::model::{CensusCounts, FacilityMetrics, WeekWindow};

use crate::eligibility::med_b_eligible;
use crate::regions::{classify, Region};

/// Week used when the productivity workbook carries no date-range row.
const FALLBACK_WEEK: &str = "1215";
const FALLBACK_DATE: &str = "2025-12-15";

/// One output row per facility per weekly run. `modeOfTreatment` is the
/// only field omitted (rather than zeroed) when its report lacks the
/// facility.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FacilityRecord {
    pub week: String,
    pub facility: String,
    pub region: Region,
    pub productivity: f64,
    pub cpm: f64,
    pub med_b_eligible: u32,
    pub med_b_caseload: u32,
    pub date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode_of_treatment: Option<f64>,
}

/// The four extractor outputs feeding one combined run.
#[derive(Debug, Default)]
pub struct ReportData {
    pub productivity: FacilityMetrics,
    pub cpm: FacilityMetrics,
    pub census: CensusCounts,
    pub mode_of_treatment: FacilityMetrics,
}

/// Union the facility keys across all four reports and build one record per
/// facility, alphabetically, defaulting missing metrics to zero. The
/// literal keys `Unknown` and the empty string are artifacts of upstream
/// matching and are dropped.
pub fn combine(window: Option<&WeekWindow>, data: &ReportData) -> Vec<FacilityRecord> {
    let (week, date) = match window {
        Some(window) => (window.week.clone(), window.iso_date()),
        None => (FALLBACK_WEEK.to_string(), FALLBACK_DATE.to_string()),
    };

    let mut facilities: BTreeSet<&String> = BTreeSet::new();
    facilities.extend(data.productivity.keys());
    facilities.extend(data.cpm.keys());
    facilities.extend(data.census.keys());
    facilities.extend(data.mode_of_treatment.keys());

    let mut records = Vec::with_capacity(facilities.len());
    for facility in facilities {
        if facility.is_empty() || facility.as_str() == "Unknown" {
            continue;
        }

        let region = classify(facility);
        if region == Region::Unknown {
            warn!(
                facility = %facility,
                "facility matches no region catalog entry; new naming variant or typo in the source report"
            );
        }

        records.push(FacilityRecord {
            week: week.clone(),
            facility: facility.clone(),
            region,
            productivity: data.productivity.get(facility).copied().unwrap_or(0.0),
            cpm: data.cpm.get(facility).copied().unwrap_or(0.0),
            med_b_eligible: med_b_eligible(facility),
            med_b_caseload: data.census.get(facility).copied().unwrap_or(0),
            date: date.clone(),
            mode_of_treatment: data.mode_of_treatment.get(facility).copied(),
        });
    }

    records
}
