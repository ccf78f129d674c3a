use std::path::PathBuf;

use tracing::info;

use nethealth_parser::reports::{
    CensusReport, CpmReport, ModeOfTreatmentReport, ProductivityReport,
};

use crate::combine::{combine, FacilityRecord, ReportData};
use crate::error::Result;

/// Paths to the four weekly NetHealth exports, in processing order.
#[derive(Debug, Clone)]
pub struct ReportPaths {
    pub productivity: PathBuf,
    pub cpm: PathBuf,
    pub census: PathBuf,
    pub mode_of_treatment: PathBuf,
}

/// Run the four extractors sequentially and combine their outputs into one
/// record per facility.
pub fn process_reports(paths: &ReportPaths) -> Result<Vec<FacilityRecord>> {
    let window = ProductivityReport::extract_week_window(&paths.productivity)?;
    match window.as_ref() {
        Some(window) => {
            info!(week = %window.week, date = %window.iso_date(), "Reporting window")
        }
        None => info!("Date range row missing; falling back to the default week"),
    }

    let productivity = ProductivityReport::extract(&paths.productivity)?;
    info!(facilities = productivity.len(), "Processed productivity report");

    let cpm = CpmReport::extract(&paths.cpm)?;
    info!(facilities = cpm.len(), "Processed CPM report");

    let census = CensusReport::extract(&paths.census)?;
    info!(facilities = census.len(), "Processed census report");

    let mode_of_treatment = ModeOfTreatmentReport::extract(&paths.mode_of_treatment)?;
    info!(
        facilities = mode_of_treatment.len(),
        "Processed mode of treatment report"
    );

    let data = ReportData {
        productivity,
        cpm,
        census,
        mode_of_treatment,
    };

    Ok(combine(window.as_ref(), &data))
}
