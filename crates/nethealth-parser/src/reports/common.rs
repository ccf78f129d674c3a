use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use calamine::{open_workbook_auto, Data, Range, Reader, Sheets};

use crate::errors::ExtractError;

pub(crate) type Workbook = Sheets<BufReader<File>>;

pub(crate) fn open_report(report: &'static str, path: &Path) -> Result<Workbook, ExtractError> {
    open_workbook_auto(path).map_err(|source| ExtractError::Workbook { report, source })
}

pub(crate) fn sheet_range(
    report: &'static str,
    workbook: &mut Workbook,
    sheet: &str,
) -> Result<Range<Data>, ExtractError> {
    workbook
        .worksheet_range(sheet)
        .map_err(|source| ExtractError::Workbook { report, source })
}

/// Render a cell as trimmed text. Empty cells and error cells are absence,
/// not empty strings; numeric cells are stringified the way the reports
/// occasionally store names and labels.
pub(crate) fn cell_str(cell: &Data) -> Option<String> {
    match cell {
        Data::String(s) => {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        Data::Float(f) => Some(f.to_string()),
        Data::Int(i) => Some(i.to_string()),
        _ => None,
    }
}

pub(crate) fn label_at(range: &Range<Data>, row: u32, col: u32) -> Option<String> {
    range.get_value((row, col)).and_then(cell_str)
}

/// Percentage cell: string values already carry the percent scale (`"85.3%"`),
/// numeric values are fractions needing the x100 conversion.
pub(crate) fn parse_percent(
    report: &'static str,
    sheet: &str,
    row: u32,
    cell: &Data,
) -> Result<Option<f64>, ExtractError> {
    match cell {
        Data::String(s) => {
            let trimmed = s.trim().trim_end_matches('%').trim();
            if trimmed.is_empty() {
                return Ok(None);
            }
            trimmed
                .parse::<f64>()
                .map(Some)
                .map_err(|err| data_cell(report, sheet, row, format!("bad percentage '{s}': {err}")))
        }
        Data::Float(f) => Ok(Some(f * 100.0)),
        Data::Int(i) => Ok(Some(*i as f64 * 100.0)),
        _ => Ok(None),
    }
}

/// Currency cell. Accounting exports render negatives in parentheses; the
/// metric is always taken as an absolute amount.
pub(crate) fn parse_currency(
    report: &'static str,
    sheet: &str,
    row: u32,
    cell: &Data,
) -> Result<Option<f64>, ExtractError> {
    match cell {
        Data::String(s) => {
            let cleaned: String = s
                .chars()
                .filter(|c| !matches!(c, '$' | ',' | '(' | ')'))
                .collect();
            let cleaned = cleaned.trim();
            if cleaned.is_empty() {
                return Ok(None);
            }
            cleaned
                .parse::<f64>()
                .map(|value| Some(value.abs()))
                .map_err(|err| data_cell(report, sheet, row, format!("bad currency '{s}': {err}")))
        }
        Data::Float(f) => Ok(Some(f.abs())),
        Data::Int(i) => Ok(Some((*i as f64).abs())),
        _ => Ok(None),
    }
}

/// Fraction cell converted to a percentage regardless of storage type.
pub(crate) fn parse_fraction(
    report: &'static str,
    sheet: &str,
    row: u32,
    cell: &Data,
) -> Result<Option<f64>, ExtractError> {
    match cell {
        Data::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return Ok(None);
            }
            trimmed
                .parse::<f64>()
                .map(|value| Some(value * 100.0))
                .map_err(|err| data_cell(report, sheet, row, format!("bad fraction '{s}': {err}")))
        }
        Data::Float(f) => Ok(Some(f * 100.0)),
        Data::Int(i) => Ok(Some(*i as f64 * 100.0)),
        _ => Ok(None),
    }
}

pub(crate) fn round_to(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    (value * factor).round() / factor
}

fn data_cell(report: &'static str, sheet: &str, row: u32, message: String) -> ExtractError {
    ExtractError::DataCell {
        report,
        sheet: sheet.to_string(),
        row,
        message,
    }
}
