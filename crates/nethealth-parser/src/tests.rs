use calamine::{Data, Range};

use crate::facility::normalize_facility_name;
use crate::model::WeekWindow;
use crate::reports::{CensusReport, CpmReport, ModeOfTreatmentReport, ProductivityReport};

fn s(value: &str) -> Data {
    Data::String(value.to_string())
}

/// Build a sheet range from sparse rows of `(column, value)` pairs at
/// absolute coordinates, the way calamine hands them back from a workbook.
fn sheet(rows: &[&[(u32, Data)]]) -> Range<Data> {
    let height = rows.len() as u32;
    let width = rows
        .iter()
        .flat_map(|cells| cells.iter().map(|(col, _)| col + 1))
        .max()
        .unwrap_or(1);
    let mut range = Range::new((0, 0), (height.saturating_sub(1), width - 1));
    for (row, cells) in rows.iter().enumerate() {
        for (col, value) in cells.iter() {
            range.set_value((row as u32, *col), value.clone());
        }
    }
    range
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn normalizes_cataloged_variants() {
    assert_eq!(
        normalize_facility_name("Gilroy Healthcare & Rehab Cent"),
        "Gilroy HC"
    );
    assert_eq!(
        normalize_facility_name("Grant Cuesta Nursing & Rehab H"),
        "Morgan Hill HC"
    );
    assert_eq!(
        normalize_facility_name("Los Altos Sub-Acute & Rehab Ce"),
        "Los Altos Post Acute"
    );
    assert_eq!(normalize_facility_name("Pacific Coast Manor"), "Pac Coast PA");
}

#[test]
fn normalization_is_case_insensitive_containment() {
    assert_eq!(
        normalize_facility_name("GRANT CUESTA NURSING & REHAB H - WEEKLY"),
        "Morgan Hill HC"
    );
    assert_eq!(
        normalize_facility_name("  palo alto sub acute  "),
        "Palo Alto Post Acute"
    );
}

#[test]
fn strips_routing_prefixes() {
    assert_eq!(
        normalize_facility_name("*PWBK Gilroy Healthcare & Rehab Cent"),
        "Gilroy HC"
    );
    assert_eq!(
        normalize_facility_name("PWB Eden Post Acute Care"),
        "Eden HC"
    );
    assert_eq!(normalize_facility_name("pwb Sunrise Villa"), "Sunrise Villa");
}

#[test]
fn unknown_names_pass_through_trimmed() {
    assert_eq!(normalize_facility_name("  Sunrise Villa  "), "Sunrise Villa");
}

#[test]
fn week_window_strips_leading_zero_month() {
    let window = WeekWindow::from_date_range("12/14/2025 - 12/20/2025").expect("window");
    assert_eq!(window.week, "1214");
    assert_eq!(window.iso_date(), "2025-12-14");

    let window = WeekWindow::from_date_range("01/05/2026 - 01/11/2026").expect("window");
    assert_eq!(window.week, "105");
    assert_eq!(window.iso_date(), "2026-01-05");
}

#[test]
fn week_window_rejects_garbage() {
    assert!(WeekWindow::from_date_range("week of the 14th").is_none());
    assert!(WeekWindow::from_date_range("").is_none());
}

#[test]
fn productivity_last_totals_row_wins() {
    let range = sheet(&[
        &[(1, s("Site: PWB Gilroy Healthcare & Rehab Cent"))],
        &[(0, s("Therapist")), (1, s("Jones, A"))],
        &[(1, s("WEEK TOTALS")), (14, Data::Float(0.853))],
        &[(0, s("Therapist")), (1, s("Lee, B"))],
        &[(1, s("TOTALS")), (14, s("91.2%"))],
    ]);

    let (facility, value) = ProductivityReport::scan_sheet("Sheet1", &range)
        .expect("scan")
        .expect("facility totals");
    assert_eq!(facility, "Gilroy HC");
    assert_close(value, 91.2);
}

#[test]
fn productivity_converts_fractions_to_percentages() {
    let range = sheet(&[
        &[(1, s("Site: Pacific Coast Manor"))],
        &[(1, s("TOTALS")), (14, Data::Float(0.853))],
    ]);

    let (_, value) = ProductivityReport::scan_sheet("Sheet1", &range)
        .expect("scan")
        .expect("totals");
    assert_close(value, 85.3);
}

#[test]
fn productivity_requires_site_row_before_totals() {
    let range = sheet(&[
        &[(1, s("TOTALS")), (14, Data::Float(0.9))],
        &[(1, s("Site: Pacific Coast Manor"))],
    ]);

    assert!(ProductivityReport::scan_sheet("Sheet1", &range)
        .expect("scan")
        .is_none());
}

#[test]
fn productivity_rejects_unparsable_totals_cell() {
    let range = sheet(&[
        &[(1, s("Site: Pacific Coast Manor"))],
        &[(1, s("TOTALS")), (14, s("n/a"))],
    ]);

    assert!(ProductivityReport::scan_sheet("Sheet1", &range).is_err());
}

#[test]
fn scans_week_window_from_date_range_row() {
    let range = sheet(&[
        &[(1, s("Weekly Productivity"))],
        &[(1, s("Date Range:")), (2, s("12/14/2025 - 12/20/2025"))],
    ]);

    let window = ProductivityReport::scan_week_window(&range).expect("window");
    assert_eq!(window.week, "1214");
}

#[test]
fn week_window_absent_without_date_range_row() {
    let range = sheet(&[&[(1, s("Weekly Productivity"))]]);
    assert!(ProductivityReport::scan_week_window(&range).is_none());
}

#[test]
fn cpm_first_total_expenses_row_wins() {
    let range = sheet(&[
        &[(0, s("Site of Service")), (4, s("West Shore Post Acute"))],
        &[(0, s("Salaries")), (13, s("$1,200.00"))],
        &[(0, s("TOTAL EXPENSES")), (13, s("$2.41"))],
        &[(0, s("TOTAL EXPENSES")), (13, s("$9.99"))],
    ]);

    let (facility, value) = CpmReport::scan_sheet("Sheet1", &range)
        .expect("scan")
        .expect("expenses");
    assert_eq!(facility, "West Shore PA");
    assert_close(value, 2.41);
}

#[test]
fn cpm_parenthesized_currency_is_absolute() {
    let range = sheet(&[
        &[(0, s("Site of Service")), (4, s("Capital Post Acute"))],
        &[(0, s("TOTAL EXPENSES")), (13, s("$(12.34)"))],
    ]);

    let (facility, value) = CpmReport::scan_sheet("Sheet1", &range)
        .expect("scan")
        .expect("expenses");
    assert_eq!(facility, "Capital PA");
    assert_close(value, 12.34);
}

#[test]
fn cpm_keeps_scanning_past_valueless_total_row() {
    let range = sheet(&[
        &[(0, s("Site of Service")), (4, s("Capital Post Acute"))],
        &[(0, s("TOTAL EXPENSES"))],
        &[(0, s("TOTAL EXPENSES")), (13, Data::Float(-3.5))],
    ]);

    let (_, value) = CpmReport::scan_sheet("Sheet1", &range)
        .expect("scan")
        .expect("expenses");
    assert_close(value, 3.5);
}

#[test]
fn cpm_without_site_banner_yields_nothing() {
    let range = sheet(&[&[(0, s("TOTAL EXPENSES")), (13, s("$2.41"))]]);
    assert!(CpmReport::scan_sheet("Sheet1", &range)
        .expect("scan")
        .is_none());
}

#[test]
fn census_counts_part_b_rows() {
    let range = sheet(&[
        &[(0, s("Site(s) of Service:")), (1, s("Belmont Hills Health & Rehab"))],
        &[(0, s("Patient")), (1, s("Payer"))],
        &[(0, s("Doe, J")), (1, s("Medicare Part B"))],
        &[(0, s("Roe, M")), (1, s("Medicare Part A"))],
        &[(0, s("Poe, E")), (1, s("Medicare Part B"))],
        &[(0, s("Loe, K")), (1, s("Medicare Part B"))],
    ]);

    let (facility, count) = CensusReport::scan_sheet(&range).expect("census");
    assert_eq!(facility, "Belmont HC");
    assert_eq!(count, 3);
}

#[test]
fn census_skips_sheet_without_site_row() {
    let range = sheet(&[&[(0, s("Patient")), (1, s("Medicare Part B"))]]);
    assert!(CensusReport::scan_sheet(&range).is_none());
}

#[test]
fn census_requires_exact_labels() {
    let range = sheet(&[
        &[(0, s("Site(s) of Service: ")), (1, s("Belmont HC"))],
        &[(0, s("Doe, J")), (1, s("Medicare Part B (pending)"))],
    ]);

    assert!(CensusReport::scan_sheet(&range).is_none());
}

#[test]
fn mode_reads_rows_below_header() {
    let range = sheet(&[
        &[(0, s("Mode of Treatment Summary"))],
        &[(0, s("Facility")), (30, s("C/G % TOTAL"))],
        &[(0, s("Pacific Coast Manor")), (30, Data::Float(0.25))],
        &[(0, s("The Win Post Acute")), (30, Data::Float(0.031))],
    ]);

    let metrics = ModeOfTreatmentReport::scan_sheet("Sheet1", &range).expect("scan");
    assert_close(*metrics.get("Pac Coast PA").expect("pac coast"), 25.0);
    assert_close(*metrics.get("The Win Post Acute").expect("the win"), 3.1);
}

#[test]
fn mode_omits_facilities_missing_the_percentage_cell() {
    let range = sheet(&[
        &[(0, s("Facility"))],
        &[(0, s("Pacific Coast Manor")), (30, Data::Float(0.25))],
        &[(0, s("The Win Post Acute"))],
    ]);

    let metrics = ModeOfTreatmentReport::scan_sheet("Sheet1", &range).expect("scan");
    assert_eq!(metrics.len(), 1);
    assert!(!metrics.contains_key("The Win Post Acute"));
}

#[test]
fn mode_without_header_row_is_empty() {
    let range = sheet(&[&[(0, s("Pacific Coast Manor")), (30, Data::Float(0.25))]]);
    let metrics = ModeOfTreatmentReport::scan_sheet("Sheet1", &range).expect("scan");
    assert!(metrics.is_empty());
}
