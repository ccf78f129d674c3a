use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("{report} workbook error: {source}")]
    Workbook {
        report: &'static str,
        #[source]
        source: calamine::Error,
    },

    #[error("{report} sheet '{sheet}' row {row}: {message}")]
    DataCell {
        report: &'static str,
        sheet: String,
        row: u32,
        message: String,
    },
}
