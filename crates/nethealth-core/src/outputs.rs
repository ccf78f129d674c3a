use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::combine::FacilityRecord;
use crate::error::Result;

/// Write the combined records as a pretty-printed JSON array.
pub fn write_records(path: &Path, records: &[FacilityRecord]) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, records)?;
    writer.flush()?;
    Ok(())
}
