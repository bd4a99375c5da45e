use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use super::model::{AggregatedRow, COL_REGION, COL_RESTAURANTS};

/// Default file name offered by the download button.
pub const DEFAULT_EXPORT_NAME: &str = "filtered_data.csv";

/// Serialize the bar table: header row, comma-delimited, no index column.
pub fn write_csv<W: Write>(rows: &[AggregatedRow], out: W) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    for row in rows {
        writer.serialize(row).context("writing CSV row")?;
    }
    // An empty table still gets its header.
    if rows.is_empty() {
        writer
            .write_record([COL_REGION, COL_RESTAURANTS])
            .context("writing CSV header")?;
    }
    writer.flush().context("flushing CSV")?;
    Ok(())
}

pub fn save_csv(rows: &[AggregatedRow], path: &Path) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("creating {}", path.display()))?;
    write_csv(rows, file).with_context(|| format!("exporting to {}", path.display()))?;
    log::info!("Exported {} region(s) to {}", rows.len(), path.display());
    Ok(())
}
