// crates/kinnex-core/src/export.rs
//
// Builds a samplesheet straight from the reference tables instead of a
// hand-exported spreadsheet. Read-only against the store.

use std::path::Path;

use csv::WriterBuilder;
use sqlx::FromRow;

use crate::db::DbPool;
use crate::error::Result;

pub const SHEET_COLUMNS: [&str; 6] = [
    "plate",
    "plate_location",
    "pool_id",
    "kinnex_primers",
    "kinnex_barcodes",
    "rna_id",
];

#[derive(Debug, Clone, FromRow)]
pub struct SheetRow {
    pub plate: Option<String>,
    pub plate_location: Option<String>,
    pub pool_id: Option<String>,
    pub kinnex_primers: Option<String>,
    pub kinnex_barcodes: Option<String>,
    pub rna_id: Option<String>,
}

impl SheetRow {
    /// Names of the fields that came back NULL, for the manual-review
    /// report.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.plate.is_none() {
            missing.push("plate");
        }
        if self.plate_location.is_none() {
            missing.push("plate_location");
        }
        if self.pool_id.is_none() {
            missing.push("pool_id");
        }
        if self.kinnex_primers.is_none() {
            missing.push("kinnex_primers");
        }
        if self.kinnex_barcodes.is_none() {
            missing.push("kinnex_barcodes");
        }
        if self.rna_id.is_none() {
            missing.push("rna_id");
        }
        missing
    }
}

/// Fetches samplesheet rows for an explicit list of RNA IDs.
pub async fn fetch_rows_for_rna_ids(pool: &DbPool, rna_ids: &[String]) -> Result<Vec<SheetRow>> {
    let rows = sqlx::query_as::<_, SheetRow>(
        "SELECT plate, plate_location, pool_id, kinnex_primers, \
                kinnex_barcode AS kinnex_barcodes, rna_id \
         FROM rna_library_kinx \
         WHERE rna_id = ANY($1) \
         ORDER BY rna_id",
    )
    .bind(rna_ids)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// Fetches samplesheet rows for every library tube sequenced on a run.
pub async fn fetch_rows_for_run(pool: &DbPool, run_id: &str) -> Result<Vec<SheetRow>> {
    let rows = sqlx::query_as::<_, SheetRow>(
        "SELECT rlk.plate, rlk.plate_location, rlk.pool_id, rlk.kinnex_primers, \
                rlk.kinnex_barcode AS kinnex_barcodes, \
                rlk.rna_library_tube_id AS rna_id \
         FROM rna_library_kinx rlk \
         JOIN (SELECT DISTINCT rna_library_tube_id FROM sequencing WHERE run_id = $1) t \
           ON t.rna_library_tube_id = rlk.rna_library_tube_id \
         ORDER BY rlk.rna_library_tube_id",
    )
    .bind(run_id)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// Writes the samplesheet CSV. Rows with NULL fields still go into the
/// file (they show up blank) but are logged for manual review. Returns
/// the number of rows written.
pub fn write_samplesheet_csv(path: &Path, rows: &[SheetRow]) -> Result<usize> {
    for row in rows {
        let missing = row.missing_fields();
        if !missing.is_empty() {
            tracing::warn!(
                rna_id = row.rna_id.as_deref().unwrap_or(""),
                missing = ?missing,
                "samplesheet row has missing values"
            );
        }
    }

    let mut writer = WriterBuilder::new().from_path(path)?;
    writer.write_record(SHEET_COLUMNS)?;
    for row in rows {
        writer.write_record([
            row.plate.as_deref().unwrap_or(""),
            row.plate_location.as_deref().unwrap_or(""),
            row.pool_id.as_deref().unwrap_or(""),
            row.kinnex_primers.as_deref().unwrap_or(""),
            row.kinnex_barcodes.as_deref().unwrap_or(""),
            row.rna_id.as_deref().unwrap_or(""),
        ])?;
    }
    writer.flush()?;
    Ok(rows.len())
}
