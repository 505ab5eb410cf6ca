use std::path::Path;

use csv::{ReaderBuilder, WriterBuilder};

use crate::error::Result;
use crate::sheet::fill::GroupFill;
use crate::sheet::headers::normalize_label;
use crate::sheet::model::{CanonicalRow, LabRow};
use crate::sheet::plate_well;
use crate::sheet::schema::{ColumnIndices, OUTPUT_COLUMNS};

/// Converts a lab Kinnex RNA export into the canonical samplesheet.
/// Header validation happens before the output file is created, so a
/// malformed input never leaves a partial output behind. Returns the
/// number of rows written.
pub fn convert_file(input: &Path, output: &Path) -> Result<usize> {
    let rows = read_lab_csv(input)?;
    let canonical = normalize_rows(rows);
    write_canonical_csv(output, &canonical)?;
    tracing::info!(
        rows = canonical.len(),
        output = %output.display(),
        "wrote canonical samplesheet"
    );
    Ok(canonical.len())
}

/// Reads the lab CSV, normalizes its header labels, and extracts one
/// `LabRow` per data line, in file order.
pub fn read_lab_csv(path: &Path) -> Result<Vec<LabRow>> {
    let mut reader = ReaderBuilder::new().flexible(true).from_path(path)?;
    let headers: Vec<String> = reader.headers()?.iter().map(normalize_label).collect();
    let columns = ColumnIndices::bind(&headers)?;

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(columns.extract(&record));
    }
    Ok(rows)
}

/// Runs forward fill, row filtering, plate/well canonicalization and
/// schema projection over the rows of one file, preserving row order.
///
/// Filtering happens after the fill state is updated, so a row with no
/// sample still feeds its group values into the rows below it.
pub fn normalize_rows(rows: Vec<LabRow>) -> Vec<CanonicalRow> {
    let mut fill = GroupFill::new();
    let mut out = Vec::with_capacity(rows.len());

    for mut row in rows {
        fill.apply(&mut row);

        let Some(samples_in_pool) = row.samples_in_pool else {
            continue;
        };

        out.push(CanonicalRow {
            plate_well: plate_well::canonicalize(row.plate_well).unwrap_or_default(),
            sequencing_sample_id: row.sequencing_sample_id.unwrap_or_default(),
            library_type: row.library_type.unwrap_or_default(),
            kinnex_pool: row.kinnex_pool.unwrap_or_default(),
            kinnex_adapter_bc: row.kinnex_adapter_bc.unwrap_or_default(),
            samples_in_pool,
            isoseq_primer_bc: row.isoseq_primer_bc.unwrap_or_default(),
        });
    }
    out
}

pub fn write_canonical_csv(path: &Path, rows: &[CanonicalRow]) -> Result<()> {
    let mut writer = WriterBuilder::new().from_path(path)?;
    writer.write_record(OUTPUT_COLUMNS)?;
    for row in rows {
        writer.write_record(row.as_fields())?;
    }
    writer.flush()?;
    Ok(())
}
