use std::path::Path;

use csv::ReaderBuilder;

use crate::error::{PipelineError, Result};
use crate::qc::numeric::{parse_read_count, parse_text};

pub const REQUIRED_COLUMNS: [&str; 4] = ["rna_tube_id", "rna_tube_id_2", "read_count", "run_id"];

/// One QC read-count record, keyed by `rna_tube_id`. A record whose key
/// is missing is carried through to the synchronizer, which skips it
/// without touching the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QcRecord {
    pub rna_tube_id: Option<String>,
    pub rna_tube_id_2: Option<String>,
    pub read_count: Option<i64>,
    pub run_id: Option<String>,
}

/// Reads the tab-separated read-count table. Every required column must
/// be present; validation fails before any record is built and before
/// any store access.
pub fn read_qc_table(path: &Path) -> Result<Vec<QcRecord>> {
    let mut reader = ReaderBuilder::new()
        .delimiter(b'\t')
        .flexible(true)
        .from_path(path)?;

    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    let find = |label: &str| headers.iter().position(|h| h == label);

    let missing: Vec<&str> = REQUIRED_COLUMNS
        .iter()
        .copied()
        .filter(|label| find(label).is_none())
        .collect();
    if !missing.is_empty() {
        return Err(PipelineError::Validation(format!(
            "missing required columns: {missing:?}"
        )));
    }

    let index = |label: &str| find(label).unwrap_or_default();
    let tube_idx = index("rna_tube_id");
    let tube2_idx = index("rna_tube_id_2");
    let count_idx = index("read_count");
    let run_idx = index("run_id");

    let mut records = Vec::new();
    for record in reader.records() {
        let record = record?;
        records.push(QcRecord {
            rna_tube_id: parse_text(record.get(tube_idx)),
            rna_tube_id_2: parse_text(record.get(tube2_idx)),
            read_count: parse_read_count(record.get(count_idx)),
            run_id: parse_text(record.get(run_idx)),
        });
    }
    Ok(records)
}
