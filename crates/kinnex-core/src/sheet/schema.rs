use csv::StringRecord;

use crate::error::{PipelineError, Result};
use crate::sheet::model::LabRow;

// Column labels as they appear in the lab export, after header cleanup.
pub const LAB_PLATE_WELL: &str = "Sample Plate Well";
pub const LAB_SEQUENCING_SAMPLE_ID: &str =
    "Sequencing Sample ID (will put as sample name in smrtlink)";
pub const LAB_LIBRARY_TYPE: &str = "Library type/sequencing purpose";
pub const LAB_KINNEX_POOL: &str = "Kinnex \"pool\"";
pub const LAB_KINNEX_ADAPTER_BC: &str = "Kinnex adapter bc (BC01-BC04)";
pub const LAB_SAMPLES_IN_POOL: &str = "Samples In pool";
pub const LAB_ISOSEQ_PRIMER_BC: &str = "Isoseq primer barcodes (Bc1-12)";

pub const LAB_COLUMNS: [&str; 7] = [
    LAB_PLATE_WELL,
    LAB_SEQUENCING_SAMPLE_ID,
    LAB_LIBRARY_TYPE,
    LAB_KINNEX_POOL,
    LAB_KINNEX_ADAPTER_BC,
    LAB_SAMPLES_IN_POOL,
    LAB_ISOSEQ_PRIMER_BC,
];

/// Canonical output header, in the fixed order the downstream pipeline
/// expects.
pub const OUTPUT_COLUMNS: [&str; 7] = [
    "plate_well",
    "sequencing_sample_id",
    "library_type",
    "kinnex_pool",
    "kinnex_adapter_bc",
    "samples_in_pool",
    "isoseq_primer_bc",
];

/// Positions of the seven required lab columns within a normalized
/// header row.
#[derive(Debug, Clone, Copy)]
pub struct ColumnIndices {
    plate_well: usize,
    sequencing_sample_id: usize,
    library_type: usize,
    kinnex_pool: usize,
    kinnex_adapter_bc: usize,
    samples_in_pool: usize,
    isoseq_primer_bc: usize,
}

impl ColumnIndices {
    /// Binds the required labels to their positions. Fails with a
    /// validation error naming every missing column, before any row is
    /// processed.
    pub fn bind(headers: &[String]) -> Result<Self> {
        let find = |label: &str| headers.iter().position(|h| h == label);

        let missing: Vec<&str> = LAB_COLUMNS
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
        Ok(Self {
            plate_well: index(LAB_PLATE_WELL),
            sequencing_sample_id: index(LAB_SEQUENCING_SAMPLE_ID),
            library_type: index(LAB_LIBRARY_TYPE),
            kinnex_pool: index(LAB_KINNEX_POOL),
            kinnex_adapter_bc: index(LAB_KINNEX_ADAPTER_BC),
            samples_in_pool: index(LAB_SAMPLES_IN_POOL),
            isoseq_primer_bc: index(LAB_ISOSEQ_PRIMER_BC),
        })
    }

    pub fn extract(&self, record: &StringRecord) -> LabRow {
        let cell = |idx: usize| -> Option<String> {
            let value = record.get(idx)?.trim();
            if value.is_empty() {
                None
            } else {
                Some(value.to_string())
            }
        };
        LabRow {
            plate_well: cell(self.plate_well),
            sequencing_sample_id: cell(self.sequencing_sample_id),
            library_type: cell(self.library_type),
            kinnex_pool: cell(self.kinnex_pool),
            kinnex_adapter_bc: cell(self.kinnex_adapter_bc),
            samples_in_pool: cell(self.samples_in_pool),
            isoseq_primer_bc: cell(self.isoseq_primer_bc),
        }
    }
}
