/// One data line of the lab export, after header binding. `None` means
/// the cell was absent or blank. Group fields may be filled in later by
/// the forward-fill pass; `samples_in_pool` and `isoseq_primer_bc` are
/// leaf fields and always keep their own per-row value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabRow {
    pub plate_well: Option<String>,
    pub sequencing_sample_id: Option<String>,
    pub library_type: Option<String>,
    pub kinnex_pool: Option<String>,
    pub kinnex_adapter_bc: Option<String>,
    pub samples_in_pool: Option<String>,
    pub isoseq_primer_bc: Option<String>,
}

/// One row of the canonical seven-column samplesheet consumed by the
/// sequencing pipeline. All fields trimmed; immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalRow {
    pub plate_well: String,
    pub sequencing_sample_id: String,
    pub library_type: String,
    pub kinnex_pool: String,
    pub kinnex_adapter_bc: String,
    pub samples_in_pool: String,
    pub isoseq_primer_bc: String,
}

impl CanonicalRow {
    pub fn as_fields(&self) -> [&str; 7] {
        [
            &self.plate_well,
            &self.sequencing_sample_id,
            &self.library_type,
            &self.kinnex_pool,
            &self.kinnex_adapter_bc,
            &self.samples_in_pool,
            &self.isoseq_primer_bc,
        ]
    }
}
