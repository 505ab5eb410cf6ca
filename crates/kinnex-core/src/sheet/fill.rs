use crate::sheet::model::LabRow;

/// Carries the most recent non-missing value of each grouping column
/// across a sequential pass over the rows of one file. The lab export
/// only writes a group value on the first row of a block; every row
/// below inherits it until the next block starts.
///
/// Row order is significant: `apply` must be called once per row, in
/// file order, against the same `GroupFill`.
#[derive(Debug, Default)]
pub struct GroupFill {
    plate_well: Option<String>,
    sequencing_sample_id: Option<String>,
    library_type: Option<String>,
    kinnex_pool: Option<String>,
    kinnex_adapter_bc: Option<String>,
}

impl GroupFill {
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the carried state from the row's present values and
    /// substitutes carried values for the row's missing ones. Leaf
    /// fields (`samples_in_pool`, `isoseq_primer_bc`) are never touched.
    pub fn apply(&mut self, row: &mut LabRow) {
        fill_slot(&mut self.plate_well, &mut row.plate_well);
        fill_slot(&mut self.sequencing_sample_id, &mut row.sequencing_sample_id);
        fill_slot(&mut self.library_type, &mut row.library_type);
        fill_slot(&mut self.kinnex_pool, &mut row.kinnex_pool);
        fill_slot(&mut self.kinnex_adapter_bc, &mut row.kinnex_adapter_bc);
    }
}

fn fill_slot(slot: &mut Option<String>, value: &mut Option<String>) {
    match value {
        Some(present) => *slot = Some(present.clone()),
        None => *value = slot.clone(),
    }
}
