pub mod numeric;
pub mod records;
pub mod sync;

pub use numeric::{classify_int, parse_read_count, parse_text, NumericValue};
pub use records::{read_qc_table, QcRecord, REQUIRED_COLUMNS};
pub use sync::{push_qc_records, SyncOutcome, SyncReport};
