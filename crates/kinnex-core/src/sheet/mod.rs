pub mod convert;
pub mod fill;
pub mod headers;
pub mod model;
pub mod plate_well;
pub mod schema;

pub use convert::{convert_file, normalize_rows, read_lab_csv, write_canonical_csv};
pub use fill::GroupFill;
pub use model::{CanonicalRow, LabRow};
pub use plate_well::PlateWell;
pub use schema::ColumnIndices;
