pub mod cadence_import;
pub mod common;
