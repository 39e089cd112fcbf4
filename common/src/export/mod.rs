//! Export core modules shared by the CLI report writers.

#[cfg(feature = "excel")]
pub mod excel_core;
