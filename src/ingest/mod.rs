//! Ingestion: CSV header validation, per-field normalization and loading.

pub mod duration;
pub mod loader;
pub mod schema;
pub mod timestamp;

pub use loader::{LoadReport, load_dataset, load_from_reader};
