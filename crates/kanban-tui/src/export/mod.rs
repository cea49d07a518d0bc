pub mod exporter;
pub mod importer;
pub mod models;

pub use exporter::*;
pub use importer::*;
pub use models::*;
