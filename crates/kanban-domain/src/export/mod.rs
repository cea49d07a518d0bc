//! Board import/export functionality.
//!
//! Provides serialization and deserialization of board data for backup,
//! migration, and sharing purposes.

pub mod exporter;
pub mod importer;
pub mod models;

pub use exporter::BoardExporter;
pub use importer::{BoardImporter, ImportedEntities};
pub use models::{AllBoardsExport, BoardExport};
