pub mod config;
pub mod error;
pub mod logging;
pub mod result;
pub mod traits;

pub use config::AppConfig;
pub use error::KanbanError;
pub use logging::{LogEntry, Loggable};
pub use result::KanbanResult;
pub use traits::Editable;
