pub mod api;
pub mod config;
pub mod error;
pub mod http;
pub mod result;

pub use api::{Api, ApiClient};
pub use config::ApiConfig;
pub use error::SyncError;
pub use http::HttpClient;
pub use result::SyncResult;
