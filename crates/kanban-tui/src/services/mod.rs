pub mod card_filter_service;
pub mod filter;
pub mod sort;

pub use card_filter_service::*;
pub use filter::*;
pub use sort::*;
