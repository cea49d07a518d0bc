pub mod schema;
pub mod models;
pub mod repositories;
pub mod connection;

pub use connection::establish_connection;
