pub mod traits;
pub mod store;
pub mod watch;
pub mod conflict;
pub mod serialization;
pub mod migration;

pub use traits::*;
pub use store::*;
pub use watch::*;
pub use conflict::*;
pub use serialization::*;
pub use migration::*;
