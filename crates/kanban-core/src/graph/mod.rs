pub mod algorithms;
pub mod core;
pub mod edge;
pub mod traits;

pub use core::Graph;
pub use edge::{Edge, EdgeDirection};
pub use traits::GraphNode;
