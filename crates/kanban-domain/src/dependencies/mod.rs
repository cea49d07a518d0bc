pub mod card_edge;
pub mod card_graph;
pub mod dependency_graph;

pub use card_edge::CardEdgeType;
pub use card_graph::{CardDependencyGraph, CardGraphExt};
pub use dependency_graph::DependencyGraph;
