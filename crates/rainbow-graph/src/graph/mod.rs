pub mod builder;
pub mod model;

pub use builder::{build_graph, load_relationships};
pub use model::{GraphEdge, GraphNode, NodeCategory, RelationshipGraph, Viewport};
