pub mod error;
pub mod graph;
pub mod layout;

pub use error::GraphError;
pub use graph::{build_graph, load_relationships, RelationshipGraph, Viewport};
pub use layout::{ForceLayoutSimulator, ForceModel, LayoutDriver, LayoutHandle, LayoutSnapshot};
