pub mod driver;
pub mod force;
pub mod simulator;

pub use driver::{LayoutDriver, LayoutHandle};
pub use force::{ForceModel, SpringParams};
pub use simulator::{ForceLayoutSimulator, LayoutSnapshot, NodePosition};
