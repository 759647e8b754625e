pub mod settings;

pub use settings::{CodecConfig, LayoutConfig, LayoutModel, RainbowConfig};
