//! Core data model for Rainbow City: AI identifiers, frequency codes and
//! the relationship records the network view is built from.
//!
//! # Example
//! ```
//! use rainbow_core::{format_identifier, parse_identifier};
//!
//! let id = format_identifier("RC-AI", 1721, "53dfc98b").unwrap();
//! assert_eq!(id, "RC-AI-0001721-53dfc98b");
//! assert_eq!(parse_identifier(&id).unwrap().sequence_number.get(), 1721);
//! ```

pub mod codec;
pub mod config;
pub mod error;
pub mod model;
pub mod signature;

pub use codec::{format_identifier, parse_identifier, IdentifierCodec};
pub use config::{CodecConfig, LayoutConfig, LayoutModel, RainbowConfig};
pub use error::CoreError;
