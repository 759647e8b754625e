pub mod codes;
pub mod frequency;
pub mod identifier;
pub mod relationship;
pub mod values;

pub use codes::{AiTypeCode, PersonalityCode, ValueCode};
pub use frequency::{FrequencyCode, FrequencyRequest, FrequencySequence};
pub use identifier::{GeneratedIdentifier, Identifier, SequenceNumber};
pub use relationship::{IntensityFactors, RelationshipRecord, RelationshipStatus};
pub use values::ValueVector;
