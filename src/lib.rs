pub mod config;
pub mod core;
pub mod detection;
pub mod error;

pub use crate::config::{EngineConfig, FamilyNamePosition};
pub use crate::core::converter::{
    convert, normalize_name, CharacterBreakdown, ConversionResult, NameConverter, SegmentRole,
};
pub use crate::core::romanizer::romanize;
pub use crate::core::unicode::is_complete_hangul;
pub use crate::detection::{detect_language, detect_script, Language, Script};
pub use crate::error::{ConfigError, ConversionError, InvalidInput};
