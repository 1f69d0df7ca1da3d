//! Recovers human-readable text layout from position-tagged characters.

pub mod positioned;
pub mod program;
pub mod text;

pub use positioned::PositionedChar;
pub use text::{convert_to_text, COLUMN_SEPARATOR};
