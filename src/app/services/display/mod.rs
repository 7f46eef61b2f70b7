//! Presentational helpers layered on top of parsed records
//!
//! Parsed records only hold strings. This module turns them into display
//! values: numeric formatting with a fixed fractional precision, the
//! spectral class derived from the host star temperature, and the planet
//! detail card grouped by the fixed field schema.

pub mod fields;
pub mod numeric;
pub mod planet_card;
pub mod spectral;

// Re-export main types for easy access
pub use fields::{FIELD_GROUPS, FieldGroup, FieldSpec, GroupId};
pub use numeric::format_numeric;
pub use planet_card::{CardRow, CardSection, PlanetCard, empty_card_text};
pub use spectral::SpectralClass;
