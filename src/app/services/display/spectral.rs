//! Spectral classification of host stars by effective temperature

use crate::constants::spectral_thresholds as bounds;
use serde::{Serialize, Serializer};
use std::fmt;

/// Morgan-Keenan spectral class with an approximate display colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpectralClass {
    O,
    B,
    A,
    F,
    G,
    K,
    M,
    /// Temperature missing or not a finite number
    Unknown,
}

impl SpectralClass {
    /// Classify a temperature in Kelvin
    pub fn from_temperature(kelvin: f64) -> Self {
        if !kelvin.is_finite() {
            return SpectralClass::Unknown;
        }

        if kelvin >= bounds::O {
            SpectralClass::O
        } else if kelvin >= bounds::B {
            SpectralClass::B
        } else if kelvin >= bounds::A {
            SpectralClass::A
        } else if kelvin >= bounds::F {
            SpectralClass::F
        } else if kelvin >= bounds::G {
            SpectralClass::G
        } else if kelvin >= bounds::K {
            SpectralClass::K
        } else {
            SpectralClass::M
        }
    }

    /// Classify a raw record value
    ///
    /// A present but blank cell reads as 0 K (class M); a missing cell or a
    /// non-numeric value is unknown.
    pub fn classify(value: Option<&str>) -> Self {
        let Some(raw) = value.map(str::trim) else {
            return SpectralClass::Unknown;
        };

        if raw.is_empty() {
            return Self::from_temperature(0.0);
        }

        raw.parse::<f64>()
            .map(Self::from_temperature)
            .unwrap_or(SpectralClass::Unknown)
    }

    /// Class letter, `?` when unknown
    pub fn letter(self) -> &'static str {
        match self {
            SpectralClass::O => "O",
            SpectralClass::B => "B",
            SpectralClass::A => "A",
            SpectralClass::F => "F",
            SpectralClass::G => "G",
            SpectralClass::K => "K",
            SpectralClass::M => "M",
            SpectralClass::Unknown => "?",
        }
    }

    /// Apparent colour description
    pub fn description(self) -> &'static str {
        match self {
            SpectralClass::O => "Blue / bluish-white",
            SpectralClass::B => "Blue-white",
            SpectralClass::A => "White",
            SpectralClass::F => "Yellow-white",
            SpectralClass::G => "Yellow / yellowish white",
            SpectralClass::K => "Light orange / yellow-orange",
            SpectralClass::M => "Red / reddish",
            SpectralClass::Unknown => "Unknown",
        }
    }

    /// Swatch colour as `#rrggbb`
    pub fn color_hex(self) -> &'static str {
        match self {
            SpectralClass::O => "#8ab4ff",
            SpectralClass::B => "#9fc2ff",
            SpectralClass::A => "#ffffff",
            SpectralClass::F => "#fff4c2",
            SpectralClass::G => "#ffd860",
            SpectralClass::K => "#ffb070",
            SpectralClass::M => "#ff6b6b",
            SpectralClass::Unknown => "#6b7280",
        }
    }

    /// Swatch colour as an RGB triple
    pub fn color_rgb(self) -> (u8, u8, u8) {
        let hex = &self.color_hex()[1..];
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).unwrap_or(0);
        (channel(0), channel(2), channel(4))
    }

    pub fn is_known(self) -> bool {
        self != SpectralClass::Unknown
    }
}

impl fmt::Display for SpectralClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.letter())
    }
}

impl Serialize for SpectralClass {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("SpectralClass", 3)?;
        state.serialize_field("class", self.letter())?;
        state.serialize_field("name", self.description())?;
        state.serialize_field("color", self.color_hex())?;
        state.end()
    }
}
