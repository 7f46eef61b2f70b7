//! Fixed field schema of the planet detail card

use crate::constants::record_keys;
use crate::{Error, Result};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Precision used when a field does not specify one
pub const DEFAULT_PRECISION: usize = 2;

/// Identifier of a field group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupId {
    Transit,
    Planetary,
    Stellar,
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupId::Transit => write!(f, "transit"),
            GroupId::Planetary => write!(f, "planetary"),
            GroupId::Stellar => write!(f, "stellar"),
        }
    }
}

impl FromStr for GroupId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "transit" => Ok(GroupId::Transit),
            "planetary" => Ok(GroupId::Planetary),
            "stellar" => Ok(GroupId::Stellar),
            other => Err(Error::configuration(format!(
                "Unknown field group '{}': must be transit, planetary or stellar",
                other
            ))),
        }
    }
}

/// One displayed record field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldSpec {
    pub key: &'static str,
    pub label: &'static str,
    /// Maximum fractional digits; `None` for non-numeric fields
    pub precision: Option<usize>,
}

impl FieldSpec {
    const fn numeric(key: &'static str, label: &'static str, precision: usize) -> Self {
        Self {
            key,
            label,
            precision: Some(precision),
        }
    }

    /// Check if the value is derived rather than read from the record
    pub fn is_spectral_class(&self) -> bool {
        self.key == record_keys::SPECTRAL_CLASS
    }

    pub fn precision_or_default(&self) -> usize {
        self.precision.unwrap_or(DEFAULT_PRECISION)
    }
}

/// A named category of fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldGroup {
    pub id: GroupId,
    pub label: &'static str,
    pub fields: &'static [FieldSpec],
}

impl FieldGroup {
    /// Look up a group by id
    pub fn by_id(id: GroupId) -> &'static FieldGroup {
        FIELD_GROUPS
            .iter()
            .find(|group| group.id == id)
            .unwrap_or(&FIELD_GROUPS[0])
    }
}

const TRANSIT_FIELDS: &[FieldSpec] = &[
    FieldSpec::numeric("koi_period", "Orbital Period [days]", 3),
    FieldSpec::numeric("koi_time0bk", "Transit Epoch [BKJD]", 3),
    FieldSpec::numeric("koi_duration", "Transit Duration [hours]", 2),
    FieldSpec::numeric("koi_depth", "Transit Depth [ppm]", 1),
    FieldSpec::numeric("koi_impact", "Impact Parameter", 3),
    FieldSpec::numeric("koi_model_snr", "Transit Signal-to-Noise Ratio (SNR)", 1),
];

const PLANETARY_FIELDS: &[FieldSpec] = &[
    FieldSpec::numeric("koi_prad", "Planetary Radius [Earth radii]", 2),
    FieldSpec::numeric("koi_teq", "Equilibrium Temperature [K]", 0),
    FieldSpec::numeric("koi_insol", "Insolation Flux [Earth = 1]", 2),
];

const STELLAR_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        key: record_keys::SPECTRAL_CLASS,
        label: "Spectral Class (OBAFGKM)",
        precision: None,
    },
    FieldSpec::numeric(
        record_keys::STELLAR_TEMPERATURE,
        "Stellar Effective Temperature [K]",
        0,
    ),
    FieldSpec::numeric("koi_slogg", "Stellar Surface Gravity [log g]", 3),
    FieldSpec::numeric("koi_srad", "Stellar Radius [Solar radii]", 2),
    FieldSpec::numeric("koi_kepmag", "Kepler-band Magnitude (Kp)", 3),
];

/// Field groups in display order
pub const FIELD_GROUPS: &[FieldGroup] = &[
    FieldGroup {
        id: GroupId::Transit,
        label: "🔭 Transit & Orbital Properties",
        fields: TRANSIT_FIELDS,
    },
    FieldGroup {
        id: GroupId::Planetary,
        label: "🌍 Planetary Properties",
        fields: PLANETARY_FIELDS,
    },
    FieldGroup {
        id: GroupId::Stellar,
        label: "☀️ Host Star Properties",
        fields: STELLAR_FIELDS,
    },
];
