//! Planet detail card built from a single record

use super::fields::{FIELD_GROUPS, FieldSpec, GroupId};
use super::numeric::format_numeric;
use super::spectral::SpectralClass;
use crate::app::models::TabularRecord;
use crate::constants::{PLACEHOLDER, UNKNOWN_DISPOSITION, UNNAMED_PLANET, messages, record_keys};
use serde::Serialize;
use std::fmt;

/// One labelled value on the card
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardRow {
    pub key: &'static str,
    pub label: &'static str,
    pub value: String,
    /// Colour swatch shown next to the derived spectral class
    #[serde(skip_serializing_if = "Option::is_none")]
    pub swatch: Option<SpectralClass>,
}

/// Rows of one field group
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardSection {
    pub id: GroupId,
    pub label: &'static str,
    pub rows: Vec<CardRow>,
}

/// Display model of the planet detail card
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanetCard {
    pub disposition: String,
    /// Disposition score, only when the record carries one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<String>,
    pub koi_id: String,
    pub kepler_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kepid: Option<String>,
    pub sections: Vec<CardSection>,
}

impl PlanetCard {
    /// Build the card for a record
    ///
    /// Returns `None` for an empty record; callers show the
    /// "no planet data" message instead.
    pub fn from_record(record: &TabularRecord) -> Option<Self> {
        if record.is_empty() {
            return None;
        }

        let koi_id = record
            .non_empty(record_keys::KEPOI_NAME)
            .or_else(|| record.non_empty(record_keys::KEPID))
            .unwrap_or(PLACEHOLDER)
            .to_string();

        let sections = FIELD_GROUPS
            .iter()
            .map(|group| CardSection {
                id: group.id,
                label: group.label,
                rows: group.fields.iter().map(|field| row_for(field, record)).collect(),
            })
            .collect();

        Some(Self {
            disposition: record
                .non_empty(record_keys::DISPOSITION)
                .unwrap_or(UNKNOWN_DISPOSITION)
                .to_string(),
            score: record
                .non_empty(record_keys::SCORE)
                .map(|score| format_numeric(Some(score), 2)),
            koi_id,
            kepler_name: record
                .non_empty(record_keys::KEPLER_NAME)
                .unwrap_or(UNNAMED_PLANET)
                .to_string(),
            kepid: record.non_empty(record_keys::KEPID).map(str::to_string),
            sections,
        })
    }

    pub fn section(&self, id: GroupId) -> Option<&CardSection> {
        self.sections.iter().find(|section| section.id == id)
    }

    /// Display value of a field key, searching every section
    pub fn value_of(&self, key: &str) -> Option<&str> {
        self.sections
            .iter()
            .flat_map(|section| section.rows.iter())
            .find(|row| row.key == key)
            .map(|row| row.value.as_str())
    }

    /// Keep only the given groups, in display order
    pub fn retain_groups(&mut self, groups: &[GroupId]) {
        self.sections.retain(|section| groups.contains(&section.id));
    }
}

fn row_for(field: &FieldSpec, record: &TabularRecord) -> CardRow {
    if field.is_spectral_class() {
        let class = SpectralClass::classify(record.get(record_keys::STELLAR_TEMPERATURE));
        return CardRow {
            key: field.key,
            label: field.label,
            value: class.letter().to_string(),
            swatch: Some(class),
        };
    }

    CardRow {
        key: field.key,
        label: field.label,
        value: format_numeric(record.get(field.key), field.precision_or_default()),
        swatch: None,
    }
}

impl fmt::Display for PlanetCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.score {
            Some(score) => writeln!(
                f,
                "[{}]  Disposition score: {}",
                self.disposition, score
            )?,
            None => writeln!(f, "[{}]", self.disposition)?,
        }
        writeln!(f, "Kepler ID {}", self.koi_id)?;
        writeln!(f, "{}", self.kepler_name)?;
        if let Some(kepid) = &self.kepid {
            writeln!(f, "Catalog KepID: {}", kepid)?;
        }

        for section in &self.sections {
            writeln!(f)?;
            writeln!(f, "{}", section.label)?;
            for row in &section.rows {
                writeln!(f, "  {:<38} {}", row.label, row.value)?;
            }
        }

        Ok(())
    }
}

/// Text shown when no record is available
pub fn empty_card_text() -> String {
    format!("{}\n{}", messages::NO_PLANET_HEADING, messages::NO_PLANET_BODY)
}
