//! Static fixtures compiled into the binary.
//!
//! Persona records arrive as loosely typed JSON and are validated into
//! [`PersonaRecord`]s on load; qualitative details and creative briefs are
//! deserialized as-is.

use persona_core::model::{CreativeBrief, PersonaDetails, PersonaId, PersonaRecord, ensure_unique_ids};
use persona_core::PersonaError;
use serde::Deserialize;

const PERSONAS_JSON: &str = include_str!("../../data/personas.json");
const PERSONA_DETAILS_JSON: &str = include_str!("../../data/persona_details.json");
const CREATIVE_BRIEFS_JSON: &str = include_str!("../../data/creative_briefs.json");

#[derive(Debug)]
pub enum FixtureError {
    /// A fixture file is not valid JSON for its shape
    Json { file: &'static str, message: String },
    /// A persona record failed validation
    Invalid { persona: PersonaId, source: PersonaError },
}

impl std::fmt::Display for FixtureError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FixtureError::Json { file, message } => write!(f, "Invalid fixture {}: {}", file, message),
            FixtureError::Invalid { persona, source } => {
                write!(f, "Invalid persona '{}': {}", persona, source)
            }
        }
    }
}

impl std::error::Error for FixtureError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FixtureError::Invalid { source, .. } => Some(source),
            FixtureError::Json { .. } => None,
        }
    }
}

/// Persona record as written in the fixture file
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PersonaData {
    id: String,
    label: String,
    current_share: f64,
    ltv: f64,
    cac: f64,
    payback_days: u32,
    profit_index: f64,
}

impl PersonaData {
    fn into_record(self) -> Result<PersonaRecord, FixtureError> {
        let id = PersonaId::new(self.id);
        PersonaRecord::builder(id.clone(), self.label)
            .current_share(self.current_share)
            .ltv(self.ltv)
            .cac(self.cac)
            .payback_days(self.payback_days)
            .profit_index(self.profit_index)
            .build()
            .map_err(|source| FixtureError::Invalid { persona: id, source })
    }
}

/// Parse and validate persona records from JSON text
pub fn parse_personas(json: &str) -> Result<Vec<PersonaRecord>, FixtureError> {
    let raw: Vec<PersonaData> = serde_json::from_str(json).map_err(|e| FixtureError::Json {
        file: "personas.json",
        message: e.to_string(),
    })?;

    let personas = raw
        .into_iter()
        .map(PersonaData::into_record)
        .collect::<Result<Vec<_>, _>>()?;

    ensure_unique_ids(&personas).map_err(|source| {
        let persona = match &source {
            PersonaError::DuplicateId(id) => id.clone(),
            _ => PersonaId::new(""),
        };
        FixtureError::Invalid { persona, source }
    })?;

    Ok(personas)
}

/// The bundled persona records
pub fn load_personas() -> Result<Vec<PersonaRecord>, FixtureError> {
    let personas = parse_personas(PERSONAS_JSON)?;
    tracing::debug!(count = personas.len(), "Loaded persona fixtures");
    Ok(personas)
}

pub fn load_persona_details() -> Result<Vec<PersonaDetails>, FixtureError> {
    serde_json::from_str(PERSONA_DETAILS_JSON).map_err(|e| FixtureError::Json {
        file: "persona_details.json",
        message: e.to_string(),
    })
}

pub fn load_creative_briefs() -> Result<Vec<CreativeBrief>, FixtureError> {
    serde_json::from_str(CREATIVE_BRIEFS_JSON).map_err(|e| FixtureError::Json {
        file: "creative_briefs.json",
        message: e.to_string(),
    })
}
