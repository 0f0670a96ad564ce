//! Persona records and their qualitative attachments
//!
//! A [`PersonaRecord`] is the validated value object fed to the allocator and
//! the profit impact estimator. Records are built with [`PersonaRecord::builder`]
//! so that bad fixture data is rejected up front instead of flowing into the
//! calculations as NaN or negative values.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::PersonaId;
use crate::error::PersonaError;

/// A named customer segment with its value metrics
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonaRecord {
    id: PersonaId,
    label: String,
    current_share: f64,
    ltv: f64,
    cac: f64,
    payback_days: u32,
    profit_index: f64,
}

impl PersonaRecord {
    /// Start building a persona record
    pub fn builder(id: impl Into<PersonaId>, label: impl Into<String>) -> PersonaRecordBuilder {
        PersonaRecordBuilder {
            id: id.into(),
            label: label.into(),
            current_share: 0.0,
            ltv: 0.0,
            cac: 0.0,
            payback_days: 1,
            profit_index: 1.0,
        }
    }

    pub fn id(&self) -> &PersonaId {
        &self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Share of current acquisition, 0-100 scale
    pub fn current_share(&self) -> f64 {
        self.current_share
    }

    pub fn ltv(&self) -> f64 {
        self.ltv
    }

    pub fn cac(&self) -> f64 {
        self.cac
    }

    pub fn payback_days(&self) -> u32 {
        self.payback_days
    }

    pub fn profit_index(&self) -> f64 {
        self.profit_index
    }

    /// Contribution of one acquired customer (`ltv - cac`)
    pub fn profit_per_customer(&self) -> f64 {
        self.ltv - self.cac
    }
}

/// Builder for [`PersonaRecord`]; validation happens in [`PersonaRecordBuilder::build`]
#[derive(Debug, Clone)]
pub struct PersonaRecordBuilder {
    id: PersonaId,
    label: String,
    current_share: f64,
    ltv: f64,
    cac: f64,
    payback_days: u32,
    profit_index: f64,
}

impl PersonaRecordBuilder {
    pub fn current_share(mut self, share: f64) -> Self {
        self.current_share = share;
        self
    }

    pub fn ltv(mut self, ltv: f64) -> Self {
        self.ltv = ltv;
        self
    }

    pub fn cac(mut self, cac: f64) -> Self {
        self.cac = cac;
        self
    }

    pub fn payback_days(mut self, days: u32) -> Self {
        self.payback_days = days;
        self
    }

    pub fn profit_index(mut self, index: f64) -> Self {
        self.profit_index = index;
        self
    }

    pub fn build(self) -> Result<PersonaRecord, PersonaError> {
        if self.id.as_str().trim().is_empty() {
            return Err(PersonaError::EmptyId);
        }

        for (field, value) in [
            ("current_share", self.current_share),
            ("ltv", self.ltv),
            ("cac", self.cac),
            ("profit_index", self.profit_index),
        ] {
            if !value.is_finite() {
                return Err(PersonaError::NotFinite { field });
            }
        }

        if self.ltv < 0.0 {
            return Err(PersonaError::Negative {
                field: "ltv",
                value: self.ltv,
            });
        }
        if self.cac < 0.0 {
            return Err(PersonaError::Negative {
                field: "cac",
                value: self.cac,
            });
        }
        if self.payback_days == 0 {
            return Err(PersonaError::NonPositivePayback);
        }
        if !(0.0..=100.0).contains(&self.current_share) {
            return Err(PersonaError::ShareOutOfRange {
                value: self.current_share,
            });
        }

        Ok(PersonaRecord {
            id: self.id,
            label: self.label,
            current_share: self.current_share,
            ltv: self.ltv,
            cac: self.cac,
            payback_days: self.payback_days,
            profit_index: self.profit_index,
        })
    }
}

/// Check that every persona id in a run is unique
pub fn ensure_unique_ids(personas: &[PersonaRecord]) -> Result<(), PersonaError> {
    let mut seen = FxHashSet::default();
    for persona in personas {
        if !seen.insert(persona.id.as_str()) {
            return Err(PersonaError::DuplicateId(persona.id.clone()));
        }
    }
    Ok(())
}

/// Static qualitative detail attached to a persona
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonaDetails {
    pub id: PersonaId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qualitative: Option<Qualitative>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub acquisition_trend: Vec<AcquisitionPoint>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Qualitative {
    #[serde(default)]
    pub likes: Vec<String>,
    #[serde(default)]
    pub dislikes: Vec<String>,
    #[serde(default)]
    pub competitive_brands: Vec<String>,
    #[serde(default)]
    pub first_purchase: Vec<String>,
    #[serde(default)]
    pub messaging: String,
    #[serde(default)]
    pub influencers: Vec<String>,
    #[serde(default)]
    pub email_tone: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub word_cloud: Vec<WordWeight>,
}

/// Word cloud entry ("emotional trigger")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordWeight {
    pub text: String,
    pub value: u32,
}

/// One point of a persona's acquisition trend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AcquisitionPoint {
    pub date: String,
    pub count: u32,
    pub cac: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> PersonaRecordBuilder {
        PersonaRecord::builder("high-value", "High Value")
            .current_share(30.0)
            .ltv(500.0)
            .cac(50.0)
            .payback_days(28)
            .profit_index(1.3)
    }

    #[test]
    fn test_valid_record() {
        let p = base().build().unwrap();
        assert_eq!(p.id().as_str(), "high-value");
        assert_eq!(p.label(), "High Value");
        assert_eq!(p.payback_days(), 28);
        assert!((p.profit_per_customer() - 450.0).abs() < 1e-9);
    }

    #[test]
    fn test_rejects_empty_id() {
        let err = PersonaRecord::builder("  ", "Nobody").build().unwrap_err();
        assert_eq!(err, PersonaError::EmptyId);
    }

    #[test]
    fn test_rejects_negative_ltv() {
        let err = base().ltv(-1.0).build().unwrap_err();
        assert_eq!(
            err,
            PersonaError::Negative {
                field: "ltv",
                value: -1.0
            }
        );
    }

    #[test]
    fn test_rejects_negative_cac() {
        let err = base().cac(-5.0).build().unwrap_err();
        assert!(matches!(err, PersonaError::Negative { field: "cac", .. }));
    }

    #[test]
    fn test_rejects_zero_payback() {
        let err = base().payback_days(0).build().unwrap_err();
        assert_eq!(err, PersonaError::NonPositivePayback);
    }

    #[test]
    fn test_rejects_non_finite() {
        let err = base().profit_index(f64::NAN).build().unwrap_err();
        assert_eq!(
            err,
            PersonaError::NotFinite {
                field: "profit_index"
            }
        );

        let err = base().ltv(f64::INFINITY).build().unwrap_err();
        assert_eq!(err, PersonaError::NotFinite { field: "ltv" });
    }

    #[test]
    fn test_rejects_share_out_of_range() {
        let err = base().current_share(120.0).build().unwrap_err();
        assert!(matches!(err, PersonaError::ShareOutOfRange { .. }));
    }

    #[test]
    fn test_negative_profit_index_allowed() {
        // No bounds on profit index beyond finiteness
        let p = base().profit_index(-0.5).build().unwrap();
        assert!((p.profit_index() + 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let a = base().build().unwrap();
        let b = PersonaRecord::builder("budget", "Budget").build().unwrap();
        assert!(ensure_unique_ids(&[a.clone(), b]).is_ok());

        let err = ensure_unique_ids(&[a.clone(), a]).unwrap_err();
        assert_eq!(err, PersonaError::DuplicateId(PersonaId::from("high-value")));
    }

    #[test]
    fn test_details_id_only() {
        let details: PersonaDetails = serde_json::from_str(r#"{ "id": "budget" }"#).unwrap();
        assert_eq!(
            details,
            PersonaDetails {
                id: PersonaId::from("budget"),
                ..PersonaDetails::default()
            }
        );
        assert_eq!(PersonaDetails::default().id.as_str(), "");
    }

    #[test]
    fn test_details_deserialize_camel_case() {
        let json = r#"{
            "id": "budget",
            "qualitative": {
                "likes": ["deals"],
                "dislikes": [],
                "competitiveBrands": ["Brand A"],
                "firstPurchase": ["Tee"],
                "messaging": "Value first",
                "influencers": [],
                "emailTone": "Friendly",
                "wordCloud": [{ "text": "value", "value": 40 }]
            },
            "acquisitionTrend": [{ "date": "2025-01", "count": 120, "cac": 38.5 }]
        }"#;

        let details: PersonaDetails = serde_json::from_str(json).unwrap();
        let q = details.qualitative.unwrap();
        assert_eq!(q.competitive_brands, vec!["Brand A"]);
        assert_eq!(q.word_cloud[0].value, 40);
        assert_eq!(details.acquisition_trend[0].count, 120);
    }
}
