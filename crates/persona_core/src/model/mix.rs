use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

use super::PersonaId;
use crate::error::MixError;

/// Largest percentage a single persona can hold
pub const MAX_SHARE: u8 = 100;

/// User-adjustable target acquisition mix: persona id -> whole percentage.
///
/// Serialises as a plain JSON object (`{"high-value": 32, ...}`). The sum is
/// not required to be 100; callers warn via [`TargetMix::is_balanced`].
/// Deserializing rejects any share above 100.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TargetMix(BTreeMap<PersonaId, u8>);

impl TargetMix {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Share for a persona, if one has been set
    pub fn get(&self, id: &str) -> Option<u8> {
        self.0.get(id).copied()
    }

    /// Share for a persona, treating unset as 0
    pub fn share_or_zero(&self, id: &str) -> u8 {
        self.get(id).unwrap_or(0)
    }

    /// Set a persona's share, clamped to 0-100
    pub fn set(&mut self, id: impl Into<PersonaId>, share: u8) {
        self.0.insert(id.into(), share.min(MAX_SHARE));
    }

    pub fn contains(&self, id: &str) -> bool {
        self.0.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sum of all target shares
    pub fn total(&self) -> u32 {
        self.0.values().map(|&v| u32::from(v)).sum()
    }

    /// Whether the shares add up to exactly 100
    pub fn is_balanced(&self) -> bool {
        self.total() == 100
    }

    pub fn iter(&self) -> impl Iterator<Item = (&PersonaId, u8)> {
        self.0.iter().map(|(id, &v)| (id, v))
    }
}

impl TryFrom<BTreeMap<PersonaId, u8>> for TargetMix {
    type Error = MixError;

    fn try_from(shares: BTreeMap<PersonaId, u8>) -> Result<Self, Self::Error> {
        if let Some((id, &value)) = shares.iter().find(|(_, v)| **v > MAX_SHARE) {
            return Err(MixError::ShareOutOfRange {
                id: id.clone(),
                value,
            });
        }
        Ok(Self(shares))
    }
}

impl<'de> Deserialize<'de> for TargetMix {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let shares = BTreeMap::<PersonaId, u8>::deserialize(deserializer)?;
        Self::try_from(shares).map_err(serde::de::Error::custom)
    }
}

impl FromIterator<(PersonaId, u8)> for TargetMix {
    fn from_iter<I: IntoIterator<Item = (PersonaId, u8)>>(iter: I) -> Self {
        let mut mix = TargetMix::new();
        for (id, share) in iter {
            mix.set(id, share);
        }
        mix
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_clamps_to_hundred() {
        let mut mix = TargetMix::new();
        mix.set("a", 140);
        assert_eq!(mix.get("a"), Some(100));
    }

    #[test]
    fn test_total_and_balance() {
        let mut mix = TargetMix::new();
        mix.set("a", 40);
        mix.set("b", 55);
        assert_eq!(mix.total(), 95);
        assert!(!mix.is_balanced());

        mix.set("b", 60);
        assert!(mix.is_balanced());
    }

    #[test]
    fn test_unset_share_is_zero() {
        let mix = TargetMix::new();
        assert_eq!(mix.get("missing"), None);
        assert_eq!(mix.share_or_zero("missing"), 0);
    }

    #[test]
    fn test_json_shape() {
        let mix: TargetMix = [(PersonaId::from("b"), 60), (PersonaId::from("a"), 40)]
            .into_iter()
            .collect();
        let json = serde_json::to_string(&mix).unwrap();
        assert_eq!(json, r#"{"a":40,"b":60}"#);

        let back: TargetMix = serde_json::from_str(&json).unwrap();
        assert_eq!(back, mix);
    }

    #[test]
    fn test_deserialize_rejects_share_over_hundred() {
        let mix: TargetMix = serde_json::from_str(r#"{"a":100,"b":0}"#).unwrap();
        assert_eq!(mix.total(), 100);

        let err = serde_json::from_str::<TargetMix>(r#"{"a":40,"b":250}"#).unwrap_err();
        assert!(err.to_string().contains("target share for b"));
        assert!(serde_json::from_str::<TargetMix>(r#"{"a":101}"#).is_err());
    }
}
