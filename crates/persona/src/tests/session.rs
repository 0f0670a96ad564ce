//! Target mix session against in-memory and file storage

use persona_core::MixError;
use persona_core::model::{PersonaId, TargetMix};

use super::bundled;
use crate::mix_state::{MixOrigin, MixSession, SessionError};
use crate::platform::{MemoryStorage, Storage};

#[test]
fn test_bundled_suggestion() {
    let (_, suggested) = bundled();
    assert_eq!(suggested.get("high-value"), Some(42));
    assert_eq!(suggested.get("mid-value"), Some(18));
    assert_eq!(suggested.get("low-value"), Some(5));
    assert_eq!(suggested.get("premium"), Some(30));
    assert_eq!(suggested.get("budget"), Some(5));
    assert_eq!(suggested.total(), 100);
}

#[test]
fn test_empty_storage_seeds_and_persists() {
    let (personas, suggested) = bundled();
    let storage = MemoryStorage::new();

    let session = MixSession::load(&storage, &personas, suggested.clone()).unwrap();
    assert_eq!(session.origin(), MixOrigin::Seeded);
    assert_eq!(session.target(), suggested.shares());
    assert_eq!(storage.load_target_mix().unwrap().as_ref(), Some(suggested.shares()));
}

#[test]
fn test_stored_mix_is_used() {
    let (personas, suggested) = bundled();
    let storage = MemoryStorage::new();
    let mut stored = TargetMix::new();
    stored.set("high-value", 60);
    stored.set("budget", 40);
    storage.save_target_mix(&stored).unwrap();

    let session = MixSession::load(&storage, &personas, suggested).unwrap();
    assert_eq!(session.origin(), MixOrigin::Stored);
    assert_eq!(session.target().get("high-value"), Some(60));
    // Personas missing from the stored mix read as zero
    assert_eq!(session.target().share_or_zero("premium"), 0);
    assert_eq!(session.total(), 100);
}

#[test]
fn test_corrupt_mix_recovers_without_overwriting() {
    let (personas, suggested) = bundled();
    let storage = MemoryStorage::with_raw_target_mix("{not json");

    let session = MixSession::load(&storage, &personas, suggested.clone()).unwrap();
    assert_eq!(session.origin(), MixOrigin::Recovered);
    assert_eq!(session.target(), suggested.shares());
    assert_eq!(storage.raw_target_mix().as_deref(), Some("{not json"));
}

#[test]
fn test_out_of_range_stored_share_recovers() {
    let (personas, suggested) = bundled();
    let storage = MemoryStorage::with_raw_target_mix(r#"{"high-value":250}"#);

    let session = MixSession::load(&storage, &personas, suggested.clone()).unwrap();
    assert_eq!(session.origin(), MixOrigin::Recovered);
    assert_eq!(session.target(), suggested.shares());
    assert_eq!(session.total(), 100);
    assert_eq!(
        storage.raw_target_mix().as_deref(),
        Some(r#"{"high-value":250}"#)
    );
}

#[test]
fn test_blank_stored_mix_seeds() {
    let (personas, suggested) = bundled();
    let storage = MemoryStorage::with_raw_target_mix("");

    let session = MixSession::load(&storage, &personas, suggested.clone()).unwrap();
    assert_eq!(session.origin(), MixOrigin::Seeded);
    assert_eq!(storage.load_target_mix().unwrap().as_ref(), Some(suggested.shares()));
}

#[test]
fn test_update_persists() {
    let (personas, suggested) = bundled();
    let storage = MemoryStorage::new();
    let mut session = MixSession::load(&storage, &personas, suggested).unwrap();

    let value = session.update(&storage, "high-value", 50).unwrap();
    assert_eq!(value, 50);
    assert_eq!(session.total(), 108);
    assert!(!session.is_balanced());

    let stored = storage.load_target_mix().unwrap().unwrap();
    assert_eq!(stored.get("high-value"), Some(50));
}

#[test]
fn test_update_unknown_persona() {
    let (personas, suggested) = bundled();
    let storage = MemoryStorage::new();
    let mut session = MixSession::load(&storage, &personas, suggested).unwrap();

    let err = session.update(&storage, "nobody", 10).unwrap_err();
    assert!(matches!(
        err,
        SessionError::Mix(MixError::UnknownPersona(ref id)) if *id == PersonaId::from("nobody")
    ));
    assert!(!session.target().contains("nobody"));
}

#[test]
fn test_reset_clears_stored_mix() {
    let (personas, suggested) = bundled();
    let storage = MemoryStorage::new();
    let mut session = MixSession::load(&storage, &personas, suggested.clone()).unwrap();
    session.update(&storage, "budget", 20).unwrap();

    session.reset(&storage).unwrap();
    assert!(storage.raw_target_mix().is_none());
    assert_eq!(session.target(), suggested.shares());

    // Next load seeds again
    let reloaded = MixSession::load(&storage, &personas, suggested).unwrap();
    assert_eq!(reloaded.origin(), MixOrigin::Seeded);
}

#[test]
fn test_apply_suggestions_overwrites_edits() {
    let (personas, suggested) = bundled();
    let storage = MemoryStorage::new();
    let mut session = MixSession::load(&storage, &personas, suggested.clone()).unwrap();
    session.update(&storage, "premium", 0).unwrap();

    session.apply_suggestions(&storage).unwrap();
    assert_eq!(session.target(), suggested.shares());
    assert_eq!(storage.load_target_mix().unwrap().as_ref(), Some(suggested.shares()));
}

#[test]
fn test_card_deviation_badge() {
    let (personas, suggested) = bundled();
    let storage = MemoryStorage::new();
    let mut session = MixSession::load(&storage, &personas, suggested).unwrap();

    // Suggested premium share is 30
    session.update(&storage, "premium", 40).unwrap();
    assert_eq!(session.card_deviation("premium"), None);
    session.update(&storage, "premium", 41).unwrap();
    assert_eq!(session.card_deviation("premium"), Some(11));
    session.update(&storage, "premium", 15).unwrap();
    assert_eq!(session.card_deviation("premium"), Some(15));

    assert_eq!(session.card_deviation("nobody"), None);
}

#[test]
fn test_impact_of_seeded_mix() {
    let (personas, suggested) = bundled();
    let storage = MemoryStorage::new();
    let session = MixSession::load(&storage, &personas, suggested).unwrap();

    let impact = session.impact(&personas, 1_000);
    // The suggestion leans toward the high-margin personas
    assert!(impact.is_gain());
    assert!((impact.annual_projection - impact.difference * 12.0).abs() < 1e-6);
    assert!(impact.deviations.iter().any(|d| d.id.as_str() == "high-value"));
}

#[cfg(feature = "native")]
#[test]
fn test_file_storage_survives_restart() {
    use crate::platform::NativeStorage;

    let dir = tempfile::tempdir().unwrap();
    let (personas, suggested) = bundled();

    {
        let storage = NativeStorage::new(dir.path().to_path_buf());
        let mut session = MixSession::load(&storage, &personas, suggested.clone()).unwrap();
        assert_eq!(session.origin(), MixOrigin::Seeded);
        session.update(&storage, "mid-value", 25).unwrap();
    }

    let storage = NativeStorage::new(dir.path().to_path_buf());
    let session = MixSession::load(&storage, &personas, suggested).unwrap();
    assert_eq!(session.origin(), MixOrigin::Stored);
    assert_eq!(session.target().get("mid-value"), Some(25));
}

#[cfg(feature = "native")]
#[test]
fn test_file_storage_empty_file_seeds() {
    use crate::platform::NativeStorage;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("target_mix.json");
    std::fs::write(&path, "").unwrap();

    let (personas, suggested) = bundled();
    let storage = NativeStorage::new(dir.path().to_path_buf());
    let session = MixSession::load(&storage, &personas, suggested).unwrap();

    assert_eq!(session.origin(), MixOrigin::Seeded);
    assert!(std::fs::read_to_string(&path).unwrap().contains("\"high-value\":42"));
}

#[cfg(feature = "native")]
#[test]
fn test_file_storage_corrupt_file_left_alone() {
    use crate::platform::NativeStorage;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("target_mix.json");
    std::fs::write(&path, "[1, 2").unwrap();

    let (personas, suggested) = bundled();
    let storage = NativeStorage::new(dir.path().to_path_buf());
    let session = MixSession::load(&storage, &personas, suggested).unwrap();

    assert_eq!(session.origin(), MixOrigin::Recovered);
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "[1, 2");
}
