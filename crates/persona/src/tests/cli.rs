//! Argument parsing and file exports

use clap::Parser;

use crate::cli::{Args, Command, ExportTarget, MixCommand, PrefsCommand, run_export};
use crate::config::AppConfig;
use crate::platform::MemoryStorage;

#[test]
fn test_defaults_to_editor() {
    let args = Args::try_parse_from(["persona"]).unwrap();
    assert!(args.command.is_none());
    assert_eq!(args.log_level, "info");
    assert!(!args.ephemeral);
}

#[test]
fn test_mix_set() {
    let args =
        Args::try_parse_from(["persona", "--ephemeral", "mix", "set", "premium", "35"]).unwrap();
    assert!(args.ephemeral);
    assert_eq!(
        args.command,
        Some(Command::Mix {
            action: MixCommand::Set {
                id: "premium".to_string(),
                pct: 35
            }
        })
    );

    assert!(Args::try_parse_from(["persona", "mix", "set", "premium", "101"]).is_err());
}

#[test]
fn test_export_targets() {
    let args = Args::try_parse_from(["persona", "export", "target-mix", "--out", "mix.csv"]).unwrap();
    assert!(matches!(
        args.command,
        Some(Command::Export {
            target: ExportTarget::TargetMix,
            out: Some(_)
        })
    ));

    let args = Args::try_parse_from(["persona", "export", "personas-json"]).unwrap();
    assert!(matches!(
        args.command,
        Some(Command::Export {
            target: ExportTarget::PersonasJson,
            out: None
        })
    ));

    assert!(Args::try_parse_from(["persona", "export", "tiktok"]).is_err());
}

#[test]
fn test_ask_joins_words() {
    let args = Args::try_parse_from([
        "persona", "ask", "why", "is", "cac", "up", "--sidebar", "--context", "CAC card",
    ])
    .unwrap();
    let Some(Command::Ask {
        question,
        sidebar,
        context,
    }) = args.command
    else {
        panic!("expected ask");
    };
    assert_eq!(question.join(" "), "why is cac up");
    assert!(sidebar);
    assert_eq!(context.as_deref(), Some("CAC card"));

    assert!(Args::try_parse_from(["persona", "ask"]).is_err());
}

#[test]
fn test_prefs_guardrails() {
    let args = Args::try_parse_from(["persona", "prefs", "guardrails", "--do-say", "Be plain"])
        .unwrap();
    assert_eq!(
        args.command,
        Some(Command::Prefs {
            action: PrefsCommand::Guardrails {
                style_guide: None,
                do_say: Some("Be plain".to_string()),
                dont_say: None
            }
        })
    );
}

#[test]
fn test_export_personas_csv_to_directory() {
    let dir = tempfile::tempdir().unwrap();
    let path = run_export(
        ExportTarget::PersonasCsv,
        Some(dir.path().to_path_buf()),
        Box::new(MemoryStorage::new()),
        &AppConfig::default(),
    )
    .unwrap();

    assert_eq!(path, dir.path().join("personas.csv"));
    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("id,label,currentShare,ltv,cac,paybackDays,profitIndex\n"));
    assert_eq!(content.lines().count(), 6);
}

#[test]
fn test_export_target_mix_uses_configured_dir() {
    let dir = tempfile::tempdir().unwrap();
    let config = AppConfig {
        export_dir: Some(dir.path().join("exports")),
        ..AppConfig::default()
    };

    let path = run_export(
        ExportTarget::TargetMix,
        None,
        Box::new(MemoryStorage::new()),
        &config,
    )
    .unwrap();

    assert_eq!(path, dir.path().join("exports").join("target_mix.csv"));
    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("personaId,targetShare\n"));
    assert!(content.contains("high-value,42"));
}

#[test]
fn test_export_meta_file_name() {
    let dir = tempfile::tempdir().unwrap();
    let path = run_export(
        ExportTarget::Meta,
        Some(dir.path().to_path_buf()),
        Box::new(MemoryStorage::new()),
        &AppConfig::default(),
    )
    .unwrap();

    let name = path.file_name().unwrap().to_string_lossy().to_string();
    assert!(name.starts_with("meta-ads-campaign-") && name.ends_with(".csv"));
}
