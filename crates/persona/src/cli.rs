//! Command line interface for the native build

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use color_eyre::eyre::eyre;
use persona_core::allocation::suggest_mix;
use persona_core::export::{ExportContext, ExportFormat, personas_csv, target_mix_csv};

use crate::App;
use crate::assistant::{Assistant, thinking_delay};
use crate::config::AppConfig;
use crate::data::{load_creative_briefs, load_personas};
use crate::platform::{MemoryStorage, NativeStorage, Storage};
use crate::report;
use crate::state::EditorState;
use crate::util::io::atomic_write;

#[derive(Parser, Debug)]
#[command(name = "persona")]
#[command(about = "Plan a profitable persona acquisition mix and export creative briefs")]
pub struct Args {
    /// Path to the data directory (default: ~/.persona/)
    #[arg(short, long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info", global = true)]
    pub log_level: String,

    /// Keep the target mix and preferences in memory only
    #[arg(long, global = true)]
    pub ephemeral: bool,

    /// Defaults to the interactive editor
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Args {
    pub fn data_dir(&self) -> PathBuf {
        self.data_dir
            .clone()
            .unwrap_or_else(NativeStorage::default_path)
    }
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Print the suggested mix with its intermediate values
    Suggest,
    /// Show or change the stored target mix
    Mix {
        #[command(subcommand)]
        action: MixCommand,
    },
    /// Profit impact of the target mix versus current shares
    Impact {
        /// New customers per month (overrides config)
        #[arg(long)]
        customers: Option<u32>,
    },
    /// Write an export file
    Export {
        #[arg(value_enum)]
        target: ExportTarget,
        /// Output file or directory
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Ask the assistant a question
    Ask {
        #[arg(required = true, num_args = 1..)]
        question: Vec<String>,
        /// Use the dashboard sidebar rules
        #[arg(long)]
        sidebar: bool,
        /// Card the question is about (sidebar only)
        #[arg(long)]
        context: Option<String>,
    },
    /// Interactive target mix editor
    Edit,
    /// Onboarding, data connections and brand guardrails
    Prefs {
        #[command(subcommand)]
        action: PrefsCommand,
    },
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum MixCommand {
    Show,
    /// Set one persona's target share
    Set {
        id: String,
        #[arg(value_parser = clap::value_parser!(u8).range(0..=100))]
        pct: u8,
    },
    /// Replace the target mix with the suggestion
    Apply,
    /// Forget the stored mix
    Reset,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum PrefsCommand {
    Show,
    /// Toggle a data source connection
    Connect { source: String },
    /// Update brand guardrails
    Guardrails {
        #[arg(long)]
        style_guide: Option<String>,
        #[arg(long)]
        do_say: Option<String>,
        #[arg(long)]
        dont_say: Option<String>,
    },
    CompleteOnboarding,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportTarget {
    /// Meta Ads bulk upload CSV
    Meta,
    /// Google Ads responsive search ads CSV
    Google,
    /// Creative brief text document
    Briefs,
    TargetMix,
    PersonasCsv,
    PersonasJson,
}

impl ExportTarget {
    fn brief_format(self) -> Option<ExportFormat> {
        match self {
            ExportTarget::Meta => Some(ExportFormat::MetaAds),
            ExportTarget::Google => Some(ExportFormat::GoogleAds),
            ExportTarget::Briefs => Some(ExportFormat::BriefDocument),
            _ => None,
        }
    }
}

/// Run a parsed command against the data directory
pub fn run(args: Args, data_dir: &Path) -> color_eyre::Result<()> {
    let config = AppConfig::load(data_dir)?;
    let storage: Box<dyn Storage> = if args.ephemeral {
        Box::new(MemoryStorage::new())
    } else {
        Box::new(NativeStorage::new(data_dir.to_path_buf()))
    };

    match args.command.unwrap_or(Command::Edit) {
        Command::Suggest => {
            let personas = load_personas()?;
            let suggested = suggest_mix(&personas, &config.allocation());
            println!("{}", report::suggestion_table(&personas, &suggested));
        }
        Command::Mix { action } => run_mix(action, storage, &config)?,
        Command::Impact { customers } => {
            let mut state = EditorState::load(storage, &config)?;
            if let Some(customers) = customers {
                state.monthly_new_customers = customers;
            }
            println!(
                "{}",
                report::impact_report(&state.impact(), state.monthly_new_customers)
            );
        }
        Command::Export { target, out } => {
            let path = run_export(target, out, storage, &config)?;
            println!("Wrote {}", path.display());
        }
        Command::Ask {
            question,
            sidebar,
            context,
        } => {
            let assistant = if sidebar {
                Assistant::sidebar()
            } else {
                Assistant::chat()
            };
            std::thread::sleep(thinking_delay());
            println!("{}", assistant.respond(&question.join(" "), context.as_deref()));
        }
        Command::Edit => {
            let state = EditorState::load(storage, &config)?;
            let mut app = App::new(state);
            ratatui::run(|terminal| app.run(terminal))?;
            tracing::info!("Editor closed");
        }
        Command::Prefs { action } => run_prefs(action, storage.as_ref())?,
    }

    Ok(())
}

fn run_mix(
    action: MixCommand,
    storage: Box<dyn Storage>,
    config: &AppConfig,
) -> color_eyre::Result<()> {
    let mut state = EditorState::load(storage, config)?;
    match action {
        MixCommand::Show => {}
        MixCommand::Set { id, pct } => {
            state.session.update(state.storage.as_ref(), &id, pct)?;
        }
        MixCommand::Apply => state.session.apply_suggestions(state.storage.as_ref())?,
        MixCommand::Reset => state.session.reset(state.storage.as_ref())?,
    }
    println!("{}", report::mix_table(&state.personas, &state.session));
    Ok(())
}

/// Render the requested export and write it, returning the path written
pub fn run_export(
    target: ExportTarget,
    out: Option<PathBuf>,
    storage: Box<dyn Storage>,
    config: &AppConfig,
) -> color_eyre::Result<PathBuf> {
    let now = jiff::Zoned::now();

    let (file_name, content) = if let Some(format) = target.brief_format() {
        let briefs = load_creative_briefs()?;
        let ctx = ExportContext::new(now.date());
        (
            format.file_name(now.timestamp().as_millisecond()),
            format.render(&briefs, &ctx),
        )
    } else {
        match target {
            ExportTarget::TargetMix => {
                let state = EditorState::load(storage, config)?;
                (
                    "target_mix.csv".to_string(),
                    target_mix_csv(state.session.target()),
                )
            }
            ExportTarget::PersonasCsv => ("personas.csv".to_string(), personas_csv(&load_personas()?)),
            ExportTarget::PersonasJson => (
                "personas.json".to_string(),
                serde_json::to_string_pretty(&load_personas()?)?,
            ),
            _ => return Err(eyre!("unsupported export target {:?}", target)),
        }
    };

    let path = output_path(out, config.export_dir.as_deref(), &file_name);
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    atomic_write(&path, &content)?;
    tracing::info!(path = %path.display(), "Export written");
    Ok(path)
}

/// `--out` wins (a directory gets the default name), then the configured
/// export directory, then the working directory.
fn output_path(out: Option<PathBuf>, export_dir: Option<&Path>, file_name: &str) -> PathBuf {
    match out {
        Some(out) if out.is_dir() => out.join(file_name),
        Some(out) => out,
        None => export_dir
            .map(|dir| dir.join(file_name))
            .unwrap_or_else(|| PathBuf::from(file_name)),
    }
}

fn run_prefs(action: PrefsCommand, storage: &dyn Storage) -> color_eyre::Result<()> {
    let mut prefs = storage.load_preferences()?;
    match action {
        PrefsCommand::Show => {}
        PrefsCommand::Connect { source } => {
            let connected = prefs
                .toggle_connection(&source)
                .ok_or_else(|| eyre!("unknown data source: {}", source))?;
            storage.save_preferences(&prefs)?;
            println!(
                "{} {}",
                source,
                if connected { "connected" } else { "disconnected" }
            );
        }
        PrefsCommand::Guardrails {
            style_guide,
            do_say,
            dont_say,
        } => {
            if let Some(v) = style_guide {
                prefs.guardrails.style_guide = v;
            }
            if let Some(v) = do_say {
                prefs.guardrails.do_say = v;
            }
            if let Some(v) = dont_say {
                prefs.guardrails.dont_say = v;
            }
            storage.save_preferences(&prefs)?;
        }
        PrefsCommand::CompleteOnboarding => {
            prefs.onboarding_completed = true;
            storage.save_preferences(&prefs)?;
        }
    }
    println!("{}", report::preferences_summary(&prefs));
    Ok(())
}
