use anyhow::{anyhow, Context, Result};
use clap::{ArgGroup, Parser, Subcommand};
use serde::Serialize;
use std::collections::HashSet;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

use jazik::adaptive::{self, AdaptiveSessionState, DifficultyLevel, ExerciseRef};
use jazik::config::{self, JazikConfig};
use jazik::grammar::{self, Definiteness, Gender, GrammarValidator, LinguisticMetadata, Number};

/// jazik - Macedonian grammar checks and adaptive practice sessions
#[derive(Parser)]
#[command(name = "jazik")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Macedonian agreement validation and adaptive practice difficulty", long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Config file (defaults to .jazik/config.toml, then ~/.jazik/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a noun + adjective pair given as JSON metadata
    Validate {
        /// Metadata file (reads stdin if omitted)
        #[arg(long)]
        input: Option<PathBuf>,
        /// Also report adjectives missing from the lexicon
        #[arg(long)]
        strict: bool,
    },

    /// Look up the expected adjective form for explicit features
    Form {
        #[arg(long)]
        adjective: String,
        /// masculine, feminine or neuter
        #[arg(long)]
        gender: String,
        /// singular or plural
        #[arg(long, default_value = "singular")]
        number: String,
        /// definite or indefinite
        #[arg(long, default_value = "indefinite")]
        definiteness: String,
    },

    /// Adjective form that agrees with a known noun
    CorrectForm {
        #[arg(long)]
        adjective: String,
        #[arg(long)]
        noun: String,
        #[arg(long)]
        definite: bool,
        #[arg(long)]
        plural: bool,
    },

    /// Gender of a noun lemma
    Gender { noun: String },

    /// Whether a noun surface form carries the definite article
    Definite { surface: String },

    /// Print the loaded lexicon as JSON
    Lexicon,

    /// Write a default config file
    Init {
        /// Overwrite an existing config
        #[arg(long)]
        force: bool,
    },

    /// Adaptive practice session commands
    Session {
        #[command(subcommand)]
        action: SessionAction,
    },
}

#[derive(Subcommand)]
enum SessionAction {
    /// Create a new session state file
    Start {
        #[arg(long)]
        state: PathBuf,
        /// Starting difficulty: easy, medium or hard
        #[arg(long, default_value = "medium")]
        difficulty: String,
    },

    /// Record one answer and update the session
    #[command(group(ArgGroup::new("outcome").required(true).args(["correct", "wrong"])))]
    Answer {
        #[arg(long)]
        state: PathBuf,
        #[arg(long)]
        correct: bool,
        #[arg(long)]
        wrong: bool,
    },

    /// Show accuracy, difficulty and adjustment budget
    Status {
        #[arg(long)]
        state: PathBuf,
    },

    /// Pick the next exercise from a JSON list
    Next {
        #[arg(long)]
        state: PathBuf,
        #[arg(long)]
        exercises: PathBuf,
        /// Exercise ids already used this session
        #[arg(long = "used")]
        used: Vec<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr) // stdout carries JSON output
        .init();

    let config_path = match cli.config {
        Some(path) => path,
        None => config::default_config_path()?,
    };

    if let Commands::Init { force } = cli.command {
        return init_config(&config_path, force);
    }

    let config = config::load_config(&config_path)
        .with_context(|| format!("Failed to load config from {:?}", config_path))?;

    match cli.command {
        Commands::Validate { input, strict } => {
            let mut validation = config.validation.clone();
            validation.strict |= strict;
            let validator = validation.build_validator()?;
            let valid = validate(&validator, input.as_deref())?;
            if !valid {
                std::process::exit(1);
            }
        }
        Commands::Form { adjective, gender, number, definiteness } => {
            let gender = Gender::from_str(&gender)
                .ok_or_else(|| anyhow!("Unknown gender '{}'", gender))?;
            let number = Number::from_str(&number)
                .ok_or_else(|| anyhow!("Unknown number '{}'", number))?;
            let definiteness = Definiteness::from_str(&definiteness)
                .ok_or_else(|| anyhow!("Unknown definiteness '{}'", definiteness))?;

            let lexicon = config.validation.load_lexicon()?;
            print_json(&lexicon.expected_adjective_form(&adjective, gender, number, definiteness))?;
        }
        Commands::CorrectForm { adjective, noun, definite, plural } => {
            let lexicon = config.validation.load_lexicon()?;
            print_json(&lexicon.correct_adjective_form(&adjective, &noun, definite, plural))?;
        }
        Commands::Gender { noun } => {
            let lexicon = config.validation.load_lexicon()?;
            print_json(&lexicon.detect_noun_gender(&noun))?;
        }
        Commands::Definite { surface } => {
            print_json(&grammar::is_definite_noun(&surface))?;
        }
        Commands::Lexicon => {
            let lexicon = config.validation.load_lexicon()?;
            println!("{}", lexicon.to_json_pretty()?);
        }
        Commands::Session { action } => {
            run_session(action, &config)?;
        }
        // written before the config is loaded
        Commands::Init { .. } => {}
    }

    Ok(())
}

fn init_config(config_path: &Path, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        return Err(anyhow!(
            "Config already exists at {:?}; pass --force to overwrite",
            config_path
        ));
    }
    config::write_default_config(config_path)?;
    info!("Wrote default config to {:?}", config_path);
    println!("✅ Config written to {}", config_path.display());
    Ok(())
}

/// Validate metadata from a file or stdin; returns whether it passed
fn validate(validator: &GrammarValidator, input: Option<&Path>) -> Result<bool> {
    let raw = match input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {:?}", path))?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let metadata: LinguisticMetadata =
        serde_json::from_str(&raw).context("Input is not valid linguistic metadata")?;
    let result = validator.validate_content(&metadata);
    print_json(&result)?;
    Ok(result.valid)
}

fn run_session(action: SessionAction, config: &JazikConfig) -> Result<()> {
    match action {
        SessionAction::Start { state, difficulty } => {
            let level = DifficultyLevel::from_str(&difficulty)
                .ok_or_else(|| anyhow!("Unknown difficulty '{}'", difficulty))?;
            let session = AdaptiveSessionState::new(level);
            save_session(&state, &session)?;
            info!("Started session at {} difficulty", level);
            print_json(&session)?;
        }
        SessionAction::Answer { state, correct, .. } => {
            let session = load_session(&state)?;
            let next = adaptive::record_answer(&session, correct, &config.adaptive);
            save_session(&state, &next)?;
            print_json(&adaptive::session_summary(&next, &config.adaptive))?;
        }
        SessionAction::Status { state } => {
            let session = load_session(&state)?;
            print_json(&adaptive::session_summary(&session, &config.adaptive))?;
        }
        SessionAction::Next { state, exercises, used } => {
            let session = load_session(&state)?;
            let raw = std::fs::read_to_string(&exercises)
                .with_context(|| format!("Failed to read {:?}", exercises))?;
            let pool: Vec<ExerciseRef> =
                serde_json::from_str(&raw).context("Exercises file must be a JSON array")?;
            let used: HashSet<String> = used.into_iter().collect();

            let picked = adaptive::select_next_exercise(&pool, &session, &used, &mut rand::thread_rng());
            print_json(&picked)?;
        }
    }
    Ok(())
}

fn load_session(path: &Path) -> Result<AdaptiveSessionState> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read session state {:?}", path))?;
    adaptive::deserialize_adaptive_state(&raw)
        .ok_or_else(|| anyhow!("Session state at {:?} is not valid", path))
}

fn save_session(path: &Path, state: &AdaptiveSessionState) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, adaptive::serialize_adaptive_state(state)?)
        .with_context(|| format!("Failed to write session state {:?}", path))?;
    Ok(())
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
