//! `freetime` CLI — find shared free time across weekly schedules from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Shared free slots for everyone in the file (stdin → stdout, JSON)
//! cat schedules.json | freetime match
//!
//! # Only two participants, 45 minute minimum, human-readable output
//! freetime match -i schedules.json --participants alice,bob --min-duration 45 --format text
//!
//! # Narrow the considered part of each day
//! freetime match -i schedules.json --day-start "9:00 AM" --day-end 18:00
//!
//! # One participant's free windows across the week
//! freetime free -i schedules.json --participant alice
//!
//! # Validate an input file
//! freetime check -i schedules.json
//! ```
//!
//! Input is either a bare JSON array of participant schedules or a document
//! `{"schedules": [...], "options": {...}}`. Options are layered: built-in defaults,
//! then the document's `options`, then `--config FILE`, then command-line flags.
//! Logs go to stderr; set `RUST_LOG` or pass `-v` for more detail.

use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use freetime_engine::{MatchConfig, ParticipantSchedule, SharedFreeSlot};
use serde::Deserialize;
use std::io::{self, Read};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "freetime",
    version,
    about = "Find shared free time across weekly schedules"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON file with option defaults (day_start, day_end, min_duration_minutes,
    /// context_lead_minutes)
    #[arg(long, global = true)]
    config: Option<String>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute shared free slots for all (or selected) participants
    Match {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Comma-separated participant ids to compare (defaults to everyone)
        #[arg(long)]
        participants: Option<String>,
        #[command(flatten)]
        bounds: BoundsArgs,
        /// Minimum slot length in minutes
        #[arg(long)]
        min_duration: Option<i64>,
        /// Minutes before/after a slot searched for surrounding activities
        #[arg(long)]
        lead: Option<i64>,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },
    /// List one participant's free windows across the week
    Free {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Participant id
        #[arg(long)]
        participant: String,
        #[command(flatten)]
        bounds: BoundsArgs,
    },
    /// Validate an input file without computing anything
    Check {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
}

#[derive(Args)]
struct BoundsArgs {
    /// Start of the considered part of each day (e.g. "08:00" or "8:00 AM")
    #[arg(long)]
    day_start: Option<String>,
    /// End of the considered part of each day
    #[arg(long)]
    day_end: Option<String>,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Json,
    Text,
}

/// The object form of an input file.
#[derive(Deserialize)]
struct ScheduleDocument {
    schedules: Vec<ParticipantSchedule>,
    #[serde(default)]
    options: MatchConfig,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let file_config = cli.config.as_deref().map(load_config).transpose()?;

    match cli.command {
        Commands::Match {
            input,
            output,
            participants,
            bounds,
            min_duration,
            lead,
            format,
        } => {
            let document = read_document(input.as_deref())?;
            let flags = MatchConfig {
                day_start: bounds.day_start,
                day_end: bounds.day_end,
                min_duration_minutes: min_duration,
                context_lead_minutes: lead,
            };
            let options = layer_options(document.options, file_config, flags)
                .resolve()
                .context("Invalid match options")?;

            let schedules = match participants.as_deref() {
                Some(raw) => {
                    let ids = split_ids(raw);
                    freetime_engine::select_participants(&document.schedules, &ids)
                        .context("Failed to select participants")?
                }
                None => document.schedules,
            };

            let slots = freetime_engine::compute_shared_free_times_with(&schedules, &options)
                .context("Failed to compute shared free time")?;
            info!(
                participants = schedules.len(),
                slots = slots.len(),
                "shared free time computed"
            );

            let rendered = match format {
                OutputFormat::Json => to_json(&slots)?,
                OutputFormat::Text => render_text(&slots),
            };
            write_output(output.as_deref(), &rendered)?;
        }
        Commands::Free {
            input,
            output,
            participant,
            bounds,
        } => {
            let document = read_document(input.as_deref())?;
            let flags = MatchConfig {
                day_start: bounds.day_start,
                day_end: bounds.day_end,
                ..MatchConfig::default()
            };
            let options = layer_options(document.options, file_config, flags)
                .resolve()
                .context("Invalid match options")?;

            let selected =
                freetime_engine::select_participants(&document.schedules, &[participant.as_str()])
                    .context("Failed to select participant")?;
            let schedule = &selected[0];
            schedule.validate().context("Invalid schedule")?;

            let free = freetime_engine::participant_free_times(schedule, options.day_bounds);
            debug!(
                participant = %schedule.participant_id,
                windows = free.len(),
                "free windows computed"
            );
            write_output(output.as_deref(), &to_json(&free)?)?;
        }
        Commands::Check { input } => {
            let document = read_document(input.as_deref())?;
            let options = layer_options(document.options, file_config, MatchConfig::default())
                .resolve()
                .context("Invalid match options")?;
            freetime_engine::engine::validate(&document.schedules, &options)
                .context("Invalid schedules")?;

            let entries: usize = document.schedules.iter().map(|s| s.entries.len()).sum();
            println!(
                "OK: {} participants, {} entries",
                document.schedules.len(),
                entries
            );
        }
    }

    Ok(())
}

/// Install a stderr subscriber. `RUST_LOG` wins over `-v`.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Defaults < document `options` < `--config` file < flags.
fn layer_options(
    document: MatchConfig,
    file: Option<MatchConfig>,
    flags: MatchConfig,
) -> MatchConfig {
    document.overlay(file.unwrap_or_default()).overlay(flags)
}

/// Split `--participants alice,bob` into ids, skipping blanks.
fn split_ids(raw: &str) -> Vec<&str> {
    raw.split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .collect()
}

fn load_config(path: &str) -> Result<MatchConfig> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path))?;
    serde_json::from_str(&raw).with_context(|| format!("Failed to parse config file: {}", path))
}

/// Parse either a bare array of schedules or a `{schedules, options}` document.
fn read_document(path: Option<&str>) -> Result<ScheduleDocument> {
    let raw = read_input(path)?;
    let value: serde_json::Value =
        serde_json::from_str(&raw).context("Input is not valid JSON")?;

    let document = if value.is_array() {
        ScheduleDocument {
            schedules: serde_json::from_value(value).context("Failed to parse schedules")?,
            options: MatchConfig::default(),
        }
    } else {
        serde_json::from_value(value).context("Failed to parse schedule document")?
    };
    debug!(participants = document.schedules.len(), "input loaded");
    Ok(document)
}

fn render_text(slots: &[SharedFreeSlot]) -> String {
    if slots.is_empty() {
        return "No shared free time found.\n".to_string();
    }
    let mut out = String::new();
    for slot in slots {
        out.push_str(&slot.summary);
        out.push('\n');
    }
    out
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String> {
    let mut json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    json.push('\n');
    Ok(json)
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_ids_trims_and_skips_blanks() {
        assert_eq!(split_ids(" alice, bob ,,carol"), vec!["alice", "bob", "carol"]);
        assert!(split_ids(" , ").is_empty());
    }

    #[test]
    fn flags_override_config_file_and_document() {
        let document = MatchConfig {
            day_start: Some("07:00".to_string()),
            min_duration_minutes: Some(15),
            ..MatchConfig::default()
        };
        let file = MatchConfig {
            min_duration_minutes: Some(20),
            context_lead_minutes: Some(5),
            ..MatchConfig::default()
        };
        let flags = MatchConfig {
            context_lead_minutes: Some(0),
            ..MatchConfig::default()
        };

        let merged = layer_options(document, Some(file), flags);

        assert_eq!(merged.day_start.as_deref(), Some("07:00"));
        assert_eq!(merged.min_duration_minutes, Some(20));
        assert_eq!(merged.context_lead_minutes, Some(0));
    }

    #[test]
    fn empty_text_rendering_says_so() {
        assert_eq!(render_text(&[]), "No shared free time found.\n");
    }
}
