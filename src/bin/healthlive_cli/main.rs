// ABOUTME: HealthLive CLI - developer tool driving reminders, metrics, compliance, and plans
// ABOUTME: Runs every operation against the storage backend selected by configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthLive
//!
//! Usage:
//! ```bash
//! # Show reminder schedules
//! healthlive-cli --storage-url sqlite:./data/healthlive.db reminders list
//!
//! # Move hydration reminders to every 90 minutes from 07:00
//! healthlive-cli reminders update hydration --start 07:00 --every 90
//!
//! # Record a blood pressure reading and review alerts
//! healthlive-cli metrics add blood-pressure --systolic 150 --diastolic 95
//! healthlive-cli metrics alerts blood-pressure
//!
//! # Tick today's hydration check
//! healthlive-cli compliance toggle hydration-check
//!
//! # Share weekly plan progress
//! healthlive-cli plan share --completed monday-meal --completed monday-exercise
//! ```

mod commands;
mod helpers;

use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use healthlive::config::environment::StorageUrl;
use healthlive::config::AppConfig;
use healthlive::logging::LoggingConfig;
use healthlive::storage::Storage;
use healthlive_core::constants::service_names;
use healthlive_core::models::{
    MetricKind, NotificationTone, ReminderPreferenceUpdate, ReminderType,
};
use tracing::info;

#[derive(Parser)]
#[command(
    name = "healthlive-cli",
    about = "HealthLive developer CLI",
    long_about = "Inspect and drive HealthLive reminders, metric records, compliance checklists, and weekly plans."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Storage URL override (`memory`, `sqlite:<path>`, `sqlite::memory:`)
    #[arg(long, global = true)]
    storage_url: Option<String>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Reminder preference commands
    Reminders {
        #[command(subcommand)]
        action: ReminderCommand,
    },

    /// Metric record commands
    Metrics {
        #[command(subcommand)]
        action: MetricCommand,
    },

    /// Compliance checklist commands
    Compliance {
        #[command(subcommand)]
        action: ComplianceCommand,
    },

    /// Weekly plan commands
    Plan {
        #[command(subcommand)]
        action: PlanCommand,
    },

    /// Metric sync queue commands
    Queue {
        #[command(subcommand)]
        action: QueueCommand,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum ReminderCommand {
    /// List reminders with their schedule and daily slots
    List,

    /// Edit one reminder and resynchronize notifications
    Update {
        /// Reminder to edit
        #[arg(value_enum)]
        id: ReminderArg,

        #[command(flatten)]
        changes: ReminderChanges,
    },

    /// Rebuild notifications and print what would be scheduled
    Sync,
}

/// Reminder fields that can be changed from the command line
#[derive(Args)]
struct ReminderChanges {
    /// Window start, HH:MM
    #[arg(long)]
    start: Option<String>,

    /// Window end, HH:MM
    #[arg(long)]
    end: Option<String>,

    /// Minutes between notifications
    #[arg(long)]
    every: Option<u32>,

    /// Notification sound
    #[arg(long, value_enum)]
    sound: Option<ToneArg>,

    /// Notification message
    #[arg(long)]
    title: Option<String>,

    /// Notification subtitle
    #[arg(long)]
    description: Option<String>,

    /// Turn the reminder on
    #[arg(long, conflicts_with = "disable")]
    enable: bool,

    /// Turn the reminder off
    #[arg(long)]
    disable: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum MetricCommand {
    /// Validate and store a new reading
    Add {
        #[command(subcommand)]
        entry: MetricEntry,
    },

    /// Print stored readings oldest first
    List {
        /// Metric to list
        #[arg(value_enum)]
        kind: MetricArg,
    },

    /// Print alerts for stored readings
    Alerts {
        /// Metric to evaluate
        #[arg(value_enum)]
        kind: MetricArg,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum MetricEntry {
    /// Blood pressure in mmHg
    BloodPressure {
        /// Systolic pressure
        #[arg(long)]
        systolic: String,
        /// Diastolic pressure
        #[arg(long)]
        diastolic: String,
        /// Pulse in beats per minute
        #[arg(long, default_value = "")]
        pulse: String,
        #[command(flatten)]
        common: EntryCommon,
    },

    /// Blood glucose in mg/dL
    Glucose {
        /// Glucose value
        #[arg(long)]
        value: String,
        /// fasting, postprandial, or random
        #[arg(long, default_value = "fasting")]
        context: String,
        #[command(flatten)]
        common: EntryCommon,
    },

    /// Lipid panel in mg/dL
    Lipids {
        /// Total cholesterol
        #[arg(long)]
        total_cholesterol: String,
        /// HDL cholesterol
        #[arg(long)]
        hdl: String,
        /// LDL cholesterol
        #[arg(long)]
        ldl: String,
        /// Triglycerides
        #[arg(long)]
        triglycerides: String,
        #[command(flatten)]
        common: EntryCommon,
    },

    /// Weight and height; BMI is derived
    BodyComposition {
        /// Weight in kilograms
        #[arg(long)]
        weight_kg: String,
        /// Height in centimeters
        #[arg(long)]
        height_cm: String,
        #[command(flatten)]
        common: EntryCommon,
    },
}

/// Fields shared by every metric entry
#[derive(Args)]
struct EntryCommon {
    /// Measurement date, YYYY-MM-DD or RFC 3339 (defaults to today)
    #[arg(long)]
    date: Option<String>,

    /// Free-text note
    #[arg(long, default_value = "")]
    note: String,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum ComplianceCommand {
    /// Show today's and this week's checklist
    Show,

    /// Flip a checklist task
    Toggle {
        /// Task id, e.g. hydration-check or planning-review
        task_id: String,

        /// Task belongs to the weekly checklist
        #[arg(long)]
        weekly: bool,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum PlanCommand {
    /// Print the generated weekly plan
    Show,

    /// Print the shareable progress summary
    Share {
        /// Activity ids to mark completed, e.g. monday-meal
        #[arg(long)]
        completed: Vec<String>,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum QueueCommand {
    /// Print queued sync entries
    Pending,

    /// Empty the queue
    Clear,
}

#[derive(Clone, Copy, ValueEnum)]
enum ReminderArg {
    Movement,
    Hydration,
    Measurements,
    Exercise,
}

impl From<ReminderArg> for ReminderType {
    fn from(arg: ReminderArg) -> Self {
        match arg {
            ReminderArg::Movement => Self::Movement,
            ReminderArg::Hydration => Self::Hydration,
            ReminderArg::Measurements => Self::Measurements,
            ReminderArg::Exercise => Self::Exercise,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum ToneArg {
    Default,
    Focus,
    Energetic,
    Calm,
}

impl From<ToneArg> for NotificationTone {
    fn from(arg: ToneArg) -> Self {
        match arg {
            ToneArg::Default => Self::Default,
            ToneArg::Focus => Self::Focus,
            ToneArg::Energetic => Self::Energetic,
            ToneArg::Calm => Self::Calm,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum MetricArg {
    BloodPressure,
    Glucose,
    Lipids,
    BodyComposition,
}

impl From<MetricArg> for MetricKind {
    fn from(arg: MetricArg) -> Self {
        match arg {
            MetricArg::BloodPressure => Self::BloodPressure,
            MetricArg::Glucose => Self::Glucose,
            MetricArg::Lipids => Self::Lipids,
            MetricArg::BodyComposition => Self::BodyComposition,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::from_env()?;
    if let Some(raw) = &cli.storage_url {
        config = config.with_storage(StorageUrl::parse_url(raw)?);
    }

    let mut logging = config
        .logging
        .clone()
        .with_service_name(service_names::HEALTHLIVE_CLI);
    if cli.verbose {
        "debug".clone_into(&mut logging.level);
    }
    logging.init()?;

    info!(storage = %config.storage, "HealthLive CLI");
    let storage = Storage::new(&config.storage).await?;
    let store = storage.into_shared();

    match cli.command {
        Command::Reminders { action } => match action {
            ReminderCommand::List => commands::reminders::list(store).await?,
            ReminderCommand::Update { id, changes } => {
                commands::reminders::update(store, id.into(), changes.into_update()).await?;
            }
            ReminderCommand::Sync => commands::reminders::sync(store).await?,
        },
        Command::Metrics { action } => match action {
            MetricCommand::Add { entry } => {
                commands::metrics::add(store, &config, entry).await?;
            }
            MetricCommand::List { kind } => {
                commands::metrics::list(store, &config, kind.into()).await?;
            }
            MetricCommand::Alerts { kind } => {
                commands::metrics::alerts(store, &config, kind.into()).await?;
            }
        },
        Command::Compliance { action } => match action {
            ComplianceCommand::Show => commands::compliance::show(store).await,
            ComplianceCommand::Toggle { task_id, weekly } => {
                commands::compliance::toggle(store, &task_id, weekly).await?;
            }
        },
        Command::Plan { action } => match action {
            PlanCommand::Show => commands::plan::show(),
            PlanCommand::Share { completed } => commands::plan::share(&completed)?,
        },
        Command::Queue { action } => match action {
            QueueCommand::Pending => commands::queue::pending(store).await?,
            QueueCommand::Clear => commands::queue::clear(store).await?,
        },
    }

    Ok(())
}

impl ReminderChanges {
    fn into_update(self) -> ReminderPreferenceUpdate {
        let enabled = if self.enable {
            Some(true)
        } else if self.disable {
            Some(false)
        } else {
            None
        };
        ReminderPreferenceUpdate {
            title: self.title,
            description: self.description,
            start_time: self.start,
            end_time: self.end,
            frequency_minutes: self.every,
            sound: self.sound.map(Into::into),
            enabled,
        }
    }
}
