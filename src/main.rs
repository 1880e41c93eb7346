//! strava-wrapper - A command line tool for the Strava v3 API.
//!
//! This is the entry point of the tool, which either creates a manual activity
//! or fetches a selection of resources of the authenticated athlete and prints
//! them.
//!
//! # Configuration
//!
//! The access token is read from an optional YAML file given with `--config`:
//!
//! ```yaml
//! access_token: "your-access-token"
//! base_url: "https://www.strava.com/api/v3"
//! ```
//!
//! Environment variables prefixed with `STRAVA_` override the file:
//!
//! ```bash
//! export STRAVA_ACCESS_TOKEN="your-access-token"
//! ```
//!
//! # Usage
//!
//! ```bash
//! # Athlete profile, statistics and latest activities as JSON
//! strava-wrapper --athlete --stats --activities
//!
//! # Club details as a debug dump
//! strava-wrapper --club 1 --json false
//!
//! # Create a manual activity
//! strava-wrapper --create-activity --activity-name "Morning Ride" --activity-type Ride \
//!     --sport-type Ride --start-date-local 2025-08-12T07:00:00Z --elapsed-time 3600
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG` - Controls logging level (default: `info`)
//! - `STRAVA_ACCESS_TOKEN` - OAuth access token
//! - `STRAVA_BASE_URL` - Base URL of the API

use std::process::ExitCode;

use anyhow::Context;
use clap::{ArgAction, Parser};
use env_logger::Env;
use log::{error, info};

use strava_wrapper::{
    config::Config,
    output::{OutputFormat, render},
    report::{Selection, collect},
    strava::{NewActivity, StravaApi, StravaClient},
};

/// Command-line arguments.
///
/// Identifiers set to `0` are treated as absent.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the YAML configuration file
    #[arg(short, long)]
    config: Option<String>,

    /// Create a new activity instead of fetching resources
    #[arg(long)]
    create_activity: bool,

    /// Activity name
    #[arg(long, default_value = "")]
    activity_name: String,

    /// Activity type (e.g., Ride)
    #[arg(long, default_value = "")]
    activity_type: String,

    /// Sport type (e.g., MountainBikeRide)
    #[arg(long, default_value = "")]
    sport_type: String,

    /// Start date local (e.g., 2025-08-12T07:00:00Z)
    #[arg(long, default_value = "")]
    start_date_local: String,

    /// Elapsed time in seconds
    #[arg(long, default_value_t = 0)]
    elapsed_time: u64,

    /// Description
    #[arg(long, default_value = "")]
    description: String,

    /// Distance in meters
    #[arg(long, default_value_t = 0.0)]
    distance: f64,

    /// Trainer (0 or 1)
    #[arg(long, default_value_t = 0, value_parser = clap::value_parser!(u8).range(0..=1))]
    trainer: u8,

    /// Commute (0 or 1)
    #[arg(long, default_value_t = 0, value_parser = clap::value_parser!(u8).range(0..=1))]
    commute: u8,

    /// Fetch athlete profile
    #[arg(long)]
    athlete: bool,

    /// Fetch athlete stats
    #[arg(long)]
    stats: bool,

    /// Fetch recent activities
    #[arg(long)]
    activities: bool,

    /// Fetch segments in the San Francisco area
    #[arg(long)]
    segments: bool,

    /// Fetch club by ID
    #[arg(long)]
    club: Option<i64>,

    /// Fetch first bike's gear details
    #[arg(long)]
    gear: bool,

    /// Fetch public info for this athlete ID
    #[arg(long)]
    athlete_id: Option<i64>,

    /// Output as JSON, otherwise as a debug dump
    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    json: bool,
}

impl Args {
    /// Build the activity to create from the creation flags.
    fn new_activity(&self) -> anyhow::Result<NewActivity> {
        if self.activity_name.is_empty()
            || self.activity_type.is_empty()
            || self.sport_type.is_empty()
            || self.start_date_local.is_empty()
            || self.elapsed_time == 0
        {
            anyhow::bail!(
                "Missing required fields for activity creation. Required: --activity-name, --activity-type, --sport-type, --start-date-local, --elapsed-time"
            );
        }

        Ok(NewActivity::new(
            &self.activity_name,
            &self.sport_type,
            &self.start_date_local,
            self.elapsed_time,
        )
        .with_activity_type(&self.activity_type)
        .with_description(&self.description)
        .with_distance(self.distance)
        .with_trainer(self.trainer == 1)
        .with_commute(self.commute == 1))
    }

    fn selection(&self) -> Selection {
        Selection {
            athlete_id: self.athlete_id.filter(|id| *id != 0),
            athlete: self.athlete,
            stats: self.stats,
            gear: self.gear,
            activities: self.activities,
            segments: self.segments,
            club: self.club.filter(|id| *id != 0),
        }
    }
}

/// Execute the command described by `args` and return the text to print.
async fn run<A: StravaApi>(api: &A, args: &Args) -> anyhow::Result<String> {
    let format = OutputFormat::from_json_flag(args.json);

    if args.create_activity {
        let new_activity = args.new_activity()?;
        let activity = api
            .create_activity(&new_activity)
            .await
            .context("Error creating activity")?;
        info!("Created activity {}", &activity.summary);
        return Ok(render(&activity, format)?);
    }

    let report = collect(api, &args.selection())
        .await
        .context("Error getting athlete")?;
    Ok(render(&report, format)?)
}

#[tokio::main]
async fn main() -> ExitCode {
    // Put logger at info level by default
    let env = Env::default().filter_or("RUST_LOG", "info");
    env_logger::init_from_env(env);

    info!("Starting strava-wrapper {}...", env!("CARGO_PKG_VERSION"));

    let args = Args::parse();

    let config = match Config::load(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Failed to load config: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let client = match StravaClient::with_token(&config.base_url, &config.access_token) {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to initialize client: {:#}", e);
            return ExitCode::FAILURE;
        }
    };

    match run(&client, &args).await {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}
