//! Preview binary configuration.
//!
//! Flags win over environment variables; a `.env` file is loaded first so
//! both can live there.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(
    name = "bookaspace-preview",
    about = "Render the booking page widgets for a venue and print the result"
)]
pub struct PreviewConfig {
    /// Venue fixture (JSON). Uses the built-in sample venue when omitted
    #[arg(long, env = "BOOKASPACE_VENUE")]
    pub venue: Option<PathBuf>,

    /// Date the availability strip starts from (defaults to the local date)
    #[arg(long, env = "BOOKASPACE_TODAY")]
    pub today: Option<NaiveDate>,

    /// Initial contents of the hours field
    #[arg(long, default_value = "")]
    pub initial_hours: String,

    /// Hours entries to replay, in order, as input events
    #[arg(long = "hours")]
    pub hours: Vec<String>,

    /// Clicks on the gallery "next" control
    #[arg(long, default_value_t = 0)]
    pub next: usize,

    /// Clicks on the gallery "previous" control, applied after `--next`
    #[arg(long, default_value_t = 0)]
    pub prev: usize,

    /// Trace every recomputation
    #[arg(short, long)]
    pub verbose: bool,
}

impl PreviewConfig {
    /// Load `.env` (if any) and parse the process arguments
    pub fn load() -> Self {
        dotenvy::dotenv().ok();
        Self::parse()
    }
}
