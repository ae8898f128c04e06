//! `salon` CLI — query appointment availability and validate bookings from
//! the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Print the candidate slot grid for the default business hours
//! salon grid
//!
//! # Hourly grid instead of the 15-minute default
//! salon grid --step 60
//!
//! # Available 60-minute slots for a therapist, bookings from a file
//! salon slots --date 2025-01-15 --therapist "Misaki Tanaka" --duration 60 -i bookings.json
//!
//! # Same query with bookings piped on stdin, JSON output
//! cat bookings.json | salon slots --date 2025-01-15 --therapist "Misaki Tanaka" --duration 60 --json
//!
//! # Validate a prospective booking; exits non-zero on conflict
//! salon check --date 2025-01-15 --time 14:00 --therapist "Misaki Tanaka" --duration 60 -i bookings.json
//! ```

use anyhow::{Context, Result};
use booking_engine::{available_slots, validate_no_conflict, Booking, BusinessHours};
use chrono::{NaiveDate, NaiveTime};
use clap::{Args, Parser, Subcommand};
use std::io;

#[derive(Parser)]
#[command(name = "salon", version, about = "Salon appointment availability CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Business-hours flags shared by every subcommand, defaulting to the
/// reference configuration.
#[derive(Args)]
struct HoursArgs {
    /// Opening hour (0-23)
    #[arg(long, default_value_t = 11)]
    open: u32,
    /// Closing hour (0-23)
    #[arg(long, default_value_t = 21)]
    close: u32,
    /// Slot granularity in minutes
    #[arg(long, default_value_t = 15)]
    step: u32,
}

impl HoursArgs {
    fn build(&self) -> Result<BusinessHours> {
        BusinessHours::new(self.open, self.close, self.step)
            .context("Invalid business-hours configuration")
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Print the candidate slot grid for one business day
    Grid {
        #[command(flatten)]
        hours: HoursArgs,
    },
    /// List available start times for a therapist on a given date
    Slots {
        /// Date to query (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Therapist name
        #[arg(long)]
        therapist: String,
        /// Requested appointment duration in minutes
        #[arg(long)]
        duration: u32,
        /// Bookings JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Emit the result as a JSON array instead of one label per line
        #[arg(long)]
        json: bool,
        #[command(flatten)]
        hours: HoursArgs,
    },
    /// Validate a prospective booking against existing bookings
    Check {
        /// Date of the prospective booking (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Start time of the prospective booking (HH:MM)
        #[arg(long)]
        time: String,
        /// Therapist name
        #[arg(long)]
        therapist: String,
        /// Duration of the prospective booking in minutes
        #[arg(long)]
        duration: u32,
        /// Bookings JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Grid { hours } => {
            let hours = hours.build()?;
            for slot in hours.slots() {
                println!("{}", slot.label());
            }
        }
        Commands::Slots {
            date,
            therapist,
            duration,
            input,
            json,
            hours,
        } => {
            let hours = hours.build()?;
            let date = parse_date(&date)?;
            let bookings = read_bookings(input.as_deref(), &therapist)?;

            let free = available_slots(&hours, date, duration, &bookings)
                .context("Failed to compute available slots")?;

            if json {
                println!("{}", serde_json::to_string(&free)?);
            } else {
                for label in free {
                    println!("{}", label);
                }
            }
        }
        Commands::Check {
            date,
            time,
            therapist,
            duration,
            input,
        } => {
            let date = parse_date(&date)?;
            let time = NaiveTime::parse_from_str(&time, "%H:%M")
                .with_context(|| format!("Invalid time (expected HH:MM): {}", time))?;
            let bookings = read_bookings(input.as_deref(), &therapist)?;

            let candidate = Booking::new(&therapist, date.and_time(time), duration);
            validate_no_conflict(&candidate, &bookings)
                .context("Booking rejected")?;

            println!(
                "{} is free for {} minutes at {} on {}",
                therapist,
                duration,
                time.format("%H:%M"),
                date
            );
        }
    }

    Ok(())
}

fn parse_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .with_context(|| format!("Invalid date (expected YYYY-MM-DD): {}", raw))
}

/// Read a bookings JSON array from a file or stdin and keep only the named
/// therapist's bookings. The engine re-applies the cancellation exclusion
/// itself, so the raw set can be passed through.
fn read_bookings(path: Option<&str>, therapist: &str) -> Result<Vec<Booking>> {
    let raw = match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path))?,
        None => io::read_to_string(io::stdin()).context("Failed to read from stdin")?,
    };
    let bookings: Vec<Booking> =
        serde_json::from_str(&raw).context("Failed to parse bookings JSON")?;
    Ok(bookings
        .into_iter()
        .filter(|b| b.therapist_name == therapist)
        .collect())
}
