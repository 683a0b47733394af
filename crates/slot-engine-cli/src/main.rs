//! `slots` CLI: generate, filter, and summarize appointment slots.
//!
//! ## Usage
//!
//! ```sh
//! # Slots for a single window (JSON on stdout)
//! slots generate --start 09:00 --end 17:00 --duration 45 --buffer 15
//!
//! # Same, one label per line
//! slots generate --start 09:00 --end 12:00 --duration 30 --labels
//!
//! # Slots a schedule draft produces on a given date
//! slots day --draft schedule.json --date 2026-03-16
//!
//! # Bookable slots for a date, minus booked and already-ended ones
//! slots available --draft schedule.json --date 2026-03-16 --booked booked.json
//!
//! # Same, starting from the API's slot list for that date
//! slots available --slots date-slots.json --date 2026-03-16 --now 2026-03-16T09:15
//!
//! # Per-day overview and the save request body
//! slots summary --draft schedule.json
//! slots payload --draft schedule.json -o payload.json
//! ```
//!
//! Logs go to stderr. Set `RUST_LOG` or pass `-v` for more detail.

use std::io::{self, Read};

use anyhow::{Context, Result};
use chrono::{Datelike, Local, NaiveDate, NaiveDateTime};
use clap::{Parser, Subcommand};
use serde::Serialize;
use slot_engine::{
    check_target_date, filter_available, generate_slots, BookedSlotSet, BookedSlotsResponse,
    DateRelation, DayName, RangeLabel, ScheduleDraft, TimeOfDay,
};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "slots", version, about = "Appointment slot generator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate slots for one working window
    Generate {
        /// Window start, 24-hour HH:MM
        #[arg(long)]
        start: String,
        /// Window end, 24-hour HH:MM
        #[arg(long)]
        end: String,
        /// Slot length in minutes
        #[arg(long)]
        duration: u32,
        /// Minutes between consecutive slots
        #[arg(long, default_value_t = 0)]
        buffer: u32,
        /// Print one label per line instead of JSON
        #[arg(long)]
        labels: bool,
    },
    /// Slots a schedule draft produces on a calendar date
    Day {
        /// Schedule draft JSON file (reads from stdin if omitted or "-")
        #[arg(long)]
        draft: Option<String>,
        /// Calendar date, YYYY-MM-DD
        #[arg(long)]
        date: String,
        /// Print one label per line instead of JSON
        #[arg(long)]
        labels: bool,
    },
    /// Bookable slots for a date: drops booked slots and, for today, ended ones
    Available {
        /// Schedule draft JSON file ("-" for stdin)
        #[arg(long, required_unless_present = "slots", conflicts_with = "slots")]
        draft: Option<String>,
        /// The API's slot list for the date (`{"slots": [...]}`); booked entries are dropped
        #[arg(long)]
        slots: Option<String>,
        /// Calendar date, YYYY-MM-DD
        #[arg(long)]
        date: String,
        /// Booked slots response for the date (`{"slots": [...]}`)
        #[arg(long)]
        booked: Option<String>,
        /// Current local time, YYYY-MM-DDTHH:MM[:SS] (defaults to the system clock)
        #[arg(long)]
        now: Option<String>,
        /// Print one label per line instead of JSON
        #[arg(long)]
        labels: bool,
    },
    /// Per-day slot counts for a schedule draft
    Summary {
        /// Schedule draft JSON file (reads from stdin if omitted or "-")
        #[arg(long)]
        draft: Option<String>,
    },
    /// Build the schedule save request body
    Payload {
        /// Schedule draft JSON file (reads from stdin if omitted or "-")
        #[arg(long)]
        draft: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Generate {
            start,
            end,
            duration,
            buffer,
            labels,
        } => {
            let start = TimeOfDay::parse_24h(&start).context("Invalid --start")?;
            let end = TimeOfDay::parse_24h(&end).context("Invalid --end")?;
            let slots = generate_slots(start, end, duration, buffer);
            print_slots(&slots, labels)?;
        }
        Commands::Day {
            draft,
            date,
            labels,
        } => {
            let draft = load_draft(draft.as_deref())?;
            let date = parse_date(&date)?;
            let slots = draft.slots_on(date);
            info!(%date, day = %DayName::from(date.weekday()), count = slots.len(), "day slots");
            print_slots(&slots, labels)?;
        }
        Commands::Available {
            draft,
            slots,
            date,
            booked,
            now,
            labels,
        } => {
            let date = parse_date(&date)?;
            let now = match now.as_deref() {
                Some(raw) => parse_now(raw)?,
                None => Local::now().naive_local(),
            };
            let relation = check_target_date(date, now.date())
                .context("Please select today or a future date")?;
            debug!(?relation, "target date accepted");

            let booked = match booked.as_deref() {
                Some(path) => {
                    let json = read_input(Some(path))?;
                    let response = BookedSlotsResponse::from_json(&json)
                        .context("Failed to parse booked slots")?;
                    BookedSlotSet::from_response(&response)
                }
                None => BookedSlotSet::new(),
            };

            match slots.as_deref() {
                Some(path) => {
                    let json = read_input(Some(path))?;
                    let response = BookedSlotsResponse::from_json(&json)
                        .context("Failed to parse slot list")?;
                    let ranges = response.available_ranges();
                    let available = filter_available(&ranges, &booked, date, now);
                    print_slots(&available, labels)?;
                }
                None => {
                    let draft = load_draft(draft.as_deref())?;
                    let candidates = draft.slots_on(date);
                    let available = filter_available(&candidates, &booked, date, now);
                    if relation == DateRelation::Today && available.is_empty() {
                        info!("no slots left today");
                    }
                    print_slots(&available, labels)?;
                }
            }
        }
        Commands::Summary { draft } => {
            let draft = load_draft(draft.as_deref())?;
            for window in &draft.working_hours {
                println!("{}: {}", window.day, draft.day_status(window.day));
            }
            let total = draft.total_slots();
            println!("Total: {} slot{}", total, if total == 1 { "" } else { "s" });
        }
        Commands::Payload { draft, output } => {
            let draft = load_draft(draft.as_deref())?;
            let payload = draft
                .to_payload()
                .context("Failed to build schedule payload")?;
            let json = serde_json::to_string_pretty(&payload)?;
            write_output(output.as_deref(), &json)?;
        }
    }

    Ok(())
}

/// Route logs to stderr so stdout stays machine-readable.
fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn parse_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}': expected YYYY-MM-DD", raw))
}

fn parse_now(raw: &str) -> Result<NaiveDateTime> {
    let raw = raw.trim();
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M"))
        .with_context(|| format!("Invalid --now '{}': expected YYYY-MM-DDTHH:MM[:SS]", raw))
}

fn load_draft(path: Option<&str>) -> Result<ScheduleDraft> {
    let json = read_input(path)?;
    ScheduleDraft::from_json(&json).context("Failed to parse schedule draft")
}

fn print_slots<T>(slots: &[T], labels: bool) -> Result<()>
where
    T: RangeLabel + Serialize,
{
    if labels {
        for slot in slots {
            println!("{}", slot.range_label());
        }
    } else {
        println!("{}", serde_json::to_string_pretty(slots)?);
    }
    Ok(())
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) if path != "-" => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        _ => {
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
            println!("{}", content);
        }
    }
    Ok(())
}
