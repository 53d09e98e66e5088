use chrono::{FixedOffset, NaiveDate, NaiveTime, Utc};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use miqat_core::GeoCoordinate;
use miqat_dhikr::DuaDeck;
use miqat_qibla::qibla_bearing;
use miqat_times::{
    AsrJuristic, CalculationMethod, HijriDate, compute_schedule, next_event, remaining_hhmm,
};

#[derive(Parser)]
#[command(name = "miqat", about = "Prayer times, Qibla, and Hijri calendar CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Prayer times for a date and location
    Times {
        /// Latitude in degrees, north positive
        #[arg(long)]
        lat: f64,
        /// Longitude in degrees, east positive
        #[arg(long)]
        lon: f64,
        /// Date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// UTC offset in minutes (e.g. 180 for UTC+3)
        #[arg(long, default_value = "0")]
        tz_min: i32,
        /// Method: mwl, isna, egyptian, umm-al-qura, karachi
        #[arg(long, default_value = "mwl")]
        method: String,
        /// Use the Hanafi (factor-2) Asr shadow
        #[arg(long)]
        hanafi: bool,
    },
    /// Next prayer and countdown
    Next {
        /// Latitude in degrees
        #[arg(long)]
        lat: f64,
        /// Longitude in degrees
        #[arg(long)]
        lon: f64,
        /// Date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Local wall-clock time (HH:MM); defaults to now
        #[arg(long)]
        at: Option<String>,
        /// UTC offset in minutes
        #[arg(long, default_value = "0")]
        tz_min: i32,
        /// Method: mwl, isna, egyptian, umm-al-qura, karachi
        #[arg(long, default_value = "mwl")]
        method: String,
        /// Use the Hanafi (factor-2) Asr shadow
        #[arg(long)]
        hanafi: bool,
    },
    /// Qibla bearing from a location
    Qibla {
        /// Latitude in degrees
        #[arg(long)]
        lat: f64,
        /// Longitude in degrees
        #[arg(long)]
        lon: f64,
    },
    /// Hijri date for a Gregorian date
    Hijri {
        /// Date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
    },
    /// Show a supplication by seed
    Dua {
        /// Selection seed (e.g. a day number)
        #[arg(long, default_value = "0")]
        seed: u64,
    },
}

fn parse_date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap_or_else(|e| {
        eprintln!("Invalid date {s:?}: {e}");
        std::process::exit(1);
    })
}

fn parse_method(s: &str) -> CalculationMethod {
    match s {
        "mwl" => CalculationMethod::MuslimWorldLeague,
        "isna" => CalculationMethod::Isna,
        "egyptian" => CalculationMethod::Egyptian,
        "umm-al-qura" => CalculationMethod::UmmAlQura,
        "karachi" => CalculationMethod::Karachi,
        _ => {
            eprintln!("Unknown method: {s}. Use mwl, isna, egyptian, umm-al-qura, or karachi.");
            std::process::exit(1);
        }
    }
}

fn parse_offset(tz_min: i32) -> FixedOffset {
    FixedOffset::east_opt(tz_min * 60).unwrap_or_else(|| {
        eprintln!("UTC offset out of range: {tz_min} minutes");
        std::process::exit(1);
    })
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Times {
            lat,
            lon,
            date,
            tz_min,
            method,
            hanafi,
        } => {
            let coord = GeoCoordinate::new(lat, lon);
            let day = parse_date(&date);
            let offset = parse_offset(tz_min);
            let asr = if hanafi {
                AsrJuristic::Hanafi
            } else {
                AsrJuristic::Standard
            };
            match compute_schedule(&coord, day, offset, parse_method(&method), asr) {
                Ok(schedule) => {
                    if let Some(hijri) = HijriDate::from_gregorian(day) {
                        println!("{} ({})", day.format("%A, %-d %B %Y"), hijri.label());
                    }
                    for event in &schedule.events {
                        println!("{:<8} {}", event.prayer.name(), event.clock_12h());
                    }
                }
                Err(e) => {
                    eprintln!("Error: {e}");
                    std::process::exit(1);
                }
            }
        }

        Commands::Next {
            lat,
            lon,
            date,
            at,
            tz_min,
            method,
            hanafi,
        } => {
            let coord = GeoCoordinate::new(lat, lon);
            let day = parse_date(&date);
            let offset = parse_offset(tz_min);
            let asr = if hanafi {
                AsrJuristic::Hanafi
            } else {
                AsrJuristic::Standard
            };
            let now = match at {
                Some(s) => {
                    let t = NaiveTime::parse_from_str(&s, "%H:%M").unwrap_or_else(|e| {
                        eprintln!("Invalid time {s:?}: {e}");
                        std::process::exit(1);
                    });
                    match day.and_time(t).and_local_timezone(offset) {
                        chrono::LocalResult::Single(dt) => dt,
                        _ => {
                            eprintln!("Ambiguous local time {s:?}");
                            std::process::exit(1);
                        }
                    }
                }
                None => Utc::now().with_timezone(&offset),
            };
            match compute_schedule(&coord, day, offset, parse_method(&method), asr) {
                Ok(schedule) => match next_event(&schedule.events, day, &now) {
                    Some(next) => {
                        let when = match next.date {
                            Some(d) => format!("{} {}", d.format("%-d %B"), next.clock_12h()),
                            None => next.clock_12h(),
                        };
                        println!("Next: {} at {}", next.prayer.name(), when);
                        println!("In:   {}", remaining_hhmm(&next, day, &now));
                    }
                    None => println!("No upcoming prayer found"),
                },
                Err(e) => {
                    eprintln!("Error: {e}");
                    std::process::exit(1);
                }
            }
        }

        Commands::Qibla { lat, lon } => {
            let bearing = qibla_bearing(&GeoCoordinate::new(lat, lon));
            println!("Qibla bearing: {bearing:.2} deg from true north");
        }

        Commands::Hijri { date } => {
            let day = parse_date(&date);
            match HijriDate::from_gregorian(day) {
                Some(hijri) => println!("{}", hijri.label()),
                None => {
                    eprintln!("Date is before the Hijri epoch");
                    std::process::exit(1);
                }
            }
        }

        Commands::Dua { seed } => {
            let dua = DuaDeck::builtin().pick(seed);
            println!("{}", dua.arabic);
            println!("{}", dua.translation);
            println!("  - {}", dua.source);
        }
    }
}
