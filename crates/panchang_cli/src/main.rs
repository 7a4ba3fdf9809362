use std::path::PathBuf;

use chrono::{FixedOffset, NaiveDate, Utc};
use clap::{Parser, Subcommand};
use log::{debug, info};
use panchang_core::AyanamshaSystem;
use panchang_search::{PanchangConfig, PanchangResult, masa_for_moment, panchang_for_civil};
use panchang_time::{Moment, parse_civil};
use panchang_vedic_base::{
    GeoPosition, GulikaTable, MuhurtaKind, SiderealCalculator, elements_at_jd, sun_events,
};

#[derive(Parser)]
#[command(name = "panchang", about = "Panchang calculation CLI")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Args)]
struct Place {
    /// Latitude in degrees, north positive (default: Srirangam)
    #[arg(long, allow_hyphen_values = true)]
    lat: Option<f64>,
    /// Longitude in degrees, east positive
    #[arg(long, allow_hyphen_values = true)]
    lon: Option<f64>,
    /// Elevation above sea level in metres
    #[arg(long)]
    elev: Option<f64>,
    /// UTC offset in minutes for civil dates (default 330, IST)
    #[arg(long, allow_hyphen_values = true)]
    offset: Option<i32>,
    /// JSON configuration file; flags override its fields
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Full panchang for a moment and place
    Panchang {
        /// Civil date-time (RFC 3339, YYYY-MM-DDThh:mm[:ss] or YYYY-MM-DD); default now
        #[arg(long)]
        date: Option<String>,
        #[command(flatten)]
        place: Place,
        /// Use the collision-prone legacy Gulika table
        #[arg(long)]
        legacy_gulika: bool,
        /// Time sunrise/sunset by the upper limb instead of the disc centre
        #[arg(long)]
        upper_limb: bool,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Sunrise and sunset for a civil date
    Sun {
        /// Civil date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        #[command(flatten)]
        place: Place,
        /// Time by the upper limb instead of the disc centre
        #[arg(long)]
        upper_limb: bool,
    },
    /// Element indices at a Julian Day (UT), without boundaries
    Elements {
        /// Julian Day, UT
        #[arg(long)]
        jd: f64,
        /// Ayanamsha: lahiri or true-lahiri (default)
        #[arg(long, default_value = "true-lahiri")]
        ayanamsha: String,
    },
    /// Amanta lunar month containing a moment
    Masa {
        /// Civil date-time; default now
        #[arg(long)]
        date: Option<String>,
        #[command(flatten)]
        place: Place,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .try_init();
}

fn exit_with(msg: impl std::fmt::Display) -> ! {
    eprintln!("Error: {msg}");
    std::process::exit(1);
}

fn require_aya_system(name: &str) -> AyanamshaSystem {
    match name.to_lowercase().as_str() {
        "lahiri" => AyanamshaSystem::Lahiri,
        "true-lahiri" | "truelahiri" => AyanamshaSystem::TrueLahiri,
        _ => exit_with(format!("unknown ayanamsha '{name}' (lahiri, true-lahiri)")),
    }
}

/// Config from `--config` with place flags applied on top.
fn load_config(place: &Place) -> PanchangConfig {
    let mut config = match &place.config {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .unwrap_or_else(|e| exit_with(format!("{}: {e}", path.display())));
            info!("loaded config from {}", path.display());
            PanchangConfig::from_json_str(&json).unwrap_or_else(|e| exit_with(e))
        }
        None => PanchangConfig::default(),
    };
    if place.lat.is_some() || place.lon.is_some() || place.elev.is_some() {
        let loc = config.location;
        config.location = GeoPosition::new(
            place.lat.unwrap_or(loc.latitude_deg),
            place.lon.unwrap_or(loc.longitude_deg),
            place.elev.unwrap_or(loc.elevation_m),
        )
        .unwrap_or_else(|e| exit_with(e));
    }
    if let Some(offset) = place.offset {
        config.utc_offset_minutes = offset;
    }
    config.validate().unwrap_or_else(|e| exit_with(e));
    debug!(
        "location {:.4}, {:.4}, {} m; offset {} min",
        config.location.latitude_deg,
        config.location.longitude_deg,
        config.location.elevation_m,
        config.utc_offset_minutes
    );
    config
}

fn civil_or_now(date: Option<&str>, offset: FixedOffset) -> chrono::DateTime<FixedOffset> {
    match date {
        Some(s) => parse_civil(s, offset).unwrap_or_else(|e| exit_with(e)),
        None => Utc::now().with_timezone(&offset),
    }
}

fn fmt_moment(m: Moment, offset: FixedOffset) -> String {
    match m.to_civil(offset) {
        Ok(dt) => dt.format("%Y-%m-%d %H:%M:%S").to_string(),
        Err(_) => format!("JD {:.6}", m.jd_ut()),
    }
}

fn print_panchang(p: &PanchangResult, offset: FixedOffset) {
    let t = |m: Moment| fmt_moment(m, offset);
    println!("Panchang for {} ({})", p.civil.to_rfc3339(), p.vaar.name());
    println!(
        "Location: {:.4} deg, {:.4} deg, {} m",
        p.location.latitude_deg, p.location.longitude_deg, p.location.elevation_m
    );
    println!(
        "Ayanamsha: {} {:.4} deg | Sun {:.4} deg | Moon {:.4} deg",
        p.ayanamsha_system.name(),
        p.ayanamsa_deg,
        p.sun_sidereal_deg,
        p.moon_sidereal_deg
    );
    println!();
    println!(
        "Tithi:     {} (index {}, {} paksha)",
        p.tithi.tithi.name(),
        p.tithi.index,
        p.tithi.paksha.name()
    );
    println!("  {} -> {}", t(p.tithi.start), t(p.tithi.end));
    println!(
        "Nakshatra: {} (index {}) - Pada {}",
        p.nakshatra.nakshatra.name(),
        p.nakshatra.index,
        p.nakshatra.pada
    );
    println!("  {} -> {}", t(p.nakshatra.start), t(p.nakshatra.end));
    println!("Yoga:      {} (index {})", p.yoga.yoga.name(), p.yoga.index);
    println!("  {} -> {}", t(p.yoga.start), t(p.yoga.end));
    println!("Karana:    {} (index {})", p.karana.karana.name(), p.karana.index);
    println!("  {} -> {}", t(p.karana.start), t(p.karana.end));
    println!(
        "Rashi:     {} ({:.4} deg in rashi)",
        p.rashi.rashi.name(),
        p.rashi.degrees_in_rashi
    );
    println!("  {} -> {}", t(p.rashi.start), t(p.rashi.end));
    if let Some(masa) = &p.masa {
        let adhika_str = if masa.adhika { " (Adhika)" } else { "" };
        println!("Masa:      {}{}", masa.masa.name(), adhika_str);
        println!("  {} -> {}", t(masa.start), t(masa.end));
    }
    println!();
    match (&p.sun_events, &p.muhurta) {
        (Some(ev), Some(m)) => {
            println!("Sunrise: {}", t(ev.sunrise));
            println!("Sunset:  {}", t(ev.sunset));
            for kind in [MuhurtaKind::RahuKaal, MuhurtaKind::Yamaganda, MuhurtaKind::Gulika] {
                let w = m.get(kind);
                println!(
                    "{:<10} {} -> {} (segment {})",
                    format!("{}:", kind.name()),
                    t(w.start),
                    t(w.end),
                    w.segment
                );
            }
        }
        _ => {
            if let Some(absence) = p.sun_absence {
                println!("{}", absence.description());
            }
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Panchang {
            date,
            place,
            legacy_gulika,
            upper_limb,
            json,
        } => {
            let mut config = load_config(&place);
            if legacy_gulika {
                config.gulika_table = GulikaTable::LegacySource;
            }
            if upper_limb {
                config.riseset = config.riseset.upper_limb();
            }
            let offset = config.utc_offset().unwrap_or_else(|e| exit_with(e));
            let civil = civil_or_now(date.as_deref(), offset);
            let eph = config.ephemeris();
            match panchang_for_civil(&eph, &civil, &config.location, &config) {
                Ok(p) if json => match serde_json::to_string_pretty(&p) {
                    Ok(s) => println!("{s}"),
                    Err(e) => exit_with(e),
                },
                Ok(p) => print_panchang(&p, offset),
                Err(e) => exit_with(e),
            }
        }

        Commands::Sun {
            date,
            place,
            upper_limb,
        } => {
            let mut config = load_config(&place);
            if upper_limb {
                config.riseset = config.riseset.upper_limb();
            }
            let offset = config.utc_offset().unwrap_or_else(|e| exit_with(e));
            let day = NaiveDate::parse_from_str(&date, "%Y-%m-%d")
                .unwrap_or_else(|e| exit_with(format!("{date}: {e}")));
            let eph = config.ephemeris();
            match sun_events(&eph, day, &config.location, &config.riseset) {
                Ok(ev) => {
                    println!("Sunrise: {}", fmt_moment(ev.sunrise, offset));
                    println!("Sunset:  {}", fmt_moment(ev.sunset, offset));
                    let hours = ev.day_length_days() * 24.0;
                    println!("Day length: {:.0}h {:02.0}m", hours.trunc(), hours.fract() * 60.0);
                }
                Err(e) => exit_with(e),
            }
        }

        Commands::Elements { jd, ayanamsha } => {
            let config = PanchangConfig {
                ayanamsha_system: require_aya_system(&ayanamsha),
                ..PanchangConfig::default()
            };
            let eph = config.ephemeris();
            let calc = SiderealCalculator::new(&eph);
            match elements_at_jd(&calc, jd) {
                Ok((pos, snap)) => {
                    println!("Ayanamsha: {:.4} deg", pos.ayanamsa_deg);
                    println!("Sun:  {:.4} deg", pos.sun_deg);
                    println!("Moon: {:.4} deg", pos.moon_deg);
                    println!(
                        "Tithi: {} (index {}, {:.1}% elapsed)",
                        snap.tithi.tithi.name(),
                        snap.tithi.index,
                        snap.tithi.fraction * 100.0
                    );
                    println!(
                        "Nakshatra: {} (index {}) - Pada {}",
                        snap.nakshatra.nakshatra.name(),
                        snap.nakshatra.index,
                        snap.nakshatra.pada
                    );
                    println!("Yoga: {} (index {})", snap.yoga.yoga.name(), snap.yoga.index);
                    println!(
                        "Karana: {} (index {})",
                        snap.karana.karana.name(),
                        snap.karana.index
                    );
                    println!(
                        "Rashi: {} ({:.4} deg in rashi)",
                        snap.rashi.rashi.name(),
                        snap.rashi.degrees_in_rashi
                    );
                }
                Err(e) => exit_with(e),
            }
        }

        Commands::Masa { date, place } => {
            let config = load_config(&place);
            let offset = config.utc_offset().unwrap_or_else(|e| exit_with(e));
            let civil = civil_or_now(date.as_deref(), offset);
            let eph = config.ephemeris();
            let calc = SiderealCalculator::new(&eph);
            let jd = Moment::from_civil(&civil).jd_ut();
            match masa_for_moment(&calc, jd, &config.transition) {
                Ok(info) => {
                    let adhika_str = if info.adhika { " (Adhika)" } else { "" };
                    println!("Masa: {}{}", info.masa.name(), adhika_str);
                    println!("  Start: {}", fmt_moment(info.start, offset));
                    println!("  End:   {}", fmt_moment(info.end, offset));
                }
                Err(e) => exit_with(e),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn negative_coordinates_parse() {
        let cli = Cli::try_parse_from([
            "panchang", "sun", "--date", "2025-06-21", "--lat", "-33.87", "--lon", "151.21",
            "--offset", "600",
        ])
        .unwrap();
        match cli.command {
            Commands::Sun { place, .. } => {
                assert_eq!(place.lat, Some(-33.87));
                assert_eq!(place.offset, Some(600));
            }
            _ => panic!("expected sun"),
        }
    }

    #[test]
    fn ayanamsha_names() {
        assert_eq!(require_aya_system("Lahiri"), AyanamshaSystem::Lahiri);
        assert_eq!(require_aya_system("true-lahiri"), AyanamshaSystem::TrueLahiri);
    }
}
