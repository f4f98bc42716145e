use chrono::{NaiveDate, Utc};
use chrono_tz::Tz;
use clap::{Parser, Subcommand};
use flexi_logger::{Logger, LoggerHandle};
use serde_json::json;
use suntrack_base::{ALL_MANSIONS, compute_moon_info, compute_sun_info, mansion_for_date};
use suntrack_calendar::{AstronomicalConditions, CalendarError, JalaliDate, resolve_date, year_progress};
use suntrack_core::Observer;
use suntrack_rs::display::{
    format_angle, format_band, format_duration, format_lunisolar, format_mansion, format_phase, format_time,
    format_year_progress,
};
use suntrack_rs::{DisplaySnapshot, SnapshotRequest, UNDETERMINED, snapshot};
use suntrack_time::DEFAULT_ZONE;

#[derive(Parser)]
#[command(name = "suntrack", about = "Sun and Moon almanac with a lunisolar calendar")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Civil date (YYYY-MM-DD), default today in the display zone
    #[arg(long, global = true)]
    date: Option<String>,
    /// Observer latitude in degrees, north positive
    #[arg(long, global = true, default_value_t = Observer::kerman().latitude_deg, allow_negative_numbers = true)]
    lat: f64,
    /// Observer longitude in degrees, east positive
    #[arg(long, global = true, default_value_t = Observer::kerman().longitude_deg, allow_negative_numbers = true)]
    lon: f64,
    /// Observer elevation in meters
    #[arg(long, global = true, default_value_t = Observer::kerman().elevation_m, allow_negative_numbers = true)]
    elev: f64,
    /// IANA time zone for the civil day and displayed times
    #[arg(long, global = true, default_value_t = DEFAULT_ZONE.name().to_string())]
    zone: String,
    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,
    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Everything for one date
    Snapshot,
    /// Sunrise, sunset, solar noon and twilight bands
    Sun,
    /// Moonrise, moonset, phase, age and mansion
    Moon,
    /// Lunisolar date, Jalali date and year progress
    Calendar,
    /// Lunar mansion for the date, or the full table
    Mansion {
        /// List all 28 mansions
        #[arg(long)]
        list: bool,
    },
}

fn fail(msg: impl std::fmt::Display) -> ! {
    eprintln!("{msg}");
    std::process::exit(1);
}

fn setup_logging(level: &str) -> LoggerHandle {
    Logger::try_with_str(level)
        .and_then(|logger| logger.log_to_stderr().start())
        .unwrap_or_else(|e| fail(format!("Logger initialization failed with {e}")))
}

fn parse_zone(s: &str) -> Tz {
    s.parse::<Tz>()
        .unwrap_or_else(|_| fail(format!("Unknown time zone: {s}")))
}

fn parse_date(s: Option<&str>, zone: Tz) -> NaiveDate {
    match s {
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .unwrap_or_else(|e| fail(format!("Invalid date {s}: {e} (expected YYYY-MM-DD)"))),
        None => Utc::now().with_timezone(&zone).date_naive(),
    }
}

fn print_json(value: &impl serde::Serialize) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => fail(format!("Error: {e}")),
    }
}

fn or_exit<T, E: std::fmt::Display>(r: Result<T, E>) -> T {
    r.unwrap_or_else(|e| fail(format!("Error: {e}")))
}

fn main() {
    let cli = Cli::parse();
    let _logger = setup_logging(&cli.log_level);

    let zone = parse_zone(&cli.zone);
    let date = parse_date(cli.date.as_deref(), zone);
    let observer = Observer::new(cli.lat, cli.lon, cli.elev);

    match cli.command {
        Commands::Snapshot => {
            let request = SnapshotRequest::new(date, observer, zone).with_now(Utc::now());
            let snap = or_exit(snapshot(&request));
            let shown = DisplaySnapshot::from(&snap);
            if cli.json {
                print_json(&shown);
                return;
            }
            println!("{} ({}), {}", shown.date, shown.day_of_week, shown.zone);
            println!("  Location:      {}", shown.location);
            println!("  Jalali:        {}", shown.jalali_date);
            println!("  Lunisolar:     {}", shown.lunisolar_date);
            println!("  Year progress: {}", shown.year_progress);
            println!("Sun");
            println!("  Sunrise:       {}", shown.sunrise);
            println!("  Solar noon:    {} (altitude {})", shown.solar_noon, shown.solar_noon_altitude);
            println!("  Sunset:        {}", shown.sunset);
            println!("  Day length:    {}", shown.day_length);
            for band in &shown.bands {
                println!("  {:<22} {}", band.label, band.range);
            }
            println!("Moon");
            println!("  Moonrise:      {}", shown.moonrise);
            println!("  Moonset:       {}", shown.moonset);
            println!("  Phase:         {} at {}", shown.moon_phase, shown.phase_angle);
            println!("  Age:           {}", shown.moon_age);
            println!("  Mansion:       {}", shown.mansion);
            if let Some(live) = &shown.live {
                println!("Now ({})", live.time);
                println!("  Sky:           {}", live.sky_phase);
                println!("  Sun arc:       {}", live.sun_progress);
                println!("  Moon arc:      {}", live.moon_progress);
            }
        }

        Commands::Sun => {
            let sun = or_exit(compute_sun_info(date, &observer, zone));
            let bands: Vec<_> = sun.bands.iter().map(|b| format_band(b, zone)).collect();
            let noon_alt = sun
                .solar_noon_altitude_deg
                .map_or_else(|| UNDETERMINED.to_string(), |a| format!("{a:.2}°"));
            if cli.json {
                print_json(&json!({
                    "date": date.to_string(),
                    "sunrise": format_time(sun.sunrise, zone),
                    "sunset": format_time(sun.sunset, zone),
                    "solar_noon": format_time(sun.solar_noon, zone),
                    "solar_noon_altitude": noon_alt,
                    "day_length": format_duration(sun.day_length_days),
                    "bands": bands,
                }));
                return;
            }
            println!("Sunrise:    {}", format_time(sun.sunrise, zone));
            println!("Solar noon: {} (altitude {noon_alt})", format_time(sun.solar_noon, zone));
            println!("Sunset:     {}", format_time(sun.sunset, zone));
            println!("Day length: {}", format_duration(sun.day_length_days));
            for band in &bands {
                println!("{:<22} {}", band.label, band.range);
            }
        }

        Commands::Moon => {
            let moon = or_exit(compute_moon_info(date, &observer, zone));
            let phase = &moon.phase;
            let age = phase
                .age_days
                .map_or_else(|| UNDETERMINED.to_string(), |a| format!("{a:.1} days"));
            if cli.json {
                print_json(&json!({
                    "date": date.to_string(),
                    "moonrise": format_time(moon.moonrise, zone),
                    "moonset": format_time(moon.moonset, zone),
                    "phase": format_phase(phase),
                    "phase_angle": format_angle(phase.phase_angle_deg),
                    "age": age,
                    "mansion": format_mansion(phase.mansion.as_ref()),
                }));
                return;
            }
            println!("Moonrise: {}", format_time(moon.moonrise, zone));
            println!("Moonset:  {}", format_time(moon.moonset, zone));
            println!("Phase:    {} at {}", format_phase(phase), format_angle(phase.phase_angle_deg));
            println!("Age:      {age}");
            println!("Mansion:  {}", format_mansion(phase.mansion.as_ref()));
        }

        Commands::Calendar => {
            let conditions = AstronomicalConditions::new(observer, zone);
            let lunisolar = match resolve_date(date, &conditions) {
                Ok(d) => Some(d),
                Err(CalendarError::BeforeEpoch { .. }) => None,
                Err(e) => fail(format!("Error: {e}")),
            };
            let progress = year_progress(date).ok();
            let jalali = JalaliDate::from_gregorian(date);
            if cli.json {
                print_json(&json!({
                    "date": date.to_string(),
                    "lunisolar_date": format_lunisolar(lunisolar.as_ref()),
                    "jalali_date": jalali.to_string(),
                    "jalali_month": jalali.month_name(),
                    "year_progress": format_year_progress(progress.as_ref()),
                }));
                return;
            }
            println!("Gregorian: {} ({})", date.format("%Y-%m-%d"), date.format("%A"));
            println!("Jalali:    {jalali} ({})", jalali.month_name());
            println!("Lunisolar: {}", format_lunisolar(lunisolar.as_ref()));
            println!("Progress:  {}", format_year_progress(progress.as_ref()));
        }

        Commands::Mansion { list } => {
            if list {
                if cli.json {
                    let table: Vec<_> = ALL_MANSIONS
                        .iter()
                        .map(|m| json!({ "index": m.index(), "name": m.name() }))
                        .collect();
                    print_json(&table);
                    return;
                }
                for m in ALL_MANSIONS {
                    println!("{:>2}  {}", m.index(), m.name());
                }
                return;
            }
            let info = or_exit(mansion_for_date(date, &observer, zone));
            if cli.json {
                print_json(&json!({
                    "date": date.to_string(),
                    "mansion": format_mansion(info.as_ref()),
                    "ecliptic_longitude_deg": info.map(|m| m.ecliptic_longitude_deg),
                }));
                return;
            }
            match info {
                Some(m) => println!(
                    "{} (longitude {:.2}°)",
                    format_mansion(Some(&m)),
                    m.ecliptic_longitude_deg
                ),
                None => println!("{UNDETERMINED}"),
            }
        }
    }
}
