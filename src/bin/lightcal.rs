use anyhow::{Context, Result};
use lightcal::config::Config;
use lightcal::{cli, csvlog, feed, fetch, parse};
use std::env;
use std::fs;

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    let parsed = match cli::parse_args(&args[1..]) {
        Ok(parsed) => parsed,
        Err(message) => {
            eprintln!("{}", message);
            eprintln!();
            cli::print_help("lightcal");
            std::process::exit(2);
        }
    };

    if parsed.help {
        cli::print_help("lightcal");
        return Ok(());
    }

    init_logger();

    let config = Config::resolve(parsed.config.as_deref())?;

    let document = match &parsed.from_file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read document '{}'", path.display()))?,
        None => fetch::fetch_page(&config.url, config.fetch_timeout_secs).await?,
    };

    let records = parse::parse_schedule(&document);
    if records.is_empty() {
        // Zero records is a valid outcome; the feed just keeps whatever
        // the log already holds.
        log::warn!("No events found in the lighting schedule");
    }

    csvlog::append_records(&config.csv_path, &records)?;

    let accumulated = csvlog::load_records(&config.csv_path)?;
    let calendar = feed::build_calendar(&accumulated, &config);
    feed::save(&calendar, &config.feed_path)?;

    log::info!(
        "Run complete: {} record(s) parsed, {} in the feed",
        records.len(),
        accumulated.len()
    );
    Ok(())
}

fn init_logger() {
    let level = env::var("LIGHTCAL_LOG")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(log::LevelFilter::Info);

    let _ = simplelog::TermLogger::init(
        level,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
}
