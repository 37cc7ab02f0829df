//! Shared command-line interface logic, like argument parsing and help.
use std::path::PathBuf;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CliArgs {
    pub config: Option<PathBuf>,
    pub from_file: Option<PathBuf>,
    pub help: bool,
}

/// Parse command-line arguments (binary name excluded). Unknown flags
/// and missing flag values are reported as plain error strings for the
/// binary to print alongside the usage text.
pub fn parse_args(args: &[String]) -> Result<CliArgs, String> {
    let mut parsed = CliArgs::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-h" | "--help" | "help" => parsed.help = true,
            "-c" | "--config" => {
                let value = iter
                    .next()
                    .ok_or_else(|| format!("Missing value for {}", arg))?;
                parsed.config = Some(PathBuf::from(value));
            }
            "--from-file" => {
                let value = iter
                    .next()
                    .ok_or_else(|| format!("Missing value for {}", arg))?;
                parsed.from_file = Some(PathBuf::from(value));
            }
            other => return Err(format!("Unknown argument: {}", other)),
        }
    }

    Ok(parsed)
}

pub fn print_help(binary_name: &str) {
    println!(
        "Lightcal v{} - SF City Hall lighting schedule scraper",
        env!("CARGO_PKG_VERSION")
    );
    println!();
    println!("Fetches the City Hall page, parses the lighting schedule, appends new");
    println!("records to the CSV log, and regenerates the iCalendar feed.");
    println!();
    println!("USAGE:");
    println!("    {} [--config <path>] [--from-file <page.html>]", binary_name);
    println!("    {} --help", binary_name);
    println!();
    println!("OPTIONS:");
    println!("    -c, --config <path>      Use a specific config file (TOML).");
    println!("    --from-file <path>       Parse a saved document instead of fetching.");
    println!("    -h, --help               Show this help message.");
    println!();
    println!("ENVIRONMENT:");
    println!("    LIGHTCAL_LOG             Log level (error, warn, info, debug, trace).");
    println!();
    println!("OUTPUT FILES (configurable):");
    println!("    lighting_schedule.csv    Append-only deduplicated record log.");
    println!("    calendar.ics             Subscribable feed built from the full log.");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_no_args() {
        let parsed = parse_args(&[]).unwrap();
        assert_eq!(parsed, CliArgs::default());
    }

    #[test]
    fn test_config_and_from_file() {
        let parsed = parse_args(&args(&["--config", "a.toml", "--from-file", "page.html"])).unwrap();
        assert_eq!(parsed.config, Some(PathBuf::from("a.toml")));
        assert_eq!(parsed.from_file, Some(PathBuf::from("page.html")));
    }

    #[test]
    fn test_missing_value_is_an_error() {
        assert!(parse_args(&args(&["--config"])).is_err());
    }

    #[test]
    fn test_unknown_flag_is_an_error() {
        assert!(parse_args(&args(&["--bogus"])).is_err());
    }
}
