use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use dioxus_dom_props::ValidationConfig;
use tracing_subscriber::EnvFilter;

mod input;
mod report;

/// Check element props captured from an app against the DOM property registry.
///
/// The input is a JSON array of `{ "tag": "div", "props": { .. }, "debug_id": ".." }` objects. Event listeners are
/// written as JSON objects.
#[derive(Parser, Debug)]
#[clap(name = "dx-props-check", version)]
struct Cli {
    /// The JSON file with the captured elements
    file: PathBuf,

    /// Validate without an event registry, the way the server renderer does
    #[clap(long)]
    server: bool,

    /// Skip checking `aria-*` properties
    #[clap(long)]
    no_aria: bool,

    /// Skip warning about explicit null values on form controls
    #[clap(long)]
    no_null_values: bool,

    /// Print one JSON object per element instead of a report
    #[clap(long)]
    json: bool,

    /// Use verbose output (repeat for more)
    #[clap(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .without_time()
        .compact()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .init();

    let json = std::fs::read_to_string(&cli.file)
        .with_context(|| format!("failed to read {}", cli.file.display()))?;
    let elements = input::parse_elements(&json)
        .with_context(|| format!("{} is not a JSON array of elements", cli.file.display()))?;

    let config = ValidationConfig::from_env()
        .with_enabled(true)
        .with_aria_validation(!cli.no_aria)
        .with_null_value_validation(!cli.no_null_values);

    tracing::debug!("Checking {} elements with {config:?}", elements.len());

    let reports = report::check_elements(&elements, config, cli.server);

    if cli.json {
        for report in &reports {
            println!("{}", serde_json::to_string(report)?);
        }
    } else {
        for report in &reports {
            print!("{report}");
        }
    }

    let count: usize = reports.iter().map(|report| report.warnings.len()).sum();
    if count == 0 {
        tracing::info!("No issues found in {} elements", elements.len());
        return Ok(ExitCode::SUCCESS);
    }

    if !cli.json {
        eprintln!("{count} warnings in {} elements", reports.len());
    }

    Ok(ExitCode::FAILURE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_parse() {
        let cli = Cli::parse_from(["dx-props-check", "--server", "--no-aria", "-vv", "elements.json"]);
        assert!(cli.server);
        assert!(cli.no_aria);
        assert!(!cli.no_null_values);
        assert!(!cli.json);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.file, PathBuf::from("elements.json"));
    }
}
