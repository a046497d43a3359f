use std::path::PathBuf;
use std::time::Duration;

use clap::{ArgAction, Parser};
use color_eyre::eyre::{Result, WrapErr, eyre};
use tracing::info;

use errorfield::preview::{Preview, PreviewApp, PreviewOptions};

mod logging;

use logging::{LogConfig, init_logging};

#[derive(Debug, Clone)]
struct Selection(Vec<Preview>);

fn parse_selection(value: &str) -> Result<Selection, String> {
    if value.eq_ignore_ascii_case("all") {
        return Ok(Selection(Preview::ALL.to_vec()));
    }
    value
        .split(',')
        .map(|name| name.trim().parse::<Preview>())
        .collect::<Result<Vec<_>, _>>()
        .map(Selection)
}

#[derive(Debug, Parser)]
#[command(
    name = "errorfield-preview",
    version,
    about = "Preview the errorfield text field configurations in the terminal"
)]
struct Cli {
    /// Previews to show: helper, error, string (comma separated) or all
    #[arg(long = "preview", value_name = "NAME", default_value = "all", value_parser = parse_selection)]
    preview: Selection,

    /// Mask the string preview like a password field
    #[arg(long = "password")]
    password: bool,

    /// Render every preview as a single-line field; Enter moves focus
    #[arg(long = "single-line")]
    single_line: bool,

    /// Event poll interval in milliseconds
    #[arg(long = "tick-rate-ms", value_name = "MS", default_value_t = 250)]
    tick_rate_ms: u64,

    /// Append log output to this file
    #[arg(long = "log-file", value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,

    /// Print the final field values as JSON after exiting
    #[arg(long = "json")]
    json: bool,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    let log_config = LogConfig::from_verbosity(cli.verbose).with_log_file(cli.log_file.clone());
    init_logging(&log_config).wrap_err("failed to open log file")?;

    if cli.preview.0.is_empty() {
        return Err(eyre!("select at least one preview"));
    }

    let options = PreviewOptions::default()
        .with_tick_rate(Duration::from_millis(cli.tick_rate_ms))
        .with_password(cli.password)
        .with_single_line(cli.single_line);

    info!(previews = ?cli.preview.0, "launching preview");
    let report = PreviewApp::new(&cli.preview.0, options)
        .run()
        .map_err(|err| eyre!("{err:#}"))?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_selects_every_preview() {
        let selection = parse_selection("ALL").expect("all");
        assert_eq!(selection.0, Preview::ALL.to_vec());
    }

    #[test]
    fn comma_list_keeps_order() {
        let selection = parse_selection("string, helper").expect("list");
        assert_eq!(selection.0, vec![Preview::DayString, Preview::DayHelper]);
    }

    #[test]
    fn unknown_name_is_rejected() {
        let err = parse_selection("night").expect_err("unknown");
        assert!(err.contains("unknown preview"));
    }
}
