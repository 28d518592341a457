use anyhow::{Context, Result};
use clap::Parser;
use colorfmt::{parse_with, ColorFormat, ColorFormats, ParseOptions};
use serde_json::json;
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(
    name = "colorfmt",
    about = "Convert colors between HEX, ARGB, RGB, RGBA, HSL and CMYK",
    version,
    author
)]
struct Cli {
    /// Colors to convert (read from stdin, one per line, when omitted)
    colors: Vec<String>,

    /// Read colors from a file, one per line
    #[arg(short, long, conflicts_with = "colors")]
    input: Option<PathBuf>,

    /// Print only this format (hex, argb, rgb, rgba, hsl, cmyk)
    #[arg(long, conflicts_with = "json")]
    only: Option<ColorFormat>,

    /// Print one JSON object per color
    #[arg(long)]
    json: bool,

    /// Clamp out-of-range components instead of rejecting them
    #[arg(long)]
    lenient: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let options = if cli.lenient {
        ParseOptions::lenient()
    } else {
        ParseOptions::strict()
    };

    let colors = read_colors(&cli)?;
    debug!(count = colors.len(), ?options, "converting colors");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut failures = 0usize;
    let mut printed = 0usize;

    for input in &colors {
        let parsed = match parse_with(input, &options) {
            Ok(parsed) => parsed,
            Err(e) => {
                eprintln!("Error: {input}: {e}");
                failures += 1;
                continue;
            }
        };
        debug!(input = %input, format = %parsed.format, "parsed color");

        let formats = ColorFormats::from_color(&parsed.color);
        if cli.json {
            let record = json!({
                "input": input,
                "format": parsed.format,
                "formats": formats,
            });
            writeln!(out, "{record}")?;
        } else if let Some(format) = cli.only {
            writeln!(out, "{}", formats.get(format))?;
        } else {
            if printed > 0 {
                writeln!(out)?;
            }
            writeln!(out, "{formats}")?;
        }
        printed += 1;
    }

    out.flush()?;
    info!(converted = printed, failed = failures, "done");

    if failures > 0 {
        std::process::exit(1);
    }
    Ok(())
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_level.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

/// Collects the colors to convert from arguments, a file or stdin.
fn read_colors(cli: &Cli) -> Result<Vec<String>> {
    if let Some(path) = &cli.input {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file {}", path.display()))?;
        return Ok(non_blank_lines(content.lines()));
    }

    if !cli.colors.is_empty() {
        return Ok(cli.colors.clone());
    }

    let lines = io::stdin()
        .lock()
        .lines()
        .collect::<io::Result<Vec<String>>>()
        .context("Failed to read colors from stdin")?;
    Ok(non_blank_lines(lines.iter().map(String::as_str)))
}

fn non_blank_lines<'a>(lines: impl Iterator<Item = &'a str>) -> Vec<String> {
    lines
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_only_accepts_format_names() {
        let cli = Cli::try_parse_from(["colorfmt", "--only", "HSL", "#fff"]).unwrap();
        assert_eq!(cli.only, Some(ColorFormat::Hsl));

        assert!(Cli::try_parse_from(["colorfmt", "--only", "lab", "#fff"]).is_err());
    }

    #[test]
    fn test_only_conflicts_with_json() {
        assert!(Cli::try_parse_from(["colorfmt", "--json", "--only", "hex", "#fff"]).is_err());
    }

    #[test]
    fn test_non_blank_lines() {
        let lines = non_blank_lines("#fff\n\n  rgb(1, 2, 3)  \n \n".lines());
        assert_eq!(lines, vec!["#fff".to_string(), "rgb(1, 2, 3)".to_string()]);
    }
}
