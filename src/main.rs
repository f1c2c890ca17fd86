//! Scorecard runner (default binary).
//!
//! Reads a match document from the file named on the command line, or from
//! stdin when no path (or `-`) is given, and writes the scored report as JSON
//! to stdout.

use std::fs;
use std::io::{self, Read, Write};

use anyhow::{Context, Result};

use league_bowling::adapter::score_match_json;
use league_bowling::{logging, ScorecardConfig};

fn main() -> Result<()> {
    let config = ScorecardConfig::from_env();
    logging::init(&config);

    let path = std::env::args().nth(1);
    let input = read_input(path.as_deref())?;

    let report = score_match_json(&input).context("scoring match document")?;
    tracing::info!(
        bowlers = report.bowlers.len(),
        complete = report.bowlers.iter().filter(|b| b.complete).count(),
        "scored match"
    );

    let json = if config.pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{json}").context("writing report")?;
    Ok(())
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        None | Some("-") => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("reading match document from stdin")?;
            Ok(buf)
        }
        Some(path) => fs::read_to_string(path).with_context(|| format!("reading {path}")),
    }
}
