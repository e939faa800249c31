// rankscore CLI - batch ranking similarity scoring

mod config;
mod display;
mod exit_codes;
mod export;
mod prompt;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use chrono::Datelike;
use clap::{Parser, Subcommand};

use rankscore_core::Batch;
use rankscore_io::parse_blocks;
use rankscore_recon::{reconcile, MatcherConfig, ReconSession, DEFAULT_CUTOFF};
use rankscore_score::score_batch;
use rankscore_timeparse::{resolve, Resolution};

use config::EvalConfig;
use exit_codes::{EXIT_DATE, EXIT_ERROR, EXIT_INPUT, EXIT_RECON, EXIT_SUCCESS, EXIT_USAGE};

#[derive(Parser)]
#[command(name = "rankscore")]
#[command(about = "Score candidate rankings against an authoritative ranking")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Read a batch, reconcile names and print similarity scores
    #[command(after_help = "\
Examples:
  rankscore score drafts.txt
  rankscore score drafts.txt --p 0.9
  rankscore score drafts.txt --config leagues.toml --json
  rankscore score drafts.txt --output scores.json --csv scores.csv")]
    Score {
        /// Input file (blank-line-separated ranking blocks)
        input: PathBuf,

        /// TOML config: authority labels, default p, matcher cutoff
        #[arg(long)]
        config: Option<PathBuf>,

        /// RBO persistence in (0,1); defaults to 1 - 1/l per pair
        #[arg(long)]
        p: Option<f64>,

        /// Output JSON to stdout instead of the table
        #[arg(long)]
        json: bool,

        /// Write the JSON report to a file
        #[arg(long)]
        output: Option<PathBuf>,

        /// Write a CSV report to a file
        #[arg(long)]
        csv: Option<PathBuf>,
    },

    /// Validate input structure without prompting or scoring
    #[command(after_help = "\
Examples:
  rankscore check drafts.txt
  rankscore check drafts.txt --config leagues.toml")]
    Check {
        /// Input file
        input: PathBuf,

        /// TOML config: authority labels
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

#[derive(Debug)]
pub struct CliError {
    pub code: u8,
    pub message: String,
    pub hint: Option<String>,
}

impl CliError {
    pub fn usage(msg: impl Into<String>) -> Self {
        Self { code: EXIT_USAGE, message: msg.into(), hint: None }
    }

    pub fn input(msg: impl Into<String>) -> Self {
        Self { code: EXIT_INPUT, message: msg.into(), hint: None }
    }

    pub fn general(msg: impl Into<String>) -> Self {
        Self { code: EXIT_ERROR, message: msg.into(), hint: None }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Score { input, config, p, json, output, csv } => {
            cmd_score(input, config, p, json, output, csv)
        }
        Commands::Check { input, config } => cmd_check(input, config),
    };

    match result {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(CliError { code, message, hint }) => {
            if !message.is_empty() {
                eprintln!("error: {message}");
            }
            if let Some(hint) = hint {
                eprintln!("hint:  {hint}");
            }
            ExitCode::from(code)
        }
    }
}

fn cmd_score(
    input: PathBuf,
    config_path: Option<PathBuf>,
    p_flag: Option<f64>,
    json_output: bool,
    output_file: Option<PathBuf>,
    csv_file: Option<PathBuf>,
) -> Result<(), CliError> {
    let cfg = config::load(config_path.as_deref()).map_err(|e| CliError::usage(e.to_string()))?;

    let p = p_flag.or(cfg.p);
    if let Some(p) = p {
        if !(p > 0.0 && p < 1.0) {
            return Err(CliError::usage(format!("--p must be in (0,1), got {p}")));
        }
    }

    let text = read_input(&input)?;
    let mut batch = assemble_batch(&text, &cfg, true)?;

    let matcher = MatcherConfig { cutoff: cfg.cutoff.unwrap_or(DEFAULT_CUTOFF) };
    let mut session = ReconSession::new();
    let mut oracle = prompt::StdinOracle;
    let stats = reconcile(
        &batch.authoritative,
        &mut batch.candidates,
        &mut session,
        &mut oracle,
        &matcher,
    )
    .map_err(|e| CliError { code: EXIT_RECON, message: e.to_string(), hint: None })?;

    if stats.prompts > 0 || stats.rewrites > 0 {
        eprintln!(
            "reconciled names: {} rewrite(s) from {} prompt(s)",
            stats.rewrites, stats.prompts
        );
    }

    let report = score_batch(&batch, p).map_err(|e| CliError::general(e.to_string()))?;

    let json_str = serde_json::to_string_pretty(&report)
        .map_err(|e| CliError::general(format!("JSON serialization error: {e}")))?;

    if let Some(ref path) = output_file {
        std::fs::write(path, &json_str)
            .map_err(|e| CliError::general(format!("cannot write {}: {e}", path.display())))?;
        eprintln!("wrote {}", path.display());
    }
    if let Some(ref path) = csv_file {
        export::write_csv(&report, path)?;
        eprintln!("wrote {}", path.display());
    }

    if json_output {
        println!("{json_str}");
    } else {
        print!("{}", display::render_table(&report));
    }

    Ok(())
}

fn cmd_check(input: PathBuf, config_path: Option<PathBuf>) -> Result<(), CliError> {
    let cfg = config::load(config_path.as_deref()).map_err(|e| CliError::usage(e.to_string()))?;
    let text = read_input(&input)?;
    let batch = assemble_batch(&text, &cfg, false)?;

    eprintln!(
        "ok: authoritative '{}' ({} names), {} candidate(s)",
        batch.authoritative.source_id(),
        batch.authoritative.len(),
        batch.candidates.len()
    );
    Ok(())
}

fn read_input(path: &Path) -> Result<String, CliError> {
    std::fs::read_to_string(path)
        .map_err(|e| CliError::input(format!("cannot read {}: {e}", path.display())))
}

/// Parse blocks, resolve timestamps (prompting on fallback when
/// `resolve_dates` is set) and partition into a batch.
fn assemble_batch(text: &str, cfg: &EvalConfig, resolve_dates: bool) -> Result<Batch, CliError> {
    let blocks = parse_blocks(text).map_err(|e| CliError::input(e.to_string()))?;
    let current_year = chrono::Local::now().year();

    let mut rankings = Vec::with_capacity(blocks.len());
    for block in blocks {
        let timestamp = if resolve_dates {
            let resolution = resolve(&block.datetime_text, current_year)
                .map_err(|e| CliError { code: EXIT_DATE, message: e.to_string(), hint: None })?;
            match resolution {
                Resolution::Resolved(dt) => Some(dt),
                Resolution::NeedsDate(pending) => Some(prompt::manual_date(&pending)?),
            }
        } else {
            None
        };
        rankings.push(block.into_ranking(timestamp).map_err(|e| CliError::input(e.to_string()))?);
    }

    Batch::partition(rankings, &cfg.authorities).map_err(|e| CliError::input(e.to_string()))
}
