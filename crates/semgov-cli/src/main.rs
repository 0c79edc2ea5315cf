//! `semgov`: check an AI-proposed rewrite against its original.
//!
//! Usage:
//!   semgov check --original "text" --proposed @rewrite.txt
//!   semgov check --original @in.txt --proposed @out.txt --config semgov.toml --input-gate
//!   semgov thresholds
//!
//! `check` prints the governance outcome as JSON and exits 0 when the
//! proposal may be shown, 2 when it is blocked.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use semgov_core::config::SemgovConfig;
use semgov_governance::GovernancePipeline;
use tracing::debug;

const EXIT_BLOCKED: u8 = 2;

#[derive(Parser)]
#[command(name = "semgov", version)]
#[command(about = "Semantic governance for AI-proposed text edits")]
struct Cli {
    /// TOML config file. Defaults apply to anything it leaves out.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Validate a rewrite and print the decision as JSON
    Check {
        /// Original text, or @path to read it from a file
        #[arg(long)]
        original: String,

        /// Proposed rewrite, or @path to read it from a file
        #[arg(long)]
        proposed: String,

        /// Intent checked by the input gate
        #[arg(long, default_value = "rewrite")]
        intent: String,

        /// Run the input gate on the original before validating
        #[arg(long)]
        input_gate: bool,

        /// Print the full semantic result instead of the flattened outcome
        #[arg(long)]
        detailed: bool,
    },
    /// Print the active thresholds and what each label means
    Thresholds,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => SemgovConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => SemgovConfig::default(),
    };
    semgov_observability::init_from_config(&config.observability);

    let pipeline = GovernancePipeline::from_config(&config).context("building pipeline")?;

    match cli.command {
        Command::Check {
            original,
            proposed,
            intent,
            input_gate,
            detailed,
        } => {
            let original = read_arg(&original).context("reading --original")?;
            let proposed = read_arg(&proposed).context("reading --proposed")?;

            if input_gate {
                pipeline.check_input(&original, &intent)?;
            }

            let blocked = if detailed {
                let result = pipeline.validate(&original, &proposed)?;
                let decision = pipeline.decide(&result);
                let blocked = pipeline.engine().is_blocked(&decision);
                let report = serde_json::json!({ "result": result, "decision": decision });
                println!("{}", serde_json::to_string_pretty(&report)?);
                blocked
            } else {
                let outcome = pipeline.run(&original, &proposed)?;
                println!("{}", serde_json::to_string_pretty(&outcome)?);
                outcome.decision == semgov_core::DecisionKind::Blocked
            };

            debug!(blocked, "check finished");
            Ok(if blocked {
                ExitCode::from(EXIT_BLOCKED)
            } else {
                ExitCode::SUCCESS
            })
        }
        Command::Thresholds => {
            println!("{}", serde_json::to_string_pretty(&pipeline.thresholds())?);
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Literal text, or the contents of a file when prefixed with `@`.
fn read_arg(arg: &str) -> Result<String> {
    match arg.strip_prefix('@') {
        Some(path) => std::fs::read_to_string(path).with_context(|| format!("reading {path}")),
        None => Ok(arg.to_string()),
    }
}
