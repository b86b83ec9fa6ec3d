use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use serde::Serialize;
use std::fs;
use std::io;
use std::path::PathBuf;

use maybe::Maybe;
use pipeline::logging::init_logging;
use pipeline::{evaluate, parse_records, summarize, Outcome, PipelineConfig, Step, Summary};

/// Runs integer records through a chain of steps that may each produce no value
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input file with one record per line (`value` or `label: value`); `-` reads stdin
    input: PathBuf,

    /// Steps applied after parsing, in order
    #[arg(short, long, value_enum, value_delimiter = ',', default_values_t = vec![Step::Sqrt, Step::Halve])]
    steps: Vec<Step>,

    /// Value substituted for records that end without a value
    #[arg(short, long, allow_hyphen_values = true)]
    default: Option<i64>,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text")]
    format: String,

    /// Log filter used when RUST_LOG is unset (e.g. "debug", "pipeline=trace")
    #[arg(long)]
    log_filter: Option<String>,
}

#[derive(Serialize)]
struct Report<'a> {
    steps: &'a [Step],
    outcomes: &'a [Outcome],
    summary: &'a Summary,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Args::parse();
    init_logging(args.log_filter.as_deref());

    if args.format != "text" && args.format != "json" {
        anyhow::bail!("Unknown output format: {:?} (expected text or json)", args.format);
    }

    let content = if args.input.as_os_str() == "-" {
        io::read_to_string(io::stdin()).context("Failed to read stdin")?
    } else {
        fs::read_to_string(&args.input)
            .with_context(|| format!("Failed to read input file {}", args.input.display()))?
    };

    let records = parse_records(&content)?;
    let config = PipelineConfig {
        steps: args.steps.clone(),
        default: args.default.into(),
    };
    tracing::info!(records = records.len(), steps = config.steps.len(), "running pipeline");

    let outcomes: Vec<Outcome> = records.iter().map(|r| evaluate(r, &config)).collect();
    let summary = summarize(&outcomes);

    if args.format == "json" {
        let report = Report { steps: &config.steps, outcomes: &outcomes, summary: &summary };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_outcomes(&config.steps, &outcomes);
    print_summary(&summary);
    Ok(())
}

fn describe(value: &Maybe<i64>) -> String {
    value.map(|v| v.to_string()).get_or_else("-".to_string())
}

fn print_outcomes(steps: &[Step], outcomes: &[Outcome]) {
    let chain: Vec<&str> = std::iter::once("parse").chain(steps.iter().map(|s| s.name())).collect();
    println!("{}", "Maybe Pipeline".bold().blue());
    println!("{}", "=====================================".blue());
    println!("  Steps: {}", chain.join(" -> ").cyan());
    println!();

    for outcome in outcomes {
        let name = outcome
            .label
            .map(|l| format!("{} ({})", l, outcome.input))
            .get_or_else(outcome.input.clone());

        let status = if outcome.value.is_present() {
            describe(&outcome.value).green()
        } else {
            let step = outcome.stopped_at.get_or_else("?");
            format!("absent at {}", step).red()
        };

        print!("  line {:>3}  {:<24} {}", outcome.line, name.yellow(), status);
        if outcome.value.is_absent() && outcome.resolved.is_present() {
            print!("  (default {})", describe(&outcome.resolved));
        }
        println!();
    }
}

fn print_summary(summary: &Summary) {
    println!();
    println!("  {}", "Summary:".bold());
    println!("    Records: {}", summary.records);
    println!("    With value: {}", summary.present.to_string().green());
    println!(
        "    Without value: {}",
        (summary.records - summary.present).to_string().red()
    );

    let total = describe(&summary.total);
    if summary.total.is_present() {
        println!("    Total: {}", total.green());
    } else if summary.all.is_present() {
        println!("    Total: {}", "overflow".red());
    } else {
        println!("    Total: {}", "unresolved".yellow());
    }
}
