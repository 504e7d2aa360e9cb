//! kairos-eval binary.
//!
//! Reads `kairos.toml` (or the path given with `--config`), loads the
//! labelled dataset and evaluates the HTTP header technique against it.
//!
//! ```
//! cargo run -p kairos-eval -- --dataset data/httpdataset.txt --target last_modified
//! ```

use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;
use kairos_dataset::PageDateType;
use kairos_eval::{EvalConfig, Evaluator, HeaderDateGetter};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Evaluate date extraction against a labelled dataset")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "kairos.toml")]
  config: PathBuf,

  /// Dataset file; overrides the config.
  #[arg(short, long)]
  dataset: Option<PathBuf>,

  /// Page date to evaluate against (`publish` or `last_modified`).
  #[arg(short, long)]
  target: Option<PageDateType>,

  /// Only evaluate the first N entries.
  #[arg(short = 'n', long)]
  max_entries: Option<usize>,

  /// Print the full report as JSON instead of the summary line.
  #[arg(long)]
  json: bool,
}

fn main() -> anyhow::Result<()> {
  // Logs go to stderr so `--json` output stays clean.
  tracing_subscriber::fmt()
    .with_writer(std::io::stderr)
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  let mut cfg = EvalConfig::load(&cli.config)
    .with_context(|| format!("failed to load config from {:?}", cli.config))?;
  if let Some(dataset) = cli.dataset {
    cfg.dataset = dataset;
  }
  if let Some(target) = cli.target {
    cfg.target = target;
  }
  if cli.max_entries.is_some() {
    cfg.max_entries = cli.max_entries;
  }

  let mut dataset = kairos_dataset::read(&cfg.dataset)
    .with_context(|| format!("failed to read dataset {:?}", cfg.dataset))?;
  if let Some(n) = cfg.max_entries {
    dataset = dataset.take(n);
  }

  let evaluator = Evaluator::new(HeaderDateGetter, cfg.header_rater(), cfg.target)
    .with_range(cfg.range());
  let report = evaluator.run(&dataset);

  if cli.json {
    println!("{}", report.to_json().context("failed to render report")?);
  } else {
    let tally = &report.tally;
    println!("{}", report.target);
    println!("{tally}");
    println!(
      "accuracy: {:.3} precision: {:.3} recall: {:.3} f1: {:.3}",
      tally.accuracy(),
      tally.precision(),
      tally.recall(),
      tally.f1()
    );
  }

  Ok(())
}
