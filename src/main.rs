//! CLI for training and evaluating the sentiment classifier
//!
//! Usage:
//! ```bash
//! cargo run -- --input imdb_labelled.txt
//! cargo run -- --input imdb_labelled.txt --dimension 20000 --seed 7 --json
//! ```

use anyhow::Result;
use clap::Parser;
use sentiment_svm::{run, PipelineConfig, RunReport, SgdTrainer, SvmConfig};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(author, version, about = "Train and evaluate a linear SVM sentiment classifier")]
struct Args {
    /// Labeled reviews file, one `<review text>\t<label>` per line
    #[arg(short, long)]
    input: PathBuf,

    /// Number of hashed feature buckets
    #[arg(long, default_value_t = 10_000)]
    dimension: usize,

    /// Fraction of records used for training
    #[arg(long, default_value_t = 0.6)]
    train_fraction: f64,

    /// Seed for the train/test shuffle
    #[arg(long, default_value_t = 11)]
    seed: u64,

    /// SGD iterations
    #[arg(long, default_value_t = 1000)]
    iterations: usize,

    /// Initial SGD step size
    #[arg(long, default_value_t = 1.0)]
    learning_rate: f64,

    /// L2 regularization strength
    #[arg(long, default_value_t = 0.01)]
    l2_penalty: f64,

    /// Worker threads for row-wise transforms
    #[arg(long, default_value_t = 4)]
    threads: usize,

    /// Skip malformed lines instead of aborting
    #[arg(long)]
    lenient: bool,

    /// Emit the report as JSON instead of the human-readable summary
    #[arg(long)]
    json: bool,

    /// Log level (error, warn, info, debug)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = match args.log_level.as_str() {
        "debug" => Level::DEBUG,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = PipelineConfig {
        input_path: args.input,
        dimension: args.dimension,
        train_fraction: args.train_fraction,
        seed: args.seed,
        threads: args.threads,
        lenient: args.lenient,
    };
    let trainer = SgdTrainer::new(SvmConfig {
        iterations: args.iterations,
        learning_rate: args.learning_rate,
        l2_penalty: args.l2_penalty,
    });

    let report = run(&config, &trainer)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    Ok(())
}

fn print_report(report: &RunReport) {
    println!();
    println!("═══════════════════════════════════════════════════════════");
    println!("              SENTIMENT SVM EVALUATION                      ");
    println!("═══════════════════════════════════════════════════════════");
    println!();
    println!("  Records: {} ({} skipped)", report.n_records, report.n_skipped);
    println!("  Split:   {} train / {} test", report.n_train, report.n_test);
    println!();
    println!(
        "Area under precision-recall curve = {:.6} ({:.2} %)",
        report.auprc,
        report.auprc * 100.0
    );
    println!(
        "Area under ROC                    = {:.6} ({:.2} %)",
        report.auroc,
        report.auroc * 100.0
    );
    println!();
    println!("First {} scores (score, label):", report.sample.len());
    for (score, label) in &report.sample {
        println!("  ({score:>12.6}, {label})");
    }
    println!();
    let labels: Vec<String> = report
        .sample
        .iter()
        .map(|(_, label)| label.to_string())
        .collect();
    println!("First {} labels: [{}]", labels.len(), labels.join(", "));
}
