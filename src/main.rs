//! Trains a network on a labelled data file, then classifies both the
//! training inputs and an unlabelled test file.
//!
//! Usage:
//!   cargo run -- --data-dir data/ --epochs 100 --learning-rate 0.1
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use online_backprop::{
    learning_curve, load_records, output_softmax, test, train_loop, InitPolicy, Network,
    RunConfig,
};

#[derive(Parser, Debug)]
#[command(name = "online-backprop")]
#[command(about = "Train a feedforward network by online backpropagation and classify test data")]
struct Args {
    /// JSON run configuration; every field is optional
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory holding the train and test files (default: current directory)
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Number of training epochs
    #[arg(short, long)]
    epochs: Option<usize>,

    /// Learning rate
    #[arg(short, long)]
    learning_rate: Option<f64>,

    /// Hidden layer sizes, e.g. `--hidden 4,3`
    #[arg(long, value_delimiter = ',')]
    hidden: Option<Vec<usize>>,

    /// Seed for reproducible weight initialization
    #[arg(long, conflicts_with = "assignment_weights")]
    seed: Option<u64>,

    /// Start from the fixed [3, 3, 2] reference weights
    #[arg(long)]
    assignment_weights: bool,

    /// Write the per-epoch squared error as JSON to this file
    #[arg(long)]
    curve_out: Option<PathBuf>,

    /// Log level used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();
    setup_logging(&args.log_level);

    let config = resolve_config(&args)?;
    let data_dir = args.data_dir.clone().unwrap_or_default();

    // ── Training ─────────────────────────────────────────────────────────────
    let train_path = data_dir.join(&config.train_file);
    let train_data = load_records(&train_path, true)
        .with_context(|| format!("loading training data from {}", train_path.display()))?;
    info!(path = %train_path.display(), samples = train_data.len(), "training data loaded");

    let network = config.network
        .build(train_data.input_size(), train_data.output_size())
        .context("building network")?;

    println!(
        "\nTraining:\nLayers: {:?}, number of epochs: {}, learning rate: {}.\n",
        network.layer_sizes(),
        config.train.epochs,
        config.train.learning_rate
    );

    let (mut network, errors) = train_loop(network, &train_data.inputs, &train_data.targets, &config.train)
        .context("training")?;

    if let Some(path) = &args.curve_out {
        write_curve(path, &errors)?;
        info!(path = %path.display(), "learning curve written");
    }

    print_decisions(&mut network, &train_data.inputs)?;

    // ── Testing ──────────────────────────────────────────────────────────────
    let test_path = data_dir.join(&config.test_file);
    let test_data = load_records(&test_path, false)
        .with_context(|| format!("loading test data from {}", test_path.display()))?;
    info!(path = %test_path.display(), samples = test_data.len(), "test data loaded");

    print_decisions(&mut network, &test_data.inputs)?;
    println!("softmax= {:?}", output_softmax(&network));

    Ok(())
}

fn setup_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .try_init()
        .ok();
}

/// Config file (or defaults) with command-line overrides applied on top.
fn resolve_config(args: &Args) -> Result<RunConfig> {
    let mut config = match &args.config {
        Some(path) => RunConfig::load_json(path)
            .with_context(|| format!("reading config {}", path.display()))?,
        None => RunConfig::default(),
    };

    if let Some(epochs) = args.epochs {
        config.train.epochs = epochs;
    }
    if let Some(lr) = args.learning_rate {
        config.train.learning_rate = lr;
    }
    if let Some(hidden) = &args.hidden {
        config.network.hidden_layers = hidden.clone();
    }
    if let Some(seed) = args.seed {
        let range = match config.network.init {
            InitPolicy::Uniform { range } | InitPolicy::Seeded { range, .. } => range,
            InitPolicy::Preset { .. } => online_backprop::network::init::DEFAULT_INIT_RANGE,
        };
        config.network.init = InitPolicy::Seeded { range, seed };
    }
    if args.assignment_weights {
        config.network.init = InitPolicy::assignment();
    }
    Ok(config)
}

fn print_decisions(network: &mut Network, inputs: &[Vec<f64>]) -> Result<()> {
    println!("\nTesting:");
    let classes = test(network, inputs).context("classifying")?;
    for (input, class) in inputs.iter().zip(classes) {
        println!("input= {input:?} \t output= {class}");
    }
    Ok(())
}

fn write_curve(path: &Path, errors: &[f64]) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("creating {}", path.display()))?;
    serde_json::to_writer_pretty(std::io::BufWriter::new(file), &learning_curve(errors))?;
    Ok(())
}
