use clap::{ArgAction, Parser};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::error::Error;
use std::path::PathBuf;
use tracing::info;

use sigmoid_net::{logging, train_loop, Network, Preset, RunConfig, Sampling};

/// Train a one-hidden-layer sigmoid network on a truth table and print what it
/// learned.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// JSON run configuration; flags given here override it
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Built-in truth table: or, and, xor, nand [default: xor]
    #[arg(short, long)]
    preset: Option<Preset>,
    /// JSON training set (takes precedence over --preset)
    #[arg(short, long, value_name = "PATH")]
    data: Option<PathBuf>,
    /// Hidden layer nodes [default: 3]
    #[arg(long, value_name = "INT")]
    hidden: Option<usize>,
    /// Learning rate, usually between 0.1 and 0.99 [default: 0.1]
    #[arg(short, long, value_name = "FLOAT")]
    learning_rate: Option<f64>,
    /// Number of single-example training steps [default: 100000]
    #[arg(short, long, value_name = "INT")]
    iterations: Option<usize>,
    /// How each step picks its example: random or cycle [default: random]
    #[arg(long)]
    sampling: Option<Sampling>,
    /// Log the mean squared error every N steps (visible with -v)
    #[arg(long, value_name = "INT")]
    log_every: Option<usize>,
    /// Seed for weight initialization and sampling
    #[arg(long, value_name = "INT")]
    seed: Option<u64>,
    /// Print the report as JSON instead of a table
    #[arg(long)]
    json: bool,
    /// More log output (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
    /// Only log warnings and errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

impl Cli {
    fn run_config(&self) -> RunConfig {
        RunConfig {
            preset: self.preset,
            data: self.data.clone(),
            hidden_nodes: self.hidden,
            learning_rate: self.learning_rate,
            iterations: self.iterations,
            sampling: self.sampling,
            log_every: self.log_every,
            seed: self.seed,
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    logging::init_logging(logging::level_for(cli.verbose, cli.quiet))?;

    let file_config = match &cli.config {
        Some(path) => RunConfig::from_json(path)?,
        None => RunConfig::default(),
    };
    let run = file_config.merge(cli.run_config());

    let set = run.training_set()?;
    match (&run.data, run.preset) {
        (Some(path), _) => info!(path = %path.display(), examples = set.len(), "loaded training set"),
        (None, preset) => info!(preset = %preset.unwrap_or(Preset::Xor), "using preset"),
    }

    let mut rng = match run.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut network = Network::new(run.network_config(&set), &mut rng)?;
    let report = train_loop(&mut network, &set, &run.train_config(), &mut rng)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{report}");
    }

    Ok(())
}
