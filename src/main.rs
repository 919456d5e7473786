use std::path::PathBuf;

use clap::Parser;
use evoparam::{MutableScalar, MutationConfig};
use tracing::info;

/// Hill-climb a single mutable scalar toward a target value.
#[derive(Parser)]
struct Args {
    /// JSON file holding an {"initial", "rate", "sigma"} record
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long, default_value_t = 0.0)]
    initial: f64,

    /// per-generation mutation probability
    #[arg(long, default_value_t = 1.0)]
    rate: f64,

    /// Gaussian step size
    #[arg(long, default_value_t = 0.25)]
    sigma: f64,

    #[arg(long, default_value_t = 1.0)]
    target: f64,

    #[arg(long, default_value_t = 4096)]
    generations: u64,
}

fn main() -> color_eyre::Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let mut scalar = match &args.config {
        Some(path) => {
            let doc: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(path)?)?;
            MutableScalar::from_config(&MutationConfig::from_json(doc)?)
        }
        None => MutableScalar::new(args.initial, args.rate, args.sigma, None, None),
    };

    let mut rng = rand::thread_rng();
    let mut best = (scalar.get() - args.target).abs();
    info!("Start: value={} distance={}", scalar.get(), best);

    for generation in 0..args.generations {
        let mut candidate = scalar;
        candidate.mutate(&mut rng);

        let distance = (candidate.get() - args.target).abs();
        if distance < best {
            scalar = candidate;
            best = distance;
            info!(
                "Generation {}: value={} distance={}",
                generation,
                scalar.get(),
                best
            );
        }
    }

    info!("Done: value={} distance={}", scalar.get(), best);

    Ok(())
}
