//! Costevo Simulator CLI
//!
//! Run seeded technology cost evolution experiments.

use clap::Parser;
use costevo_core::ModelParams;
use costevo_sim::report::{describe_dependencies, outgoing_summary, render_dsm};
use costevo_sim::{ExperimentRunner, RunResult, SimError};
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

/// Costevo technology cost evolution CLI
#[derive(Parser, Debug)]
#[command(name = "costevo-sim")]
#[command(about = "Simulate stochastic cost reduction over a random dependency matrix", long_about = None)]
struct Args {
    /// Number of components (N)
    #[arg(short = 'n', long, default_value = "50")]
    components: usize,

    /// Difficulty of reducing costs (exponent applied to proposals)
    #[arg(short, long, default_value = "2.0")]
    gamma: f64,

    /// Number of innovation attempts per run
    #[arg(short = 't', long, default_value = "1000")]
    steps: usize,

    /// Probability of each off-diagonal dependency
    #[arg(short, long, default_value = "0.2")]
    density: f64,

    /// Master seed for determinism (0 = random from time)
    #[arg(short, long, default_value = "42")]
    seed: u64,

    /// Number of consecutive seeds to run
    #[arg(long, default_value = "1")]
    seeds: usize,

    /// Only generate dependencies above the diagonal (acyclic DSM)
    #[arg(long)]
    acyclic: bool,

    /// Print the DSM grid and dependency list of the first run
    #[arg(long)]
    show_dsm: bool,

    /// Export the first run to a JSON file for plotting
    #[arg(long)]
    export: Option<String>,

    /// JSON output for scripting
    #[arg(long)]
    json: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    // Initialize logging
    let level = if args.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("Failed to set tracing subscriber");
    }

    if let Err(e) = run(&args) {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), SimError> {
    let params = ModelParams::new(args.components, args.gamma, args.steps, args.density);
    params.validate()?;

    let base_seed = if args.seed == 0 {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(1)
    } else {
        args.seed
    };

    if !args.json {
        info!("Costevo Simulator v{}", env!("CARGO_PKG_VERSION"));
        info!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    }

    let runner = ExperimentRunner::new(params, base_seed)
        .with_seeds(args.seeds)
        .with_acyclic(args.acyclic);

    if args.show_dsm || args.export.is_some() {
        let first = runner.run_seed(base_seed)?;

        if args.show_dsm {
            let labels = first.simulator.labels();
            let dsm = first.simulator.dsm();
            println!("{}", render_dsm(dsm, &labels));
            for line in describe_dependencies(dsm, &labels) {
                println!("  {}", line);
            }
            for line in outgoing_summary(dsm, &labels) {
                println!("  {}", line);
            }
        }

        if let Some(path) = &args.export {
            let export = first.export();
            export.write_to_file(path)?;
            info!(
                "Exported seed={} ({} history points) to {}",
                export.seed,
                export.cost_history.len(),
                path
            );
        }
    }

    let results = runner.run_all()?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary_json(&results))?);
    } else {
        for result in &results {
            info!(
                "seed={} | cost {:.4} → {:.4} ({:.1}% lower) | accepted {}/{} | deps={}",
                result.seed,
                result.initial_cost,
                result.final_cost,
                result.reduction() * 100.0,
                result.accepted,
                result.attempts,
                result.dependency_count
            );
        }
        info!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
        if let Some(mean) = mean_final_cost(&results) {
            info!("Mean final cost over {} run(s): {:.4}", results.len(), mean);
        }
    }

    Ok(())
}

fn mean_final_cost(results: &[RunResult]) -> Option<f64> {
    if results.is_empty() {
        return None;
    }
    Some(results.iter().map(|r| r.final_cost).sum::<f64>() / results.len() as f64)
}

fn summary_json(results: &[RunResult]) -> serde_json::Value {
    serde_json::json!({
        "runs": results.len(),
        "mean_final_cost": mean_final_cost(results),
        "results": results.iter().map(|r| {
            serde_json::json!({
                "seed": r.seed,
                "initial_cost": r.initial_cost,
                "final_cost": r.final_cost,
                "attempts": r.attempts,
                "accepted": r.accepted,
                "acceptance_rate": r.acceptance_rate(),
                "dependencies": r.dependency_count,
            })
        }).collect::<Vec<_>>(),
    })
}
