use anyhow::Context;
use clap::{Parser, ValueEnum};
use inventory_rl_sim::io::random::RngSource;
use inventory_rl_sim::io::reporting::{self, TABLE_WINDOW};
use inventory_rl_sim::simulation::config::SimulationConfig;
use inventory_rl_sim::simulation::engine::{Simulation, DEFAULT_BATCH_DAYS};
use inventory_rl_sim::strategy::implementations::Policy;
use log::{info, warn};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum PolicyArg {
    /// Order the same fixed amount every day
    Manual,
    /// Order up to 20 units, 25 before a weekend day
    Heuristic,
}

/// Inventory control simulator with a day-by-day profit log
#[derive(Parser, Debug)]
#[command(name = "inventory-rl-sim")]
#[command(version, about)]
struct Args {
    /// JSON file with demand and cost parameters (missing fields use defaults)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Days to simulate from a fresh state
    #[arg(long, default_value_t = DEFAULT_BATCH_DAYS)]
    days: usize,

    #[arg(long, value_enum, default_value_t = PolicyArg::Manual)]
    policy: PolicyArg,

    /// Daily order quantity for the manual policy
    #[arg(long, default_value_t = 10)]
    order: u32,

    /// Seed for a reproducible demand stream
    #[arg(long)]
    seed: Option<u64>,

    /// Write the full history to this CSV file
    #[arg(long)]
    output: Option<PathBuf>,

    /// Rows of recent history to print
    #[arg(long, default_value_t = TABLE_WINDOW)]
    show: usize,

    /// Print the inventory/demand/order series for the last 30 days
    #[arg(long)]
    chart: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => SimulationConfig::from_json_file(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => SimulationConfig::default(),
    };

    let policy = match args.policy {
        PolicyArg::Manual => {
            if config.exceeds_max_inventory(args.order) {
                warn!(
                    "Manual order {} is above max inventory {}",
                    args.order, config.max_inventory
                );
            }
            Policy::Manual(args.order)
        }
        PolicyArg::Heuristic => Policy::Heuristic,
    };

    let rng = match args.seed {
        Some(seed) => RngSource::seeded(seed),
        None => RngSource::from_entropy(),
    };

    println!("=== Inventory Management RL Simulator ===");
    println!("Config: {:?}", config);
    println!("Policy: {:?}", policy);

    let mut sim = Simulation::new(config, policy, rng)?;
    info!("Running simulation for {} days...", args.days);
    sim.run(args.days);

    println!("\n{}", reporting::render_state(sim.state()));
    if !sim.state().history().is_empty() {
        println!("\n=== Recent History ===");
        print!("{}", reporting::render_history_table(sim.state(), args.show));
    }

    if args.chart && !sim.state().history().is_empty() {
        println!("\n=== Inventory & Demand ===");
        print!("{}", reporting::render_chart(sim.state()));
    }

    println!("\n=== Summary ===");
    print!("{}", reporting::render_summary(&sim.summary()));

    if let Some(path) = &args.output {
        reporting::write_history_csv(path, sim.state().history())
            .with_context(|| format!("writing history to {}", path.display()))?;
        println!("Success! Data written to {}", path.display());
    }

    Ok(())
}
