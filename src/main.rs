use gravsim::{ScenarioConfig, Scenario, QuitFlag};
use gravsim::{run_2d, bench_euler};
use gravsim::simulation::vector::normalized;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "Interactive 2D gravitational n-body sandbox")]
struct Args {
    /// Scenario YAML, looked up as given and then under scenarios/
    #[arg(short, long)]
    file_name: Option<PathBuf>,

    /// Run without a window
    #[arg(long)]
    headless: bool,

    /// Number of steps in headless mode
    #[arg(long, default_value_t = 1000)]
    steps: usize,

    /// Time the integrator step for growing body counts,
    /// printed to stdout as `N,step_ms` csv
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario_config(file_name: Option<PathBuf>) -> Result<ScenarioConfig> {
    let Some(file_name) = file_name else {
        return Ok(ScenarioConfig::default());
    };

    let config_path = if file_name.exists() {
        file_name
    } else {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(&file_name)
    };

    ScenarioConfig::from_path(&config_path)
        .with_context(|| format!("failed to load scenario {}", config_path.display()))
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn run_headless(mut scenario: Scenario, steps: usize, quit: &QuitFlag) {
    scenario.engine.running = true;
    info!("headless: {} bodies, {} steps", scenario.system.len(), steps);

    let mut done = 0;
    while done < steps && !quit.is_set() {
        scenario.step();
        done += 1;
    }
    if quit.is_set() {
        info!("Interrupted after {done} steps.");
    }

    for (i, b) in scenario.system.iter().enumerate() {
        let heading = normalized(&b.v);
        info!(
            "body {}: x = ({:.3}, {:.3}), |v| = {:.6}, heading = ({:.3}, {:.3}), |a| = {:.3e}",
            i + 1, b.x.x, b.x.y, b.v.norm(), heading.x, heading.y, b.a.norm()
        );
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let quit = QuitFlag::new();
    quit.install().context("failed to install Ctrl+C handler")?;

    if args.bench {
        init_logging();
        bench_euler();
        return Ok(());
    }

    let scenario_cfg = load_scenario_config(args.file_name)?;
    let scenario = Scenario::build_scenario(&scenario_cfg)?;

    if args.headless {
        init_logging();
        run_headless(scenario, args.steps, &quit);
    } else {
        run_2d(scenario, scenario_cfg.view, quit);
    }

    Ok(())
}
