use orbsim::{Preset, Scenario, ScenarioConfig, Trajectory};
use orbsim::{bench_gravity, bench_verlet, max_relative_drift};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::info;

use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "Integrate a planetary system and report its trajectory")]
struct Args {
    /// Scenario YAML file; takes precedence over --preset
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Built-in scenario
    #[arg(short, long, value_enum, default_value = "solar-system")]
    preset: PresetArg,

    /// Print the trajectory as CSV on stdout
    #[arg(long)]
    csv: bool,

    /// Only print every n-th recorded step
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u64).range(1..))]
    stride: u64,

    /// Run the gravity / Verlet benchmarks instead of a scenario
    #[arg(long)]
    bench: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PresetArg {
    /// Sun through Jupiter, RK4 over one Jovian year
    InnerPlanets,
    /// Sun through Pluto, velocity Verlet, dt = 1e5 s
    SolarSystem,
    /// Sun with Jupiter through Pluto, velocity Verlet, dt = 1e6 s
    OuterPlanets,
}

impl From<PresetArg> for Preset {
    fn from(arg: PresetArg) -> Self {
        match arg {
            PresetArg::InnerPlanets => Preset::InnerPlanets,
            PresetArg::SolarSystem => Preset::SolarSystem,
            PresetArg::OuterPlanets => Preset::OuterPlanets,
        }
    }
}

// load here to keep main clean
fn load_scenario(args: &Args) -> Result<ScenarioConfig> {
    match &args.file {
        Some(path) => ScenarioConfig::from_path(path)
            .with_context(|| format!("loading scenario {}", path.display())),
        None => {
            let preset = Preset::from(args.preset);
            preset
                .config()
                .with_context(|| format!("loading preset {preset:?}"))
        }
    }
}

fn write_csv(traj: &Trajectory, names: &[String], stride: usize) -> Result<()> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    writeln!(out, "step,time,body,name,x,y,vx,vy")?;
    for (step, states) in traj.iter().enumerate().step_by(stride) {
        let t = traj.time(step).unwrap_or_default();
        for (i, (s, name)) in states.iter().zip(names).enumerate() {
            writeln!(
                out,
                "{step},{t},{i},{name},{},{},{},{}",
                s.position.x, s.position.y, s.velocity.x, s.velocity.y
            )?;
        }
    }
    out.flush()?;
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    if args.bench {
        bench_gravity();
        bench_verlet();
        return Ok(());
    }

    let scenario_cfg = load_scenario(&args)?;
    let scenario = Scenario::build_scenario(&scenario_cfg).context("invalid scenario")?;
    let trajectory = scenario.run().context("integration failed")?;

    info!(
        "recorded {} states, final t = {:.6e} s",
        trajectory.len(),
        trajectory.times().last().copied().unwrap_or_default()
    );
    match max_relative_drift(&trajectory, scenario.parameters.g) {
        Some(drift) => info!("max relative energy drift = {drift:.3e}"),
        None => info!("max relative energy drift undefined: initial energy is zero"),
    }
    if let Some(last) = trajectory.final_state() {
        for (name, s) in scenario.names.iter().zip(last) {
            info!("{name:>8}: x = ({:.4e}, {:.4e}) m", s.position.x, s.position.y);
        }
    }

    if args.csv {
        let stride = usize::try_from(args.stride).context("stride does not fit in usize")?;
        write_csv(&trajectory, &scenario.names, stride)?;
    }

    Ok(())
}
