use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use clap::{Parser, ValueEnum};
use thruster_selection::catalog::load_catalog;
use thruster_selection::config::{MissionConfig, load_mission_config};
use thruster_selection::evaluator::{DEFAULT_DUTY_CYCLE, DEFAULT_MIN_TRL};
use thruster_selection::export::{self, ranking};
use thruster_selection::physics::time::{seconds_to_days, split_duration};
use thruster_selection::physics::units::n_to_mn;
use thruster_selection::{
    EvaluationResult, MissionRequirements, RankingWeights, SelectionMode, select_with,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Rank electric propulsion thrusters for a small-satellite mission",
    after_help = "Examples:\n  \
        thruster_select --delta-v 800 --sat-mass 12 --power 30 --budget 2\n  \
        thruster_select --mission data/missions/cubesat_orbit_raise.toml --show-all\n  \
        thruster_select --delta-v 800 --sat-mass 12 --power 30 --budget 2 --mass-weight 0.2 --time-weight 0.8"
)]
struct Cli {
    /// Required velocity change in m/s
    #[arg(long)]
    delta_v: Option<f64>,

    /// Spacecraft dry mass without the propulsion unit, in kg
    #[arg(long)]
    sat_mass: Option<f64>,

    /// Power available to the thruster, in W
    #[arg(long)]
    power: Option<f64>,

    /// Budget for thruster dry mass plus propellant, in kg
    #[arg(long)]
    budget: Option<f64>,

    /// Minimum technology readiness level [default: 6]
    #[arg(long)]
    min_trl: Option<u8>,

    /// Fraction of calendar time the thruster fires, in (0, 1] [default: 0.30]
    #[arg(long)]
    duty_cycle: Option<f64>,

    /// Weight of the propulsion-mass term [default: 0.4]
    #[arg(long)]
    mass_weight: Option<f64>,

    /// Weight of the mission-duration term [default: 0.6]
    #[arg(long)]
    time_weight: Option<f64>,

    /// Rescale the weights to sum to one before ranking
    #[arg(long, default_value_t = false)]
    normalize_weights: bool,

    /// Mission file (TOML, JSON, or YAML); flags override its values
    #[arg(long)]
    mission: Option<PathBuf>,

    /// Thruster catalog (YAML, JSON, TOML, or a directory of TOML records)
    #[arg(long, default_value = "data/thrusters.yaml")]
    data: PathBuf,

    /// Include infeasible thrusters and their rejection reasons
    #[arg(long, default_value_t = false)]
    show_all: bool,

    /// Show detailed metrics and debug logging
    #[arg(long, default_value_t = false)]
    verbose: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Output path (`-` for stdout)
    #[arg(long, default_value = "-")]
    output: PathBuf,
}

#[derive(Copy, Clone, ValueEnum, Debug)]
enum OutputFormat {
    Table,
    Csv,
    Json,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mission = match &cli.mission {
        Some(path) => load_mission_config(path)
            .with_context(|| format!("loading mission file {}", path.display()))?,
        None => MissionConfig::default(),
    };
    let requirements = build_requirements(&cli, &mission)?;
    requirements.validate()?;

    let catalog = load_catalog(&cli.data)
        .with_context(|| format!("loading thruster catalog {}", cli.data.display()))?;
    tracing::info!(thrusters = catalog.len(), "catalog loaded");

    let mode = if cli.show_all {
        SelectionMode::All
    } else {
        SelectionMode::FeasibleOnly
    };
    let results = select_with(&catalog, &requirements, mode)?;

    let mut writer = export::writer_for_path(&cli.output)
        .with_context(|| format!("opening output {}", cli.output.display()))?;
    match cli.format {
        OutputFormat::Table => write_table(
            &mut *writer,
            mission.name.as_deref(),
            &cli.data,
            catalog.len(),
            &requirements,
            &results,
            cli.verbose,
        )?,
        OutputFormat::Csv => ranking::write_csv(&mut *writer, &results)?,
        OutputFormat::Json => ranking::write_json(&mut *writer, &requirements, &results)?,
    }
    writer.flush()?;
    Ok(())
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn build_requirements(cli: &Cli, mission: &MissionConfig) -> anyhow::Result<MissionRequirements> {
    let delta_v = required(cli.delta_v, mission.delta_v_m_s, "--delta-v", "delta_v_m_s")?;
    let sat_mass = required(
        cli.sat_mass,
        mission.satellite_dry_mass_kg,
        "--sat-mass",
        "satellite_dry_mass_kg",
    )?;
    let power = required(
        cli.power,
        mission.available_power_w,
        "--power",
        "available_power_w",
    )?;
    let budget = required(cli.budget, mission.mass_budget_kg, "--budget", "mass_budget_kg")?;

    let file_weights = mission.weights.map(|w| RankingWeights::new(w.mass, w.time));
    let defaults = file_weights.unwrap_or_default();
    let mut weights = RankingWeights::new(
        cli.mass_weight.unwrap_or(defaults.mass),
        cli.time_weight.unwrap_or(defaults.time),
    );
    if cli.normalize_weights {
        weights = match weights.normalized() {
            Some(normalized) => normalized,
            None => bail!("at least one of the weights must be positive to normalize"),
        };
    }

    Ok(MissionRequirements::new(delta_v, sat_mass, power, budget)
        .with_min_trl(cli.min_trl.or(mission.min_trl).unwrap_or(DEFAULT_MIN_TRL))
        .with_duty_cycle(
            cli.duty_cycle
                .or(mission.duty_cycle)
                .unwrap_or(DEFAULT_DUTY_CYCLE),
        )
        .with_weights(weights))
}

fn required(
    flag: Option<f64>,
    file: Option<f64>,
    flag_name: &str,
    key: &str,
) -> anyhow::Result<f64> {
    match flag.or(file) {
        Some(value) => Ok(value),
        None => bail!("missing {flag_name} (or `{key}` in the mission file)"),
    }
}

fn write_table(
    w: &mut dyn Write,
    mission_name: Option<&str>,
    catalog_path: &Path,
    catalog_len: usize,
    req: &MissionRequirements,
    results: &[EvaluationResult<'_>],
    verbose: bool,
) -> io::Result<()> {
    let rule = "=".repeat(80);
    writeln!(w, "{rule}")?;
    writeln!(w, "THRUSTER SELECTION RESULTS")?;
    writeln!(w, "{rule}")?;
    if let Some(name) = mission_name {
        writeln!(w, "Mission            : {name}")?;
    }
    writeln!(
        w,
        "Catalog            : {} ({} thrusters)",
        catalog_path.display(),
        catalog_len
    )?;
    writeln!(w, "Delta-v            : {} m/s", req.delta_v_m_s)?;
    writeln!(w, "Spacecraft dry mass: {} kg", req.spacecraft_dry_mass_kg)?;
    writeln!(w, "Available power    : {} W", req.available_power_w)?;
    writeln!(w, "Mass budget        : {} kg", req.mass_budget_kg)?;
    writeln!(w, "Minimum TRL        : {}", req.min_trl)?;
    writeln!(w, "Duty cycle         : {:.2}", req.duty_cycle)?;
    writeln!(
        w,
        "Weights            : mass {:.3}, time {:.3}",
        req.weights.mass, req.weights.time
    )?;

    let (feasible, infeasible): (Vec<_>, Vec<_>) = results.iter().partition(|r| r.is_accepted());
    writeln!(w)?;
    writeln!(
        w,
        "Summary: {} feasible, {} infeasible shown",
        feasible.len(),
        infeasible.len()
    )?;

    if feasible.is_empty() {
        writeln!(w)?;
        writeln!(w, "No feasible thruster for this mission.")?;
    } else {
        writeln!(w)?;
        writeln!(w, "{rule}")?;
        writeln!(w, "FEASIBLE THRUSTERS (ranked by composite score, lower is better)")?;
        writeln!(w, "{rule}")?;
    }

    for (i, result) in feasible.iter().enumerate() {
        let t = result.thruster;
        writeln!(w)?;
        writeln!(w, "{}. {} ({})", i + 1, t.name, t.family)?;
        if !t.manufacturer.is_empty() {
            writeln!(w, "   Manufacturer: {}", t.manufacturer)?;
        }
        if let Some(s) = result.score {
            writeln!(
                w,
                "   Score: {:.3} (mass: {:.3}, time: {:.3})",
                s.composite, s.mass_ratio, s.time_ratio
            )?;
        }
        writeln!(
            w,
            "   Thrust: {:.3} mN  |  Isp: {} s  |  Power: {} W  |  TRL: {}",
            n_to_mn(t.thrust_n),
            t.isp_s,
            t.power_w,
            t.trl
        )?;
        if let Some(p) = result.performance {
            let days = seconds_to_days(p.calendar_duration_s);
            writeln!(
                w,
                "   Thruster mass: {:.3} kg  |  Propellant: {:.3} kg  |  Total: {:.3} kg",
                t.dry_mass_kg, p.propellant_mass_kg, p.total_propulsion_mass_kg
            )?;
            writeln!(
                w,
                "   Mission duration: {:.1} days ({:.1} months)",
                days,
                days / 30.0
            )?;
            writeln!(
                w,
                "   Propellant fraction: {:.1}%  |  Est. burns: {}",
                p.propellant_fraction * 100.0,
                p.estimated_burns
            )?;
            if verbose {
                let (d, h, m) = split_duration(p.burn_duration_s);
                writeln!(w, "   Firing time: {d}d {h}h {m}m")?;
                writeln!(
                    w,
                    "   Exhaust velocity: {:.0} m/s  |  Thrust/power: {:.2} mN/kW",
                    p.exhaust_velocity_m_s,
                    p.thrust_to_power_n_per_w * 1.0e6
                )?;
                if !t.propellant.is_empty() {
                    writeln!(w, "   Propellant type: {}", t.propellant)?;
                }
                if let Some(eta) = t.thrust_efficiency {
                    writeln!(w, "   Thrust efficiency: {:.0}%", eta * 100.0)?;
                }
            }
        }
    }

    if !infeasible.is_empty() {
        writeln!(w)?;
        writeln!(w, "{rule}")?;
        writeln!(w, "INFEASIBLE THRUSTERS")?;
        writeln!(w, "{rule}")?;
        for result in &infeasible {
            let t = result.thruster;
            writeln!(w)?;
            writeln!(w, "- {} ({})", t.name, t.family)?;
            if let Some(reason) = result.verdict.rejection() {
                writeln!(w, "  Reason: {reason}")?;
            }
            if verbose {
                if let Some(p) = result.performance {
                    writeln!(
                        w,
                        "  Power: {} W  |  TRL: {}  |  Total mass: {:.3} kg",
                        t.power_w, t.trl, p.total_propulsion_mass_kg
                    )?;
                }
            }
        }
    }

    writeln!(w)?;
    writeln!(w, "{rule}")?;
    Ok(())
}
