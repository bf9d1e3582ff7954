//! Export helpers for CSV and JSON ranking artifacts.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Create a writer for the target path, handling stdout (`-`) by convention.
pub fn writer_for_path(path: &Path) -> io::Result<Box<dyn Write>> {
    if path == Path::new("-") {
        return Ok(Box::new(BufWriter::new(io::stdout())));
    }
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let file = File::create(path)?;
    Ok(Box::new(BufWriter::new(file)))
}

pub mod ranking {
    use std::io::{self, Write};

    use serde::Serialize;
    use serde_json::to_writer_pretty;
    use thruster_evaluator::{EvaluationResult, MissionRequirements};

    pub const HEADER: &str = "rank,id,name,family,manufacturer,verdict,isp_s,thrust_n,power_w,trl,dry_mass_kg,propellant_mass_kg,total_propulsion_mass_kg,burn_duration_s,calendar_duration_s,thrust_to_power_n_per_w,propellant_fraction,estimated_burns,mass_ratio,time_ratio,score";

    /// Write the ranking as CSV. Rejected rows carry an empty rank and score.
    pub fn write_csv(writer: &mut dyn Write, results: &[EvaluationResult<'_>]) -> io::Result<()> {
        writeln!(writer, "{}", HEADER)?;
        let mut rank = 0usize;
        for result in results {
            let rank_field = if result.is_accepted() {
                rank += 1;
                rank.to_string()
            } else {
                String::new()
            };
            let t = result.thruster;
            write!(
                writer,
                "{},{},{},{},{},{},{},{},{},{},{}",
                rank_field,
                csv_field(&t.id),
                csv_field(&t.name),
                t.family,
                csv_field(&t.manufacturer),
                result.verdict,
                t.isp_s,
                t.thrust_n,
                t.power_w,
                t.trl,
                t.dry_mass_kg,
            )?;
            match result.performance {
                Some(p) => write!(
                    writer,
                    ",{:.6},{:.6},{:.3},{:.3},{:.6e},{:.6},{}",
                    p.propellant_mass_kg,
                    p.total_propulsion_mass_kg,
                    p.burn_duration_s,
                    p.calendar_duration_s,
                    p.thrust_to_power_n_per_w,
                    p.propellant_fraction,
                    p.estimated_burns,
                )?,
                None => write!(writer, ",,,,,,,")?,
            }
            match result.score {
                Some(s) => writeln!(
                    writer,
                    ",{:.6},{:.6},{:.6}",
                    s.mass_ratio, s.time_ratio, s.composite
                )?,
                None => writeln!(writer, ",,,")?,
            }
        }
        Ok(())
    }

    fn csv_field(value: &str) -> String {
        if value.contains([',', '"', '\n']) {
            format!("\"{}\"", value.replace('"', "\"\""))
        } else {
            value.to_string()
        }
    }

    #[derive(Serialize)]
    struct MissionSummary {
        delta_v_m_s: f64,
        spacecraft_dry_mass_kg: f64,
        available_power_w: f64,
        mass_budget_kg: f64,
        min_trl: u8,
        duty_cycle: f64,
        mass_weight: f64,
        time_weight: f64,
    }

    #[derive(Serialize)]
    struct Entry<'a> {
        rank: Option<usize>,
        id: &'a str,
        name: &'a str,
        family: &'static str,
        manufacturer: &'a str,
        propellant: &'a str,
        accepted: bool,
        rejection: Option<&'static str>,
        isp_s: f64,
        thrust_n: f64,
        power_w: f64,
        trl: u8,
        dry_mass_kg: f64,
        propellant_mass_kg: Option<f64>,
        total_propulsion_mass_kg: Option<f64>,
        burn_duration_s: Option<f64>,
        calendar_duration_s: Option<f64>,
        thrust_to_power_n_per_w: Option<f64>,
        propellant_fraction: Option<f64>,
        estimated_burns: Option<u64>,
        mass_ratio: Option<f64>,
        time_ratio: Option<f64>,
        score: Option<f64>,
    }

    #[derive(Serialize)]
    struct Report<'a> {
        mission: MissionSummary,
        accepted: usize,
        rejected: usize,
        results: Vec<Entry<'a>>,
    }

    /// Write the mission and its ranking as a pretty-printed JSON document.
    pub fn write_json(
        writer: &mut dyn Write,
        requirements: &MissionRequirements,
        results: &[EvaluationResult<'_>],
    ) -> io::Result<()> {
        let mut rank = 0usize;
        let entries: Vec<Entry<'_>> = results
            .iter()
            .map(|result| {
                let t = result.thruster;
                let p = result.performance;
                let s = result.score;
                Entry {
                    rank: result.is_accepted().then(|| {
                        rank += 1;
                        rank
                    }),
                    id: &t.id,
                    name: &t.name,
                    family: t.family.label(),
                    manufacturer: &t.manufacturer,
                    propellant: &t.propellant,
                    accepted: result.is_accepted(),
                    rejection: result.verdict.rejection().map(|r| r.as_str()),
                    isp_s: t.isp_s,
                    thrust_n: t.thrust_n,
                    power_w: t.power_w,
                    trl: t.trl,
                    dry_mass_kg: t.dry_mass_kg,
                    propellant_mass_kg: p.map(|p| p.propellant_mass_kg),
                    total_propulsion_mass_kg: p.map(|p| p.total_propulsion_mass_kg),
                    burn_duration_s: p.map(|p| p.burn_duration_s),
                    calendar_duration_s: p.map(|p| p.calendar_duration_s),
                    thrust_to_power_n_per_w: p.map(|p| p.thrust_to_power_n_per_w),
                    propellant_fraction: p.map(|p| p.propellant_fraction),
                    estimated_burns: p.map(|p| p.estimated_burns),
                    mass_ratio: s.map(|s| s.mass_ratio),
                    time_ratio: s.map(|s| s.time_ratio),
                    score: s.map(|s| s.composite),
                }
            })
            .collect();

        let accepted = entries.iter().filter(|e| e.accepted).count();
        let report = Report {
            mission: MissionSummary {
                delta_v_m_s: requirements.delta_v_m_s,
                spacecraft_dry_mass_kg: requirements.spacecraft_dry_mass_kg,
                available_power_w: requirements.available_power_w,
                mass_budget_kg: requirements.mass_budget_kg,
                min_trl: requirements.min_trl,
                duty_cycle: requirements.duty_cycle,
                mass_weight: requirements.weights.mass,
                time_weight: requirements.weights.time,
            },
            accepted,
            rejected: entries.len() - accepted,
            results: entries,
        };

        to_writer_pretty(&mut *writer, &report)?;
        writeln!(writer)
    }
}
