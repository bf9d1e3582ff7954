//! Selector: evaluate a whole catalog, drop infeasible candidates, score, and rank.

use thruster_core::time::seconds_to_years;
use thruster_evaluator::{
    EvaluationError, EvaluationResult, MissionRequirements, Performance, RankingWeights, Score,
    evaluate,
};
use thruster_propulsion::ThrusterSpec;
use tracing::{info, warn};

/// Which evaluations `select_with` returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionMode {
    /// Accepted candidates only, ranked by score.
    #[default]
    FeasibleOnly,
    /// Ranked accepted candidates followed by every rejection in catalog order.
    All,
}

/// Composite score of an accepted candidate.
///
/// `mass_weight × mass / budget + time_weight × calendar_duration / year`. Weights are
/// applied as given, without normalisation.
pub fn score(
    performance: &Performance,
    mass_budget_kg: f64,
    weights: &RankingWeights,
) -> Score {
    let mass_ratio = performance.total_propulsion_mass_kg / mass_budget_kg;
    let time_ratio = seconds_to_years(performance.calendar_duration_s);
    Score {
        mass_ratio,
        time_ratio,
        composite: weights.mass * mass_ratio + weights.time * time_ratio,
    }
}

/// Rank the feasible thrusters of `catalog` for the mission, best first.
///
/// An empty result is a normal outcome meaning nothing fits.
pub fn select<'a>(
    catalog: &'a [ThrusterSpec],
    requirements: &MissionRequirements,
) -> Result<Vec<EvaluationResult<'a>>, EvaluationError> {
    select_with(catalog, requirements, SelectionMode::FeasibleOnly)
}

/// Rank the catalog, optionally keeping rejected candidates for diagnostics.
///
/// Ties keep catalog order. The first malformed record aborts the whole request.
pub fn select_with<'a>(
    catalog: &'a [ThrusterSpec],
    requirements: &MissionRequirements,
    mode: SelectionMode,
) -> Result<Vec<EvaluationResult<'a>>, EvaluationError> {
    requirements.validate()?;
    if requirements.weights.is_degenerate() {
        warn!("both ranking weights are zero; candidates will keep catalog order");
    }

    let mut accepted = Vec::new();
    let mut rejected = Vec::new();
    for thruster in catalog {
        let mut result = evaluate(thruster, requirements)?;
        match (result.is_accepted(), result.performance) {
            (true, Some(performance)) => {
                result.score = Some(score(
                    &performance,
                    requirements.mass_budget_kg,
                    &requirements.weights,
                ));
                accepted.push(result);
            }
            _ => rejected.push(result),
        }
    }

    // `sort_by` is stable, so equal scores keep catalog order.
    accepted.sort_by(|a, b| composite(a).total_cmp(&composite(b)));

    info!(
        catalog = catalog.len(),
        accepted = accepted.len(),
        rejected = rejected.len(),
        "thruster selection complete"
    );

    if mode == SelectionMode::All {
        accepted.extend(rejected);
    }
    Ok(accepted)
}

fn composite(result: &EvaluationResult<'_>) -> f64 {
    result.score.map(|s| s.composite).unwrap_or(f64::INFINITY)
}
