mod common;

use common::{reference_mission, reference_thruster, thruster};
use thruster_selection::ranking::score;
use thruster_selection::{
    EvaluationError, RankingWeights, Rejection, SelectionMode, Verdict, select, select_with,
};

const SECONDS_PER_YEAR: f64 = 365.25 * 86_400.0;

#[test]
fn empty_catalog_yields_empty_ranking() {
    let ranked = select(&[], &reference_mission()).expect("empty catalog is not an error");
    assert!(ranked.is_empty());
}

#[test]
fn invalid_requirements_fail_even_for_empty_catalog() {
    let mission = reference_mission().with_duty_cycle(0.0);
    assert!(matches!(
        select(&[], &mission),
        Err(EvaluationError::InvalidRequirements(_))
    ));
}

#[test]
fn reference_score_matches_weighted_ratios() {
    let catalog = vec![reference_thruster()];
    let mission = reference_mission();
    let ranked = select(&catalog, &mission).unwrap();
    assert_eq!(ranked.len(), 1);

    let perf = ranked[0].performance.unwrap();
    let s = ranked[0].score.expect("accepted results are scored");
    let mass_ratio = perf.total_propulsion_mass_kg / 2.0;
    let time_ratio = perf.calendar_duration_s / SECONDS_PER_YEAR;
    assert!((s.mass_ratio - mass_ratio).abs() < 1e-12);
    assert!((s.time_ratio - time_ratio).abs() < 1e-12);
    assert!((s.composite - (0.4 * mass_ratio + 0.6 * time_ratio)).abs() < 1e-12);
    assert!(s.composite > 0.0);

    let again = select(&catalog, &mission).unwrap();
    assert_eq!(
        again[0].score.unwrap().composite.to_bits(),
        s.composite.to_bits()
    );
}

#[test]
fn weights_are_not_normalised() {
    let catalog = vec![reference_thruster()];
    let base = select(&catalog, &reference_mission()).unwrap()[0]
        .score
        .unwrap();
    let doubled_mission = reference_mission().with_weights(RankingWeights::new(0.8, 1.2));
    let doubled = select(&catalog, &doubled_mission).unwrap()[0]
        .score
        .unwrap();
    assert!((doubled.composite - 2.0 * base.composite).abs() < 1e-12);
}

#[test]
fn mass_budget_scenario_excludes_thruster() {
    let catalog = vec![reference_thruster()];
    let mut mission = reference_mission();
    mission.mass_budget_kg = 0.01;
    assert!(select(&catalog, &mission).unwrap().is_empty());

    let all = select_with(&catalog, &mission, SelectionMode::All).unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(
        all[0].verdict,
        Verdict::Rejected(Rejection::ExceedsMassBudget)
    );
    assert!(all[0].score.is_none());
}

#[test]
fn ranking_is_ascending_and_within_budget() {
    let catalog = vec![
        thruster("Slow", 3_000.0, 0.0005, 40.0, 0.9, 9),
        thruster("Heavy", 900.0, 0.05, 40.0, 1.6, 7),
        thruster("Balanced", 1_500.0, 0.01, 50.0, 1.0, 8),
        thruster("Hungry", 2_000.0, 0.02, 120.0, 0.8, 9),
        thruster("Overweight", 300.0, 0.05, 20.0, 1.5, 8),
    ];
    let mission = reference_mission();
    let ranked = select(&catalog, &mission).unwrap();

    assert!(!ranked.is_empty());
    for pair in ranked.windows(2) {
        assert!(pair[0].score.unwrap().composite <= pair[1].score.unwrap().composite);
    }
    for result in &ranked {
        assert!(result.is_accepted());
        assert!(result.performance.unwrap().total_propulsion_mass_kg <= mission.mass_budget_kg);
    }
    assert!(ranked.iter().all(|r| r.thruster.name != "Hungry"));
    assert!(ranked.iter().all(|r| r.thruster.name != "Overweight"));
}

#[test]
fn zero_weights_keep_catalog_order() {
    let catalog = vec![
        thruster("C", 3_000.0, 0.0005, 40.0, 0.9, 9),
        thruster("A", 1_500.0, 0.01, 50.0, 1.0, 8),
        thruster("B", 2_500.0, 0.002, 30.0, 0.5, 7),
    ];
    let mission = reference_mission().with_weights(RankingWeights::new(0.0, 0.0));
    let ranked = select(&catalog, &mission).unwrap();
    let names: Vec<_> = ranked.iter().map(|r| r.thruster.name.as_str()).collect();
    assert_eq!(names, ["C", "A", "B"]);
    assert!(ranked.iter().all(|r| r.score.unwrap().composite == 0.0));
}

#[test]
fn equal_scores_keep_catalog_order() {
    let mut first = reference_thruster();
    first.name = "First".into();
    let mut second = reference_thruster();
    second.name = "Second".into();
    let catalog = vec![first, second];
    let ranked = select(&catalog, &reference_mission()).unwrap();
    assert_eq!(ranked[0].thruster.name, "First");
    assert_eq!(ranked[1].thruster.name, "Second");
}

#[test]
fn all_mode_appends_rejections_in_catalog_order() {
    let catalog = vec![
        thruster("Hungry", 2_000.0, 0.02, 120.0, 0.8, 9),
        thruster("Good", 1_500.0, 0.01, 50.0, 1.0, 8),
        thruster("Immature", 1_500.0, 0.01, 50.0, 1.0, 3),
    ];
    let all = select_with(&catalog, &reference_mission(), SelectionMode::All).unwrap();
    let names: Vec<_> = all.iter().map(|r| r.thruster.name.as_str()).collect();
    assert_eq!(names, ["Good", "Hungry", "Immature"]);
    assert_eq!(all[1].verdict.rejection(), Some(Rejection::InsufficientPower));
    assert_eq!(all[2].verdict.rejection(), Some(Rejection::TrlTooLow));

    let feasible = select(&catalog, &reference_mission()).unwrap();
    assert_eq!(feasible.len(), 1);
}

#[test]
fn malformed_record_aborts_selection() {
    let catalog = vec![
        reference_thruster(),
        thruster("Broken", 1_500.0, -0.1, 50.0, 1.0, 8),
    ];
    match select(&catalog, &reference_mission()) {
        Err(EvaluationError::InvalidThruster { name, .. }) => assert_eq!(name, "Broken"),
        other => panic!("expected invalid thruster error, got {other:?}"),
    }
}

#[test]
fn score_helper_is_pure_arithmetic() {
    let perf = select(&[reference_thruster()], &reference_mission()).unwrap()[0]
        .performance
        .unwrap();
    let s = score(&perf, 4.0, &RankingWeights::new(1.0, 0.0));
    assert!((s.composite - perf.total_propulsion_mass_kg / 4.0).abs() < 1e-12);
}
