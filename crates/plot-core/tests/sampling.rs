// File: crates/plot-core/tests/sampling.rs
// Purpose: Sampling and statistics properties of generated chart data.

use plot_core::{generate_chart_spec, ChartSpec, ParameterError, Parameters};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn seeded() -> StdRng {
    StdRng::seed_from_u64(7)
}

#[test]
fn sample_has_count_members_of_progression() {
    let params = Parameters::new(5, 50, 7, 200).unwrap();
    let progression: Vec<i64> = params.progression().collect();
    assert_eq!(progression, vec![5, 12, 19, 26, 33, 40, 47]);

    let mut rng = seeded();
    let spec = ChartSpec::generate(&params, &mut rng);
    assert_eq!(spec.values.len(), 200);
    for v in &spec.values {
        assert!(progression.contains(v), "{v} not in progression");
    }
}

#[test]
fn statistics_match_sample() {
    let params = Parameters::new(-20, 20, 3, 64).unwrap();
    let mut rng = seeded();
    let spec = ChartSpec::generate(&params, &mut rng);

    let max = *spec.values.iter().max().unwrap();
    let min = *spec.values.iter().min().unwrap();
    assert_eq!(spec.max, max);
    assert_eq!(spec.min, min);
    assert_eq!(spec.difference, max - min);
    assert!(spec.difference >= 0);
}

#[test]
fn repeated_generation_stays_valid() {
    // Two runs with identical parameters: samples are independent but both
    // must satisfy the membership property.
    let params = Parameters::new(0, 30, 5, 50).unwrap();
    let mut rng = seeded();
    let first = ChartSpec::generate(&params, &mut rng);
    let second = ChartSpec::generate(&params, &mut rng);
    for spec in [&first, &second] {
        assert_eq!(spec.values.len(), 50);
        for v in &spec.values {
            assert!(v % 5 == 0 && (0..=30).contains(v));
        }
    }
}

#[test]
fn single_point_range() {
    let params = Parameters::new(42, 42, 1, 1).unwrap();
    let mut rng = seeded();
    let spec = ChartSpec::generate(&params, &mut rng);
    assert_eq!(spec.values, vec![42]);
    assert_eq!(spec.difference, 0);
}

#[test]
fn progression_is_inclusive_of_reachable_max() {
    assert_eq!(Parameters::new(0, 1000, 10, 1).unwrap().progression_len(), 101);
    // An unreachable max is truncated, never overshot.
    let params = Parameters::new(0, 10, 3, 1).unwrap();
    let progression: Vec<i64> = params.progression().collect();
    assert_eq!(progression, vec![0, 3, 6, 9]);
}

#[test]
fn multiples_of_ten_scenario() {
    let mut rng = seeded();
    let spec = generate_chart_spec("0", "1000", "10", "25", &mut rng).unwrap();
    assert_eq!(spec.values.len(), 25);
    for v in &spec.values {
        assert!(v % 10 == 0 && (0..=1000).contains(v));
    }
    assert!(spec.difference <= 1000);
}

#[test]
fn rejects_bad_input() {
    let mut rng = seeded();
    assert!(matches!(
        generate_chart_spec("abc", "10", "1", "5", &mut rng),
        Err(ParameterError::NotAnInteger { field: "min", .. })
    ));
    assert!(matches!(
        generate_chart_spec("0", "1.5", "1", "5", &mut rng),
        Err(ParameterError::NotAnInteger { field: "max", .. })
    ));
    assert!(matches!(
        generate_chart_spec("0", "10", "0", "5", &mut rng),
        Err(ParameterError::StepTooSmall(0))
    ));
    assert!(matches!(
        generate_chart_spec("0", "10", "1", "0", &mut rng),
        Err(ParameterError::CountTooSmall(0))
    ));
    assert!(matches!(
        generate_chart_spec("10", "0", "1", "5", &mut rng),
        Err(ParameterError::EmptyRange { min: 10, max: 0 })
    ));
}

#[test]
fn parse_trims_whitespace() {
    let params = Parameters::parse(" 0 ", "100", "\t10", "5 ").unwrap();
    assert_eq!(params, Parameters::new(0, 100, 10, 5).unwrap());
}
