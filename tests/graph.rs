// tests/graph.rs
use bunny_harvest::graph::{BucketPolicy, TimeGraph};

#[test]
fn init_seeds_two_points_at_initial_value() {
    let g = TimeGraph::new(25.0, 100.0, false, 100);
    assert_eq!(g.len(), 2);
    for p in g.points() {
        assert_eq!(p.time, 0.0);
        assert!((p.value - 0.25).abs() < 1e-12);
    }
}

#[test]
fn first_sample_at_time_zero_matches_linear_normalization() {
    let mut g = TimeGraph::new(40.0, 200.0, false, 100);
    g.add_sample(0.0, 40.0);
    assert_eq!(g.len(), 2);
    assert!((g.points()[0].value - 40.0 / 200.0).abs() < 1e-12);
    assert!((g.points()[1].value - 40.0 / 200.0).abs() < 1e-12);
}

#[test]
fn samples_within_a_bucket_do_not_grow_the_series() {
    let mut g = TimeGraph::new(1.0, 1e10, true, 100);
    for i in 0..10 {
        g.add_sample(0.001 * i as f64, 10.0 + i as f64);
    }
    assert_eq!(g.len(), 2);
    // last write wins
    assert!((g.points()[1].value - 19f64.log10() / 10.0).abs() < 1e-12);
}

#[test]
fn crossing_a_bucket_grows_by_exactly_one() {
    let mut g = TimeGraph::new(0.0, 1.0, false, 10);
    g.add_sample(0.05, 0.5);
    assert_eq!(g.len(), 2);
    g.add_sample(0.15, 0.6);
    assert_eq!(g.len(), 3);
    g.add_sample(0.19, 0.7);
    assert_eq!(g.len(), 3);
    // skipping several buckets still opens a single point
    g.add_sample(0.95, 0.8);
    assert_eq!(g.len(), 4);

    let times: Vec<f64> = g.points().iter().map(|p| p.time).collect();
    assert_eq!(times, vec![0.0, 0.05, 0.19, 0.95]);
    assert!((g.points()[2].value - 0.7).abs() < 1e-12);
}

#[test]
fn closed_buckets_are_never_rewritten() {
    let mut g = TimeGraph::new(0.0, 1.0, false, 10);
    g.add_sample(0.15, 0.6);
    let closed = g.points()[2];
    g.add_sample(0.25, 0.9);
    g.add_sample(0.21, 0.1);
    assert_eq!(g.points()[2], closed);
}

#[test]
fn log_scale_clamps_below_one_and_above_max() {
    let g = TimeGraph::new(1.0, 1e10, true, 100);
    assert_eq!(g.normalize(-5.0), 0.0);
    assert_eq!(g.normalize(0.5), 0.0);
    assert!((g.normalize(1e5) - 0.5).abs() < 1e-12);
    assert_eq!(g.normalize(1e12), 1.0);
}

#[test]
fn linear_scale_clamps_to_unit_range() {
    let g = TimeGraph::new(0.0, 50.0, false, 100);
    assert_eq!(g.normalize(-1.0), 0.0);
    assert_eq!(g.normalize(100.0), 1.0);
}

#[test]
fn mean_policy_averages_within_a_bucket() {
    let mut g = TimeGraph::new(0.0, 100.0, false, 10).with_policy(BucketPolicy::Mean);
    g.add_sample(0.01, 10.0);
    g.add_sample(0.02, 20.0);
    g.add_sample(0.03, 60.0);
    assert_eq!(g.len(), 2);
    assert!((g.points()[1].value - 0.3).abs() < 1e-12);

    g.add_sample(0.11, 50.0);
    assert_eq!(g.len(), 3);
    assert!((g.points()[2].value - 0.5).abs() < 1e-12);
}
