// tests/config.rs
use bunny_harvest::config::BUILTIN_SIM_CONFIG;
use bunny_harvest::graph::BucketPolicy;
use bunny_harvest::systems::tiers::Series;
use bunny_harvest::widgets::Activity;
use bunny_harvest::{ConfigError, SimConfig, UnlockLevel};

fn edited(edit: impl FnOnce(&mut serde_json::Value)) -> String {
    let mut doc: serde_json::Value = serde_json::from_str(BUILTIN_SIM_CONFIG).expect("builtin parses");
    edit(&mut doc);
    doc.to_string()
}

#[test]
fn builtin_matches_the_game_constants() {
    let cfg = SimConfig::builtin();
    assert_eq!(cfg.tuning.max_age, 10_000.0);
    assert_eq!(cfg.tuning.years_per_second, 200.0);
    assert_eq!(cfg.tuning.win_civilization, 5e9);
    assert_eq!(cfg.limits.population.min, 2.0);
    assert_eq!(cfg.limits.carrots.max, 3e10);
    assert_eq!(cfg.graph.granularity, 100);
    assert_eq!(cfg.graph.policy, BucketPolicy::LastWrite);
    assert_eq!(cfg.upgrade_cost(UnlockLevel::NormalBunnies), Some(200.0));
    assert_eq!(cfg.upgrade_cost(UnlockLevel::BunnyAutonomy), Some(600.0));
    assert_eq!(cfg.upgrade_cost(UnlockLevel::SentientBunnies), None);
}

#[test]
fn tiers_reveal_controls_progressively() {
    let cfg = SimConfig::builtin();
    let normal = cfg.tier(UnlockLevel::NormalBunnies);
    assert!(normal.shows_button(Activity::Carrots) && !normal.shows_button(Activity::Mining));
    assert!(!normal.shows_graph(Series::Productivity));

    let autonomy = cfg.tier(UnlockLevel::BunnyAutonomy);
    assert!(autonomy.shows_slider(Activity::Mining) && !autonomy.shows_slider(Activity::Research));
    assert!(autonomy.fires_automatically(Activity::Carrots));

    let sentient = cfg.tier(UnlockLevel::SentientBunnies);
    assert!(sentient.shows_button(Activity::Research) && sentient.shows_graph(Series::Civilization));
}

#[test]
fn malformed_json_is_a_parse_error() {
    assert!(matches!(SimConfig::from_json_str("{ not json"), Err(ConfigError::Parse(_))));
}

#[test]
fn non_increasing_costs_are_rejected() {
    let json = edited(|doc| doc["tiers"][1]["upgrade"]["cost"] = serde_json::json!(150.0));
    assert!(matches!(SimConfig::from_json_str(&json), Err(ConfigError::Invalid(_))));
}

#[test]
fn weights_must_sum_to_one() {
    let json = edited(|doc| doc["tiers"][0]["weights"] = serde_json::json!([0.5, 0.0, 0.0]));
    let err = SimConfig::from_json_str(&json).expect_err("weights sum to 0.5");
    assert!(err.to_string().contains("sum"), "{err}");
}

#[test]
fn tier_count_and_order_are_checked() {
    let json = edited(|doc| {
        if let Some(tiers) = doc["tiers"].as_array_mut() {
            tiers.pop();
        }
    });
    assert!(matches!(SimConfig::from_json_str(&json), Err(ConfigError::Invalid(_))));

    let json = edited(|doc| doc["tiers"].as_array_mut().map_or((), |t| t.swap(0, 1)));
    assert!(matches!(SimConfig::from_json_str(&json), Err(ConfigError::Invalid(_))));
}

#[test]
fn mean_policy_can_be_selected() {
    let json = edited(|doc| doc["graph"]["policy"] = serde_json::json!("mean"));
    let cfg = SimConfig::from_json_str(&json).expect("valid");
    assert_eq!(cfg.graph.policy, BucketPolicy::Mean);
}

#[test]
fn missing_file_reports_its_path() {
    let err = SimConfig::from_file(std::path::Path::new("/definitely/not/here.json"))
        .expect_err("file does not exist");
    assert!(matches!(err, ConfigError::Read { .. }));
    assert!(err.to_string().contains("/definitely/not/here.json"));
}

#[test]
fn initial_world_must_lie_inside_its_limits() {
    for (field, value) in [("population", 0.5), ("civilization", 0.0), ("carrots", 0.5)] {
        let json = edited(|doc| doc["initial"][field] = serde_json::json!(value));
        let err = SimConfig::from_json_str(&json).expect_err("initial value below its floor");
        assert!(err.to_string().contains(field), "{err}");
    }

    let json = edited(|doc| doc["initial"]["population"] = serde_json::json!(2e10));
    assert!(matches!(SimConfig::from_json_str(&json), Err(ConfigError::Invalid(_))));
}

#[test]
fn productivity_may_start_below_its_floor() {
    let json = edited(|doc| doc["initial"]["productivity"] = serde_json::json!(20.0));
    let cfg = SimConfig::from_json_str(&json).expect("unmined productivity is allowed under 100");
    assert_eq!(cfg.initial.productivity, 20.0);
}
