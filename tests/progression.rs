// tests/progression.rs
use bunny_harvest::systems::progression::Progression;
use bunny_harvest::{SimConfig, UnlockLevel};

#[test]
fn upgrade_needs_strictly_more_gems_than_cost() {
    let cfg = SimConfig::builtin();
    let mut p = Progression::default();
    p.award(199.0);
    assert_eq!(p.upgrade(&cfg), None);
    assert_eq!(p.level(), UnlockLevel::NormalBunnies);

    p.award(1.0);
    assert_eq!(p.gems(), 200.0);
    assert_eq!(p.upgrade(&cfg), None, "equal to cost is not enough");

    p.award(1.0);
    assert_eq!(p.upgrade(&cfg), Some(UnlockLevel::SmarterBunnies));
    assert_eq!(p.gems(), 1.0);
}

#[test]
fn upgrades_advance_one_tier_at_a_time_up_to_the_top() {
    let cfg = SimConfig::builtin();
    let mut p = Progression::default();
    p.award(10_000.0);
    assert_eq!(p.upgrade(&cfg), Some(UnlockLevel::SmarterBunnies));
    assert_eq!(p.upgrade(&cfg), Some(UnlockLevel::BunnyAutonomy));
    assert_eq!(p.upgrade(&cfg), Some(UnlockLevel::SentientBunnies));
    assert_eq!(p.upgrade(&cfg), None);
    assert_eq!(p.gems(), 10_000.0 - 200.0 - 400.0 - 600.0);
    assert!(p.is_unlocked(UnlockLevel::BunnyAutonomy));
}

#[test]
fn reset_zeroes_gems_and_level() {
    let cfg = SimConfig::builtin();
    let mut p = Progression::default();
    p.award(500.0);
    p.upgrade(&cfg);
    p.reset();
    assert_eq!(p.gems(), 0.0);
    assert_eq!(p.level(), UnlockLevel::NormalBunnies);
    assert!(!p.is_unlocked(UnlockLevel::SmarterBunnies));
}

#[test]
fn negative_or_nan_awards_are_ignored() {
    let mut p = Progression::default();
    p.award(-5.0);
    p.award(f64::NAN);
    assert_eq!(p.gems(), 0.0);
}

#[test]
fn offer_reports_title_progress_and_affordability() {
    let cfg = SimConfig::builtin();
    let mut p = Progression::default();
    p.award(150.7);
    let offer = p.offer(&cfg).expect("first tier has an offer");
    assert_eq!(offer.title, "Upgrade Bunnies");
    assert!(offer.description.ends_with("(150/200 gems)"), "{}", offer.description);
    assert!(!offer.affordable);

    p.award(100.0);
    assert!(p.offer(&cfg).is_some_and(|o| o.affordable));

    p.award(5_000.0);
    while p.upgrade(&cfg).is_some() {}
    assert!(p.offer(&cfg).is_none(), "top tier offers nothing");
}
