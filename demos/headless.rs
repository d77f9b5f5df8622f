// demos/headless.rs
// Run with:
//   RUST_LOG=bunny_harvest=info cargo run --example headless

use bunny_harvest::autoplay::{AutoplayConfig, Autopilot};
use bunny_harvest::{SimConfig, Session};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .compact()
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => match SimConfig::from_file(std::path::Path::new(&path)) {
            Ok(cfg) => cfg,
            Err(err) => {
                eprintln!("{err}");
                std::process::exit(1);
            }
        },
        None => SimConfig::builtin(),
    };

    let mut session = Session::new(config);
    let mut pilot = Autopilot::new(
        AutoplayConfig { frame_dt: 1.0 / 30.0, ..AutoplayConfig::default() },
        42,
    );

    println!("== Bunny Harvest (headless) ==");
    for round in 1..=12 {
        let Some(report) = pilot.play_round(&mut session) else {
            println!("round {round}: did not finish");
            break;
        };
        println!(
            "round {round:>2}  tier {:?}  end {:?}  population {:.0}  gems {:.0}",
            report.level, report.end, report.final_population, report.gems_after
        );
        for event in session.drain_events() {
            tracing::debug!(?event);
        }
    }
}
