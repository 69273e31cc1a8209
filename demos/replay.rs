//! Replay an input through a bundled automaton and print the transition log.
//!
//! ```text
//! cargo run --example replay -- email user.name@example.com
//! cargo run --example replay -- mod3 1213 --speed 5
//! RUST_LOG=statetrace=debug cargo run --example replay -- email a@b
//! ```

use statetrace::catalog::Module;
use statetrace::diagram::{DiagramTracker, Viewport};
use statetrace::engine::Automaton;
use statetrace::playback::{PlaybackConfig, PlaybackController, TransitionLog};
use std::error::Error;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let module: Module = args.next().as_deref().unwrap_or("email").parse()?;
    let input = args
        .next()
        .unwrap_or_else(|| module.placeholder().to_string());
    let speed = match (args.next().as_deref(), args.next()) {
        (Some("--speed"), Some(value)) => value.parse::<f64>()?,
        _ => 5.0,
    };

    let config = module.config()?;
    println!("== {} ==", module.title());
    for rule in config.grammar_rules() {
        println!("  {rule}");
    }

    let mut observers = (
        TransitionLog::for_config(&config),
        DiagramTracker::new(&config),
    );
    let settings = PlaybackConfig::default().with_speed(speed);
    let mut controller = PlaybackController::new(Automaton::new(config.clone())?, settings);

    let report = controller.play(&input, &mut observers).await?;

    let (log, tracker) = observers;
    for entry in log.entries() {
        println!("{entry}");
    }

    let scene = tracker.scene(&config, Viewport::new(800.0, 400.0));
    if let Some(node) = scene.nodes.iter().find(|n| n.active) {
        println!(
            "Active state: {} ({}) at ({:.0}, {:.0})",
            node.id, node.label, node.center.x, node.center.y
        );
    }
    println!(
        "Status: {} in {} ms",
        report.status(),
        report.duration().as_millis()
    );
    Ok(())
}
