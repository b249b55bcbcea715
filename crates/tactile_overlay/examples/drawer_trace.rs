//! Drawer Trace
//!
//! Drives a drawer through open, a short drag that springs back, and a flick
//! that dismisses it, printing the panel offset at each frame. Thresholds can
//! be overridden with a TOML or JSON file passed as the first argument.
//!
//! Run with: RUST_LOG=debug cargo run -p tactile_overlay --example drawer_trace [config.toml]

use anyhow::{Context, Result};
use tactile_core::GestureSample;
use tactile_overlay::{Drawer, EngineConfig};

const FRAME_MS: f32 = 1000.0 / 60.0;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => EngineConfig::load(&path).with_context(|| format!("Failed to load {path}"))?,
        None => EngineConfig::default(),
    };

    let mut drawer = Drawer::new(config.drawer);
    drawer.on_settled(|state| println!("settled: {state:?}"));
    drawer.on_decision(|outcome| println!("decision: {outcome:?}"));

    println!("-- open");
    drawer.open();
    run_frames(&mut drawer, 60);

    println!("-- short drag");
    drawer.handle(&GestureSample::begin().at(0))?;
    for (i, dy) in [20.0, 45.0, 70.0].into_iter().enumerate() {
        drawer.handle(&GestureSample::moved(0.0, dy).at(100 * (i as u64 + 1)))?;
        println!("drag  translate_y = {:6.1}", drawer.translate_y());
    }
    drawer.handle(&GestureSample::end(0.0, 70.0).with_velocity(0.0, 40.0))?;
    run_frames(&mut drawer, 60);

    println!("-- flick");
    drawer.handle(&GestureSample::begin().at(2000))?;
    drawer.handle(&GestureSample::moved(0.0, 12.0).at(2016))?;
    drawer.handle(&GestureSample::moved(0.0, 30.0).at(2032))?;
    drawer.handle(&GestureSample::end(0.0, 30.0))?;
    run_frames(&mut drawer, 20);

    println!("mounted: {}", drawer.is_mounted());
    Ok(())
}

fn run_frames(drawer: &mut Drawer, frames: usize) {
    for _ in 0..frames {
        drawer.tick(FRAME_MS);
        println!("frame translate_y = {:6.1}", drawer.translate_y());
        if !drawer.state().is_animating() {
            break;
        }
    }
}
