//! Provision a stage against the simulated host and play a short hover script.
//!
//! Usage: `hover-demo [manifest.json]`. Without a manifest the two-drone
//! stage is used. `RUST_LOG=debug` shows every issued transition.

use std::error::Error;
use xr_stage::{HoverEdge, StageApp, StageManifest};
use xr_stage_sim::{AssetLibrary, SessionRunner, SimHost};

const DT: f32 = 1.0 / 60.0;
const FRAMES: u32 = 90;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let manifest = match std::env::args().nth(1) {
        Some(path) => {
            log::info!("reading manifest {}", path);
            StageManifest::from_json(&std::fs::read_to_string(&path)?)?
        }
        None => StageManifest::default(),
    };

    let library = manifest
        .entities
        .iter()
        .fold(AssetLibrary::new(), |lib, e| lib.with_slow_asset(e.asset_id.clone(), 2));
    let mut runner = SessionRunner::new(SimHost::new(library), StageApp::new(&manifest));

    let report = runner.start().clone();
    for failure in &report.failures {
        log::warn!("entity {} ({}) missing: {}", failure.ordinal, failure.asset_id, failure.error);
    }

    let Some(target) = runner.app().and_then(|app| app.instance(0)).map(|i| i.id) else {
        log::info!("nothing provisioned, exiting");
        return Ok(());
    };

    // Hover in, leave before the grow finishes, then hover again.
    for frame in 0..FRAMES {
        match frame {
            0 | 60 => runner.push_hover(target, HoverEdge::Enter),
            8 => runner.push_hover(target, HoverEdge::Exit),
            _ => {}
        }
        runner.tick(DT);

        if frame % 10 == 0 {
            for node in runner.host().stage().iter() {
                log::info!("t={:.2}s {} scale={:.3}", runner.elapsed(), node.name, node.scale.x);
            }
        }
    }

    {
        let driver = runner.driver();
        log::info!(
            "issued {} transitions ({} superseded), {} still animating",
            driver.issued(),
            driver.superseded(),
            driver.active_count()
        );
    }
    runner.end();
    Ok(())
}
