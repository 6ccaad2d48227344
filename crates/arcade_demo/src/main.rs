//! Headless arcade demo
//!
//! Usage: `arcade_demo [engine.toml] [scene.ron]`
//!
//! Missing files fall back to built-in defaults. Without a window the run
//! is bounded: when the engine configuration sets no frame limit, the demo
//! stops after [`DEFAULT_MAX_FRAMES`].

mod behaviours;
mod config;
mod console;
mod scene;

use arcade_engine::config::Config;
use arcade_engine::foundation::logging;
use arcade_engine::prelude::{Engine, EngineConfig};
use config::SceneConfig;
use console::{ConsoleUi, DEFAULT_REPORT_INTERVAL};

/// Frame limit used when the engine configuration has none
const DEFAULT_MAX_FRAMES: u64 = 240;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();

    let mut args = std::env::args().skip(1);
    let engine_path = args.next().unwrap_or_else(|| "config/engine.toml".to_string());
    let scene_path = args.next().unwrap_or_else(|| "config/scene.ron".to_string());

    let mut engine_config = EngineConfig::load_or_default(&engine_path)?;
    engine_config.max_frames.get_or_insert(DEFAULT_MAX_FRAMES);
    let scene = SceneConfig::load_or_default(&scene_path)?;

    let ui = ConsoleUi::new(scene.input_script.clone(), DEFAULT_REPORT_INTERVAL);
    let mut engine = Engine::new(engine_config, ui);
    let spawned = scene::populate(&mut engine, &scene);
    log::info!("Spawned {} of {} objects", spawned.len(), scene.objects.len());

    let stats = engine.run()?;
    log::info!(
        "Finished after {} frames ({:.1} fps average), {} objects left",
        stats.frame_count,
        stats.average_fps(),
        engine.world().len()
    );
    Ok(())
}
