// src/main.rs

use glam::DMat4;
use spiral_pattern::host_lib::{CommandEvent, CommandInputs, CommandSession, MemoryScene};
use spiral_pattern::{ConfigError, PatternConfig, PatternParameters, SpiralPlacementGenerator};

fn load_config() -> Result<PatternConfig, ConfigError> {
    match std::env::args().nth(1) {
        Some(path) => PatternConfig::from_path(path),
        None => {
            log::info!("No config given, using dialog defaults");
            Ok(PatternConfig::default())
        }
    }
}

// Single- and dual-spiral variants of the configured pattern, generated side
// by side on the blocking pool.
async fn summarize_variants(params: PatternParameters) {
    let variants = [0.0, params.primary_pitch() * 0.5, params.primary_pitch() * 2.0]
        .into_iter()
        .filter_map(|secondary| {
            PatternParameters::new(
                params.instance_count(),
                params.primary_pitch(),
                secondary,
                params.diameter(),
            )
            .ok()
        });

    let tasks: Vec<_> = variants
        .map(|variant| {
            tokio::task::spawn_blocking(move || {
                let placements = SpiralPlacementGenerator::generate(&variant);
                let top = placements.last().map(|p| p.height()).unwrap_or(0.0);
                (variant.secondary_pitch(), top)
            })
        })
        .collect();

    for task in tasks {
        match task.await {
            Ok((secondary, top)) => {
                log::info!("secondary pitch {:.4}: top copy at height {:.5}", secondary, top)
            }
            Err(e) => log::error!("Variant task failed: {}", e),
        }
    }
}

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = load_config()?;
    let params = config.to_parameters()?;

    let mut scene = MemoryScene::new();
    let seed = scene.add_body("Seed", DMat4::IDENTITY);
    let inputs = CommandInputs { source: seed, params };

    {
        let mut session = CommandSession::new(&mut scene);
        session.handle(CommandEvent::ExecutePreview(inputs.clone()))?;
        session.handle(CommandEvent::Execute(inputs))?;
        session.handle(CommandEvent::Destroy)?;
    }

    for body in scene.copies_of(seed) {
        let p = body.position();
        println!("{:<12} x={:>9.5} y={:>9.5} z={:>9.5}", body.name, p.x, p.y, p.z);
    }

    summarize_variants(params).await;
    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        log::error!("{}", e);
        eprintln!("spiral_pattern: {}", e);
        std::process::exit(1);
    }
}
