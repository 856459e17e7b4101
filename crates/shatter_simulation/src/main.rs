//! Headless симуляция SHATTER
//!
//! Прогоняет один раунд без рендера: синтетический skinned столб на двух
//! костях, несколько выстрелов, конец раунда, review (rewind).
//!
//! Usage: `shatter_simulation [config.json]`

use std::f32::consts::FRAC_PI_8;

use bevy::prelude::*;
use shatter_simulation::{
    create_headless_app, BonePalette, FrameInput, MeshSource, ShatterCommand, ShatterConfig,
    ShatterPlugin, ShatterSimulation,
};

const COLUMNS: usize = 12;
const ROWS: usize = 24;
const HEIGHT: f32 = 18.0;

fn main() {
    let config = match std::env::args().nth(1) {
        Some(path) => match load_config(&path) {
            Ok(config) => config,
            Err(err) => {
                eprintln!("Failed to load config {}: {}", path, err);
                std::process::exit(1);
            }
        },
        None => ShatterConfig::default(),
    };

    println!("Starting SHATTER headless simulation (seed: {})", config.seed);

    let mut app = create_headless_app(config.seed);
    app.insert_resource(config);
    app.add_plugins(ShatterPlugin::new(vec![column_mesh()]));

    for frame in 0..600u32 {
        let time = frame as f32 / 60.0;
        {
            let mut input = app.world_mut().resource_mut::<FrameInput>();
            input.skeletons = vec![sway_palette(time)];
            input.emitter_position = Vec3::new(0.0, HEIGHT * 0.5, -60.0);
            input.query_point = Some(Vec3::new(0.0, HEIGHT * 0.5, 0.0));
        }

        match frame {
            30 | 90 | 95 | 150 => {
                app.world_mut().send_event(ShatterCommand::Fire);
            }
            240 => {
                app.world_mut().send_event(ShatterCommand::EndRound);
            }
            300 => {
                app.world_mut().send_event(ShatterCommand::ReviewRound);
            }
            _ => {}
        }

        app.update();

        if frame % 100 == 0 {
            let simulation = app.world().resource::<ShatterSimulation>();
            let stats = simulation.stats();
            println!(
                "Frame {}: {} / {} pieces detached, direction {:?}",
                frame,
                stats.detached_pieces,
                stats.total_pieces,
                simulation.time_direction()
            );
        }
    }

    let simulation = app.world().resource::<ShatterSimulation>();
    let stats = simulation.stats();
    println!(
        "Round: {} attempts, {} hits, {} rejected fires",
        stats.shot_attempts, stats.hits, stats.rejected_fires
    );
    for marker in simulation.shot_ledger().markers() {
        println!(
            "  Shot #{} rank {}: {} pieces",
            marker.shot.id, marker.rank, marker.shot.hit_count
        );
    }

    println!("Simulation complete!");
}

fn load_config(path: &str) -> Result<ShatterConfig, Box<dyn std::error::Error>> {
    let json = std::fs::read_to_string(path)?;
    Ok(ShatterConfig::from_json_str(&json)?)
}

/// Вертикальная сетка вершин: низ на bone 0, верх на bone 1, середина смешана
fn column_mesh() -> MeshSource {
    let mut positions = Vec::with_capacity(COLUMNS * ROWS * 3);
    let mut bone_indices = Vec::with_capacity(COLUMNS * ROWS * 4);
    let mut bone_weights = Vec::with_capacity(COLUMNS * ROWS * 4);

    for row in 0..ROWS {
        let height = row as f32 / (ROWS - 1) as f32;
        for column in 0..COLUMNS {
            let x = column as f32 - COLUMNS as f32 * 0.5;
            positions.extend_from_slice(&[x, height * HEIGHT, 0.0]);
            bone_indices.extend_from_slice(&[0, 1, 0, 0]);
            bone_weights.extend_from_slice(&[1.0 - height, height, 0.0, 0.0]);
        }
    }

    MeshSource {
        name: "column".to_string(),
        positions: Some(positions),
        bone_indices: Some(bone_indices),
        bone_weights: Some(bone_weights),
        bone_count: Some(2),
    }
}

/// bone 0 неподвижна, bone 1 качается вокруг Z
fn sway_palette(time: f32) -> BonePalette {
    let angle = (time * 2.0).sin() * FRAC_PI_8;
    vec![Mat4::IDENTITY, Mat4::from_rotation_z(angle)]
}
