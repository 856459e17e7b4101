//! SHATTER Simulation Core
//!
//! Skinned персонаж рассыпается на pieces (один на вершину), игрок стреляет
//! по ним, время можно крутить вперёд / назад / пауза.
//!
//! Архитектура:
//! - core (`ShatterSimulation`) = чистая симуляция, без рендера и ввода
//! - хост (Bevy app, headless binary, внешний движок) подаёт bone palettes,
//!   query point и команды, забирает `RenderFrame`

use std::time::Duration;

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

// Публичные модули
pub mod config;
pub mod logger;
pub mod pieces;
pub mod shooting;
pub mod simulation;
pub mod skinning;
pub mod targeting;
pub mod time_control;

// Re-export основных типов
pub use config::{ConfigError, ShatterConfig};
pub use logger::{init_logger, log, log_error, log_info, log_warning};
pub use pieces::{Piece, PieceState, PieceStore, Rgb};
pub use shooting::{FireOutcome, Shot, ShotLedger, ShotMarker};
pub use simulation::{RenderFrame, RoundStats, ShatterSimulation, ShotResolved, SimulationContext};
pub use skinning::{BonePalette, MeshSource, Rig, SkinError};
pub use targeting::{NeighborQuery, NeighborSnapshot, TargetingState};
pub use time_control::TimeDirection;

/// Детерминистичный RNG (seeded): reset tint + shot spread
#[derive(Resource)]
pub struct DeterministicRng {
    pub rng: ChaCha8Rng,
    pub seed: u64,
}

impl DeterministicRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }
}

/// Host → simulation команды (применяются перед tick того же кадра)
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub enum ShatterCommand {
    SetTimeDirection(TimeDirection),
    UpdateQueryPoint(Vec3),
    Fire,
    ResetRound,
    EndRound,
    ReviewRound,
}

/// Per-frame данные от хоста (анимация, pick point, камера)
#[derive(Resource, Debug, Clone, Default)]
pub struct FrameInput {
    pub query_point: Option<Vec3>,
    pub emitter_position: Vec3,
    /// Bone palettes по source index mesh'а
    pub skeletons: Vec<BonePalette>,
}

/// Главный plugin: ShatterSimulation как Resource + command/event plumbing
///
/// `ShatterConfig` берётся из World (если уже вставлен), иначе default.
///
/// Порядок в Update:
/// 1. apply_shatter_commands — ShatterCommand → методы симуляции
/// 2. advance_shatter_simulation — tick + ShotResolved events
pub struct ShatterPlugin {
    pub sources: Vec<MeshSource>,
}

impl ShatterPlugin {
    pub fn new(sources: Vec<MeshSource>) -> Self {
        Self { sources }
    }
}

impl Plugin for ShatterPlugin {
    fn build(&self, app: &mut App) {
        let config = app
            .world()
            .get_resource::<ShatterConfig>()
            .cloned()
            .unwrap_or_default();

        let rig = Rig::load(&self.sources);

        let simulation = match ShatterSimulation::new(config, rig.clone()) {
            Ok(simulation) => simulation,
            Err(err) => {
                log_error(&format!("❌ Invalid ShatterConfig ({}), using defaults", err));
                ShatterSimulation::with_default_config(rig)
            }
        };

        app.insert_resource(simulation)
            .init_resource::<FrameInput>()
            .add_event::<ShatterCommand>()
            .add_event::<ShotResolved>();

        // Update, не FixedUpdate: один tick на кадр рендера
        app.add_systems(
            Update,
            (apply_shatter_commands, advance_shatter_simulation).chain(),
        );
    }
}

/// Применяет все команды кадра в порядке поступления
pub fn apply_shatter_commands(
    mut commands: EventReader<ShatterCommand>,
    mut simulation: ResMut<ShatterSimulation>,
) {
    for command in commands.read() {
        match *command {
            ShatterCommand::SetTimeDirection(direction) => simulation.set_time_direction(direction),
            ShatterCommand::UpdateQueryPoint(point) => simulation.update_query_point(point),
            ShatterCommand::Fire => {
                let outcome = simulation.fire();
                if outcome != FireOutcome::Accepted {
                    log(&format!("Fire ignored: {:?}", outcome));
                }
            }
            ShatterCommand::ResetRound => simulation.reset_round(),
            ShatterCommand::EndRound => simulation.end_round(),
            ShatterCommand::ReviewRound => {
                let markers = simulation.review_round();
                log_info(&format!("⏪ Review: {} shot markers", markers.len()));
            }
        }
    }
}

/// Один tick симуляции на кадр; resolutions уходят наружу как ShotResolved
pub fn advance_shatter_simulation(
    time: Res<Time>,
    input: Res<FrameInput>,
    mut simulation: ResMut<ShatterSimulation>,
    mut resolved_events: EventWriter<ShotResolved>,
) {
    let ctx = SimulationContext {
        delta_secs: time.delta_secs(),
        query_point: input.query_point,
        emitter_position: input.emitter_position,
        skeletons: &input.skeletons,
    };

    let frame = simulation.tick(&ctx);
    for event in &frame.resolved {
        resolved_events.write(*event);
    }
}

/// Создаёт minimal Bevy App для headless симуляции
///
/// Время шагает ровно на 1/60s за update (первый update — нулевой delta).
pub fn create_headless_app(seed: u64) -> App {
    let mut app = App::new();
    init_logger();
    app.add_plugins(MinimalPlugins)
        .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f64(
            1.0 / 60.0,
        )))
        .insert_resource(ShatterConfig {
            seed,
            ..Default::default()
        });

    app
}

/// Snapshot кадра для сравнения детерминизма (transforms + colors, little-endian)
pub fn frame_snapshot(frame: &RenderFrame) -> Vec<u8> {
    let mut snapshot = Vec::with_capacity(8 + (frame.transforms.len() + frame.colors.len()) * 4);

    snapshot.extend_from_slice(&frame.frame.to_le_bytes());
    for value in frame.transforms.iter().chain(frame.colors.iter()) {
        snapshot.extend_from_slice(&value.to_le_bytes());
    }

    snapshot
}
