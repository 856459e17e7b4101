//! Per-frame inputs and outputs of the orchestrator.

use bevy::prelude::*;

use crate::skinning::BonePalette;

/// Everything a tick reads from the outside world.
#[derive(Debug, Clone, Copy)]
pub struct SimulationContext<'a> {
    /// Elapsed frame time (drives fire resolution / cool-down only)
    pub delta_secs: f32,
    /// Current pick point; `Some` is equivalent to `update_query_point` before the tick
    pub query_point: Option<Vec3>,
    /// Camera forward (emitter) position, shot origin
    pub emitter_position: Vec3,
    /// Current bone palettes, indexed by mesh source index
    pub skeletons: &'a [BonePalette],
}

/// Outbound notification: a fire command's side effects were applied.
///
/// `hit_count == 0` is a miss.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShotResolved {
    pub hit_count: usize,
    pub total_pieces: usize,
    /// Ledger id when the shot hit something
    pub shot_id: Option<u32>,
}

/// Round counters for scoring UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RoundStats {
    pub shot_attempts: u32,
    pub hits: u32,
    pub total_pieces: usize,
    pub detached_pieces: usize,
    pub rejected_fires: u64,
}
