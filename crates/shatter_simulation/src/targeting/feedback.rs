//! Targeting feedback: tint under the crosshair + crosshair state.

use crate::pieces::{PieceStore, Rgb};
use crate::targeting::NeighborSnapshot;

/// Crosshair state for the external HUD.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetingState {
    /// false после end_round() до следующего reset_round()
    pub enabled: bool,
    /// Neighbor set is non-empty
    pub has_target: bool,
    /// min_distance below the configured near-target distance
    pub near_target: bool,
    pub min_distance: f32,
    /// Fire guard held (resolution or cool-down pending)
    pub shot_in_progress: bool,
}

impl Default for TargetingState {
    fn default() -> Self {
        Self {
            enabled: true,
            has_target: false,
            near_target: false,
            min_distance: f32::INFINITY,
            shot_in_progress: false,
        }
    }
}

/// Restore baseline tint of resting pieces, then tint every neighbor red by `d / R`.
pub fn apply_targeting_tint(store: &mut PieceStore, snapshot: &NeighborSnapshot) {
    for piece in store.iter_mut().filter(|p| !p.is_shot) {
        piece.color = piece.orig_color;
    }

    for neighbor in &snapshot.neighbors {
        if let Some(piece) = store.get_mut(neighbor.index) {
            piece.color = Rgb::new(neighbor.distance / snapshot.radius, 0.0, 0.0);
        }
    }
}
