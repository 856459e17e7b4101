//! Shot ledger — append-only record of resolved shots for end-of-round review.

use bevy::prelude::*;

use crate::pieces::{warning_gradient, Rgb};

/// One resolved shot with at least one hit. Immutable after creation.
#[derive(Debug, Clone, PartialEq)]
pub struct Shot {
    /// 1-based hit counter value
    pub id: u32,
    pub hit_count: usize,
    pub origin: Vec3,
    pub target: Vec3,
}

/// Review entry: shot + marker color (green → yellow → red by rank).
#[derive(Debug, Clone, PartialEq)]
pub struct ShotMarker {
    pub shot: Shot,
    pub rank: usize,
    pub color: Rgb,
}

#[derive(Debug, Clone, Default)]
pub struct ShotLedger {
    shots: Vec<Shot>,
}

impl ShotLedger {
    pub fn append(&mut self, shot: Shot) {
        self.shots.push(shot);
    }

    pub fn clear(&mut self) {
        self.shots.clear();
    }

    pub fn len(&self) -> usize {
        self.shots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shots.is_empty()
    }

    /// Insertion order.
    pub fn shots(&self) -> &[Shot] {
        &self.shots
    }

    /// Ascending by `hit_count`; ties keep insertion order (stable sort).
    pub fn presentation(&self) -> Vec<&Shot> {
        let mut ordered: Vec<&Shot> = self.shots.iter().collect();
        ordered.sort_by_key(|shot| shot.hit_count);
        ordered
    }

    /// Presentation order with marker colors keyed by `rank / shot_count`.
    pub fn markers(&self) -> Vec<ShotMarker> {
        let count = self.shots.len() as f32;

        self.presentation()
            .into_iter()
            .enumerate()
            .map(|(rank, shot)| ShotMarker {
                shot: shot.clone(),
                rank,
                color: warning_gradient(rank as f32 / count),
            })
            .collect()
    }

    pub fn total_hits(&self) -> usize {
        self.shots.iter().map(|s| s.hit_count).sum()
    }
}
