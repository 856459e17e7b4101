//! Shot resolution: inner set detaches, outer set gets a warning tint.

use std::f32::consts::{PI, TAU};

use bevy::prelude::*;
use rand::Rng;

use crate::config::ShatterConfig;
use crate::pieces::{warning_gradient, Piece, PieceStore, Rgb};
use crate::shooting::{PendingFire, Shot};
use crate::targeting::Neighbor;

/// Result of one resolution (always produced, even for a miss).
#[derive(Debug, Clone, PartialEq)]
pub struct ShotResolution {
    /// Detached pieces (0 = miss)
    pub hit_count: usize,
    /// Pieces that only got the warning tint
    pub near_miss_count: usize,
    /// Ledger record, present when `hit_count > 0`
    pub shot: Option<Shot>,
}

/// Split neighbors by the inner threshold: `(inner, outer)`.
///
/// inner: `distance < inner_radius`, outer: `distance >= inner_radius`.
pub fn partition_neighbors(neighbors: &[Neighbor], inner_radius: f32) -> (Vec<Neighbor>, Vec<Neighbor>) {
    neighbors.iter().copied().partition(|n| n.distance < inner_radius)
}

/// Uniform sample from a disc of `radius` in the X/Y plane.
pub fn random_in_disc(rng: &mut impl Rng, radius: f32) -> Vec2 {
    let angle = rng.gen::<f32>() * TAU;
    // sqrt → равномерно по площади, не по радиусу
    let r = rng.gen::<f32>().sqrt() * radius;
    Vec2::new(r * angle.cos(), r * angle.sin())
}

/// Shot counters of the round.
#[derive(Debug, Clone, Default)]
pub struct ShotResolver {
    /// Every resolution (hits and misses)
    shot_attempts: u32,
    /// Resolutions with ≥1 hit; also the Shot id source
    hit_counter: u32,
}

impl ShotResolver {
    pub fn shot_attempts(&self) -> u32 {
        self.shot_attempts
    }

    pub fn hits(&self) -> u32 {
        self.hit_counter
    }

    pub fn reset(&mut self) {
        self.shot_attempts = 0;
        self.hit_counter = 0;
    }

    /// Apply the detachment side effects of an accepted fire command.
    ///
    /// `origin` = emitter (camera forward) position at resolution time.
    pub fn resolve(
        &mut self,
        store: &mut PieceStore,
        pending: &PendingFire,
        origin: Vec3,
        config: &ShatterConfig,
        rng: &mut impl Rng,
    ) -> ShotResolution {
        self.shot_attempts += 1;

        let radius = pending.snapshot.radius;
        let (inner, outer) = partition_neighbors(&pending.snapshot.neighbors, config.inner_ratio * radius);

        for neighbor in &outer {
            if let Some(piece) = store.get_mut(neighbor.index) {
                let t = neighbor.distance / radius;
                piece.orig_color = warning_gradient(t * t * t * t);
            }
        }

        if inner.is_empty() {
            crate::logger::log_info(&format!(
                "💨 Miss at {:?} ({} near misses)",
                pending.query_point,
                outer.len()
            ));
            return ShotResolution {
                hit_count: 0,
                near_miss_count: outer.len(),
                shot: None,
            };
        }

        self.hit_counter += 1;
        let target = pending.query_point;
        let shot = Shot {
            id: self.hit_counter,
            hit_count: inner.len(),
            origin,
            target,
        };

        let to_target = target - origin;
        let base_direction = to_target.normalize_or_zero();
        let speed = to_target.length() * config.speed_factor;

        for neighbor in &inner {
            if let Some(piece) = store.get_mut(neighbor.index) {
                detach_piece(piece, base_direction, speed, config, rng);
            }
        }

        crate::logger::log_info(&format!(
            "💥 Shot #{}: {} hits, {} near misses (speed {:.1})",
            shot.id,
            shot.hit_count,
            outer.len(),
            speed
        ));

        ShotResolution {
            hit_count: inner.len(),
            near_miss_count: outer.len(),
            shot: Some(shot),
        }
    }
}

/// AtRest/Flying → Flying from the piece's current position.
fn detach_piece(
    piece: &mut Piece,
    base_direction: Vec3,
    speed: f32,
    config: &ShatterConfig,
    rng: &mut impl Rng,
) {
    let offset = random_in_disc(rng, config.disc_radius);
    let jitter = rng.gen_range(-config.z_jitter..=config.z_jitter);
    let direction = base_direction + Vec3::new(offset.x, offset.y, jitter);

    let start_rotation = Vec3::new(
        rng.gen::<f32>() * PI,
        rng.gen::<f32>() * PI,
        rng.gen::<f32>() * PI,
    );

    piece.is_shot = true;
    piece.disabled = false;
    piece.ticks = 0;
    piece.start_position = piece.position;
    piece.start_rotation = start_rotation;
    piece.rotation = start_rotation;
    piece.direction = direction;
    // Spin переиспользует direction (не отдельный sample)
    piece.rotation_direction = direction;
    piece.speed = speed;
    piece.ttl = config.flight_ttl;
    piece.color = Rgb::gray(rng.gen());
}
