//! ShatterSimulation — owns every subsystem of a round.

use bevy::prelude::*;

use crate::config::{ConfigError, ShatterConfig};
use crate::pieces::PieceStore;
use crate::shooting::{FireControl, FireOutcome, PendingFire, ShotLedger, ShotMarker, ShotResolver};
use crate::simulation::{RenderFrame, RoundStats, ShotResolved, SimulationContext};
use crate::skinning::{Rig, SkeletalSampler};
use crate::targeting::{apply_targeting_tint, BruteForceQuery, NeighborQuery, NeighborSnapshot, TargetingState};
use crate::time_control::{advance_piece, TimeController, TimeDirection};
use crate::DeterministicRng;

type ShotCallback = Box<dyn FnMut(&ShotResolved) + Send + Sync>;

/// The whole simulation of one character + one shooter.
///
/// Single execution context: все команды и tick() вызываются из одного потока
/// (внутри Bevy — через ResMut), никаких локов кроме fire guard.
#[derive(Resource)]
pub struct ShatterSimulation {
    config: ShatterConfig,
    rig: Rig,
    store: PieceStore,
    sampler: SkeletalSampler,
    neighbor_query: Box<dyn NeighborQuery>,
    time: TimeController,
    fire: FireControl,
    resolver: ShotResolver,
    ledger: ShotLedger,
    rng: DeterministicRng,
    query_point: Option<Vec3>,
    snapshot: Option<NeighborSnapshot>,
    targeting: TargetingState,
    frame: RenderFrame,
    on_shot_resolved: Option<ShotCallback>,
}

impl ShatterSimulation {
    /// Validate `config` and build a round over the rig's pieces.
    pub fn new(config: ShatterConfig, rig: Rig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config, rig))
    }

    /// Default tuning (always valid).
    pub fn with_default_config(rig: Rig) -> Self {
        Self::build(ShatterConfig::default(), rig)
    }

    fn build(config: ShatterConfig, rig: Rig) -> Self {
        let piece_count = rig.piece_count();
        let mut simulation = Self {
            store: PieceStore::new(piece_count, config.rest_ttl),
            sampler: SkeletalSampler::default(),
            neighbor_query: Box::new(BruteForceQuery),
            time: TimeController::default(),
            fire: FireControl::new(config.resolve_delay_secs, config.cooldown_secs),
            resolver: ShotResolver::default(),
            ledger: ShotLedger::default(),
            rng: DeterministicRng::new(config.seed),
            query_point: None,
            snapshot: None,
            targeting: TargetingState::default(),
            frame: RenderFrame::with_capacity(piece_count),
            on_shot_resolved: None,
            config,
            rig,
        };

        simulation.reset_round();
        simulation
    }

    /// Replace the brute-force scan (grid, k-d tree...).
    pub fn with_neighbor_query(mut self, query: Box<dyn NeighborQuery>) -> Self {
        self.neighbor_query = query;
        self
    }

    /// Synchronous callback invoked when a fire command's side effects are applied.
    pub fn set_on_shot_resolved(&mut self, callback: impl FnMut(&ShotResolved) + Send + Sync + 'static) {
        self.on_shot_resolved = Some(Box::new(callback));
    }

    // ------------------------------------------------------------------
    // Commands
    // ------------------------------------------------------------------

    pub fn set_time_direction(&mut self, direction: TimeDirection) {
        self.time.set_direction(direction, &mut self.store);
    }

    /// Neighbor query at the current pick point + targeting feedback.
    pub fn update_query_point(&mut self, point: Vec3) {
        if !self.targeting.enabled {
            return;
        }

        let snapshot = self
            .neighbor_query
            .query(self.store.as_slice(), point, self.config.shot_radius);
        apply_targeting_tint(&mut self.store, &snapshot);

        self.targeting.has_target = !snapshot.is_empty();
        self.targeting.near_target = snapshot.min_distance < self.config.near_target_distance;
        self.targeting.min_distance = snapshot.min_distance;

        self.query_point = Some(point);
        self.snapshot = Some(snapshot);
    }

    /// Accept a fire command using the last query point and neighbor snapshot.
    pub fn fire(&mut self) -> FireOutcome {
        if !self.targeting.enabled {
            return FireOutcome::IgnoredTargetingDisabled;
        }

        let (Some(query_point), Some(snapshot)) = (self.query_point, self.snapshot.as_ref()) else {
            return FireOutcome::IgnoredNoTarget;
        };
        if snapshot.is_empty() {
            return FireOutcome::IgnoredNoTarget;
        }

        let outcome = self.fire.try_fire(PendingFire {
            query_point,
            snapshot: snapshot.clone(),
        });
        self.targeting.shot_in_progress = self.fire.in_flight();
        outcome
    }

    /// Re-arm the population, clear the ledger and counters, cancel pending shots.
    pub fn reset_round(&mut self) {
        self.fire.cancel();
        self.resolver.reset();
        self.ledger.clear();
        self.time.reset();
        self.store.reset(&mut self.rng.rng, self.config.rest_ttl);

        self.query_point = None;
        self.snapshot = None;
        self.targeting = TargetingState::default();

        crate::logger::log_info(&format!(
            "🔄 Round reset: {} pieces (seed {})",
            self.store.len(),
            self.rng.seed
        ));
    }

    /// Round over: targeting and firing disabled until `reset_round`.
    pub fn end_round(&mut self) {
        self.targeting.enabled = false;
        self.targeting.has_target = false;
        crate::logger::log_info(&format!(
            "🏁 Round over: {} hits in {} attempts",
            self.resolver.hits(),
            self.resolver.shot_attempts()
        ));
    }

    /// Rewind time and return the ledger's review markers.
    pub fn review_round(&mut self) -> Vec<ShotMarker> {
        self.set_time_direction(TimeDirection::Backward);
        self.ledger.markers()
    }

    // ------------------------------------------------------------------
    // Frame
    // ------------------------------------------------------------------

    /// One simulation pass. Call exactly once per rendered frame.
    pub fn tick(&mut self, ctx: &SimulationContext) -> &RenderFrame {
        self.frame.resolved.clear();

        if let Some(pending) = self.fire.poll(ctx.delta_secs) {
            self.resolve_pending(&pending, ctx.emitter_position);
        }

        if let Some(point) = ctx.query_point {
            self.update_query_point(point);
        }

        let rest = self.sampler.sample(&self.rig, ctx.skeletons);
        for (index, piece) in self.store.iter_mut().enumerate() {
            advance_piece(piece, rest.get(index).copied().flatten());
        }

        self.targeting.shot_in_progress = self.fire.in_flight();

        self.frame.frame += 1;
        self.frame.targeting = self.targeting;
        self.frame.resize(self.store.len());
        for (index, piece) in self.store.iter().enumerate() {
            self.frame.write_piece(index, piece);
        }

        &self.frame
    }

    fn resolve_pending(&mut self, pending: &PendingFire, origin: Vec3) {
        let resolution = self.resolver.resolve(
            &mut self.store,
            pending,
            origin,
            &self.config,
            &mut self.rng.rng,
        );

        let event = ShotResolved {
            hit_count: resolution.hit_count,
            total_pieces: self.store.len(),
            shot_id: resolution.shot.as_ref().map(|shot| shot.id),
        };

        if let Some(shot) = resolution.shot {
            self.ledger.append(shot);
        }
        if let Some(callback) = self.on_shot_resolved.as_mut() {
            callback(&event);
        }
        self.frame.resolved.push(event);
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    pub fn config(&self) -> &ShatterConfig {
        &self.config
    }

    pub fn rig(&self) -> &Rig {
        &self.rig
    }

    pub fn pieces(&self) -> &PieceStore {
        &self.store
    }

    pub fn shot_ledger(&self) -> &ShotLedger {
        &self.ledger
    }

    pub fn time_direction(&self) -> TimeDirection {
        self.time.direction()
    }

    pub fn targeting(&self) -> TargetingState {
        self.targeting
    }

    pub fn neighbor_snapshot(&self) -> Option<&NeighborSnapshot> {
        self.snapshot.as_ref()
    }

    /// Last frame produced by `tick`.
    pub fn last_frame(&self) -> &RenderFrame {
        &self.frame
    }

    pub fn stats(&self) -> RoundStats {
        RoundStats {
            shot_attempts: self.resolver.shot_attempts(),
            hits: self.resolver.hits(),
            total_pieces: self.store.len(),
            detached_pieces: self.store.shot_count(),
            rejected_fires: self.fire.rejected_count(),
        }
    }
}
