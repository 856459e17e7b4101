//! In-flight guard + the two scheduled tasks of a fire command.

use bevy::prelude::*;

use crate::targeting::NeighborSnapshot;

/// Countdown measured in elapsed frame time (seconds).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScheduledTask {
    pub remaining: f32,
}

impl ScheduledTask {
    pub fn new(delay_secs: f32) -> Self {
        Self {
            remaining: delay_secs,
        }
    }

    /// Advance by `delta`; true once the deadline has passed.
    pub fn tick(&mut self, delta: f32) -> bool {
        self.remaining -= delta;
        self.remaining <= 0.0
    }
}

/// Inputs captured at the moment a fire command is accepted.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingFire {
    pub query_point: Vec3,
    pub snapshot: NeighborSnapshot,
}

/// What happened to a fire command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FireOutcome {
    /// Resolution scheduled
    Accepted,
    /// Previous shot still in flight / cooling down (dropped, counted)
    RejectedInFlight,
    /// No query point yet or empty neighbor snapshot (no-op)
    IgnoredNoTarget,
    /// Targeting disabled (round over)
    IgnoredTargetingDisabled,
}

/// Single in-flight guard. Guard is held from acceptance until the cool-down
/// task fires; the resolution task fires earlier.
#[derive(Debug, Clone)]
pub struct FireControl {
    resolve_delay_secs: f32,
    cooldown_secs: f32,
    resolution: Option<(ScheduledTask, PendingFire)>,
    cooldown: Option<ScheduledTask>,
    rejected: u64,
}

impl FireControl {
    pub fn new(resolve_delay_secs: f32, cooldown_secs: f32) -> Self {
        Self {
            resolve_delay_secs,
            cooldown_secs,
            resolution: None,
            cooldown: None,
            rejected: 0,
        }
    }

    /// Guard held (resolution pending or cool-down running).
    pub fn in_flight(&self) -> bool {
        self.cooldown.is_some() || self.resolution.is_some()
    }

    pub fn resolution_pending(&self) -> bool {
        self.resolution.is_some()
    }

    /// Fire commands dropped by the guard since the last reset.
    pub fn rejected_count(&self) -> u64 {
        self.rejected
    }

    pub fn try_fire(&mut self, pending: PendingFire) -> FireOutcome {
        if self.in_flight() {
            self.rejected += 1;
            crate::logger::log(&format!(
                "🔒 Fire rejected: shot in flight (rejected total: {})",
                self.rejected
            ));
            return FireOutcome::RejectedInFlight;
        }

        crate::logger::log(&format!(
            "🔫 Fire accepted at {:?} ({} neighbors), resolves in {}s",
            pending.query_point,
            pending.snapshot.len(),
            self.resolve_delay_secs
        ));

        self.resolution = Some((ScheduledTask::new(self.resolve_delay_secs), pending));
        self.cooldown = Some(ScheduledTask::new(self.cooldown_secs));
        FireOutcome::Accepted
    }

    /// Poll both tasks. Returns the pending fire whose resolution is due.
    ///
    /// Pause не отменяет pending resolution: delta идёт по frame time.
    pub fn poll(&mut self, delta_secs: f32) -> Option<PendingFire> {
        let mut due = None;

        if let Some((task, _)) = self.resolution.as_mut() {
            if task.tick(delta_secs) {
                due = self.resolution.take().map(|(_, pending)| pending);
            }
        }

        if let Some(task) = self.cooldown.as_mut() {
            if task.tick(delta_secs) {
                self.cooldown = None;
            }
        }

        due
    }

    /// Drop any pending resolution and release the guard (round restart).
    pub fn cancel(&mut self) {
        if self.resolution.is_some() {
            crate::logger::log("Pending shot resolution cancelled by round reset");
        }
        self.resolution = None;
        self.cooldown = None;
        self.rejected = 0;
    }
}
