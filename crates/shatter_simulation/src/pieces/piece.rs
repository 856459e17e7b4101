//! Piece record + per-piece state machine.

use bevy::prelude::*;

use crate::pieces::Rgb;
use crate::time_control::TimeDirection;

/// Visible state of a piece (derived from `is_shot` / `disabled`).
///
/// ```text
/// AtRest ──hit──▶ Flying ──ticks == ttl──▶ Frozen
///   ▲                │                        │
///   └──── rewound to tick 0 ◀─────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PieceState {
    /// Follows the skeleton rest pose
    AtRest,
    /// Follows the ballistic extrapolation
    Flying,
    /// ttl reached, rendered in its terminal pose
    Frozen,
}

/// One simulated fragment (one skinned vertex).
#[derive(Debug, Clone, PartialEq)]
pub struct Piece {
    /// Current world-space location (written every frame)
    pub position: Vec3,
    /// Position captured at the moment of detachment
    pub start_position: Vec3,
    /// Travel vector, scaled by `speed` per tick
    pub direction: Vec3,
    /// Spin per tick (no speed factor)
    pub rotation_direction: Vec3,
    pub start_rotation: Vec3,
    /// Euler angles (radians)
    pub rotation: Vec3,
    pub speed: f32,
    pub ticks: i32,
    pub tick_direction: TimeDirection,
    pub ttl: i32,
    pub is_shot: bool,
    pub disabled: bool,
    pub color: Rgb,
    pub orig_color: Rgb,
}

impl Piece {
    pub fn new(rest_ttl: i32) -> Self {
        Self {
            position: Vec3::ZERO,
            start_position: Vec3::ZERO,
            direction: Vec3::ZERO,
            rotation_direction: Vec3::ZERO,
            start_rotation: Vec3::ZERO,
            rotation: Vec3::ZERO,
            speed: 0.0,
            ticks: 0,
            tick_direction: TimeDirection::Forward,
            ttl: rest_ttl,
            is_shot: false,
            disabled: false,
            color: Rgb::BLACK,
            orig_color: Rgb::BLACK,
        }
    }

    pub fn state(&self) -> PieceState {
        match (self.is_shot, self.disabled) {
            (false, _) => PieceState::AtRest,
            (true, false) => PieceState::Flying,
            (true, true) => PieceState::Frozen,
        }
    }

    /// Back to the round-start state with a fresh grayscale tint.
    ///
    /// Pose is zeroed: the real rest pose arrives with the next sampled frame.
    pub fn reset(&mut self, gray: f32, rest_ttl: i32) {
        let color = Rgb::gray(gray);

        self.color = color;
        self.orig_color = color;
        self.disabled = false;
        self.is_shot = false;
        self.direction = Vec3::ZERO;
        self.rotation_direction = Vec3::ZERO;
        self.speed = 0.0;
        self.ticks = 0;
        self.tick_direction = TimeDirection::Forward;
        self.ttl = rest_ttl;
        self.start_position = Vec3::ZERO;
        self.start_rotation = Vec3::ZERO;
        self.position = self.start_position;
        self.rotation = self.start_rotation;
    }

    /// Ticks used for the pose: a disabled piece stays at `ttl`.
    pub fn effective_ticks(&self) -> i32 {
        if self.disabled {
            self.ttl
        } else {
            self.ticks
        }
    }

    /// Closed-form ballistic pose for the current effective ticks.
    pub fn apply_ballistic_pose(&mut self) {
        let ticks = self.effective_ticks() as f32;
        self.position = self.start_position + self.direction * ticks * self.speed;
        self.rotation = self.start_rotation + self.rotation_direction * ticks;
    }

    /// Flying/Frozen → AtRest at the given rest position.
    pub fn reattach(&mut self, rest_position: Vec3) {
        self.ticks = 0;
        self.is_shot = false;
        self.disabled = false;
        self.position = rest_position;
    }
}
