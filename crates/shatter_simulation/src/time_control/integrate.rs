//! Per-piece integration step (one frame).
//!
//! Интегратор closed-form: pose = start + direction × ticks × speed,
//! поэтому forward и backward шаги — точные обратные друг другу.

use bevy::prelude::*;

use crate::pieces::Piece;
use crate::time_control::TimeDirection;

/// Advance one piece by its `tick_direction` and write its visible pose.
///
/// `rest_position` is this frame's skeleton sample for the piece
/// (`None` for pieces of a static mesh: they keep their fallback pose).
pub fn advance_piece(piece: &mut Piece, rest_position: Option<Vec3>) {
    if !piece.is_shot {
        if let Some(rest) = rest_position {
            piece.position = rest;
        }
        return;
    }

    match piece.tick_direction {
        TimeDirection::Pause => {
            // Shot while paused: not launched yet, keeps following the skeleton
            if piece.ticks == 0 {
                if let Some(rest) = rest_position {
                    piece.position = rest;
                }
                return;
            }
        }
        TimeDirection::Forward => {
            if !piece.disabled {
                piece.ticks += 1;
                if piece.ticks >= piece.ttl {
                    piece.ticks = piece.ttl;
                    piece.disabled = true;
                }
            }
        }
        TimeDirection::Backward => {
            piece.disabled = false;
            piece.ticks -= 1;
            if piece.ticks <= 0 {
                let rest = rest_position.unwrap_or(piece.start_position);
                piece.reattach(rest);
                return;
            }
        }
    }

    piece.apply_ballistic_pose();
}
