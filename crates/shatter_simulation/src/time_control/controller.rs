//! Global time direction.

use serde::{Deserialize, Serialize};

use crate::pieces::PieceStore;

/// Direction of the tick axis, applied uniformly to every piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TimeDirection {
    Backward,
    Pause,
    #[default]
    Forward,
}

impl TimeDirection {
    /// Tick increment (-1, 0, +1).
    pub fn step(self) -> i32 {
        match self {
            TimeDirection::Backward => -1,
            TimeDirection::Pause => 0,
            TimeDirection::Forward => 1,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct TimeController {
    direction: TimeDirection,
}

impl TimeController {
    pub fn direction(&self) -> TimeDirection {
        self.direction
    }

    /// Set the global direction and push it to every piece.
    ///
    /// Forward/backward re-enable disabled pieces (paused → resumed pieces
    /// must not stay inert); pause leaves `disabled` untouched.
    pub fn set_direction(&mut self, direction: TimeDirection, store: &mut PieceStore) {
        self.direction = direction;

        let reenable = direction != TimeDirection::Pause;
        for piece in store.iter_mut() {
            piece.tick_direction = direction;
            if reenable {
                piece.disabled = false;
            }
        }

        crate::logger::log(&format!("⏱ Time direction → {:?}", direction));
    }

    /// Round restart: back to forward without touching pieces (reset re-arms them).
    pub fn reset(&mut self) {
        self.direction = TimeDirection::Forward;
    }
}
