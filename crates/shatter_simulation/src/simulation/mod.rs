//! Simulation orchestrator — один проход на кадр
//!
//! Порядок внутри tick():
//! 1. FireControl.poll — due resolution применяется (ShotResolver + ledger + callback)
//! 2. Query point → NeighborQuery + targeting tint
//! 3. SkeletalSampler → rest pose; advance_piece для каждого piece
//! 4. RenderFrame (transform + color на piece)

pub mod context;
pub mod orchestrator;
pub mod render;

#[cfg(test)]
mod render_tests;

pub use context::*;
pub use orchestrator::*;
pub use render::*;
