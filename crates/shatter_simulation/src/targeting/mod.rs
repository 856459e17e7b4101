//! Targeting domain — прицеливание по pieces
//!
//! Содержит:
//! - NeighborQuery (trait) + BruteForceQuery (O(n) scan)
//! - NeighborSnapshot (результат запроса + min distance по всем pieces)
//! - TargetingState + tint feedback для pieces под прицелом

pub mod neighbors;
pub mod feedback;


pub use neighbors::*;
pub use feedback::*;
