//! Piece domain — один фрагмент на каждую skinned вершину
//!
//! Содержит:
//! - Piece (per-piece state: rest pose ↔ ballistic flight)
//! - PieceStore (единственный владелец всех Piece на раунд, reset)
//! - Rgb + color_gradient (tint helpers)

pub mod color;
pub mod piece;
pub mod store;

#[cfg(test)]
mod store_tests;

pub use color::*;
pub use piece::*;
pub use store::*;
