//! Time control — глобальное направление времени (forward / backward / pause)
//!
//! - TimeDirection: шаг тика (-1, 0, +1)
//! - TimeController: глобальный scalar + fan-out на все pieces
//! - advance_piece: один шаг интегратора для одного piece

pub mod controller;
pub mod integrate;


pub use controller::*;
pub use integrate::*;
