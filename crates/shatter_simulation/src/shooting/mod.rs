//! Shooting domain — fire command → delayed resolution → ledger
//!
//! Flow:
//! 1. fire() → FireControl принимает команду (snapshot + query point), ставит guard
//! 2. через resolve_delay → ShotResolver: inner set отрывается, outer set тонируется
//! 3. Shot (если ≥1 hit) → ShotLedger
//! 4. через cooldown → guard снят, можно стрелять снова
//!
//! Back-pressure, не очередь: fire во время cool-down отбрасывается.

pub mod fire_control;
pub mod ledger;
pub mod resolver;

#[cfg(test)]
mod fire_control_tests;
#[cfg(test)]
mod resolver_tests;

pub use fire_control::*;
pub use ledger::*;
pub use resolver::*;
