//! Configuration — все тюнинг-параметры раунда в одном `Resource`
//!
//! Defaults: radius 8, inner 0.8,
//! 500ms resolution / 800ms cool-down, flight ttl 12000.

pub mod shatter_config;

#[cfg(test)]
mod config_tests;

pub use shatter_config::*;
