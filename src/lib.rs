//! Library exports for the paintapp shape tool.
//!
//! Exposes the geometry engine, the live preview controller and the supporting
//! configuration and export code so that other hosts (a windowed frontend, a
//! test harness) can drive the same drawing logic the binary uses.

pub mod config;
pub mod draw;
pub mod export;
pub mod input;
pub mod script;
pub mod util;

pub use config::Config;
