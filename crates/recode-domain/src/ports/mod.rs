//! Domain Ports
//!
//! Interfaces the engine calls out through. The binary supplies a console
//! implementation; tests supply recording ones.

/// Run progress notifications
pub mod observer;

pub use observer::{NoopObserver, RunObserver};
