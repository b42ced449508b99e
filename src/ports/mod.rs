//! Ports (trait boundaries) between the game core and its callers.

pub mod observer;
pub mod strategy;

pub use observer::Observer;
pub use strategy::Strategy;
