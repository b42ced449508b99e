//! CLI infrastructure for the oxo binary
//!
//! Commands for querying the oracle, analysing positions, running matches
//! between strategies and playing interactively.

pub mod commands;
pub mod config;
pub mod output;
