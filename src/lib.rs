//! Random quote machine: fetches a quote collection, cycles through random
//! quotes in a terminal UI, and builds share links for them.

pub mod cli;
pub mod clipboard;
pub mod config;
pub mod error;
pub mod logging;
pub mod orchestrator;
pub mod quote;
pub mod random;
pub mod share;
pub mod source;
pub mod store;
pub mod ui;
