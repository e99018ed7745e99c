//! examcal - browse government exam schedules from the terminal.
//!
//! The binary entry point lives in `main.rs`; this library exposes the
//! backend client, the fetch-and-assemble pipeline, and the render
//! layer so integration tests can drive them directly.

pub mod client;
pub mod commands;
pub mod config;
pub mod fetch;
pub mod render;
