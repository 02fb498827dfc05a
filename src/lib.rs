//! # Connect Four
//!
//! Rules engine for Connect Four: chips stack under gravity in a 7 × 6 grid,
//! players strictly alternate, and the first four-in-a-row wins.
//!
//! ## Modules
//!
//! - [`game`] — Board state machine, grid, chips and winning placements
//! - [`replay`] — Drive a board through a sequence of columns
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod replay;
