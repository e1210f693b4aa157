//! # Connect Four
//!
//! Two players take turns dropping tokens into a vertical grid; the first to
//! line up four of their own tokens wins. Play happens in a text console or a
//! terminal UI built with Ratatui, against a friend or a random computer
//! opponent.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board engine, players, session
//! - [`ai`] — Move source trait, random opponent, automated turn loop
//! - [`ui`] — Text console and terminal UI front ends
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
pub mod ui;
