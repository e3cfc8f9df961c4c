//! Flappy Arcade - side-scrolling arcade core with a terminal front end.
//!
//! The simulation (`game`, `core`) is independent of any output device: a
//! host feeds [`game::Intent`]s, drives [`core::GameLoop`] at a fixed step,
//! and draws from [`game::Snapshot`]s. `ui` and `input` are the terminal
//! host built on ratatui and crossterm.

pub mod config;
pub mod core;
pub mod error;
pub mod game;
pub mod input;
pub mod profile;
pub mod ui;
pub mod utils;
