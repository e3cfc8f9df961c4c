//! Utility modules: save files and log setup.

pub mod logging;
pub mod persistence;
