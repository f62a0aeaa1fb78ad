//! Configuration module for the expense tracker
//!
//! This module provides configuration management including:
//! - config directory resolution
//! - user settings loading and saving

pub mod paths;
pub mod settings;

pub use paths::{TrackerPaths, CONFIG_DIR_ENV};
pub use settings::Settings;
