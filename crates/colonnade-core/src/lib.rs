// ABOUTME: Shared types and configuration for colonnade.
// ABOUTME: Defines geometry primitives and config file handling.

pub mod config;
pub mod geometry;

pub use config::{AnimationSettings, Config, ConfigError};
pub use geometry::{Point, Rect, Size};
