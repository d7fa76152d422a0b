//! Startup, configuration and shutdown.

pub mod cafe_system;
pub mod config;
pub mod tracing;

pub use cafe_system::CafeSystem;
pub use config::{CafeConfig, ConfigError};
pub use self::tracing::setup_tracing;
