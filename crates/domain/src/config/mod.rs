//! Configuration module for warmdns
//!
//! This module contains all configuration structures organized by concern:
//! - `root`: Main configuration, loader and CLI overrides
//! - `env`: `WARMDNS_*` environment overrides
//! - `resolver`: Upstream resolver endpoint, timeout and retries
//! - `refresh`: TTL normalization and refresh loop timing
//! - `server`: HTTP listener
//! - `seed`: Seed file and bulk loading
//! - `logging`: Logging settings
//! - `errors`: Configuration errors

pub mod env;
pub mod errors;
pub mod logging;
pub mod refresh;
pub mod resolver;
pub mod root;
pub mod seed;
pub mod server;

pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use refresh::RefreshConfig;
pub use resolver::ResolverConfig;
pub use root::{CliOverrides, Config};
pub use seed::SeedConfig;
pub use server::ServerConfig;
