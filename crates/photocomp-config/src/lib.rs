//! Configuration, file system paths, and logging bootstrap for the
//! PhotoComp client.
//!
//! Runtime state lives under `~/.photocomp`: the config file and the
//! persisted session. Logging goes to stderr so command output stays
//! clean on stdout.

mod config;
mod error;
mod logging;
mod paths;

pub use config::{Config, DEFAULT_API_BASE_URL, DEFAULT_LOG_LEVEL};
pub use error::{ConfigError, ConfigResult};
pub use logging::init_logging;
pub use paths::Paths;
