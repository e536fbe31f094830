//! Configuration loader and defaults for the hbnbweb server.
//!
//! Exposes a lazily-initialized `CONFIG` which reads values from
//! environment variables (with sensible defaults). Fields cover the
//! listening address (`host`, `port`) and the path of the JSON object
//! file backing storage (`data_file`).
//!
use std::env;
use std::path::PathBuf;

use once_cell::sync::Lazy;

/// Default listening host, all interfaces
const DEFAULT_HOST: &str = "0.0.0.0";

/// Default listening port
const DEFAULT_PORT: u16 = 5000;

/// Default storage object file, relative to the working directory
const DEFAULT_DATA_FILE: &str = "file.json";

/// Application configuration containing network and storage settings
pub struct Config {
    /// Interface to bind
    pub host: String,
    /// TCP port to bind
    pub port: u16,
    /// Path of the JSON object file read by storage
    pub data_file: PathBuf,
}

/// Global application configuration instance, lazily initialized
pub static CONFIG: Lazy<Config> = Lazy::new(|| Config {
    host: env::var("HBNB_HOST").unwrap_or_else(|_| DEFAULT_HOST.into()),
    port: env::var("HBNB_PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_PORT),
    data_file: env::var("HBNB_FILE")
        .map(PathBuf::from)
        .unwrap_or_else(|_| DEFAULT_DATA_FILE.into()),
});
