pub mod client;
pub mod config;
pub mod error;
pub mod types;

pub use client::OmdbClient;
pub use config::{
    ConfigSource, ConfigSources, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_SECS, OmdbConfig, config_path,
    config_sources, save_to_file,
};
pub use error::OmdbError;
pub use types::{SearchEntry, SearchResponse};
