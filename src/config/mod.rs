#[cfg(feature = "cli")]
pub mod cli;
pub mod profile_store;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use profile_store::ProfileStore;
pub use toml_config::TomlConfig;
