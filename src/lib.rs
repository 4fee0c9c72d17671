pub mod adapters;
pub mod api;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{ProfileStore, TomlConfig};
pub use core::{
    playground::{Playground, PlaygroundReply, Transcript},
    relay::ContactRelay,
    responder::{IntentResponder, Reply, Topic},
};
pub use utils::error::{AppError, Result};
