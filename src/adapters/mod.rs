// Adapters layer: concrete notification sinks.

pub mod log_sink;
pub mod webhook;

use crate::config::toml_config::{SinkConfig, SinkKind};
use crate::domain::ports::NotificationSink;
use crate::utils::error::Result;
use crate::utils::validation::validate_required_field;
use std::sync::Arc;

pub use log_sink::LogSink;
pub use webhook::WebhookSink;

pub fn build_sink(config: &SinkConfig) -> Result<Arc<dyn NotificationSink>> {
    match config.r#type {
        SinkKind::Log => Ok(Arc::new(LogSink)),
        SinkKind::Webhook => {
            let endpoint = validate_required_field("sink.endpoint", &config.endpoint)?;
            Ok(Arc::new(WebhookSink::new(
                endpoint.clone(),
                config.auth_token.clone(),
                config.timeout(),
            )))
        }
    }
}
