use crate::domain::model::NotificationMessage;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Outbound delivery of a contact notification (email service, webhook, log).
#[async_trait]
pub trait NotificationSink: Send + Sync {
    async fn send(&self, message: &NotificationMessage) -> Result<()>;

    fn name(&self) -> &'static str;
}
