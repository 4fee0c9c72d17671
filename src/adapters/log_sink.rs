use crate::domain::model::NotificationMessage;
use crate::domain::ports::NotificationSink;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Writes the notification to the log instead of delivering it.
#[derive(Debug, Clone, Default)]
pub struct LogSink;

#[async_trait]
impl NotificationSink for LogSink {
    async fn send(&self, message: &NotificationMessage) -> Result<()> {
        tracing::info!(
            to = %message.to,
            reply_to = %message.reply_to,
            subject = %message.subject,
            body_length = message.text.chars().count(),
            "📨 Notification logged (no delivery configured)"
        );
        tracing::debug!("Notification body:\n{}", message.text);
        Ok(())
    }

    fn name(&self) -> &'static str {
        "log"
    }
}
