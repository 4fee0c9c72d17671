use crate::domain::model::NotificationMessage;
use crate::domain::ports::NotificationSink;
use crate::utils::error::{AppError, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// POSTs the notification as JSON to an email service or chat webhook.
pub struct WebhookSink {
    client: Client,
    endpoint: String,
    auth_token: Option<String>,
    timeout: Duration,
}

impl WebhookSink {
    pub fn new(endpoint: String, auth_token: Option<String>, timeout: Duration) -> Self {
        Self {
            client: Client::new(),
            endpoint,
            auth_token,
            timeout,
        }
    }
}

#[async_trait]
impl NotificationSink for WebhookSink {
    async fn send(&self, message: &NotificationMessage) -> Result<()> {
        tracing::debug!("Posting notification to: {}", self.endpoint);

        let mut request = self
            .client
            .post(&self.endpoint)
            .timeout(self.timeout)
            .json(message);

        if let Some(token) = &self.auth_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(|e| AppError::SinkError {
            message: format!("request to notification webhook failed: {}", e),
        })?;

        let status = response.status();
        tracing::debug!("Webhook response status: {}", status);

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::SinkError {
                message: format!("webhook returned {}: {}", status, body),
            });
        }

        Ok(())
    }

    fn name(&self) -> &'static str {
        "webhook"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    fn message() -> NotificationMessage {
        NotificationMessage {
            to: "owner@example.com".to_string(),
            from: "noreply@example.com".to_string(),
            reply_to: "a@b.com".to_string(),
            subject: "[Contact Form] S".to_string(),
            text: "M".to_string(),
            html: "<p>M</p>".to_string(),
        }
    }

    #[tokio::test]
    async fn test_send_posts_json_with_bearer_token() {
        let server = MockServer::start();
        let hook_mock = server.mock(|when, then| {
            when.method(POST)
                .path("/hooks/contact")
                .header("authorization", "Bearer s3cret")
                .json_body_partial(r#"{"reply_to": "a@b.com", "subject": "[Contact Form] S"}"#);
            then.status(202);
        });

        let sink = WebhookSink::new(
            server.url("/hooks/contact"),
            Some("s3cret".to_string()),
            Duration::from_secs(5),
        );

        assert!(sink.send(&message()).await.is_ok());
        hook_mock.assert();
    }

    #[tokio::test]
    async fn test_non_success_status_is_sink_error() {
        let server = MockServer::start();
        let hook_mock = server.mock(|when, then| {
            when.method(POST).path("/hooks/contact");
            then.status(500).body("mailbox full");
        });

        let sink = WebhookSink::new(server.url("/hooks/contact"), None, Duration::from_secs(5));

        match sink.send(&message()).await {
            Err(AppError::SinkError { message }) => assert!(message.contains("500")),
            other => panic!("expected sink error, got {:?}", other),
        }
        hook_mock.assert_hits(1);
    }

    #[tokio::test]
    async fn test_timeout_is_sink_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/slow");
            then.status(200).delay(Duration::from_millis(500));
        });

        let sink = WebhookSink::new(server.url("/slow"), None, Duration::from_millis(50));

        assert!(matches!(
            sink.send(&message()).await,
            Err(AppError::SinkError { .. })
        ));
    }
}
