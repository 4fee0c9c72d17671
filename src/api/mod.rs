//! HTTP surface for the contact relay.
//!
//! `POST /api/contact` answers 200, 400 or 500 with a JSON body;
//! `GET /api/contact` is always 405. Errors never carry internal details.

use crate::core::relay::{ContactRelay, RELAY_FAILURE_MESSAGE};
use crate::domain::model::{Acknowledgement, ContactSubmission};
use crate::utils::error::AppError;
use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use serde::Serialize;
use std::sync::Arc;

pub const SUCCESS_MESSAGE: &str = "Message received successfully! I'll get back to you soon.";
pub const METHOD_NOT_ALLOWED_MESSAGE: &str = "Method not allowed. Please use POST.";

#[derive(Clone)]
pub struct AppState {
    pub relay: Arc<ContactRelay>,
}

#[derive(Debug, Serialize)]
pub struct ContactSuccess {
    pub success: bool,
    pub message: String,
    pub data: Acknowledgement,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/contact",
            post(submit_contact).get(contact_method_not_allowed),
        )
        .with_state(state)
}

async fn submit_contact(
    State(state): State<AppState>,
    body: std::result::Result<Bytes, BytesRejection>,
) -> Response {
    // 超過大小限制等讀取失敗也要回 JSON，不能露出框架的純文字訊息
    let body = match body {
        Ok(body) => body,
        Err(rejection) => {
            return ApiError::from(AppError::RequestBodyError {
                status: rejection.status().as_u16(),
                message: rejection.body_text(),
            })
            .into_response()
        }
    };

    // 自行解析 JSON，讓格式錯誤走統一的 500 回應
    let submission: ContactSubmission = match serde_json::from_slice(&body) {
        Ok(submission) => submission,
        Err(e) => return ApiError::from(AppError::from(e)).into_response(),
    };

    match state.relay.submit(submission).await {
        Ok(ack) => (
            StatusCode::OK,
            Json(ContactSuccess {
                success: true,
                message: SUCCESS_MESSAGE.to_string(),
                data: ack,
            }),
        )
            .into_response(),
        Err(e) => ApiError::from(e).into_response(),
    }
}

async fn contact_method_not_allowed() -> Response {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(ErrorBody {
            error: METHOD_NOT_ALLOWED_MESSAGE.to_string(),
        }),
    )
        .into_response()
}

/// Boundary conversion from [`AppError`] to an HTTP response.
pub struct ApiError(AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error) = match &self.0 {
            AppError::ValidationError { kind } => {
                tracing::warn!("⚠️ Contact submission rejected: {}", kind);
                (StatusCode::BAD_REQUEST, kind.message().to_string())
            }
            AppError::RelayError { message } => {
                (StatusCode::INTERNAL_SERVER_ERROR, message.clone())
            }
            other => {
                tracing::error!("❌ Contact form error: {}", other);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    RELAY_FAILURE_MESSAGE.to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error })).into_response()
    }
}
