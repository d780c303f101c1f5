//! Application Errors
//!
//! Every failure a page can hit is folded into one enum, so call sites
//! handle a single `Result` instead of a thrown HTTP error plus an
//! `{ error: true }` body flag.

use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AppError {
    /// Request never produced a response (network down, CORS, DNS)
    #[error("transport error: {0}")]
    Transport(String),

    /// Backend answered with a non-2xx status
    #[error("HTTP {status}: {}", .message.as_deref().unwrap_or("no message"))]
    Http { status: u16, message: Option<String> },

    /// 2xx response flagged `error: true`
    #[error("backend error: {}", .message.as_deref().unwrap_or("no message"))]
    Backend { message: Option<String> },

    /// Response body did not match the expected shape
    #[error("decode error: {0}")]
    Decode(String),

    /// Rejected on the client before any request was sent
    #[error("{0}")]
    Validation(String),
}

impl AppError {
    /// Message to show the user: the backend's own message when it sent one,
    /// the validation text for client-side failures, otherwise `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            AppError::Http { message: Some(m), .. } | AppError::Backend { message: Some(m) }
                if !m.trim().is_empty() =>
            {
                m.clone()
            }
            AppError::Validation(m) => m.clone(),
            _ => fallback.to_string(),
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, AppError::Validation(_))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Decode(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_prefers_backend_text() {
        let err = AppError::Backend { message: Some("Chiến dịch không tồn tại".into()) };
        assert_eq!(err.user_message("Có lỗi xảy ra"), "Chiến dịch không tồn tại");

        let err = AppError::Http { status: 500, message: Some("Lỗi máy chủ".into()) };
        assert_eq!(err.user_message("Có lỗi xảy ra"), "Lỗi máy chủ");
    }

    #[test]
    fn test_user_message_falls_back() {
        assert_eq!(AppError::Transport("offline".into()).user_message("Có lỗi"), "Có lỗi");
        assert_eq!(AppError::Http { status: 404, message: None }.user_message("Có lỗi"), "Có lỗi");
        assert_eq!(AppError::Backend { message: Some("  ".into()) }.user_message("Có lỗi"), "Có lỗi");
    }

    #[test]
    fn test_validation_message_is_shown_verbatim() {
        let err = AppError::Validation("Ngày kết thúc phải sau ngày bắt đầu".into());
        assert!(err.is_validation());
        assert_eq!(err.user_message("x"), "Ngày kết thúc phải sau ngày bắt đầu");
    }
}
