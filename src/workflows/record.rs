//! Record workflows: accept / refuse / receive / complete / cancel on
//! drug requests and declarations.

use serde_json::Value;

use crate::actions::RecordAction;
use crate::api::{execute, Backend, HttpMethod};
use crate::components::snackbar::SnackbarContext;
use crate::error::{AppError, AppResult};
use crate::models::RefusePayload;
use crate::validation::validate_refuse_reason;

/// `PATCH {resource}/{id}/{segment}`; refuse carries `{ reason_by_nurse }`
pub async fn apply_record_action<B: Backend + ?Sized>(
    backend: &B,
    resource: &str,
    id: u32,
    action: RecordAction,
    reason: Option<&str>,
) -> AppResult<()> {
    let segment = action
        .segment()
        .ok_or_else(|| AppError::Validation(format!("{} không gửi yêu cầu đến máy chủ", action.label())))?;

    let body: Option<Value> = match action {
        RecordAction::Refuse => {
            let reason_by_nurse = validate_refuse_reason(reason.unwrap_or_default())?;
            Some(serde_json::to_value(RefusePayload { reason_by_nurse })?)
        }
        _ => None,
    };

    execute(backend, HttpMethod::Patch, &format!("{}/{}/{}", resource, id, segment), body).await
}

/// Run a row action and settle the row: on success `on_update` runs once and
/// the returned row error is `None`; on failure the message is returned.
pub async fn resolve_record<B, N>(
    backend: &B,
    snackbar: &N,
    resource: &str,
    id: u32,
    action: RecordAction,
    reason: Option<&str>,
    on_update: impl FnOnce(),
) -> Option<String>
where
    B: Backend + ?Sized,
    N: SnackbarContext + ?Sized,
{
    match apply_record_action(backend, resource, id, action, reason).await {
        Ok(()) => {
            snackbar.success(success_message(action));
            on_update();
            None
        }
        Err(e) => {
            log::error!("{} {} {:?} failed: {}", resource, id, action, e);
            let message = e.user_message("Có lỗi xảy ra, vui lòng thử lại");
            snackbar.error(&message);
            Some(message)
        }
    }
}

fn success_message(action: RecordAction) -> &'static str {
    match action {
        RecordAction::Accept => "Đã chấp nhận",
        RecordAction::Refuse => "Đã từ chối",
        RecordAction::Receive => "Đã xác nhận nhận thuốc",
        RecordAction::Complete => "Đã hoàn thành đơn thuốc",
        RecordAction::Cancel => "Đã hủy đơn",
        RecordAction::View => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    use crate::api::testing::FakeBackend;
    use crate::workflows::testing::RecordingSnackbar;
    use serde_json::json;

    #[tokio::test]
    async fn test_accept_calls_on_update_once_and_clears_error() {
        let backend = FakeBackend::new();
        let snackbar = RecordingSnackbar::default();
        let updates = Cell::new(0);

        let error = resolve_record(&backend, &snackbar, "/disease-record", 5, RecordAction::Accept, None, || {
            updates.set(updates.get() + 1)
        })
        .await;

        assert_eq!(error, None);
        assert_eq!(updates.get(), 1);
        let calls = backend.calls.borrow();
        assert_eq!(calls[0].path, "/disease-record/5/accept");
        assert_eq!(calls[0].body, None);
    }

    #[tokio::test]
    async fn test_refuse_sends_trimmed_reason() {
        let backend = FakeBackend::new();
        let snackbar = RecordingSnackbar::default();
        let updates = Cell::new(0);

        let error = resolve_record(
            &backend,
            &snackbar,
            "/send-drug-request",
            9,
            RecordAction::Refuse,
            Some("  Thiếu chữ ký bác sĩ "),
            || updates.set(updates.get() + 1),
        )
        .await;

        assert_eq!(error, None);
        assert_eq!(updates.get(), 1);
        let calls = backend.calls.borrow();
        assert_eq!(calls[0].path, "/send-drug-request/9/refuse");
        assert_eq!(calls[0].body, Some(json!({"reason_by_nurse": "Thiếu chữ ký bác sĩ"})));
    }

    #[tokio::test]
    async fn test_empty_refuse_reason_sends_nothing() {
        let backend = FakeBackend::new();
        let result = apply_record_action(&backend, "/vaccination-record", 2, RecordAction::Refuse, Some("   ")).await;
        assert!(matches!(result, Err(AppError::Validation(_))));
        assert_eq!(backend.call_count(), 0);
    }

    #[tokio::test]
    async fn test_failure_keeps_row_error_and_skips_update() {
        let backend = FakeBackend::new().fail_path("/disease-record/5/accept");
        let snackbar = RecordingSnackbar::default();
        let updates = Cell::new(0);

        let error = resolve_record(&backend, &snackbar, "/disease-record", 5, RecordAction::Accept, None, || {
            updates.set(updates.get() + 1)
        })
        .await;

        assert_eq!(error.as_deref(), Some("Lỗi máy chủ"));
        assert_eq!(updates.get(), 0);
        assert_eq!(snackbar.errors(), 1);
    }

    #[tokio::test]
    async fn test_view_is_not_a_request() {
        let backend = FakeBackend::new();
        let result = apply_record_action(&backend, "/send-drug-request", 1, RecordAction::View, None).await;
        assert!(result.is_err());
        assert_eq!(backend.call_count(), 0);
    }
}
