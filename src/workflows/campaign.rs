//! Campaign workflows: state actions and create/edit submit.

use crate::actions::{CampaignAction, CampaignKind};
use crate::api::{self, Backend};
use crate::components::snackbar::SnackbarContext;
use crate::error::AppResult;
use crate::validation::{validate_campaign, CampaignDraft};

/// Run a mutating campaign action. Returns true on success; the caller
/// re-fetches (list) or applies `action.optimistic_status()` (detail).
pub async fn perform_campaign_action<B, N>(
    backend: &B,
    snackbar: &N,
    kind: CampaignKind,
    campaign_id: u32,
    action: CampaignAction,
) -> bool
where
    B: Backend + ?Sized,
    N: SnackbarContext + ?Sized,
{
    match api::run_campaign_action(backend, kind, campaign_id, action).await {
        Ok(()) => {
            snackbar.success(action.success_message());
            true
        }
        Err(e) => {
            log::error!("campaign {} action {:?} failed: {}", campaign_id, action, e);
            snackbar.error(&e.user_message(action.failure_message()));
            false
        }
    }
}

/// Validate then create (`editing == None`) or update a campaign.
/// Validation failures never reach the backend.
pub async fn submit_campaign<B, N>(
    backend: &B,
    snackbar: &N,
    kind: CampaignKind,
    editing: Option<u32>,
    draft: &CampaignDraft,
) -> AppResult<()>
where
    B: Backend + ?Sized,
    N: SnackbarContext + ?Sized,
{
    let result = match validate_campaign(kind, draft) {
        Ok(payload) => match editing {
            Some(id) => api::update_campaign(backend, kind, id, &payload).await,
            None => api::create_campaign(backend, kind, &payload).await,
        },
        Err(e) => Err(e),
    };

    match &result {
        Ok(()) => snackbar.success(if editing.is_some() {
            "Đã cập nhật chiến dịch"
        } else {
            "Đã tạo chiến dịch mới"
        }),
        Err(e) if e.is_validation() => snackbar.warning(&e.user_message("")),
        Err(e) => {
            log::error!("saving campaign failed: {}", e);
            snackbar.error(&e.user_message("Không thể lưu chiến dịch"));
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::FakeBackend;
    use crate::api::HttpMethod;
    use crate::error::AppError;
    use crate::validation::MSG_END_BEFORE_START;
    use crate::workflows::testing::{RecordingSnackbar, Toast};

    #[tokio::test]
    async fn test_send_register_posts_and_reports_success() {
        let backend = FakeBackend::new();
        let snackbar = RecordingSnackbar::default();

        let ok = perform_campaign_action(&backend, &snackbar, CampaignKind::Checkup, 12, CampaignAction::SendRegister).await;

        assert!(ok);
        let calls = backend.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].method, HttpMethod::Post);
        assert_eq!(calls[0].path, "/checkup-campaign/12/send-register");
        assert_eq!(calls[0].body, None);
        assert_eq!(snackbar.toasts.borrow()[0], Toast::Success("Đã gửi đơn đăng ký đến phụ huynh".into()));
    }

    #[tokio::test]
    async fn test_failed_action_shows_backend_message() {
        let backend = FakeBackend::new().respond(Err(AppError::Backend { message: Some("Chiến dịch đã bắt đầu".into()) }));
        let snackbar = RecordingSnackbar::default();

        let ok = perform_campaign_action(&backend, &snackbar, CampaignKind::Vaccination, 3, CampaignAction::Cancel).await;

        assert!(!ok);
        assert_eq!(backend.calls.borrow()[0].method, HttpMethod::Patch);
        assert_eq!(snackbar.toasts.borrow()[0], Toast::Error("Chiến dịch đã bắt đầu".into()));
    }

    #[tokio::test]
    async fn test_transport_failure_uses_fallback() {
        let backend = FakeBackend::new().respond(Err(AppError::Transport("offline".into())));
        let snackbar = RecordingSnackbar::default();

        perform_campaign_action(&backend, &snackbar, CampaignKind::Checkup, 3, CampaignAction::Start).await;

        assert_eq!(snackbar.toasts.borrow()[0], Toast::Error("Không thể bắt đầu chiến dịch".into()));
    }

    #[tokio::test]
    async fn test_invalid_dates_never_reach_backend() {
        let backend = FakeBackend::new();
        let snackbar = RecordingSnackbar::default();
        let draft = CampaignDraft {
            name: "Khám mắt".into(),
            start_date: "2025-10-10".into(),
            end_date: "2025-10-01".into(),
            ..Default::default()
        };

        let result = submit_campaign(&backend, &snackbar, CampaignKind::Checkup, None, &draft).await;

        assert_eq!(result, Err(AppError::Validation(MSG_END_BEFORE_START.into())));
        assert_eq!(backend.call_count(), 0);
        assert_eq!(snackbar.toasts.borrow()[0], Toast::Warning(MSG_END_BEFORE_START.into()));
    }

    #[tokio::test]
    async fn test_edit_puts_to_campaign_path() {
        let backend = FakeBackend::new();
        let snackbar = RecordingSnackbar::default();
        let draft = CampaignDraft {
            name: "Tiêm cúm".into(),
            start_date: "2025-10-01".into(),
            end_date: "2025-10-03".into(),
            vaccine_id: Some(4),
            ..Default::default()
        };

        submit_campaign(&backend, &snackbar, CampaignKind::Vaccination, Some(8), &draft).await.unwrap();

        let calls = backend.calls.borrow();
        assert_eq!(calls[0].method, HttpMethod::Put);
        assert_eq!(calls[0].path, "/vaccination-campaign/8");
        assert_eq!(calls[0].body.as_ref().and_then(|b| b.get("vaccine_id")).cloned(), Some(serde_json::json!(4)));
    }
}
