//! Dose toggle workflow.

use chrono::NaiveDate;
use futures::future::join_all;

use crate::actions::DrugRequestStatus;
use crate::api::{self, Backend};
use crate::components::snackbar::SnackbarContext;
use crate::medication::{check_toggle, DoseGroup};
use crate::models::{Role, TickPayload};

pub struct ToggleContext {
    pub role: Option<Role>,
    /// `None` when the owning request is unknown
    pub request_status: Option<DrugRequestStatus>,
    pub today: NaiveDate,
    /// Timestamp sent as `intake_time`
    pub now: String,
}

/// Tick or untick every dose of a group. Returns the updated group only if
/// all requests succeeded; otherwise the displayed state stays as it was.
pub async fn toggle_group<B, N>(
    backend: &B,
    snackbar: &N,
    group: &DoseGroup,
    target_taken: bool,
    note: Option<String>,
    ctx: &ToggleContext,
) -> Option<DoseGroup>
where
    B: Backend + ?Sized,
    N: SnackbarContext + ?Sized,
{
    if let Err(rejection) = check_toggle(ctx.role, ctx.request_status, group, target_taken, ctx.today) {
        snackbar.warning(rejection.message());
        return None;
    }

    let note = note.map(|n| n.trim().to_string()).filter(|n| !n.is_empty());
    let results = if target_taken {
        let payload = TickPayload { intake_time: ctx.now.clone(), note: note.clone() };
        join_all(group.dose_ids.iter().map(|id| api::tick_dose(backend, *id, &payload))).await
    } else {
        join_all(group.dose_ids.iter().map(|id| api::untick_dose(backend, *id))).await
    };

    if let Some(e) = results.iter().find_map(|r| r.as_ref().err()) {
        let failed = results.iter().filter(|r| r.is_err()).count();
        log::error!("{} of {} dose updates failed: {}", failed, results.len(), e);
        snackbar.error(&e.user_message("Không thể cập nhật lịch uống thuốc"));
        return None;
    }

    snackbar.success(if target_taken { "Đã đánh dấu đã uống thuốc" } else { "Đã bỏ đánh dấu uống thuốc" });
    let mut updated = group.clone();
    updated.is_taken = target_taken;
    if target_taken {
        updated.note = note;
        updated.intake_time = Some(ctx.now.clone());
    } else {
        updated.note = None;
        updated.intake_time = None;
    }
    Some(updated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::FakeBackend;
    use crate::api::HttpMethod;
    use crate::medication::{group_doses, IntakeSlot};
    use crate::models::MedicationDose;
    use crate::workflows::testing::RecordingSnackbar;
    use serde_json::json;

    fn group(ids: &[u32], taken: bool) -> DoseGroup {
        let doses: Vec<MedicationDose> = ids
            .iter()
            .map(|id| MedicationDose {
                id: *id,
                send_drug_request_id: Some(1),
                student_name: None,
                medication_name: None,
                intake_date: "2025-03-10".into(),
                intake_template_time: "MIDDAY".into(),
                is_taken: taken,
                intake_time: None,
                note: None,
            })
            .collect();
        let group = group_doses(&doses).remove(0);
        assert_eq!(group.slot, IntakeSlot::Midday);
        group
    }

    fn ctx() -> ToggleContext {
        ToggleContext {
            role: Some(Role::Nurse),
            request_status: Some(DrugRequestStatus::Accepted),
            today: NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
            now: "2025-03-10T11:30:00+07:00".into(),
        }
    }

    #[tokio::test]
    async fn test_same_state_makes_no_calls_and_one_warning() {
        let backend = FakeBackend::new();
        let snackbar = RecordingSnackbar::default();

        let result = toggle_group(&backend, &snackbar, &group(&[1, 2], true), true, None, &ctx()).await;

        assert_eq!(result, None);
        assert_eq!(backend.call_count(), 0);
        assert_eq!(snackbar.warnings(), 1);
        assert_eq!(snackbar.toasts.borrow().len(), 1);
    }

    #[tokio::test]
    async fn test_tick_patches_every_dose_in_group() {
        let backend = FakeBackend::new();
        let snackbar = RecordingSnackbar::default();

        let updated = toggle_group(&backend, &snackbar, &group(&[4, 7], false), true, Some(" Sau ăn ".into()), &ctx())
            .await
            .unwrap();

        assert!(updated.is_taken);
        assert_eq!(updated.note.as_deref(), Some("Sau ăn"));
        let calls = backend.calls.borrow();
        assert_eq!(calls.len(), 2);
        assert!(calls.iter().all(|c| c.method == HttpMethod::Patch));
        assert_eq!(
            calls.iter().map(|c| c.path.as_str()).collect::<Vec<_>>(),
            vec!["/medication-schedule/4/tick", "/medication-schedule/7/tick"]
        );
        assert_eq!(
            calls[0].body,
            Some(json!({"intake_time": "2025-03-10T11:30:00+07:00", "note": "Sau ăn"}))
        );
    }

    #[tokio::test]
    async fn test_untick_has_no_payload() {
        let backend = FakeBackend::new();
        let snackbar = RecordingSnackbar::default();

        let updated = toggle_group(&backend, &snackbar, &group(&[3], true), false, None, &ctx()).await.unwrap();

        assert!(!updated.is_taken);
        let calls = backend.calls.borrow();
        assert_eq!(calls[0].path, "/medication-schedule/3/untick");
        assert_eq!(calls[0].body, None);
    }

    #[tokio::test]
    async fn test_partial_failure_leaves_group_unchanged() {
        let backend = FakeBackend::new().fail_path("/medication-schedule/7/tick");
        let snackbar = RecordingSnackbar::default();

        let result = toggle_group(&backend, &snackbar, &group(&[4, 7], false), true, None, &ctx()).await;

        assert_eq!(result, None);
        assert_eq!(backend.call_count(), 2);
        assert_eq!(snackbar.errors(), 1);
    }

    #[tokio::test]
    async fn test_done_request_is_locked() {
        let backend = FakeBackend::new();
        let snackbar = RecordingSnackbar::default();
        let mut context = ctx();
        context.request_status = Some(DrugRequestStatus::Done);

        let result = toggle_group(&backend, &snackbar, &group(&[1], false), true, None, &context).await;

        assert_eq!(result, None);
        assert_eq!(backend.call_count(), 0);
        assert_eq!(snackbar.warnings(), 1);
    }
}
