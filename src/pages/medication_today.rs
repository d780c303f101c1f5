//! Today's Medication
//!
//! Every dose scheduled for today across all requests, one grid per
//! request so that groups never mix students. Each grid carries its
//! request's status so completed requests stay locked.

use std::collections::BTreeMap;

use futures::try_join;
use leptos::prelude::*;

use crate::actions::DrugRequestStatus;
use crate::api::{list_drug_requests, list_today_schedule, Backend};
use crate::components::{load_view, EmptyState, MedicationGrid};
use crate::context::use_fetch;
use crate::error::AppResult;
use crate::medication::{group_doses, DoseGroup};
use crate::models::{or_unknown, DrugRequest, MedicationDose};

#[derive(Clone, Debug, PartialEq)]
pub struct RequestSchedule {
    pub request_id: Option<u32>,
    /// `None` when the request is missing from the request list
    pub request_status: Option<DrugRequestStatus>,
    pub student_name: String,
    pub groups: Vec<DoseGroup>,
}

pub fn split_by_request(doses: &[MedicationDose], requests: &[DrugRequest]) -> Vec<RequestSchedule> {
    let mut by_request: BTreeMap<Option<u32>, Vec<MedicationDose>> = BTreeMap::new();
    for dose in doses {
        by_request.entry(dose.send_drug_request_id).or_default().push(dose.clone());
    }
    by_request
        .into_iter()
        .map(|(request_id, doses)| {
            let request = request_id.and_then(|id| requests.iter().find(|r| r.id == id));
            RequestSchedule {
                request_id,
                request_status: request.map(|r| DrugRequestStatus::parse(&r.status)),
                student_name: or_unknown(
                    &doses
                        .iter()
                        .find_map(|d| d.student_name.clone())
                        .or_else(|| request.and_then(|r| r.student_name.clone())),
                ),
                groups: group_doses(&doses),
            }
        })
        .collect()
}

/// Today's doses joined with the requests they belong to
pub async fn load_today_schedule<B: Backend + ?Sized>(backend: &B) -> AppResult<Vec<RequestSchedule>> {
    let (doses, requests) = try_join!(list_today_schedule(backend), list_drug_requests(backend, None))?;
    Ok(split_by_request(&doses, &requests))
}

#[component]
pub fn MedicationTodayPage() -> impl IntoView {
    let (schedule, retry) = use_fetch("Không thể tải lịch uống thuốc hôm nay", move |api| async move {
        load_today_schedule(&api).await
    });

    let sections = |list: Vec<RequestSchedule>| {
        if list.is_empty() {
            return view! { <EmptyState message="Hôm nay không có lịch uống thuốc" /> }.into_any();
        }
        list.into_iter()
            .map(|section| {
                let groups = RwSignal::new(section.groups);
                let request_status = section.request_status;
                let on_changed = Callback::new(move |updated: DoseGroup| {
                    groups.update(|list| {
                        if let Some(slot) = list.iter_mut().find(|g| g.key() == updated.key()) {
                            *slot = updated;
                        }
                    });
                });
                let heading = match section.request_id {
                    Some(id) => view! {
                        <a href=format!("/drug-requests/{}", id)>{format!("Đơn #{}", id)}</a>
                    }
                    .into_any(),
                    None => view! { <span>"Không rõ đơn"</span> }.into_any(),
                };
                view! {
                    <section class="today-section">
                        <h3>{section.student_name}" · "{heading}</h3>
                        <MedicationGrid groups=groups request_status=request_status on_changed=on_changed />
                    </section>
                }
            })
            .collect_view()
            .into_any()
    };

    view! {
        <h2>"Lịch uống thuốc hôm nay"</h2>
        {move || load_view(schedule.get(), retry, sections)}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::FakeBackend;
    use crate::models::Role;
    use crate::workflows::testing::RecordingSnackbar;
    use crate::workflows::{toggle_group, ToggleContext};
    use chrono::NaiveDate;
    use serde_json::json;

    fn dose(id: u32, request: u32, student: &str, slot: &str) -> MedicationDose {
        serde_json::from_value(json!({
            "id": id,
            "send_drug_request_id": request,
            "student_name": student,
            "medication_name": "Paracetamol",
            "intake_date": "2025-06-02",
            "intake_template_time": slot,
            "is_taken": false
        }))
        .unwrap()
    }

    #[test]
    fn test_doses_of_different_requests_never_share_a_group() {
        let doses = vec![
            dose(1, 10, "An", "MORNING"),
            dose(2, 11, "Bình", "MORNING"),
            dose(3, 10, "An", "MORNING"),
        ];
        let sections = split_by_request(&doses, &[]);
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].request_id, Some(10));
        assert_eq!(sections[0].student_name, "An");
        assert_eq!(sections[0].groups.len(), 1);
        assert_eq!(sections[0].groups[0].dose_ids, vec![1, 3]);
        assert_eq!(sections[1].groups[0].dose_ids, vec![2]);
        assert_eq!(sections[0].request_status, None);
    }

    #[tokio::test]
    async fn test_completed_request_stays_locked_on_today_tab() {
        let backend = FakeBackend::new()
            .respond(Ok(json!([
                {"id": 9, "send_drug_request_id": 40, "intake_date": "2025-06-02", "intake_template_time": "MORNING"},
                {"id": 12, "send_drug_request_id": 41, "intake_date": "2025-06-02", "intake_template_time": "MORNING"}
            ])))
            .respond(Ok(json!([
                {"id": 40, "student_id": "hs-1", "student_name": "An", "status": "DONE"},
                {"id": 41, "student_id": "hs-2", "student_name": "Bình", "status": "ACCEPTED"}
            ])));

        let sections = load_today_schedule(&backend).await.unwrap();
        assert_eq!(backend.paths(), vec!["/medication-schedule/today", "/send-drug-request"]);
        assert_eq!(sections[0].request_status, Some(DrugRequestStatus::Done));
        assert_eq!(sections[0].student_name, "An");
        assert_eq!(sections[1].request_status, Some(DrugRequestStatus::Accepted));

        let snackbar = RecordingSnackbar::default();
        let toggle = ToggleContext {
            role: Some(Role::Nurse),
            request_status: sections[0].request_status,
            today: NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
            now: "2025-06-02T07:30:00+07:00".into(),
        };
        let result = toggle_group(&backend, &snackbar, &sections[0].groups[0], true, None, &toggle).await;

        assert_eq!(result, None);
        assert_eq!(backend.call_count(), 2);
        assert_eq!(snackbar.warnings(), 1);
        assert_eq!(snackbar.toasts.borrow().len(), 1);
    }
}
