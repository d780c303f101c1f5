//! Dashboard
//!
//! Role-aware overview computed from the list endpoints: campaign counts by
//! status for staff, outstanding drug requests and declarations for both.

use leptos::prelude::*;

use crate::actions::{CampaignKind, DeclarationStatus, DrugRequestStatus};
use crate::api::{list_campaigns, list_disease_records, list_drug_requests, list_vaccination_records, Backend};
use crate::campaign_utils::{status_color, status_text, CampaignStatus};
use crate::components::load_view;
use crate::context::{use_app_context, use_fetch, RecordScope};
use crate::error::AppResult;
use crate::models::{Campaign, DiseaseRecord, DrugRequest, VaccinationRecord};
use crate::store::store_user;

/// Display order of the status counters
const STATUS_ORDER: [CampaignStatus; 7] = [
    CampaignStatus::Drafted,
    CampaignStatus::Preparing,
    CampaignStatus::Upcoming,
    CampaignStatus::Ongoing,
    CampaignStatus::Done,
    CampaignStatus::Cancelled,
    CampaignStatus::Unknown,
];

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DashboardSummary {
    pub campaigns: Vec<(CampaignKind, Vec<(CampaignStatus, usize)>)>,
    /// Waiting for a nurse decision
    pub pending_requests: usize,
    /// Accepted or received, medication in progress
    pub active_requests: usize,
    pub pending_declarations: usize,
}

/// Non-zero counts in display order
pub fn count_by_status(campaigns: &[Campaign]) -> Vec<(CampaignStatus, usize)> {
    STATUS_ORDER
        .iter()
        .map(|status| {
            let n = campaigns.iter().filter(|c| CampaignStatus::parse(&c.status) == *status).count();
            (*status, n)
        })
        .filter(|(_, n)| *n > 0)
        .collect()
}

pub fn count_requests(requests: &[DrugRequest], statuses: &[DrugRequestStatus]) -> usize {
    requests
        .iter()
        .filter(|r| statuses.contains(&DrugRequestStatus::parse(&r.status)))
        .count()
}

pub fn count_pending_declarations(disease: &[DiseaseRecord], vaccination: &[VaccinationRecord]) -> usize {
    let pending = |s: &str| DeclarationStatus::parse(s) == DeclarationStatus::Pending;
    disease.iter().filter(|r| pending(&r.pending)).count()
        + vaccination.iter().filter(|r| pending(&r.pending)).count()
}

pub async fn load_summary<B: Backend + ?Sized>(backend: &B, scope: &RecordScope) -> AppResult<DashboardSummary> {
    if *scope == RecordScope::Nothing {
        return Ok(DashboardSummary::default());
    }
    let student = scope.student_id();
    let (requests, disease, vaccination) = futures::try_join!(
        list_drug_requests(backend, student),
        list_disease_records(backend, student),
        list_vaccination_records(backend, student),
    )?;

    let campaigns = if *scope == RecordScope::All {
        let (checkups, vaccinations) = futures::try_join!(
            list_campaigns(backend, CampaignKind::Checkup),
            list_campaigns(backend, CampaignKind::Vaccination),
        )?;
        vec![
            (CampaignKind::Checkup, count_by_status(&checkups)),
            (CampaignKind::Vaccination, count_by_status(&vaccinations)),
        ]
    } else {
        Vec::new()
    };

    Ok(DashboardSummary {
        campaigns,
        pending_requests: count_requests(&requests, &[DrugRequestStatus::Processing]),
        active_requests: count_requests(&requests, &[DrugRequestStatus::Accepted, DrugRequestStatus::Received]),
        pending_declarations: count_pending_declarations(&disease, &vaccination),
    })
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let ctx = use_app_context();
    let (summary, retry) = use_fetch("Không thể tải tổng quan", move |api| {
        let scope = ctx.record_scope();
        async move { load_summary(&api, &scope).await }
    });

    let greeting = move || {
        store_user(&ctx.store)
            .map(|u| format!("Xin chào, {}", u.display_name()))
            .unwrap_or_default()
    };

    view! {
        <div class="dashboard">
            <h2>{greeting}</h2>
            {move || load_view(summary.get(), retry, |s: DashboardSummary| {
                view! {
                    <div class="stat-cards">
                        <StatCard label="Đơn thuốc chờ duyệt" value=s.pending_requests href="/drug-requests" />
                        <StatCard label="Đơn thuốc đang thực hiện" value=s.active_requests href="/drug-requests" />
                        <StatCard label="Khai báo chờ xác nhận" value=s.pending_declarations href="/disease-declarations" />
                    </div>
                    {s.campaigns
                        .into_iter()
                        .map(|(kind, counts)| view! {
                            <section class="campaign-summary">
                                <h3><a href=kind.route()>{kind.title()}</a></h3>
                                {if counts.is_empty() {
                                    view! { <p class="empty-state">"Chưa có chiến dịch"</p> }.into_any()
                                } else {
                                    view! {
                                        <ul class="status-counts">
                                            {counts
                                                .into_iter()
                                                .map(|(status, n)| view! {
                                                    <li style:color=status_color(status)>
                                                        {format!("{}: {}", status_text(status), n)}
                                                    </li>
                                                })
                                                .collect_view()}
                                        </ul>
                                    }
                                    .into_any()
                                }}
                            </section>
                        })
                        .collect_view()}
                }
                .into_any()
            })}
        </div>
    }
}

#[component]
fn StatCard(label: &'static str, value: usize, href: &'static str) -> impl IntoView {
    view! {
        <a class="stat-card" href=href>
            <span class="stat-value">{value}</span>
            <span class="stat-label">{label}</span>
        </a>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::FakeBackend;
    use serde_json::json;

    fn campaign(status: &str) -> Campaign {
        serde_json::from_value(json!({"id": 1, "name": "c", "status": status})).unwrap()
    }

    #[test]
    fn test_count_by_status_merges_completed() {
        let list = vec![campaign("DONE"), campaign("COMPLETED"), campaign("DRAFTED"), campaign("weird")];
        assert_eq!(
            count_by_status(&list),
            vec![(CampaignStatus::Drafted, 1), (CampaignStatus::Done, 2), (CampaignStatus::Unknown, 1)]
        );
        assert!(count_by_status(&[]).is_empty());
    }

    #[tokio::test]
    async fn test_parent_summary_is_scoped_to_child() {
        let backend = FakeBackend::new()
            .respond(Ok(json!([
                {"id": 1, "student_id": "hs-1", "status": "PROCESSING"},
                {"id": 2, "student_id": "hs-1", "status": "ACCEPTED"},
                {"id": 3, "student_id": "hs-1", "status": "DONE"}
            ])))
            .respond(Ok(json!([{"id": 4, "student_id": "hs-1", "pending": "PENDING"}])))
            .respond(Ok(json!([{"id": 5, "student_id": "hs-1", "pending": "DONE"}])));

        let summary = load_summary(&backend, &RecordScope::Student("hs-1".into())).await.unwrap();
        assert_eq!(summary.pending_requests, 1);
        assert_eq!(summary.active_requests, 1);
        assert_eq!(summary.pending_declarations, 1);
        assert!(summary.campaigns.is_empty());
        assert_eq!(backend.call_count(), 3);
        assert!(backend.paths().iter().all(|p| p.ends_with("?student_id=hs%2D1")));
    }

    #[tokio::test]
    async fn test_nothing_scope_makes_no_requests() {
        let backend = FakeBackend::new();
        let summary = load_summary(&backend, &RecordScope::Nothing).await.unwrap();
        assert_eq!(summary, DashboardSummary::default());
        assert_eq!(backend.call_count(), 0);
    }
}
