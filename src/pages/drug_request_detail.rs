//! Drug Request Detail
//!
//! Request summary, decision buttons and the medication schedule grid.
//! Dose toggles patch the grid locally; decisions re-fetch the request.

use leptos::prelude::*;

use crate::actions::{drug_request_actions, DrugRequestStatus};
use crate::api::{get_drug_request, list_schedule, DRUG_REQUEST_RESOURCE};
use crate::campaign_utils::{format_date, format_date_range};
use crate::components::{load_view, MedicationGrid, RecordActionButtons, RequestItemList};
use crate::context::{use_app_context, use_fetch};
use crate::medication::{group_doses, DoseGroup};
use crate::models::{or_unknown, DrugRequest};
use crate::pages::{invalid_id, use_id_param};

#[component]
pub fn DrugRequestDetailPage() -> impl IntoView {
    let ctx = use_app_context();
    let request_id = use_id_param();
    let (detail, retry) = use_fetch("Không thể tải đơn thuốc", move |api| {
        let id = request_id();
        async move {
            let id = id.ok_or_else(invalid_id)?;
            let (request, doses) = futures::try_join!(get_drug_request(&api, id), list_schedule(&api, id))?;
            Ok((request, group_doses(&doses)))
        }
    });

    let groups = RwSignal::new(Vec::<DoseGroup>::new());
    Effect::new(move |_| {
        if let Some((_, fetched)) = detail.with(|d| d.ready().cloned()) {
            groups.set(fetched);
        }
    });

    let (row_error, set_row_error) = signal(None::<String>);
    let on_update = Callback::new(move |_| ctx.reload());
    let on_changed = Callback::new(move |updated: DoseGroup| {
        groups.update(|list| {
            if let Some(slot) = list.iter_mut().find(|g| g.key() == updated.key()) {
                *slot = updated;
            }
        });
    });

    let body = move |(request, _): (DrugRequest, Vec<DoseGroup>)| {
        let status = DrugRequestStatus::parse(&request.status);
        view! {
            <div class="page-header">
                <h2>{format!("Đơn thuốc #{}", request.id)}</h2>
                <span class=status.badge_class()>{status.label()}</span>
            </div>
            <dl class="detail-list">
                <dt>"Học sinh"</dt>
                <dd>{or_unknown(&request.student_name)}</dd>
                <dt>"Ngày gửi thuốc"</dt>
                <dd>{format_date(&request.schedule_send_date)}</dd>
                <dt>"Thời gian uống"</dt>
                <dd>{format_date_range(&request.start_intake_date, &request.end_intake_date)}</dd>
                <dt>"Ghi chú"</dt>
                <dd>{or_unknown(&request.note)}</dd>
                {request.reason_by_nurse.clone().map(|r| view! { <dt>"Lý do từ chối"</dt><dd>{r}</dd> })}
            </dl>
            <RequestItemList items=request.request_items.clone() />
            {(!request.prescription_img_urls.is_empty()).then(|| view! {
                <div class="prescriptions">
                    {request
                        .prescription_img_urls
                        .iter()
                        .map(|url| view! { <img class="prescription-img" src=url.clone() alt="Đơn thuốc" /> })
                        .collect_view()}
                </div>
            })}
            <div class="action-bar">
                {move || view! {
                    <RecordActionButtons
                        resource=DRUG_REQUEST_RESOURCE
                        id=request.id
                        actions=drug_request_actions(ctx.role(), status)
                        on_update=on_update
                        set_error=set_row_error
                    />
                }}
            </div>
            {move || row_error.get().map(|e| view! { <p class="form-error">{e}</p> })}
            <h3>"Lịch uống thuốc"</h3>
            <MedicationGrid groups=groups request_status=Some(status) on_changed=on_changed />
        }
        .into_any()
    };

    view! {
        <a class="back-link" href="/drug-requests">"← Quay lại danh sách"</a>
        {move || load_view(detail.get(), retry, body)}
    }
}
