//! Drug Request Row
//!
//! One medication request in the list, with status-driven actions and an
//! expandable panel listing the requested items.

use leptos::prelude::*;

use crate::actions::{drug_request_actions, DrugRequestStatus, RecordAction};
use crate::api::DRUG_REQUEST_RESOURCE;
use crate::campaign_utils::{format_date, format_date_range};
use crate::components::RecordActionButtons;
use crate::context::use_app_context;
use crate::models::{or_unknown, DrugRequest};

#[component]
pub fn DrugRequestRow(request: DrugRequest, #[prop(into)] on_update: Callback<()>) -> impl IntoView {
    let ctx = use_app_context();
    let (expanded, set_expanded) = signal(false);
    let (row_error, set_row_error) = signal(None::<String>);

    let id = request.id;
    let status = DrugRequestStatus::parse(&request.status);
    let items = request.request_items.clone();
    let note = request.note.clone();
    let reason = request.reason_by_nurse.clone();

    view! {
        <tr class="record-row" on:click=move |_| set_expanded.update(|v| *v = !*v)>
            <td>{format!("#{}", id)}</td>
            <td>{or_unknown(&request.student_name)}</td>
            <td>{format_date(&request.schedule_send_date)}</td>
            <td>{format_date_range(&request.start_intake_date, &request.end_intake_date)}</td>
            <td><span class=status.badge_class()>{status.label()}</span></td>
            <td>
                <a
                    class=RecordAction::View.style().class()
                    href=format!("/drug-requests/{}", id)
                >
                    {RecordAction::View.label()}
                </a>
                {move || view! {
                    <RecordActionButtons
                        resource=DRUG_REQUEST_RESOURCE
                        id=id
                        actions=drug_request_actions(ctx.role(), status)
                        on_update=on_update
                        set_error=set_row_error
                    />
                }}
            </td>
        </tr>
        {move || row_error.get().map(|e| view! {
            <tr class="row-error"><td colspan="6">{e}</td></tr>
        })}
        <Show when=move || expanded.get()>
            <tr class="record-details">
                <td colspan="6">
                    <RequestItemList items=items.clone() />
                    {note.clone().map(|n| view! { <p><strong>"Ghi chú: "</strong>{n}</p> })}
                    {reason.clone().map(|r| view! { <p class="text-danger"><strong>"Lý do từ chối: "</strong>{r}</p> })}
                </td>
            </tr>
        </Show>
    }
}

#[component]
pub fn RequestItemList(items: Vec<crate::models::RequestItem>) -> impl IntoView {
    if items.is_empty() {
        return view! { <p class="empty-state">"Không có thuốc trong đơn"</p> }.into_any();
    }
    view! {
        <table class="table table-sm">
            <thead>
                <tr><th>"Tên thuốc"</th><th>"Liều dùng"</th><th>"Thời điểm uống"</th></tr>
            </thead>
            <tbody>
                {items
                    .into_iter()
                    .map(|item| {
                        let slots = item
                            .intake_template_time
                            .iter()
                            .map(|s| crate::medication::IntakeSlot::parse(s).label())
                            .collect::<Vec<_>>()
                            .join(", ");
                        view! {
                            <tr>
                                <td>{item.name}</td>
                                <td>{or_unknown(&item.dosage_usage)}</td>
                                <td>{slots}</td>
                            </tr>
                        }
                    })
                    .collect_view()}
            </tbody>
        </table>
    }
    .into_any()
}
