use leptos::prelude::*;

use crate::api::list_drug_requests;
use crate::components::{load_view, DrugRequestRow, EmptyState};
use crate::context::{use_app_context, use_fetch, RecordScope};
use crate::models::DrugRequest;

#[component]
pub fn DrugRequestsPage() -> impl IntoView {
    let ctx = use_app_context();
    let (requests, retry) = use_fetch("Không thể tải danh sách đơn thuốc", move |api| {
        let scope = ctx.record_scope();
        async move {
            match scope {
                RecordScope::Nothing => Ok(Vec::new()),
                scope => list_drug_requests(&api, scope.student_id()).await,
            }
        }
    });
    let on_update = Callback::new(move |_| ctx.reload());

    let table = move |list: Vec<DrugRequest>| {
        if list.is_empty() {
            return view! { <EmptyState message="Chưa có đơn thuốc nào" /> }.into_any();
        }
        view! {
            <table class="table">
                <thead>
                    <tr>
                        <th>"Mã đơn"</th>
                        <th>"Học sinh"</th>
                        <th>"Ngày gửi"</th>
                        <th>"Thời gian uống"</th>
                        <th>"Trạng thái"</th>
                        <th>"Thao tác"</th>
                    </tr>
                </thead>
                <tbody>
                    {list
                        .into_iter()
                        .map(|request| view! { <DrugRequestRow request=request on_update=on_update /> })
                        .collect_view()}
                </tbody>
            </table>
        }
        .into_any()
    };

    view! {
        <div class="page-header">
            <h2>"Đơn gửi thuốc"</h2>
            <a class="btn btn-secondary" href="/medication-today">"Lịch uống thuốc hôm nay"</a>
        </div>
        {move || load_view(requests.get(), retry, table)}
    }
}
