//! Registration list and result report of one campaign.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions::CampaignKind;
use crate::api::{list_registrations, list_report, update_report_row};
use crate::components::snackbar::{use_snackbar, SnackbarContext};
use crate::components::{load_view, EmptyState};
use crate::context::{use_app_context, use_fetch};
use crate::models::{or_unknown, CampaignRegistration, CampaignReportRow, ReportUpdate, UNKNOWN_TEXT};
use crate::pages::{invalid_id, use_id_param};

pub fn registration_status_label(status: &Option<String>) -> &'static str {
    match status.as_deref().map(|s| s.trim().to_uppercase()).as_deref() {
        Some("PENDING") => "Chờ phản hồi",
        Some("ACCEPTED") => "Đồng ý tham gia",
        Some("REFUSED") => "Từ chối",
        Some("CANCELLED") | Some("CANCELED") => "Đã hủy",
        Some("DONE") | Some("COMPLETED") => "Đã hoàn thành",
        _ => UNKNOWN_TEXT,
    }
}

#[component]
pub fn RegistrationsPage(kind: CampaignKind) -> impl IntoView {
    let campaign_id = use_id_param();
    let (registrations, retry) = use_fetch("Không thể tải danh sách đăng ký", move |api| {
        let id = campaign_id();
        async move { list_registrations(&api, kind, id.ok_or_else(invalid_id)?).await }
    });

    let table = |list: Vec<CampaignRegistration>| {
        if list.is_empty() {
            return view! { <EmptyState message="Chưa có đăng ký nào" /> }.into_any();
        }
        view! {
            <table class="table">
                <thead>
                    <tr><th>"Học sinh"</th><th>"Trạng thái"</th><th>"Lý do"</th></tr>
                </thead>
                <tbody>
                    {list
                        .into_iter()
                        .map(|r| view! {
                            <tr>
                                <td>{r.student_name.clone().unwrap_or(r.student_id.clone())}</td>
                                <td>{registration_status_label(&r.status)}</td>
                                <td>{or_unknown(&r.reason)}</td>
                            </tr>
                        })
                        .collect_view()}
                </tbody>
            </table>
        }
        .into_any()
    };

    view! {
        <BackToCampaign kind=kind />
        <h2>"Danh sách đăng ký"</h2>
        {move || load_view(registrations.get(), retry, table)}
    }
}

/// Campaign results. With `editable` each row becomes a form saved with
/// `PUT {resource}/{id}/report/{row_id}`.
#[component]
pub fn ReportPage(kind: CampaignKind, #[prop(optional)] editable: bool) -> impl IntoView {
    let ctx = use_app_context();
    let campaign_id = use_id_param();
    let (report, retry) = use_fetch("Không thể tải báo cáo", move |api| {
        let id = campaign_id();
        async move { list_report(&api, kind, id.ok_or_else(invalid_id)?).await }
    });
    let can_edit = move || editable && ctx.role().is_some_and(|r| r.is_staff());

    let table = move |rows: Vec<CampaignReportRow>| {
        if rows.is_empty() {
            return view! { <EmptyState message="Chưa có kết quả" /> }.into_any();
        }
        let Some(id) = campaign_id() else {
            return view! { <EmptyState message="Đường dẫn không hợp lệ" /> }.into_any();
        };
        view! {
            <table class="table">
                <thead>
                    <tr><th>"Học sinh"</th><th>"Kết quả"</th><th>"Ghi chú"</th><th></th></tr>
                </thead>
                <tbody>
                    {rows
                        .into_iter()
                        .map(|row| {
                            if can_edit() {
                                view! { <EditableReportRow kind=kind campaign_id=id row=row /> }.into_any()
                            } else {
                                view! {
                                    <tr>
                                        <td>{row.student_name.clone().unwrap_or(row.student_id.clone())}</td>
                                        <td>{or_unknown(&row.result)}</td>
                                        <td>{or_unknown(&row.description)}</td>
                                        <td></td>
                                    </tr>
                                }
                                .into_any()
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>
        }
        .into_any()
    };

    view! {
        <BackToCampaign kind=kind />
        <h2>{if editable { "Cập nhật kết quả" } else { "Báo cáo kết quả" }}</h2>
        {move || load_view(report.get(), retry, table)}
    }
}

#[component]
fn EditableReportRow(kind: CampaignKind, campaign_id: u32, row: CampaignReportRow) -> impl IntoView {
    let ctx = use_app_context();
    let snackbar = use_snackbar();
    let row_id = row.id;
    let (result, set_result) = signal(row.result.clone().unwrap_or_default());
    let (description, set_description) = signal(row.description.clone().unwrap_or_default());
    let (saving, set_saving) = signal(false);

    let save = move |_| {
        let update = ReportUpdate {
            result: result.get_untracked().trim().to_string(),
            description: description.get_untracked().trim().to_string(),
        };
        set_saving.set(true);
        spawn_local(async move {
            match update_report_row(&ctx.api(), kind, campaign_id, row_id, &update).await {
                Ok(saved) => {
                    set_result.set(saved.result.unwrap_or(update.result));
                    set_description.set(saved.description.unwrap_or(update.description));
                    snackbar.success("Đã lưu kết quả");
                }
                Err(e) => {
                    log::error!("saving report row {} failed: {}", row_id, e);
                    snackbar.error(&e.user_message("Không thể lưu kết quả"));
                }
            }
            set_saving.set(false);
        });
    };

    view! {
        <tr>
            <td>{row.student_name.clone().unwrap_or(row.student_id.clone())}</td>
            <td>
                <input
                    type="text"
                    class="form-control"
                    prop:value=move || result.get()
                    on:input=move |ev| set_result.set(event_target_value(&ev))
                />
            </td>
            <td>
                <input
                    type="text"
                    class="form-control"
                    prop:value=move || description.get()
                    on:input=move |ev| set_description.set(event_target_value(&ev))
                />
            </td>
            <td>
                <button class="btn btn-primary" disabled=move || saving.get() on:click=save>
                    {move || if saving.get() { "Đang lưu..." } else { "Lưu" }}
                </button>
            </td>
        </tr>
    }
}

#[component]
fn BackToCampaign(kind: CampaignKind) -> impl IntoView {
    let campaign_id = use_id_param();
    let href = move || match campaign_id() {
        Some(id) => format!("{}/{}", kind.route(), id),
        None => kind.route().to_string(),
    };
    view! { <a class="back-link" href=href>"← Quay lại chiến dịch"</a> }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registration_status_label() {
        assert_eq!(registration_status_label(&Some("accepted".into())), "Đồng ý tham gia");
        assert_eq!(registration_status_label(&Some("REFUSED".into())), "Từ chối");
        assert_eq!(registration_status_label(&None), UNKNOWN_TEXT);
        assert_eq!(registration_status_label(&Some("???".into())), UNKNOWN_TEXT);
    }
}
