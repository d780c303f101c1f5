//! Campaign Detail
//!
//! Unlike the list, a successful action here patches the displayed status
//! in place instead of re-fetching.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions::{campaign_actions, CampaignAction, CampaignKind};
use crate::api::get_campaign;
use crate::campaign_utils::{format_date, format_date_range, CampaignStatus};
use crate::components::snackbar::use_snackbar;
use crate::components::{load_view, ActionBar, CampaignForm, CampaignStatusBadge};
use crate::context::{use_app_context, use_fetch, Loadable};
use crate::models::{or_unknown, Campaign};
use crate::pages::{invalid_id, use_id_param};
use crate::workflows::perform_campaign_action;

#[component]
pub fn CampaignDetailPage(kind: CampaignKind) -> impl IntoView {
    let ctx = use_app_context();
    let snackbar = use_snackbar();
    let campaign_id = use_id_param();
    let (campaign, retry) = use_fetch("Không thể tải thông tin chiến dịch", move |api| {
        let id = campaign_id();
        async move { get_campaign(&api, kind, id.ok_or_else(invalid_id)?).await }
    });

    let status_override = RwSignal::new(None::<CampaignStatus>);
    let (loading, set_loading) = signal(false);
    let (editing, set_editing) = signal(false);

    // A fresh fetch supersedes any optimistic status
    Effect::new(move |_| {
        if campaign.with(|c| matches!(c, Loadable::Ready(_))) {
            status_override.set(None);
        }
    });

    let dispatch = move |id: u32, action: CampaignAction| {
        if action == CampaignAction::Edit {
            set_editing.set(true);
            return;
        }
        if !action.is_mutating() || loading.get_untracked() {
            return;
        }
        set_loading.set(true);
        spawn_local(async move {
            if perform_campaign_action(&ctx.api(), &snackbar, kind, id, action).await {
                status_override.set(action.optimistic_status());
            }
            set_loading.set(false);
        });
    };

    let detail = move |c: Campaign| {
        let id = c.id;
        let fetched = CampaignStatus::parse(&c.status);
        let status = Signal::derive(move || status_override.get().unwrap_or(fetched));
        let actions = Signal::derive(move || campaign_actions(kind, ctx.role(), id, status.get(), loading.get()));
        let for_form = c.clone();
        view! {
            <div class="campaign-detail">
                <div class="page-header">
                    <h2>{c.name.clone()}</h2>
                    <CampaignStatusBadge status=status />
                </div>
                <dl class="detail-list">
                    <dt>"Thời gian"</dt>
                    <dd>{format_date_range(&c.start_date, &c.end_date)}</dd>
                    <dt>"Ngày bắt đầu"</dt>
                    <dd>{format_date(&c.start_date)}</dd>
                    <dt>"Địa điểm"</dt>
                    <dd>{or_unknown(&c.location)}</dd>
                    <dt>"Mô tả"</dt>
                    <dd>{or_unknown(&c.description)}</dd>
                    {match kind {
                        CampaignKind::Vaccination => view! {
                            <dt>"Vắc xin"</dt>
                            <dd>{or_unknown(&c.vaccine_name)}</dd>
                            <dt>"Phòng bệnh"</dt>
                            <dd>{or_unknown(&c.disease_name)}</dd>
                        }
                        .into_any(),
                        CampaignKind::Checkup => view! {
                            <dt>"Chuyên khoa"</dt>
                            <dd>
                                {if c.specialist_exams.is_empty() {
                                    crate::models::UNKNOWN_TEXT.to_string()
                                } else {
                                    c.specialist_exams.iter().map(|e| e.name.clone()).collect::<Vec<_>>().join(", ")
                                }}
                            </dd>
                        }
                        .into_any(),
                    }}
                </dl>
                <ActionBar actions=actions on_action=move |action: CampaignAction| dispatch(id, action) />
                <Show when=move || editing.get()>
                    <CampaignForm
                        kind=kind
                        editing=Some(for_form.clone())
                        on_close=move |_| set_editing.set(false)
                    />
                </Show>
            </div>
        }
        .into_any()
    };

    view! {
        <a class="back-link" href=kind.route()>"← Quay lại danh sách"</a>
        {move || load_view(campaign.get(), retry, detail)}
    }
}
