//! Campaign List
//!
//! Table of checkup or vaccination campaigns. Each row gets its buttons
//! from `campaign_actions`; a mutating action disables that row's buttons
//! until it settles, then the list is re-fetched.

use std::collections::HashSet;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions::{campaign_actions, CampaignAction, CampaignKind};
use crate::api::list_campaigns;
use crate::campaign_utils::{format_date_range, CampaignStatus};
use crate::components::snackbar::use_snackbar;
use crate::components::{load_view, ActionBar, CampaignForm, CampaignStatusBadge, EmptyState};
use crate::context::{use_app_context, use_fetch};
use crate::models::{or_unknown, Campaign, Role};
use crate::workflows::perform_campaign_action;

/// Which form is open: `Some(None)` creates, `Some(Some(c))` edits `c`
type FormState = Option<Option<Campaign>>;

#[component]
pub fn CampaignListPage(kind: CampaignKind) -> impl IntoView {
    let ctx = use_app_context();
    let snackbar = use_snackbar();
    let (campaigns, retry) = use_fetch("Không thể tải danh sách chiến dịch", move |api| async move {
        list_campaigns(&api, kind).await
    });
    let loading_ids = RwSignal::new(HashSet::<u32>::new());
    let (form, set_form) = signal::<FormState>(None);

    let dispatch = move |campaign: &Campaign, action: CampaignAction| {
        if action == CampaignAction::Edit {
            set_form.set(Some(Some(campaign.clone())));
            return;
        }
        if !action.is_mutating() {
            return;
        }
        let id = campaign.id;
        if loading_ids.with_untracked(|ids| ids.contains(&id)) {
            return;
        }
        loading_ids.update(|ids| {
            ids.insert(id);
        });
        spawn_local(async move {
            let ok = perform_campaign_action(&ctx.api(), &snackbar, kind, id, action).await;
            loading_ids.update(|ids| {
                ids.remove(&id);
            });
            if ok {
                ctx.reload();
            }
        });
    };

    let rows = move |list: Vec<Campaign>| {
        if list.is_empty() {
            return view! { <EmptyState message="Chưa có chiến dịch nào" /> }.into_any();
        }
        view! {
            <table class="table campaign-table">
                <thead>
                    <tr>
                        <th>"Tên chiến dịch"</th>
                        <th>"Thời gian"</th>
                        <th>"Địa điểm"</th>
                        <th>"Trạng thái"</th>
                        <th>"Thao tác"</th>
                    </tr>
                </thead>
                <tbody>
                    {list
                        .into_iter()
                        .map(|campaign| {
                            let id = campaign.id;
                            let status = CampaignStatus::parse(&campaign.status);
                            let actions = Signal::derive(move || {
                                let loading = loading_ids.with(|ids| ids.contains(&id));
                                campaign_actions(kind, ctx.role(), id, status, loading)
                            });
                            let for_action = campaign.clone();
                            view! {
                                <tr>
                                    <td>{campaign.name.clone()}</td>
                                    <td>{format_date_range(&campaign.start_date, &campaign.end_date)}</td>
                                    <td>{or_unknown(&campaign.location)}</td>
                                    <td><CampaignStatusBadge status=status /></td>
                                    <td>
                                        <ActionBar
                                            actions=actions
                                            on_action=move |action: CampaignAction| dispatch(&for_action, action)
                                        />
                                    </td>
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>
        }
        .into_any()
    };

    view! {
        <div class="campaign-page">
            <div class="page-header">
                <h2>{kind.title()}</h2>
                <Show when=move || ctx.role() == Some(Role::Admin)>
                    <button class="btn btn-primary" on:click=move |_| set_form.set(Some(None))>
                        "+ Tạo chiến dịch"
                    </button>
                </Show>
            </div>
            {move || load_view(campaigns.get(), retry, rows)}
            {move || form.get().map(|editing| view! {
                <CampaignForm kind=kind editing=editing on_close=move |_| set_form.set(None) />
            })}
        </div>
    }
}
