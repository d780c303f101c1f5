use leptos::prelude::*;

use crate::campaign_utils::{status_border_color, status_color, status_text, CampaignStatus};

#[component]
pub fn CampaignStatusBadge(#[prop(into)] status: Signal<CampaignStatus>) -> impl IntoView {
    view! {
        <span
            class="status-badge"
            style:color=move || status_color(status.get())
            style:border-color=move || status_border_color(status.get())
        >
            {move || status_text(status.get())}
        </span>
    }
}
