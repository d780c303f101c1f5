//! Campaign Action Bar
//!
//! Renders the descriptors from `campaign_actions`. Navigation actions are
//! links; everything else is handed to `on_action`.

use leptos::prelude::*;

use crate::actions::{ActionDescriptor, CampaignAction};
use crate::components::ConfirmButton;

#[component]
pub fn ActionBar(
    #[prop(into)] actions: Signal<Vec<ActionDescriptor>>,
    #[prop(into)] on_action: Callback<CampaignAction>,
) -> impl IntoView {
    let button = move |descriptor: ActionDescriptor| {
        let action = descriptor.action;
        if let Some(href) = descriptor.navigate_to {
            return view! { <a class=descriptor.style.class() href=href>{descriptor.label}</a> }.into_any();
        }
        if action == CampaignAction::Cancel {
            return view! {
                <ConfirmButton
                    label=descriptor.label
                    button_class=descriptor.style.class()
                    disabled=descriptor.disabled
                    on_confirm=move |_| on_action.run(action)
                />
            }
            .into_any();
        }
        view! {
            <button
                class=descriptor.style.class()
                disabled=descriptor.disabled
                on:click=move |ev| {
                    ev.stop_propagation();
                    on_action.run(action);
                }
            >
                {descriptor.label}
            </button>
        }
        .into_any()
    };

    view! {
        <div class="action-bar">
            {move || actions.get().into_iter().map(button).collect_view()}
        </div>
    }
}
