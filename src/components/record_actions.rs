//! Record Action Buttons
//!
//! Accept / refuse / receive / complete / cancel for one drug request or
//! declaration. Refuse goes through `RefuseModal`, cancel through an inline
//! confirmation; everything else fires immediately.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions::RecordAction;
use crate::components::snackbar::use_snackbar;
use crate::components::{ConfirmButton, RefuseModal};
use crate::context::use_app_context;
use crate::workflows::resolve_record;

/// # Arguments
/// * `resource` - backend resource path, e.g. `/disease-record`
/// * `actions` - buttons to show; `View` is skipped here, rows render it
/// * `on_update` - runs once after a successful decision
/// * `set_error` - row error, cleared on success
#[component]
pub fn RecordActionButtons(
    resource: &'static str,
    id: u32,
    actions: Vec<RecordAction>,
    #[prop(into)] on_update: Callback<()>,
    set_error: WriteSignal<Option<String>>,
) -> impl IntoView {
    let ctx = use_app_context();
    let snackbar = use_snackbar();
    let (busy, set_busy) = signal(false);
    let (refusing, set_refusing) = signal(false);

    let run = move |action: RecordAction, reason: Option<String>| {
        set_busy.set(true);
        spawn_local(async move {
            let api = ctx.api();
            let error = resolve_record(&api, &snackbar, resource, id, action, reason.as_deref(), move || {
                on_update.run(())
            })
            .await;
            if error.is_none() {
                set_refusing.set(false);
            }
            set_error.set(error);
            set_busy.set(false);
        });
    };

    let buttons = actions
        .into_iter()
        .filter(|a| *a != RecordAction::View)
        .map(|action| match action {
            RecordAction::Cancel => view! {
                <ConfirmButton
                    label=action.label()
                    button_class=action.style().class()
                    disabled=busy
                    on_confirm=move |_| run(action, None)
                />
            }
            .into_any(),
            RecordAction::Refuse => view! {
                <button
                    class=action.style().class()
                    disabled=move || busy.get()
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_refusing.set(true);
                    }
                >
                    {action.label()}
                </button>
            }
            .into_any(),
            _ => view! {
                <button
                    class=action.style().class()
                    disabled=move || busy.get()
                    on:click=move |ev| {
                        ev.stop_propagation();
                        run(action, None);
                    }
                >
                    {action.label()}
                </button>
            }
            .into_any(),
        })
        .collect_view();

    view! {
        <span class="record-actions">{buttons}</span>
        <Show when=move || refusing.get()>
            <RefuseModal
                busy=busy
                on_confirm=move |reason: String| run(RecordAction::Refuse, Some(reason))
                on_close=move |_| set_refusing.set(false)
            />
        </Show>
    }
}
