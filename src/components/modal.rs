use leptos::prelude::*;

/// Centered dialog over a dimmed backdrop. Clicking the backdrop or the ×
/// closes it; render it conditionally from the parent.
#[component]
pub fn Modal(
    #[prop(into)] title: String,
    #[prop(into)] on_close: Callback<()>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class="modal-backdrop"
            on:click=move |ev| {
                ev.stop_propagation();
                on_close.run(());
            }
        >
            <div class="modal" on:click=|e| e.stop_propagation()>
                <div class="modal-header">
                    <h3>{title}</h3>
                    <button class="modal-close" on:click=move |_| on_close.run(())>"×"</button>
                </div>
                <div class="modal-body">{children()}</div>
            </div>
        </div>
    }
}
