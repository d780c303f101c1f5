//! Loading and error placeholders for fetched data.

use leptos::prelude::*;

use crate::context::Loadable;

#[component]
pub fn Spinner() -> impl IntoView {
    view! { <div class="loading">"Đang tải..."</div> }
}

/// Red-bordered page-level failure box with a retry button
#[component]
pub fn ErrorPanel(#[prop(into)] message: String, #[prop(into)] on_retry: Callback<()>) -> impl IntoView {
    view! {
        <div class="error-panel">
            <p>{message}</p>
            <button class="btn btn-secondary" on:click=move |_| on_retry.run(())>"Thử lại"</button>
        </div>
    }
}

#[component]
pub fn EmptyState(#[prop(into)] message: String) -> impl IntoView {
    view! { <p class="empty-state">{message}</p> }
}

/// Spinner, error panel or the ready view for a fetched value
pub fn load_view<T>(state: Loadable<T>, retry: Callback<()>, ready: impl FnOnce(T) -> AnyView) -> AnyView {
    match state {
        Loadable::Loading => view! { <Spinner /> }.into_any(),
        Loadable::Failed(message) => view! { <ErrorPanel message=message on_retry=retry /> }.into_any(),
        Loadable::Ready(data) => ready(data),
    }
}
