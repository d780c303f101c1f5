use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_navigate;

use crate::api::{login, ApiClient};
use crate::components::snackbar::{use_snackbar, SnackbarContext};
use crate::context::use_app_context;
use crate::store::{store_login, store_user};

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = use_app_context();
    let snackbar = use_snackbar();
    let navigate = use_navigate();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal(None::<String>);
    let (submitting, set_submitting) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let email = email.get_untracked().trim().to_string();
        let password = password.get_untracked();
        if email.is_empty() || password.is_empty() {
            set_error.set(Some("Vui lòng nhập email và mật khẩu".into()));
            return;
        }
        set_submitting.set(true);
        set_error.set(None);
        let navigate = navigate.clone();
        spawn_local(async move {
            let api = ApiClient::new(ctx.config(), None);
            match login(&api, &email, &password).await {
                Ok(user) => {
                    log::info!("signed in as {}", user.id);
                    store_login(&ctx.store, user);
                    snackbar.success("Đăng nhập thành công");
                    navigate("/", Default::default());
                }
                Err(e) => {
                    log::warn!("sign-in failed: {}", e);
                    set_error.set(Some(e.user_message("Email hoặc mật khẩu không đúng")));
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <Show when=move || store_user(&ctx.store).is_some()>
            <Redirect path="/" />
        </Show>
        <div class="login-page">
            <form class="login-card" on:submit=on_submit>
                <h1>"Y tế học đường"</h1>
                <label>"Email"</label>
                <input
                    type="email"
                    class="form-control"
                    autocomplete="username"
                    prop:value=move || email.get()
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                />
                <label>"Mật khẩu"</label>
                <input
                    type="password"
                    class="form-control"
                    autocomplete="current-password"
                    prop:value=move || password.get()
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                />
                {move || error.get().map(|e| view! { <p class="form-error">{e}</p> })}
                <button type="submit" class="btn btn-primary" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Đang đăng nhập..." } else { "Đăng nhập" }}
                </button>
            </form>
        </div>
    }
}
