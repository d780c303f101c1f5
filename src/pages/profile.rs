use leptos::prelude::*;

use crate::api::get_home;
use crate::campaign_utils::format_date;
use crate::components::load_view;
use crate::context::{use_app_context, use_fetch};
use crate::models::{or_unknown, Home, Role};
use crate::store::{store_children, store_user};

#[component]
pub fn ProfilePage() -> impl IntoView {
    let ctx = use_app_context();
    let (home, retry) = use_fetch("Không thể tải thông tin gia đình", move |api| {
        let home_id = store_user(&ctx.store)
            .filter(|u| u.role() == Some(Role::Parent))
            .and_then(|u| u.home_id);
        async move {
            match home_id {
                Some(id) => get_home(&api, id).await.map(Some),
                None => Ok(None),
            }
        }
    });

    let account = move || {
        store_user(&ctx.store).map(|user| {
            view! {
                <div class="profile-card">
                    {user.profile_img_url.clone().map(|src| view! { <img class="avatar" src=src alt="" /> })}
                    <h2>{user.display_name()}</h2>
                    <dl class="detail-list">
                        <dt>"Email"</dt>
                        <dd>{or_unknown(&user.email)}</dd>
                        <dt>"Vai trò"</dt>
                        <dd>{user.role().map(|r| r.label()).unwrap_or(crate::models::UNKNOWN_TEXT)}</dd>
                    </dl>
                </div>
            }
        })
    };

    let household = |home: Option<Home>| {
        let Some(home) = home else { return ().into_any() };
        view! {
            <section class="household">
                <h3>"Thông tin gia đình"</h3>
                <dl class="detail-list">
                    <dt>"Số điện thoại"</dt>
                    <dd>{or_unknown(&home.contact_phone_number)}</dd>
                    <dt>"Email liên hệ"</dt>
                    <dd>{or_unknown(&home.contact_email)}</dd>
                </dl>
            </section>
        }
        .into_any()
    };

    view! {
        {account}
        {move || load_view(home.get(), retry, household)}
        <Show when=move || !store_children(&ctx.store).is_empty()>
            <section class="children">
                <h3>"Con của tôi"</h3>
                <ul>
                    {move || {
                        store_children(&ctx.store)
                            .into_iter()
                            .map(|child| view! {
                                <li>
                                    <strong>{child.name.clone()}</strong>
                                    {child.class_name.clone().map(|c| format!(" · Lớp {}", c))}
                                    {" · "}{format_date(&child.dob)}
                                </li>
                            })
                            .collect_view()
                    }}
                </ul>
            </section>
        </Show>
    }
}
