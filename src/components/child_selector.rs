//! Child Selector
//!
//! Parents with several children pick which one the portal shows. The
//! choice is persisted as `selectedChild`.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::list_children;
use crate::context::use_app_context;
use crate::models::Student;
use crate::store::{store_children, store_select_child, store_selected_child, store_set_children, store_user};

#[component]
pub fn ChildSelector() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    Effect::new(move |_| {
        let Some(user) = store_user(&store) else { return };
        spawn_local(async move {
            match list_children(&ctx.api(), &user.id).await {
                Ok(children) => {
                    log::debug!("loaded {} children", children.len());
                    store_set_children(&store, children);
                }
                Err(e) => log::error!("loading children failed: {}", e),
            }
        });
    });

    let on_change = move |ev: web_sys::Event| {
        let id = event_target_value(&ev);
        let child = store_children(&store).into_iter().find(|c| c.id == id);
        store_select_child(&store, child);
        ctx.reload();
    };

    view! {
        <Show
            when=move || !store_children(&store).is_empty()
            fallback=|| view! { <span class="child-selector empty">"Chưa liên kết học sinh"</span> }
        >
            <select class="child-selector" on:change=on_change>
                <For
                    each=move || store_children(&store)
                    key=|c: &Student| c.id.clone()
                    children=move |child: Student| {
                        let id = child.id.clone();
                        let selected = move || store_selected_child(&store).is_some_and(|s| s.id == id);
                        view! {
                            <option value=child.id.clone() selected=selected>{child.name.clone()}</option>
                        }
                    }
                />
            </select>
        </Show>
    }
}
