//! Snackbar
//!
//! Toast stack at the bottom of the screen. Messages dismiss on click or
//! after a few seconds.

use std::sync::atomic::{AtomicU64, Ordering};

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

const DISMISS_AFTER_MS: u32 = 5_000;

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

#[derive(Clone, Copy, PartialEq)]
pub enum MsgType {
    Success,
    Warning,
    Error,
}

impl MsgType {
    fn class(&self) -> &'static str {
        match self {
            MsgType::Success => "snackbar-msg success",
            MsgType::Warning => "snackbar-msg warning",
            MsgType::Error => "snackbar-msg error",
        }
    }
}

#[derive(Clone)]
pub struct SnackbarMsg {
    id: u64,
    msg_type: MsgType,
    content: String,
}

impl SnackbarMsg {
    fn new(msg_type: MsgType, content: &str) -> Self {
        Self {
            id: NEXT_ID.fetch_add(1, Ordering::Relaxed),
            msg_type,
            content: content.to_string(),
        }
    }
}

pub trait SnackbarContext {
    fn success(&self, msg: &str);
    fn warning(&self, msg: &str);
    fn error(&self, msg: &str);
}

#[component]
pub fn Snackbar(children: Children) -> impl IntoView {
    let (messages, set_messages) = signal(Vec::<SnackbarMsg>::new());

    provide_context(set_messages);

    view! {
        {children()}
        <div class="snackbar-root" data-testid="snackbar-root">
            <For
                each=move || messages.get()
                key=|m: &SnackbarMsg| m.id
                children=move |msg: SnackbarMsg| {
                    let id = msg.id;
                    view! {
                        <div
                            class=msg.msg_type.class()
                            on:click=move |_| set_messages.update(|m| m.retain(|x| x.id != id))
                        >
                            {msg.content}
                        </div>
                    }
                }
            />
        </div>
    }
}

fn insert_message(snackbar: &Option<WriteSignal<Vec<SnackbarMsg>>>, msg: SnackbarMsg) {
    let Some(set_messages) = *snackbar else {
        log::debug!("snackbar not mounted, dropping: {}", msg.content);
        return;
    };
    let id = msg.id;
    set_messages.update(|m| m.push(msg));
    Timeout::new(DISMISS_AFTER_MS, move || {
        set_messages.try_update(|m| m.retain(|x| x.id != id));
    })
    .forget();
}

impl SnackbarContext for Option<WriteSignal<Vec<SnackbarMsg>>> {
    fn success(&self, msg: &str) {
        insert_message(self, SnackbarMsg::new(MsgType::Success, msg));
    }

    fn warning(&self, msg: &str) {
        insert_message(self, SnackbarMsg::new(MsgType::Warning, msg));
    }

    fn error(&self, msg: &str) {
        insert_message(self, SnackbarMsg::new(MsgType::Error, msg));
    }
}

pub fn use_snackbar() -> Option<WriteSignal<Vec<SnackbarMsg>>> {
    use_context::<WriteSignal<Vec<SnackbarMsg>>>()
}
