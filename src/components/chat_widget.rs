//! AI Chat Widget
//!
//! Floating assistant for parents. History survives reloads through
//! `ChatHistory`; answers are rendered as markdown.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::ask_ai;
use crate::chat_history::ChatHistory;
use crate::context::use_app_context;
use crate::markdown::parse_markdown;
use crate::models::ChatTurn;
use crate::storage::BrowserStorage;

const FALLBACK_ANSWER: &str = "Xin lỗi, hiện tại trợ lý không thể trả lời. Vui lòng thử lại sau.";

#[component]
pub fn ChatWidget() -> impl IntoView {
    let ctx = use_app_context();
    let limit = ctx.config().chat_history_limit;
    let history = move || ChatHistory::new(BrowserStorage, limit);

    let (open, set_open) = signal(false);
    let (turns, set_turns) = signal(history().load());
    let (input, set_input) = signal(String::new());
    let (waiting, set_waiting) = signal(false);

    let send = move || {
        let text = input.get_untracked().trim().to_string();
        if text.is_empty() || waiting.get_untracked() {
            return;
        }
        set_input.set(String::new());
        set_turns.set(history().push(ChatTurn::user(text.clone())));
        set_waiting.set(true);

        spawn_local(async move {
            let answer = match ask_ai(&ctx.api(), &text).await {
                Ok(answer) => answer,
                Err(e) => {
                    log::error!("ai-response failed: {}", e);
                    e.user_message(FALLBACK_ANSWER)
                }
            };
            set_turns.set(history().push(ChatTurn::assistant(answer)));
            set_waiting.set(false);
        });
    };

    view! {
        <div class="chat-widget">
            <Show when=move || open.get()>
                <div class="chat-panel">
                    <div class="chat-header">
                        <span>"Trợ lý sức khỏe"</span>
                        <button
                            class="chat-clear"
                            title="Xóa lịch sử"
                            on:click=move |_| {
                                history().clear();
                                set_turns.set(Vec::new());
                            }
                        >
                            "🗑"
                        </button>
                        <button class="chat-close" on:click=move |_| set_open.set(false)>"×"</button>
                    </div>
                    <div class="chat-messages">
                        <For
                            each=move || turns.get().into_iter().enumerate()
                            key=|(i, turn): &(usize, ChatTurn)| (*i, turn.text.len(), turn.is_user)
                            children=move |(_, turn): (usize, ChatTurn)| {
                                if turn.is_user {
                                    view! { <div class="chat-msg user">{turn.text}</div> }.into_any()
                                } else {
                                    view! { <div class="chat-msg assistant" inner_html=parse_markdown(&turn.text)></div> }
                                        .into_any()
                                }
                            }
                        />
                        <Show when=move || waiting.get()>
                            <div class="chat-msg assistant typing">"Đang trả lời..."</div>
                        </Show>
                    </div>
                    <div class="chat-input">
                        <input
                            type="text"
                            placeholder="Nhập câu hỏi..."
                            prop:value=move || input.get()
                            on:input=move |ev| set_input.set(event_target_value(&ev))
                            on:keydown=move |ev: web_sys::KeyboardEvent| {
                                if ev.key() == "Enter" {
                                    send();
                                }
                            }
                        />
                        <button class="btn btn-primary" disabled=move || waiting.get() on:click=move |_| send()>
                            "Gửi"
                        </button>
                    </div>
                </div>
            </Show>
            <button class="chat-toggle" on:click=move |_| set_open.update(|v| *v = !*v)>"💬"</button>
        </div>
    }
}
