use leptos::prelude::*;

use crate::components::Modal;
use crate::validation::MSG_REFUSE_REASON_REQUIRED;

/// Collects the nurse's refusal reason. An empty reason raises a browser
/// alert and never reaches `on_confirm`.
#[component]
pub fn RefuseModal(
    #[prop(into)] busy: Signal<bool>,
    #[prop(into)] on_confirm: Callback<String>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let (reason, set_reason) = signal(String::new());

    let submit = move |_| {
        let value = reason.get_untracked();
        if value.trim().is_empty() {
            let _ = window().alert_with_message(MSG_REFUSE_REASON_REQUIRED);
            return;
        }
        on_confirm.run(value.trim().to_string());
    };

    view! {
        <Modal title="Lý do từ chối" on_close=on_close>
            <textarea
                class="form-control"
                rows="4"
                placeholder="Nhập lý do từ chối..."
                prop:value=move || reason.get()
                on:input=move |ev| set_reason.set(event_target_value(&ev))
            />
            <div class="modal-footer">
                <button class="btn btn-secondary" on:click=move |_| on_close.run(())>"Đóng"</button>
                <button class="btn btn-danger" disabled=move || busy.get() on:click=submit>
                    {move || if busy.get() { "Đang gửi..." } else { "Xác nhận từ chối" }}
                </button>
            </div>
        </Modal>
    }
}
