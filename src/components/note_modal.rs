use leptos::prelude::*;

use crate::components::Modal;

/// Optional note attached when marking a dose group as taken
#[component]
pub fn NoteModal(
    #[prop(into)] title: String,
    #[prop(into)] on_confirm: Callback<Option<String>>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let (note, set_note) = signal(String::new());

    view! {
        <Modal title=title on_close=on_close>
            <label class="form-label">"Ghi chú (không bắt buộc)"</label>
            <textarea
                class="form-control"
                rows="3"
                prop:value=move || note.get()
                on:input=move |ev| set_note.set(event_target_value(&ev))
            />
            <div class="modal-footer">
                <button class="btn btn-secondary" on:click=move |_| on_close.run(())>"Hủy"</button>
                <button
                    class="btn btn-success"
                    on:click=move |_| {
                        let value = note.get_untracked();
                        let value = (!value.trim().is_empty()).then_some(value);
                        on_confirm.run(value);
                    }
                >
                    "Xác nhận đã uống"
                </button>
            </div>
        </Modal>
    }
}
