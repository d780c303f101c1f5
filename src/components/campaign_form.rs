//! Campaign Form
//!
//! Create/edit modal for checkup and vaccination campaigns. Validation
//! failures and backend errors keep the modal open.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions::CampaignKind;
use crate::api::{list_specialist_exams, list_vaccines};
use crate::components::snackbar::use_snackbar;
use crate::components::Modal;
use crate::context::use_app_context;
use crate::models::{Campaign, SpecialistExam, Vaccine};
use crate::validation::CampaignDraft;
use crate::workflows::submit_campaign;

/// # Arguments
/// * `editing` - campaign to edit, `None` to create a new one
#[component]
pub fn CampaignForm(kind: CampaignKind, editing: Option<Campaign>, #[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let ctx = use_app_context();
    let snackbar = use_snackbar();
    let editing_id = editing.as_ref().map(|c| c.id);
    let draft = RwSignal::new(editing.as_ref().map(CampaignDraft::from_campaign).unwrap_or_default());
    let (saving, set_saving) = signal(false);
    let (vaccines, set_vaccines) = signal(Vec::<Vaccine>::new());
    let (exams, set_exams) = signal(Vec::<SpecialistExam>::new());

    match kind {
        CampaignKind::Vaccination => spawn_local(async move {
            match list_vaccines(&ctx.api()).await {
                Ok(list) => set_vaccines.set(list),
                Err(e) => log::error!("loading vaccines failed: {}", e),
            }
        }),
        CampaignKind::Checkup => spawn_local(async move {
            match list_specialist_exams(&ctx.api()).await {
                Ok(list) => set_exams.set(list),
                Err(e) => log::error!("loading specialist exams failed: {}", e),
            }
        }),
    }

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() {
            return;
        }
        set_saving.set(true);
        let current = draft.get_untracked();
        spawn_local(async move {
            let result = submit_campaign(&ctx.api(), &snackbar, kind, editing_id, &current).await;
            set_saving.set(false);
            if result.is_ok() {
                ctx.reload();
                on_close.run(());
            }
        });
    };

    let title = match (kind, editing_id) {
        (CampaignKind::Checkup, None) => "Tạo chiến dịch khám sức khỏe",
        (CampaignKind::Checkup, Some(_)) => "Chỉnh sửa chiến dịch khám sức khỏe",
        (CampaignKind::Vaccination, None) => "Tạo chiến dịch tiêm chủng",
        (CampaignKind::Vaccination, Some(_)) => "Chỉnh sửa chiến dịch tiêm chủng",
    };

    view! {
        <Modal title=title on_close=on_close>
            <form class="campaign-form" on:submit=on_submit>
                <label>"Tên chiến dịch"</label>
                <input
                    type="text"
                    class="form-control"
                    prop:value=move || draft.with(|d| d.name.clone())
                    on:input=move |ev| draft.update(|d| d.name = event_target_value(&ev))
                />
                <label>"Mô tả"</label>
                <textarea
                    class="form-control"
                    rows="3"
                    prop:value=move || draft.with(|d| d.description.clone())
                    on:input=move |ev| draft.update(|d| d.description = event_target_value(&ev))
                />
                <label>"Địa điểm"</label>
                <input
                    type="text"
                    class="form-control"
                    prop:value=move || draft.with(|d| d.location.clone())
                    on:input=move |ev| draft.update(|d| d.location = event_target_value(&ev))
                />
                <div class="form-row">
                    <div>
                        <label>"Ngày bắt đầu"</label>
                        <input
                            type="date"
                            class="form-control"
                            prop:value=move || draft.with(|d| d.start_date.clone())
                            on:input=move |ev| draft.update(|d| d.start_date = event_target_value(&ev))
                        />
                    </div>
                    <div>
                        <label>"Ngày kết thúc"</label>
                        <input
                            type="date"
                            class="form-control"
                            prop:value=move || draft.with(|d| d.end_date.clone())
                            on:input=move |ev| draft.update(|d| d.end_date = event_target_value(&ev))
                        />
                    </div>
                </div>
                {(kind == CampaignKind::Vaccination).then(|| view! {
                    <label>"Vắc xin"</label>
                    <select
                        class="form-control"
                        on:change=move |ev| draft.update(|d| d.vaccine_id = event_target_value(&ev).parse().ok())
                    >
                        <option value="">"-- Chọn vắc xin --"</option>
                        <For
                            each=move || vaccines.get()
                            key=|v| v.id
                            children=move |v: Vaccine| {
                                let id = v.id;
                                let selected = move || draft.with(|d| d.vaccine_id == Some(id));
                                let label = match &v.disease_name {
                                    Some(disease) => format!("{} ({})", v.name, disease),
                                    None => v.name.clone(),
                                };
                                view! { <option value=id.to_string() selected=selected>{label}</option> }
                            }
                        />
                    </select>
                })}
                {(kind == CampaignKind::Checkup).then(|| view! {
                    <label>"Chuyên khoa"</label>
                    <div class="exam-picker">
                        <For
                            each=move || exams.get()
                            key=|e| e.id
                            children=move |exam: SpecialistExam| {
                                let id = exam.id;
                                let checked = move || draft.with(|d| d.specialist_exam_ids.contains(&id));
                                view! {
                                    <label class="exam-option">
                                        <input
                                            type="checkbox"
                                            prop:checked=checked
                                            on:change=move |ev| {
                                                let on = event_target_checked(&ev);
                                                draft.update(|d| d.toggle_exam(id, on));
                                            }
                                        />
                                        {exam.name}
                                    </label>
                                }
                            }
                        />
                    </div>
                })}
                <div class="modal-footer">
                    <button type="button" class="btn btn-secondary" on:click=move |_| on_close.run(())>"Hủy"</button>
                    <button type="submit" class="btn btn-primary" disabled=move || saving.get()>
                        {move || if saving.get() { "Đang lưu..." } else { "Lưu" }}
                    </button>
                </div>
            </form>
        </Modal>
    }
}
