//! Medication Grid
//!
//! Day × time-slot grid of dose groups. Staff tick a group through the note
//! modal and untick it directly; every other case is rejected up front with
//! a warning toast.

use chrono::{Local, NaiveDate, Utc};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions::DrugRequestStatus;
use crate::components::snackbar::{use_snackbar, SnackbarContext};
use crate::components::NoteModal;
use crate::context::use_app_context;
use crate::medication::{check_toggle, grid_axes, DoseGroup, IntakeSlot};
use crate::workflows::{toggle_group, ToggleContext};

/// # Arguments
/// * `groups` - grouped doses of one request
/// * `request_status` - `None` when the request status is not known
/// * `on_changed` - receives a group after all of its doses were updated
#[component]
pub fn MedicationGrid(
    #[prop(into)] groups: Signal<Vec<DoseGroup>>,
    request_status: Option<DrugRequestStatus>,
    #[prop(into)] on_changed: Callback<DoseGroup>,
) -> impl IntoView {
    let ctx = use_app_context();
    let snackbar = use_snackbar();
    let (pending_tick, set_pending_tick) = signal(None::<DoseGroup>);
    let (busy, set_busy) = signal(false);

    let toggle_ctx = move || ToggleContext {
        role: ctx.role(),
        request_status,
        today: Local::now().date_naive(),
        now: Utc::now().to_rfc3339(),
    };

    let submit = move |group: DoseGroup, target: bool, note: Option<String>| {
        set_busy.set(true);
        let toggle = toggle_ctx();
        spawn_local(async move {
            let api = ctx.api();
            if let Some(updated) = toggle_group(&api, &snackbar, &group, target, note, &toggle).await {
                on_changed.run(updated);
            }
            set_busy.set(false);
        });
    };

    let on_cell = move |group: DoseGroup| {
        if busy.get_untracked() {
            return;
        }
        if group.is_taken {
            submit(group, false, None);
            return;
        }
        let toggle = toggle_ctx();
        match check_toggle(toggle.role, toggle.request_status, &group, true, toggle.today) {
            Ok(()) => set_pending_tick.set(Some(group)),
            Err(rejection) => snackbar.warning(rejection.message()),
        }
    };

    let grid = move || {
        let groups = groups.get();
        if groups.is_empty() {
            return view! { <p class="empty-state">"Chưa có lịch uống thuốc"</p> }.into_any();
        }
        let (dates, slots) = grid_axes(&groups);
        let today = Local::now().date_naive();
        view! {
            <table class="medication-grid">
                <thead>
                    <tr>
                        <th>"Buổi"</th>
                        {dates
                            .iter()
                            .map(|d| {
                                let class = if *d == today { "today" } else { "" };
                                view! { <th class=class>{d.format("%d/%m").to_string()}</th> }
                            })
                            .collect_view()}
                    </tr>
                </thead>
                <tbody>
                    {slots
                        .into_iter()
                        .map(|slot| {
                            let cells = dates
                                .iter()
                                .map(|date| render_cell(find_group(&groups, *date, &slot), on_cell))
                                .collect_view();
                            view! { <tr><th>{slot.label()}</th>{cells}</tr> }
                        })
                        .collect_view()}
                </tbody>
            </table>
        }
        .into_any()
    };

    view! {
        <div class="medication-grid-wrapper">{grid}</div>
        {move || pending_tick.get().map(|group| {
            let title = format!("{} - {}", group.slot.label(), group.date.format("%d/%m/%Y"));
            let on_confirm = {
                let group = group.clone();
                move |note: Option<String>| {
                    set_pending_tick.set(None);
                    submit(group.clone(), true, note);
                }
            };
            view! {
                <NoteModal
                    title=title
                    on_confirm=on_confirm
                    on_close=move |_| set_pending_tick.set(None)
                />
            }
        })}
    }
}

fn find_group(groups: &[DoseGroup], date: NaiveDate, slot: &IntakeSlot) -> Option<DoseGroup> {
    groups.iter().find(|g| g.date == date && &g.slot == slot).cloned()
}

fn render_cell(group: Option<DoseGroup>, on_cell: impl Fn(DoseGroup) + Copy + Send + Sync + 'static) -> AnyView {
    let Some(group) = group else {
        return view! { <td class="dose-cell empty"></td> }.into_any();
    };
    let class = if group.is_taken { "dose-cell taken" } else { "dose-cell" };
    let mark = if group.is_taken { "✓" } else { "○" };
    let medications = group.medications.join(", ");
    let note = group.note.clone();
    let title = medications.clone();
    view! {
        <td class=class title=title on:click=move |_| on_cell(group.clone())>
            <span class="dose-mark">{mark}</span>
            <span class="dose-names">{medications}</span>
            {note.map(|n| view! { <span class="dose-note">{n}</span> })}
        </td>
    }
    .into_any()
}
