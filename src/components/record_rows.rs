//! Declaration Rows
//!
//! Expandable table rows for parent-submitted disease and vaccination
//! declarations.

use leptos::prelude::*;

use crate::actions::{declaration_actions, DeclarationStatus};
use crate::api::DeclarationKind;
use crate::campaign_utils::format_date;
use crate::components::RecordActionButtons;
use crate::context::use_app_context;
use crate::models::{or_unknown, DiseaseRecord, VaccinationRecord};

/// Header cells, the detail panel and status shared by both declaration kinds
struct RowParts {
    id: u32,
    status: DeclarationStatus,
    cells: Vec<String>,
    details: Vec<(&'static str, String)>,
    reason_by_nurse: Option<String>,
}

#[component]
pub fn DiseaseRecordRow(record: DiseaseRecord, #[prop(into)] on_update: Callback<()>) -> impl IntoView {
    let parts = RowParts {
        id: record.id,
        status: DeclarationStatus::parse(&record.pending),
        cells: vec![
            or_unknown(&record.student_name),
            or_unknown(&record.disease_name),
            format_date(&record.detect_date),
        ],
        details: vec![
            ("Chẩn đoán", or_unknown(&record.diagnosis)),
            ("Ngày phát hiện", format_date(&record.detect_date)),
            ("Ngày khỏi bệnh", format_date(&record.cure_date)),
            ("Nơi điều trị", or_unknown(&record.location_cure)),
        ],
        reason_by_nurse: record.reason_by_nurse,
    };
    view! { <DeclarationRow kind=DeclarationKind::Disease parts=parts on_update=on_update /> }
}

#[component]
pub fn VaccineRecordRow(record: VaccinationRecord, #[prop(into)] on_update: Callback<()>) -> impl IntoView {
    let parts = RowParts {
        id: record.id,
        status: DeclarationStatus::parse(&record.pending),
        cells: vec![
            or_unknown(&record.student_name),
            or_unknown(&record.vaccine_name),
            format_date(&record.vaccination_date),
        ],
        details: vec![
            ("Phòng bệnh", or_unknown(&record.disease_name)),
            ("Ngày tiêm", format_date(&record.vaccination_date)),
            ("Địa điểm", or_unknown(&record.location)),
        ],
        reason_by_nurse: record.reason_by_nurse,
    };
    view! { <DeclarationRow kind=DeclarationKind::Vaccination parts=parts on_update=on_update /> }
}

#[component]
fn DeclarationRow(kind: DeclarationKind, parts: RowParts, on_update: Callback<()>) -> impl IntoView {
    let ctx = use_app_context();
    let (expanded, set_expanded) = signal(false);
    let (row_error, set_row_error) = signal(None::<String>);
    let RowParts { id, status, cells, details, reason_by_nurse } = parts;
    let column_count = cells.len() + 2;

    view! {
        <tr class="record-row" on:click=move |_| set_expanded.update(|v| *v = !*v)>
            {cells.into_iter().map(|c| view! { <td>{c}</td> }).collect_view()}
            <td><span class=status.badge_class()>{status.label()}</span></td>
            <td>
                {move || view! {
                    <RecordActionButtons
                        resource=kind.resource()
                        id=id
                        actions=declaration_actions(ctx.role(), status)
                        on_update=on_update
                        set_error=set_row_error
                    />
                }}
            </td>
        </tr>
        {move || row_error.get().map(|e| view! {
            <tr class="row-error"><td colspan=column_count>{e}</td></tr>
        })}
        <Show when=move || expanded.get()>
            <tr class="record-details">
                <td colspan=column_count>
                    <dl>
                        {details
                            .iter()
                            .map(|(label, value)| view! { <dt>{*label}</dt><dd>{value.clone()}</dd> })
                            .collect_view()}
                        {reason_by_nurse.clone().map(|r| view! { <dt>"Lý do từ chối"</dt><dd>{r}</dd> })}
                    </dl>
                </td>
            </tr>
        </Show>
    }
}
