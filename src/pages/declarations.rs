use leptos::prelude::*;

use crate::api::{list_disease_records, list_vaccination_records, DeclarationKind};
use crate::components::{load_view, DiseaseRecordRow, EmptyState, VaccineRecordRow};
use crate::context::{use_app_context, use_fetch, RecordScope};
use crate::models::{DiseaseRecord, VaccinationRecord};

/// Disease or vaccination declarations awaiting review
#[component]
pub fn DeclarationsPage(kind: DeclarationKind) -> impl IntoView {
    let body = match kind {
        DeclarationKind::Disease => view! { <DiseaseDeclarations /> }.into_any(),
        DeclarationKind::Vaccination => view! { <VaccinationDeclarations /> }.into_any(),
    };
    view! {
        <div class="page-header">
            <h2>{kind.title()}</h2>
            <nav class="tabs">
                <a href="/disease-declarations" class:active={kind == DeclarationKind::Disease}>"Bệnh"</a>
                <a href="/vaccination-declarations" class:active={kind == DeclarationKind::Vaccination}>"Tiêm chủng"</a>
            </nav>
        </div>
        {body}
    }
}

#[component]
fn DiseaseDeclarations() -> impl IntoView {
    let ctx = use_app_context();
    let (records, retry) = use_fetch("Không thể tải khai báo bệnh", move |api| {
        let scope = ctx.record_scope();
        async move {
            match scope {
                RecordScope::Nothing => Ok(Vec::new()),
                scope => list_disease_records(&api, scope.student_id()).await,
            }
        }
    });
    let on_update = Callback::new(move |_| ctx.reload());

    let table = move |list: Vec<DiseaseRecord>| {
        if list.is_empty() {
            return view! { <EmptyState message="Chưa có khai báo nào" /> }.into_any();
        }
        view! {
            <table class="table">
                <thead>
                    <tr>
                        <th>"Học sinh"</th>
                        <th>"Bệnh"</th>
                        <th>"Ngày phát hiện"</th>
                        <th>"Trạng thái"</th>
                        <th>"Thao tác"</th>
                    </tr>
                </thead>
                <tbody>
                    {list
                        .into_iter()
                        .map(|record| view! { <DiseaseRecordRow record=record on_update=on_update /> })
                        .collect_view()}
                </tbody>
            </table>
        }
        .into_any()
    };

    move || load_view(records.get(), retry, table)
}

#[component]
fn VaccinationDeclarations() -> impl IntoView {
    let ctx = use_app_context();
    let (records, retry) = use_fetch("Không thể tải khai báo tiêm chủng", move |api| {
        let scope = ctx.record_scope();
        async move {
            match scope {
                RecordScope::Nothing => Ok(Vec::new()),
                scope => list_vaccination_records(&api, scope.student_id()).await,
            }
        }
    });
    let on_update = Callback::new(move |_| ctx.reload());

    let table = move |list: Vec<VaccinationRecord>| {
        if list.is_empty() {
            return view! { <EmptyState message="Chưa có khai báo nào" /> }.into_any();
        }
        view! {
            <table class="table">
                <thead>
                    <tr>
                        <th>"Học sinh"</th>
                        <th>"Vắc xin"</th>
                        <th>"Ngày tiêm"</th>
                        <th>"Trạng thái"</th>
                        <th>"Thao tác"</th>
                    </tr>
                </thead>
                <tbody>
                    {list
                        .into_iter()
                        .map(|record| view! { <VaccineRecordRow record=record on_update=on_update /> })
                        .collect_view()}
                </tbody>
            </table>
        }
        .into_any()
    };

    move || load_view(records.get(), retry, table)
}
