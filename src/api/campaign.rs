//! Campaign Endpoints
//!
//! Checkup and vaccination campaigns share one shape; `CampaignKind`
//! picks the resource path.

use crate::actions::{CampaignAction, CampaignKind};
use crate::error::{AppError, AppResult};
use crate::models::{Campaign, CampaignPayload, CampaignRegistration, CampaignReportRow, ReportUpdate, SpecialistExam, Vaccine};
use super::{execute, get, send, Backend, HttpMethod};

pub async fn list_campaigns<B: Backend + ?Sized>(backend: &B, kind: CampaignKind) -> AppResult<Vec<Campaign>> {
    get(backend, kind.resource()).await
}

pub async fn get_campaign<B: Backend + ?Sized>(backend: &B, kind: CampaignKind, id: u32) -> AppResult<Campaign> {
    get(backend, &format!("{}/{}", kind.resource(), id)).await
}

pub async fn create_campaign<B: Backend + ?Sized>(
    backend: &B,
    kind: CampaignKind,
    payload: &CampaignPayload,
) -> AppResult<()> {
    let body = serde_json::to_value(payload)?;
    execute(backend, HttpMethod::Post, kind.resource(), Some(body)).await
}

pub async fn update_campaign<B: Backend + ?Sized>(
    backend: &B,
    kind: CampaignKind,
    id: u32,
    payload: &CampaignPayload,
) -> AppResult<()> {
    let body = serde_json::to_value(payload)?;
    execute(backend, HttpMethod::Put, &format!("{}/{}", kind.resource(), id), Some(body)).await
}

/// Fire a state-changing campaign action (send-register, cancel, start, ...)
pub async fn run_campaign_action<B: Backend + ?Sized>(
    backend: &B,
    kind: CampaignKind,
    id: u32,
    action: CampaignAction,
) -> AppResult<()> {
    let (method, path) = action
        .http(kind, id)
        .ok_or_else(|| AppError::Validation(format!("{} không gửi yêu cầu đến máy chủ", action.label())))?;
    execute(backend, method, &path, None).await
}

pub async fn list_registrations<B: Backend + ?Sized>(
    backend: &B,
    kind: CampaignKind,
    id: u32,
) -> AppResult<Vec<CampaignRegistration>> {
    get(backend, &format!("{}/{}/registrations", kind.resource(), id)).await
}

pub async fn list_report<B: Backend + ?Sized>(
    backend: &B,
    kind: CampaignKind,
    id: u32,
) -> AppResult<Vec<CampaignReportRow>> {
    get(backend, &format!("{}/{}/report", kind.resource(), id)).await
}

pub async fn update_report_row<B: Backend + ?Sized>(
    backend: &B,
    kind: CampaignKind,
    campaign_id: u32,
    row_id: u32,
    update: &ReportUpdate,
) -> AppResult<CampaignReportRow> {
    send(
        backend,
        HttpMethod::Put,
        &format!("{}/{}/report/{}", kind.resource(), campaign_id, row_id),
        update,
    )
    .await
}

pub async fn list_vaccines<B: Backend + ?Sized>(backend: &B) -> AppResult<Vec<Vaccine>> {
    get(backend, "/vaccine").await
}

/// Exams a checkup campaign can include
pub async fn list_specialist_exams<B: Backend + ?Sized>(backend: &B) -> AppResult<Vec<SpecialistExam>> {
    get(backend, "/special-exam").await
}
