//! Medication Schedule Endpoints

use serde_json::Value;

use crate::error::AppResult;
use crate::models::{MedicationDose, TickPayload};
use super::{execute, get, Backend, HttpMethod, DRUG_REQUEST_RESOURCE};

pub async fn list_schedule<B: Backend + ?Sized>(backend: &B, request_id: u32) -> AppResult<Vec<MedicationDose>> {
    get(backend, &format!("{}/{}/medication-schedule", DRUG_REQUEST_RESOURCE, request_id)).await
}

pub async fn list_today_schedule<B: Backend + ?Sized>(backend: &B) -> AppResult<Vec<MedicationDose>> {
    get(backend, "/medication-schedule/today").await
}

pub async fn tick_dose<B: Backend + ?Sized>(backend: &B, dose_id: u32, payload: &TickPayload) -> AppResult<()> {
    let body: Value = serde_json::to_value(payload)?;
    execute(backend, HttpMethod::Patch, &format!("/medication-schedule/{}/tick", dose_id), Some(body)).await
}

pub async fn untick_dose<B: Backend + ?Sized>(backend: &B, dose_id: u32) -> AppResult<()> {
    execute(backend, HttpMethod::Patch, &format!("/medication-schedule/{}/untick", dose_id), None).await
}
