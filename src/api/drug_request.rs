//! Drug Request Endpoints

use crate::error::AppResult;
use crate::models::DrugRequest;
use super::{get, Backend};

pub const DRUG_REQUEST_RESOURCE: &str = "/send-drug-request";

pub async fn list_drug_requests<B: Backend + ?Sized>(
    backend: &B,
    student_id: Option<&str>,
) -> AppResult<Vec<DrugRequest>> {
    let path = match student_id {
        Some(id) => format!("{}?student_id={}", DRUG_REQUEST_RESOURCE, super::encode_query(id)),
        None => DRUG_REQUEST_RESOURCE.to_string(),
    };
    get(backend, &path).await
}

pub async fn get_drug_request<B: Backend + ?Sized>(backend: &B, id: u32) -> AppResult<DrugRequest> {
    get(backend, &format!("{}/{}", DRUG_REQUEST_RESOURCE, id)).await
}
