//! Declaration Endpoints
//!
//! Parent-submitted disease and vaccination records awaiting nurse review.

use crate::error::AppResult;
use crate::models::{DiseaseRecord, VaccinationRecord};
use super::{get, Backend};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeclarationKind {
    Disease,
    Vaccination,
}

impl DeclarationKind {
    pub fn resource(&self) -> &'static str {
        match self {
            DeclarationKind::Disease => "/disease-record",
            DeclarationKind::Vaccination => "/vaccination-record",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            DeclarationKind::Disease => "Khai báo bệnh",
            DeclarationKind::Vaccination => "Khai báo tiêm chủng",
        }
    }
}

pub async fn list_disease_records<B: Backend + ?Sized>(
    backend: &B,
    student_id: Option<&str>,
) -> AppResult<Vec<DiseaseRecord>> {
    get(backend, &scoped_path(DeclarationKind::Disease, student_id)).await
}

pub async fn list_vaccination_records<B: Backend + ?Sized>(
    backend: &B,
    student_id: Option<&str>,
) -> AppResult<Vec<VaccinationRecord>> {
    get(backend, &scoped_path(DeclarationKind::Vaccination, student_id)).await
}

fn scoped_path(kind: DeclarationKind, student_id: Option<&str>) -> String {
    match student_id {
        Some(id) => format!("{}?student_id={}", kind.resource(), super::encode_query(id)),
        None => kind.resource().to_string(),
    }
}
