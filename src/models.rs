//! Frontend Models
//!
//! Data structures matching backend entities. Shapes are owned by the
//! backend, so every optional field defaults and unknown fields are ignored.

use serde::{Deserialize, Serialize};

/// Display fallback for fields the backend left empty
pub const UNKNOWN_TEXT: &str = "Chưa xác định";

/// Portal roles. Anything else is treated as an unprivileged viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Nurse,
    Parent,
}

impl Role {
    pub fn parse(s: &str) -> Option<Role> {
        match s.trim().to_lowercase().as_str() {
            "admin" => Some(Role::Admin),
            "nurse" => Some(Role::Nurse),
            "parent" => Some(Role::Parent),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Nurse => "nurse",
            Role::Parent => "parent",
        }
    }

    /// Admin and nurse may mutate records
    pub fn is_staff(&self) -> bool {
        matches!(self, Role::Admin | Role::Nurse)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::Admin => "Quản trị viên",
            Role::Nurse => "Y tá",
            Role::Parent => "Phụ huynh",
        }
    }
}

// ========================
// Users
// ========================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppMetadata {
    #[serde(default)]
    pub role: String,
}

/// Logged-in user as stored under `localStorage["user"]`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub profile_img_url: Option<String>,
    #[serde(default)]
    pub home_id: Option<u32>,
    #[serde(default)]
    pub app_metadata: AppMetadata,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
}

impl SessionUser {
    pub fn role(&self) -> Option<Role> {
        Role::parse(&self.app_metadata.role)
    }

    pub fn display_name(&self) -> String {
        self.name
            .clone()
            .or_else(|| self.email.clone())
            .unwrap_or_else(|| UNKNOWN_TEXT.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub dob: Option<String>,
    #[serde(default)]
    pub class_name: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub profile_img_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Home {
    pub id: u32,
    #[serde(default)]
    pub mom_id: Option<String>,
    #[serde(default)]
    pub dad_id: Option<String>,
    #[serde(default)]
    pub student_ids: Vec<String>,
    #[serde(default)]
    pub contact_phone_number: Option<String>,
    #[serde(default)]
    pub contact_email: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

// ========================
// Campaigns
// ========================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecialistExam {
    pub id: u32,
    pub name: String,
}

/// Checkup or vaccination campaign
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Campaign {
    pub id: u32,
    #[serde(alias = "title")]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub specialist_exams: Vec<SpecialistExam>,
    #[serde(default)]
    pub vaccine_id: Option<u32>,
    #[serde(default)]
    pub vaccine_name: Option<String>,
    #[serde(default)]
    pub disease_name: Option<String>,
}

/// Body for campaign create/update
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CampaignPayload {
    pub name: String,
    pub description: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vaccine_id: Option<u32>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub specialist_exam_ids: Vec<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampaignRegistration {
    pub id: u32,
    pub student_id: String,
    #[serde(default)]
    pub student_name: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub reason: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampaignReportRow {
    pub id: u32,
    pub student_id: String,
    #[serde(default)]
    pub student_name: Option<String>,
    #[serde(default)]
    pub result: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportUpdate {
    pub result: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vaccine {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub disease_name: Option<String>,
}

// ========================
// Drug requests & medication
// ========================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestItem {
    pub name: String,
    #[serde(default)]
    pub dosage_usage: Option<String>,
    #[serde(default)]
    pub intake_template_time: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrugRequest {
    pub id: u32,
    pub student_id: String,
    #[serde(default)]
    pub student_name: Option<String>,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub reason_by_nurse: Option<String>,
    #[serde(default)]
    pub request_items: Vec<RequestItem>,
    #[serde(default)]
    pub schedule_send_date: Option<String>,
    #[serde(default)]
    pub start_intake_date: Option<String>,
    #[serde(default)]
    pub end_intake_date: Option<String>,
    #[serde(default)]
    pub prescription_img_urls: Vec<String>,
}

/// One scheduled intake of one medication
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MedicationDose {
    pub id: u32,
    #[serde(default)]
    pub send_drug_request_id: Option<u32>,
    #[serde(default)]
    pub student_name: Option<String>,
    #[serde(default)]
    pub medication_name: Option<String>,
    pub intake_date: String,
    pub intake_template_time: String,
    #[serde(default)]
    pub is_taken: bool,
    #[serde(default)]
    pub intake_time: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TickPayload {
    pub intake_time: String,
    pub note: Option<String>,
}

// ========================
// Declarations
// ========================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiseaseRecord {
    pub id: u32,
    pub student_id: String,
    #[serde(default)]
    pub student_name: Option<String>,
    #[serde(default)]
    pub disease_name: Option<String>,
    #[serde(default)]
    pub diagnosis: Option<String>,
    #[serde(default)]
    pub detect_date: Option<String>,
    #[serde(default)]
    pub cure_date: Option<String>,
    #[serde(default)]
    pub location_cure: Option<String>,
    #[serde(default)]
    pub pending: String,
    #[serde(default)]
    pub reason_by_nurse: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VaccinationRecord {
    pub id: u32,
    pub student_id: String,
    #[serde(default)]
    pub student_name: Option<String>,
    #[serde(default)]
    pub vaccine_name: Option<String>,
    #[serde(default)]
    pub disease_name: Option<String>,
    #[serde(default)]
    pub vaccination_date: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub pending: String,
    #[serde(default)]
    pub reason_by_nurse: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RefusePayload {
    pub reason_by_nurse: String,
}

// ========================
// Content & chat
// ========================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// One turn of the AI chat, persisted as `{text, isUser, isApiResponse}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatTurn {
    pub text: String,
    pub is_user: bool,
    #[serde(default)]
    pub is_api_response: bool,
}

impl ChatTurn {
    pub fn user(text: impl Into<String>) -> Self {
        Self { text: text.into(), is_user: true, is_api_response: false }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self { text: text.into(), is_user: false, is_api_response: true }
    }
}

/// Fill an empty optional field with the display fallback
pub fn or_unknown(value: &Option<String>) -> String {
    match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => UNKNOWN_TEXT.to_string(),
    }
}
