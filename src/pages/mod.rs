//! Routed pages

mod login;
mod dashboard;
mod campaigns;
mod campaign_detail;
mod campaign_records;
mod drug_requests;
mod drug_request_detail;
mod medication_today;
mod declarations;
mod blog;
mod profile;

pub use login::LoginPage;
pub use dashboard::DashboardPage;
pub use campaigns::CampaignListPage;
pub use campaign_detail::CampaignDetailPage;
pub use campaign_records::{RegistrationsPage, ReportPage};
pub use drug_requests::DrugRequestsPage;
pub use drug_request_detail::DrugRequestDetailPage;
pub use medication_today::MedicationTodayPage;
pub use declarations::DeclarationsPage;
pub use blog::{BlogDetailPage, BlogListPage};
pub use profile::ProfilePage;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

/// Numeric `:id` route parameter, tracked
pub(crate) fn use_id_param() -> impl Fn() -> Option<u32> + Copy + Send + Sync + 'static {
    let params = use_params_map();
    move || params.with(|p| p.get("id").and_then(|id| id.parse::<u32>().ok()))
}

pub(crate) fn invalid_id() -> crate::error::AppError {
    crate::error::AppError::Validation("Đường dẫn không hợp lệ".into())
}
