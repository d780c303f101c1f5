//! UI Components
//!
//! Reusable Leptos components.

pub mod snackbar;
mod modal;
mod loader;
mod confirm_button;
mod status_badge;
mod action_bar;
mod campaign_form;
mod refuse_modal;
mod note_modal;
mod record_actions;
mod record_rows;
mod drug_request_row;
mod medication_grid;
mod chat_widget;
mod child_selector;

pub use snackbar::Snackbar;
pub use modal::Modal;
pub use loader::{load_view, EmptyState, ErrorPanel, Spinner};
pub use confirm_button::ConfirmButton;
pub use status_badge::CampaignStatusBadge;
pub use action_bar::ActionBar;
pub use campaign_form::CampaignForm;
pub use refuse_modal::RefuseModal;
pub use note_modal::NoteModal;
pub use record_actions::RecordActionButtons;
pub use record_rows::{DiseaseRecordRow, VaccineRecordRow};
pub use drug_request_row::{DrugRequestRow, RequestItemList};
pub use medication_grid::MedicationGrid;
pub use chat_widget::ChatWidget;
pub use child_selector::ChildSelector;
