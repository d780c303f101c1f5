//! Status-to-Action Mapping
//!
//! Decides which buttons a row or detail view shows, in which order, and
//! what each one does. Campaign actions come from a single table keyed by
//! `(role, status)`; record rows use the smaller matches below it.

use crate::api::HttpMethod;
use crate::campaign_utils::CampaignStatus;
use crate::models::Role;

// ========================
// Campaigns
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CampaignKind {
    Checkup,
    Vaccination,
}

impl CampaignKind {
    /// Backend resource path
    pub fn resource(&self) -> &'static str {
        match self {
            CampaignKind::Checkup => "/checkup-campaign",
            CampaignKind::Vaccination => "/vaccination-campaign",
        }
    }

    /// Frontend route prefix
    pub fn route(&self) -> &'static str {
        match self {
            CampaignKind::Checkup => "/checkup-campaigns",
            CampaignKind::Vaccination => "/vaccination-campaigns",
        }
    }

    /// Checkup campaigns `finish`, vaccination campaigns `complete`
    pub fn finish_segment(&self) -> &'static str {
        match self {
            CampaignKind::Checkup => "finish",
            CampaignKind::Vaccination => "complete",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            CampaignKind::Checkup => "Khám sức khỏe định kỳ",
            CampaignKind::Vaccination => "Chiến dịch tiêm chủng",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CampaignAction {
    ViewDetails,
    SendRegister,
    Edit,
    Cancel,
    CloseRegister,
    ViewRegisterList,
    Start,
    Finish,
    ViewReport,
    EditReport,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonStyle {
    Primary,
    Secondary,
    Success,
    Warning,
    Danger,
    Info,
}

impl ButtonStyle {
    pub fn class(&self) -> &'static str {
        match self {
            ButtonStyle::Primary => "btn btn-primary",
            ButtonStyle::Secondary => "btn btn-secondary",
            ButtonStyle::Success => "btn btn-success",
            ButtonStyle::Warning => "btn btn-warning",
            ButtonStyle::Danger => "btn btn-danger",
            ButtonStyle::Info => "btn btn-info",
        }
    }
}

impl CampaignAction {
    pub fn label(&self) -> &'static str {
        match self {
            CampaignAction::ViewDetails => "Xem chi tiết",
            CampaignAction::SendRegister => "Gửi đơn",
            CampaignAction::Edit => "Chỉnh sửa",
            CampaignAction::Cancel => "Hủy chiến dịch",
            CampaignAction::CloseRegister => "Đóng đăng ký",
            CampaignAction::ViewRegisterList => "Xem danh sách đăng ký",
            CampaignAction::Start => "Bắt đầu",
            CampaignAction::Finish => "Hoàn thành",
            CampaignAction::ViewReport => "Xem báo cáo",
            CampaignAction::EditReport => "Cập nhật kết quả",
        }
    }

    pub fn style(&self) -> ButtonStyle {
        match self {
            CampaignAction::ViewDetails => ButtonStyle::Secondary,
            CampaignAction::SendRegister | CampaignAction::Start => ButtonStyle::Primary,
            CampaignAction::Edit | CampaignAction::EditReport => ButtonStyle::Warning,
            CampaignAction::Cancel => ButtonStyle::Danger,
            CampaignAction::CloseRegister => ButtonStyle::Warning,
            CampaignAction::Finish => ButtonStyle::Success,
            CampaignAction::ViewRegisterList | CampaignAction::ViewReport => ButtonStyle::Info,
        }
    }

    /// Actions that change campaign state on the backend
    pub fn is_mutating(&self) -> bool {
        matches!(
            self,
            CampaignAction::SendRegister
                | CampaignAction::Cancel
                | CampaignAction::CloseRegister
                | CampaignAction::Start
                | CampaignAction::Finish
        )
    }

    /// Method and path for mutating actions
    pub fn http(&self, kind: CampaignKind, id: u32) -> Option<(HttpMethod, String)> {
        let base = format!("{}/{}", kind.resource(), id);
        match self {
            CampaignAction::SendRegister => Some((HttpMethod::Post, format!("{}/send-register", base))),
            CampaignAction::Cancel => Some((HttpMethod::Patch, format!("{}/cancel", base))),
            CampaignAction::CloseRegister => Some((HttpMethod::Patch, format!("{}/close-register", base))),
            CampaignAction::Start => Some((HttpMethod::Patch, format!("{}/start", base))),
            CampaignAction::Finish => Some((HttpMethod::Patch, format!("{}/{}", base, kind.finish_segment()))),
            _ => None,
        }
    }

    /// In-app route for navigation actions. `Edit` opens a modal instead.
    pub fn navigate_to(&self, kind: CampaignKind, id: u32) -> Option<String> {
        let base = format!("{}/{}", kind.route(), id);
        match self {
            CampaignAction::ViewDetails => Some(base),
            CampaignAction::ViewRegisterList => Some(format!("{}/registrations", base)),
            CampaignAction::ViewReport => Some(format!("{}/report", base)),
            CampaignAction::EditReport => Some(format!("{}/report/edit", base)),
            _ => None,
        }
    }

    /// Status the detail view shows right after the action succeeds
    pub fn optimistic_status(&self) -> Option<CampaignStatus> {
        match self {
            CampaignAction::SendRegister => Some(CampaignStatus::Preparing),
            CampaignAction::CloseRegister => Some(CampaignStatus::Upcoming),
            CampaignAction::Start => Some(CampaignStatus::Ongoing),
            CampaignAction::Finish => Some(CampaignStatus::Done),
            CampaignAction::Cancel => Some(CampaignStatus::Cancelled),
            _ => None,
        }
    }

    pub fn success_message(&self) -> &'static str {
        match self {
            CampaignAction::SendRegister => "Đã gửi đơn đăng ký đến phụ huynh",
            CampaignAction::Cancel => "Đã hủy chiến dịch",
            CampaignAction::CloseRegister => "Đã đóng đăng ký",
            CampaignAction::Start => "Chiến dịch đã bắt đầu",
            CampaignAction::Finish => "Chiến dịch đã hoàn thành",
            _ => "Thao tác thành công",
        }
    }

    pub fn failure_message(&self) -> &'static str {
        match self {
            CampaignAction::SendRegister => "Không thể gửi đơn đăng ký",
            CampaignAction::Cancel => "Không thể hủy chiến dịch",
            CampaignAction::CloseRegister => "Không thể đóng đăng ký",
            CampaignAction::Start => "Không thể bắt đầu chiến dịch",
            CampaignAction::Finish => "Không thể hoàn thành chiến dịch",
            _ => "Có lỗi xảy ra, vui lòng thử lại",
        }
    }
}

/// A rendered button
#[derive(Debug, Clone, PartialEq)]
pub struct ActionDescriptor {
    pub action: CampaignAction,
    pub label: &'static str,
    pub style: ButtonStyle,
    pub disabled: bool,
    pub http: Option<(HttpMethod, String)>,
    pub navigate_to: Option<String>,
}

use CampaignAction as A;
use CampaignStatus as S;

/// `(role, status) -> actions`, excluding the always-present "view details"
const CAMPAIGN_ACTION_TABLE: &[(Role, S, &[CampaignAction])] = &[
    (Role::Admin, S::Drafted, &[A::SendRegister, A::Edit, A::Cancel]),
    (Role::Admin, S::Preparing, &[A::CloseRegister, A::ViewRegisterList, A::Cancel]),
    (Role::Admin, S::Upcoming, &[A::Start, A::ViewRegisterList, A::Cancel]),
    (Role::Admin, S::Ongoing, &[A::Finish, A::ViewRegisterList]),
    (Role::Admin, S::Done, &[A::ViewReport, A::ViewRegisterList]),
    (Role::Admin, S::Cancelled, &[A::ViewRegisterList]),
    (Role::Nurse, S::Preparing, &[A::ViewRegisterList]),
    (Role::Nurse, S::Upcoming, &[A::ViewRegisterList]),
    (Role::Nurse, S::Ongoing, &[A::ViewRegisterList, A::EditReport]),
    (Role::Nurse, S::Done, &[A::ViewReport, A::ViewRegisterList]),
];

fn table_lookup(role: Option<Role>, status: CampaignStatus) -> &'static [CampaignAction] {
    let Some(role) = role else { return &[] };
    CAMPAIGN_ACTION_TABLE
        .iter()
        .find(|(r, s, _)| *r == role && *s == status)
        .map(|(_, _, actions)| *actions)
        .unwrap_or(&[])
}

/// Ordered buttons for a campaign. `loading` disables the mutating ones
/// while a request for this campaign is in flight.
pub fn campaign_actions(
    kind: CampaignKind,
    role: Option<Role>,
    campaign_id: u32,
    status: CampaignStatus,
    loading: bool,
) -> Vec<ActionDescriptor> {
    std::iter::once(A::ViewDetails)
        .chain(table_lookup(role, status).iter().copied())
        .map(|action| ActionDescriptor {
            action,
            label: action.label(),
            style: action.style(),
            disabled: loading && action.is_mutating(),
            http: action.http(kind, campaign_id),
            navigate_to: action.navigate_to(kind, campaign_id),
        })
        .collect()
}

// ========================
// Records
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DrugRequestStatus {
    Processing,
    Accepted,
    Refused,
    Done,
    Cancelled,
    Received,
    Unknown,
}

impl DrugRequestStatus {
    pub fn parse(s: &str) -> Self {
        match s.trim().to_uppercase().as_str() {
            "PROCESSING" => DrugRequestStatus::Processing,
            "ACCEPTED" => DrugRequestStatus::Accepted,
            "REFUSED" => DrugRequestStatus::Refused,
            "DONE" => DrugRequestStatus::Done,
            "CANCELLED" | "CANCELED" => DrugRequestStatus::Cancelled,
            "RECEIVED" => DrugRequestStatus::Received,
            _ => DrugRequestStatus::Unknown,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DrugRequestStatus::Processing => "Chờ duyệt",
            DrugRequestStatus::Accepted => "Đã duyệt",
            DrugRequestStatus::Refused => "Đã từ chối",
            DrugRequestStatus::Done => "Đã hoàn thành",
            DrugRequestStatus::Cancelled => "Đã hủy",
            DrugRequestStatus::Received => "Đã nhận thuốc",
            DrugRequestStatus::Unknown => "Không xác định",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            DrugRequestStatus::Processing => "badge badge-warning",
            DrugRequestStatus::Accepted | DrugRequestStatus::Received => "badge badge-info",
            DrugRequestStatus::Done => "badge badge-success",
            DrugRequestStatus::Refused | DrugRequestStatus::Cancelled => "badge badge-danger",
            DrugRequestStatus::Unknown => "badge",
        }
    }
}

/// Declaration `pending` field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeclarationStatus {
    Pending,
    Done,
    Cancelled,
    Unknown,
}

impl DeclarationStatus {
    pub fn parse(s: &str) -> Self {
        match s.trim().to_uppercase().as_str() {
            "PENDING" => DeclarationStatus::Pending,
            "DONE" => DeclarationStatus::Done,
            "CANCELLED" | "CANCELED" => DeclarationStatus::Cancelled,
            _ => DeclarationStatus::Unknown,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DeclarationStatus::Pending => "Chờ xác nhận",
            DeclarationStatus::Done => "Đã xác nhận",
            DeclarationStatus::Cancelled => "Đã từ chối",
            DeclarationStatus::Unknown => "Không xác định",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            DeclarationStatus::Pending => "badge badge-warning",
            DeclarationStatus::Done => "badge badge-success",
            DeclarationStatus::Cancelled => "badge badge-danger",
            DeclarationStatus::Unknown => "badge",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordAction {
    View,
    Accept,
    Refuse,
    Receive,
    Complete,
    Cancel,
}

impl RecordAction {
    pub fn label(&self) -> &'static str {
        match self {
            RecordAction::View => "Xem",
            RecordAction::Accept => "Chấp nhận",
            RecordAction::Refuse => "Từ chối",
            RecordAction::Receive => "Đã nhận thuốc",
            RecordAction::Complete => "Hoàn thành",
            RecordAction::Cancel => "Hủy đơn",
        }
    }

    pub fn style(&self) -> ButtonStyle {
        match self {
            RecordAction::View => ButtonStyle::Secondary,
            RecordAction::Accept | RecordAction::Complete => ButtonStyle::Success,
            RecordAction::Refuse | RecordAction::Cancel => ButtonStyle::Danger,
            RecordAction::Receive => ButtonStyle::Info,
        }
    }

    /// Last path segment of the PATCH endpoint
    pub fn segment(&self) -> Option<&'static str> {
        match self {
            RecordAction::View => None,
            RecordAction::Accept => Some("accept"),
            RecordAction::Refuse => Some("refuse"),
            RecordAction::Receive => Some("receive"),
            RecordAction::Complete => Some("done"),
            RecordAction::Cancel => Some("cancel"),
        }
    }
}

pub fn drug_request_actions(role: Option<Role>, status: DrugRequestStatus) -> Vec<RecordAction> {
    use DrugRequestStatus as D;
    use RecordAction as R;

    let extra: &[RecordAction] = match (role, status) {
        (Some(r), D::Processing) if r.is_staff() => &[R::Accept, R::Refuse],
        (Some(r), D::Accepted) if r.is_staff() => &[R::Receive],
        (Some(r), D::Received) if r.is_staff() => &[R::Complete],
        (Some(Role::Parent), D::Processing) => &[R::Cancel],
        _ => &[],
    };
    std::iter::once(R::View).chain(extra.iter().copied()).collect()
}

/// Accept/refuse only while the declaration is pending and the viewer is staff
pub fn declaration_actions(role: Option<Role>, status: DeclarationStatus) -> Vec<RecordAction> {
    match (role, status) {
        (Some(r), DeclarationStatus::Pending) if r.is_staff() => {
            vec![RecordAction::Accept, RecordAction::Refuse]
        }
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_STATUSES: [CampaignStatus; 7] = [
        S::Drafted,
        S::Preparing,
        S::Upcoming,
        S::Ongoing,
        S::Done,
        S::Cancelled,
        S::Unknown,
    ];

    fn labels(actions: &[ActionDescriptor]) -> Vec<&'static str> {
        actions.iter().map(|a| a.label).collect()
    }

    #[test]
    fn test_drafted_admin_buttons() {
        let actions = campaign_actions(CampaignKind::Checkup, Some(Role::Admin), 4, S::Drafted, false);
        assert_eq!(labels(&actions), vec!["Xem chi tiết", "Gửi đơn", "Chỉnh sửa", "Hủy chiến dịch"]);
        assert_eq!(
            actions[1].http,
            Some((HttpMethod::Post, "/checkup-campaign/4/send-register".to_string()))
        );
        assert_eq!(actions[0].navigate_to.as_deref(), Some("/checkup-campaigns/4"));
        assert_eq!(
            actions[3].http,
            Some((HttpMethod::Patch, "/checkup-campaign/4/cancel".to_string()))
        );
    }

    #[test]
    fn test_unknown_status_only_view_details() {
        for role in [Some(Role::Admin), Some(Role::Nurse), Some(Role::Parent), None] {
            let actions = campaign_actions(CampaignKind::Vaccination, role, 1, S::Unknown, false);
            assert_eq!(actions.len(), 1);
            assert_eq!(actions[0].action, A::ViewDetails);
        }
        let parsed = CampaignStatus::parse("SOMETHING_NEW");
        let actions = campaign_actions(CampaignKind::Checkup, Some(Role::Admin), 1, parsed, false);
        assert_eq!(labels(&actions), vec!["Xem chi tiết"]);
    }

    #[test]
    fn test_non_staff_never_gets_mutating_actions() {
        for status in ALL_STATUSES {
            for role in [Some(Role::Parent), None] {
                let actions = campaign_actions(CampaignKind::Checkup, role, 9, status, false);
                assert!(actions.iter().all(|a| !a.action.is_mutating() && a.http.is_none()));
            }
        }
    }

    #[test]
    fn test_nurse_never_mutates_campaign_state() {
        for status in ALL_STATUSES {
            let actions = campaign_actions(CampaignKind::Vaccination, Some(Role::Nurse), 2, status, false);
            assert!(actions.iter().all(|a| !a.action.is_mutating()));
        }
        let ongoing = campaign_actions(CampaignKind::Vaccination, Some(Role::Nurse), 2, S::Ongoing, false);
        assert_eq!(
            ongoing.iter().map(|a| a.action).collect::<Vec<_>>(),
            vec![A::ViewDetails, A::ViewRegisterList, A::EditReport]
        );
        assert_eq!(ongoing[2].navigate_to.as_deref(), Some("/vaccination-campaigns/2/report/edit"));
    }

    #[test]
    fn test_no_duplicate_actions() {
        for status in ALL_STATUSES {
            for role in [Some(Role::Admin), Some(Role::Nurse), Some(Role::Parent), None] {
                let actions = campaign_actions(CampaignKind::Checkup, role, 1, status, false);
                let mut seen = std::collections::HashSet::new();
                assert!(actions.iter().all(|a| seen.insert(a.action)));
                assert_eq!(actions[0].action, A::ViewDetails);
            }
        }
    }

    #[test]
    fn test_finish_segment_differs_by_kind() {
        let checkup = campaign_actions(CampaignKind::Checkup, Some(Role::Admin), 5, S::Ongoing, false);
        let vaccine = campaign_actions(CampaignKind::Vaccination, Some(Role::Admin), 5, S::Ongoing, false);
        assert_eq!(checkup[1].http.as_ref().map(|h| h.1.as_str()), Some("/checkup-campaign/5/finish"));
        assert_eq!(vaccine[1].http.as_ref().map(|h| h.1.as_str()), Some("/vaccination-campaign/5/complete"));
    }

    #[test]
    fn test_completed_spelling_maps_like_done() {
        let done = campaign_actions(CampaignKind::Vaccination, Some(Role::Admin), 1, CampaignStatus::parse("COMPLETED"), false);
        assert_eq!(labels(&done), vec!["Xem chi tiết", "Xem báo cáo", "Xem danh sách đăng ký"]);
    }

    #[test]
    fn test_loading_disables_only_mutating_actions() {
        let actions = campaign_actions(CampaignKind::Checkup, Some(Role::Admin), 1, S::Upcoming, true);
        for a in &actions {
            assert_eq!(a.disabled, a.action.is_mutating(), "{:?}", a.action);
        }
        assert!(actions.iter().any(|a| a.disabled));
    }

    #[test]
    fn test_cancelled_is_read_only() {
        let actions = campaign_actions(CampaignKind::Checkup, Some(Role::Admin), 1, S::Cancelled, false);
        assert_eq!(actions.iter().map(|a| a.action).collect::<Vec<_>>(), vec![A::ViewDetails, A::ViewRegisterList]);
    }

    #[test]
    fn test_drug_request_processing_actions() {
        let nurse = drug_request_actions(Some(Role::Nurse), DrugRequestStatus::Processing);
        assert_eq!(nurse, vec![RecordAction::View, RecordAction::Accept, RecordAction::Refuse]);

        let parent = drug_request_actions(Some(Role::Parent), DrugRequestStatus::Processing);
        assert_eq!(parent, vec![RecordAction::View, RecordAction::Cancel]);

        let done = drug_request_actions(Some(Role::Admin), DrugRequestStatus::Done);
        assert_eq!(done, vec![RecordAction::View]);
    }

    #[test]
    fn test_declaration_actions_hidden_once_resolved() {
        assert_eq!(
            declaration_actions(Some(Role::Nurse), DeclarationStatus::Pending),
            vec![RecordAction::Accept, RecordAction::Refuse]
        );
        assert!(declaration_actions(Some(Role::Nurse), DeclarationStatus::Done).is_empty());
        assert!(declaration_actions(Some(Role::Parent), DeclarationStatus::Pending).is_empty());
        assert!(declaration_actions(None, DeclarationStatus::Pending).is_empty());
    }
}
