//! Form Validation
//!
//! Client-side checks that must pass before a request is sent.

use crate::actions::CampaignKind;
use crate::campaign_utils::parse_date;
use crate::error::{AppError, AppResult};
use crate::models::CampaignPayload;

pub const MSG_NAME_REQUIRED: &str = "Vui lòng nhập tên chiến dịch";
pub const MSG_DATES_REQUIRED: &str = "Vui lòng chọn ngày bắt đầu và ngày kết thúc";
pub const MSG_END_BEFORE_START: &str = "Ngày kết thúc phải sau ngày bắt đầu";
pub const MSG_VACCINE_REQUIRED: &str = "Vui lòng chọn vắc xin";
pub const MSG_REFUSE_REASON_REQUIRED: &str = "Vui lòng nhập lý do từ chối";

/// Raw values from the campaign form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CampaignDraft {
    pub name: String,
    pub description: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    pub vaccine_id: Option<u32>,
    pub specialist_exam_ids: Vec<u32>,
}

impl CampaignDraft {
    pub fn from_campaign(campaign: &crate::models::Campaign) -> Self {
        Self {
            name: campaign.name.clone(),
            description: campaign.description.clone().unwrap_or_default(),
            location: campaign.location.clone().unwrap_or_default(),
            start_date: campaign.start_date.as_deref().and_then(parse_date).map(|d| d.to_string()).unwrap_or_default(),
            end_date: campaign.end_date.as_deref().and_then(parse_date).map(|d| d.to_string()).unwrap_or_default(),
            vaccine_id: campaign.vaccine_id,
            specialist_exam_ids: campaign.specialist_exams.iter().map(|e| e.id).collect(),
        }
    }

    /// Add or remove one exam, keeping ids sorted and unique
    pub fn toggle_exam(&mut self, exam_id: u32, checked: bool) {
        self.specialist_exam_ids.retain(|id| *id != exam_id);
        if checked {
            self.specialist_exam_ids.push(exam_id);
            self.specialist_exam_ids.sort_unstable();
        }
    }
}

pub fn validate_campaign(kind: CampaignKind, draft: &CampaignDraft) -> AppResult<CampaignPayload> {
    let name = draft.name.trim();
    if name.is_empty() {
        return Err(AppError::Validation(MSG_NAME_REQUIRED.into()));
    }

    let (Some(start), Some(end)) = (parse_date(&draft.start_date), parse_date(&draft.end_date)) else {
        return Err(AppError::Validation(MSG_DATES_REQUIRED.into()));
    };
    if start >= end {
        return Err(AppError::Validation(MSG_END_BEFORE_START.into()));
    }

    let vaccine_id = match kind {
        CampaignKind::Vaccination => Some(draft.vaccine_id.ok_or_else(|| AppError::Validation(MSG_VACCINE_REQUIRED.into()))?),
        CampaignKind::Checkup => None,
    };

    Ok(CampaignPayload {
        name: name.to_string(),
        description: draft.description.trim().to_string(),
        location: draft.location.trim().to_string(),
        start_date: start.to_string(),
        end_date: end.to_string(),
        vaccine_id,
        specialist_exam_ids: match kind {
            CampaignKind::Checkup => draft.specialist_exam_ids.clone(),
            CampaignKind::Vaccination => Vec::new(),
        },
    })
}

/// Trimmed, non-empty refusal reason
pub fn validate_refuse_reason(reason: &str) -> AppResult<String> {
    let reason = reason.trim();
    if reason.is_empty() {
        Err(AppError::Validation(MSG_REFUSE_REASON_REQUIRED.into()))
    } else {
        Ok(reason.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(start: &str, end: &str) -> CampaignDraft {
        CampaignDraft {
            name: " Khám răng học kỳ I ".into(),
            location: "Phòng y tế".into(),
            start_date: start.into(),
            end_date: end.into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_checkup() {
        let payload = validate_campaign(CampaignKind::Checkup, &draft("2025-09-01", "2025-09-05")).unwrap();
        assert_eq!(payload.name, "Khám răng học kỳ I");
        assert_eq!(payload.start_date, "2025-09-01");
        assert_eq!(payload.vaccine_id, None);
    }

    #[test]
    fn test_start_not_before_end_is_rejected() {
        for (s, e) in [("2025-09-05", "2025-09-01"), ("2025-09-05", "2025-09-05")] {
            let err = validate_campaign(CampaignKind::Checkup, &draft(s, e)).unwrap_err();
            assert_eq!(err, AppError::Validation(MSG_END_BEFORE_START.into()));
        }
    }

    #[test]
    fn test_missing_fields() {
        let mut d = draft("2025-09-01", "2025-09-05");
        d.name = "   ".into();
        assert_eq!(validate_campaign(CampaignKind::Checkup, &d).unwrap_err().user_message(""), MSG_NAME_REQUIRED);

        let d = draft("", "2025-09-05");
        assert_eq!(validate_campaign(CampaignKind::Checkup, &d).unwrap_err().user_message(""), MSG_DATES_REQUIRED);

        let d = draft("2025-09-01", "2025-09-05");
        assert_eq!(validate_campaign(CampaignKind::Vaccination, &d).unwrap_err().user_message(""), MSG_VACCINE_REQUIRED);
    }

    #[test]
    fn test_refuse_reason() {
        assert!(validate_refuse_reason("   ").is_err());
        assert_eq!(validate_refuse_reason("  Thiếu đơn thuốc ").unwrap(), "Thiếu đơn thuốc");
    }

    #[test]
    fn test_selected_exams_reach_the_payload() {
        let mut d = draft("2025-06-01", "2025-06-05");
        d.toggle_exam(4, true);
        d.toggle_exam(2, true);
        d.toggle_exam(4, true);
        d.toggle_exam(7, true);
        d.toggle_exam(7, false);
        assert_eq!(d.specialist_exam_ids, vec![2, 4]);

        let payload = validate_campaign(CampaignKind::Checkup, &d).unwrap();
        assert_eq!(payload.specialist_exam_ids, vec![2, 4]);
    }
}
