//! Medication Schedule
//!
//! Groups individual doses into a day × time-slot grid and decides whether
//! a group may be toggled.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::actions::DrugRequestStatus;
use crate::campaign_utils::parse_date;
use crate::models::{MedicationDose, Role};

/// Intake time slot. Unrecognized slots keep their raw name and sort last.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum IntakeSlot {
    Morning,
    Midday,
    Afternoon,
    Evening,
    Other(String),
}

impl IntakeSlot {
    pub fn parse(s: &str) -> Self {
        match s.trim().to_uppercase().as_str() {
            "MORNING" => IntakeSlot::Morning,
            "MIDDAY" | "NOON" => IntakeSlot::Midday,
            "AFTERNOON" => IntakeSlot::Afternoon,
            "EVENING" | "NIGHT" => IntakeSlot::Evening,
            _ => IntakeSlot::Other(s.trim().to_string()),
        }
    }

    pub fn label(&self) -> String {
        match self {
            IntakeSlot::Morning => "Sáng".to_string(),
            IntakeSlot::Midday => "Trưa".to_string(),
            IntakeSlot::Afternoon => "Chiều".to_string(),
            IntakeSlot::Evening => "Tối".to_string(),
            IntakeSlot::Other(raw) => raw.clone(),
        }
    }
}

/// All doses of one request sharing a date and slot
#[derive(Debug, Clone, PartialEq)]
pub struct DoseGroup {
    pub date: NaiveDate,
    pub slot: IntakeSlot,
    pub dose_ids: Vec<u32>,
    pub medications: Vec<String>,
    /// True only when every dose in the group is taken
    pub is_taken: bool,
    pub note: Option<String>,
    pub intake_time: Option<String>,
}

impl DoseGroup {
    pub fn key(&self) -> (NaiveDate, IntakeSlot) {
        (self.date, self.slot.clone())
    }
}

/// Doses with an unparseable date are skipped.
pub fn group_doses(doses: &[MedicationDose]) -> Vec<DoseGroup> {
    let mut groups: BTreeMap<(NaiveDate, IntakeSlot), DoseGroup> = BTreeMap::new();
    for dose in doses {
        let Some(date) = parse_date(&dose.intake_date) else {
            log::warn!("dose {} has unreadable date {:?}", dose.id, dose.intake_date);
            continue;
        };
        let slot = IntakeSlot::parse(&dose.intake_template_time);
        let group = groups.entry((date, slot.clone())).or_insert_with(|| DoseGroup {
            date,
            slot,
            dose_ids: Vec::new(),
            medications: Vec::new(),
            is_taken: true,
            note: None,
            intake_time: None,
        });
        group.dose_ids.push(dose.id);
        if let Some(name) = &dose.medication_name {
            group.medications.push(name.clone());
        }
        group.is_taken &= dose.is_taken;
        if group.note.is_none() {
            group.note = dose.note.clone().filter(|n| !n.trim().is_empty());
        }
        if group.intake_time.is_none() {
            group.intake_time = dose.intake_time.clone();
        }
    }
    groups.into_values().collect()
}

/// Distinct dates and slots of a grouped schedule, both sorted
pub fn grid_axes(groups: &[DoseGroup]) -> (Vec<NaiveDate>, Vec<IntakeSlot>) {
    let mut dates: Vec<NaiveDate> = groups.iter().map(|g| g.date).collect();
    dates.sort();
    dates.dedup();
    let mut slots: Vec<IntakeSlot> = groups.iter().map(|g| g.slot.clone()).collect();
    slots.sort();
    slots.dedup();
    (dates, slots)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleRejection {
    NotStaff,
    RequestDone,
    NotToday,
    AlreadyTaken,
    AlreadyNotTaken,
}

impl ToggleRejection {
    pub fn message(&self) -> &'static str {
        match self {
            ToggleRejection::NotStaff => "Bạn không có quyền cập nhật lịch uống thuốc",
            ToggleRejection::RequestDone => "Đơn thuốc đã hoàn thành, không thể chỉnh sửa",
            ToggleRejection::NotToday => "Chỉ có thể cập nhật lịch uống thuốc của ngày hôm nay",
            ToggleRejection::AlreadyTaken => "Liều thuốc này đã được đánh dấu là đã uống",
            ToggleRejection::AlreadyNotTaken => "Liều thuốc này đang ở trạng thái chưa uống",
        }
    }
}

/// Checked in order: role, terminal request, date, target state
pub fn check_toggle(
    role: Option<Role>,
    request_status: Option<DrugRequestStatus>,
    group: &DoseGroup,
    target_taken: bool,
    today: NaiveDate,
) -> Result<(), ToggleRejection> {
    if !role.is_some_and(|r| r.is_staff()) {
        return Err(ToggleRejection::NotStaff);
    }
    if request_status == Some(DrugRequestStatus::Done) {
        return Err(ToggleRejection::RequestDone);
    }
    if group.date != today {
        return Err(ToggleRejection::NotToday);
    }
    if group.is_taken == target_taken {
        return Err(if target_taken {
            ToggleRejection::AlreadyTaken
        } else {
            ToggleRejection::AlreadyNotTaken
        });
    }
    Ok(())
}
