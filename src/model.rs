//! Record schemas for the per-feature listing stores. Content fields are
//! fixed at creation; only the status-like field of each record may change
//! afterwards, through the store's transition rule.

use serde::Serialize;

use crate::store::{Record, StatusRecord, TransitionError};

/// Lost & Found item state. The manual reopen (`closed -> open`) is the one
/// sanctioned exception to monotonic status ladders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ItemStatus {
    Open,
    Closed,
}

impl ItemStatus {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "open" => Some(Self::Open),
            "closed" => Some(Self::Closed),
            _ => None,
        }
    }
}

/// Report ladder for the hospital-responded features. Forward-only:
/// pending -> inProgress -> resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ReportStatus {
    Pending,
    InProgress,
    Resolved,
}

impl ReportStatus {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(Self::Pending),
            "inProgress" => Some(Self::InProgress),
            "resolved" => Some(Self::Resolved),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "inProgress",
            Self::Resolved => "resolved",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HostelComplaint {
    pub id: String,
    pub reg_no: String,
    pub block: String,
    pub room_no: String,
    pub name: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub created_at: String,
    pub resolved: bool,
}

pub struct HostelComplaintFields {
    pub reg_no: String,
    pub block: String,
    pub room_no: String,
    pub name: String,
    pub description: String,
    pub image_url: Option<String>,
}

impl Record for HostelComplaint {
    type Fields = HostelComplaintFields;

    fn build(id: String, created_at: String, f: Self::Fields) -> Self {
        Self {
            id,
            reg_no: f.reg_no,
            block: f.block,
            room_no: f.room_no,
            name: f.name,
            description: f.description,
            image_url: f.image_url,
            created_at,
            resolved: false,
        }
    }

    fn id(&self) -> &str {
        &self.id
    }
}

impl StatusRecord for HostelComplaint {
    type Status = bool;

    fn transition(&mut self, next: bool) -> Result<(), TransitionError> {
        if self.resolved && !next {
            return Err(TransitionError {
                from: "resolved",
                to: "unresolved",
            });
        }
        self.resolved = next;
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessComplaint {
    pub id: String,
    pub reg_no: String,
    pub block: String,
    pub room_no: String,
    pub name: String,
    pub description: String,
    pub mess: String,
    pub meal_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub created_at: String,
    pub resolved: bool,
}

pub struct MessComplaintFields {
    pub reg_no: String,
    pub block: String,
    pub room_no: String,
    pub name: String,
    pub description: String,
    pub mess: String,
    pub meal_type: String,
    pub image_url: Option<String>,
}

impl Record for MessComplaint {
    type Fields = MessComplaintFields;

    fn build(id: String, created_at: String, f: Self::Fields) -> Self {
        Self {
            id,
            reg_no: f.reg_no,
            block: f.block,
            room_no: f.room_no,
            name: f.name,
            description: f.description,
            mess: f.mess,
            meal_type: f.meal_type,
            image_url: f.image_url,
            created_at,
            resolved: false,
        }
    }

    fn id(&self) -> &str {
        &self.id
    }
}

impl StatusRecord for MessComplaint {
    type Status = bool;

    fn transition(&mut self, next: bool) -> Result<(), TransitionError> {
        if self.resolved && !next {
            return Err(TransitionError {
                from: "resolved",
                to: "unresolved",
            });
        }
        self.resolved = next;
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LostFoundItem {
    pub id: String,
    pub kind: String,
    pub title: String,
    pub description: String,
    pub location: String,
    pub contact_name: String,
    pub contact_info: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub created_at: String,
    pub status: ItemStatus,
}

pub struct LostFoundItemFields {
    pub kind: String,
    pub title: String,
    pub description: String,
    pub location: String,
    pub contact_name: String,
    pub contact_info: String,
    pub image_url: Option<String>,
}

impl Record for LostFoundItem {
    type Fields = LostFoundItemFields;

    fn build(id: String, created_at: String, f: Self::Fields) -> Self {
        Self {
            id,
            kind: f.kind,
            title: f.title,
            description: f.description,
            location: f.location,
            contact_name: f.contact_name,
            contact_info: f.contact_info,
            image_url: f.image_url,
            created_at,
            status: ItemStatus::Open,
        }
    }

    fn id(&self) -> &str {
        &self.id
    }
}

impl StatusRecord for LostFoundItem {
    type Status = ItemStatus;

    // Both directions allowed: items get claimed and sometimes un-claimed.
    fn transition(&mut self, next: ItemStatus) -> Result<(), TransitionError> {
        self.status = next;
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TripRequest {
    pub id: String,
    pub from: String,
    pub to: String,
    pub date: String,
    pub time: String,
    pub name: String,
    pub contact_number: String,
    pub total_seats: i64,
    pub available_seats: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub created_at: String,
}

pub struct TripRequestFields {
    pub from: String,
    pub to: String,
    pub date: String,
    pub time: String,
    pub name: String,
    pub contact_number: String,
    pub total_seats: i64,
    pub available_seats: i64,
    pub notes: Option<String>,
}

impl Record for TripRequest {
    type Fields = TripRequestFields;

    fn build(id: String, created_at: String, f: Self::Fields) -> Self {
        Self {
            id,
            from: f.from,
            to: f.to,
            date: f.date,
            time: f.time,
            name: f.name,
            contact_number: f.contact_number,
            total_seats: f.total_seats,
            available_seats: f.available_seats,
            notes: f.notes,
            created_at,
        }
    }

    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AcademicNote {
    pub id: String,
    pub title: String,
    pub subject: String,
    pub semester: String,
    pub uploaded_by: String,
    pub uploaded_on: String,
    pub file_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub download_url: Option<String>,
}

pub struct AcademicNoteFields {
    pub title: String,
    pub subject: String,
    pub semester: String,
    pub uploaded_by: String,
    pub file_type: String,
    pub description: Option<String>,
    pub download_url: Option<String>,
}

impl Record for AcademicNote {
    type Fields = AcademicNoteFields;

    fn build(id: String, created_at: String, f: Self::Fields) -> Self {
        Self {
            id,
            title: f.title,
            subject: f.subject,
            semester: f.semester,
            uploaded_by: f.uploaded_by,
            uploaded_on: created_at,
            file_type: f.file_type,
            description: f.description,
            download_url: f.download_url,
        }
    }

    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CampusEvent {
    pub id: String,
    pub title: String,
    pub description: String,
    pub date: String,
    pub time: String,
    pub location: String,
    pub organizer: String,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registration_url: Option<String>,
    pub created_at: String,
}

pub struct CampusEventFields {
    pub title: String,
    pub description: String,
    pub date: String,
    pub time: String,
    pub location: String,
    pub organizer: String,
    pub category: String,
    pub registration_url: Option<String>,
}

impl Record for CampusEvent {
    type Fields = CampusEventFields;

    fn build(id: String, created_at: String, f: Self::Fields) -> Self {
        Self {
            id,
            title: f.title,
            description: f.description,
            date: f.date,
            time: f.time,
            location: f.location,
            organizer: f.organizer,
            category: f.category,
            registration_url: f.registration_url,
            created_at,
        }
    }

    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimalReport {
    pub id: String,
    pub description: String,
    pub location: String,
    pub contact_name: String,
    pub contact_info: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub reported_at: String,
    pub status: ReportStatus,
}

pub struct AnimalReportFields {
    pub description: String,
    pub location: String,
    pub contact_name: String,
    pub contact_info: String,
    pub image_url: Option<String>,
}

impl Record for AnimalReport {
    type Fields = AnimalReportFields;

    fn build(id: String, created_at: String, f: Self::Fields) -> Self {
        Self {
            id,
            description: f.description,
            location: f.location,
            contact_name: f.contact_name,
            contact_info: f.contact_info,
            image_url: f.image_url,
            reported_at: created_at,
            status: ReportStatus::Pending,
        }
    }

    fn id(&self) -> &str {
        &self.id
    }
}

impl StatusRecord for AnimalReport {
    type Status = ReportStatus;

    fn transition(&mut self, next: ReportStatus) -> Result<(), TransitionError> {
        if next < self.status {
            return Err(TransitionError {
                from: self.status.as_str(),
                to: next.as_str(),
            });
        }
        self.status = next;
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmergencyReport {
    pub id: String,
    pub patient_name: String,
    pub description: String,
    pub location: String,
    pub contact_name: String,
    pub contact_info: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub reported_at: String,
    pub status: ReportStatus,
}

pub struct EmergencyReportFields {
    pub patient_name: String,
    pub description: String,
    pub location: String,
    pub contact_name: String,
    pub contact_info: String,
    pub image_url: Option<String>,
}

impl Record for EmergencyReport {
    type Fields = EmergencyReportFields;

    fn build(id: String, created_at: String, f: Self::Fields) -> Self {
        Self {
            id,
            patient_name: f.patient_name,
            description: f.description,
            location: f.location,
            contact_name: f.contact_name,
            contact_info: f.contact_info,
            image_url: f.image_url,
            reported_at: created_at,
            status: ReportStatus::Pending,
        }
    }

    fn id(&self) -> &str {
        &self.id
    }
}

impl StatusRecord for EmergencyReport {
    type Status = ReportStatus;

    fn transition(&mut self, next: ReportStatus) -> Result<(), TransitionError> {
        if next < self.status {
            return Err(TransitionError {
                from: self.status.as_str(),
                to: next.as_str(),
            });
        }
        self.status = next;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{InsertOrder, Store};

    #[test]
    fn report_ladder_is_forward_only() {
        let mut store: Store<AnimalReport> = Store::new(InsertOrder::Back);
        let id = store
            .create(AnimalReportFields {
                description: "limping dog".to_string(),
                location: "main gate".to_string(),
                contact_name: "A".to_string(),
                contact_info: "9876543210".to_string(),
                image_url: None,
            })
            .id()
            .to_string();

        assert_eq!(store.set_status(&id, ReportStatus::InProgress), Ok(true));
        assert_eq!(store.set_status(&id, ReportStatus::Resolved), Ok(true));
        assert!(store.set_status(&id, ReportStatus::Pending).is_err());
        // Re-asserting the current rung is a harmless no-op.
        assert_eq!(store.set_status(&id, ReportStatus::Resolved), Ok(true));
    }

    #[test]
    fn lost_found_reopen_is_allowed() {
        let mut store: Store<LostFoundItem> = Store::new(InsertOrder::Front);
        let id = store
            .create(LostFoundItemFields {
                kind: "lost".to_string(),
                title: "blue bottle".to_string(),
                description: "left in AB1".to_string(),
                location: "AB1".to_string(),
                contact_name: "B".to_string(),
                contact_info: "b@vit.ac.in".to_string(),
                image_url: None,
            })
            .id()
            .to_string();

        assert_eq!(store.set_status(&id, ItemStatus::Closed), Ok(true));
        assert_eq!(store.set_status(&id, ItemStatus::Open), Ok(true));
    }
}
