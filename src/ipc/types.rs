use serde::Deserialize;

use crate::model::{
    AcademicNote, AnimalReport, CampusEvent, EmergencyReport, HostelComplaint, LostFoundItem,
    MessComplaint, TripRequest,
};
use crate::session::Session;
use crate::store::{InsertOrder, Store};

#[derive(Debug, Deserialize, Clone)]
pub struct Request {
    pub id: String,
    pub method: String,
    #[serde(default)]
    pub params: serde_json::Value,
}

/// All in-memory daemon state: the committed profile plus one listing store
/// per feature. Complaint-style feeds show newest first; archival feeds keep
/// submission order.
pub struct AppState {
    pub session: Session,
    pub hostel: Store<HostelComplaint>,
    pub mess: Store<MessComplaint>,
    pub lost_found: Store<LostFoundItem>,
    pub trips: Store<TripRequest>,
    pub notes: Store<AcademicNote>,
    pub events: Store<CampusEvent>,
    pub animals: Store<AnimalReport>,
    pub medical: Store<EmergencyReport>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            session: Session::default(),
            hostel: Store::new(InsertOrder::Front),
            mess: Store::new(InsertOrder::Front),
            lost_found: Store::new(InsertOrder::Front),
            trips: Store::new(InsertOrder::Front),
            notes: Store::new(InsertOrder::Back),
            events: Store::new(InsertOrder::Back),
            animals: Store::new(InsertOrder::Back),
            medical: Store::new(InsertOrder::Back),
        }
    }
}
