pub mod animals;
pub mod cab;
pub mod core;
pub mod events;
pub mod hostel;
pub mod lostfound;
pub mod medical;
pub mod mess;
pub mod notes;
pub mod places;
pub mod profile;
