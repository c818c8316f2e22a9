use chrono::{NaiveDate, NaiveTime};
use serde_json::json;

use crate::ipc::error::ok;
use crate::ipc::helpers::{int_param, no_profile, opt_str_param, str_param, HandlerErr};
use crate::ipc::types::{AppState, Request};
use crate::model::{TripRequest, TripRequestFields};
use crate::validators::{is_not_empty, is_valid_contact_number};

const DEFAULT_TOTAL_SEATS: i64 = 4;
const DEFAULT_AVAILABLE_SEATS: i64 = 3;

fn parse_trip_fields(params: &serde_json::Value) -> Result<TripRequestFields, HandlerErr> {
    for key in ["from", "to", "name"] {
        if !is_not_empty(str_param(params, key)) {
            return Err(HandlerErr::bad_params(format!("missing {}", key)));
        }
    }

    let date = str_param(params, "date");
    if NaiveDate::parse_from_str(date, "%Y-%m-%d").is_err() {
        return Err(HandlerErr::bad_params("date must be YYYY-MM-DD"));
    }
    let time = str_param(params, "time");
    if NaiveTime::parse_from_str(time, "%H:%M").is_err() {
        return Err(HandlerErr::bad_params("time must be HH:MM"));
    }

    let contact_number = str_param(params, "contactNumber");
    if !is_valid_contact_number(contact_number) {
        return Err(HandlerErr::bad_params(
            "contactNumber must be a 10-digit number",
        ));
    }

    let total_seats = int_param(params, "totalSeats", DEFAULT_TOTAL_SEATS)?;
    if !(1..=6).contains(&total_seats) {
        return Err(HandlerErr::bad_params("totalSeats must be between 1 and 6"));
    }
    let available_seats = int_param(params, "availableSeats", DEFAULT_AVAILABLE_SEATS)?;
    if !(0..=total_seats).contains(&available_seats) {
        return Err(HandlerErr::bad_params(
            "availableSeats must be between 0 and totalSeats",
        ));
    }

    Ok(TripRequestFields {
        from: str_param(params, "from").to_string(),
        to: str_param(params, "to").to_string(),
        date: date.to_string(),
        time: time.to_string(),
        name: str_param(params, "name").to_string(),
        contact_number: contact_number.to_string(),
        total_seats,
        available_seats,
        notes: opt_str_param(params, "notes"),
    })
}

fn handle_create(state: &mut AppState, req: &Request) -> serde_json::Value {
    let fields = match parse_trip_fields(&req.params) {
        Ok(f) => f,
        Err(e) => return e.response(&req.id),
    };
    let trip = state.trips.create(fields);
    ok(&req.id, json!({ "trip": trip }))
}

fn matches_search(trip: &TripRequest, needle: &str) -> bool {
    let needle = needle.to_lowercase();
    let mut haystacks = vec![&trip.from, &trip.to, &trip.name];
    if let Some(notes) = &trip.notes {
        haystacks.push(notes);
    }
    haystacks.iter().any(|f| f.to_lowercase().contains(&needle))
}

/// Departure key for sorting. Records were validated at creation, so the
/// fallback only guards against impossible states.
fn departure_key(trip: &TripRequest) -> (NaiveDate, NaiveTime) {
    let date = NaiveDate::parse_from_str(&trip.date, "%Y-%m-%d")
        .unwrap_or(NaiveDate::MIN);
    let time = NaiveTime::parse_from_str(&trip.time, "%H:%M")
        .unwrap_or(NaiveTime::MIN);
    (date, time)
}

fn handle_list(state: &mut AppState, req: &Request) -> serde_json::Value {
    let search = opt_str_param(&req.params, "search");
    let mut trips = state
        .trips
        .list_where(|t| search.as_deref().map_or(true, |s| matches_search(t, s)));
    trips.sort_by_key(|t| departure_key(t));
    ok(&req.id, json!({ "trips": trips }))
}

fn handle_join(state: &mut AppState, req: &Request) -> serde_json::Value {
    let id = str_param(&req.params, "id");
    let joined = state
        .trips
        .update(id, |trip| {
            if trip.available_seats > 0 {
                trip.available_seats -= 1;
                true
            } else {
                false
            }
        })
        .unwrap_or(false);
    ok(&req.id, json!({ "joined": joined }))
}

fn handle_delete(state: &mut AppState, req: &Request) -> serde_json::Value {
    let removed = state.trips.remove(str_param(&req.params, "id"));
    ok(&req.id, json!({ "removed": removed }))
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    if !matches!(
        req.method.as_str(),
        "cab.create" | "cab.list" | "cab.join" | "cab.delete"
    ) {
        return None;
    }
    if !state.session.is_authenticated() {
        return Some(no_profile(&req.id));
    }
    Some(match req.method.as_str() {
        "cab.create" => handle_create(state, req),
        "cab.list" => handle_list(state, req),
        "cab.join" => handle_join(state, req),
        _ => handle_delete(state, req),
    })
}
