use chrono::NaiveDate;
use serde_json::json;

use crate::ipc::error::ok;
use crate::ipc::helpers::{no_profile, opt_str_param, str_param, HandlerErr};
use crate::ipc::types::{AppState, Request};
use crate::model::{CampusEvent, CampusEventFields};
use crate::validators::is_not_empty;

const CATEGORIES: &[&str] = &["technical", "cultural", "sports", "workshop", "webinar"];

fn handle_create(state: &mut AppState, req: &Request) -> serde_json::Value {
    let p = &req.params;
    for key in ["title", "description", "time", "location", "organizer"] {
        if !is_not_empty(str_param(p, key)) {
            return HandlerErr::bad_params(format!("missing {}", key)).response(&req.id);
        }
    }
    let date = str_param(p, "date");
    if NaiveDate::parse_from_str(date, "%Y-%m-%d").is_err() {
        return HandlerErr::bad_params("date must be YYYY-MM-DD").response(&req.id);
    }
    let category = str_param(p, "category");
    if !CATEGORIES.contains(&category) {
        return HandlerErr::bad_params(format!(
            "category must be one of: {}",
            CATEGORIES.join(", ")
        ))
        .response(&req.id);
    }

    let event = state.events.create(CampusEventFields {
        title: str_param(p, "title").to_string(),
        description: str_param(p, "description").to_string(),
        date: date.to_string(),
        time: str_param(p, "time").to_string(),
        location: str_param(p, "location").to_string(),
        organizer: str_param(p, "organizer").to_string(),
        category: category.to_string(),
        registration_url: opt_str_param(p, "registrationUrl"),
    });
    ok(&req.id, json!({ "event": event }))
}

fn matches_search(event: &CampusEvent, needle: &str) -> bool {
    let needle = needle.to_lowercase();
    [&event.title, &event.description, &event.location]
        .iter()
        .any(|f| f.to_lowercase().contains(&needle))
}

fn handle_list(state: &mut AppState, req: &Request) -> serde_json::Value {
    let p = &req.params;
    let search = opt_str_param(p, "search");
    let category = opt_str_param(p, "category");

    let mut events = state.events.list_where(|e| {
        search.as_deref().map_or(true, |s| matches_search(e, s))
            && category.as_deref().map_or(true, |c| e.category == c)
    });
    events.sort_by_key(|e| {
        NaiveDate::parse_from_str(&e.date, "%Y-%m-%d").unwrap_or(NaiveDate::MIN)
    });
    ok(&req.id, json!({ "events": events }))
}

fn handle_delete(state: &mut AppState, req: &Request) -> serde_json::Value {
    let removed = state.events.remove(str_param(&req.params, "id"));
    ok(&req.id, json!({ "removed": removed }))
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    if !matches!(
        req.method.as_str(),
        "events.create" | "events.list" | "events.delete"
    ) {
        return None;
    }
    if !state.session.is_authenticated() {
        return Some(no_profile(&req.id));
    }
    Some(match req.method.as_str() {
        "events.create" => handle_create(state, req),
        "events.list" => handle_list(state, req),
        _ => handle_delete(state, req),
    })
}
