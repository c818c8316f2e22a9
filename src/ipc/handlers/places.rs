use serde_json::json;

use crate::directory::{places_for, PLACE_CATEGORIES};
use crate::ipc::error::ok;
use crate::ipc::helpers::{no_profile, opt_str_param, HandlerErr};
use crate::ipc::types::{AppState, Request};

fn handle_list(state: &mut AppState, req: &Request) -> serde_json::Value {
    // gate already ran, so an authenticated session always has a campus
    let Some(campus) = state.session.campus() else {
        return no_profile(&req.id);
    };

    let category = match opt_str_param(&req.params, "category") {
        Some(c) if !PLACE_CATEGORIES.contains(&c.as_str()) => {
            return HandlerErr::bad_params(format!(
                "category must be one of: {}",
                PLACE_CATEGORIES.join(", ")
            ))
            .response(&req.id);
        }
        other => other,
    };

    let places: Vec<_> = places_for(campus)
        .iter()
        .filter(|p| category.as_deref().map_or(true, |c| p.category == c))
        .collect();
    ok(&req.id, json!({ "places": places }))
}

fn handle_categories(req: &Request) -> serde_json::Value {
    ok(&req.id, json!({ "categories": PLACE_CATEGORIES }))
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    if !matches!(req.method.as_str(), "places.list" | "places.categories") {
        return None;
    }
    if !state.session.is_authenticated() {
        return Some(no_profile(&req.id));
    }
    Some(match req.method.as_str() {
        "places.list" => handle_list(state, req),
        _ => handle_categories(req),
    })
}
