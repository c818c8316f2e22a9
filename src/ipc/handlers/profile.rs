use serde_json::json;

use crate::ipc::error::{err, ok};
use crate::ipc::helpers::{no_profile, str_param};
use crate::ipc::types::{AppState, Request};
use crate::nav::{visible_nav_items, MASTER_NAV};
use crate::session::{is_route_accessible, Campus, Role, SessionError};

const MISSING_SELECTION_MSG: &str = "Please select both profile type and campus";

fn session_json(state: &AppState) -> serde_json::Value {
    json!({
        "role": state.session.role().map(|r| r.as_str()),
        "campus": state.session.campus().map(|c| c.as_str()),
        "isAuthenticated": state.session.is_authenticated(),
    })
}

fn handle_profile_select(state: &mut AppState, req: &Request) -> serde_json::Value {
    let role_s = str_param(&req.params, "role");
    if role_s.is_empty() {
        return err(&req.id, "missing_selection", MISSING_SELECTION_MSG, None);
    }
    let Some(role) = Role::parse(role_s) else {
        return err(
            &req.id,
            "bad_params",
            format!("unknown role: {}", role_s),
            None,
        );
    };

    let campus_s = str_param(&req.params, "campus");
    let campus = if campus_s.is_empty() {
        None
    } else {
        match Campus::parse(campus_s) {
            Some(c) => Some(c),
            None => {
                return err(
                    &req.id,
                    "bad_params",
                    format!("unknown campus: {}", campus_s),
                    None,
                );
            }
        }
    };

    match state.session.select_profile(role, campus) {
        Ok(()) => {
            tracing::info!(role = role.as_str(), "profile committed");
            ok(&req.id, session_json(state))
        }
        Err(SessionError::MissingCampus) => {
            err(&req.id, "missing_selection", MISSING_SELECTION_MSG, None)
        }
    }
}

fn handle_profile_get(state: &mut AppState, req: &Request) -> serde_json::Value {
    ok(&req.id, session_json(state))
}

fn handle_routes_check(state: &mut AppState, req: &Request) -> serde_json::Value {
    let path = str_param(&req.params, "path");
    ok(
        &req.id,
        json!({ "accessible": is_route_accessible(&state.session, path) }),
    )
}

fn handle_nav_items(state: &mut AppState, req: &Request) -> serde_json::Value {
    let Some(role) = state.session.role() else {
        return no_profile(&req.id);
    };
    let all: Vec<_> = MASTER_NAV.iter().collect();
    let items: Vec<_> = visible_nav_items(&all, role)
        .into_iter()
        .map(|e| json!({ "label": e.label, "path": e.path }))
        .collect();
    ok(&req.id, json!({ "items": items }))
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "profile.select" => Some(handle_profile_select(state, req)),
        "profile.get" => Some(handle_profile_get(state, req)),
        "routes.check" => Some(handle_routes_check(state, req)),
        "nav.items" => Some(handle_nav_items(state, req)),
        _ => None,
    }
}
