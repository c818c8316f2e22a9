use serde_json::json;

use crate::ipc::error::{err, ok};
use crate::ipc::helpers::{no_profile, opt_str_param, str_param, HandlerErr};
use crate::ipc::types::{AppState, Request};
use crate::model::{ItemStatus, LostFoundItem, LostFoundItemFields};
use crate::validators::is_not_empty;

const KINDS: &[&str] = &["lost", "found"];

fn handle_create(state: &mut AppState, req: &Request) -> serde_json::Value {
    let p = &req.params;
    let kind = str_param(p, "kind");
    if !KINDS.contains(&kind) {
        return HandlerErr::bad_params(format!("kind must be one of: {}", KINDS.join(", ")))
            .response(&req.id);
    }
    for key in ["title", "description", "location", "contactName", "contactInfo"] {
        if !is_not_empty(str_param(p, key)) {
            return HandlerErr::bad_params(format!("missing {}", key)).response(&req.id);
        }
    }

    let item = state.lost_found.create(LostFoundItemFields {
        kind: kind.to_string(),
        title: str_param(p, "title").to_string(),
        description: str_param(p, "description").to_string(),
        location: str_param(p, "location").to_string(),
        contact_name: str_param(p, "contactName").to_string(),
        contact_info: str_param(p, "contactInfo").to_string(),
        image_url: opt_str_param(p, "imageUrl"),
    });
    ok(&req.id, json!({ "item": item }))
}

fn matches_search(item: &LostFoundItem, needle: &str) -> bool {
    let needle = needle.to_lowercase();
    [&item.title, &item.description, &item.location]
        .iter()
        .any(|f| f.to_lowercase().contains(&needle))
}

fn handle_list(state: &mut AppState, req: &Request) -> serde_json::Value {
    let p = &req.params;
    let search = opt_str_param(p, "search");
    let kind = opt_str_param(p, "kind");
    let status = match opt_str_param(p, "status") {
        Some(s) => match ItemStatus::parse(&s) {
            Some(st) => Some(st),
            None => {
                return HandlerErr::bad_params(format!("unknown status: {}", s))
                    .response(&req.id);
            }
        },
        None => None,
    };

    let items = state.lost_found.list_where(|item| {
        search.as_deref().map_or(true, |s| matches_search(item, s))
            && kind.as_deref().map_or(true, |k| item.kind == k)
            && status.map_or(true, |st| item.status == st)
    });
    ok(&req.id, json!({ "items": items }))
}

fn handle_set_status(state: &mut AppState, req: &Request) -> serde_json::Value {
    let p = &req.params;
    let status_s = str_param(p, "status");
    let Some(status) = ItemStatus::parse(status_s) else {
        return err(
            &req.id,
            "bad_params",
            format!("unknown status: {}", status_s),
            None,
        );
    };
    // both directions are legal for items, so the transition cannot fail
    let updated = state
        .lost_found
        .set_status(str_param(p, "id"), status)
        .unwrap_or(false);
    ok(&req.id, json!({ "updated": updated }))
}

fn handle_delete(state: &mut AppState, req: &Request) -> serde_json::Value {
    let removed = state.lost_found.remove(str_param(&req.params, "id"));
    ok(&req.id, json!({ "removed": removed }))
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    if !matches!(
        req.method.as_str(),
        "lostfound.create" | "lostfound.list" | "lostfound.setStatus" | "lostfound.delete"
    ) {
        return None;
    }
    if !state.session.is_authenticated() {
        return Some(no_profile(&req.id));
    }
    Some(match req.method.as_str() {
        "lostfound.create" => handle_create(state, req),
        "lostfound.list" => handle_list(state, req),
        "lostfound.setStatus" => handle_set_status(state, req),
        _ => handle_delete(state, req),
    })
}
