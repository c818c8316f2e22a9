use serde_json::json;

use crate::ipc::error::ok;
use crate::ipc::helpers::{no_profile, opt_str_param, str_param, validation_failed};
use crate::ipc::types::{AppState, Request};
use crate::model::HostelComplaintFields;
use crate::validators::{validate_complaint_form, ComplaintFields};

fn handle_create(state: &mut AppState, req: &Request) -> serde_json::Value {
    let p = &req.params;
    let fields = ComplaintFields {
        reg_no: str_param(p, "regNo"),
        block: str_param(p, "block"),
        room_no: str_param(p, "roomNo"),
        name: str_param(p, "name"),
        description: str_param(p, "description"),
    };
    let errors = validate_complaint_form(&fields);
    if !errors.is_empty() {
        return validation_failed(&req.id, &errors);
    }

    let complaint = state.hostel.create(HostelComplaintFields {
        reg_no: fields.reg_no.to_string(),
        block: fields.block.to_string(),
        room_no: fields.room_no.to_string(),
        name: fields.name.to_string(),
        description: fields.description.to_string(),
        image_url: opt_str_param(p, "imageUrl"),
    });
    ok(&req.id, json!({ "complaint": complaint }))
}

fn handle_list(state: &mut AppState, req: &Request) -> serde_json::Value {
    ok(&req.id, json!({ "complaints": state.hostel.list() }))
}

fn handle_resolve(state: &mut AppState, req: &Request) -> serde_json::Value {
    let id = str_param(&req.params, "id");
    // resolve only moves forward, so the transition cannot fail here
    let updated = state.hostel.set_status(id, true).unwrap_or(false);
    ok(&req.id, json!({ "updated": updated }))
}

fn handle_delete(state: &mut AppState, req: &Request) -> serde_json::Value {
    let removed = state.hostel.remove(str_param(&req.params, "id"));
    ok(&req.id, json!({ "removed": removed }))
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    if !matches!(
        req.method.as_str(),
        "hostel.create" | "hostel.list" | "hostel.resolve" | "hostel.delete"
    ) {
        return None;
    }
    if !state.session.is_authenticated() {
        return Some(no_profile(&req.id));
    }
    Some(match req.method.as_str() {
        "hostel.create" => handle_create(state, req),
        "hostel.list" => handle_list(state, req),
        "hostel.resolve" => handle_resolve(state, req),
        _ => handle_delete(state, req),
    })
}
