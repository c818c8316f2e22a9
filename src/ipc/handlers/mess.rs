use serde_json::json;

use crate::ipc::error::ok;
use crate::ipc::helpers::{no_profile, opt_str_param, str_param, validation_failed};
use crate::ipc::types::{AppState, Request};
use crate::model::MessComplaintFields as MessRecordFields;
use crate::validators::{validate_mess_complaint_form, ComplaintFields, MessComplaintFields};

fn handle_create(state: &mut AppState, req: &Request) -> serde_json::Value {
    let p = &req.params;
    let fields = MessComplaintFields {
        base: ComplaintFields {
            reg_no: str_param(p, "regNo"),
            block: str_param(p, "block"),
            room_no: str_param(p, "roomNo"),
            name: str_param(p, "name"),
            description: str_param(p, "description"),
        },
        mess: str_param(p, "mess"),
        meal_type: str_param(p, "mealType"),
    };
    let errors = validate_mess_complaint_form(&fields);
    if !errors.is_empty() {
        return validation_failed(&req.id, &errors);
    }

    let complaint = state.mess.create(MessRecordFields {
        reg_no: fields.base.reg_no.to_string(),
        block: fields.base.block.to_string(),
        room_no: fields.base.room_no.to_string(),
        name: fields.base.name.to_string(),
        description: fields.base.description.to_string(),
        mess: fields.mess.to_string(),
        meal_type: fields.meal_type.to_string(),
        image_url: opt_str_param(p, "imageUrl"),
    });
    ok(&req.id, json!({ "complaint": complaint }))
}

fn handle_list(state: &mut AppState, req: &Request) -> serde_json::Value {
    ok(&req.id, json!({ "complaints": state.mess.list() }))
}

fn handle_resolve(state: &mut AppState, req: &Request) -> serde_json::Value {
    let id = str_param(&req.params, "id");
    let updated = state.mess.set_status(id, true).unwrap_or(false);
    ok(&req.id, json!({ "updated": updated }))
}

fn handle_delete(state: &mut AppState, req: &Request) -> serde_json::Value {
    let removed = state.mess.remove(str_param(&req.params, "id"));
    ok(&req.id, json!({ "removed": removed }))
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    if !matches!(
        req.method.as_str(),
        "mess.create" | "mess.list" | "mess.resolve" | "mess.delete"
    ) {
        return None;
    }
    if !state.session.is_authenticated() {
        return Some(no_profile(&req.id));
    }
    Some(match req.method.as_str() {
        "mess.create" => handle_create(state, req),
        "mess.list" => handle_list(state, req),
        "mess.resolve" => handle_resolve(state, req),
        _ => handle_delete(state, req),
    })
}
