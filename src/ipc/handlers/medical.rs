use serde_json::json;

use crate::ipc::error::ok;
use crate::ipc::helpers::{
    invalid_transition, no_profile, opt_str_param, str_param, HandlerErr,
};
use crate::ipc::types::{AppState, Request};
use crate::model::{EmergencyReportFields, ReportStatus};
use crate::validators::is_not_empty;

fn handle_create(state: &mut AppState, req: &Request) -> serde_json::Value {
    let p = &req.params;
    for key in [
        "patientName",
        "description",
        "location",
        "contactName",
        "contactInfo",
    ] {
        if !is_not_empty(str_param(p, key)) {
            return HandlerErr::bad_params(format!("missing {}", key)).response(&req.id);
        }
    }

    let report = state.medical.create(EmergencyReportFields {
        patient_name: str_param(p, "patientName").to_string(),
        description: str_param(p, "description").to_string(),
        location: str_param(p, "location").to_string(),
        contact_name: str_param(p, "contactName").to_string(),
        contact_info: str_param(p, "contactInfo").to_string(),
        image_url: opt_str_param(p, "imageUrl"),
    });
    ok(&req.id, json!({ "report": report }))
}

fn handle_list(state: &mut AppState, req: &Request) -> serde_json::Value {
    ok(&req.id, json!({ "reports": state.medical.list() }))
}

fn handle_set_status(state: &mut AppState, req: &Request) -> serde_json::Value {
    let p = &req.params;
    let status_s = str_param(p, "status");
    let Some(status) = ReportStatus::parse(status_s) else {
        return HandlerErr::bad_params(format!("unknown status: {}", status_s))
            .response(&req.id);
    };
    match state.medical.set_status(str_param(p, "id"), status) {
        Ok(updated) => ok(&req.id, json!({ "updated": updated })),
        Err(e) => invalid_transition(&req.id, e),
    }
}

fn handle_delete(state: &mut AppState, req: &Request) -> serde_json::Value {
    let removed = state.medical.remove(str_param(&req.params, "id"));
    ok(&req.id, json!({ "removed": removed }))
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    if !matches!(
        req.method.as_str(),
        "medical.create" | "medical.list" | "medical.setStatus" | "medical.delete"
    ) {
        return None;
    }
    if !state.session.is_authenticated() {
        return Some(no_profile(&req.id));
    }
    Some(match req.method.as_str() {
        "medical.create" => handle_create(state, req),
        "medical.list" => handle_list(state, req),
        "medical.setStatus" => handle_set_status(state, req),
        _ => handle_delete(state, req),
    })
}
