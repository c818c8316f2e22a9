use super::handlers;
use super::types::{AppState, Request};
use crate::ipc::error::err;

pub fn handle_request(state: &mut AppState, req: Request) -> serde_json::Value {
    tracing::debug!(method = %req.method, id = %req.id, "dispatch");

    if let Some(resp) = handlers::core::try_handle(state, &req) {
        return resp;
    }
    if let Some(resp) = handlers::profile::try_handle(state, &req) {
        return resp;
    }
    if let Some(resp) = handlers::hostel::try_handle(state, &req) {
        return resp;
    }
    if let Some(resp) = handlers::mess::try_handle(state, &req) {
        return resp;
    }
    if let Some(resp) = handlers::lostfound::try_handle(state, &req) {
        return resp;
    }
    if let Some(resp) = handlers::cab::try_handle(state, &req) {
        return resp;
    }
    if let Some(resp) = handlers::notes::try_handle(state, &req) {
        return resp;
    }
    if let Some(resp) = handlers::events::try_handle(state, &req) {
        return resp;
    }
    if let Some(resp) = handlers::animals::try_handle(state, &req) {
        return resp;
    }
    if let Some(resp) = handlers::medical::try_handle(state, &req) {
        return resp;
    }
    if let Some(resp) = handlers::places::try_handle(state, &req) {
        return resp;
    }

    err(
        &req.id,
        "not_implemented",
        format!("unknown method: {}", req.method),
        None,
    )
}
