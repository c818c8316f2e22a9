use serde_json::json;

use crate::ipc::error::ok;
use crate::ipc::helpers::{no_profile, opt_str_param, str_param, HandlerErr};
use crate::ipc::types::{AppState, Request};
use crate::model::{AcademicNote, AcademicNoteFields};
use crate::validators::is_not_empty;

const FILE_TYPES: &[&str] = &["pdf", "doc", "ppt", "img"];

fn handle_create(state: &mut AppState, req: &Request) -> serde_json::Value {
    let p = &req.params;
    for key in ["title", "subject", "semester", "uploadedBy"] {
        if !is_not_empty(str_param(p, key)) {
            return HandlerErr::bad_params(format!("missing {}", key)).response(&req.id);
        }
    }
    let file_type = str_param(p, "fileType");
    if !FILE_TYPES.contains(&file_type) {
        return HandlerErr::bad_params(format!(
            "fileType must be one of: {}",
            FILE_TYPES.join(", ")
        ))
        .response(&req.id);
    }

    let note = state.notes.create(AcademicNoteFields {
        title: str_param(p, "title").to_string(),
        subject: str_param(p, "subject").to_string(),
        semester: str_param(p, "semester").to_string(),
        uploaded_by: str_param(p, "uploadedBy").to_string(),
        file_type: file_type.to_string(),
        description: opt_str_param(p, "description"),
        download_url: opt_str_param(p, "downloadUrl"),
    });
    ok(&req.id, json!({ "note": note }))
}

fn matches_search(note: &AcademicNote, needle: &str) -> bool {
    let needle = needle.to_lowercase();
    let mut haystacks = vec![&note.title, &note.subject];
    if let Some(description) = &note.description {
        haystacks.push(description);
    }
    haystacks.iter().any(|f| f.to_lowercase().contains(&needle))
}

fn handle_list(state: &mut AppState, req: &Request) -> serde_json::Value {
    let p = &req.params;
    let search = opt_str_param(p, "search");
    let subject = opt_str_param(p, "subject");
    let semester = opt_str_param(p, "semester");
    let file_type = opt_str_param(p, "fileType");

    let notes = state.notes.list_where(|n| {
        search.as_deref().map_or(true, |s| matches_search(n, s))
            && subject.as_deref().map_or(true, |s| n.subject == s)
            && semester.as_deref().map_or(true, |s| n.semester == s)
            && file_type.as_deref().map_or(true, |s| n.file_type == s)
    });
    ok(&req.id, json!({ "notes": notes }))
}

fn handle_delete(state: &mut AppState, req: &Request) -> serde_json::Value {
    let removed = state.notes.remove(str_param(&req.params, "id"));
    ok(&req.id, json!({ "removed": removed }))
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    if !matches!(
        req.method.as_str(),
        "notes.create" | "notes.list" | "notes.delete"
    ) {
        return None;
    }
    if !state.session.is_authenticated() {
        return Some(no_profile(&req.id));
    }
    Some(match req.method.as_str() {
        "notes.create" => handle_create(state, req),
        "notes.list" => handle_list(state, req),
        _ => handle_delete(state, req),
    })
}
