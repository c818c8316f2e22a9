use serde_json::json;
use std::io::{BufRead, BufReader, Write};
use std::process::{Child, ChildStdin, ChildStdout, Command, Stdio};

fn spawn_sidecar() -> (Child, ChildStdin, BufReader<ChildStdout>) {
    let exe = env!("CARGO_BIN_EXE_nexusd");
    let mut child = Command::new(exe)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .expect("spawn nexusd");
    let stdin = child.stdin.take().expect("child stdin");
    let stdout = child.stdout.take().expect("child stdout");
    (child, stdin, BufReader::new(stdout))
}

fn request(
    stdin: &mut ChildStdin,
    reader: &mut BufReader<ChildStdout>,
    id: &str,
    method: &str,
    params: serde_json::Value,
) -> serde_json::Value {
    let payload = json!({
        "id": id,
        "method": method,
        "params": params,
    });
    writeln!(stdin, "{}", payload).expect("write request");
    stdin.flush().expect("flush request");

    let mut line = String::new();
    reader.read_line(&mut line).expect("read response line");
    assert!(!line.trim().is_empty(), "empty response for {}", method);
    let value: serde_json::Value = serde_json::from_str(line.trim()).expect("parse response json");
    assert_eq!(value.get("id").and_then(|v| v.as_str()), Some(id));
    value
}

fn request_ok(
    stdin: &mut ChildStdin,
    reader: &mut BufReader<ChildStdout>,
    id: &str,
    method: &str,
    params: serde_json::Value,
) -> serde_json::Value {
    let value = request(stdin, reader, id, method, params);
    assert!(
        value.get("ok").and_then(|v| v.as_bool()).unwrap_or(false),
        "{} failed: {}",
        method,
        value
    );
    value.get("result").cloned().unwrap_or_else(|| json!({}))
}

fn sign_in(stdin: &mut ChildStdin, reader: &mut BufReader<ChildStdout>) {
    request_ok(
        stdin,
        reader,
        "auth",
        "profile.select",
        json!({ "role": "student", "campus": "Chennai" }),
    );
}

#[test]
fn mess_validator_is_a_superset_of_the_complaint_validator() {
    let (_child, mut stdin, mut reader) = spawn_sidecar();
    sign_in(&mut stdin, &mut reader);

    // all base fields bad AND both selections missing
    let resp = request(
        &mut stdin,
        &mut reader,
        "1",
        "mess.create",
        json!({
            "regNo": "bad",
            "block": "a",
            "roomNo": "x",
            "name": "",
            "description": "",
            "mess": "",
            "mealType": "",
        }),
    );
    assert_eq!(resp["error"]["code"].as_str(), Some("validation_failed"));
    let fields = resp["error"]["details"]["fields"]
        .as_object()
        .expect("fields map");
    assert_eq!(fields.len(), 7);
    assert_eq!(
        fields["mess"].as_str(),
        Some("Mess selection is required")
    );
    assert_eq!(fields["mealType"].as_str(), Some("Meal type is required"));
}

#[test]
fn unknown_mess_and_meal_choices_are_rejected() {
    let (_child, mut stdin, mut reader) = spawn_sidecar();
    sign_in(&mut stdin, &mut reader);

    let resp = request(
        &mut stdin,
        &mut reader,
        "1",
        "mess.create",
        json!({
            "regNo": "23BCE1701",
            "block": "B",
            "roomNo": "210",
            "name": "Test Student",
            "description": "stale food",
            "mess": "Paradise",
            "mealType": "Midnight",
        }),
    );
    assert_eq!(resp["error"]["code"].as_str(), Some("validation_failed"));
    let fields = &resp["error"]["details"]["fields"];
    assert!(fields["mess"]
        .as_str()
        .expect("mess message")
        .contains("SRRC"));
    assert!(fields["mealType"]
        .as_str()
        .expect("mealType message")
        .contains("Veg"));
}

#[test]
fn valid_mess_complaint_round_trips() {
    let (_child, mut stdin, mut reader) = spawn_sidecar();
    sign_in(&mut stdin, &mut reader);

    let created = request_ok(
        &mut stdin,
        &mut reader,
        "1",
        "mess.create",
        json!({
            "regNo": "23BCE1701",
            "block": "B",
            "roomNo": "210",
            "name": "Test Student",
            "description": "stale food at dinner",
            "mess": "Shakthi",
            "mealType": "Non-Veg",
        }),
    );
    let complaint = &created["complaint"];
    assert_eq!(complaint["mess"].as_str(), Some("Shakthi"));
    assert_eq!(complaint["mealType"].as_str(), Some("Non-Veg"));
    assert_eq!(complaint["resolved"].as_bool(), Some(false));
    let id = complaint["id"].as_str().expect("id").to_string();

    let updated = request_ok(
        &mut stdin,
        &mut reader,
        "2",
        "mess.resolve",
        json!({ "id": id }),
    );
    assert_eq!(updated["updated"].as_bool(), Some(true));

    let listing = request_ok(&mut stdin, &mut reader, "3", "mess.list", json!({}));
    assert_eq!(listing["complaints"][0]["resolved"].as_bool(), Some(true));
}
