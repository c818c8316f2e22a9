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

#[test]
fn places_follow_the_session_campus() {
    let (_child, mut stdin, mut reader) = spawn_sidecar();
    request_ok(
        &mut stdin,
        &mut reader,
        "auth",
        "profile.select",
        json!({ "role": "student", "campus": "Vellore" }),
    );

    let listing = request_ok(&mut stdin, &mut reader, "1", "places.list", json!({}));
    let places = listing["places"].as_array().expect("places");
    assert!(!places.is_empty());
    assert!(places.iter().all(|p| p["id"]
        .as_str()
        .expect("id")
        .starts_with("vlr-")));

    // switching campus switches the directory
    request_ok(
        &mut stdin,
        &mut reader,
        "2",
        "profile.select",
        json!({ "role": "student", "campus": "Bhopal" }),
    );
    let listing = request_ok(&mut stdin, &mut reader, "3", "places.list", json!({}));
    let places = listing["places"].as_array().expect("places");
    assert!(places.iter().all(|p| p["id"]
        .as_str()
        .expect("id")
        .starts_with("bpl-")));
}

#[test]
fn category_filter_and_enum() {
    let (_child, mut stdin, mut reader) = spawn_sidecar();
    request_ok(
        &mut stdin,
        &mut reader,
        "auth",
        "profile.select",
        json!({ "role": "faculty", "campus": "Chennai" }),
    );

    let cats = request_ok(&mut stdin, &mut reader, "1", "places.categories", json!({}));
    assert_eq!(
        cats["categories"],
        json!(["cafe", "restaurant", "shopping", "convenience"])
    );

    let listing = request_ok(
        &mut stdin,
        &mut reader,
        "2",
        "places.list",
        json!({ "category": "cafe" }),
    );
    let places = listing["places"].as_array().expect("places");
    assert!(!places.is_empty());
    assert!(places.iter().all(|p| p["category"].as_str() == Some("cafe")));

    let resp = request(
        &mut stdin,
        &mut reader,
        "3",
        "places.list",
        json!({ "category": "arcade" }),
    );
    assert_eq!(resp["error"]["code"].as_str(), Some("bad_params"));
}

#[test]
fn places_require_a_session() {
    let (_child, mut stdin, mut reader) = spawn_sidecar();
    let resp = request(&mut stdin, &mut reader, "1", "places.list", json!({}));
    assert_eq!(resp["error"]["code"].as_str(), Some("no_profile"));
}
