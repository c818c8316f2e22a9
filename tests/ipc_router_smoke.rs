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

fn read_response(reader: &mut BufReader<ChildStdout>) -> serde_json::Value {
    let mut line = String::new();
    reader.read_line(&mut line).expect("read response line");
    serde_json::from_str(line.trim()).expect("parse response json")
}

#[test]
fn health_works_without_any_setup() {
    let (_child, mut stdin, mut reader) = spawn_sidecar();

    writeln!(
        stdin,
        "{}",
        json!({ "id": "h1", "method": "health", "params": {} })
    )
    .expect("write");
    stdin.flush().expect("flush");

    let resp = read_response(&mut reader);
    assert_eq!(resp["ok"].as_bool(), Some(true));
    assert!(resp["result"]["version"].as_str().is_some());
}

#[test]
fn unknown_method_answers_not_implemented() {
    let (_child, mut stdin, mut reader) = spawn_sidecar();

    writeln!(
        stdin,
        "{}",
        json!({ "id": "u1", "method": "laundry.schedule", "params": {} })
    )
    .expect("write");
    stdin.flush().expect("flush");

    let resp = read_response(&mut reader);
    assert_eq!(resp["ok"].as_bool(), Some(false));
    assert_eq!(resp["error"]["code"].as_str(), Some("not_implemented"));
    assert!(resp["error"]["message"]
        .as_str()
        .expect("message")
        .contains("laundry.schedule"));
}

#[test]
fn malformed_line_gets_bad_json_and_the_loop_survives() {
    let (_child, mut stdin, mut reader) = spawn_sidecar();

    writeln!(stdin, "this is not json").expect("write");
    stdin.flush().expect("flush");
    let resp = read_response(&mut reader);
    assert_eq!(resp["ok"].as_bool(), Some(false));
    assert_eq!(resp["error"]["code"].as_str(), Some("bad_json"));

    // a JSON string is valid JSON but not a request; serde quotes the
    // offending token in its message, and the reply must still parse
    writeln!(stdin, "\"abc\"").expect("write");
    stdin.flush().expect("flush");
    let resp = read_response(&mut reader);
    assert_eq!(resp["ok"].as_bool(), Some(false));
    assert_eq!(resp["error"]["code"].as_str(), Some("bad_json"));
    assert!(resp["error"]["message"].as_str().is_some());

    // the daemon keeps serving after a bad line
    writeln!(
        stdin,
        "{}",
        json!({ "id": "h2", "method": "health", "params": {} })
    )
    .expect("write");
    stdin.flush().expect("flush");
    let resp = read_response(&mut reader);
    assert_eq!(resp["ok"].as_bool(), Some(true));
    assert_eq!(resp["id"].as_str(), Some("h2"));
}

#[test]
fn blank_lines_are_skipped() {
    let (_child, mut stdin, mut reader) = spawn_sidecar();

    writeln!(stdin).expect("write blank");
    writeln!(
        stdin,
        "{}",
        json!({ "id": "h3", "method": "health", "params": {} })
    )
    .expect("write");
    stdin.flush().expect("flush");

    let resp = read_response(&mut reader);
    assert_eq!(resp["id"].as_str(), Some("h3"));
}
