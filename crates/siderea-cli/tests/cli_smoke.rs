use std::fs;
use std::process::Command;

use assert_cmd::prelude::*;

const REQUEST: &str = r#"{
    "source_type": "idol",
    "name": "Smoke Test",
    "birth_date": "1990-01-01",
    "birth_country": "United States"
}"#;

#[cfg(unix)]
fn write_stub_bridge(dir: &std::path::Path) -> std::path::PathBuf {
    use std::os::unix::fs::PermissionsExt;

    // Minimal bridge: pull the output directory out of the job JSON and drop
    // a canned wheel artifact into it.
    let script = dir.join("stub-bridge.sh");
    fs::write(
        &script,
        "#!/bin/sh\n\
         payload=$(cat)\n\
         out=$(printf '%s' \"$payload\" | sed -n 's/.*\"output_directory\":\"\\([^\"]*\\)\".*/\\1/p')\n\
         printf '<svg width=\"800\" height=\"800\"><circle r=\"300\"/></svg>' > \"$out/wheel.svg\"\n",
    )
    .expect("write stub bridge");
    let mut perms = fs::metadata(&script).unwrap().permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&script, perms).unwrap();
    script
}

#[cfg(unix)]
#[test]
fn cli_renders_svg_through_the_stub_bridge() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let bridge = write_stub_bridge(tmp.path());

    let request_file = tmp.path().join("request.json");
    fs::write(&request_file, REQUEST).unwrap();
    let out_file = tmp.path().join("chart.svg");

    let exe = assert_cmd::cargo_bin!("siderea-cli");
    Command::new(exe)
        .args([
            "--renderer",
            bridge.to_string_lossy().as_ref(),
            "--out",
            out_file.to_string_lossy().as_ref(),
            request_file.to_string_lossy().as_ref(),
        ])
        .assert()
        .success();

    let svg = fs::read_to_string(&out_file).expect("read svg");
    assert!(svg.contains(r#"xmlns="http://www.w3.org/2000/svg""#));
    assert!(svg.contains(r#"viewBox="0 0 800 800""#));
    assert!(svg.contains("<circle"));
}

#[test]
fn cli_writes_fallback_and_exits_nonzero_when_the_bridge_is_missing() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let request_file = tmp.path().join("request.json");
    fs::write(&request_file, REQUEST).unwrap();

    let exe = assert_cmd::cargo_bin!("siderea-cli");
    let assert = Command::new(exe)
        .args([
            "--renderer",
            "siderea-no-such-bridge",
            request_file.to_string_lossy().as_ref(),
        ])
        .assert()
        .code(1);
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    assert!(stdout.contains("Chart Generation Error"));
    assert!(stdout.starts_with("<svg xmlns="));
}

#[test]
fn cli_rejects_malformed_json_with_usage_exit_code() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let request_file = tmp.path().join("request.json");
    fs::write(&request_file, "{ not json").unwrap();

    let exe = assert_cmd::cargo_bin!("siderea-cli");
    Command::new(exe)
        .arg(request_file.to_string_lossy().as_ref())
        .assert()
        .code(2);
}
