use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::Path;

const SNAPSHOT: &str = r#"{
    "pals": [
        {"id": "001", "name": "绵羊球", "nameEn": "Woolball", "code": "WoolBall", "breedingPower": 100, "iconUrl": "icons/001.webp", "ignoreCombi": false},
        {"id": "002", "name": "粉猫", "nameEn": "Pinkit", "code": "PinkKit", "breedingPower": 150, "iconUrl": "icons/002.webp", "ignoreCombi": false},
        {"id": "003", "name": "小鸡", "nameEn": "Chickle", "code": "Chickle", "breedingPower": 300, "iconUrl": "icons/003.webp", "ignoreCombi": false},
        {"id": "004", "name": "岩龟", "nameEn": "Boulderback", "code": "RockTortoise", "breedingPower": 500, "iconUrl": "icons/004.webp", "ignoreCombi": false},
        {"id": "005", "name": "天龙", "nameEn": "Skydrake", "code": "SkyDragon", "breedingPower": 900, "iconUrl": "icons/005.webp", "ignoreCombi": false}
    ],
    "uniqueBreedings": [
        {"parent1": "004", "parent2": "003", "child": "005"}
    ],
    "version": "v-test",
    "updatedAt": "2024-01-01T00:00:00Z"
}"#;

fn write_snapshot(dir: &Path) -> std::path::PathBuf {
    let path = dir.join("pals.json");
    fs::write(&path, SNAPSHOT).unwrap();
    path
}

#[allow(deprecated)]
fn palpath(data: &Path) -> Command {
    let mut cmd = Command::cargo_bin("palpath").expect("binary");
    cmd.arg("--data").arg(data).arg("--json");
    cmd
}

#[test]
fn resolve_emits_child_json() {
    let temp = tempfile::tempdir().unwrap();
    let data = write_snapshot(temp.path());

    // target floor((100+500+1)/2) = 300, exactly Chickle's power.
    let output = palpath(&data)
        .args(["resolve", "001", "004"])
        .output()
        .expect("command run");
    assert!(output.status.success());

    let body: Value = serde_json::from_slice(&output.stdout).expect("valid json");
    assert_eq!(body["child"], "003");
}

#[test]
fn paths_emits_routes_json() {
    let temp = tempfile::tempdir().unwrap();
    let data = write_snapshot(temp.path());

    let output = palpath(&data)
        .args(["paths", "001", "005"])
        .output()
        .expect("command run");
    assert!(output.status.success());

    let body: Value = serde_json::from_slice(&output.stdout).expect("valid json");
    let paths = body["paths"].as_array().expect("paths array");
    assert_eq!(paths.len(), 2);
    for path in paths {
        assert_eq!(path["depth"], 2);
        assert_eq!(path["steps"].as_array().unwrap().len(), 2);
    }
}

#[test]
fn unknown_id_fails_at_the_cli_layer() {
    let temp = tempfile::tempdir().unwrap();
    let data = write_snapshot(temp.path());

    let output = palpath(&data)
        .args(["resolve", "001", "999"])
        .output()
        .expect("command run");
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Unknown pal id: 999"));
}

#[test]
fn combos_lists_the_curated_pair() {
    let temp = tempfile::tempdir().unwrap();
    let data = write_snapshot(temp.path());

    let output = palpath(&data)
        .args(["combos", "005"])
        .output()
        .expect("command run");
    assert!(output.status.success());

    let body: Value = serde_json::from_slice(&output.stdout).expect("valid json");
    let pairs = body.as_array().expect("pairs array");
    assert_eq!(pairs.len(), 1);
    assert_eq!(pairs[0]["parent1"], "003");
    assert_eq!(pairs[0]["parent2"], "004");
}
