use predicates::str::contains;
use std::fs;

mod common;
use common::{init_db_with_data, setup_test_db, temp_out, tl};

#[test]
fn test_export_json_writes_all_events() {
    let db_path = setup_test_db("export_json");
    init_db_with_data(&db_path);
    let out_file = temp_out("export_json", "json");

    tl()
        .args(["--db", &db_path, "--test", "export", "--format", "json", "--file", &out_file])
        .assert()
        .success()
        .stdout(contains("json export completed"));

    let content = fs::read_to_string(&out_file).expect("read json export");
    let rows: Vec<serde_json::Value> = serde_json::from_str(&content).expect("parse json export");
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["kind"], "shopping");
    assert_eq!(rows[1]["kind"], "exercise");
    assert_eq!(rows[0]["metric"], 15.0);
}

#[test]
fn test_export_csv_has_header_and_rows() {
    let db_path = setup_test_db("export_csv");
    init_db_with_data(&db_path);
    let out_file = temp_out("export_csv", "csv");

    tl()
        .args(["--db", &db_path, "--test", "export", "--file", &out_file])
        .assert()
        .success()
        .stdout(contains("csv export completed"));

    let content = fs::read_to_string(&out_file).expect("read csv export");
    let mut lines = content.lines();
    assert_eq!(
        lines.next().unwrap(),
        "id,kind,created_at,lat,lng,distance_km,duration_min,metric,metric_per_hour,description"
    );
    assert_eq!(lines.count(), 2);
}

#[test]
fn test_export_refuses_to_overwrite_without_force() {
    let db_path = setup_test_db("export_force");
    init_db_with_data(&db_path);
    let out_file = temp_out("export_force", "csv");
    fs::write(&out_file, "existing").unwrap();

    tl()
        .args(["--db", &db_path, "--test", "export", "--file", &out_file])
        .assert()
        .failure()
        .stderr(contains("already exists"));

    tl()
        .args(["--db", &db_path, "--test", "export", "--file", &out_file, "--force"])
        .assert()
        .success();

    assert_ne!(fs::read_to_string(&out_file).unwrap(), "existing");
}

#[test]
fn test_export_empty_store_writes_nothing() {
    let db_path = setup_test_db("export_empty");
    tl()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();
    let out_file = temp_out("export_empty", "json");

    tl()
        .args(["--db", &db_path, "--test", "export", "--format", "json", "--file", &out_file])
        .assert()
        .success()
        .stdout(contains("No events to export."));

    assert!(!std::path::Path::new(&out_file).exists());
}
