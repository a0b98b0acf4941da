#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn tl() -> Command {
    cargo_bin_cmd!("triplogger")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_triplogger.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Add one shopping event through the CLI
pub fn add_shopping(db_path: &str, distance: &str, cost: &str) {
    tl()
        .args([
            "--db", db_path, "--test", "add", "shopping", "--lat", "10", "--lng", "20",
            "--distance", distance, "--duration", "30", "--cost", cost,
        ])
        .assert()
        .success();
}

/// Add one exercise event through the CLI
pub fn add_exercise(db_path: &str, distance: &str, calories: &str) {
    tl()
        .args([
            "--db", db_path, "--test", "add", "exercise", "--lat", "-5", "--lng", "7",
            "--distance", distance, "--duration", "60", "--calories", calories,
        ])
        .assert()
        .success();
}

/// Initialize DB and add a small dataset useful for many tests
pub fn init_db_with_data(db_path: &str) {
    tl()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    add_shopping(db_path, "5", "15");
    add_exercise(db_path, "3", "400");
}
