use predicates::str::contains;

mod common;
use common::{add_shopping, setup_test_db, tl};

fn setup_three(db_path: &str) {
    tl()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    // insertion order: 12.5, 3.5, 7.5 km
    add_shopping(db_path, "12.5", "1");
    add_shopping(db_path, "3.5", "2");
    add_shopping(db_path, "7.5", "3");
}

/// Positions of the three distance cells in the rendered list
fn distance_positions(stdout: &str) -> (usize, usize, usize) {
    (
        stdout.find("3.5").expect("3.5 row"),
        stdout.find("7.5").expect("7.5 row"),
        stdout.find("12.5").expect("12.5 row"),
    )
}

fn list_stdout(db_path: &str) -> String {
    let out = tl()
        .args(["--db", db_path, "--test", "list"])
        .output()
        .expect("run list");
    assert!(out.status.success());
    String::from_utf8(out.stdout).expect("utf8 stdout")
}

#[test]
fn test_first_sort_is_ascending() {
    let db_path = setup_test_db("sort_first");
    setup_three(&db_path);

    tl()
        .args(["--db", &db_path, "--test", "sort", "distance"])
        .assert()
        .success()
        .stdout(contains("Sorted by distance (ascending)"));

    let (p35, p75, p125) = distance_positions(&list_stdout(&db_path));
    assert!(p35 < p75 && p75 < p125, "expected 3.5 < 7.5 < 12.5 order");
}

#[test]
fn test_second_sort_toggles_to_descending() {
    let db_path = setup_test_db("sort_toggle");
    setup_three(&db_path);

    tl()
        .args(["--db", &db_path, "--test", "sort", "distance"])
        .assert()
        .success();

    tl()
        .args(["--db", &db_path, "--test", "sort", "distance"])
        .assert()
        .success()
        .stdout(contains("Sorted by distance (descending)"));

    let (p35, p75, p125) = distance_positions(&list_stdout(&db_path));
    assert!(p125 < p75 && p75 < p35, "expected 12.5 < 7.5 < 3.5 order");
}

#[test]
fn test_sorting_by_another_field_starts_fresh() {
    let db_path = setup_test_db("sort_other_field");
    setup_three(&db_path);

    // costs were inserted ascending (1, 2, 3) so the first cost sort
    // detects ascending and flips to descending
    tl()
        .args(["--db", &db_path, "--test", "sort", "cost"])
        .assert()
        .success()
        .stdout(contains("Sorted by cost (descending)"));
}

#[test]
fn test_sort_on_empty_store_is_a_no_op() {
    let db_path = setup_test_db("sort_empty");
    tl()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    tl()
        .args(["--db", &db_path, "--test", "sort", "distance"])
        .assert()
        .success()
        .stdout(contains("No events to sort."));
}
