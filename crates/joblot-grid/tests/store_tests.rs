// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::Result;
use joblot_app::{CellValue, Field, Priority, Row, Status};
use joblot_grid::{DEFAULT_MAX_ROWS, SheetStore, load_rows, seed_rows};
use joblot_testkit::{SheetFaker, seed_file};

#[test]
fn seed_rows_match_the_sample_sheet() {
    let rows = seed_rows();
    assert_eq!(rows.len(), 5);
    assert_eq!(
        rows[0].job_request,
        "Launch social media campaign for product launch"
    );
    assert_eq!(rows[0].status, Status::InProcess);
    assert_eq!(rows[3].status, Status::Blocked);
    assert_eq!(rows[4].priority, Priority::High);
}

#[test]
fn reads_past_length_answer_defaults() {
    let store = SheetStore::with_seed_rows(DEFAULT_MAX_ROWS);
    assert_eq!(store.len(), 5);
    assert!(store.is_padding(40));
    assert_eq!(store.get(40, Field::JobRequest), CellValue::Text(String::new()));
    assert_eq!(
        store.get(40, Field::Status),
        CellValue::Status(Status::NeedToStart)
    );
    assert_eq!(store.get(40, Field::EstValue), CellValue::Number(0.0));
}

#[test]
fn grow_on_write_materializes_intervening_defaults() {
    let mut store = SheetStore::with_seed_rows(DEFAULT_MAX_ROWS);
    store.set(8, Field::Assigned, "X");

    assert_eq!(store.len(), 9);
    for index in 5..8 {
        assert_eq!(store.row(index), Row::default());
    }
    let row = store.row(8);
    assert_eq!(row.assigned, "X");
    assert_eq!(
        Row {
            assigned: String::new(),
            ..row
        },
        Row::default()
    );
}

#[test]
fn editing_the_first_padding_row_grows_length_by_one() {
    let mut store = SheetStore::with_seed_rows(DEFAULT_MAX_ROWS);
    let before = store.snapshot();

    store.set(5, Field::Assigned, "X");
    assert_eq!(store.len(), 6);
    assert_eq!(store.row(5).assigned, "X");
    assert_eq!(store.snapshot()[..5], before[..]);
}

#[test]
fn set_changes_only_the_targeted_field() {
    let mut store = SheetStore::with_seed_rows(DEFAULT_MAX_ROWS);
    let before = store.row(2);

    store.set(2, Field::DueDate, "01-01-2025");

    let after = store.row(2);
    assert_eq!(after.due_date, "01-01-2025");
    assert_eq!(after.job_request, before.job_request);
    assert_eq!(after.submitter, before.submitter);
    assert_eq!(after.status, before.status);
    assert_eq!(after.est_value, before.est_value);
}

#[test]
fn set_is_idempotent() {
    let mut store = SheetStore::new(DEFAULT_MAX_ROWS);
    store.set(3, Field::Url, "blog.legacy.com");
    let first = store.snapshot();
    store.set(3, Field::Url, "blog.legacy.com");
    assert_eq!(store.snapshot(), first);
}

#[test]
fn numeric_field_stores_coerced_values() {
    let mut store = SheetStore::new(DEFAULT_MAX_ROWS);
    store.set(0, Field::EstValue, "910000");
    assert_eq!(store.get(0, Field::EstValue), CellValue::Number(910_000.0));

    store.set(0, Field::EstValue, "not a number");
    let CellValue::Number(value) = store.get(0, Field::EstValue) else {
        panic!("est_value must stay numeric");
    };
    assert!(value.is_nan());
}

#[test]
fn from_rows_rejects_overlong_seed() {
    let rows = SheetFaker::new(11).rows(6);
    let error = SheetStore::from_rows(rows, 5).expect_err("six rows into a five-row grid");
    assert!(error.to_string().contains("at most 5"));
}

#[test]
fn seed_file_round_trips() -> Result<()> {
    let rows = SheetFaker::new(42).rows(8);
    let (_dir, path) = seed_file(&rows)?;

    let loaded = load_rows(&path, DEFAULT_MAX_ROWS)?;
    assert_eq!(loaded, rows);
    Ok(())
}

#[test]
fn seed_file_beyond_capacity_is_rejected() -> Result<()> {
    let rows = SheetFaker::new(42).rows(8);
    let (_dir, path) = seed_file(&rows)?;

    let error = load_rows(&path, 4).expect_err("eight rows into a four-row grid");
    assert!(error.to_string().contains("at most 4"));
    Ok(())
}

#[test]
fn malformed_seed_file_reports_context() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("seed.json");
    std::fs::write(&path, "{ not json ]")?;

    let error = load_rows(&path, DEFAULT_MAX_ROWS).expect_err("malformed file");
    assert!(format!("{error:#}").contains("parse seed file"));
    Ok(())
}
