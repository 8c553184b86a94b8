// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result, bail};
use joblot_app::{CellValue, Field, Priority, Row, Status};
use std::fs;
use std::path::Path;

pub const APP_NAME: &str = "joblot";
pub const DEFAULT_MAX_ROWS: usize = 100;

/// The grid data store: an index-addressable row arena. Rows exist only up
/// to the highest index ever written; reads past the end produce defaults so
/// the view can treat every slot uniformly. Nothing here persists.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetStore {
    rows: Vec<Row>,
    max_rows: usize,
}

impl SheetStore {
    pub fn new(max_rows: usize) -> Self {
        Self {
            rows: Vec::new(),
            max_rows,
        }
    }

    /// Store pre-populated with the built-in sample rows.
    pub fn with_seed_rows(max_rows: usize) -> Self {
        Self {
            rows: seed_rows(),
            max_rows,
        }
    }

    pub fn from_rows(rows: Vec<Row>, max_rows: usize) -> Result<Self> {
        if rows.len() > max_rows {
            bail!(
                "seed data has {} rows but the grid holds at most {max_rows}",
                rows.len()
            );
        }
        Ok(Self { rows, max_rows })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub const fn max_rows(&self) -> usize {
        self.max_rows
    }

    /// True for row slots past the populated range.
    pub fn is_padding(&self, row: usize) -> bool {
        row >= self.rows.len()
    }

    /// Field read for any slot index; padding slots answer with the field
    /// default instead of an error.
    pub fn get(&self, row: usize, field: Field) -> CellValue {
        match self.rows.get(row) {
            Some(record) => record.value(field),
            None => Row::default().value(field),
        }
    }

    pub fn row(&self, index: usize) -> Row {
        self.rows.get(index).cloned().unwrap_or_default()
    }

    /// The single mutation: writes the field, materializing default rows up
    /// to `row` first when the target lies past the current length. Callers
    /// keep writes under `max_rows`; the store does not re-check.
    pub fn set(&mut self, row: usize, field: Field, input: &str) {
        while self.rows.len() <= row {
            self.rows.push(Row::default());
        }
        self.rows[row].apply_text(field, input);
    }

    pub fn snapshot(&self) -> Vec<Row> {
        self.rows.clone()
    }
}

/// The five sample job requests the sheet starts with.
pub fn seed_rows() -> Vec<Row> {
    vec![
        Row {
            job_request: "Launch social media campaign for product launch".to_owned(),
            submitted: "15-11-2024".to_owned(),
            status: Status::InProcess,
            submitter: "Aisha Patel".to_owned(),
            url: "www.aishapatel.com".to_owned(),
            assigned: "Sophie Choudhury".to_owned(),
            priority: Priority::Medium,
            due_date: "20-11-2024".to_owned(),
            est_value: 6_200_000.0,
        },
        Row {
            job_request: "Website redesign mock-ups for Q4 pitch deck".to_owned(),
            submitted: "02-10-2024".to_owned(),
            status: Status::NeedToStart,
            submitter: "Arjun Mehta".to_owned(),
            url: "www.arjun.design".to_owned(),
            assigned: "Mayank Singh".to_owned(),
            priority: Priority::Low,
            due_date: "14-10-2024".to_owned(),
            est_value: 1_450_000.0,
        },
        Row {
            job_request: "Translate onboarding guide to Spanish & French".to_owned(),
            submitted: "22-09-2024".to_owned(),
            status: Status::Complete,
            submitter: "Pooja Saxena".to_owned(),
            url: "onboarding.company.com".to_owned(),
            assigned: "Pooja Saxena".to_owned(),
            priority: Priority::Low,
            due_date: "30-09-2024".to_owned(),
            est_value: 330_000.0,
        },
        Row {
            job_request: "Migrate legacy blog content to new CMS platform".to_owned(),
            submitted: "28-08-2024".to_owned(),
            status: Status::Blocked,
            submitter: "Ravi Kapoor".to_owned(),
            url: "blog.legacy.com".to_owned(),
            assigned: "Priya Gupta".to_owned(),
            priority: Priority::High,
            due_date: "05-09-2024".to_owned(),
            est_value: 720_000.0,
        },
        Row {
            job_request: "Draft press release for Series-B funding announcement".to_owned(),
            submitted: "18-08-2024".to_owned(),
            status: Status::InProcess,
            submitter: "Mina Rao".to_owned(),
            url: "press.company.com".to_owned(),
            assigned: "Sahil Joshi".to_owned(),
            priority: Priority::High,
            due_date: "22-08-2024".to_owned(),
            est_value: 910_000.0,
        },
    ]
}

/// Reads a JSON array of rows for `--seed`. Row count is checked against the
/// grid capacity here so a bad file fails at startup, not mid-session.
pub fn load_rows(path: &Path, max_rows: usize) -> Result<Vec<Row>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("read seed file {}", path.display()))?;
    let rows: Vec<Row> = serde_json::from_str(&raw)
        .with_context(|| format!("parse seed file {} as a JSON row array", path.display()))?;
    if rows.len() > max_rows {
        bail!(
            "seed file {} has {} rows but the grid holds at most {max_rows}",
            path.display(),
            rows.len()
        );
    }
    Ok(rows)
}
