// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result};
use joblot_app::{Priority, Row, Status};
use std::path::PathBuf;

const JOB_VERBS: [&str; 10] = [
    "Launch", "Redesign", "Translate", "Migrate", "Draft", "Audit", "Refresh", "Publish",
    "Archive", "Localize",
];
const JOB_OBJECTS: [&str; 10] = [
    "social media campaign",
    "pitch deck",
    "onboarding guide",
    "blog content",
    "press release",
    "landing page",
    "pricing sheet",
    "brand assets",
    "release notes",
    "help center",
];
const FIRST_NAMES: [&str; 12] = [
    "Aisha", "Arjun", "Pooja", "Ravi", "Mina", "Sophie", "Mayank", "Priya", "Sahil", "Irfan",
    "Nadia", "Tara",
];
const LAST_NAMES: [&str; 12] = [
    "Patel", "Mehta", "Saxena", "Kapoor", "Rao", "Choudhury", "Singh", "Gupta", "Joshi", "Khan",
    "Bose", "Iyer",
];
const DOMAINS: [&str; 6] = [
    "example.com",
    "company.com",
    "launchpad.dev",
    "studio.design",
    "press.example.org",
    "blog.example.net",
];

#[derive(Debug, Clone)]
struct DeterministicRng {
    state: u64,
}

impl DeterministicRng {
    fn new(seed: u64) -> Self {
        let mut state = seed ^ 0x9E37_79B9_7F4A_7C15;
        if state == 0 {
            state = 0xA409_3822_299F_31D0;
        }
        Self { state }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);

        let mut x = self.state;
        x ^= x >> 13;
        x ^= x << 7;
        x ^= x >> 17;
        x
    }

    fn int_n(&mut self, n: usize) -> usize {
        if n <= 1 {
            return 0;
        }
        (self.next_u64() % (n as u64)) as usize
    }
}

/// Deterministic row generator for tests: same seed, same rows, no RNG
/// crate needed.
#[derive(Debug, Clone)]
pub struct SheetFaker {
    rng: DeterministicRng,
}

impl SheetFaker {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: DeterministicRng::new(if seed == 0 { 1 } else { seed }),
        }
    }

    pub fn row(&mut self) -> Row {
        let verb = self.pick(&JOB_VERBS);
        let object = self.pick(&JOB_OBJECTS);
        let submitter = self.person();
        let assigned = self.person();
        let domain = self.pick(&DOMAINS);
        let day = 1 + self.rng.int_n(28);
        let month = 1 + self.rng.int_n(12);
        let status = Status::ALL[self.rng.int_n(Status::ALL.len())];
        let priority = Priority::ALL[self.rng.int_n(Priority::ALL.len())];
        let est_value = (50 + self.rng.int_n(9_950)) as f64 * 1_000.0;

        Row {
            job_request: format!("{verb} {object}"),
            submitted: format!("{day:02}-{month:02}-2024"),
            status,
            submitter: submitter.clone(),
            url: format!(
                "www.{}.{domain}",
                submitter.to_lowercase().replace(' ', "")
            ),
            assigned,
            priority,
            due_date: format!("{:02}-{month:02}-2024", 1 + self.rng.int_n(28)),
            est_value,
        }
    }

    pub fn rows(&mut self, count: usize) -> Vec<Row> {
        (0..count).map(|_| self.row()).collect()
    }

    fn person(&mut self) -> String {
        format!("{} {}", self.pick(&FIRST_NAMES), self.pick(&LAST_NAMES))
    }

    fn pick(&mut self, values: &[&'static str]) -> &'static str {
        values[self.rng.int_n(values.len())]
    }
}

/// Writes rows as a JSON seed file inside a fresh temp dir; the dir guard
/// keeps the file alive for the caller's test.
pub fn seed_file(rows: &[Row]) -> Result<(tempfile::TempDir, PathBuf)> {
    let dir = tempfile::tempdir().context("create temp dir")?;
    let path = dir.path().join("seed.json");
    let payload = serde_json::to_string_pretty(rows).context("serialize seed rows")?;
    std::fs::write(&path, payload).context("write seed file")?;
    Ok((dir, path))
}
