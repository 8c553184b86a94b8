// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result};
use joblot_app::Field;
use joblot_grid::SheetStore;
use joblot_tui::{SheetRuntime, SheetSnapshot};
use url::Url;

/// `SheetRuntime` over the in-memory store, plus the one true side effect:
/// handing link targets to the system browser.
pub struct StoreRuntime {
    store: SheetStore,
}

impl StoreRuntime {
    pub fn new(store: SheetStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &SheetStore {
        &self.store
    }
}

impl SheetRuntime for StoreRuntime {
    fn load_snapshot(&mut self) -> Result<SheetSnapshot> {
        Ok(SheetSnapshot {
            rows: self.store.snapshot(),
            max_rows: self.store.max_rows(),
        })
    }

    fn apply_edit(&mut self, row: usize, field: Field, input: &str) -> Result<()> {
        self.store.set(row, field, input);
        Ok(())
    }

    fn open_url(&mut self, value: &str) -> Result<()> {
        let target = ensure_scheme(value.trim());
        open::that(&target).with_context(|| format!("open {target} in a browser"))
    }
}

/// Sheet cells usually hold bare hosts ("www.example.com"); give those the
/// default scheme, leave anything that already parses as a URL alone.
pub fn ensure_scheme(value: &str) -> String {
    match Url::parse(value) {
        Ok(_) => value.to_owned(),
        Err(_) => format!("https://{value}"),
    }
}
