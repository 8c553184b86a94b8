// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result, anyhow, bail};
use joblot_app::{ColumnPolicy, DEFAULT_HIDE_THRESHOLD, DEFAULT_MIN_COLUMN_WIDTH};
use joblot_grid::DEFAULT_MAX_ROWS;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_VERSION: i64 = 1;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub version: i64,
    #[serde(default)]
    pub grid: Grid,
    #[serde(default)]
    pub ui: Ui,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            grid: Grid::default(),
            ui: Ui::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Grid {
    pub max_rows: Option<i64>,
    pub hide_threshold: Option<i64>,
    pub min_column_width: Option<i64>,
}

impl Default for Grid {
    fn default() -> Self {
        Self {
            max_rows: Some(DEFAULT_MAX_ROWS as i64),
            hide_threshold: Some(i64::from(DEFAULT_HIDE_THRESHOLD)),
            min_column_width: Some(i64::from(DEFAULT_MIN_COLUMN_WIDTH)),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Ui {
    pub show_footer: Option<bool>,
}

impl Default for Ui {
    fn default() -> Self {
        Self {
            show_footer: Some(true),
        }
    }
}

impl Config {
    pub fn default_path() -> Result<PathBuf> {
        if let Some(path) = env::var_os("JOBLOT_CONFIG_PATH") {
            return Ok(PathBuf::from(path));
        }

        let config_root = dirs::config_dir().ok_or_else(|| {
            anyhow!("cannot resolve config directory; set JOBLOT_CONFIG_PATH to the config file")
        })?;

        let app_dir = config_root.join(joblot_grid::APP_NAME);
        fs::create_dir_all(&app_dir)
            .with_context(|| format!("create config directory {}", app_dir.display()))?;
        Ok(app_dir.join("config.toml"))
    }

    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = fs::read_to_string(path)
            .with_context(|| format!("read config file {}", path.display()))?;
        let value: toml::Value = toml::from_str(&raw)
            .with_context(|| format!("parse TOML config {}", path.display()))?;

        let version = value
            .get("version")
            .and_then(toml::Value::as_integer)
            .ok_or_else(|| {
                anyhow!(
                    "config file {} is not versioned. Add `version = 1` and move values under [grid] and [ui]",
                    path.display()
                )
            })?;

        if version != CONFIG_VERSION {
            bail!(
                "unsupported config version {} in {}; expected version = 1",
                version,
                path.display()
            );
        }

        let config: Config = value
            .try_into()
            .with_context(|| format!("decode config {}", path.display()))?;
        config.validate(path)?;
        Ok(config)
    }

    fn validate(&self, path: &Path) -> Result<()> {
        if let Some(max_rows) = self.grid.max_rows
            && max_rows <= 0
        {
            bail!(
                "grid.max_rows in {} must be positive, got {}",
                path.display(),
                max_rows
            );
        }

        if let Some(threshold) = self.grid.hide_threshold
            && !(0..=i64::from(u16::MAX)).contains(&threshold)
        {
            bail!(
                "grid.hide_threshold in {} must be between 0 and {}, got {}",
                path.display(),
                u16::MAX,
                threshold
            );
        }

        if let Some(min_width) = self.grid.min_column_width
            && !(1..=i64::from(u16::MAX)).contains(&min_width)
        {
            bail!(
                "grid.min_column_width in {} must be between 1 and {}, got {}",
                path.display(),
                u16::MAX,
                min_width
            );
        }

        Ok(())
    }

    pub fn max_rows(&self) -> usize {
        self.grid
            .max_rows
            .map_or(DEFAULT_MAX_ROWS, |value| value as usize)
    }

    pub fn hide_threshold(&self) -> u16 {
        self.grid
            .hide_threshold
            .map_or(DEFAULT_HIDE_THRESHOLD, |value| value as u16)
    }

    pub fn min_column_width(&self) -> u16 {
        self.grid
            .min_column_width
            .map_or(DEFAULT_MIN_COLUMN_WIDTH, |value| value as u16)
    }

    pub fn column_policy(&self) -> ColumnPolicy {
        ColumnPolicy {
            min_width: self.min_column_width(),
            hide_threshold: self.hide_threshold(),
        }
    }

    pub fn show_footer(&self) -> bool {
        self.ui.show_footer.unwrap_or(true)
    }

    pub fn example_config(path: &Path) -> String {
        format!(
            "# joblot config\n# Place this file at: {}\n\nversion = 1\n\n[grid]\n# Rendered row slots; the sheet never grows past this.\nmax_rows = {}\n# Release a resize below this width and the column disappears.\nhide_threshold = {}\nmin_column_width = {}\n\n[ui]\nshow_footer = true\n",
            path.display(),
            DEFAULT_MAX_ROWS,
            DEFAULT_HIDE_THRESHOLD,
            DEFAULT_MIN_COLUMN_WIDTH,
        )
    }
}
