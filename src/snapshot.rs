// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use std::fs;
use std::path::{Path, PathBuf};

use crate::store::Ledger;

static APP: Lazy<(&str, &str, &str)> =
    Lazy::new(|| ("com.alphavelocity", "Coinsight", "coinsight"));

/// Where the ledger snapshot lives when no `--ledger` path is given.
pub fn default_path() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific data dir")?;
    let data_dir = proj.data_dir();
    fs::create_dir_all(data_dir).context("Failed to create data dir")?;
    Ok(data_dir.join("ledger.json"))
}

pub fn load(path: &Path) -> Result<Ledger> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Open ledger at {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("Parse ledger at {}", path.display()))
}

/// Missing snapshot means a fresh, empty ledger; a present but unreadable
/// one is an error rather than a silent reset.
pub fn load_or_new(path: &Path) -> Result<Ledger> {
    if path.exists() {
        load(path)
    } else {
        Ok(Ledger::new())
    }
}

pub fn save(path: &Path, ledger: &Ledger) -> Result<()> {
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() {
            fs::create_dir_all(dir)
                .with_context(|| format!("Create snapshot dir {}", dir.display()))?;
        }
    }
    let raw = serde_json::to_string_pretty(ledger)?;
    fs::write(path, raw).with_context(|| format!("Write ledger at {}", path.display()))?;
    Ok(())
}
