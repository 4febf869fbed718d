//! JSON-persisted account book configuration.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::LedgerError;
use crate::money::Money;

const TMP_SUFFIX: &str = "tmp";

/// One configured account and its fixed opening balance.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AccountProfile {
    pub id: Uuid,
    pub name: String,
    pub opening_balance: Money,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LedgerConfig {
    pub currency: String,
    #[serde(default)]
    pub accounts: Vec<AccountProfile>,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            currency: "PHP".into(),
            accounts: Vec::new(),
        }
    }
}

impl LedgerConfig {
    pub fn opening_balance_for(&self, name: &str) -> Option<Money> {
        self.accounts
            .iter()
            .find(|profile| profile.name == name)
            .map(|profile| profile.opening_balance)
    }
}

/// Loads and saves the configuration file.
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the stored configuration, or defaults when the file does
    /// not exist yet.
    pub fn load(&self) -> Result<LedgerConfig, LedgerError> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            Ok(serde_json::from_str(&data)?)
        } else {
            Ok(LedgerConfig::default())
        }
    }

    /// Writes the configuration atomically (tmp file + rename).
    pub fn save(&self, config: &LedgerConfig) -> Result<(), LedgerError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(config)?;
        let tmp = tmp_path(&self.path);
        let mut file = File::create(&tmp)?;
        file.write_all(json.as_bytes())?;
        file.flush()?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}
