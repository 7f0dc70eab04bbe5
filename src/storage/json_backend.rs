use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use serde_json::Value;

use crate::domain::AppState;
use crate::errors::BudgetError;

use super::{Result, StateStore};

const APP_DIR: &str = "nestegg";
const STATE_FILE: &str = "state.json";
const TMP_SUFFIX: &str = "tmp";

/// Stores the whole state document as one pretty-printed JSON file.
/// Saves stage to a temporary sibling and rename into place so a
/// failed write never truncates the existing document.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Keeps the document under `root` when given, otherwise under the
    /// platform data directory.
    pub fn new(root: Option<PathBuf>) -> Result<Self> {
        let dir = match root {
            Some(dir) => dir,
            None => dirs::data_dir()
                .ok_or_else(|| BudgetError::Storage("no platform data directory available".into()))?
                .join(APP_DIR),
        };
        fs::create_dir_all(&dir)?;
        Ok(Self {
            path: dir.join(STATE_FILE),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StateStore for JsonFileStore {
    fn load(&self) -> Result<Option<Value>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let data = fs::read_to_string(&self.path)?;
        let document = serde_json::from_str(&data)?;
        Ok(Some(document))
    }

    fn save(&self, state: &AppState) -> Result<()> {
        let json = serde_json::to_string_pretty(state)
            .map_err(|err| BudgetError::Storage(err.to_string()))?;
        let tmp = tmp_path(&self.path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
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

fn write_atomic(path: &Path, data: &str) -> Result<()> {
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
