use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
const CURRENT_VERSION: u32 = 1;

const APP_DIR: &str = "com.moodlog.cli";
const CONFIG_FILE: &str = "config.json";

/// Overrides the config directory when set.
pub const CONFIG_DIR_ENV: &str = "MOODLOG_CONFIG_DIR";

pub const DEFAULT_CHECKIN_INTERVAL_DAYS: u32 = 14;
pub const DEFAULT_SUBMIT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodlogConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    #[serde(default)]
    pub config_version: u32,
    pub user_id: Uuid,
    pub display_name: String,
    /// Root of the local object store (profiles, check-ins, journal).
    pub data_dir: PathBuf,
    /// Days between screening check-ins. Added in v1.
    pub checkin_interval_days: u32,
    /// Upper bound on each post-check-in write. Added in v1.
    pub submit_timeout_secs: u64,
    pub created_at: jiff::Timestamp,
}

impl MoodlogConfig {
    pub fn new(display_name: impl Into<String>, data_dir: PathBuf, now: jiff::Timestamp) -> Self {
        Self {
            config_version: CURRENT_VERSION,
            user_id: Uuid::new_v4(),
            display_name: display_name.into(),
            data_dir,
            checkin_interval_days: DEFAULT_CHECKIN_INTERVAL_DAYS,
            submit_timeout_secs: DEFAULT_SUBMIT_TIMEOUT_SECS,
            created_at: now,
        }
    }

    pub fn submit_timeout(&self) -> Duration {
        Duration::from_secs(self.submit_timeout_secs)
    }
}

pub fn config_dir() -> eyre::Result<PathBuf> {
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
        return Ok(PathBuf::from(dir));
    }
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join(APP_DIR))
}

/// Default location for the object store.
pub fn default_data_dir() -> eyre::Result<PathBuf> {
    let base = dirs::data_dir().ok_or_else(|| eyre::eyre!("no data directory found"))?;
    Ok(base.join(APP_DIR))
}

pub fn has_config() -> bool {
    config_dir().map(|d| has_config_at(&d)).unwrap_or(false)
}

pub fn has_config_at(dir: &Path) -> bool {
    dir.join(CONFIG_FILE).exists()
}

pub fn load_config() -> eyre::Result<MoodlogConfig> {
    load_config_at(&config_dir()?)
}

pub fn load_config_at(dir: &Path) -> eyre::Result<MoodlogConfig> {
    let path = dir.join(CONFIG_FILE);
    let contents = std::fs::read_to_string(&path)
        .map_err(|e| eyre::eyre!("failed to read config at {}: {e}", path.display()))?;

    // Parse as raw JSON so we can run migrations before deserializing.
    let json: serde_json::Value = serde_json::from_str(&contents)?;
    let on_disk_version = json
        .get("config_version")
        .and_then(|v| v.as_u64())
        .unwrap_or(0) as u32;

    let migrated = migrate(json, on_disk_version)?;
    let config: MoodlogConfig = serde_json::from_value(migrated)?;
    Ok(config)
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
///
/// Each migration is a pure transform on the raw JSON value.
pub fn migrate(mut json: serde_json::Value, from_version: u32) -> eyre::Result<serde_json::Value> {
    if from_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {from_version} is newer than this build supports ({CURRENT_VERSION}). \
             Please update moodlog."
        ));
    }

    // v0 → v1: add check-in interval and submission timeout
    if from_version < 1 {
        let obj = json
            .as_object_mut()
            .ok_or_else(|| eyre::eyre!("config is not a JSON object"))?;
        obj.entry("checkin_interval_days")
            .or_insert(serde_json::Value::Number(DEFAULT_CHECKIN_INTERVAL_DAYS.into()));
        obj.entry("submit_timeout_secs")
            .or_insert(serde_json::Value::Number(DEFAULT_SUBMIT_TIMEOUT_SECS.into()));
        obj.insert(
            "config_version".to_string(),
            serde_json::Value::Number(1.into()),
        );
        tracing::info!("migrated config v0 → v1 (added checkin_interval_days, submit_timeout_secs)");
    }

    Ok(json)
}

pub fn save_config_at(dir: &Path, config: &MoodlogConfig) -> eyre::Result<()> {
    std::fs::create_dir_all(dir)?;

    // Always write the current version, regardless of what was loaded.
    let mut stamped = config.clone();
    stamped.config_version = CURRENT_VERSION;

    let path = dir.join(CONFIG_FILE);
    let json = serde_json::to_string_pretty(&stamped)?;

    let tmp_path = dir.join("config.json.tmp");
    std::fs::write(&tmp_path, json.as_bytes())?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&tmp_path, std::fs::Permissions::from_mode(0o600))?;
    }

    std::fs::rename(&tmp_path, &path)?;

    tracing::info!(path = %path.display(), "config saved");
    Ok(())
}

pub fn delete_config_at(dir: &Path) -> eyre::Result<()> {
    let path = dir.join(CONFIG_FILE);
    if path.exists() {
        std::fs::remove_file(&path)?;
        tracing::info!(path = %path.display(), "config deleted");
    }
    Ok(())
}
