use intake_core::PasswordPolicy;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Desk configuration loaded from YAML file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DeskConfig {
    pub storage: StorageSettings,
    pub reference: ReferenceSettings,
    pub policy: PolicySettings,
    pub log: LogSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageSettings {
    pub data_dir: PathBuf,
    pub values_db: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReferenceSettings {
    pub states_file: PathBuf,
    pub history_file: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PolicySettings {
    pub password_must_differ_from_user_id: bool,
    /// How long the remembered identity lives after a submission, in hours.
    pub remember_hours: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    pub level: String,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            values_db: "values.redb".to_string(),
        }
    }
}

impl Default for ReferenceSettings {
    fn default() -> Self {
        Self {
            states_file: PathBuf::from("reference/states.txt"),
            history_file: PathBuf::from("reference/history.json"),
        }
    }
}

impl Default for PolicySettings {
    fn default() -> Self {
        Self {
            password_must_differ_from_user_id: true,
            remember_hours: 48,
        }
    }
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl DeskConfig {
    /// Load configuration from a YAML file
    pub fn load_from_file(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let config: DeskConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration with priority: env vars > config file > defaults
    pub fn load(config_path: Option<&str>) -> Result<Self, Box<dyn std::error::Error>> {
        let mut config = if let Some(path) = config_path {
            Self::load_from_file(path)?
        } else {
            Self::default()
        };

        if let Ok(data_dir) = std::env::var("INTAKE_DATA_DIR") {
            config.storage.data_dir = PathBuf::from(data_dir);
        }

        if let Ok(states) = std::env::var("INTAKE_STATES_FILE") {
            config.reference.states_file = PathBuf::from(states);
        }

        if let Ok(history) = std::env::var("INTAKE_HISTORY_FILE") {
            config.reference.history_file = PathBuf::from(history);
        }

        Ok(config)
    }

    /// Get the full path to the values database
    pub fn values_db_path(&self) -> PathBuf {
        self.storage.data_dir.join(&self.storage.values_db)
    }

    pub fn password_policy(&self) -> PasswordPolicy {
        PasswordPolicy {
            forbid_user_id: self.policy.password_must_differ_from_user_id,
        }
    }
}
