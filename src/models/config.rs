use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::metrics::{HeightUnit, WeightUnit};

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub units: Units,
    #[serde(default)]
    pub assistant: Assistant,
}

/// Units the CLI assumes when a command does not name one explicitly.
#[derive(Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Units {
    #[serde(default)]
    pub height: HeightUnit,
    #[serde(default)]
    pub weight: WeightUnit,
}

impl Units {
    pub fn imperial() -> Self {
        Self {
            height: HeightUnit::FeetInches,
            weight: WeightUnit::Pounds,
        }
    }
}

/// Hosted inference endpoint used by the chat and suggestion views.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct Assistant {
    #[serde(default = "default_provider")]
    pub provider: String,
    #[serde(default = "default_model")]
    pub model: String,
}

fn default_provider() -> String {
    "openai".to_string()
}
fn default_model() -> String {
    "gpt-4o".to_string()
}

impl Default for Assistant {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            model: default_model(),
        }
    }
}

impl Assistant {
    /// `provider:model`, the form inference clients take.
    pub fn endpoint(&self) -> String {
        format!("{}:{}", self.provider, self.model)
    }
}

impl Config {
    /// Load config from the standard path, or return defaults.
    pub fn load() -> anyhow::Result<Self> {
        let path = Self::path();
        if path.exists() {
            let contents = std::fs::read_to_string(&path)?;
            Ok(toml::from_str(&contents)?)
        } else {
            Ok(Self::default())
        }
    }

    /// Save config to the standard path.
    pub fn save(&self) -> anyhow::Result<()> {
        let path = Self::path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
            #[cfg(unix)]
            {
                use std::os::unix::fs::PermissionsExt;
                std::fs::set_permissions(parent, std::fs::Permissions::from_mode(0o700))?;
            }
        }
        let contents = toml::to_string_pretty(self)?;

        #[cfg(unix)]
        {
            use std::fs::{self, OpenOptions};
            use std::io::Write;
            use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

            let mut options = OpenOptions::new();
            options.write(true).create(true).truncate(true).mode(0o600);
            let mut file = options.open(&path)?;
            file.write_all(contents.as_bytes())?;

            // mode() only applies on create
            let mut perms = file.metadata()?.permissions();
            if perms.mode() & 0o777 != 0o600 {
                perms.set_mode(0o600);
                fs::set_permissions(&path, perms)?;
            }
        }
        #[cfg(not(unix))]
        {
            std::fs::write(&path, contents)?;
        }

        log::debug!("config saved to {}", path.display());
        Ok(())
    }

    /// Apply a `key = value` pair from `config set`.
    pub fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        match key {
            "units.height" => self.units.height = value.parse()?,
            "units.weight" => self.units.weight = value.parse()?,
            "units.system" => match value {
                "metric" => self.units = Units::default(),
                "imperial" => self.units = Units::imperial(),
                _ => anyhow::bail!("units.system must be 'metric' or 'imperial'"),
            },
            "assistant.provider" => self.assistant.provider = value.to_string(),
            "assistant.model" => self.assistant.model = value.to_string(),
            _ => anyhow::bail!("unknown config key: {}", key),
        }
        Ok(())
    }

    pub fn data_dir() -> PathBuf {
        if let Ok(home) = std::env::var("BODYMETRICS_HOME") {
            return PathBuf::from(home);
        }
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".bodymetrics")
    }

    pub fn path() -> PathBuf {
        Self::data_dir().join("config.toml")
    }

    pub fn db_path() -> PathBuf {
        Self::data_dir().join("data.db")
    }
}
