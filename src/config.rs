use crate::error::{ESResult, PortalError};
use directories::ProjectDirs;
use error_stack::ResultExt;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::LazyLock;

pub static PROJECT_DIRS: LazyLock<ProjectDirs> = LazyLock::new(|| {
    ProjectDirs::from("dev", "portal", "portal").expect("Could not determine project directories")
});

static CONFIG_PATH: LazyLock<PathBuf> =
    LazyLock::new(|| PROJECT_DIRS.preference_dir().join("config.toml"));

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PortalConfig {
    /// Base URL of the remote version source.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Directory holding installed JVMs. Defaults to `jdks` under the data dir.
    #[serde(default)]
    pub jdks_dir: Option<PathBuf>,
}

impl Default for PortalConfig {
    fn default() -> Self {
        PortalConfig {
            base_url: default_base_url(),
            jdks_dir: None,
        }
    }
}

impl PortalConfig {
    pub fn load() -> ESResult<PortalConfig, PortalError> {
        if !CONFIG_PATH.exists() {
            return Ok(PortalConfig::default());
        }
        let contents = std::fs::read_to_string(&*CONFIG_PATH)
            .change_context(PortalError::Unexpected)
            .attach_printable_lazy(|| {
                format!("Could not read config file at {:?}", *CONFIG_PATH)
            })?;
        toml::from_str(&contents)
            .change_context(PortalError::Unexpected)
            .attach_printable_lazy(|| {
                format!("Could not parse config file at {:?}", *CONFIG_PATH)
            })
    }

    /// Directory scanned by the `list` command.
    pub fn resolve_jdks_dir(&self) -> PathBuf {
        self.jdks_dir
            .clone()
            .unwrap_or_else(|| PROJECT_DIRS.data_dir().join("jdks"))
    }
}

fn default_base_url() -> String {
    "https://api.adoptium.net/v3".to_string()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config: PortalConfig = toml::from_str("").unwrap();
        assert_eq!(config.base_url, default_base_url());
        assert_eq!(config.jdks_dir, None);
    }

    #[test]
    fn jdks_dir_override_wins() {
        let config: PortalConfig = toml::from_str("jdks_dir = \"/opt/jdks\"").unwrap();
        assert_eq!(config.resolve_jdks_dir(), PathBuf::from("/opt/jdks"));
    }
}
