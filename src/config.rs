use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};
use tracing::warn;
use veinminer_core::VeinSettings;

/// On-disk vein miner configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct VeinMinerConfig {
    /// Seed mixed into every event's drop RNG.
    ///
    /// Stored as the bit-identical signed integer, since TOML integers are `i64`.
    #[serde(with = "seed_bits")]
    pub world_seed: u64,
    /// Vein limits.
    pub settings: VeinSettings,
}

impl VeinMinerConfig {
    /// Load configuration from an explicit path, falling back to defaults on errors.
    pub fn load_from_path(path: &Path) -> Self {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(err) => {
                if err.kind() == std::io::ErrorKind::NotFound {
                    warn!("Vein miner config not found at {}. Using defaults", path.display());
                } else {
                    warn!("Failed to read {}: {err}. Using defaults", path.display());
                }
                return Self::default();
            }
        };

        let cfg = match toml::from_str::<VeinMinerConfig>(&contents) {
            Ok(cfg) => cfg,
            Err(err) => {
                warn!("Failed to parse {}: {err}. Using defaults", path.display());
                return Self::default();
            }
        };

        if let Err(err) = cfg.settings.validate() {
            warn!("Invalid settings in {}: {err}. Using defaults", path.display());
            return Self::default();
        }
        cfg
    }

    /// Save configuration to an explicit path.
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        let toml = toml::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml)?;
        Ok(())
    }
}

mod seed_bits {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(seed: &u64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(*seed as i64)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
        i64::deserialize(deserializer).map(|bits| bits as u64)
    }
}
