//! Limits applied to a single vein.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Largest accepted search or foliage radius.
pub const MAX_RADIUS: u32 = 32;

/// Rejected settings values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    /// `max_cluster` of zero would disable every vein.
    #[error("max_cluster must be at least 1")]
    ZeroCluster,
    /// Radius larger than [`MAX_RADIUS`].
    #[error("{field} of {value} exceeds the maximum of {max}", max = MAX_RADIUS)]
    RadiusTooLarge {
        /// Offending field name.
        field: &'static str,
        /// Configured value.
        value: u32,
    },
}

/// Immutable vein limits passed into search, execution and the foliage sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VeinSettings {
    /// Maximum blocks discovered (and processed) per vein.
    pub max_cluster: usize,
    /// Euclidean search radius around the origin.
    pub cluster_radius: u32,
    /// Euclidean foliage radius around each log.
    pub leaf_radius: u32,
    /// Maximum leaves cleared per felled tree.
    pub leaf_limit: usize,
}

impl Default for VeinSettings {
    fn default() -> Self {
        Self {
            max_cluster: 128,
            cluster_radius: 8,
            leaf_radius: 8,
            leaf_limit: 256,
        }
    }
}

impl VeinSettings {
    /// Squared cluster radius, compared against [`crate::BlockPos::distance_sq`].
    pub fn cluster_radius_sq(&self) -> i64 {
        i64::from(self.cluster_radius).pow(2)
    }

    /// Squared foliage radius.
    pub fn leaf_radius_sq(&self) -> i64 {
        i64::from(self.leaf_radius).pow(2)
    }

    /// Check the limits are usable.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.max_cluster == 0 {
            return Err(SettingsError::ZeroCluster);
        }
        for (field, value) in [
            ("cluster_radius", self.cluster_radius),
            ("leaf_radius", self.leaf_radius),
        ] {
            if value > MAX_RADIUS {
                return Err(SettingsError::RadiusTooLarge { field, value });
            }
        }
        Ok(())
    }
}
