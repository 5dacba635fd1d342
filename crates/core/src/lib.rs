#![warn(missing_docs)]
//! Core primitives shared across the workspace.

mod enchantment;
mod groups;
pub mod host;
mod pos;
mod registry;
mod settings;

use rand::{rngs::StdRng, SeedableRng};
use serde::{Deserialize, Serialize};

pub use enchantment::{EnchantProfile, Enchantment, EnchantmentType};
pub use groups::{BlockCategory, GRAVEL, LEAVES, LOGS, ORES};
pub use host::{Effect, HostError, HostResult, Player, RemovalMode, VoxelStore};
pub use pos::BlockPos;
pub use registry::{RegistryKey, RegistryKeyError, DEFAULT_NAMESPACE};
pub use settings::{SettingsError, VeinSettings, MAX_RADIUS};

/// Monotonic event tick supplied by the host with each break notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SimTick(pub u64);

/// Helper to derive a reproducible RNG seeded by world + position + tick domains.
pub fn scoped_rng(world_seed: u64, pos: BlockPos, tick: SimTick) -> StdRng {
    let seed = world_seed ^ pos.spatial_hash() ^ tick.0.rotate_left(32);
    StdRng::seed_from_u64(seed)
}
