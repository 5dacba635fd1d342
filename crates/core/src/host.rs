//! Host world and player interfaces.
//!
//! The vein miner never touches world storage directly. Everything it reads or
//! mutates goes through these traits, which the embedding server implements.
//! Mutating calls are asynchronous and fallible; callers decide whether a
//! failure matters.

use crate::{BlockPos, EnchantProfile, RegistryKey};
use async_trait::async_trait;
use thiserror::Error;

/// Failure reported by a host call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HostError {
    /// The target chunk is not loaded.
    #[error("chunk containing {0} is not loaded")]
    Unloaded(BlockPos),
    /// The actor lacks permission for the operation.
    #[error("permission denied: {0}")]
    PermissionDenied(String),
    /// The acting player is no longer present.
    #[error("player `{0}` is gone")]
    PlayerGone(String),
    /// Anything else the host rejects.
    #[error("host rejected call: {0}")]
    Rejected(String),
}

/// Result type for host calls.
pub type HostResult<T> = Result<T, HostError>;

/// How a block is taken out of the world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RemovalMode {
    /// Silent swap to air; the host spawns no drops.
    Replace,
    /// Break as if mined; the host runs its own drop/particle path.
    Destroy,
}

/// Cosmetic feedback played at a coordinate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Particle emitter identifier, e.g. `minecraft:experience_orb`.
    Particle(RegistryKey),
    /// Sound event name, e.g. `random.orb`.
    Sound(String),
}

/// One dimension's block storage as seen by the vein miner.
#[async_trait]
pub trait VoxelStore: Send + Sync {
    /// Block identifier at `pos`, or `None` for air/unloaded.
    fn block_at(&self, pos: BlockPos) -> Option<RegistryKey>;

    /// Replace the block at `pos` with air.
    async fn remove_block(&self, pos: BlockPos, mode: RemovalMode) -> HostResult<()>;

    /// Play `effect` at `pos`, optionally only for the named player.
    async fn trigger_effect(
        &self,
        effect: &Effect,
        pos: BlockPos,
        audience: Option<&str>,
    ) -> HostResult<()>;
}

/// The player who broke the block.
#[async_trait]
pub trait Player: Send + Sync {
    /// Display name, used as the effect audience filter.
    fn name(&self) -> &str;

    /// Whether the player was crouching when the block broke.
    fn is_sneaking(&self) -> bool;

    /// Enchantments of the main-hand tool. Hosts return [`EnchantProfile::NONE`]
    /// when the tool or its enchantment data is missing.
    fn enchant_profile(&self) -> EnchantProfile;

    /// Put `count` of `item` into the player's inventory.
    async fn grant_item(&self, item: &RegistryKey, count: u32) -> HostResult<()>;

    /// Add experience points.
    async fn grant_experience(&self, amount: u32) -> HostResult<()>;
}
