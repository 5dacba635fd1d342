#![warn(missing_docs)]
//! Vein mining for block-break events.
//!
//! The host subscribes [`VeinMiner::on_block_broken`] to its "player broke a
//! block" notification. When the player is sneaking and the block belongs to
//! an ore, log or gravel group, the connected vein around it is broken too,
//! leaves are cleared around felled trees, and the player earns experience.

pub mod config;

use tracing::instrument;
use veinminer_core::scoped_rng;
use veinminer_world::mine_vein;

pub use config::VeinMinerConfig;
pub use veinminer_core::{
    BlockCategory, BlockPos, EnchantProfile, Player, RegistryKey, SimTick, VeinSettings,
    VoxelStore,
};
pub use veinminer_world::VeinOutcome;

/// A block broken by a player, as delivered by the host.
pub struct BlockBreakEvent<'a, P: ?Sized> {
    /// Where the block was.
    pub pos: BlockPos,
    /// What the block was before it broke.
    pub block: RegistryKey,
    /// Who broke it.
    pub player: &'a P,
    /// Host tick of the break, used to seed drop rolls.
    pub tick: SimTick,
}

/// Event handler holding the vein limits and drop seed.
///
/// Holds no mutable state, so one instance can serve concurrent events.
#[derive(Debug, Clone)]
pub struct VeinMiner {
    settings: VeinSettings,
    world_seed: u64,
}

impl VeinMiner {
    /// Handler with explicit limits and seed.
    pub fn new(settings: VeinSettings, world_seed: u64) -> Self {
        Self {
            settings,
            world_seed,
        }
    }

    /// Handler configured from a loaded config file.
    pub fn from_config(config: &VeinMinerConfig) -> Self {
        Self::new(config.settings, config.world_seed)
    }

    /// Active limits.
    pub fn settings(&self) -> &VeinSettings {
        &self.settings
    }

    /// Handle one break. Does nothing unless the player is sneaking.
    ///
    /// Returns a summary when a vein was mined.
    #[instrument(
        skip_all,
        fields(origin = %event.pos, block = %event.block, player = event.player.name())
    )]
    pub async fn on_block_broken<W, P>(
        &self,
        dimension: &W,
        event: &BlockBreakEvent<'_, P>,
    ) -> Option<VeinOutcome>
    where
        W: VoxelStore + ?Sized,
        P: Player + ?Sized,
    {
        if !event.player.is_sneaking() {
            return None;
        }
        let mut rng = scoped_rng(self.world_seed, event.pos, event.tick);
        mine_vein(
            dimension,
            event.player,
            event.pos,
            &event.block,
            &self.settings,
            &mut rng,
        )
        .await
    }
}

impl Default for VeinMiner {
    fn default() -> Self {
        Self::from_config(&VeinMinerConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handler_uses_configured_settings() {
        let config = VeinMinerConfig {
            world_seed: u64::MAX,
            settings: VeinSettings {
                max_cluster: 16,
                leaf_limit: 32,
                ..VeinSettings::default()
            },
        };
        let miner = VeinMiner::from_config(&config);
        assert_eq!(miner.settings(), &config.settings);
        assert_eq!(VeinMiner::default().settings(), &VeinSettings::default());
    }
}
