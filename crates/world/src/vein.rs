//! The full vein pipeline: classify, search, execute, sweep, reward.

use rand::Rng;
use serde::Serialize;
use tracing::info;
use veinminer_core::{BlockCategory, BlockPos, Player, RegistryKey, VeinSettings, VoxelStore};

use crate::{emit_reward, execute_cluster, find_category_cluster, sweep_foliage, FailureTally};

/// Summary of one vein, returned to the host for observability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VeinOutcome {
    /// Group of the broken block.
    pub category: BlockCategory,
    /// Discovered positions in discovery order, origin first.
    pub cluster: Vec<BlockPos>,
    /// Non-origin blocks removed through the drop policy.
    pub blocks_broken: usize,
    /// Non-origin blocks that changed before they could be removed.
    pub blocks_skipped: usize,
    /// Leaves cleared after a tree was felled.
    pub leaves_cleared: usize,
    /// Experience granted, if the vein was large enough.
    pub experience: Option<u32>,
    /// Host calls that failed and were tolerated.
    pub host_failures: usize,
}

/// Mine the vein that `block` at `origin` belongs to.
///
/// The host delivers the event before it clears `origin` itself, so the origin
/// still anchors the search but is never removed here. Returns `None` when the
/// block does not start a vein or is no longer in the world.
pub async fn mine_vein<W, P, R>(
    store: &W,
    player: &P,
    origin: BlockPos,
    block: &RegistryKey,
    settings: &VeinSettings,
    rng: &mut R,
) -> Option<VeinOutcome>
where
    W: VoxelStore + ?Sized,
    P: Player + ?Sized,
    R: Rng + ?Sized,
{
    let category = BlockCategory::of(Some(block));
    if !category.starts_vein() {
        return None;
    }

    let cluster = find_category_cluster(origin, store, settings, category);
    if cluster.is_empty() {
        return None;
    }

    let profile = player.enchant_profile();
    let mut failures = FailureTally::new();

    let stats = execute_cluster(
        store,
        player,
        &cluster,
        origin,
        category,
        profile,
        settings,
        rng,
        &mut failures,
    )
    .await;

    let leaves_cleared = if category == BlockCategory::Log {
        sweep_foliage(store, &cluster, settings, &mut failures).await
    } else {
        0
    };

    let experience = emit_reward(store, player, origin, cluster.len(), &mut failures).await;

    info!(
        category = category.as_str(),
        cluster = cluster.len(),
        broken = stats.broken,
        skipped = stats.skipped,
        leaves = leaves_cleared,
        xp = experience.unwrap_or(0),
        failures = failures.count(),
        "Vein mined"
    );

    Some(VeinOutcome {
        category,
        cluster,
        blocks_broken: stats.broken,
        blocks_skipped: stats.skipped,
        leaves_cleared,
        experience,
        host_failures: failures.count(),
    })
}
