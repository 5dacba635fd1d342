use rand::Rng;
use veinminer_core::{BlockCategory, BlockPos, EnchantProfile, Player, VeinSettings, VoxelStore};

use crate::drops::resolve_drop;
use crate::FailureTally;

/// Per-block results of [`execute_cluster`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ExecutionStats {
    /// Blocks removed (or attempted) through the drop policy.
    pub broken: usize,
    /// Blocks that vanished or changed type since discovery.
    pub skipped: usize,
}

/// Break every block of `cluster` except `origin`, in cluster order.
///
/// Each position is re-read before acting since the world may have changed
/// since discovery; positions that no longer hold a `category` block are
/// skipped. At most `settings.max_cluster` blocks are processed. Host failures
/// are tallied and never interrupt the loop.
#[allow(clippy::too_many_arguments)]
pub async fn execute_cluster<W, P, R>(
    store: &W,
    player: &P,
    cluster: &[BlockPos],
    origin: BlockPos,
    category: BlockCategory,
    profile: EnchantProfile,
    settings: &VeinSettings,
    rng: &mut R,
    failures: &mut FailureTally,
) -> ExecutionStats
where
    W: VoxelStore + ?Sized,
    P: Player + ?Sized,
    R: Rng + ?Sized,
{
    let mut stats = ExecutionStats::default();

    for &pos in cluster {
        if pos == origin {
            continue;
        }
        if stats.broken >= settings.max_cluster {
            break;
        }

        let Some(block) = store.block_at(pos) else {
            stats.skipped += 1;
            continue;
        };
        if BlockCategory::of(Some(&block)) != category {
            stats.skipped += 1;
            continue;
        }
        let Some(decision) = resolve_drop(category, &block, profile, rng) else {
            stats.skipped += 1;
            continue;
        };

        failures.tolerate(
            store.remove_block(pos, decision.removal).await,
            "remove_block",
            pos,
        );
        if let Some(drop) = decision.grant {
            failures.tolerate(
                player.grant_item(&drop.item, drop.count).await,
                "grant_item",
                pos,
            );
        }
        stats.broken += 1;
    }

    stats
}
