use veinminer_core::{BlockCategory, BlockPos, RemovalMode, VeinSettings, VoxelStore};

use crate::FailureTally;

/// Clear leaves around a felled trunk.
///
/// Scans a sphere of `settings.leaf_radius` around every log in `logs` (walking
/// the bounding cube x-major, then y, then z) and destroys each leaf block it
/// finds. Overlapping spheres are not deduplicated; a leaf that is already gone
/// simply no longer classifies as a leaf. The sweep stops as soon as
/// `settings.leaf_limit` leaves have been cleared across all logs.
///
/// Returns the number of leaves cleared (removal attempts, whether or not the
/// host call succeeded).
pub async fn sweep_foliage<W>(
    store: &W,
    logs: &[BlockPos],
    settings: &VeinSettings,
    failures: &mut FailureTally,
) -> usize
where
    W: VoxelStore + ?Sized,
{
    let r = settings.leaf_radius as i32;
    let radius_sq = settings.leaf_radius_sq();
    let mut cleared = 0;

    for &log in logs {
        for dx in -r..=r {
            for dy in -r..=r {
                for dz in -r..=r {
                    if cleared >= settings.leaf_limit {
                        return cleared;
                    }
                    let Some(pos) = log.checked_offset(dx, dy, dz) else {
                        continue;
                    };
                    if log.distance_sq(pos) > radius_sq {
                        continue;
                    }
                    if BlockCategory::of(store.block_at(pos).as_ref()) != BlockCategory::Leaf {
                        continue;
                    }
                    failures.tolerate(
                        store.remove_block(pos, RemovalMode::Destroy).await,
                        "remove_leaf",
                        pos,
                    );
                    cleared += 1;
                }
            }
        }
    }

    cleared
}
