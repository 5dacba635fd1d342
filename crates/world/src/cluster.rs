use std::collections::HashSet;

use tracing::debug;
use veinminer_core::{BlockCategory, BlockPos, RegistryKey, VeinSettings, VoxelStore};

/// Bounded depth-first flood fill over face-adjacent blocks.
///
/// Returns matching positions in discovery order, starting with `origin` when it
/// matches. The search never leaves the sphere of `settings.cluster_radius`
/// around `origin` and stops once `settings.max_cluster` positions are found;
/// unexplored stack entries are dropped at that point.
///
/// A position that fails `matches` is not expanded, so the result is always a
/// connected component (truncated) of matching blocks. Neighbor expansion order
/// is fixed (+x, -x, +y, -y, +z, -z), so the result is deterministic for a given
/// world.
pub fn find_cluster<W, F>(
    origin: BlockPos,
    store: &W,
    settings: &VeinSettings,
    mut matches: F,
) -> Vec<BlockPos>
where
    W: VoxelStore + ?Sized,
    F: FnMut(Option<&RegistryKey>) -> bool,
{
    let radius_sq = settings.cluster_radius_sq();
    let mut stack = vec![origin];
    let mut visited: HashSet<BlockPos> = HashSet::from([origin]);
    let mut found = Vec::new();

    while found.len() < settings.max_cluster {
        let Some(cur) = stack.pop() else {
            break;
        };
        if !matches(store.block_at(cur).as_ref()) {
            continue;
        }
        found.push(cur);

        for next in cur.neighbors() {
            if origin.distance_sq(next) > radius_sq {
                continue;
            }
            if visited.insert(next) {
                stack.push(next);
            }
        }
    }

    if !stack.is_empty() && found.len() >= settings.max_cluster {
        debug!(
            origin = %origin,
            limit = settings.max_cluster,
            pending = stack.len(),
            "Cluster search truncated"
        );
    }

    found
}

/// [`find_cluster`] matching every block of `category`.
pub fn find_category_cluster<W>(
    origin: BlockPos,
    store: &W,
    settings: &VeinSettings,
    category: BlockCategory,
) -> Vec<BlockPos>
where
    W: VoxelStore + ?Sized,
{
    find_cluster(origin, store, settings, |block| {
        BlockCategory::of(block) == category
    })
}
