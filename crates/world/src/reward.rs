use veinminer_core::{BlockPos, Effect, Player, RegistryKey, VoxelStore};

use crate::FailureTally;

/// Experience cap per vein.
pub const MAX_VEIN_EXPERIENCE: u32 = 30;

/// Blocks per experience point.
pub const BLOCKS_PER_EXPERIENCE: usize = 4;

/// Veins at or below this size earn nothing.
pub const MIN_REWARDED_CLUSTER: usize = 2;

/// Particle played at the origin.
pub const REWARD_PARTICLE: &str = "experience_orb";

/// Sound played to the miner.
pub const REWARD_SOUND: &str = "random.orb";

/// Experience earned for a vein of `cluster_size` blocks (origin included).
pub fn experience_for(cluster_size: usize) -> Option<u32> {
    if cluster_size <= MIN_REWARDED_CLUSTER {
        return None;
    }
    let xp = (cluster_size / BLOCKS_PER_EXPERIENCE).min(MAX_VEIN_EXPERIENCE as usize);
    Some(xp as u32)
}

/// Grant the vein's experience and play the reward particle and sound at `origin`.
///
/// Each of the three host calls is attempted regardless of whether the ones
/// before it failed.
pub async fn emit_reward<W, P>(
    store: &W,
    player: &P,
    origin: BlockPos,
    cluster_size: usize,
    failures: &mut FailureTally,
) -> Option<u32>
where
    W: VoxelStore + ?Sized,
    P: Player + ?Sized,
{
    let xp = experience_for(cluster_size)?;

    failures.tolerate(player.grant_experience(xp).await, "grant_experience", origin);
    failures.tolerate(
        store
            .trigger_effect(
                &Effect::Particle(RegistryKey::vanilla(REWARD_PARTICLE)),
                origin,
                None,
            )
            .await,
        "particle",
        origin,
    );
    failures.tolerate(
        store
            .trigger_effect(
                &Effect::Sound(REWARD_SOUND.to_string()),
                origin,
                Some(player.name()),
            )
            .await,
        "sound",
        origin,
    );

    Some(xp)
}
