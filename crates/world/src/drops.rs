//! Per-category drop policy.
//!
//! The resolver only decides; the executor performs the removal and grant.
//! Randomness comes from the caller so tests can pin outcomes with a seeded RNG.

use rand::Rng;
use veinminer_core::{BlockCategory, EnchantProfile, RegistryKey, RemovalMode};

/// Flint chance for gravel without fortune.
pub const BASE_FLINT_CHANCE: f64 = 0.1;

/// Extra flint chance per fortune level.
pub const FLINT_CHANCE_PER_FORTUNE: f64 = 0.1;

/// Suffix stripped from ore identifiers to approximate the mined material.
pub const ORE_SUFFIX: &str = "_ore";

/// Item handed straight to the player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemDrop {
    /// Item identifier.
    pub item: RegistryKey,
    /// Stack size, always at least 1.
    pub count: u32,
}

/// What to do with one block of a vein.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropDecision {
    /// How the block leaves the world.
    pub removal: RemovalMode,
    /// Item granted on top of whatever the host drops itself.
    pub grant: Option<ItemDrop>,
}

/// Flint probability for a gravel block mined with `fortune`.
pub fn flint_chance(fortune: u32) -> f64 {
    if fortune > 0 {
        (BASE_FLINT_CHANCE + FLINT_CHANCE_PER_FORTUNE * f64::from(fortune)).min(1.0)
    } else {
        BASE_FLINT_CHANCE
    }
}

/// Decide removal mode and granted item for `block` of `category`.
///
/// Returns `None` for categories that are never vein-mined (leaves, unknown).
pub fn resolve_drop<R: Rng + ?Sized>(
    category: BlockCategory,
    block: &RegistryKey,
    profile: EnchantProfile,
    rng: &mut R,
) -> Option<DropDecision> {
    let decision = match category {
        BlockCategory::Ore if profile.silk_touch => DropDecision {
            removal: RemovalMode::Replace,
            grant: Some(ItemDrop {
                item: block.clone(),
                count: 1,
            }),
        },
        BlockCategory::Ore => {
            let bonus = if profile.fortune > 0 {
                rng.gen_range(0..=profile.fortune)
            } else {
                0
            };
            DropDecision {
                removal: RemovalMode::Destroy,
                grant: (bonus > 0).then(|| ItemDrop {
                    item: block.strip_path_suffix(ORE_SUFFIX),
                    count: bonus,
                }),
            }
        }
        BlockCategory::Log => DropDecision {
            removal: RemovalMode::Destroy,
            grant: None,
        },
        BlockCategory::Gravel => {
            let item = if rng.gen_bool(flint_chance(profile.fortune)) {
                RegistryKey::vanilla("flint")
            } else {
                block.clone()
            };
            DropDecision {
                removal: RemovalMode::Destroy,
                grant: Some(ItemDrop { item, count: 1 }),
            }
        }
        BlockCategory::Leaf | BlockCategory::None => return None,
    };
    Some(decision)
}
