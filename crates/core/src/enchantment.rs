use crate::RegistryKey;
use serde::{Deserialize, Serialize};

/// Tool enchantments the vein miner knows about.
///
/// Lookup is by exact registry identifier; anything else on the tool is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnchantmentType {
    /// Allows silk touch harvesting of blocks
    SilkTouch,
    /// Increases block drop amounts
    Fortune,
}

impl EnchantmentType {
    /// Resolve a host enchantment identifier such as `minecraft:silk_touch`.
    pub fn from_key(key: &RegistryKey) -> Option<Self> {
        if key.namespace() != crate::DEFAULT_NAMESPACE {
            return None;
        }
        match key.path() {
            "silk_touch" => Some(EnchantmentType::SilkTouch),
            "fortune" => Some(EnchantmentType::Fortune),
            _ => None,
        }
    }
}

/// An enchantment with a specific level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Enchantment {
    /// The type of enchantment
    pub enchantment_type: EnchantmentType,
    /// The level of the enchantment
    pub level: u32,
}

impl Enchantment {
    /// Create a new enchantment
    pub fn new(enchantment_type: EnchantmentType, level: u32) -> Self {
        Self {
            enchantment_type,
            level,
        }
    }

    /// Parse a raw host entry. A missing level counts as level 1; unknown or
    /// malformed identifiers yield `None`.
    pub fn from_raw(id: &str, level: Option<u32>) -> Option<Self> {
        let key = RegistryKey::parse(id).ok()?;
        let enchantment_type = EnchantmentType::from_key(&key)?;
        Some(Self::new(enchantment_type, level.unwrap_or(1)))
    }
}

/// Drop-relevant view of the acting player's held tool, fixed for one event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EnchantProfile {
    /// Blocks are harvested whole instead of dropping their material.
    pub silk_touch: bool,
    /// Bonus roll ceiling for ores and flint chance for gravel.
    pub fortune: u32,
}

impl EnchantProfile {
    /// Profile of an unenchanted tool (or an empty hand).
    pub const NONE: Self = Self {
        silk_touch: false,
        fortune: 0,
    };

    /// Build a profile from the tool's enchantments. The first entry of each type wins.
    pub fn from_enchantments<'a>(enchantments: impl IntoIterator<Item = &'a Enchantment>) -> Self {
        let mut silk = None;
        let mut fortune = None;
        for ench in enchantments {
            match ench.enchantment_type {
                EnchantmentType::SilkTouch => {
                    silk.get_or_insert(ench.level);
                }
                EnchantmentType::Fortune => {
                    fortune.get_or_insert(ench.level);
                }
            }
        }
        Self {
            silk_touch: silk.unwrap_or(0) > 0,
            fortune: fortune.unwrap_or(0),
        }
    }

    /// Build a profile straight from raw `(identifier, level)` pairs reported by the host.
    pub fn from_raw<'a>(entries: impl IntoIterator<Item = (&'a str, Option<u32>)>) -> Self {
        let parsed: Vec<Enchantment> = entries
            .into_iter()
            .filter_map(|(id, level)| Enchantment::from_raw(id, level))
            .collect();
        Self::from_enchantments(&parsed)
    }
}
