//! Static block group membership tables and the classifier built on them.

use crate::RegistryKey;
use serde::{Deserialize, Serialize};

/// Ore blocks that start an ore vein.
pub const ORES: &[&str] = &[
    "minecraft:ancient_debris",
    "minecraft:coal_ore",
    "minecraft:copper_ore",
    "minecraft:deepslate_coal_ore",
    "minecraft:deepslate_copper_ore",
    "minecraft:deepslate_diamond_ore",
    "minecraft:deepslate_emerald_ore",
    "minecraft:deepslate_gold_ore",
    "minecraft:deepslate_iron_ore",
    "minecraft:deepslate_lapis_ore",
    "minecraft:deepslate_redstone_ore",
    "minecraft:diamond_ore",
    "minecraft:emerald_ore",
    "minecraft:gold_ore",
    "minecraft:iron_ore",
    "minecraft:lapis_ore",
    "minecraft:lit_deepslate_redstone_ore",
    "minecraft:lit_redstone_ore",
    "minecraft:nether_gold_ore",
    "minecraft:nether_quartz_ore",
    "minecraft:redstone_ore",
];

/// Log and stem blocks that make up a tree trunk.
pub const LOGS: &[&str] = &[
    "minecraft:acacia_log",
    "minecraft:birch_log",
    "minecraft:cherry_log",
    "minecraft:crimson_stem",
    "minecraft:dark_oak_log",
    "minecraft:jungle_log",
    "minecraft:mangrove_log",
    "minecraft:oak_log",
    "minecraft:spruce_log",
    "minecraft:stripped_acacia_log",
    "minecraft:stripped_birch_log",
    "minecraft:stripped_cherry_log",
    "minecraft:stripped_crimson_stem",
    "minecraft:stripped_dark_oak_log",
    "minecraft:stripped_jungle_log",
    "minecraft:stripped_mangrove_log",
    "minecraft:stripped_oak_log",
    "minecraft:stripped_spruce_log",
    "minecraft:stripped_warped_stem",
    "minecraft:warped_stem",
];

/// Foliage cleared around a felled tree. Nether hyphae stand in for the fungus canopy.
pub const LEAVES: &[&str] = &[
    "minecraft:acacia_leaves",
    "minecraft:birch_leaves",
    "minecraft:cherry_leaves",
    "minecraft:crimson_hyphae",
    "minecraft:dark_oak_leaves",
    "minecraft:jungle_leaves",
    "minecraft:mangrove_leaves",
    "minecraft:oak_leaves",
    "minecraft:spruce_leaves",
    "minecraft:warped_hyphae",
];

/// Gravel.
pub const GRAVEL: &[&str] = &["minecraft:gravel"];

/// Block group a block belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockCategory {
    /// Any of [`ORES`].
    Ore,
    /// Any of [`LOGS`].
    Log,
    /// Any of [`LEAVES`].
    Leaf,
    /// Any of [`GRAVEL`].
    Gravel,
    /// Absent or unrecognized.
    None,
}

impl BlockCategory {
    const GROUPED: [(BlockCategory, &'static [&'static str]); 4] = [
        (BlockCategory::Ore, ORES),
        (BlockCategory::Log, LOGS),
        (BlockCategory::Leaf, LEAVES),
        (BlockCategory::Gravel, GRAVEL),
    ];

    /// Classify an optional block handle.
    ///
    /// Absent blocks, unknown identifiers, and identifiers listed in more than
    /// one table all classify as [`BlockCategory::None`].
    pub fn of(block: Option<&RegistryKey>) -> Self {
        let Some(key) = block else {
            return BlockCategory::None;
        };

        let mut found = BlockCategory::None;
        for (category, table) in Self::GROUPED {
            if table.iter().any(|id| key.is(id)) {
                if found != BlockCategory::None {
                    return BlockCategory::None;
                }
                found = category;
            }
        }
        found
    }

    /// Whether breaking a block of this category starts a vein.
    pub fn starts_vein(self) -> bool {
        matches!(
            self,
            BlockCategory::Ore | BlockCategory::Log | BlockCategory::Gravel
        )
    }

    /// Canonical string key used in logs.
    pub const fn as_str(self) -> &'static str {
        match self {
            BlockCategory::Ore => "ore",
            BlockCategory::Log => "log",
            BlockCategory::Leaf => "leaf",
            BlockCategory::Gravel => "gravel",
            BlockCategory::None => "none",
        }
    }
}
