//! End-to-end vein mining scenarios against the in-memory host.

use veinminer::{
    BlockBreakEvent, BlockCategory, BlockPos, EnchantProfile, RegistryKey, SimTick, VeinMiner,
    VeinSettings, VoxelStore,
};
use veinminer_core::{Effect, RemovalMode};
use veinminer_testkit::{init_tracing, HostCall, MemoryWorld, TestPlayer};

fn key(id: &str) -> RegistryKey {
    RegistryKey::parse(id).expect("valid id")
}

fn event<'a>(
    pos: BlockPos,
    id: &str,
    player: &'a TestPlayer,
    tick: u64,
) -> BlockBreakEvent<'a, TestPlayer> {
    BlockBreakEvent {
        pos,
        block: key(id),
        player,
        tick: SimTick(tick),
    }
}

#[tokio::test]
async fn ore_line_is_mined_from_one_end() {
    init_tracing();
    let mut world = MemoryWorld::new();
    let line: Vec<_> = (0..5).map(|x| BlockPos::new(x, 12, 0)).collect();
    for &pos in &line {
        world.set_block(pos, "minecraft:iron_ore");
    }
    let player = TestPlayer::new("miner");
    let miner = VeinMiner::default();

    let outcome = miner
        .on_block_broken(&world, &event(line[0], "minecraft:iron_ore", &player, 1))
        .await
        .expect("vein mined");

    assert_eq!(outcome.category, BlockCategory::Ore);
    assert_eq!(outcome.cluster.len(), 5);
    assert_eq!(outcome.cluster[0], line[0]);
    assert_eq!(outcome.blocks_broken, 4);
    assert_eq!(outcome.experience, Some(1));
    assert_eq!(outcome.host_failures, 0);

    // The host clears the origin itself.
    assert!(world.block_at(line[0]).is_some());
    let mut removed: Vec<_> = world.removals().into_iter().map(|(pos, _)| pos).collect();
    removed.sort();
    assert_eq!(removed, line[1..].to_vec());
    assert!(world
        .removals()
        .iter()
        .all(|(_, mode)| *mode == RemovalMode::Destroy));
    assert!(player.items().is_empty());
    assert_eq!(player.experience(), vec![1]);
}

#[tokio::test]
async fn standing_player_breaks_only_one_block() {
    let mut world = MemoryWorld::new();
    world.fill(BlockPos::new(0, 0, 0), BlockPos::new(2, 0, 0), "minecraft:coal_ore");
    let player = TestPlayer::new("walker").sneaking(false);

    let outcome = VeinMiner::default()
        .on_block_broken(&world, &event(BlockPos::new(0, 0, 0), "minecraft:coal_ore", &player, 1))
        .await;

    assert!(outcome.is_none());
    assert!(world.removals().is_empty());
    assert!(world.effects().is_empty());
}

#[tokio::test]
async fn unrelated_blocks_do_not_start_a_vein() {
    let mut world = MemoryWorld::new();
    world.fill(BlockPos::new(0, 0, 0), BlockPos::new(2, 2, 2), "minecraft:oak_leaves");
    world.set_block(BlockPos::new(5, 0, 0), "minecraft:stone");
    let player = TestPlayer::new("miner");
    let miner = VeinMiner::default();

    for (pos, id) in [
        (BlockPos::new(1, 1, 1), "minecraft:oak_leaves"),
        (BlockPos::new(5, 0, 0), "minecraft:stone"),
    ] {
        assert!(miner.on_block_broken(&world, &event(pos, id, &player, 1)).await.is_none());
    }
    assert!(world.removals().is_empty());
}

#[tokio::test]
async fn silk_touch_vein_returns_ore_blocks() {
    let mut world = MemoryWorld::new();
    world.fill(BlockPos::new(0, 0, 0), BlockPos::new(0, 0, 3), "minecraft:deepslate_diamond_ore");
    let player = TestPlayer::new("miner").with_profile(EnchantProfile {
        silk_touch: true,
        fortune: 0,
    });

    let outcome = VeinMiner::default()
        .on_block_broken(
            &world,
            &event(BlockPos::new(0, 0, 0), "minecraft:deepslate_diamond_ore", &player, 3),
        )
        .await
        .expect("vein mined");

    assert_eq!(outcome.blocks_broken, 3);
    assert_eq!(player.item_total("minecraft:deepslate_diamond_ore"), 3);
    assert_eq!(player.item_total("minecraft:deepslate_diamond"), 0);
    assert!(world
        .removals()
        .iter()
        .all(|(_, mode)| *mode == RemovalMode::Replace));
    // 4 blocks: above the reward threshold but floor(4 / 4) = 1.
    assert_eq!(outcome.experience, Some(1));
}

#[tokio::test]
async fn lone_log_clears_leaf_on_radius_boundary_only() {
    let origin = BlockPos::new(0, 70, 0);
    let mut world = MemoryWorld::new().with_block(origin, "minecraft:spruce_log");
    world.set_block(origin.offset(0, 0, 8), "minecraft:spruce_leaves");
    world.set_block(origin.offset(0, 0, -9), "minecraft:spruce_leaves");
    let player = TestPlayer::new("lumberjack");

    let outcome = VeinMiner::default()
        .on_block_broken(&world, &event(origin, "minecraft:spruce_log", &player, 1))
        .await
        .expect("log handled");

    assert_eq!(outcome.cluster, vec![origin]);
    assert_eq!(outcome.blocks_broken, 0);
    assert_eq!(outcome.leaves_cleared, 1);
    assert_eq!(outcome.experience, None);
    assert!(world.block_at(origin.offset(0, 0, 8)).is_none());
    assert!(world.block_at(origin.offset(0, 0, -9)).is_some());
}

#[tokio::test]
async fn felled_tree_takes_its_canopy() {
    let base = BlockPos::new(10, 64, 10);
    let mut world = MemoryWorld::new();
    world.fill(base.offset(-2, 3, -2), base.offset(2, 6, 2), "minecraft:oak_leaves");
    for y in 0..6 {
        world.set_block(base.offset(0, y, 0), "minecraft:oak_log");
    }
    let canopy = world.count_blocks("minecraft:oak_leaves");
    let player = TestPlayer::new("lumberjack");

    let outcome = VeinMiner::default()
        .on_block_broken(&world, &event(base, "minecraft:oak_log", &player, 9))
        .await
        .expect("tree felled");

    assert_eq!(outcome.cluster.len(), 6);
    assert_eq!(outcome.blocks_broken, 5);
    assert_eq!(outcome.leaves_cleared, canopy);
    assert_eq!(world.count_blocks("minecraft:oak_leaves"), 0);
    assert_eq!(world.count_blocks("minecraft:oak_log"), 1);
    assert_eq!(outcome.experience, Some(1));
    assert!(player.items().is_empty());
}

#[tokio::test]
async fn leaf_limit_caps_the_sweep() {
    let base = BlockPos::new(0, 64, 0);
    let mut world = MemoryWorld::new();
    world.fill(base.offset(-4, 0, -4), base.offset(4, 8, 4), "minecraft:jungle_leaves");
    for y in 0..8 {
        world.set_block(base.offset(0, y, 0), "minecraft:jungle_log");
    }
    let player = TestPlayer::new("lumberjack");
    let settings = VeinSettings {
        leaf_limit: 40,
        ..VeinSettings::default()
    };

    let outcome = VeinMiner::new(settings, 0)
        .on_block_broken(&world, &event(base, "minecraft:jungle_log", &player, 1))
        .await
        .expect("tree felled");

    assert_eq!(outcome.leaves_cleared, 40);
    // The reward still follows a capped sweep.
    assert_eq!(outcome.experience, Some(2));
}

#[tokio::test]
async fn gravel_drops_replay_identically_for_the_same_event() {
    let build = || {
        let mut world = MemoryWorld::new();
        world.fill(BlockPos::new(0, 0, 0), BlockPos::new(3, 3, 3), "minecraft:gravel");
        world
    };
    let profile = EnchantProfile {
        silk_touch: false,
        fortune: 2,
    };
    let miner = VeinMiner::new(VeinSettings::default(), 1234);
    let origin = BlockPos::new(0, 0, 0);

    let first_world = build();
    let first = TestPlayer::new("digger").with_profile(profile);
    miner
        .on_block_broken(&first_world, &event(origin, "minecraft:gravel", &first, 77))
        .await
        .expect("vein mined");

    let second_world = build();
    let second = TestPlayer::new("digger").with_profile(profile);
    miner
        .on_block_broken(&second_world, &event(origin, "minecraft:gravel", &second, 77))
        .await
        .expect("vein mined");

    assert_eq!(first.items(), second.items());
    assert_eq!(first.items().len(), 63);
    assert_eq!(
        first.item_total("minecraft:flint") + first.item_total("minecraft:gravel"),
        63
    );
}

#[tokio::test]
async fn vein_is_capped_at_max_cluster() {
    let mut world = MemoryWorld::new();
    world.fill(BlockPos::new(-6, -6, -6), BlockPos::new(6, 6, 6), "minecraft:nether_quartz_ore");
    let player = TestPlayer::new("miner");

    let outcome = VeinMiner::default()
        .on_block_broken(
            &world,
            &event(BlockPos::new(0, 0, 0), "minecraft:nether_quartz_ore", &player, 1),
        )
        .await
        .expect("vein mined");

    assert_eq!(outcome.cluster.len(), 128);
    assert_eq!(outcome.blocks_broken, 127);
    assert_eq!(outcome.experience, Some(30));
}

#[tokio::test]
async fn failing_host_degrades_without_aborting() {
    let mut world = MemoryWorld::new();
    world.fill(BlockPos::new(0, 0, 0), BlockPos::new(1, 1, 2), "minecraft:gravel");
    world.fail_calls(HostCall::RemoveBlock);
    world.fail_calls(HostCall::TriggerEffect);
    let player = TestPlayer::new("ghost");
    player.fail_calls(HostCall::GrantItem);
    player.fail_calls(HostCall::GrantExperience);

    let outcome = VeinMiner::default()
        .on_block_broken(&world, &event(BlockPos::new(0, 0, 0), "minecraft:gravel", &player, 1))
        .await
        .expect("vein handled");

    assert_eq!(outcome.cluster.len(), 12);
    assert_eq!(outcome.blocks_broken, 11);
    assert_eq!(outcome.experience, Some(3));
    // 11 removals + 11 grants + xp + particle + sound
    assert_eq!(outcome.host_failures, 25);
    assert_eq!(world.count_blocks("minecraft:gravel"), 12);
}

#[tokio::test]
async fn reward_effects_target_the_miner() {
    let mut world = MemoryWorld::new();
    world.fill(BlockPos::new(0, 0, 0), BlockPos::new(0, 0, 2), "minecraft:lapis_ore");
    let player = TestPlayer::new("alex");

    VeinMiner::default()
        .on_block_broken(&world, &event(BlockPos::new(0, 0, 0), "minecraft:lapis_ore", &player, 1))
        .await
        .expect("vein mined");

    let effects = world.effects();
    assert_eq!(effects.len(), 2);
    assert!(matches!(effects[0].0, Effect::Particle(_)));
    assert_eq!(effects[1].2.as_deref(), Some("alex"));
    assert_eq!(player.experience(), vec![0]);
}
