#![warn(missing_docs)]
//! Deterministic host doubles for vein mining tests.
//!
//! [`MemoryWorld`] and [`TestPlayer`] implement the host traits over plain
//! in-memory state, record every mutating call, and can be told to reject
//! specific kinds of call to exercise failure tolerance.

mod memory_world;
mod player;

pub use memory_world::*;
pub use player::*;

use std::sync::Once;

/// Kinds of host call that can be made to fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HostCall {
    /// [`veinminer_core::VoxelStore::remove_block`].
    RemoveBlock,
    /// [`veinminer_core::VoxelStore::trigger_effect`].
    TriggerEffect,
    /// [`veinminer_core::Player::grant_item`].
    GrantItem,
    /// [`veinminer_core::Player::grant_experience`].
    GrantExperience,
}

static TRACING: Once = Once::new();

/// Install a test-writer `tracing` subscriber honoring `RUST_LOG`. Safe to call repeatedly.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .with_test_writer()
            .try_init();
    });
}
