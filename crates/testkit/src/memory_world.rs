use std::collections::{BTreeMap, HashSet};
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use tracing::trace;
use veinminer_core::{BlockPos, Effect, HostError, HostResult, RegistryKey, RemovalMode, VoxelStore};

use crate::HostCall;

/// Recorded effect: what, where, and for whom.
pub type EffectRecord = (Effect, BlockPos, Option<String>);

/// Sparse in-memory block store. Unset positions read as air.
///
/// Uses a `BTreeMap` so dumps and counts iterate in a stable order.
#[derive(Default)]
pub struct MemoryWorld {
    blocks: Mutex<BTreeMap<BlockPos, RegistryKey>>,
    removals: Mutex<Vec<(BlockPos, RemovalMode)>>,
    effects: Mutex<Vec<EffectRecord>>,
    failing: Mutex<HashSet<HostCall>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn key(id: &str) -> RegistryKey {
    RegistryKey::parse(id).unwrap_or_else(|err| panic!("invalid block id `{id}`: {err}"))
}

impl MemoryWorld {
    /// Empty world.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`Self::set_block`].
    pub fn with_block(mut self, pos: BlockPos, id: &str) -> Self {
        self.set_block(pos, id);
        self
    }

    /// Place `id` at `pos`. Panics on an invalid identifier.
    pub fn set_block(&mut self, pos: BlockPos, id: &str) {
        lock(&self.blocks).insert(pos, key(id));
    }

    /// Turn `pos` into air.
    pub fn clear_block(&mut self, pos: BlockPos) {
        lock(&self.blocks).remove(&pos);
    }

    /// Fill the inclusive box between `min` and `max` with `id`.
    pub fn fill(&mut self, min: BlockPos, max: BlockPos, id: &str) {
        let block = key(id);
        let mut blocks = lock(&self.blocks);
        for x in min.x..=max.x {
            for y in min.y..=max.y {
                for z in min.z..=max.z {
                    blocks.insert(BlockPos::new(x, y, z), block.clone());
                }
            }
        }
    }

    /// Number of positions holding `id`.
    pub fn count_blocks(&self, id: &str) -> usize {
        let block = key(id);
        lock(&self.blocks).values().filter(|b| **b == block).count()
    }

    /// Make every future call of `call` fail.
    pub fn fail_calls(&self, call: HostCall) {
        lock(&self.failing).insert(call);
    }

    /// Successful removals in call order.
    pub fn removals(&self) -> Vec<(BlockPos, RemovalMode)> {
        lock(&self.removals).clone()
    }

    /// Successful effects in call order.
    pub fn effects(&self) -> Vec<EffectRecord> {
        lock(&self.effects).clone()
    }

    fn check(&self, call: HostCall) -> HostResult<()> {
        if lock(&self.failing).contains(&call) {
            return Err(HostError::Rejected(format!("{call:?} disabled by test")));
        }
        Ok(())
    }
}

#[async_trait]
impl VoxelStore for MemoryWorld {
    fn block_at(&self, pos: BlockPos) -> Option<RegistryKey> {
        lock(&self.blocks).get(&pos).cloned()
    }

    async fn remove_block(&self, pos: BlockPos, mode: RemovalMode) -> HostResult<()> {
        self.check(HostCall::RemoveBlock)?;
        let previous = lock(&self.blocks).remove(&pos);
        trace!(pos = %pos, ?mode, ?previous, "remove_block");
        lock(&self.removals).push((pos, mode));
        Ok(())
    }

    async fn trigger_effect(
        &self,
        effect: &Effect,
        pos: BlockPos,
        audience: Option<&str>,
    ) -> HostResult<()> {
        self.check(HostCall::TriggerEffect)?;
        lock(&self.effects).push((effect.clone(), pos, audience.map(str::to_string)));
        Ok(())
    }
}
