use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use veinminer_core::{EnchantProfile, HostError, HostResult, Player, RegistryKey};

use crate::HostCall;

/// Scripted player that records what it receives.
pub struct TestPlayer {
    name: String,
    sneaking: bool,
    profile: EnchantProfile,
    items: Mutex<Vec<(String, u32)>>,
    experience: Mutex<Vec<u32>>,
    failing: Mutex<HashSet<HostCall>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl TestPlayer {
    /// A sneaking player holding an unenchanted tool.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            sneaking: true,
            profile: EnchantProfile::NONE,
            items: Mutex::new(Vec::new()),
            experience: Mutex::new(Vec::new()),
            failing: Mutex::new(HashSet::new()),
        }
    }

    /// Set the held tool's enchantments.
    pub fn with_profile(mut self, profile: EnchantProfile) -> Self {
        self.profile = profile;
        self
    }

    /// Set the crouch posture.
    pub fn sneaking(mut self, sneaking: bool) -> Self {
        self.sneaking = sneaking;
        self
    }

    /// Make every future call of `call` fail.
    pub fn fail_calls(&self, call: HostCall) {
        lock(&self.failing).insert(call);
    }

    /// Granted items as `(identifier, count)` in call order.
    pub fn items(&self) -> Vec<(String, u32)> {
        lock(&self.items).clone()
    }

    /// Total count granted of `id`.
    pub fn item_total(&self, id: &str) -> u32 {
        lock(&self.items)
            .iter()
            .filter(|(item, _)| item == id)
            .map(|(_, count)| count)
            .sum()
    }

    /// Experience grants in call order.
    pub fn experience(&self) -> Vec<u32> {
        lock(&self.experience).clone()
    }

    fn check(&self, call: HostCall) -> HostResult<()> {
        if lock(&self.failing).contains(&call) {
            return Err(HostError::PlayerGone(self.name.clone()));
        }
        Ok(())
    }
}

#[async_trait]
impl Player for TestPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_sneaking(&self) -> bool {
        self.sneaking
    }

    fn enchant_profile(&self) -> EnchantProfile {
        self.profile
    }

    async fn grant_item(&self, item: &RegistryKey, count: u32) -> HostResult<()> {
        self.check(HostCall::GrantItem)?;
        lock(&self.items).push((item.to_string(), count));
        Ok(())
    }

    async fn grant_experience(&self, amount: u32) -> HostResult<()> {
        self.check(HostCall::GrantExperience)?;
        lock(&self.experience).push(amount);
        Ok(())
    }
}
