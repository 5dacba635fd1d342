use tracing::debug;
use veinminer_core::{BlockPos, HostResult};

/// Counts host calls that failed while a vein was processed.
///
/// A failed removal, grant or effect never stops the vein: [`FailureTally::tolerate`]
/// records the failure and hands control back so the caller moves on to the
/// next block.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FailureTally {
    count: usize,
}

impl FailureTally {
    /// Empty tally.
    pub fn new() -> Self {
        Self::default()
    }

    /// Absorb `result`, returning whether the call succeeded.
    pub fn tolerate<T>(&mut self, result: HostResult<T>, op: &'static str, pos: BlockPos) -> bool {
        match result {
            Ok(_) => true,
            Err(err) => {
                self.count += 1;
                debug!(op, pos = %pos, error = %err, "Host call failed; continuing");
                false
            }
        }
    }

    /// Failures recorded so far.
    pub fn count(&self) -> usize {
        self.count
    }
}
