#![warn(missing_docs)]
//! Vein discovery and removal over an abstract host world.

mod cluster;
pub mod drops;
mod executor;
mod failures;
mod foliage;
mod reward;
mod vein;

pub use cluster::*;
pub use drops::{flint_chance, resolve_drop, DropDecision, ItemDrop};
pub use executor::*;
pub use failures::*;
pub use foliage::*;
pub use reward::*;
pub use vein::*;
