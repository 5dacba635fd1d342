//! Integer block coordinates.

use serde::{Deserialize, Serialize};
use std::fmt;

/// World-space block coordinate.
///
/// Ordering is lexical by `(x, y, z)` so positions can key ordered sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BlockPos {
    /// East/west axis.
    pub x: i32,
    /// Vertical axis.
    pub y: i32,
    /// North/south axis.
    pub z: i32,
}

impl BlockPos {
    /// The six face-adjacent offsets in expansion order: +x, -x, +y, -y, +z, -z.
    pub const FACE_OFFSETS: [BlockPos; 6] = [
        BlockPos::new(1, 0, 0),
        BlockPos::new(-1, 0, 0),
        BlockPos::new(0, 1, 0),
        BlockPos::new(0, -1, 0),
        BlockPos::new(0, 0, 1),
        BlockPos::new(0, 0, -1),
    ];

    /// Construct a position.
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Translate by the given deltas.
    pub const fn offset(self, dx: i32, dy: i32, dz: i32) -> Self {
        Self::new(self.x + dx, self.y + dy, self.z + dz)
    }

    /// Translate by the given deltas, or `None` if any axis leaves the `i32` range.
    pub const fn checked_offset(self, dx: i32, dy: i32, dz: i32) -> Option<Self> {
        match (
            self.x.checked_add(dx),
            self.y.checked_add(dy),
            self.z.checked_add(dz),
        ) {
            (Some(x), Some(y), Some(z)) => Some(Self::new(x, y, z)),
            _ => None,
        }
    }

    /// Face-adjacent neighbors in [`Self::FACE_OFFSETS`] order.
    ///
    /// Neighbors past the edge of the coordinate range are omitted.
    pub fn neighbors(self) -> impl Iterator<Item = BlockPos> {
        Self::FACE_OFFSETS
            .into_iter()
            .filter_map(move |d| self.checked_offset(d.x, d.y, d.z))
    }

    /// Squared Euclidean distance. Computed in `i64` so far-apart positions cannot overflow.
    pub fn distance_sq(self, other: BlockPos) -> i64 {
        let dx = i64::from(self.x) - i64::from(other.x);
        let dy = i64::from(self.y) - i64::from(other.y);
        let dz = i64::from(self.z) - i64::from(other.z);
        dx * dx + dy * dy + dz * dz
    }

    /// Cheap, stable mixing of the three components for RNG seeding.
    pub fn spatial_hash(self) -> u64 {
        let x = (self.x as u32 as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15);
        let y = (self.y as u32 as u64).wrapping_mul(0xC2B2_AE3D_27D4_EB4F);
        let z = (self.z as u32 as u64).wrapping_mul(0x1656_67B1_9E37_79F9);
        x ^ y.rotate_left(21) ^ z.rotate_left(42)
    }
}

impl fmt::Display for BlockPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.x, self.y, self.z)
    }
}
