//! Strongly typed vehicle identifier.
//!
//! `VehicleId` is `Copy + Ord + Hash` so it can be used as a map key and as
//! the canonical ordering for reported pairs without ceremony.  The inner
//! integer is `pub` to allow direct indexing into the fleet `Vec` via
//! `id.0 as usize`, but callers should prefer the `.index()` helper.

use std::fmt;

/// Index of a vehicle in the fleet, assigned sequentially in spawn order.
///
/// `Display` renders the first 26 ids as the call signs `A`–`Z` (the naming
/// scheme the radar presentation uses); larger fleets fall back to `V{n}`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VehicleId(pub u32);

impl VehicleId {
    /// Cast to `usize` for direct use as a `Vec` index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Order two ids canonically: `(low, high)` regardless of argument order.
    #[inline]
    pub fn ordered(a: VehicleId, b: VehicleId) -> (VehicleId, VehicleId) {
        if a <= b { (a, b) } else { (b, a) }
    }
}

impl fmt::Display for VehicleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 < 26 {
            write!(f, "{}", (b'A' + self.0 as u8) as char)
        } else {
            write!(f, "V{}", self.0)
        }
    }
}

impl From<VehicleId> for usize {
    #[inline(always)]
    fn from(id: VehicleId) -> usize {
        id.0 as usize
    }
}

impl TryFrom<usize> for VehicleId {
    type Error = std::num::TryFromIntError;
    fn try_from(n: usize) -> Result<VehicleId, Self::Error> {
        u32::try_from(n).map(VehicleId)
    }
}
