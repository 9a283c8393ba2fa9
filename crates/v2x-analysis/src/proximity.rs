//! Communication-mesh membership test and observation degradation.

use std::fmt;

use rand_distr::{Distribution, Normal};
use v2x_core::{SimRng, Vec2, VehicleId};

/// An edge of the communication mesh: the pair is currently within radio
/// range of each other.  `first < second` canonically.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CommLink {
    pub first: VehicleId,
    pub second: VehicleId,
}

impl fmt::Display for CommLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <-> {}", self.first, self.second)
    }
}

/// Mesh test: a link exists iff the current Euclidean distance between the
/// observed positions is within `comm_radius` (inclusive).
///
/// Purely geometric — velocity never enters.  Non-finite distances (from a
/// degenerate observed position) yield no link.
pub fn comm_link(
    a: VehicleId,
    pos_a: Vec2,
    b: VehicleId,
    pos_b: Vec2,
    comm_radius: f64,
) -> Option<CommLink> {
    let dist = pos_a.distance(pos_b);
    if !dist.is_finite() || dist > comm_radius {
        return None;
    }
    let (first, second) = VehicleId::ordered(a, b);
    Some(CommLink { first, second })
}

/// Position-noise degradation: the reported position is the true one plus
/// independent Gaussian offsets on each axis.
///
/// Called once per vehicle per tick so that the vehicle's broadcast and every
/// distance test involving it see the same observed position.  A
/// non-positive `std_dev`, an unconstructible distribution, or a non-finite
/// sample all fall back to the true position.
pub fn perturb_position(position: Vec2, std_dev: f64, rng: &mut SimRng) -> Vec2 {
    if std_dev <= 0.0 {
        return position;
    }
    let Ok(normal) = Normal::new(0.0, std_dev) else {
        return position;
    };
    let offset = Vec2::new(normal.sample(rng.inner()), normal.sample(rng.inner()));
    let observed = position + offset;
    if observed.is_finite() { observed } else { position }
}
