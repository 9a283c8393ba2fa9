//! Time-to-collision prediction via constant-velocity closest approach.

use std::fmt;

use v2x_core::VehicleId;
use v2x_fleet::Vehicle;

/// A flagged collision risk for one vehicle pair.
///
/// `first < second` canonically, so a pair is reported identically whichever
/// way it was evaluated.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Warning {
    pub first: VehicleId,
    pub second: VehicleId,
    /// Predicted seconds until the pair reaches its minimum mutual distance.
    pub time_to_collision: f64,
    /// The predicted minimum distance itself.
    pub min_distance: f64,
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "vehicles {} and {} may collide in {:.2}s (min distance {:.2})",
            self.first, self.second, self.time_to_collision, self.min_distance
        )
    }
}

/// Decide whether two vehicles are on a collision course.
///
/// Both vehicles are extrapolated at their constant velocity vectors.  With
/// `d = pos_b - pos_a` and `w = vel_b - vel_a`:
///
/// - `dot(w, d) >= 0` — the pair is diverging or co-moving: no risk.
/// - `dot(w, w) == 0` — identical velocities (parallel, non-closing): no
///   risk, rather than a division by zero.
/// - otherwise the unconstrained time of closest approach is
///   `t* = -dot(w, d) / dot(w, w)`; a `t* <= 0` minimum lies in the past.
/// - the pair is flagged iff the predicted distance at `t*` is within
///   `collision_radius` (inclusive).
///
/// Any non-finite intermediate resolves to `None` — never propagated.
/// The result is independent of argument order.
pub fn predict_collision(a: &Vehicle, b: &Vehicle, collision_radius: f64) -> Option<Warning> {
    let d = b.position - a.position;
    let w = b.velocity() - a.velocity();

    let closing = w.dot(d);
    if !closing.is_finite() || closing >= 0.0 {
        return None;
    }

    let w_sq = w.dot(w);
    if w_sq == 0.0 || !w_sq.is_finite() {
        return None;
    }

    let t = -closing / w_sq;
    if !t.is_finite() || t <= 0.0 {
        return None;
    }

    let at_a = a.position + a.velocity() * t;
    let at_b = b.position + b.velocity() * t;
    if !at_a.is_finite() || !at_b.is_finite() {
        return None;
    }

    let min_distance = at_a.distance(at_b);
    if !min_distance.is_finite() || min_distance > collision_radius {
        return None;
    }

    let (first, second) = VehicleId::ordered(a.id, b.id);
    Some(Warning {
        first,
        second,
        time_to_collision: t,
        min_distance,
    })
}
