//! Liquid volume in a semi-ellipsoidal head.
//!
//! A head of depth `a` on a tank of radius `r` is half of an ellipsoid of
//! revolution with semi-axes `r`, `r`, and `a`. A horizontal slice through
//! the head at height `t` above the tank bottom is a half-ellipse of area
//! `(π a / 2r) · (2rt − t²)`, so integrating from the bottom to `h` gives
//!
//! ```text
//! V(h) = π · a · h² · (3r − h) / (6r)
//! ```
//!
//! The same volume is often written around the equator with `y = h − r` as
//! `(π r a / 2) · (y − y³ / 3r² + 2r / 3)`; both expand to the same cubic.

use std::f64::consts::PI;

use uom::si::{
    f64::{Length, Volume},
    length::meter,
    volume::cubic_meter,
};

/// Returns the liquid volume in one semi-ellipsoidal head filled to `height`.
///
/// `radius` must be strictly positive and `head_depth` must lie in `(0, radius]`.
/// Heights outside `[0, 2r]` are clamped.
/// The result is non-decreasing in `height`, runs from zero when empty to
/// [`full_head_volume`] when full, and satisfies
/// `V(h) + V(2r − h) = full_head_volume`.
pub fn head_volume(radius: Length, head_depth: Length, height: Length) -> Volume {
    let r = radius.get::<meter>();
    let a = head_depth.get::<meter>();
    let t = height.get::<meter>() / r;

    Volume::new::<cubic_meter>(a * r * r * unit_head_volume(t))
}

/// Returns the volume `(2/3) π r² a` of one full semi-ellipsoidal head.
pub fn full_head_volume(radius: Length, head_depth: Length) -> Volume {
    let r = radius.get::<meter>();
    let a = head_depth.get::<meter>();

    Volume::new::<cubic_meter>(a * r * r * unit_head_volume(2.0))
}

/// Head volume per unit `a · r²`, filled to `t = h / r`.
///
/// `t` is clamped to `[0, 2]`; the result runs from `0` to `2π/3`.
pub(super) fn unit_head_volume(t: f64) -> f64 {
    let t = t.clamp(0.0, 2.0);
    PI * t * t * (3.0 - t) / 6.0
}
