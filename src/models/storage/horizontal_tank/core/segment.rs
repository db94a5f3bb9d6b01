//! Circular segment area.

use std::f64::consts::PI;

use uom::si::{
    area::square_meter,
    f64::{Area, Length},
    length::meter,
};

/// Returns the area of a circular segment of height `height` in a circle of
/// radius `radius`.
///
/// This is the liquid cross-section of a horizontal cylinder filled to
/// `height`:
///
/// ```text
/// A(h) = r² · acos((r − h) / r) − (r − h) · √(2rh − h²)
/// ```
///
/// `radius` must be strictly positive.
/// Heights outside `[0, 2r]` are clamped, so the result always lies in `[0, πr²]`.
pub fn segment_area(radius: Length, height: Length) -> Area {
    let r = radius.get::<meter>();
    let t = height.get::<meter>() / r;

    Area::new::<square_meter>(r * r * unit_segment_area(t))
}

/// Returns the full cross-sectional area `πr²` of a circle of radius `radius`.
pub fn circle_area(radius: Length) -> Area {
    let r = radius.get::<meter>();
    Area::new::<square_meter>(r * r * PI)
}

/// Segment area in a circle of unit radius filled to `t = h / r`.
///
/// `t` is clamped to `[0, 2]`; the result lies in `[0, π]`.
pub(super) fn unit_segment_area(t: f64) -> f64 {
    let t = t.clamp(0.0, 2.0);

    let offset = 1.0 - t;
    // Rounding can push these just outside the acos and sqrt domains at the extremes.
    let cos_half_angle = offset.clamp(-1.0, 1.0);
    let half_chord = (2.0 * t - t * t).max(0.0).sqrt();

    (cos_half_angle.acos() - offset * half_chord).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::{assert_relative_eq, relative_eq};
    use proptest::prelude::*;
    use uom::si::{f64::Ratio, length::inch, ratio::ratio};

    fn inches(value: f64) -> Length {
        Length::new::<inch>(value)
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn boundary_values() {
        let r = inches(12.0);
        let r_si = r.get::<meter>();

        assert_eq!(segment_area(r, inches(0.0)).get::<square_meter>(), 0.0);
        assert_relative_eq!(
            segment_area(r, inches(24.0)).get::<square_meter>(),
            PI * r_si * r_si,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            segment_area(r, inches(12.0)).get::<square_meter>(),
            PI * r_si * r_si / 2.0,
            max_relative = 1e-12
        );
    }

    #[test]
    fn half_height_is_half_the_circle() {
        for diameter in [12.0, 24.0, 37.5, 48.0] {
            let r = inches(diameter / 2.0);
            let fraction: Ratio = segment_area(r, r) / circle_area(r);
            assert_relative_eq!(fraction.get::<ratio>(), 0.5);
        }
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn heights_outside_the_circle_are_clamped() {
        let r = inches(12.0);

        assert_eq!(segment_area(r, inches(-5.0)), segment_area(r, inches(0.0)));
        assert_eq!(segment_area(r, inches(30.0)), segment_area(r, inches(24.0)));
    }

    #[test]
    fn quarter_height_matches_published_table() {
        // A quarter-height fill holds about 19.55% of a plain cylinder.
        let r = inches(12.0);
        let fraction: Ratio = segment_area(r, inches(6.0)) / circle_area(r);
        assert_relative_eq!(
            fraction.get::<ratio>(),
            0.195_501_109_477_885,
            max_relative = 1e-12
        );
        assert_relative_eq!(unit_segment_area(0.5) / PI, 0.195_501_109_477_885, max_relative = 1e-12);
    }

    proptest! {
        #[test]
        fn bounded_by_the_full_circle(r in 0.5_f64..100.0, t in 0.0_f64..=1.0) {
            let radius = inches(r);
            let area = segment_area(radius, inches(2.0 * r * t)).get::<square_meter>();
            let full = circle_area(radius).get::<square_meter>();

            prop_assert!(area >= 0.0);
            prop_assert!(area <= full * (1.0 + 1e-12));
        }

        #[test]
        fn strictly_increasing(r in 0.5_f64..100.0, t in 0.0_f64..0.99, step in 0.001_f64..0.5) {
            let radius = inches(r);
            let low = 2.0 * r * t;
            let high = (low + step * r).min(2.0 * r);

            prop_assert!(segment_area(radius, inches(low)) < segment_area(radius, inches(high)));
        }

        #[test]
        fn complements_its_reflection(r in 0.5_f64..100.0, t in 0.0_f64..=1.0) {
            let radius = inches(r);
            let h = 2.0 * r * t;
            let below = segment_area(radius, inches(h)).get::<square_meter>();
            let above = segment_area(radius, inches(2.0 * r - h)).get::<square_meter>();
            let full = circle_area(radius).get::<square_meter>();

            prop_assert!(relative_eq!(below + above, full, max_relative = 1e-10));
        }

        #[test]
        fn unit_area_is_bounded(t in -1.0_f64..3.0) {
            let area = unit_segment_area(t);
            prop_assert!((0.0..=PI).contains(&area));
        }
    }
}
