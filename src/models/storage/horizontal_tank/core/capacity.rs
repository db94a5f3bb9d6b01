//! Tank capacity and the height-to-fill mapping.

use std::f64::consts::PI;

use log::debug;
use uom::{
    ConstZero,
    si::{
        f64::{Length, Ratio, Volume},
        ratio::ratio,
    },
};

use super::{
    TankGeometry,
    head::{full_head_volume, head_volume, unit_head_volume},
    segment::{circle_area, segment_area, unit_segment_area},
};

impl TankGeometry {
    /// Returns the total internal volume of the tank.
    ///
    /// Returns `None` for a flat-ended tank built without a length.
    #[must_use]
    pub fn capacity(&self) -> Option<Volume> {
        let cylinder_length = self.cylinder_length()?;
        let body = circle_area(self.radius()) * cylinder_length;

        let Some(head_depth) = self.head_depth() else {
            return Some(body);
        };
        let heads = full_head_volume(self.radius(), head_depth) * 2.0;

        Some(body + heads)
    }

    /// Returns the liquid volume at `fill_height`, clamped to the tank.
    ///
    /// Returns `None` for a flat-ended tank built without a length.
    #[must_use]
    pub fn liquid_volume(&self, fill_height: Length) -> Option<Volume> {
        let cylinder_length = self.cylinder_length()?;
        let body = segment_area(self.radius(), fill_height) * cylinder_length;

        Some(match self.head_depth() {
            Some(head_depth) => body + head_volume(self.radius(), head_depth, fill_height) * 2.0,
            None => body,
        })
    }

    /// Returns the filled fraction of the tank volume at `fill_height`.
    ///
    /// Heights below the bottom or above the top are clamped to the tank
    /// and report exactly `0` or `1`.
    /// The result is NaN only if `fill_height` is NaN, and is finite for any
    /// geometry the constructors accept, however large or small.
    pub(crate) fn fill_fraction(&self, fill_height: Length) -> f64 {
        let diameter = self.diameter();

        if fill_height <= Length::ZERO {
            if fill_height < Length::ZERO {
                debug!("fill height {fill_height:?} below tank bottom, clamping to empty");
            }
            return 0.0;
        }
        if fill_height >= diameter {
            if fill_height > diameter {
                debug!("fill height {fill_height:?} above tank top {diameter:?}, clamping to full");
            }
            return 1.0;
        }

        let t: Ratio = fill_height / self.radius();
        let t = t.get::<ratio>();
        let segment = unit_segment_area(t);

        match (self.cylinder_length(), self.head_depth()) {
            (Some(cylinder_length), Some(head_depth)) => {
                // Per unit radius squared, the body holds `L · segment` and
                // the heads hold `2a · head`. Divide through by the larger
                // weight so that no term can overflow or vanish.
                let depth_per_length: Ratio = head_depth / cylinder_length;
                let heads_per_body = 2.0 * depth_per_length.get::<ratio>();
                let (head, full_head) = (unit_head_volume(t), unit_head_volume(2.0));

                if heads_per_body <= 1.0 {
                    (segment + heads_per_body * head) / (PI + heads_per_body * full_head)
                } else {
                    let body_per_heads = heads_per_body.recip();
                    (body_per_heads * segment + head) / (body_per_heads * PI + full_head)
                }
            }
            // A flat-ended tank fills like its cross-section.
            _ => segment / PI,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use proptest::prelude::*;
    use uom::si::{length::inch, length::meter, volume::cubic_meter};

    use crate::models::storage::horizontal_tank::core::EndCapKind;

    /// Cubic meters in one US gallon (231 in³).
    const CUBIC_METERS_PER_GALLON: f64 = 3.785_411_784e-3;

    fn inches(value: f64) -> Length {
        Length::new::<inch>(value)
    }

    fn meters(value_in_inches: f64) -> f64 {
        inches(value_in_inches).get::<meter>()
    }

    fn propane_500() -> TankGeometry {
        TankGeometry::ellipsoidal_2to1(inches(37.5), inches(101.25)).unwrap()
    }

    #[test]
    fn flat_capacity_needs_a_length() {
        let tank = TankGeometry::flat(inches(24.0)).unwrap();
        assert_eq!(tank.capacity(), None);
        assert_eq!(tank.liquid_volume(inches(12.0)), None);

        let tank = TankGeometry::flat_with_length(inches(24.0), inches(96.0)).unwrap();
        assert_relative_eq!(
            tank.capacity().unwrap().get::<cubic_meter>(),
            PI * meters(12.0).powi(2) * meters(96.0),
            max_relative = 1e-12
        );
    }

    #[test]
    fn ellipsoidal_capacity_includes_both_heads() {
        let tank = propane_500();
        let r2 = meters(18.75).powi(2);
        let expected = PI * r2 * meters(101.25) + 4.0 / 3.0 * PI * r2 * meters(9.375);
        let capacity = tank.capacity().unwrap().get::<cubic_meter>();

        assert_relative_eq!(capacity, expected, max_relative = 1e-12);
        // Roughly 544 US gallons of water capacity.
        assert_relative_eq!(
            capacity / CUBIC_METERS_PER_GALLON,
            543.865_915_704_909,
            max_relative = 1e-9
        );
    }

    #[test]
    fn liquid_volume_matches_fraction_of_capacity() {
        let tank = propane_500();
        let height = inches(9.375);
        let capacity = tank.capacity().unwrap().get::<cubic_meter>();
        let liquid = tank.liquid_volume(height).unwrap().get::<cubic_meter>();

        assert_relative_eq!(
            liquid / capacity,
            tank.fill_fraction(height),
            max_relative = 1e-12
        );
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn extremes_are_exact() {
        let tanks = [
            TankGeometry::flat(inches(24.0)).unwrap(),
            TankGeometry::flat_with_length(inches(24.0), inches(96.0)).unwrap(),
            TankGeometry::ellipsoidal_2to1(inches(48.0), inches(96.0)).unwrap(),
            TankGeometry::ellipsoidal(inches(48.0), inches(96.0), inches(24.0)).unwrap(),
        ];

        for tank in tanks {
            let diameter = tank.diameter();
            assert_eq!(tank.fill_fraction(Length::ZERO), 0.0);
            assert_eq!(tank.fill_fraction(diameter), 1.0);
            assert_eq!(tank.fill_fraction(inches(-5.0)), 0.0);
            assert_eq!(tank.fill_fraction(diameter + inches(5.0)), 1.0);
        }
    }

    #[test]
    fn flat_fraction_ignores_length() {
        let short = TankGeometry::flat_with_length(inches(24.0), inches(10.0)).unwrap();
        let long = TankGeometry::flat_with_length(inches(24.0), inches(500.0)).unwrap();
        let bare = TankGeometry::flat(inches(24.0)).unwrap();

        for height in [2.4, 6.0, 12.0, 15.0, 21.6] {
            let expected = bare.fill_fraction(inches(height));
            assert_relative_eq!(short.fill_fraction(inches(height)), expected, max_relative = 1e-12);
            assert_relative_eq!(long.fill_fraction(inches(height)), expected, max_relative = 1e-12);
        }
    }

    #[test]
    fn from_total_length_matches_direct_construction() {
        let direct = propane_500();
        let from_total = TankGeometry::from_total_length(
            inches(37.5),
            inches(120.0),
            EndCapKind::Ellipsoidal2To1,
            None,
        )
        .unwrap();

        assert_relative_eq!(
            direct.fill_fraction(inches(9.375)),
            from_total.fill_fraction(inches(9.375)),
            max_relative = 1e-12
        );
    }

    #[test]
    fn nan_height_is_nan() {
        assert!(propane_500().fill_fraction(inches(f64::NAN)).is_nan());
    }

    #[test]
    fn extreme_dimensions_stay_finite() {
        let reference = [
            TankGeometry::flat(inches(24.0)).unwrap(),
            TankGeometry::ellipsoidal(inches(24.0), inches(96.0), inches(6.0)).unwrap(),
        ];

        for scale in [1e-160, 1e-100, 1e150, 1e200] {
            let tanks = [
                TankGeometry::flat(inches(24.0 * scale)).unwrap(),
                TankGeometry::ellipsoidal(
                    inches(24.0 * scale),
                    inches(96.0 * scale),
                    inches(6.0 * scale),
                )
                .unwrap(),
            ];

            for (tank, reference) in tanks.iter().zip(&reference) {
                let fraction = tank.fill_fraction(tank.diameter() / 3.0);
                assert!(fraction.is_finite(), "scale {scale}: {fraction}");
                assert_relative_eq!(
                    fraction,
                    reference.fill_fraction(reference.diameter() / 3.0),
                    max_relative = 1e-9
                );
            }
        }
    }

    #[test]
    fn body_and_heads_of_very_different_size() {
        let long = TankGeometry::ellipsoidal(inches(1e-150), inches(1e150), inches(1e-151)).unwrap();
        let short = TankGeometry::ellipsoidal(inches(1e150), inches(1e-150), inches(1e149)).unwrap();
        let stub = TankGeometry::ellipsoidal(inches(1e200), inches(1e-200), inches(1e-200)).unwrap();

        for tank in [long, short, stub] {
            let fraction = tank.fill_fraction(tank.radius());
            assert_relative_eq!(fraction, 0.5, max_relative = 1e-12);
        }
    }

    proptest! {
        #[test]
        fn fraction_does_not_depend_on_scale(
            exponent in -150_i32..150,
            t in 0.0_f64..=1.0,
            head_ratio in 0.05_f64..=1.0,
        ) {
            let scale = 10_f64.powi(exponent);
            let base = TankGeometry::ellipsoidal(inches(48.0), inches(96.0), inches(24.0 * head_ratio)).unwrap();
            let scaled = TankGeometry::ellipsoidal(
                inches(48.0 * scale),
                inches(96.0 * scale),
                inches(24.0 * head_ratio * scale),
            )
            .unwrap();

            let expected = base.fill_fraction(base.diameter() * t);
            let actual = scaled.fill_fraction(scaled.diameter() * t);
            prop_assert!((actual - expected).abs() <= 1e-9);
        }
    }
}
