use std::fmt;

use uom::si::{
    f64::{Length, Volume},
    length::inch,
    volume::gallon,
};

use super::{EndCapKind, GeometryError, TankGeometry};

/// Nominal sizes of common above-ground propane tanks.
///
/// Dimensions are typical outside values for 2:1 semi-ellipsoidal tanks;
/// a specific manufacturer's tank may differ by an inch or two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TankPreset {
    /// 250 US gallon tank, 30" × 92".
    Gal250,
    /// 330 US gallon tank, 30" × 119".
    Gal330,
    /// 500 US gallon tank, 37.5" × 120".
    Gal500,
    /// 1000 US gallon tank, 41" × 190".
    Gal1000,
}

impl TankPreset {
    /// All presets, smallest first.
    pub const ALL: [Self; 4] = [Self::Gal250, Self::Gal330, Self::Gal500, Self::Gal1000];

    /// Returns the tank diameter.
    #[must_use]
    pub fn diameter(self) -> Length {
        Length::new::<inch>(match self {
            Self::Gal250 | Self::Gal330 => 30.0,
            Self::Gal500 => 37.5,
            Self::Gal1000 => 41.0,
        })
    }

    /// Returns the overall tank length, heads included.
    #[must_use]
    pub fn total_length(self) -> Length {
        Length::new::<inch>(match self {
            Self::Gal250 => 92.0,
            Self::Gal330 => 119.0,
            Self::Gal500 => 120.0,
            Self::Gal1000 => 190.0,
        })
    }

    /// Returns the nominal capacity the tank is sold as.
    #[must_use]
    pub fn nominal_capacity(self) -> Volume {
        Volume::new::<gallon>(match self {
            Self::Gal250 => 250.0,
            Self::Gal330 => 330.0,
            Self::Gal500 => 500.0,
            Self::Gal1000 => 1000.0,
        })
    }

    /// Builds the geometry of this tank with 2:1 semi-ellipsoidal heads.
    ///
    /// # Errors
    ///
    /// Preset dimensions are always valid, so this only fails if the preset
    /// table itself is wrong.
    pub fn geometry(self) -> Result<TankGeometry, GeometryError> {
        TankGeometry::from_total_length(
            self.diameter(),
            self.total_length(),
            EndCapKind::Ellipsoidal2To1,
            None,
        )
    }
}

impl fmt::Display for TankPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let gallons = match self {
            Self::Gal250 => 250,
            Self::Gal330 => 330,
            Self::Gal500 => 500,
            Self::Gal1000 => 1000,
        };
        write!(f, "{gallons} gal")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::f64::consts::PI;

    use approx::assert_relative_eq;
    use uom::si::volume::cubic_meter;

    #[test]
    fn presets_build_valid_geometry() {
        for preset in TankPreset::ALL {
            let tank = preset.geometry().expect("preset geometry should be valid");

            assert_eq!(tank.kind(), EndCapKind::Ellipsoidal2To1);
            assert_relative_eq!(
                tank.total_length().unwrap().get::<inch>(),
                preset.total_length().get::<inch>(),
                max_relative = 1e-12
            );
        }
    }

    #[test]
    fn geometric_capacity_is_close_to_nominal() {
        for preset in TankPreset::ALL {
            let capacity = preset.geometry().unwrap().capacity().unwrap();
            let nominal = preset.nominal_capacity();

            assert!(capacity >= nominal, "{preset}: {capacity:?}");
            assert!(capacity < nominal * 1.1, "{preset}: {capacity:?}");
        }
    }

    #[test]
    fn five_hundred_gallon_tank() {
        let tank = TankPreset::Gal500.geometry().unwrap();
        assert_relative_eq!(
            tank.cylinder_length().unwrap().get::<inch>(),
            101.25,
            max_relative = 1e-12
        );
    }

    #[test]
    fn three_hundred_thirty_gallon_tank() {
        let tank = TankPreset::Gal330.geometry().unwrap();
        assert_relative_eq!(
            tank.cylinder_length().unwrap().get::<inch>(),
            104.0,
            max_relative = 1e-12
        );

        // π · 15² · (104 + 4/3 · 7.5) in³, at 231 in³ per gallon.
        let capacity = tank.capacity().unwrap().get::<cubic_meter>();
        assert_relative_eq!(
            capacity / 3.785_411_784e-3,
            PI * 225.0 * 114.0 / 231.0,
            max_relative = 1e-9
        );
    }

    #[test]
    fn presets_are_ordered_by_size() {
        for pair in TankPreset::ALL.windows(2) {
            assert!(pair[0].nominal_capacity() < pair[1].nominal_capacity());
        }
    }

    #[test]
    fn display() {
        assert_eq!(TankPreset::Gal250.to_string(), "250 gal");
        assert_eq!(TankPreset::Gal330.to_string(), "330 gal");
        assert_eq!(TankPreset::Gal1000.to_string(), "1000 gal");
    }
}
