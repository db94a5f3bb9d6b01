use std::fmt;

use thiserror::Error;
use uom::si::f64::{Length, Ratio};

use crate::support::constraint::{
    Constrained, ConstraintError, ConstraintResult, StrictlyPositive, UnitIntervalLowerOpen,
};

/// End cap shape of a horizontal tank, without dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EndCapKind {
    /// Flat ends; the tank is a plain cylinder.
    Flat,
    /// Semi-ellipsoidal heads with a 2:1 axis ratio (head depth = radius / 2).
    Ellipsoidal2To1,
    /// Semi-ellipsoidal heads with an explicit head depth.
    EllipsoidalCustom,
}

impl fmt::Display for EndCapKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Flat => write!(f, "flat"),
            Self::Ellipsoidal2To1 => write!(f, "2:1 ellipsoidal"),
            Self::EllipsoidalCustom => write!(f, "custom ellipsoidal"),
        }
    }
}

/// End caps of a horizontal tank, with the dimensions each shape needs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EndCaps {
    /// Flat ends.
    ///
    /// The fill fraction of a plain cylinder does not depend on its length,
    /// so the length is only needed to report absolute volumes.
    Flat {
        cylinder_length: Option<Constrained<Length, StrictlyPositive>>,
    },

    /// 2:1 semi-ellipsoidal heads on a cylindrical body.
    Ellipsoidal2To1 {
        cylinder_length: Constrained<Length, StrictlyPositive>,
    },

    /// Semi-ellipsoidal heads of a given depth on a cylindrical body.
    EllipsoidalCustom {
        cylinder_length: Constrained<Length, StrictlyPositive>,
        head_depth: Constrained<Length, StrictlyPositive>,
    },
}

impl EndCaps {
    /// Returns the shape of these end caps.
    #[must_use]
    pub fn kind(&self) -> EndCapKind {
        match self {
            Self::Flat { .. } => EndCapKind::Flat,
            Self::Ellipsoidal2To1 { .. } => EndCapKind::Ellipsoidal2To1,
            Self::EllipsoidalCustom { .. } => EndCapKind::EllipsoidalCustom,
        }
    }
}

/// Errors raised while building a [`TankGeometry`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[non_exhaustive]
pub enum GeometryError {
    /// The diameter is not a strictly positive, finite length.
    #[error("invalid tank diameter")]
    Diameter(#[source] ConstraintError),

    /// The cylinder length is not a strictly positive, finite length.
    ///
    /// Also returned when an overall length is too short to hold the heads.
    #[error("invalid cylinder length")]
    CylinderLength(#[source] ConstraintError),

    /// The head depth is not a strictly positive, finite length.
    #[error("invalid head depth")]
    HeadDepth(#[source] ConstraintError),

    /// The head is deeper than the tank radius.
    #[error("head depth {head_depth:?} exceeds tank radius {radius:?}")]
    HeadDepthExceedsRadius { head_depth: Length, radius: Length },

    /// The end cap shape needs a cylinder length and none was given.
    #[error("{kind} end caps require a cylinder length")]
    MissingCylinderLength { kind: EndCapKind },

    /// Custom ellipsoidal heads need a head depth and none was given.
    #[error("custom ellipsoidal end caps require a head depth")]
    MissingHeadDepth,
}

/// Validated dimensions of a horizontal cylindrical tank.
///
/// A geometry is immutable once built. Every constructor checks the
/// invariants the volume model relies on (positive finite lengths and a head
/// no deeper than the radius), so fill calculations never fail on geometry.
///
/// # Example
///
/// ```
/// use tank_volume::models::storage::horizontal_tank::{EndCapKind, TankGeometry};
/// use uom::si::{f64::Length, length::inch};
///
/// let tank = TankGeometry::ellipsoidal_2to1(
///     Length::new::<inch>(37.5),
///     Length::new::<inch>(101.25),
/// )
/// .unwrap();
///
/// assert_eq!(tank.kind(), EndCapKind::Ellipsoidal2To1);
/// let head_depth = tank.head_depth().unwrap().get::<inch>();
/// assert!((head_depth - 9.375).abs() < 1e-12);
///
/// assert!(TankGeometry::flat(Length::new::<inch>(0.0)).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TankGeometry {
    diameter: Constrained<Length, StrictlyPositive>,
    end_caps: EndCaps,
}

impl TankGeometry {
    /// Builds a geometry from a diameter and fully dimensioned end caps.
    ///
    /// # Errors
    ///
    /// Returns a [`GeometryError`] if the diameter is invalid or a custom
    /// head is deeper than the tank radius.
    pub fn new(diameter: Length, end_caps: EndCaps) -> Result<Self, GeometryError> {
        let diameter = positive(diameter).map_err(GeometryError::Diameter)?;

        if let EndCaps::EllipsoidalCustom { head_depth, .. } = end_caps {
            let radius = diameter.into_inner() / 2.0;
            let head_depth = head_depth.into_inner();
            let ratio: Ratio = head_depth / radius;

            UnitIntervalLowerOpen::new(ratio).map_err(|err| match err {
                ConstraintError::AboveMaximum => {
                    GeometryError::HeadDepthExceedsRadius { head_depth, radius }
                }
                err => GeometryError::HeadDepth(err),
            })?;
        }

        Ok(Self { diameter, end_caps })
    }

    /// Builds a flat-ended tank without a length.
    ///
    /// Fill fractions are available; absolute volumes are not.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Diameter`] if the diameter is invalid.
    pub fn flat(diameter: Length) -> Result<Self, GeometryError> {
        Self::new(
            diameter,
            EndCaps::Flat {
                cylinder_length: None,
            },
        )
    }

    /// Builds a flat-ended tank with a known length.
    ///
    /// # Errors
    ///
    /// Returns a [`GeometryError`] if either dimension is invalid.
    pub fn flat_with_length(diameter: Length, cylinder_length: Length) -> Result<Self, GeometryError> {
        let cylinder_length = cylinder(cylinder_length)?;
        Self::new(
            diameter,
            EndCaps::Flat {
                cylinder_length: Some(cylinder_length),
            },
        )
    }

    /// Builds a tank with 2:1 semi-ellipsoidal heads.
    ///
    /// # Errors
    ///
    /// Returns a [`GeometryError`] if either dimension is invalid.
    pub fn ellipsoidal_2to1(diameter: Length, cylinder_length: Length) -> Result<Self, GeometryError> {
        let cylinder_length = cylinder(cylinder_length)?;
        Self::new(diameter, EndCaps::Ellipsoidal2To1 { cylinder_length })
    }

    /// Builds a tank with semi-ellipsoidal heads of the given depth.
    ///
    /// # Errors
    ///
    /// Returns a [`GeometryError`] if any dimension is invalid or the head
    /// depth exceeds the radius.
    pub fn ellipsoidal(
        diameter: Length,
        cylinder_length: Length,
        head_depth: Length,
    ) -> Result<Self, GeometryError> {
        let cylinder_length = cylinder(cylinder_length)?;
        let head_depth = positive(head_depth).map_err(GeometryError::HeadDepth)?;
        Self::new(
            diameter,
            EndCaps::EllipsoidalCustom {
                cylinder_length,
                head_depth,
            },
        )
    }

    /// Builds a geometry from loosely specified configuration values.
    ///
    /// This is the entry point for configuration layers where dimensions are
    /// optional fields: a missing value required by `kind` is an error, and
    /// values not used by `kind` are ignored.
    ///
    /// # Errors
    ///
    /// Returns a [`GeometryError`] for invalid or missing dimensions.
    pub fn from_parts(
        diameter: Length,
        kind: EndCapKind,
        cylinder_length: Option<Length>,
        head_depth: Option<Length>,
    ) -> Result<Self, GeometryError> {
        let missing_length = GeometryError::MissingCylinderLength { kind };
        match kind {
            EndCapKind::Flat => match cylinder_length {
                Some(length) => Self::flat_with_length(diameter, length),
                None => Self::flat(diameter),
            },
            EndCapKind::Ellipsoidal2To1 => {
                Self::ellipsoidal_2to1(diameter, cylinder_length.ok_or(missing_length)?)
            }
            EndCapKind::EllipsoidalCustom => Self::ellipsoidal(
                diameter,
                cylinder_length.ok_or(missing_length)?,
                head_depth.ok_or(GeometryError::MissingHeadDepth)?,
            ),
        }
    }

    /// Builds a geometry from the overall tank length, heads included.
    ///
    /// The cylinder length is `total_length - 2 * head_depth`, where the head
    /// depth is zero for flat ends and `diameter / 4` for 2:1 heads.
    /// `head_depth` is only read for [`EndCapKind::EllipsoidalCustom`].
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::CylinderLength`] if the heads leave no room
    /// for a cylindrical body, or another [`GeometryError`] for invalid or
    /// missing dimensions.
    pub fn from_total_length(
        diameter: Length,
        total_length: Length,
        kind: EndCapKind,
        head_depth: Option<Length>,
    ) -> Result<Self, GeometryError> {
        // Diameter errors take precedence over the derived cylinder length.
        positive(diameter).map_err(GeometryError::Diameter)?;

        match kind {
            EndCapKind::Flat => Self::flat_with_length(diameter, total_length),
            EndCapKind::Ellipsoidal2To1 => {
                Self::ellipsoidal_2to1(diameter, total_length - diameter / 2.0)
            }
            EndCapKind::EllipsoidalCustom => {
                let head_depth = head_depth.ok_or(GeometryError::MissingHeadDepth)?;
                Self::ellipsoidal(diameter, total_length - head_depth * 2.0, head_depth)
            }
        }
    }

    /// Returns the internal diameter.
    #[must_use]
    pub fn diameter(&self) -> Length {
        self.diameter.into_inner()
    }

    /// Returns the internal radius.
    #[must_use]
    pub fn radius(&self) -> Length {
        self.diameter.into_inner() / 2.0
    }

    /// Returns the end caps.
    #[must_use]
    pub fn end_caps(&self) -> EndCaps {
        self.end_caps
    }

    /// Returns the end cap shape.
    #[must_use]
    pub fn kind(&self) -> EndCapKind {
        self.end_caps.kind()
    }

    /// Returns the length of the cylindrical body, if known.
    #[must_use]
    pub fn cylinder_length(&self) -> Option<Length> {
        match self.end_caps {
            EndCaps::Flat { cylinder_length } => cylinder_length.map(Constrained::into_inner),
            EndCaps::Ellipsoidal2To1 { cylinder_length }
            | EndCaps::EllipsoidalCustom {
                cylinder_length, ..
            } => Some(cylinder_length.into_inner()),
        }
    }

    /// Returns the depth of each head, or `None` for flat ends.
    #[must_use]
    pub fn head_depth(&self) -> Option<Length> {
        match self.end_caps {
            EndCaps::Flat { .. } => None,
            EndCaps::Ellipsoidal2To1 { .. } => Some(self.radius() / 2.0),
            EndCaps::EllipsoidalCustom { head_depth, .. } => Some(head_depth.into_inner()),
        }
    }

    /// Returns the overall tank length, heads included, if known.
    #[must_use]
    pub fn total_length(&self) -> Option<Length> {
        let cylinder_length = self.cylinder_length()?;
        Some(match self.head_depth() {
            Some(head_depth) => cylinder_length + head_depth * 2.0,
            None => cylinder_length,
        })
    }
}

/// Checks that a length is strictly positive and finite.
fn positive(value: Length) -> ConstraintResult<Constrained<Length, StrictlyPositive>> {
    if value.is_infinite() {
        return Err(ConstraintError::AboveMaximum);
    }
    StrictlyPositive::new(value)
}

fn cylinder(length: Length) -> Result<Constrained<Length, StrictlyPositive>, GeometryError> {
    positive(length).map_err(GeometryError::CylinderLength)
}
