//! Elliptic curve points in affine coordinates

use num_bigint::BigUint;

/// A point of the curve group.
///
/// The group identity (the point at infinity) is its own variant, so no
/// coordinate pair can ever be mistaken for it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Point {
    /// The point at infinity, neutral element of the group law
    #[default]
    Identity,
    /// A finite point with coordinates in `[0, p-1]`
    Affine {
        /// x-coordinate
        x: BigUint,
        /// y-coordinate
        y: BigUint,
    },
}

impl Point {
    /// Create a finite point from its coordinates.
    pub fn affine(x: BigUint, y: BigUint) -> Self {
        Point::Affine { x, y }
    }

    /// Create the identity point.
    pub fn identity() -> Self {
        Point::Identity
    }

    /// Check if this point is the identity element.
    pub fn is_identity(&self) -> bool {
        matches!(self, Point::Identity)
    }

    /// The x-coordinate, or `None` for the identity.
    pub fn x(&self) -> Option<&BigUint> {
        match self {
            Point::Identity => None,
            Point::Affine { x, .. } => Some(x),
        }
    }

    /// The y-coordinate, or `None` for the identity.
    pub fn y(&self) -> Option<&BigUint> {
        match self {
            Point::Identity => None,
            Point::Affine { y, .. } => Some(y),
        }
    }
}
