//! Curve parameters, group law and scalar multiplication

use super::{parse_hex, Field, Point};
use crate::error::{validate, Error, Result};
use dhec_params::Secp256k1;
use num_bigint::BigUint;
use num_traits::Zero;

/// Domain parameters `{a, b, p, n, G}` of a short Weierstrass curve.
///
/// Immutable once built. Share it by reference, or behind an `Arc` across
/// threads; every group operation takes `&self`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Curve {
    name: &'static str,
    field: Field,
    a: BigUint,
    b: BigUint,
    n: BigUint,
    g: Point,
}

impl Curve {
    /// Build a curve from its parameters.
    ///
    /// Rejects a modulus below 3, a singular curve (`4a³ + 27b² ≡ 0`), a zero
    /// order, and a base point that is the identity or has coordinates
    /// outside `[0, p-1]`. The base point is not checked against the curve
    /// equation; see [`Curve::contains`].
    pub fn new(
        name: &'static str,
        a: BigUint,
        b: BigUint,
        p: BigUint,
        n: BigUint,
        g: Point,
    ) -> Result<Self> {
        let field = Field::new(p)?;
        let a = field.reduce(&a);
        let b = field.reduce(&b);

        let discriminant = field.add(
            &field.mul_small(&field.mul(&field.square(&a), &a), 4),
            &field.mul_small(&field.square(&b), 27),
        );
        validate::parameter(!discriminant.is_zero(), "Curve", "curve is singular")?;
        validate::parameter(!n.is_zero(), "Curve", "group order must be non-zero")?;

        match &g {
            Point::Identity => {
                return Err(Error::param("Curve", "base point cannot be the identity"));
            }
            Point::Affine { x, y } => {
                let p = field.modulus();
                validate::parameter(
                    x < p && y < p,
                    "Curve",
                    "base point coordinates must be reduced modulo p",
                )?;
            }
        }

        Ok(Curve {
            name,
            field,
            a,
            b,
            n,
            g,
        })
    }

    /// The secp256k1 curve.
    pub fn secp256k1() -> Self {
        let parse = |name: &'static str, hex: &'static str| {
            parse_hex(name, hex).expect("secp256k1 constants are valid hex")
        };
        Curve::new(
            "secp256k1",
            parse("secp256k1 a", Secp256k1::A),
            parse("secp256k1 b", Secp256k1::B),
            parse("secp256k1 p", Secp256k1::P),
            parse("secp256k1 n", Secp256k1::N),
            Point::affine(
                parse("secp256k1 Gx", Secp256k1::GX),
                parse("secp256k1 Gy", Secp256k1::GY),
            ),
        )
        .expect("secp256k1 parameters are valid")
    }

    /// Curve name used in log output.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The underlying prime field.
    pub fn field(&self) -> &Field {
        &self.field
    }

    /// Field modulus `p`.
    pub fn p(&self) -> &BigUint {
        self.field.modulus()
    }

    /// Coefficient `a`.
    pub fn a(&self) -> &BigUint {
        &self.a
    }

    /// Coefficient `b`.
    pub fn b(&self) -> &BigUint {
        &self.b
    }

    /// Order `n` of the base point.
    pub fn order(&self) -> &BigUint {
        &self.n
    }

    /// Base point `G`.
    pub fn generator(&self) -> &Point {
        &self.g
    }

    /// Check `y² ≡ x³ + a·x + b (mod p)`. The identity is always on the curve.
    pub fn contains(&self, point: &Point) -> bool {
        match point {
            Point::Identity => true,
            Point::Affine { x, y } => {
                let f = &self.field;
                let rhs = f.add(
                    &f.add(&f.mul(&f.square(x), x), &f.mul(&self.a, x)),
                    &self.b,
                );
                f.square(y) == rhs
            }
        }
    }

    /// `-P = (x, p - y mod p)`
    pub fn negate(&self, point: &Point) -> Point {
        match point {
            Point::Identity => Point::Identity,
            Point::Affine { x, y } => Point::affine(self.field.reduce(x), self.field.neg(y)),
        }
    }

    /// Add two points using the group law.
    pub fn add(&self, lhs: &Point, rhs: &Point) -> Result<Point> {
        let (x1, y1, x2, y2) = match (lhs, rhs) {
            (Point::Identity, _) => return Ok(self.reduce_point(rhs)),
            (_, Point::Identity) => return Ok(self.reduce_point(lhs)),
            (Point::Affine { x: x1, y: y1 }, Point::Affine { x: x2, y: y2 }) => (x1, y1, x2, y2),
        };

        let f = &self.field;
        let (x1, y1, x2, y2) = (f.reduce(x1), f.reduce(y1), f.reduce(x2), f.reduce(y2));

        if x1 == x2 {
            if y1 == y2 {
                return self.double(lhs);
            }
            // Same x, different y: rhs = -lhs
            return Ok(Point::Identity);
        }

        // λ = (y₂ − y₁) / (x₂ − x₁)
        let slope = f.div(&f.sub(&y2, &y1), &f.sub(&x2, &x1))?;

        // x₃ = λ² − x₁ − x₂
        let x3 = f.sub(&f.sub(&f.square(&slope), &x1), &x2);

        // y₃ = λ·(x₁ − x₃) − y₁
        let y3 = f.sub(&f.mul(&slope, &f.sub(&x1, &x3)), &y1);

        Ok(Point::affine(x3, y3))
    }

    /// Double a point (add it to itself).
    pub fn double(&self, point: &Point) -> Result<Point> {
        let (x, y) = match point {
            Point::Identity => return Ok(Point::Identity),
            Point::Affine { x, y } => (x, y),
        };

        let f = &self.field;
        let (x, y) = (f.reduce(x), f.reduce(y));

        // 2-torsion point: the tangent is vertical
        if y.is_zero() {
            return Ok(Point::Identity);
        }

        // λ = (3·x² + a) / (2·y)
        let slope = f.div(
            &f.add(&f.mul_small(&f.square(&x), 3), &self.a),
            &f.mul_small(&y, 2),
        )?;

        // x₂ = λ² − 2·x
        let x2 = f.sub(&f.square(&slope), &f.mul_small(&x, 2));

        // y₂ = λ·(x − x₂) − y
        let y2 = f.sub(&f.mul(&slope, &f.sub(&x, &x2)), &y);

        Ok(Point::affine(x2, y2))
    }

    /// Scalar multiplication `k·P` by left-to-right double-and-add.
    ///
    /// Running time depends on the bit pattern of `k`.
    pub fn mul(&self, point: &Point, k: &BigUint) -> Result<Point> {
        let base = self.reduce_point(point);
        let mut acc = Point::Identity;
        if base.is_identity() {
            return Ok(acc);
        }

        for byte in k.to_bytes_be() {
            for bit_pos in (0..8).rev() {
                if !acc.is_identity() {
                    acc = self.double(&acc)?;
                }
                if (byte >> bit_pos) & 1 == 1 {
                    acc = if acc.is_identity() {
                        base.clone()
                    } else {
                        self.add(&acc, &base)?
                    };
                }
            }
        }

        Ok(acc)
    }

    /// Scalar multiplication with the base point: `k·G`
    pub fn mul_base(&self, k: &BigUint) -> Result<Point> {
        self.mul(&self.g, k)
    }

    fn reduce_point(&self, point: &Point) -> Point {
        match point {
            Point::Identity => Point::Identity,
            Point::Affine { x, y } => Point::affine(self.field.reduce(x), self.field.reduce(y)),
        }
    }
}
