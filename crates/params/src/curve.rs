//! Weierstrass curve parameters `y² = x³ + a·x + b (mod p)`

/// secp256k1 domain parameters (SEC 2, section 2.4.1)
pub struct Secp256k1;

impl Secp256k1 {
    /// Field prime p = 2^256 - 2^32 - 977
    pub const P: &'static str =
        "fffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2f";

    /// Coefficient a
    pub const A: &'static str = "0";

    /// Coefficient b
    pub const B: &'static str = "7";

    /// Order n of the base point
    pub const N: &'static str =
        "fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141";

    /// Base point x-coordinate
    pub const GX: &'static str =
        "79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798";

    /// Base point y-coordinate
    pub const GY: &'static str =
        "483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8";
}

/// Textbook curve `y² = x³ + 2x + 2 (mod 17)` with a cyclic group of order 19.
///
/// Small enough to enumerate every multiple of the base point by hand.
pub struct TinyCurve;

impl TinyCurve {
    /// Field prime p
    pub const P: u32 = 17;
    /// Coefficient a
    pub const A: u32 = 2;
    /// Coefficient b
    pub const B: u32 = 2;
    /// Order n of the base point
    pub const N: u32 = 19;
    /// Base point x-coordinate
    pub const GX: u32 = 5;
    /// Base point y-coordinate
    pub const GY: u32 = 1;
}
