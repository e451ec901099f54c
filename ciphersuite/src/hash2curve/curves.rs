//! Curve descriptor table.

use super::{
    CurveId,
    field::{Field, from_hex, sgn0},
};
use crate::arithmetic::Point;
use alloc::{boxed::Box, vec::Vec};
use core::fmt;
use num_bigint::BigUint;
use num_traits::One;
use once_cell::race::OnceBox;

/// Computes the square of the missing coordinate from the curve constant and
/// the known coordinate (`x` for Weierstrass and Montgomery curves, `y` for
/// Edwards curves).
pub(crate) type Solver = fn(&Field, &BigUint, &BigUint) -> BigUint;

/// `y^2 = x^3 + b`
pub(crate) fn solve_koblitz(field: &Field, b: &BigUint, x: &BigUint) -> BigUint {
    field.add(&field.mul(&field.square(x), x), b)
}

/// `v^2 = u^3 + A*u^2 + u`
pub(crate) fn solve_montgomery(field: &Field, a: &BigUint, u: &BigUint) -> BigUint {
    let u2 = field.square(u);
    field.add(&field.add(&field.mul(&u2, u), &field.mul(a, &u2)), u)
}

/// `x^2 = (y^2 - 1) / (d*y^2 + 1)` on `-x^2 + y^2 = 1 + d*x^2*y^2`
pub(crate) fn solve_edwards25519(field: &Field, d: &BigUint, y: &BigUint) -> BigUint {
    let one = BigUint::one();
    let y2 = field.square(y);
    field.div(&field.sub(&y2, &one), &field.add(&field.mul(d, &y2), &one))
}

/// `x^2 = (y^2 - 1) / (d*y^2 - 1)` on `x^2 + y^2 = 1 + d*x^2*y^2`
pub(crate) fn solve_edwards448(field: &Field, d: &BigUint, y: &BigUint) -> BigUint {
    let one = BigUint::one();
    let y2 = field.square(y);
    field.div(&field.sub(&y2, &one), &field.sub(&field.mul(d, &y2), &one))
}

#[derive(Copy, Clone)]
enum Constant {
    Small(i64),
    Hex(&'static str),
}

struct Params {
    modulus: &'static str,
    constant: Option<Constant>,
    solver: Option<Solver>,
    base_x: &'static str,
    base_y: &'static str,
}

const P25519: &str = "7fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffed";
const P448: &str = "fffffffffffffffffffffffffffffffffffffffffffffffffffffffeffffffffffffffffffffffffffffffffffffffffffffffffffffffff";

/// Indexed by `CurveId as usize`.
const PARAMS: [Params; 8] = [
    // P-256
    Params {
        modulus: "ffffffff00000001000000000000000000000000ffffffffffffffffffffffff",
        constant: None,
        solver: None,
        base_x: "6b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296",
        base_y: "4fe342e2fe1a7f9b8ee7eb4a7c0f9e162bce33576b315ececbb6406837bf51f5",
    },
    // P-384
    Params {
        modulus: "fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffeffffffff0000000000000000ffffffff",
        constant: None,
        solver: None,
        base_x: "aa87ca22be8b05378eb1c71ef320ad746e1d3b628ba79b9859f741e082542a385502f25dbf55296c3a545e3872760ab7",
        base_y: "3617de4a96262c6f5d9e98bf9292dc29f8f41dbd289a147ce9da3113b5f0b8c00a60b1ce1d7e819d7a431d7c90ea0e5f",
    },
    // P-521
    Params {
        modulus: "1ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff",
        constant: None,
        solver: None,
        base_x: "c6858e06b70404e9cd9e3ecb662395b4429c648139053fb521f828af606b4d3dbaa14b5e77efe75928fe1dc127a2ffa8de3348b3c1856a429bf97e7e31c2e5bd66",
        base_y: "11839296a789a3bc0045c8a5fb42c7d1bd998f54449579b446817afbd17273e662c97ee72995ef42640c550b9013fad0761353c7086a272c24088be94769fd16650",
    },
    // secp256k1
    Params {
        modulus: "fffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2f",
        constant: Some(Constant::Small(7)),
        solver: Some(solve_koblitz),
        base_x: "79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798",
        base_y: "483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8",
    },
    // curve25519
    Params {
        modulus: P25519,
        constant: Some(Constant::Small(486662)),
        solver: Some(solve_montgomery),
        base_x: "9",
        base_y: "20ae19a1b8a086b4e01edd2c7748d14c923d4d7e6d7c61b229e9c5a27eced3d9",
    },
    // edwards25519
    Params {
        modulus: P25519,
        constant: Some(Constant::Hex(
            "52036cee2b6ffe738cc740797779e89800700a4d4141d8ab75eb4dca135978a3",
        )),
        solver: Some(solve_edwards25519),
        base_x: "216936d3cd6e53fec0a4e231fdd6dc5c692cc7609525a7b2c9562d608f25d51a",
        base_y: "6666666666666666666666666666666666666666666666666666666666666658",
    },
    // curve448
    Params {
        modulus: P448,
        constant: Some(Constant::Small(156326)),
        solver: Some(solve_montgomery),
        base_x: "5",
        base_y: "7d235d1295f5b1f66c98ab6e58326fcecbae5d34f55545d060f75dc28df3f6edb8027e2346430d211312c4b150677af76fd7223d457b5b1a",
    },
    // edwards448
    Params {
        modulus: P448,
        constant: Some(Constant::Small(-39081)),
        solver: Some(solve_edwards448),
        base_x: "297ea0ea2692ff1b4faff46098453a6a26adf733245f065c3c59d0709cecfa96147eaaf3932d94c63d96c170033f4ba0c7f0de840aed939f",
        base_y: "13",
    },
];

static DESCRIPTORS: [OnceBox<Curve>; 8] = [const { OnceBox::new() }; 8];

/// Parameters of one curve, shared by every adapter for its suites.
pub(crate) struct Curve {
    pub(crate) id: CurveId,
    pub(crate) field: Field,
    constant: BigUint,
    solver: Option<Solver>,
    pub(crate) base_x: BigUint,
    pub(crate) base_y: BigUint,
    pub(crate) base: Point,
}

impl Curve {
    /// Descriptor for `id`, built on first use.
    ///
    /// # Panics
    /// If the backend for `id` was compiled out.
    pub(crate) fn get(id: CurveId) -> &'static Curve {
        DESCRIPTORS[id as usize].get_or_init(|| Box::new(Curve::build(id)))
    }

    fn build(id: CurveId) -> Curve {
        let params = &PARAMS[id as usize];
        let field = Field::new(from_hex(params.modulus));
        let constant = match params.constant {
            Some(Constant::Small(c)) => field.from_i64(c),
            Some(Constant::Hex(c)) => from_hex(c),
            None => BigUint::default(),
        };
        let base_x = from_hex(params.base_x);
        let base_y = from_hex(params.base_y);

        let bytes = match id {
            CurveId::Curve25519 | CurveId::Curve448 => field.to_le_bytes(&base_x, field.byte_len()),
            CurveId::Edwards25519 | CurveId::Edwards448 => edwards_bytes(&field, &base_x, &base_y),
            _ => sec1_compressed(&field, &base_x, &base_y),
        };
        let base =
            Point::from_bytes(id, &bytes).expect("invalid base point in curve descriptor table");

        let curve = Curve {
            id,
            field,
            constant,
            solver: params.solver,
            base_x,
            base_y,
            base,
        };
        assert!(curve.is_on_curve(&curve.base_x, &curve.base_y));
        curve
    }

    fn is_edwards(&self) -> bool {
        matches!(self.id, CurveId::Edwards25519 | CurveId::Edwards448)
    }

    /// Recover the missing coordinate, with `sgn0 == 0`.
    pub(crate) fn solve(&self, coordinate: &BigUint) -> Option<BigUint> {
        let solver = self.solver?;
        self.field
            .sqrt(&solver(&self.field, &self.constant, coordinate))
    }

    /// Whether the known coordinate `c` belongs to a point of this curve
    /// rather than of its quadratic twist.
    #[cfg(any(feature = "curve25519", feature = "curve448"))]
    pub(crate) fn has_point_at(&self, c: &BigUint) -> bool {
        let Some(solver) = self.solver else {
            return true;
        };
        self.field.is_square(&solver(&self.field, &self.constant, c))
    }

    /// Check `(x, y)` against the solver. Curves without a solver are
    /// validated by their backend instead.
    pub(crate) fn is_on_curve(&self, x: &BigUint, y: &BigUint) -> bool {
        if self.solver.is_none() {
            return true;
        }
        let (known, missing) = if self.is_edwards() { (y, x) } else { (x, y) };
        self.solve(known)
            .is_some_and(|root| root == *missing || self.field.neg(&root) == *missing)
    }
}

/// SEC1 compressed encoding of an affine Weierstrass point.
fn sec1_compressed(field: &Field, x: &BigUint, y: &BigUint) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(field.byte_len() + 1);
    bytes.push(if sgn0(y) { 0x03 } else { 0x02 });
    bytes.extend_from_slice(&field.to_be_bytes(x));
    bytes
}

/// RFC 8032 encoding: little-endian `y` with the sign of `x` in the top bit.
fn edwards_bytes(field: &Field, x: &BigUint, y: &BigUint) -> Vec<u8> {
    let len = field.bits() / 8 + 1;
    let mut bytes = field.to_le_bytes(y, len);
    if sgn0(x) {
        bytes[len - 1] |= 0x80;
    }
    bytes
}

impl fmt::Debug for Curve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Curve").field("id", &self.id).finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::{Curve, PARAMS, edwards_bytes};
    use crate::hash2curve::{
        CurveId,
        field::{Field, from_hex},
    };

    #[test]
    fn table_matches_curve_ids() {
        assert_eq!(PARAMS.len(), CurveId::ALL.len());
        for (i, id) in CurveId::ALL.into_iter().enumerate() {
            assert_eq!(id as usize, i);
        }
    }

    #[test]
    fn base_points_satisfy_solvers() {
        for id in CurveId::ALL {
            let params = &PARAMS[id as usize];
            let Some(solver) = params.solver else {
                continue;
            };
            let field = Field::new(from_hex(params.modulus));
            let constant = match params.constant {
                Some(super::Constant::Small(c)) => field.from_i64(c),
                Some(super::Constant::Hex(c)) => from_hex(c),
                None => unreachable!(),
            };
            let (known, missing) = match id {
                CurveId::Edwards25519 | CurveId::Edwards448 => (params.base_y, params.base_x),
                _ => (params.base_x, params.base_y),
            };
            let rhs = solver(&field, &constant, &from_hex(known));
            assert_eq!(rhs, field.square(&from_hex(missing)), "{id:?}");
        }
    }

    #[test]
    fn descriptors_build_for_enabled_curves() {
        for id in CurveId::ALL.into_iter().filter(|id| id.is_available()) {
            let curve = Curve::get(id);
            assert_eq!(curve.id, id);
            assert!(core::ptr::eq(curve, Curve::get(id)));
            assert_eq!(curve.base.encode().len(), id.element_length());
        }
    }

    #[test]
    fn solve_recovers_base_coordinate() {
        for id in [CurveId::Secp256k1, CurveId::Edwards25519, CurveId::Curve448] {
            if !id.is_available() {
                continue;
            }
            let curve = Curve::get(id);
            let (known, missing) = match id {
                CurveId::Edwards25519 => (&curve.base_y, &curve.base_x),
                _ => (&curve.base_x, &curve.base_y),
            };
            let root = curve.solve(known).unwrap();
            assert!(root == *missing || curve.field.neg(&root) == *missing);
        }
    }

    #[test]
    fn edwards448_base_encoding() {
        let params = &PARAMS[CurveId::Edwards448 as usize];
        let field = Field::new(from_hex(params.modulus));
        let bytes = edwards_bytes(&field, &from_hex(params.base_x), &from_hex(params.base_y));
        let mut expected = [0u8; 57];
        expected[0] = 0x13;
        expected[56] = 0x80;
        assert_eq!(bytes, expected);
    }

    #[cfg(any(feature = "curve25519", feature = "curve448"))]
    #[test]
    fn twist_coordinates_have_no_point() {
        use num_bigint::BigUint;

        for id in [CurveId::Curve25519, CurveId::Curve448] {
            if !id.is_available() {
                continue;
            }
            let curve = Curve::get(id);
            assert!(curve.has_point_at(&curve.base_x));
            assert!(curve.has_point_at(&BigUint::default()));
        }
        // u = 1 lies on the twist of curve448, u = 2 on the twist of curve25519
        if CurveId::Curve448.is_available() {
            assert!(!Curve::get(CurveId::Curve448).has_point_at(&BigUint::from(1u32)));
        }
        if CurveId::Curve25519.is_available() {
            assert!(!Curve::get(CurveId::Curve25519).has_point_at(&BigUint::from(2u32)));
        }
    }

    #[cfg(feature = "nist")]
    #[test]
    fn p256_base_is_generator() {
        use hex_literal::hex;

        let curve = Curve::get(CurveId::P256);
        assert_eq!(
            curve.base.encode(),
            hex!("03 6b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296")
        );
    }
}
