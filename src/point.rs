use crate::curve::Curve;
use crate::element::Element;
use crate::error::EcError;

use num_bigint::BigInt;
use num_traits::{One, Signed, Zero};

/// Coordinates of a point: either the distinguished identity `O` or an
/// affine `(x, y)` pair satisfying the curve equation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Coordinates {
    Identity,
    Affine { x: Element, y: Element },
}

/// A point on a [`Curve`], borrowing the curve it belongs to. Points
/// are immutable; every operation returns a new point.
#[derive(Debug, Clone)]
pub struct Point<'c> {
    curve: &'c Curve,
    coords: Coordinates,
}

impl PartialEq for Point<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.curve == other.curve && self.coords == other.coords
    }
}

impl Eq for Point<'_> {}

impl<'c> Point<'c> {
    pub(crate) fn identity(curve: &'c Curve) -> Self {
        Self {
            curve,
            coords: Coordinates::Identity,
        }
    }

    pub(crate) fn affine(curve: &'c Curve, x: Element, y: Element) -> Self {
        Self {
            curve,
            coords: Coordinates::Affine { x, y },
        }
    }

    pub fn curve(&self) -> &'c Curve {
        self.curve
    }

    pub fn coordinates(&self) -> &Coordinates {
        &self.coords
    }

    pub fn is_identity(&self) -> bool {
        matches!(self.coords, Coordinates::Identity)
    }

    pub fn x(&self) -> Option<&Element> {
        match &self.coords {
            Coordinates::Identity => None,
            Coordinates::Affine { x, .. } => Some(x),
        }
    }

    pub fn y(&self) -> Option<&Element> {
        match &self.coords {
            Coordinates::Identity => None,
            Coordinates::Affine { y, .. } => Some(y),
        }
    }

    /// The additive inverse: `-O = O`, otherwise the reflection of the
    /// point across the x-axis.
    pub fn negate(&self) -> Self {
        match &self.coords {
            Coordinates::Identity => self.clone(),
            Coordinates::Affine { x, y } => Self::affine(
                self.curve,
                x.clone(),
                self.curve.field().negate(y),
            ),
        }
    }

    /// The chord-and-tangent group law. Fails only on curves with a
    /// composite modulus, when a slope divisor shares a factor with it.
    pub fn try_add(&self, rhs: &Self) -> Result<Self, EcError> {
        debug_assert!(self.curve == rhs.curve, "points on different curves");

        let (px, py, qx, qy) = match (&self.coords, &rhs.coords) {
            (Coordinates::Identity, _) => return Ok(rhs.clone()),
            (_, Coordinates::Identity) => return Ok(self.clone()),
            (
                Coordinates::Affine { x: px, y: py },
                Coordinates::Affine { x: qx, y: qy },
            ) => (px, py, qx, qy),
        };

        if *rhs == self.negate() {
            return Ok(self.curve.identity());
        }

        let field = self.curve.field();
        let slope = if px != qx {
            // secant through two distinct points
            field
                .div(&(py - qy), &(px - qx))
                .map_err(|source| EcError::AdditionFailed {
                    source: Box::new(source),
                })?
        } else {
            // tangent at a doubled point; equal x with unequal y cannot
            // happen for curve-validated points that are not negations
            debug_assert!(py == qy, "distinct points with equal x must be negations");
            field
                .div(
                    &(Element::from(3) * (px * px) + self.curve.a()),
                    &(Element::from(2) * py),
                )
                .map_err(|err| match err {
                    EcError::NotInvertible { modulus, gcd, .. } => EcError::DoublingFailed {
                        modulus,
                        factor: gcd,
                    },
                    other => other,
                })?
        };

        let x = field.reduce(&slope * &slope - px - qx);
        let y = field.reduce(py + &slope * (x.clone() - px));

        // the chord meets the curve a third time at (x, y); the sum is
        // its reflection
        Ok(Self::affine(self.curve, x, y).negate())
    }

    /// Double-and-add scalar multiplication, least significant bit
    /// first. The scalar must be positive.
    pub fn scalar_mul(&self, scalar: &BigInt) -> Result<Self, EcError> {
        if !scalar.is_positive() {
            return Err(EcError::InvalidScalar {
                scalar: scalar.clone(),
            });
        }

        let mut result = self.curve.identity();
        let mut doubling = self.clone();
        let mut weight = BigInt::one();
        loop {
            if !(&weight & scalar).is_zero() {
                result = result.try_add(&doubling)?;
            }
            weight <<= 1;
            if weight > *scalar {
                break;
            }
            doubling = doubling.try_add(&doubling)?;
        }
        Ok(result)
    }
}

impl<'c> std::ops::Neg for Point<'c> {
    type Output = Point<'c>;
    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl<'c> std::ops::Neg for &Point<'c> {
    type Output = Point<'c>;
    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl<'c> std::ops::Add for Point<'c> {
    type Output = Result<Point<'c>, EcError>;
    fn add(self, rhs: Self) -> Self::Output {
        self.try_add(&rhs)
    }
}

impl<'a, 'b, 'c> std::ops::Add<&'b Point<'c>> for &'a Point<'c> {
    type Output = Result<Point<'c>, EcError>;
    fn add(self, rhs: &'b Point<'c>) -> Self::Output {
        self.try_add(rhs)
    }
}

impl<'c> std::ops::Add<&Point<'c>> for Point<'c> {
    type Output = Result<Point<'c>, EcError>;
    fn add(self, rhs: &Point<'c>) -> Self::Output {
        self.try_add(rhs)
    }
}

impl<'c> std::ops::Add<Point<'c>> for &Point<'c> {
    type Output = Result<Point<'c>, EcError>;
    fn add(self, rhs: Point<'c>) -> Self::Output {
        self.try_add(&rhs)
    }
}

impl<'c> std::ops::Mul<u64> for &Point<'c> {
    type Output = Result<Point<'c>, EcError>;
    fn mul(self, rhs: u64) -> Self::Output {
        self.scalar_mul(&BigInt::from(rhs))
    }
}

impl<'c> std::ops::Mul<u64> for Point<'c> {
    type Output = Result<Point<'c>, EcError>;
    fn mul(self, rhs: u64) -> Self::Output {
        self.scalar_mul(&BigInt::from(rhs))
    }
}

impl<'c> std::ops::Mul<Point<'c>> for u64 {
    type Output = Result<Point<'c>, EcError>;
    fn mul(self, rhs: Point<'c>) -> Self::Output {
        rhs.scalar_mul(&BigInt::from(self))
    }
}

impl<'a, 'c> std::ops::Mul<&'a Point<'c>> for u64 {
    type Output = Result<Point<'c>, EcError>;
    fn mul(self, rhs: &'a Point<'c>) -> Self::Output {
        rhs.scalar_mul(&BigInt::from(self))
    }
}

impl<'a, 'b, 'c> std::ops::Mul<&'b BigInt> for &'a Point<'c> {
    type Output = Result<Point<'c>, EcError>;
    fn mul(self, rhs: &'b BigInt) -> Self::Output {
        self.scalar_mul(rhs)
    }
}

impl std::fmt::Display for Point<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.coords {
            Coordinates::Identity => write!(f, "[Curve {}] O", self.curve),
            Coordinates::Affine { x, y } => {
                write!(f, "[Curve {}] Point({}, {})", self.curve, x, y)
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn toy_curve() -> Curve {
        Curve::modular(497, 1768, 9739).unwrap()
    }

    fn exposed_factor(err: EcError) -> BigInt {
        match err {
            EcError::DoublingFailed { factor, .. } => factor,
            EcError::AdditionFailed { source } => match *source {
                EcError::NotInvertible { gcd, .. } => gcd,
                other => panic!("unexpected cause: {other}"),
            },
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn negation() {
        let curve = toy_curve();
        let p = curve.point(8045, 6936).unwrap();
        assert_eq!(-&p, curve.point(8045, 2803).unwrap());
        assert_eq!(-(-&p), p);
        assert_eq!(-curve.identity(), curve.identity());
    }

    #[test]
    fn identity_laws() {
        let curve = toy_curve();
        let p = curve.point(493, 5564).unwrap();
        let o = curve.identity();
        assert_eq!((&p + &o).unwrap(), p);
        assert_eq!((&o + &p).unwrap(), p);
        assert_eq!((&o + &o).unwrap(), o);
    }

    #[test]
    fn inverse_law() {
        let curve = toy_curve();
        let p = curve.point(493, 5564).unwrap();
        assert_eq!((&p + &(-&p)).unwrap(), curve.identity());
    }

    #[test]
    fn addition_golden_values() {
        let curve = toy_curve();
        let p = curve.point(493, 5564).unwrap();
        let q = curve.point(1539, 4742).unwrap();
        let r = curve.point(4403, 5202).unwrap();

        assert_eq!((&p + &p).unwrap(), curve.point(2130, 2999).unwrap());
        assert_eq!((&p + &q).unwrap(), curve.point(3720, 3806).unwrap());

        let sum = (((&p + &p).unwrap() + &q).unwrap() + &r).unwrap();
        assert_eq!(sum, curve.point(4215, 2162).unwrap());
        assert!(curve.contains(&sum));
    }

    #[test]
    fn commutativity_and_associativity() {
        let curve = toy_curve();
        let p = curve.point(493, 5564).unwrap();
        let q = curve.point(1539, 4742).unwrap();
        let r = curve.point(4403, 5202).unwrap();

        assert_eq!((&p + &q).unwrap(), (&q + &p).unwrap());

        let left = ((&p + &q).unwrap() + &r).unwrap();
        let right = (&p + (&q + &r).unwrap()).unwrap();
        assert_eq!(left, right);
    }

    #[test]
    fn scalar_multiplication_golden_values() {
        let curve = toy_curve();
        let p = curve.point(2339, 2213).unwrap();
        assert_eq!((7863 * &p).unwrap(), curve.point(9467, 2742).unwrap());

        let qa = curve.point(815, 3190).unwrap();
        assert_eq!(
            qa.scalar_mul(&BigInt::from(1829)).unwrap(),
            curve.point(7929, 707).unwrap()
        );

        assert_eq!(p.scalar_mul(&BigInt::one()).unwrap(), p);
    }

    #[test]
    fn scalar_distributive_laws() {
        let curve = toy_curve();
        let p = curve.point(2339, 2213).unwrap();

        // (3 + 7) * P = 3P + 7P
        let ten_p = (10 * &p).unwrap();
        let split = ((3 * &p).unwrap() + (7 * &p).unwrap()).unwrap();
        assert_eq!(ten_p, split);
        assert_eq!(ten_p, curve.point(9059, 8720).unwrap());

        // 2 * (5 * P) = 10 * P
        assert_eq!((2 * (5 * &p).unwrap()).unwrap(), ten_p);
    }

    #[test]
    fn every_result_stays_on_the_curve() {
        let curve = toy_curve();
        let p = curve.point(493, 5564).unwrap();
        let q = curve.point(2339, 2213).unwrap();

        let mut walk = curve.identity();
        for k in 1u64..=20 {
            walk = (walk + &p).unwrap();
            assert!(curve.contains(&walk));
            assert!(curve.contains(&(k * &q).unwrap()));
        }
    }

    #[test]
    fn scalar_must_be_positive() {
        let curve = toy_curve();
        let p = curve.point(493, 5564).unwrap();
        assert_eq!(
            p.scalar_mul(&BigInt::from(0)).unwrap_err(),
            EcError::InvalidScalar {
                scalar: BigInt::from(0)
            }
        );
        assert_eq!(
            p.scalar_mul(&BigInt::from(-3)).unwrap_err(),
            EcError::InvalidScalar {
                scalar: BigInt::from(-3)
            }
        );
    }

    #[test]
    fn secant_slope_failure_on_composite_modulus() {
        let curve = Curve::modular(1, 1, 35).unwrap();
        let p = curve.point(0, 1).unwrap();
        let q = curve.point(7, 1).unwrap();

        let err = (&p + &q).unwrap_err();
        assert!(matches!(err, EcError::AdditionFailed { .. }));
        assert_eq!(exposed_factor(err), BigInt::from(7));
    }

    #[test]
    fn tangent_slope_failure_on_composite_modulus() {
        let curve = Curve::modular(0, 1, 15).unwrap();
        let p = curve.point(2, 3).unwrap();

        let err = (&p + &p).unwrap_err();
        assert_eq!(
            err,
            EcError::DoublingFailed {
                modulus: BigInt::from(15),
                factor: BigInt::from(3),
            }
        );
    }

    #[test]
    fn failed_multiplication_factors_the_modulus() {
        // Lenstra's elliptic curve factorization: iterating k * P on a
        // curve modulo 455839 = 599 * 761 breaks down at k = 8 and
        // hands out the factor 599
        let curve = Curve::modular(5, -5, 455839).unwrap();
        let mut point = curve.point(1, 1).unwrap();
        let mut found = None;
        for k in 2u64..=10 {
            match point.scalar_mul(&BigInt::from(k)) {
                Ok(next) => point = next,
                Err(err) => {
                    found = Some((k, exposed_factor(err)));
                    break;
                }
            }
        }
        assert_eq!(found, Some((8, BigInt::from(599))));
    }

    #[test]
    fn real_curve_arithmetic() {
        let curve = Curve::real(-2, 2).unwrap();
        let p = curve.point(1, 1).unwrap();

        // slope 1/2, both coordinates exact in binary floating point
        let doubled = (&p + &p).unwrap();
        assert_eq!(doubled.x(), Some(&Element::from(-1.75)));
        assert_eq!(doubled.y(), Some(&Element::from(0.375)));

        assert_eq!((&p + &(-&p)).unwrap(), curve.identity());
    }

    #[test]
    fn display() {
        let curve = toy_curve();
        assert_eq!(
            curve.point(493, 5564).unwrap().to_string(),
            "[Curve y² = x³ + 497x + 1768 mod 9739] Point(493, 5564)"
        );
        assert_eq!(
            curve.identity().to_string(),
            "[Curve y² = x³ + 497x + 1768 mod 9739] O"
        );
    }

    #[test]
    fn points_on_equal_curves_compare_equal() {
        let curve = toy_curve();
        let same = toy_curve();
        let other = Curve::modular(0, 7, 9739).unwrap();

        assert_eq!(curve.identity(), same.identity());
        assert_ne!(curve.identity(), other.identity());
        assert_eq!(
            curve.point(493, 5564).unwrap(),
            same.point(493, 5564).unwrap()
        );
    }
}
