use crate::element::Element;
use crate::error::EcError;
use crate::field::Field;
use crate::point::{Coordinates, Point};

use num_bigint::BigInt;
use num_integer::Integer;

/// A short Weierstrass curve `y² = x³ + ax + b`, over the reals or
/// modulo `n`. Immutable after construction; every [`Point`] built from
/// it borrows it as its arithmetic context.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Curve {
    a: Element,
    b: Element,
    field: Field,
}

/// Result of recovering the y-coordinates belonging to an x-coordinate.
///
/// Square roots modulo `n ≢ 3 (mod 4)` are hard to compute, so that
/// case degrades to [`RecoveredY::SquareOnly`] instead of producing
/// roots. For `n ≡ 3 (mod 4)` the closed-form root `y²^((n+1)/4)` is
/// returned without verifying that `y²` is a quadratic residue: if `x`
/// is not on the curve the candidates are not actual roots.
#[derive(Debug, Clone, PartialEq)]
pub enum RecoveredY {
    Roots {
        y_squared: Element,
        roots: (Element, Element),
    },
    SquareOnly {
        y_squared: Element,
    },
}

impl Curve {
    /// Creates a curve, modular when `modulus` is given. A modulus
    /// requires integer `a` and `b`.
    pub fn new(
        a: impl Into<Element>,
        b: impl Into<Element>,
        modulus: Option<BigInt>,
    ) -> Result<Self, EcError> {
        let (a, b) = (a.into(), b.into());
        let field = match modulus {
            Some(n) => {
                if !a.is_integer() || !b.is_integer() {
                    return Err(EcError::InvalidParameters);
                }
                Field::Modular(n)
            }
            None => Field::Real,
        };
        Ok(Self { a, b, field })
    }

    /// Creates a curve over the integers modulo `n`.
    pub fn modular(
        a: impl Into<Element>,
        b: impl Into<Element>,
        n: impl Into<BigInt>,
    ) -> Result<Self, EcError> {
        Self::new(a, b, Some(n.into()))
    }

    /// Creates a curve over the reals.
    pub fn real(a: impl Into<Element>, b: impl Into<Element>) -> Result<Self, EcError> {
        Self::new(a, b, None)
    }

    pub fn a(&self) -> &Element {
        &self.a
    }

    pub fn b(&self) -> &Element {
        &self.b
    }

    pub fn modulus(&self) -> Option<&BigInt> {
        self.field.modulus()
    }

    pub(crate) fn field(&self) -> &Field {
        &self.field
    }

    /// The additive identity `O` (point at infinity) of this curve.
    pub fn identity(&self) -> Point<'_> {
        Point::identity(self)
    }

    /// Constructs a validated point with the given coordinates.
    pub fn point(
        &self,
        x: impl Into<Element>,
        y: impl Into<Element>,
    ) -> Result<Point<'_>, EcError> {
        let (x, y) = (x.into(), y.into());
        if !self.satisfies_equation(&x, &y) {
            return Err(EcError::PointNotOnCurve {
                x,
                y,
                curve: self.to_string(),
            });
        }
        Ok(Point::affine(self, x, y))
    }

    /// Whether the point lies on this curve. The identity always does.
    pub fn contains(&self, point: &Point<'_>) -> bool {
        match point.coordinates() {
            Coordinates::Identity => true,
            Coordinates::Affine { x, y } => self.satisfies_equation(x, y),
        }
    }

    fn satisfies_equation(&self, x: &Element, y: &Element) -> bool {
        if self.modulus().is_some() && !(x.is_integer() && y.is_integer()) {
            return false;
        }
        let lhs = self.field.reduce(y * y);
        let rhs = self.field.reduce(x * x * x + &self.a * x + &self.b);
        lhs == rhs
    }

    /// Computes `y² = x³ + ax + b` for the given `x` and, where
    /// feasible, the two candidate y-coordinates.
    pub fn recover_y(&self, x: impl Into<Element>) -> RecoveredY {
        let x = x.into();
        let y_squared = self.field.reduce(&x * &x * &x + &self.a * &x + &self.b);
        match &self.field {
            Field::Real => {
                let root = y_squared.to_f64().sqrt();
                RecoveredY::Roots {
                    y_squared,
                    roots: (Element::Real(root), Element::Real(-root)),
                }
            }
            Field::Modular(n) => {
                let Element::Integer(square) = &y_squared else {
                    return RecoveredY::SquareOnly { y_squared };
                };
                if n.mod_floor(&BigInt::from(4)) != BigInt::from(3) {
                    return RecoveredY::SquareOnly { y_squared };
                }
                // Fermat's little theorem gives a closed-form square
                // root when n = 3 mod 4
                let exponent = (n + BigInt::from(1)) / BigInt::from(4);
                let root = square.modpow(&exponent, n);
                let other = (n - &root).mod_floor(n);
                RecoveredY::Roots {
                    y_squared,
                    roots: (Element::Integer(root), Element::Integer(other)),
                }
            }
        }
    }

    /// Recovering x from y amounts to solving a cubic over the field
    /// and is intentionally unsupported.
    pub fn recover_x(&self, _y: impl Into<Element>) -> Result<Element, EcError> {
        Err(EcError::NotImplemented)
    }
}

impl std::fmt::Display for Curve {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "y² = x³ + {}x + {}", self.a, self.b)?;
        if let Some(n) = self.modulus() {
            write!(f, " mod {}", n)?;
        }
        Ok(())
    }
}
