use crate::element::Element;
use crate::error::EcError;

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::One;

/// Arithmetic backend of a curve, selected once at construction: either
/// plain real arithmetic or arithmetic modulo `n`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) enum Field {
    Real,
    Modular(BigInt),
}

impl Field {
    pub(crate) fn modulus(&self) -> Option<&BigInt> {
        match self {
            Self::Real => None,
            Self::Modular(n) => Some(n),
        }
    }

    pub(crate) fn reduce(&self, value: Element) -> Element {
        match (self, value) {
            (Self::Modular(n), Element::Integer(value)) => Element::Integer(value.mod_floor(n)),
            (_, value) => value,
        }
    }

    /// Negates a y-coordinate: `-y` over the reals, `n - y` modulo `n`.
    pub(crate) fn negate(&self, y: &Element) -> Element {
        match (self, y) {
            (Self::Modular(n), Element::Integer(y)) => Element::Integer((n - y).mod_floor(n)),
            (_, y) => -y,
        }
    }

    /// Division primitive of the group law: the real quotient, or
    /// multiplication by the modular inverse of the divisor. The modular
    /// inverse exists iff `gcd(divisor, n) = 1`; on failure the gcd is a
    /// non-trivial factor of `n` and is carried in the error.
    pub(crate) fn div(&self, dividend: &Element, divisor: &Element) -> Result<Element, EcError> {
        match self {
            Self::Real => Ok(Element::Real(dividend.to_f64() / divisor.to_f64())),
            Self::Modular(n) => {
                let (Element::Integer(dividend), Element::Integer(divisor)) = (dividend, divisor)
                else {
                    // NOTE validated points on a modular curve always
                    // carry integer coordinates
                    unreachable!()
                };
                let inverse = modular_inverse(divisor, n)?;
                Ok(Element::Integer((dividend * inverse).mod_floor(n)))
            }
        }
    }
}

fn modular_inverse(divisor: &BigInt, modulus: &BigInt) -> Result<BigInt, EcError> {
    let divisor = divisor.mod_floor(modulus);
    let extended = divisor.extended_gcd(modulus);
    if !extended.gcd.is_one() {
        return Err(EcError::NotInvertible {
            divisor,
            modulus: modulus.clone(),
            gcd: extended.gcd,
        });
    }
    Ok(extended.x.mod_floor(modulus))
}
