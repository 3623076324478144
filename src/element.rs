use num_bigint::BigInt;
use num_traits::ToPrimitive;

use std::fmt;
use std::hash::{Hash, Hasher};

/// A curve parameter or point coordinate.
///
/// Curves with a modulus work exclusively over arbitrary-precision
/// integers; curves over the reals mix integers and floating point
/// freely, so mixed-operand arithmetic promotes to `Real`.
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Integer(BigInt),
    Real(f64),
}

impl Element {
    pub fn is_integer(&self) -> bool {
        matches!(self, Self::Integer(_))
    }

    pub(crate) fn to_f64(&self) -> f64 {
        match self {
            Self::Integer(value) => value.to_f64().unwrap_or(f64::NAN),
            Self::Real(value) => *value,
        }
    }
}

// NOTE `Real` equality is plain IEEE comparison; a NaN parameter never
// survives curve construction, so the Eq contract holds in practice.
impl Eq for Element {}

impl Hash for Element {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Self::Integer(value) => {
                state.write_u8(0);
                value.hash(state);
            }
            Self::Real(value) => {
                state.write_u8(1);
                let canonical = if *value == 0.0 { 0.0_f64 } else { *value };
                state.write_u64(canonical.to_bits());
            }
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{}", value),
            Self::Real(value) => write!(f, "{}", value),
        }
    }
}

impl From<BigInt> for Element {
    fn from(value: BigInt) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for Element {
    fn from(value: f64) -> Self {
        Self::Real(value)
    }
}

macro_rules! impl_element_from_int {
    ($($int:ty),*) => {
        $(
            impl From<$int> for Element {
                fn from(value: $int) -> Self {
                    Self::Integer(BigInt::from(value))
                }
            }
        )*
    };
}

impl_element_from_int!(i32, i64, u32, u64);

macro_rules! impl_element_binop {
    ($imp:ident, $method:ident, $op:tt) => {
        impl std::ops::$imp<&Element> for &Element {
            type Output = Element;
            fn $method(self, rhs: &Element) -> Element {
                match (self, rhs) {
                    (Element::Integer(lhs), Element::Integer(rhs)) => Element::Integer(lhs $op rhs),
                    (lhs, rhs) => Element::Real(lhs.to_f64() $op rhs.to_f64()),
                }
            }
        }

        impl std::ops::$imp for Element {
            type Output = Element;
            fn $method(self, rhs: Element) -> Element {
                std::ops::$imp::$method(&self, &rhs)
            }
        }

        impl std::ops::$imp<&Element> for Element {
            type Output = Element;
            fn $method(self, rhs: &Element) -> Element {
                std::ops::$imp::$method(&self, rhs)
            }
        }

        impl std::ops::$imp<Element> for &Element {
            type Output = Element;
            fn $method(self, rhs: Element) -> Element {
                std::ops::$imp::$method(self, &rhs)
            }
        }
    };
}

impl_element_binop!(Add, add, +);
impl_element_binop!(Sub, sub, -);
impl_element_binop!(Mul, mul, *);

impl std::ops::Neg for &Element {
    type Output = Element;
    fn neg(self) -> Element {
        match self {
            Element::Integer(value) => Element::Integer(-value),
            Element::Real(value) => Element::Real(-value),
        }
    }
}

impl std::ops::Neg for Element {
    type Output = Element;
    fn neg(self) -> Element {
        -&self
    }
}
