use crate::element::Element;

use num_bigint::BigInt;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EcError {
    #[error("curve parameters must all be integers when a modulus is given")]
    InvalidParameters,
    #[error("Point({x}, {y}) not on curve {curve}")]
    PointNotOnCurve {
        x: Element,
        y: Element,
        curve: String,
    },
    #[error("{divisor} is not invertible modulo {modulus}, gcd is {gcd}")]
    NotInvertible {
        divisor: BigInt,
        modulus: BigInt,
        gcd: BigInt,
    },
    #[error("could not add, curve order is not smooth enough")]
    AdditionFailed { source: Box<EcError> },
    #[error("could not add, but found a non-trivial factor of {modulus}: {factor}")]
    DoublingFailed { modulus: BigInt, factor: BigInt },
    #[error("scalar multiplier must be positive, got {scalar}")]
    InvalidScalar { scalar: BigInt },
    #[error("recovering x from y is computationally hard")]
    NotImplemented,
}
