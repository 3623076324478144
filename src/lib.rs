#![deny(clippy::all)]
#![deny(clippy::dbg_macro)]

//! Elementary arithmetic over points on a short Weierstrass curve
//! `y² = x³ + ax + b`, either over the reals or modulo a prime-like
//! modulus `n`. Supports point negation, the chord-and-tangent group
//! law, double-and-add scalar multiplication and y-coordinate recovery
//! for moduli congruent to 3 mod 4.
//!
//! This is a toy library for exploring the group law, not a hardened
//! cryptographic implementation: nothing here is constant time.

pub mod curve;
pub mod element;
pub mod error;
mod field;
pub mod point;

pub use curve::{Curve, RecoveredY};
pub use element::Element;
pub use error::EcError;
pub use point::{Coordinates, Point};

pub use num_bigint::BigInt;
