//! Walkthrough on the toy curve y² = x³ + 497x + 1768 mod 9739:
//! negation, addition, scalar multiplication, a discrete-log style
//! shared secret and y-coordinate recovery.

use ecurve::{BigInt, Curve, RecoveredY};

use sha3::{Digest, Sha3_256};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let curve = Curve::modular(497, 1768, 9739)?;

    // point negation
    let p = curve.point(8045, 6936)?;
    println!("{}", -&p);

    // point addition
    let p = curve.point(493, 5564)?;
    let q = curve.point(1539, 4742)?;
    let r = curve.point(4403, 5202)?;
    println!("{}", (((&p + &p)? + &q)? + &r)?);

    // scalar multiplication
    let p = curve.point(2339, 2213)?;
    println!("{}", (7863 * &p)?);

    // a toy shared secret: multiply the peer's public point by our
    // secret scalar and hash the resulting x-coordinate
    let qa = curve.point(815, 3190)?;
    let secret = qa.scalar_mul(&BigInt::from(1829))?;
    let x = secret.x().ok_or("shared secret is the identity")?;
    let digest = Sha3_256::digest(x.to_string().as_bytes());
    println!("shared secret digest: {}", hex::encode(digest));

    // recover both y-coordinates for x = 4726 (9739 = 3 mod 4)
    match curve.recover_y(4726) {
        RecoveredY::Roots { y_squared, roots } => {
            println!("y² = {}, candidates {} and {}", y_squared, roots.0, roots.1);
            let p1 = curve.point(4726, roots.0)?;
            let p2 = curve.point(4726, roots.1)?;
            println!("{}", p1.scalar_mul(&BigInt::from(6534))?);
            println!("{}", p2.scalar_mul(&BigInt::from(6534))?);
        }
        RecoveredY::SquareOnly { y_squared } => {
            println!("y² = {}, roots unavailable", y_squared);
        }
    }

    Ok(())
}
