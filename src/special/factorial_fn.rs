//! Factorial of non-negative integers.

use crate::FloatScalar;

/// Factorial lookup table: FACTORIAL[n] = n!
/// Valid for n = 0..=20 (exact in f64 up to 18!, correctly rounded above).
const FACTORIAL: [f64; 21] = [
    1.0,
    1.0,
    2.0,
    6.0,
    24.0,
    120.0,
    720.0,
    5040.0,
    40320.0,
    362880.0,
    3628800.0,
    39916800.0,
    479001600.0,
    6227020800.0,
    87178291200.0,
    1307674368000.0,
    20922789888000.0,
    355687428096000.0,
    6402373705728000.0,
    121645100408832000.0,
    2432902008176640000.0,
];

/// Factorial n! as a float.
///
/// Table lookup for n ≤ 20, running product beyond. The result overflows to
/// +∞ once n! exceeds the range of `T` (n ≥ 171 for f64, n ≥ 35 for f32).
///
/// # Example
///
/// ```
/// use paramdist::special::factorial;
///
/// assert_eq!(factorial::<f64>(4), 24.0);
/// assert!(factorial::<f64>(200).is_infinite());
/// ```
pub fn factorial<T: FloatScalar>(n: u32) -> T {
    let last = FACTORIAL.len() - 1;
    let n = n as usize;
    if n <= last {
        return T::from(FACTORIAL[n]).unwrap();
    }
    let mut acc = T::from(FACTORIAL[last]).unwrap();
    for k in (last + 1)..=n {
        acc = acc * T::from(k).unwrap();
        if acc.is_infinite() {
            break;
        }
    }
    acc
}
