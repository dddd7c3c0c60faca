//! Factorials and binomial coefficients.

use crate::FloatScalar;
use super::lgamma;

/// Factorial lookup table for small non-negative integers: FACTORIAL[n] = n!
/// Valid for n = 0..=20 (20! < 2^64, exact in f64 up to 18!).
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

/// Factorial n!.
///
/// Exact table lookup for n ≤ 20, `exp(ln n!)` beyond. Overflows to
/// infinity past 170! in f64 (34! in f32).
///
/// # Example
///
/// ```
/// use uniform_sum::special::factorial;
///
/// assert_eq!(factorial::<f64>(0), 1.0);
/// assert!((factorial::<f64>(10) - 3628800.0).abs() < 1e-6);
/// assert!(factorial::<f64>(200).is_infinite());
/// ```
pub fn factorial<T: FloatScalar>(n: u64) -> T {
    if n <= 20 {
        return T::from(FACTORIAL[n as usize]).unwrap();
    }
    ln_factorial::<T>(n).exp()
}

/// Natural logarithm of the factorial, ln n!.
///
/// Table lookup for n ≤ 20, `lgamma(n + 1)` above that. Never overflows
/// for any `u64`.
///
/// # Example
///
/// ```
/// use uniform_sum::special::ln_factorial;
///
/// // ln 3! = ln 6
/// assert!((ln_factorial::<f64>(3) - 6.0_f64.ln()).abs() < 1e-15);
///
/// // ln 100! — no overflow
/// assert!((ln_factorial::<f64>(100) - 363.73937555556347).abs() < 1e-9);
/// ```
pub fn ln_factorial<T: FloatScalar>(n: u64) -> T {
    if n <= 20 {
        return T::from(FACTORIAL[n as usize]).unwrap().ln();
    }
    lgamma(T::from(n).unwrap() + T::one())
}

/// Binomial coefficient C(n, k) as a float.
///
/// Returns zero for `k > n`, so alternating sums over `k` can run past `n`
/// without special cases. Uses the multiplicative formula over
/// `min(k, n − k)` factors, exact while the intermediate products stay
/// below 2^53.
///
/// # Example
///
/// ```
/// use uniform_sum::special::binomial;
///
/// assert_eq!(binomial::<f64>(4, 2), 6.0);
/// assert_eq!(binomial::<f64>(4, 0), 1.0);
/// assert_eq!(binomial::<f64>(4, 5), 0.0);
/// ```
pub fn binomial<T: FloatScalar>(n: u64, k: u64) -> T {
    if k > n {
        return T::zero();
    }
    let k = k.min(n - k);
    let mut c = T::one();
    for i in 0..k {
        c = c * T::from(n - i).unwrap() / T::from(i + 1).unwrap();
    }
    c
}

/// Natural logarithm of the binomial coefficient, ln C(n, k).
///
/// Returns −∞ for `k > n` (the coefficient is zero).
pub fn ln_binomial<T: FloatScalar>(n: u64, k: u64) -> T {
    if k > n {
        return T::neg_infinity();
    }
    ln_factorial::<T>(n) - ln_factorial::<T>(k) - ln_factorial::<T>(n - k)
}
