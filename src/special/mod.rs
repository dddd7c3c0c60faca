//! Special mathematical functions.
//!
//! Log-gamma, factorials, and binomial coefficients, in direct and log form. All
//! functions are generic over [`FloatScalar`] (f32/f64), no-std compatible,
//! and stack-only.
//!
//! # Functions
//!
//! | Function | Description |
//! |----------|-------------|
//! | [`lgamma`] | Log-gamma ln Γ(x) |
//! | [`factorial`] | n! (infinity once it overflows `T`) |
//! | [`ln_factorial`] | ln n!, finite for every `u64` |
//! | [`binomial`] | Binomial coefficient C(n, k), zero for k > n |
//! | [`ln_binomial`] | ln C(n, k), −∞ for k > n |
//!
//! # Example
//!
//! ```
//! use uniform_sum::special::{factorial, ln_factorial, binomial};
//!
//! // 5! = 120
//! assert!((factorial::<f64>(5) - 120.0).abs() < 1e-12);
//!
//! // ln 0! = 0
//! assert!(ln_factorial::<f64>(0).abs() < 1e-15);
//!
//! // C(5, 2) = 10, C(5, 7) = 0
//! assert!((binomial::<f64>(5, 2) - 10.0).abs() < 1e-12);
//! assert_eq!(binomial::<f64>(5, 7), 0.0);
//! ```

use crate::FloatScalar;

mod factorial;
mod gamma_fn;

#[cfg(test)]
mod tests;

pub use factorial::{binomial, factorial, ln_binomial, ln_factorial};
pub use gamma_fn::lgamma;

// ---------------------------------------------------------------------------
// Lanczos approximation constants (g = 7, n = 9)
// Coefficients from Paul Godfrey / Boost / CPython.
// ---------------------------------------------------------------------------

/// Lanczos parameter g.
pub(crate) const LANCZOS_G: f64 = 7.0;

/// Lanczos series coefficients (n = 9).
pub(crate) const LANCZOS_COEFFS: [f64; 9] = [
    0.99999999999980993,
    676.5203681218851,
    -1259.1392167224028,
    771.32342877765313,
    -176.61502916214059,
    12.507343278686905,
    -0.13857109526572012,
    9.9843695780195716e-6,
    1.5056327351493116e-7,
];

/// Evaluate the Lanczos series Ag(z) = c0 + c1/(z+1) + c2/(z+2) + ...
#[inline]
pub(crate) fn lanczos_sum<T: FloatScalar>(z: T) -> T {
    LANCZOS_COEFFS[1..]
        .iter()
        .zip(1u32..)
        .fold(T::from(LANCZOS_COEFFS[0]).unwrap(), |sum, (&c, i)| {
            sum + T::from(c).unwrap() / (z + T::from(i).unwrap())
        })
}
