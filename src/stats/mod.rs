//! Statistical distributions.
//!
//! Each distribution implements [`ContinuousDistribution`] for a consistent
//! per-point API. The `*_batch` helpers map any distribution over a slice of
//! evaluation points, preserving order and length (requires `alloc`).
//!
//! # Continuous distributions
//!
//! | Distribution | Parameters | Support |
//! |---|---|---|
//! | [`IrwinHall`] | number of summed uniforms n | [0, n] |
//!
//! # Example
//!
//! ```
//! use uniform_sum::stats::{IrwinHall, ContinuousDistribution};
//!
//! let d = IrwinHall::<f64>::new(2).unwrap();
//! assert!((d.cdf(1.0) - 0.5).abs() < 1e-14);
//! assert!((d.mean() - 1.0).abs() < 1e-14);
//! ```

pub mod irwin_hall;


pub use irwin_hall::IrwinHall;

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

use crate::traits::FloatScalar;

/// Errors from distribution construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatsError {
    /// A parameter is out of its valid range.
    InvalidParameter,
}

impl core::fmt::Display for StatsError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            StatsError::InvalidParameter => {
                write!(f, "distribution parameter out of valid range")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for StatsError {}

/// Trait for continuous probability distributions.
pub trait ContinuousDistribution<T: FloatScalar> {
    /// Probability density function.
    fn pdf(&self, x: T) -> T;
    /// Natural log of the probability density function.
    fn ln_pdf(&self, x: T) -> T;
    /// Cumulative distribution function P(X ≤ x).
    fn cdf(&self, x: T) -> T;
    /// Survival function P(X > x) = 1 − cdf(x).
    fn sf(&self, x: T) -> T {
        T::one() - self.cdf(x)
    }
    /// Quantile function (inverse CDF). Returns x such that P(X ≤ x) = p.
    fn quantile(&self, p: T) -> T;
    /// Expected value E\[X\].
    fn mean(&self) -> T;
    /// Variance Var(X).
    fn variance(&self) -> T;
}

/// First four standardized moments of a distribution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Moments<T> {
    pub mean: T,
    pub variance: T,
    pub skewness: T,
    /// Kurtosis minus 3 (zero for the normal distribution).
    pub excess_kurtosis: T,
}

impl<T: Copy> Moments<T> {
    /// `(mean, variance, skewness, excess_kurtosis)`.
    pub fn as_tuple(&self) -> (T, T, T, T) {
        (self.mean, self.variance, self.skewness, self.excess_kurtosis)
    }
}

// ---------------------------------------------------------------------------
// Batch evaluation
// ---------------------------------------------------------------------------

/// Density at each point of `xs`, in order.
///
/// A single point is evaluated as a one-element slice
/// (`core::slice::from_ref(&x)`).
///
/// # Example
///
/// ```
/// use uniform_sum::stats::{pdf_batch, IrwinHall};
///
/// let d = IrwinHall::<f64>::new(1).unwrap();
/// assert_eq!(pdf_batch(&d, &[-0.5, 0.5, 1.5]), vec![0.0, 1.0, 0.0]);
/// ```
#[cfg(feature = "alloc")]
pub fn pdf_batch<T, D>(dist: &D, xs: &[T]) -> Vec<T>
where
    T: FloatScalar,
    D: ContinuousDistribution<T> + ?Sized,
{
    xs.iter().map(|&x| dist.pdf(x)).collect()
}

/// Cumulative probability at each point of `xs`, in order.
#[cfg(feature = "alloc")]
pub fn cdf_batch<T, D>(dist: &D, xs: &[T]) -> Vec<T>
where
    T: FloatScalar,
    D: ContinuousDistribution<T> + ?Sized,
{
    xs.iter().map(|&x| dist.cdf(x)).collect()
}

/// Survival probability at each point of `xs`, in order.
///
/// The complement is taken per element: `out[i] = 1 − cdf(xs[i])`.
#[cfg(feature = "alloc")]
pub fn sf_batch<T, D>(dist: &D, xs: &[T]) -> Vec<T>
where
    T: FloatScalar,
    D: ContinuousDistribution<T> + ?Sized,
{
    xs.iter().map(|&x| dist.sf(x)).collect()
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

/// Iteration cap for [`quantile_newton`].
const QUANTILE_MAX_ITER: usize = 200;

/// Solve `cdf(x) = p` on `[lo, hi]` by safeguarded Newton iteration.
///
/// The bracket always holds the root: each evaluation moves one end to the
/// current point. A Newton step from `x0` is taken when the density is
/// usable and the step lands strictly inside the bracket, otherwise the
/// bracket is bisected. Stops when the residual is below `1000ε` or the
/// bracket has shrunk to a few ulps of its scale.
///
/// Returns `lo` for `p ≤ 0`, `hi` for `p ≥ 1`, and NaN for NaN `p` or as soon
/// as `cdf_fn` yields NaN.
pub(crate) fn quantile_newton<T: FloatScalar>(
    cdf_fn: impl Fn(T) -> T,
    pdf_fn: impl Fn(T) -> T,
    p: T,
    x0: T,
    lo: T,
    hi: T,
) -> T {
    if p.is_nan() {
        return p;
    }
    if p <= T::zero() {
        return lo;
    }
    if p >= T::one() {
        return hi;
    }

    let eps = T::epsilon();
    let two = T::one() + T::one();
    let residual_tol = eps * T::from(1000.0).unwrap();
    let width_tol = eps * two * lo.abs().max(hi.abs()).max(T::one());

    let (mut lo, mut hi) = (lo, hi);
    let mut x = x0.max(lo).min(hi);
    for _ in 0..QUANTILE_MAX_ITER {
        let residual = cdf_fn(x) - p;
        if residual.is_nan() {
            return residual;
        }
        if residual.abs() < residual_tol {
            return x;
        }
        if residual < T::zero() {
            lo = x;
        } else {
            hi = x;
        }
        if hi - lo < width_tol {
            return x;
        }

        let slope = pdf_fn(x);
        let newton = x - residual / slope;
        x = if slope > eps && newton > lo && newton < hi {
            newton
        } else {
            lo + (hi - lo) / two
        };
    }
    x
}
