//! Irwin–Hall (uniform sum) distribution.
//!
//! The distribution of `U₁ + … + Uₙ` for independent `Uᵢ ~ Uniform(0, 1)`.
//! Besides the [`IrwinHall`] type, the module exposes slice-level free
//! functions ([`density`], [`cumulative_probability`],
//! [`survival_probability`]) and [`moments`], which validate `n` and
//! evaluate in one call.

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

use crate::FloatScalar;
use crate::special::{ln_binomial, ln_factorial};
use super::{ContinuousDistribution, Moments, StatsError, quantile_newton};
#[cfg(feature = "alloc")]
use super::{cdf_batch, pdf_batch, sf_batch};

/// Upper bound on the ratio between the true cancellation error of the
/// alternating sum and its estimate `ε·Σ|t_k|(|ln t_k| + m)`.
const CANCELLATION_SAFETY: f64 = 4.0;

/// Irwin–Hall distribution: the sum of `n` independent standard uniforms.
///
/// f(x) = 1/(n−1)! · Σ_{k=0}^{⌊x⌋} (−1)^k C(n,k) (x−k)^{n−1}
///
/// F(x) = 1/n! · Σ_{k=0}^{⌊x⌋} (−1)^k C(n,k) (x−k)^n
///
/// Both sums are evaluated at `min(x, n − x)`, using the symmetry of the
/// distribution about `n/2`, so at most `⌊n/2⌋ + 1` terms are summed.
/// Terms are formed in log space, so nothing overflows for large `n`.
///
/// # Accuracy and NaN results
///
/// The alternating terms grow much faster than their sum, so rounding error
/// grows roughly geometrically with `n`. Every evaluation estimates that
/// error from the term magnitudes; when the estimate exceeds `√ε` (about
/// 1.5e-8 in f64, 3.5e-4 in f32) the result cannot be trusted and `pdf`,
/// `cdf`, `sf`, and `quantile` return NaN instead.
///
/// - f64: every point is evaluated for `n ≤ 36`, with absolute error below
///   1e-8 (below 1e-9 for `n ≤ 30`). From about `n = 38` a band around
///   `n/2` returns NaN; it starts near `x = 40` at `n = 100` and near
///   `x = 75` at `n = 200`. The tails outside the band stay accurate.
/// - f32: every point is evaluated for `n ≤ 12`, absolute error below 1e-4.
///
/// `quantile` returns NaN as soon as its search touches the band, which for
/// such `n` includes the starting point `n/2`.
///
/// Values outside `[0, 1]` (or below zero for the density) by less than the
/// error estimate are clamped back into range.
///
/// For `n = 1` this is `Uniform(0, 1)`, for `n = 2` the triangular
/// distribution on `[0, 2]`.
///
/// # Example
///
/// ```
/// use uniform_sum::stats::{IrwinHall, ContinuousDistribution};
///
/// let d = IrwinHall::<f64>::new(3).unwrap();
/// assert!((d.pdf(1.5) - 0.75).abs() < 1e-14);
/// assert!((d.cdf(1.5) - 0.5).abs() < 1e-14);
/// assert!((d.variance() - 0.25).abs() < 1e-14);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct IrwinHall<T> {
    n: u64,
    ln_fact_n_minus_1: T, // ln (n−1)!
    ln_fact_n: T,         // ln n!
}

impl<T: FloatScalar> IrwinHall<T> {
    /// Create the distribution of a sum of `n` standard uniforms. Requires `n ≥ 1`.
    pub fn new(n: u64) -> Result<Self, StatsError> {
        if n == 0 {
            return Err(StatsError::InvalidParameter);
        }
        Ok(Self {
            n,
            ln_fact_n_minus_1: ln_factorial(n - 1),
            ln_fact_n: ln_factorial(n),
        })
    }

    /// Number of summed uniforms.
    pub fn n(&self) -> u64 {
        self.n
    }

    /// Closed support `[0, n]` as `(lower, upper)`.
    pub fn support(&self) -> (T, T) {
        (T::zero(), self.upper())
    }

    /// Median, equal to the mean `n/2`.
    pub fn median(&self) -> T {
        self.mean()
    }

    /// Skewness, zero since the distribution is symmetric.
    pub fn skewness(&self) -> T {
        T::zero()
    }

    /// Excess kurtosis −6/(5n).
    pub fn excess_kurtosis(&self) -> T {
        let six = T::from(6.0).unwrap();
        let five = T::from(5.0).unwrap();
        -six / (five * self.upper())
    }

    /// Mean, variance, skewness, and excess kurtosis together.
    pub fn moments(&self) -> Moments<T> {
        Moments {
            mean: self.mean(),
            variance: self.variance(),
            skewness: self.skewness(),
            excess_kurtosis: self.excess_kurtosis(),
        }
    }

    fn upper(&self) -> T {
        T::from(self.n).unwrap()
    }

    /// Σ_{k=0}^{min(⌊y⌋, n)} (−1)^k C(n,k) (y−k)^p / p!, with `ln_p_fact = ln p!`.
    ///
    /// Empty (zero) for `y < 0`. NaN when the estimated cancellation error
    /// exceeds `√ε`.
    fn alternating_sum(&self, y: T, p: u64, ln_p_fact: T) -> T {
        let zero = T::zero();
        let pf = T::from(p).unwrap();

        let mut sum = zero;
        // Σ|t_k| and Σ|t_k|·|ln t_k|: the exp of a log-space term carries a
        // relative error of about |ln t_k|·ε, each addition about ε.
        let mut abs_sum = zero;
        let mut abs_ln_sum = zero;
        let mut k = 0u64;
        let mut kf = zero;
        while k <= self.n && kf <= y {
            // 0^0 = 1 for the n = 1 density
            let ln_pow = if p == 0 { zero } else { pf * (y - kf).ln() };
            let ln_term = ln_binomial::<T>(self.n, k) + ln_pow - ln_p_fact;
            let term = ln_term.exp();
            sum = if k % 2 == 0 { sum + term } else { sum - term };
            if term > zero {
                abs_sum = abs_sum + term;
                abs_ln_sum = abs_ln_sum + term * ln_term.abs();
            }
            k += 1;
            kf = kf + T::one();
        }

        let safety = T::from(CANCELLATION_SAFETY).unwrap();
        let error = safety * T::epsilon() * (abs_ln_sum + kf * abs_sum);
        if error > Self::max_abs_error() {
            return T::nan();
        }
        sum
    }

    /// Largest estimated absolute error accepted before returning NaN: `√ε`.
    fn max_abs_error() -> T {
        T::epsilon().sqrt()
    }
}

impl<T: FloatScalar> ContinuousDistribution<T> for IrwinHall<T> {
    fn pdf(&self, x: T) -> T {
        if x.is_nan() {
            return x;
        }
        let upper = self.upper();
        if x < T::zero() || x > upper {
            return T::zero();
        }
        let y = x.min(upper - x);
        let f = self.alternating_sum(y, self.n - 1, self.ln_fact_n_minus_1);
        // NaN falls through both comparisons
        if f < T::zero() { T::zero() } else { f }
    }

    fn ln_pdf(&self, x: T) -> T {
        self.pdf(x).ln()
    }

    fn cdf(&self, x: T) -> T {
        if x.is_nan() {
            return x;
        }
        let zero = T::zero();
        let one = T::one();
        let upper = self.upper();
        if x <= zero {
            return zero;
        }
        if x >= upper {
            return one;
        }

        let two = one + one;
        let p = if x <= upper / two {
            self.alternating_sum(x, self.n, self.ln_fact_n)
        } else {
            one - self.alternating_sum(upper - x, self.n, self.ln_fact_n)
        };
        if p < zero {
            zero
        } else if p > one {
            one
        } else {
            p
        }
    }

    fn quantile(&self, p: T) -> T {
        quantile_newton(
            |x| self.cdf(x),
            |x| self.pdf(x),
            p,
            self.mean(),
            T::zero(),
            self.upper(),
        )
    }

    fn mean(&self) -> T {
        let two = T::one() + T::one();
        self.upper() / two
    }

    fn variance(&self) -> T {
        let twelve = T::from(12.0).unwrap();
        self.upper() / twelve
    }
}

// ---------------------------------------------------------------------------
// Slice-level entry points
// ---------------------------------------------------------------------------

/// Density of the sum of `n` standard uniforms at each point of `xs`.
///
/// Output has the same length and order as `xs`. Fails with
/// [`StatsError::InvalidParameter`] when `n == 0`.
///
/// # Example
///
/// ```
/// use uniform_sum::stats::irwin_hall::density;
///
/// let f = density(&[0.0_f64, 0.5, 1.0, 1.5, 2.0], 2).unwrap();
/// let expected = [0.0, 0.5, 1.0, 0.5, 0.0];
/// for (a, b) in f.iter().zip(expected) {
///     assert!((a - b).abs() < 1e-14);
/// }
/// ```
#[cfg(feature = "alloc")]
pub fn density<T: FloatScalar>(xs: &[T], n: u64) -> Result<Vec<T>, StatsError> {
    let dist = IrwinHall::new(n)?;
    Ok(pdf_batch(&dist, xs))
}

/// Cumulative probability P(X ≤ x) at each point of `xs`.
///
/// # Example
///
/// ```
/// use uniform_sum::stats::irwin_hall::cumulative_probability;
///
/// let p = cumulative_probability(&[1.0_f64], 2).unwrap();
/// assert!((p[0] - 0.5).abs() < 1e-14);
/// ```
#[cfg(feature = "alloc")]
pub fn cumulative_probability<T: FloatScalar>(xs: &[T], n: u64) -> Result<Vec<T>, StatsError> {
    let dist = IrwinHall::new(n)?;
    Ok(cdf_batch(&dist, xs))
}

/// Survival probability P(X > x) = 1 − P(X ≤ x), element-wise over `xs`.
#[cfg(feature = "alloc")]
pub fn survival_probability<T: FloatScalar>(xs: &[T], n: u64) -> Result<Vec<T>, StatsError> {
    let dist = IrwinHall::new(n)?;
    Ok(sf_batch(&dist, xs))
}

/// Mean `n/2`, variance `n/12`, skewness `0`, and excess kurtosis `−6/(5n)`.
///
/// # Example
///
/// ```
/// use uniform_sum::stats::irwin_hall::moments;
///
/// let m = moments::<f64>(2).unwrap();
/// assert_eq!(m.as_tuple(), (1.0, 2.0 / 12.0, 0.0, -0.6));
/// ```
pub fn moments<T: FloatScalar>(n: u64) -> Result<Moments<T>, StatsError> {
    Ok(IrwinHall::new(n)?.moments())
}
