//! Continuous parametric distributions.
//!
//! Every distribution implements [`ContinuousDistribution`], the dyn-compatible
//! evaluation contract shared across the family, and [`ParametricDistribution`],
//! which exposes the ordered parameter vector and the gradients with respect to it.
//!
//! | Distribution | Parameters | Support |
//! |---|---|---|
//! | [`Exponential`] | rate λ, shift γ | [γ, ∞) |
//!
//! # Example
//!
//! ```
//! use paramdist::stats::{Exponential, ContinuousDistribution};
//!
//! let e = Exponential::new(2.0_f64, 1.0).unwrap();
//! assert_eq!(e.pdf(1.0), 2.0);
//! assert_eq!(e.pdf(0.5), 0.0);
//! assert!((e.mean() - 1.5).abs() < 1e-15);
//! ```

mod exponential;
mod interval;


pub use exponential::Exponential;
pub use interval::Interval;

#[cfg(feature = "alloc")]
use alloc::{boxed::Box, vec::Vec};
use num_complex::Complex;
use rand::distr::{Distribution, Open01};
use rand::RngCore;

use crate::traits::FloatScalar;

/// Errors from distribution construction and evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatsError {
    /// A parameter is out of its valid range.
    InvalidParameter,
    /// A probability argument lies outside [0, 1].
    InvalidProbability,
}

impl core::fmt::Display for StatsError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            StatsError::InvalidParameter => {
                write!(f, "distribution parameter out of valid range")
            }
            StatsError::InvalidProbability => {
                write!(f, "probability outside [0, 1]")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for StatsError {}

/// Trait for univariate continuous probability distributions.
///
/// Required methods are the ones a distribution must supply; provided methods
/// are generic fallbacks that a distribution may override with a closed form.
/// The trait is dyn compatible so callers can hold `Box<dyn ContinuousDistribution<T>>`.
pub trait ContinuousDistribution<T: FloatScalar> {
    /// Dimension of the distribution.
    fn dimension(&self) -> usize {
        1
    }

    /// Numerical support range.
    fn range(&self) -> Interval<T>;

    /// Probability density function.
    fn pdf(&self, x: T) -> T;

    /// Natural log of the probability density function.
    fn ln_pdf(&self, x: T) -> T {
        self.pdf(x).ln()
    }

    /// Derivative of the density with respect to the evaluation point.
    fn ddf(&self, x: T) -> T;

    /// Cumulative distribution function P(X ≤ x).
    fn cdf(&self, x: T) -> T;

    /// Survival function P(X > x).
    fn complementary_cdf(&self, x: T) -> T {
        T::one() - self.cdf(x)
    }

    /// Probability P(a < X ≤ b). Zero when `b <= a`.
    fn probability(&self, a: T, b: T) -> T {
        if b <= a {
            return T::zero();
        }
        self.cdf(b) - self.cdf(a)
    }

    /// Characteristic function φ(u) = E\[exp(i·u·X)\].
    fn characteristic_function(&self, u: T) -> Complex<T>;

    /// Principal-branch logarithm of the characteristic function.
    fn ln_characteristic_function(&self, u: T) -> Complex<T> {
        self.characteristic_function(u).ln()
    }

    /// Unchecked quantile for `p` strictly inside (0, 1).
    ///
    /// With `tail == false` returns x such that P(X ≤ x) = p; with `tail == true`
    /// `p` is a survival probability and the result satisfies P(X > x) = p.
    fn scalar_quantile(&self, p: T, tail: bool) -> T;

    /// Quantile function (inverse CDF). Returns x such that P(X ≤ x) = p.
    ///
    /// `p = 0` and `p = 1` map to the range endpoints.
    fn quantile(&self, p: T) -> Result<T, StatsError> {
        checked_quantile(self, p, false)
    }

    /// Inverse survival function. Returns x such that P(X > x) = p.
    fn inverse_survival(&self, p: T) -> Result<T, StatsError> {
        checked_quantile(self, p, true)
    }

    /// Draw one realization by inverting a uniform draw through the quantile.
    fn realization(&self, rng: &mut dyn RngCore) -> T {
        self.scalar_quantile(uniform_open01(rng), false)
    }

    /// Expected value E\[X\].
    fn mean(&self) -> T;

    /// Variance Var(X), the single entry of the 1×1 covariance.
    fn variance(&self) -> T;

    /// Standard deviation.
    fn std_dev(&self) -> T {
        self.variance().sqrt()
    }

    /// Skewness E\[((X − μ)/σ)³\].
    fn skewness(&self) -> T;

    /// Kurtosis E\[((X − μ)/σ)⁴\] (not the excess kurtosis).
    fn kurtosis(&self) -> T;

    /// Raw moment of order `n` of the standard representative.
    fn standard_moment(&self, n: u32) -> T;

    /// The canonical member of this parametric family.
    #[cfg(feature = "alloc")]
    fn standard_representative(&self) -> Box<dyn ContinuousDistribution<T>>;

    /// Owned, independent copy behind the trait.
    #[cfg(feature = "alloc")]
    fn clone_box(&self) -> Box<dyn ContinuousDistribution<T>>;

    /// [`pdf`](Self::pdf) at every point of `xs`.
    #[cfg(feature = "alloc")]
    fn pdf_batch(&self, xs: &[T]) -> Vec<T> {
        xs.iter().map(|&x| self.pdf(x)).collect()
    }

    /// [`ln_pdf`](Self::ln_pdf) at every point of `xs`.
    #[cfg(feature = "alloc")]
    fn ln_pdf_batch(&self, xs: &[T]) -> Vec<T> {
        xs.iter().map(|&x| self.ln_pdf(x)).collect()
    }

    /// [`cdf`](Self::cdf) at every point of `xs`.
    #[cfg(feature = "alloc")]
    fn cdf_batch(&self, xs: &[T]) -> Vec<T> {
        xs.iter().map(|&x| self.cdf(x)).collect()
    }

    /// [`complementary_cdf`](Self::complementary_cdf) at every point of `xs`.
    #[cfg(feature = "alloc")]
    fn complementary_cdf_batch(&self, xs: &[T]) -> Vec<T> {
        xs.iter().map(|&x| self.complementary_cdf(x)).collect()
    }

    /// Draw `n` independent realizations.
    #[cfg(feature = "alloc")]
    fn sample(&self, rng: &mut dyn RngCore, n: usize) -> Vec<T> {
        let mut out = Vec::with_capacity(n);
        for _ in 0..n {
            out.push(self.realization(rng));
        }
        out
    }
}

#[cfg(feature = "alloc")]
impl<T: FloatScalar> Clone for Box<dyn ContinuousDistribution<T>> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

/// A distribution described by an ordered vector of `N` parameters.
///
/// Gradients are returned in parameter-vector order.
pub trait ParametricDistribution<T: FloatScalar, const N: usize>: ContinuousDistribution<T> {
    /// Current parameter vector.
    fn parameter(&self) -> [T; N];

    /// Replace all parameters at once. On error the distribution is unchanged.
    fn set_parameter(&mut self, parameter: [T; N]) -> Result<(), StatsError>;

    /// Human-readable parameter names, in parameter-vector order.
    fn parameter_description(&self) -> [&'static str; N];

    /// Gradient of the density with respect to the parameters.
    fn pdf_gradient(&self, x: T) -> [T; N];

    /// Gradient of the CDF with respect to the parameters.
    fn cdf_gradient(&self, x: T) -> [T; N];
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

/// Validate `p` and resolve the endpoints before deferring to `scalar_quantile`.
fn checked_quantile<T, D>(dist: &D, p: T, tail: bool) -> Result<T, StatsError>
where
    T: FloatScalar,
    D: ContinuousDistribution<T> + ?Sized,
{
    if !(p >= T::zero() && p <= T::one()) {
        tracing::debug!(p = ?p, tail, "rejected quantile probability");
        return Err(StatsError::InvalidProbability);
    }
    let range = dist.range();
    let (at_zero, at_one) = if tail {
        (range.upper(), range.lower())
    } else {
        (range.lower(), range.upper())
    };
    if p == T::zero() {
        return Ok(at_zero);
    }
    if p == T::one() {
        return Ok(at_one);
    }
    Ok(dist.scalar_quantile(p, tail))
}

/// One uniform draw on the open interval (0, 1), sampled at the precision of `T`.
pub(crate) fn uniform_open01<T: FloatScalar>(rng: &mut dyn RngCore) -> T {
    // Narrow types draw at their own precision so the sample is never rounded onto 0 or 1.
    if T::epsilon() >= T::from(f32::EPSILON).unwrap() {
        let u: f32 = Open01.sample(rng);
        T::from(u).unwrap()
    } else {
        let u: f64 = Open01.sample(rng);
        T::from(u).unwrap()
    }
}
