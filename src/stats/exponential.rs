use core::fmt;

#[cfg(feature = "alloc")]
use alloc::boxed::Box;
use num_complex::Complex;
use rand::RngCore;

use crate::special::factorial;
use crate::FloatScalar;
use super::{uniform_open01, ContinuousDistribution, Interval, ParametricDistribution, StatsError};

/// Shifted exponential distribution with rate λ and shift γ.
///
/// f(x) = λ exp(−λ(x − γ)) for x ≥ γ, and 0 below the shift.
///
/// The parameter vector is `[lambda, gamma]`. Range, mean and covariance are
/// derived state, recomputed eagerly by every constructor and successful setter.
///
/// # Example
///
/// ```
/// use paramdist::stats::{Exponential, ContinuousDistribution};
///
/// let e = Exponential::new(2.0_f64, 1.0).unwrap();
/// assert!((e.cdf(1.5) - (1.0 - (-1.0_f64).exp())).abs() < 1e-14);
/// assert!((e.quantile(0.5).unwrap() - (1.0 + 2.0_f64.ln() / 2.0)).abs() < 1e-14);
/// assert!((e.std_dev() - 0.5).abs() < 1e-15);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Exponential<T> {
    lambda: T,
    gamma: T,
    range: Interval<T>,
    mean: T,
    covariance: T,
}

impl<T: FloatScalar> Exponential<T> {
    /// Create an exponential distribution with rate `lambda` and shift `gamma`.
    ///
    /// Requires `lambda > 0`; `gamma` is unconstrained.
    pub fn new(lambda: T, gamma: T) -> Result<Self, StatsError> {
        let lambda = check_rate(lambda)?;
        Ok(Self::from_valid(lambda, gamma))
    }

    /// Unshifted exponential distribution (`gamma = 0`).
    pub fn with_rate(lambda: T) -> Result<Self, StatsError> {
        Self::new(lambda, T::zero())
    }

    /// The standard representative, `lambda = 1`, `gamma = 0`.
    pub fn standard() -> Self {
        Self::from_valid(T::one(), T::zero())
    }

    fn from_valid(lambda: T, gamma: T) -> Self {
        let mut dist = Self {
            lambda,
            gamma,
            range: Interval::right_unbounded(gamma),
            mean: T::zero(),
            covariance: T::zero(),
        };
        dist.update_derived();
        dist
    }

    /// Rate parameter λ.
    pub fn lambda(&self) -> T {
        self.lambda
    }

    /// Shift parameter γ, the lower bound of the support.
    pub fn gamma(&self) -> T {
        self.gamma
    }

    /// Set the rate. Fails without modifying `self` unless `lambda > 0`.
    pub fn set_lambda(&mut self, lambda: T) -> Result<(), StatsError> {
        self.lambda = check_rate(lambda)?;
        self.update_derived();
        Ok(())
    }

    /// Set the shift. Any value is accepted.
    pub fn set_gamma(&mut self, gamma: T) {
        self.gamma = gamma;
        self.update_derived();
    }

    /// The single entry of the 1×1 covariance matrix, 1/λ².
    pub fn covariance(&self) -> T {
        self.covariance
    }

    /// Differential entropy 1 − ln λ.
    pub fn entropy(&self) -> T {
        T::one() - self.lambda.ln()
    }

    /// Median γ + ln 2 / λ.
    pub fn median(&self) -> T {
        self.gamma + T::LN_2() / self.lambda
    }

    /// Mode, which sits on the shift.
    pub fn mode(&self) -> T {
        self.gamma
    }

    fn update_derived(&mut self) {
        self.range = Interval::right_unbounded(self.gamma);
        self.mean = self.gamma + self.lambda.recip();
        self.covariance = (self.lambda * self.lambda).recip();
        tracing::trace!(
            lambda = ?self.lambda,
            gamma = ?self.gamma,
            "recomputed exponential range and moments"
        );
    }
}

fn check_rate<T: FloatScalar>(lambda: T) -> Result<T, StatsError> {
    // NaN fails this comparison too.
    if !(lambda > T::zero()) {
        tracing::debug!(lambda = ?lambda, "rejected exponential rate");
        return Err(StatsError::InvalidParameter);
    }
    Ok(lambda)
}

impl<T: FloatScalar> Default for Exponential<T> {
    fn default() -> Self {
        Self::standard()
    }
}

impl<T: FloatScalar> PartialEq for Exponential<T> {
    fn eq(&self, other: &Self) -> bool {
        self.lambda == other.lambda && self.gamma == other.gamma
    }
}

impl<T: FloatScalar + fmt::Display> fmt::Display for Exponential<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "class=Exponential name=Exponential dimension=1 lambda={} gamma={}",
            self.lambda, self.gamma
        )
    }
}

impl<T: FloatScalar> ContinuousDistribution<T> for Exponential<T> {
    fn range(&self) -> Interval<T> {
        self.range
    }

    fn pdf(&self, x: T) -> T {
        let y = x - self.gamma;
        if y < T::zero() {
            T::zero()
        } else {
            self.lambda * (-self.lambda * y).exp()
        }
    }

    fn ln_pdf(&self, x: T) -> T {
        let y = x - self.gamma;
        if y < T::zero() {
            T::neg_infinity()
        } else {
            self.lambda.ln() - self.lambda * y
        }
    }

    fn ddf(&self, x: T) -> T {
        let y = x - self.gamma;
        if y < T::zero() {
            T::zero()
        } else {
            -self.lambda * self.lambda * (-self.lambda * y).exp()
        }
    }

    fn cdf(&self, x: T) -> T {
        let y = x - self.gamma;
        if y <= T::zero() {
            T::zero()
        } else {
            -(-self.lambda * y).exp_m1()
        }
    }

    fn complementary_cdf(&self, x: T) -> T {
        let y = x - self.gamma;
        if y <= T::zero() {
            T::one()
        } else {
            (-self.lambda * y).exp()
        }
    }

    fn probability(&self, a: T, b: T) -> T {
        let a = a.max(self.gamma);
        if b <= a {
            return T::zero();
        }
        // Subtract in whichever tail keeps the two terms small.
        if a < self.median() {
            self.cdf(b) - self.cdf(a)
        } else {
            self.complementary_cdf(a) - self.complementary_cdf(b)
        }
    }

    fn characteristic_function(&self, u: T) -> Complex<T> {
        Complex::from_polar(self.lambda, u * self.gamma) / Complex::new(self.lambda, -u)
    }

    fn ln_characteristic_function(&self, u: T) -> Complex<T> {
        Complex::new(self.lambda.ln(), u * self.gamma) - Complex::new(self.lambda, -u).ln()
    }

    fn scalar_quantile(&self, p: T, tail: bool) -> T {
        if tail {
            self.gamma - p.ln() / self.lambda
        } else {
            self.gamma - (-p).ln_1p() / self.lambda
        }
    }

    fn realization(&self, rng: &mut dyn RngCore) -> T {
        let u: T = uniform_open01(rng);
        self.gamma - u.ln() / self.lambda
    }

    fn mean(&self) -> T {
        self.mean
    }

    fn variance(&self) -> T {
        self.covariance
    }

    fn std_dev(&self) -> T {
        self.lambda.recip()
    }

    fn skewness(&self) -> T {
        T::from(2.0).unwrap()
    }

    fn kurtosis(&self) -> T {
        T::from(9.0).unwrap()
    }

    /// E\[Xⁿ\] = n! for the standard exponential.
    fn standard_moment(&self, n: u32) -> T {
        factorial(n)
    }

    #[cfg(feature = "alloc")]
    fn standard_representative(&self) -> Box<dyn ContinuousDistribution<T>> {
        Box::new(Self::standard())
    }

    #[cfg(feature = "alloc")]
    fn clone_box(&self) -> Box<dyn ContinuousDistribution<T>> {
        Box::new(*self)
    }
}

impl<T: FloatScalar> ParametricDistribution<T, 2> for Exponential<T> {
    fn parameter(&self) -> [T; 2] {
        [self.lambda, self.gamma]
    }

    fn set_parameter(&mut self, parameter: [T; 2]) -> Result<(), StatsError> {
        let [lambda, gamma] = parameter;
        self.lambda = check_rate(lambda)?;
        self.gamma = gamma;
        self.update_derived();
        Ok(())
    }

    fn parameter_description(&self) -> [&'static str; 2] {
        ["lambda", "gamma"]
    }

    /// `[∂f/∂λ, ∂f/∂γ]`.
    fn pdf_gradient(&self, x: T) -> [T; 2] {
        let y = x - self.gamma;
        if y < T::zero() {
            return [T::zero(); 2];
        }
        let e = (-self.lambda * y).exp();
        // Both terms vanish once exp(-λy) underflows; avoids 0·∞ at the upper end.
        if e == T::zero() {
            return [T::zero(); 2];
        }
        [
            e * (T::one() - self.lambda * y),
            self.lambda * self.lambda * e,
        ]
    }

    /// `[∂F/∂λ, ∂F/∂γ]`.
    fn cdf_gradient(&self, x: T) -> [T; 2] {
        let y = x - self.gamma;
        if y < T::zero() {
            return [T::zero(); 2];
        }
        let e = (-self.lambda * y).exp();
        if e == T::zero() {
            return [T::zero(); 2];
        }
        [y * e, -self.lambda * e]
    }
}

#[cfg(feature = "serde")]
mod persistence {
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::Exponential;
    use crate::FloatScalar;

    /// Stored form: the two parameters under stable field names.
    #[derive(Serialize, Deserialize)]
    struct Record<T> {
        lambda_: T,
        gamma_: T,
    }

    impl<T: FloatScalar + Serialize> Serialize for Exponential<T> {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            Record {
                lambda_: self.lambda,
                gamma_: self.gamma,
            }
            .serialize(serializer)
        }
    }

    impl<'de, T: FloatScalar + Deserialize<'de>> Deserialize<'de> for Exponential<T> {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let record = Record::<T>::deserialize(deserializer)?;
            Exponential::new(record.lambda_, record.gamma_).map_err(D::Error::custom)
        }
    }
}
