use crate::FloatScalar;

/// Numerical support range of a univariate distribution.
///
/// Both bounds are stored as values; `finite_lower` / `finite_upper` record
/// whether the corresponding bound is an actual limit of the support or an
/// infinite end. The lower bound is inclusive.
///
/// # Example
///
/// ```
/// use paramdist::stats::Interval;
///
/// let r = Interval::right_unbounded(2.0_f64);
/// assert!(r.contains(2.0));
/// assert!(!r.contains(1.5));
/// assert!(r.upper().is_infinite());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval<T> {
    lower: T,
    upper: T,
    finite_lower: bool,
    finite_upper: bool,
}

impl<T: FloatScalar> Interval<T> {
    /// Interval `[lower, upper]` with explicit finiteness flags.
    pub fn new(lower: T, upper: T, finite_lower: bool, finite_upper: bool) -> Self {
        Self {
            lower,
            upper,
            finite_lower,
            finite_upper,
        }
    }

    /// Interval `[lower, +∞)`: finite on the left, infinite on the right.
    pub fn right_unbounded(lower: T) -> Self {
        Self::new(lower, T::infinity(), true, false)
    }

    pub fn lower(&self) -> T {
        self.lower
    }

    pub fn upper(&self) -> T {
        self.upper
    }

    pub fn is_finite_lower(&self) -> bool {
        self.finite_lower
    }

    pub fn is_finite_upper(&self) -> bool {
        self.finite_upper
    }

    /// Whether `x` lies in the interval (lower bound inclusive).
    pub fn contains(&self, x: T) -> bool {
        let above = !self.finite_lower || x >= self.lower;
        let below = !self.finite_upper || x <= self.upper;
        above && below && !x.is_nan()
    }
}
