use core::fmt::Debug;
use num_traits::{Float, FloatConst, Num, One, Zero};

/// Trait for types that can be used as distribution parameters and evaluation points.
///
/// Blanket-implemented for all types satisfying the bounds.
pub trait Scalar: Copy + PartialEq + Debug + Zero + One + Num {}

impl<T: Copy + PartialEq + Debug + Zero + One + Num> Scalar for T {}

/// Trait for real floating-point elements (`f32`, `f64`).
///
/// Required by every closed-form evaluation (`exp`, `ln`, `ln_1p`, ...) and by
/// the complex arithmetic of characteristic functions.
pub trait FloatScalar: Scalar + Float + FloatConst + 'static {}

impl<T: Scalar + Float + FloatConst + 'static> FloatScalar for T {}
