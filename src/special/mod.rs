//! Special mathematical functions.
//!
//! Generic over [`FloatScalar`] (f32/f64), no-std compatible, and stack-only.
//!
//! | Function | Description |
//! |----------|-------------|
//! | [`factorial`] | n! = Γ(n + 1) for non-negative integers |
//!
//! # Example
//!
//! ```
//! use paramdist::special::factorial;
//!
//! assert_eq!(factorial::<f64>(5), 120.0);
//! assert_eq!(factorial::<f64>(0), 1.0);
//! ```

mod factorial_fn;

#[cfg(test)]
mod tests;

pub use factorial_fn::factorial;
