use core::fmt::Debug;
use num_traits::{Float, Num, One, Zero};

/// Trait for numeric element types.
///
/// Blanket-implemented for all types satisfying the bounds.
/// Covers `f32`, `f64`, and all integer types.
pub trait Scalar: Copy + PartialEq + Debug + Zero + One + Num {}

impl<T: Copy + PartialEq + Debug + Zero + One + Num> Scalar for T {}

/// Trait for real floating-point element types (`f32`, `f64`).
///
/// Required by everything that evaluates `ln`, `exp`, `powi`, `floor`, etc.
/// All distributions and special functions are generic over it.
pub trait FloatScalar: Scalar + Float {}

impl<T: Scalar + Float> FloatScalar for T {}
