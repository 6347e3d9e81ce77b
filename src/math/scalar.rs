use core::fmt::Debug;

use num_traits::{Bounded, Float, Num};

/// Numeric element type of the fixed-size primitives.
pub trait Scalar: Copy + Debug + PartialOrd + Num + Bounded + 'static {
    /// Largest representable value, used as the empty-box lower corner.
    #[must_use]
    fn highest() -> Self {
        <Self as Bounded>::max_value()
    }

    /// Lowest representable value (`-MAX` for floats), used as the empty-box
    /// upper corner.
    #[must_use]
    fn lowest() -> Self {
        <Self as Bounded>::min_value()
    }
}

impl<T> Scalar for T where T: Copy + Debug + PartialOrd + Num + Bounded + 'static {}

/// Floating-point element type.
pub trait Real: Scalar + Float {
    /// Threshold below which the checked operations treat a length or a
    /// determinant as zero.
    const TOLERANCE: Self;

    /// Widens to `f64` for error reporting.
    #[must_use]
    fn to_f64_lossy(self) -> f64 {
        self.to_f64().unwrap_or(f64::NAN)
    }
}

impl Real for f32 {
    const TOLERANCE: f32 = 1e-6;
}

impl Real for f64 {
    const TOLERANCE: f64 = 1e-10;
}
