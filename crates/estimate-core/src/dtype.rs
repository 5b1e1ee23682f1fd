use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, Sub, SubAssign};

use serde::{Deserialize, Serialize};

/// Element type of a [`Matrix`](crate::Matrix): `f32` or `f64`.
///
/// Only the arithmetic that transpose, multiplication and Gauss-Jordan
/// elimination need is required here.
pub trait Float:
    Copy
    + PartialOrd
    + fmt::Debug
    + fmt::Display
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + AddAssign
    + SubAssign
    + DivAssign
    + Serialize
    + for<'de> Deserialize<'de>
    + 'static
{
    const ZERO: Self;
    const ONE: Self;
    /// Machine epsilon, used to scale the singular-pivot tolerance.
    const EPSILON: Self;

    fn to_f64(self) -> f64;
    fn from_usize(v: usize) -> Self;

    fn abs(self) -> Self;
    fn max(self, other: Self) -> Self;
    fn is_finite(self) -> bool;
}

macro_rules! impl_float {
    ($($t:ident),*) => {$(
        impl Float for $t {
            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;
            const EPSILON: Self = $t::EPSILON;

            #[inline] fn to_f64(self) -> f64 { f64::from(self) }
            #[inline] fn from_usize(v: usize) -> Self { v as $t }
            #[inline] fn abs(self) -> Self { $t::abs(self) }
            #[inline] fn max(self, other: Self) -> Self { $t::max(self, other) }
            #[inline] fn is_finite(self) -> bool { $t::is_finite(self) }
        }
    )*};
}

impl_float!(f32, f64);
