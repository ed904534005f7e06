//! Interpolation contract shared by every animatable value type

use std::fmt::Debug;

/// Linear interpolation between two `f32` values.
///
/// Not clamped: curves that overshoot produce values outside `[a, b]`.
#[inline]
pub fn lerp_f32(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// A value that can blend between two instances of itself.
///
/// Implementations are pure functions of `a`, `b` and `t`. They must return
/// `a` at `t == 0.0` and `b` at `t == 1.0`; composite types that blend through
/// an intermediate representation return their endpoints unchanged at the
/// boundaries instead of round-tripping them.
pub trait Lerp: Clone + PartialEq + Debug {
    fn lerp(a: &Self, b: &Self, t: f32) -> Self;
}

impl Lerp for f32 {
    #[inline]
    fn lerp(a: &Self, b: &Self, t: f32) -> Self {
        lerp_f32(*a, *b, t)
    }
}

/// Null-propagating blend: a missing side holds the present one.
impl<T: Lerp> Lerp for Option<T> {
    fn lerp(a: &Self, b: &Self, t: f32) -> Self {
        match (a, b) {
            (Some(a), Some(b)) => Some(T::lerp(a, b, t)),
            (Some(a), None) => Some(a.clone()),
            (None, Some(b)) => Some(b.clone()),
            (None, None) => None,
        }
    }
}

/// Discrete values switch from `a` to `b` halfway through.
#[inline]
pub(crate) fn lerp_discrete<T: Clone>(a: &T, b: &T, t: f32) -> T {
    if t < 0.5 {
        a.clone()
    } else {
        b.clone()
    }
}
