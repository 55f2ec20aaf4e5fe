//! 2D point arithmetic used for aiming.
//!
//! Addition, subtraction and scaling are `Vec2`'s own operators. The two
//! operations that can divide by zero are wrapped here and return `None`
//! instead of producing infinities or NaN.

use bevy::prelude::*;

/// `sqrt(x² + y²)`.
#[inline]
pub fn magnitude(v: Vec2) -> f32 {
    (v.x * v.x + v.y * v.y).sqrt()
}

/// `v / scalar`, rejecting an exactly-zero scalar.
#[inline]
pub fn divide(v: Vec2, scalar: f32) -> Option<Vec2> {
    (scalar != 0.0).then(|| v / scalar)
}

/// Unit vector in the direction of `v`. `None` for the zero vector and for
/// non-finite input.
#[inline]
pub fn normalize(v: Vec2) -> Option<Vec2> {
    let len = magnitude(v);
    if !len.is_finite() {
        return None;
    }
    divide(v, len)
}
