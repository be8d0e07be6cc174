/*
 * Vector Math Module
 *
 * Small helpers on glam::Vec2 shared by both simulation variants.
 * Normalizing a zero-length vector yields the zero vector, so callers never
 * have to branch on a failed normalize.
 */

use glam::Vec2;

// Clamp a vector to a maximum length, leaving shorter vectors untouched
pub fn limit(v: Vec2, max: f32) -> Vec2 {
    if v.length() > max {
        v.normalize() * max
    } else {
        v
    }
}

// Unit vector pointing from `from` to `to`, or the zero vector when the two
// points coincide
pub fn heading(from: Vec2, to: Vec2) -> Vec2 {
    (to - from).normalize_or_zero()
}
