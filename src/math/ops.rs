use core::ops::Mul;

use super::matrix::{Mat3, Mat3x4};
use super::scalar::{Real, Scalar};
use super::vector::{Vec3, Vector};
use crate::geometry::{BBox, BBox3, Engulf};

#[must_use]
pub fn dot<V: Vector>(a: &V, b: &V) -> V::Scalar {
    a.dot(b)
}

#[must_use]
pub fn cross<T: Scalar>(a: &Vec3<T>, b: &Vec3<T>) -> Vec3<T> {
    a.cross(b)
}

#[must_use]
pub fn length_squared<V: Vector>(a: &V) -> V::Scalar {
    a.length_squared()
}

#[must_use]
pub fn distance_squared<V: Vector>(a: &V, b: &V) -> V::Scalar {
    a.distance_squared(b)
}

#[must_use]
pub fn length<V>(a: &V) -> V::Scalar
where
    V: Vector,
    V::Scalar: Real,
{
    a.length()
}

#[must_use]
pub fn distance<V>(a: &V, b: &V) -> V::Scalar
where
    V: Vector,
    V::Scalar: Real,
{
    a.distance(b)
}

/// See [`Vector::normalize`]; zero-length input yields NaN.
#[must_use]
pub fn normalize<V>(a: &V) -> V
where
    V: Vector,
    V::Scalar: Real,
{
    a.normalize()
}

/// Component-wise minimum.
#[must_use]
pub fn min<V: Vector>(a: &V, b: &V) -> V {
    a.component_min(b)
}

/// Component-wise maximum.
#[must_use]
pub fn max<V: Vector>(a: &V, b: &V) -> V {
    a.component_max(b)
}

/// Writes `v` at the front of `dst` and returns the advanced cursor.
///
/// # Panics
///
/// Panics if `dst` is shorter than `v`.
pub fn write<'a, V: Vector>(dst: &'a mut [V::Scalar], v: &V) -> &'a mut [V::Scalar] {
    v.write_to(dst)
}

/// `a * b` for any supported pair: `Mat3 * Vec3`, `Mat3x4 * Vec3`,
/// `Mat3 * Mat3`, `scalar * vector`.
#[must_use]
pub fn mul<A, B>(a: A, b: B) -> A::Output
where
    A: Mul<B>,
{
    a * b
}

/// See [`Mat3::inverse`]; singular input yields Inf/NaN.
#[must_use]
pub fn inverse<T: Real>(m: &Mat3<T>) -> Mat3<T> {
    m.inverse()
}

/// Largest column length of the linear part of a `Mat3` or `Mat3x4`.
#[must_use]
pub fn get_scale<T, M>(m: M) -> T
where
    T: Real,
    M: Into<Mat3<T>>,
{
    m.into().get_scale()
}

/// Grows `target` in place to cover a point or another box.
pub fn engulf<B, R>(target: &mut B, rhs: R)
where
    B: Engulf<R>,
{
    target.engulf(rhs);
}

/// Copy of `bbox` with every face moved outward by `margin`.
#[must_use]
pub fn grow<V: Vector>(bbox: &BBox<V>, margin: V::Scalar) -> BBox<V> {
    bbox.grown(margin)
}

#[must_use]
pub fn diagonal<V>(bbox: &BBox<V>) -> V::Scalar
where
    V: Vector,
    V::Scalar: Real,
{
    bbox.diagonal()
}

#[must_use]
pub fn is_empty<V: Vector>(bbox: &BBox<V>) -> bool {
    bbox.is_empty()
}

#[must_use]
pub fn is_not_empty<V: Vector>(bbox: &BBox<V>) -> bool {
    bbox.is_not_empty()
}

#[must_use]
pub fn max_side_length<V: Vector>(bbox: &BBox<V>) -> V::Scalar {
    bbox.max_side_length()
}

/// `true` when `b` lies within `a` on every axis (faces may touch).
#[must_use]
pub fn is_strictly_inside<V: Vector>(a: &BBox<V>, b: &BBox<V>) -> bool {
    a.contains(b)
}

#[must_use]
pub fn is_overlapping<V: Vector>(a: &BBox<V>, b: &BBox<V>) -> bool {
    a.is_overlapping(b)
}

#[must_use]
pub fn is_not_overlapping<V: Vector>(a: &BBox<V>, b: &BBox<V>) -> bool {
    a.is_not_overlapping(b)
}

/// Bounds of `bbox` after the affine map `m`.
#[must_use]
pub fn transform<T: Scalar>(m: &Mat3x4<T>, bbox: &BBox3<T>) -> BBox3<T> {
    bbox.transformed(m)
}
