use num_traits::One;

use crate::math::{Mat3x4, Real, Scalar, Vec2, Vec3, Vector};

/// An axis-aligned bounding box given by its `min` and `max` corners.
///
/// The empty box is encoded as an inverted range, `min = +MAX` and
/// `max = lowest`, so that the first [`Engulf::engulf`] collapses it onto the
/// engulfed point. [`BBox::is_empty`] only inspects the x axis; every mutator
/// here moves all axes together, so a box built through this API is either
/// inverted on every axis or on none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(C)]
pub struct BBox<V> {
    /// Minimum corner of the bounding box.
    pub min: V,
    /// Maximum corner of the bounding box.
    pub max: V,
}

/// 2D axis-aligned bounding box.
pub type BBox2<T> = BBox<Vec2<T>>;

/// 3D axis-aligned bounding box.
pub type BBox3<T> = BBox<Vec3<T>>;

/// Grows a box so that it also covers `Rhs`.
pub trait Engulf<Rhs> {
    /// Grows `self` in place.
    fn engulf(&mut self, rhs: Rhs);

    /// Returns a grown copy of `self`.
    #[must_use]
    fn engulfed(mut self, rhs: Rhs) -> Self
    where
        Self: Sized,
    {
        self.engulf(rhs);
        self
    }
}

impl<V: Vector> BBox<V> {
    #[must_use]
    pub fn new(min: V, max: V) -> Self {
        Self { min, max }
    }

    /// The empty box (inverted extreme range).
    #[must_use]
    pub fn empty() -> Self {
        Self {
            min: V::splat(V::Scalar::highest()),
            max: V::splat(V::Scalar::lowest()),
        }
    }

    /// A zero-volume box at `p`.
    #[must_use]
    pub fn from_point(p: V) -> Self {
        Self { min: p, max: p }
    }

    /// The smallest box containing every point; empty for no points.
    #[must_use]
    pub fn from_points<I>(points: I) -> Self
    where
        I: IntoIterator<Item = V>,
    {
        points
            .into_iter()
            .fold(Self::empty(), |bbox, p| bbox.engulfed(p))
    }

    /// `true` when `max.x < min.x`. The other axes are not inspected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.max.as_slice()[0] < self.min.as_slice()[0]
    }

    #[must_use]
    pub fn is_not_empty(&self) -> bool {
        self.min.as_slice()[0] <= self.max.as_slice()[0]
    }

    /// Moves every face outward by `margin`. An empty box stays empty.
    pub fn grow(&mut self, margin: V::Scalar) {
        if self.is_empty() {
            return;
        }
        let delta = V::splat(margin);
        self.min = self.min - delta;
        self.max = self.max + delta;
    }

    #[must_use]
    pub fn grown(mut self, margin: V::Scalar) -> Self {
        self.grow(margin);
        self
    }

    /// Per-axis side lengths, `max - min`; zero for the empty box.
    ///
    /// The sentinel corners are never subtracted, so integer boxes cannot
    /// overflow here.
    #[must_use]
    pub fn extents(&self) -> V {
        if self.is_empty() {
            return V::zero();
        }
        self.max - self.min
    }

    /// Longest side; zero for the empty box.
    #[must_use]
    pub fn max_side_length(&self) -> V::Scalar {
        self.extents().max_element()
    }

    /// `true` when `inner` lies within `self` on every axis. Shared faces
    /// count as inside, so every box contains itself.
    #[must_use]
    pub fn contains(&self, inner: &Self) -> bool {
        self.min.all_le(&inner.min) && inner.max.all_le(&self.max)
    }

    /// `true` when a separating axis exists. Touching faces are not separated.
    #[must_use]
    pub fn is_not_overlapping(&self, other: &Self) -> bool {
        other.max.any_lt(&self.min) || self.max.any_lt(&other.min)
    }

    #[must_use]
    pub fn is_overlapping(&self, other: &Self) -> bool {
        !self.is_not_overlapping(other)
    }
}

impl<V> BBox<V>
where
    V: Vector,
    V::Scalar: Real,
{
    /// Length of the `min`-`max` diagonal.
    #[must_use]
    pub fn diagonal(&self) -> V::Scalar {
        self.min.distance(&self.max)
    }

    #[must_use]
    pub fn center(&self) -> V {
        let one = <V::Scalar as One>::one();
        (self.min + self.max).scale(one / (one + one))
    }
}

impl<V: Vector> Default for BBox<V> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<V: Vector> Engulf<V> for BBox<V> {
    fn engulf(&mut self, p: V) {
        self.min = self.min.component_min(&p);
        self.max = self.max.component_max(&p);
    }
}

impl<V: Vector> Engulf<BBox<V>> for BBox<V> {
    fn engulf(&mut self, other: BBox<V>) {
        self.min = self.min.component_min(&other.min);
        self.max = self.max.component_max(&other.max);
    }
}

impl<T: Scalar> BBox3<T> {
    /// The eight corners, z varying fastest, then y, then x.
    #[must_use]
    pub fn corners(&self) -> [Vec3<T>; 8] {
        let [x0, y0, z0] = self.min.to_array();
        let [x1, y1, z1] = self.max.to_array();
        [
            Vec3::new(x0, y0, z0),
            Vec3::new(x0, y0, z1),
            Vec3::new(x0, y1, z0),
            Vec3::new(x0, y1, z1),
            Vec3::new(x1, y0, z0),
            Vec3::new(x1, y0, z1),
            Vec3::new(x1, y1, z0),
            Vec3::new(x1, y1, z1),
        ]
    }

    /// Bounds of this box after the affine map `m`.
    ///
    /// Every corner is mapped as a point and the result is their
    /// component-wise min/max. The empty box has no meaningful image.
    #[must_use]
    pub fn transformed(&self, m: &Mat3x4<T>) -> Self {
        let p = self.corners().map(|c| m.transform_point(&c));
        let lo = |a: Vec3<T>, b: Vec3<T>| a.component_min(&b);
        let hi = |a: Vec3<T>, b: Vec3<T>| a.component_max(&b);
        Self::new(
            lo(lo(lo(p[0], p[1]), lo(p[2], p[3])), lo(lo(p[4], p[5]), lo(p[6], p[7]))),
            hi(hi(hi(p[0], p[1]), hi(p[2], p[3])), hi(hi(p[4], p[5]), hi(p[6], p[7]))),
        )
    }

    /// `min.xyz` followed by `max.xyz`.
    #[must_use]
    pub fn to_array(&self) -> [T; 6] {
        let [a, b, c] = self.min.to_array();
        let [d, e, f] = self.max.to_array();
        [a, b, c, d, e, f]
    }

    #[must_use]
    pub fn from_array(data: [T; 6]) -> Self {
        let [a, b, c, d, e, f] = data;
        Self::new(Vec3::new(a, b, c), Vec3::new(d, e, f))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::math::Mat3;
    use approx::assert_relative_eq;

    fn unit_cube() -> BBox3<f32> {
        BBox3::new(Vec3::splat(0.0), Vec3::splat(1.0))
    }

    #[test]
    fn empty_uses_extreme_sentinels() {
        let b = BBox3::<f32>::empty();
        assert_eq!(b.min, Vec3::splat(f32::MAX));
        assert_eq!(b.max, Vec3::splat(-f32::MAX));
        assert!(b.is_empty());
        assert!(!b.is_not_empty());
        assert_eq!(BBox2::<i32>::default(), BBox2::empty());
    }

    #[test]
    fn engulfing_one_point_collapses_onto_it() {
        let p = Vec3::new(5.0_f32, 3.0, -2.0);
        let mut b = BBox3::empty();
        b.engulf(p);
        assert!(!b.is_empty());
        assert_eq!(b.min, p);
        assert_eq!(b.max, p);
        assert_eq!(BBox3::empty().engulfed(p), b);
    }

    #[test]
    fn chained_engulfs_give_the_union() {
        let b = BBox3::from_points([
            Vec3::new(1.0_f64, -1.0, 0.0),
            Vec3::new(-2.0, 4.0, 0.5),
            Vec3::new(0.0, 0.0, 3.0),
        ]);
        assert_eq!(b.min, Vec3::new(-2.0, -1.0, 0.0));
        assert_eq!(b.max, Vec3::new(1.0, 4.0, 3.0));
        assert!(BBox3::<f64>::from_points([]).is_empty());
    }

    #[test]
    fn engulfing_a_box() {
        let a = BBox2::new(Vec2::new(0, 0), Vec2::new(2, 2));
        let b = BBox2::new(Vec2::new(1, -3), Vec2::new(5, 1));
        let u = a.engulfed(b);
        assert_eq!(u, BBox2::new(Vec2::new(0, -3), Vec2::new(5, 2)));
        let mut e = BBox2::empty();
        e.engulf(a);
        assert_eq!(e, a);
    }

    #[test]
    fn grow_moves_every_face() {
        let b = unit_cube().grown(0.5);
        assert_eq!(b.min, Vec3::splat(-0.5));
        assert_eq!(b.max, Vec3::splat(1.5));
    }

    #[test]
    fn diagonal_and_sides() {
        let b = BBox3::new(Vec3::new(0.0_f64, 0.0, 0.0), Vec3::new(1.0, 2.0, 2.0));
        assert_relative_eq!(b.diagonal(), 3.0);
        assert_eq!(b.max_side_length(), 2.0);
        assert_eq!(b.extents(), Vec3::new(1.0, 2.0, 2.0));
        assert_eq!(b.center(), Vec3::new(0.5, 1.0, 1.0));
        assert_relative_eq!(unit_cube().diagonal(), 3.0_f32.sqrt());
    }

    #[test]
    fn containment_is_non_strict() {
        let outer = unit_cube();
        assert!(outer.contains(&outer));
        let inner = BBox3::new(Vec3::new(0.0, 0.25, 0.5), Vec3::new(1.0, 0.75, 1.0));
        assert!(outer.contains(&inner));
        assert!(!inner.contains(&outer));
        let poking = inner.grown(0.1);
        assert!(!outer.contains(&poking));
    }

    #[test]
    fn touching_faces_overlap() {
        let a = unit_cube();
        let b = BBox3::new(Vec3::new(1.0, 0.0, 0.0), Vec3::new(2.0, 1.0, 1.0));
        assert!(a.is_overlapping(&b));
        assert!(b.is_overlapping(&a));
        assert!(!a.is_not_overlapping(&b));
    }

    #[test]
    fn separated_on_one_axis_does_not_overlap() {
        let a = unit_cube();
        let b = BBox3::new(Vec3::new(0.0, 0.0, 1.5), Vec3::new(1.0, 1.0, 2.0));
        assert!(a.is_not_overlapping(&b));
        assert!(b.is_not_overlapping(&a));
        assert!(!a.is_overlapping(&b));
    }

    #[test]
    fn empty_integer_box_has_no_sides() {
        let b = BBox3::<i32>::empty();
        assert_eq!(b.extents(), Vec3::splat(0));
        assert_eq!(b.max_side_length(), 0);
        assert_eq!(BBox2::<u32>::empty().max_side_length(), 0);
        assert_eq!(BBox3::<f32>::empty().max_side_length(), 0.0);
    }

    #[test]
    fn growing_the_empty_box_keeps_it_empty() {
        assert_eq!(BBox3::<i32>::empty().grown(-1), BBox3::empty());
        assert_eq!(BBox3::<i32>::empty().grown(3), BBox3::empty());
        assert_eq!(BBox2::<u32>::empty().grown(2), BBox2::empty());
        let f = BBox3::<f64>::empty().grown(f64::MAX);
        assert!(f.is_empty());
    }

    #[test]
    fn emptiness_only_looks_at_x() {
        // inverted on y and z only
        let b = BBox3::new(Vec3::new(0.0_f32, 5.0, 5.0), Vec3::new(1.0, 0.0, 0.0));
        assert!(!b.is_empty());
        assert!(b.is_not_empty());
    }

    #[test]
    fn identity_transform_keeps_the_box() {
        let b = unit_cube();
        assert_eq!(b.transformed(&Mat3x4::identity()), b);
    }

    #[test]
    fn rotated_and_translated_box() {
        let rot_z = Mat3::new(0.0_f32, -1.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0);
        let m = Mat3x4::from_linear_translation(&rot_z, Vec3::new(10.0, 0.0, 0.0));
        let b = BBox3::new(Vec3::new(0.0, 0.0, 0.0), Vec3::new(1.0, 2.0, 3.0));
        let t = b.transformed(&m);
        assert_eq!(t.min, Vec3::new(8.0, 0.0, 0.0));
        assert_eq!(t.max, Vec3::new(10.0, 1.0, 3.0));
    }

    #[test]
    fn corners_enumerate_every_combination() {
        let c = BBox3::new(Vec3::new(0, 0, 0), Vec3::new(1, 1, 1)).corners();
        assert_eq!(c[0], Vec3::new(0, 0, 0));
        assert_eq!(c[1], Vec3::new(0, 0, 1));
        assert_eq!(c[6], Vec3::new(1, 1, 0));
        assert_eq!(c[7], Vec3::new(1, 1, 1));
    }

    #[test]
    fn flat_array_layout() {
        let b = BBox3::new(Vec3::new(1, 2, 3), Vec3::new(4, 5, 6));
        assert_eq!(b.to_array(), [1, 2, 3, 4, 5, 6]);
        assert_eq!(BBox3::from_array(b.to_array()), b);
    }
}
