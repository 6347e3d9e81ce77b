pub mod error;
pub mod geometry;
pub mod math;

pub use error::{LinalgError, Result};

/// Common exports: the types, their traits and the free functions.
pub mod prelude {
    pub use crate::geometry::{BBox, BBox2, BBox2d, BBox2f, BBox3, BBox3d, BBox3f, Engulf};
    pub use crate::math::ops::*;
    pub use crate::math::{
        Mat3, Mat3d, Mat3f, Mat3x4, Mat3x4d, Mat3x4f, Real, Scalar, Vec2, Vec2d, Vec2f, Vec2i,
        Vec2u, Vec3, Vec3d, Vec3f, Vec3i, Vec3u, Vec4, Vec4d, Vec4f, Vec4i, Vec4u, Vector,
    };
}

#[cfg(test)]
mod proptests;
