mod interop;
pub mod matrix;
pub mod ops;
pub mod scalar;
pub mod vector;

pub use matrix::{Mat3, Mat3x4};
pub use scalar::{Real, Scalar};
pub use vector::{Vec2, Vec3, Vec4, Vector};

/// 2D vector of `f32`.
pub type Vec2f = Vec2<f32>;
/// 2D vector of `f64`.
pub type Vec2d = Vec2<f64>;
/// 2D vector of `i32`.
pub type Vec2i = Vec2<i32>;
/// 2D vector of `u32`.
pub type Vec2u = Vec2<u32>;

/// 3D vector of `f32`.
pub type Vec3f = Vec3<f32>;
/// 3D vector of `f64`.
pub type Vec3d = Vec3<f64>;
/// 3D vector of `i32`.
pub type Vec3i = Vec3<i32>;
/// 3D vector of `u32`.
pub type Vec3u = Vec3<u32>;

/// 4D vector of `f32`.
pub type Vec4f = Vec4<f32>;
/// 4D vector of `f64`.
pub type Vec4d = Vec4<f64>;
/// 4D vector of `i32`.
pub type Vec4i = Vec4<i32>;
/// 4D vector of `u32`.
pub type Vec4u = Vec4<u32>;

/// 3x3 matrix of `f32`.
pub type Mat3f = Mat3<f32>;
/// 3x3 matrix of `f64`.
pub type Mat3d = Mat3<f64>;

/// 3x4 affine matrix of `f32`.
pub type Mat3x4f = Mat3x4<f32>;
/// 3x4 affine matrix of `f64`.
pub type Mat3x4d = Mat3x4<f64>;
