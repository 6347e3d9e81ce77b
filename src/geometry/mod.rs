pub mod bbox;

pub use bbox::{BBox, BBox2, BBox3, Engulf};

/// 2D bounding box of `f32`.
pub type BBox2f = BBox2<f32>;
/// 2D bounding box of `f64`.
pub type BBox2d = BBox2<f64>;

/// 3D bounding box of `f32`.
pub type BBox3f = BBox3<f32>;
/// 3D bounding box of `f64`.
pub type BBox3d = BBox3<f64>;
