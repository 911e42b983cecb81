mod aabb;
pub mod curve;

pub use aabb::AABB;
pub use curve::CatmullRomCurve;
