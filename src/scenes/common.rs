use glam::Vec3;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

use crate::types::{Material, Prop, Shape};

/// Side length of each environment's square ground plane
pub const AREA_SIZE: f32 = 50.0;

/// Stream selectors so areas sharing a seed get different layouts
pub const FOREST_SALT: u64 = 0x666f_7265_7374;
pub const WINTER_SALT: u64 = 0x7769_6e74_6572;

/// Deterministic scatter of `count` points over the area centered at `center_x`.
///
/// The layout depends only on `seed ^ salt`.
pub fn scatter(seed: u64, salt: u64, count: usize, center_x: f32) -> impl Iterator<Item = Vec3> {
    let half = AREA_SIZE * 0.5;
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed ^ salt);

    (0..count).map(move |_| {
        let x = rng.gen_range(-half..half);
        let z = rng.gen_range(-half..half);
        Vec3::new(center_x + x, 0.0, z)
    })
}

/// Trunk cylinder with a cone of foliage on top, standing at `base`
pub fn tree(base: Vec3, trunk: Material, foliage: Material) -> [Prop; 2] {
    [
        Prop::new(
            "trunk",
            Shape::Cylinder { radius_top: 0.2, radius_bottom: 0.2, height: 2.0 },
            base + Vec3::Y,
            trunk,
        ),
        Prop::new(
            "foliage",
            Shape::Cone { radius: 1.0, height: 2.0, segments: 8 },
            base + Vec3::Y * 3.0,
            foliage,
        ),
    ]
}
