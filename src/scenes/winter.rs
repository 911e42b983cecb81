use glam::Vec3;

use super::common::{scatter, tree, AREA_SIZE, WINTER_SALT};
use crate::types::{Material, Prop};

pub const WINTER_CENTER_X: f32 = 50.0;

/// Snowfield with snow-covered trees, one area east of the forest
pub fn create_winter(tree_count: usize, seed: u64) -> Vec<Prop> {
    let snow = Material::new(0xffffff);
    let trunk = Material::new(0x8b4513);

    std::iter::once(Prop::ground(Vec3::new(WINTER_CENTER_X, 0.0, 0.0), AREA_SIZE, snow))
        .chain(
            scatter(seed, WINTER_SALT, tree_count, WINTER_CENTER_X)
                .flat_map(|base| tree(base, trunk, snow)),
        )
        .collect()
}
