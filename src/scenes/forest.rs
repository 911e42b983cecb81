use glam::Vec3;

use super::common::{scatter, tree, AREA_SIZE, FOREST_SALT};
use crate::types::{Material, Prop};

/// Grassy ground around the trail head with green conifers
pub fn create_forest(tree_count: usize, seed: u64) -> Vec<Prop> {
    let ground = Material::new(0x2e8b57).with_surface(0.8, 0.2);
    let trunk = Material::new(0x8b4513);
    let foliage = Material::new(0x228b22);

    std::iter::once(Prop::ground(Vec3::new(0.0, -0.5, 0.0), AREA_SIZE, ground))
        .chain(scatter(seed, FOREST_SALT, tree_count, 0.0).flat_map(|base| tree(base, trunk, foliage)))
        .collect()
}
