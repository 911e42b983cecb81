use glam::Vec3;
use std::f32::consts::FRAC_PI_4;

use crate::types::{Material, Prop, Shape};

/// Procedural hiker built from primitives, feet at y = 0
pub fn hiker_parts() -> Vec<Prop> {
    let body = Material::new(0x8b4513);
    let head = Material::new(0xffd700);
    let legs = Material::new(0x000000);
    let arms = Material::new(0x228b22);

    let limb = Shape::Cylinder { radius_top: 0.15, radius_bottom: 0.15, height: 1.0 };

    vec![
        Prop::new(
            "body",
            Shape::Cylinder { radius_top: 0.4, radius_bottom: 0.4, height: 1.5 },
            Vec3::new(0.0, 1.0, 0.0),
            body,
        ),
        Prop::new("head", Shape::Sphere { radius: 0.5 }, Vec3::new(0.0, 2.2, 0.0), head),
        Prop::new("left_leg", limb, Vec3::new(-0.25, 0.5, 0.0), legs),
        Prop::new("right_leg", limb, Vec3::new(0.25, 0.5, 0.0), legs),
        Prop::new("left_arm", limb, Vec3::new(-0.7, 1.2, 0.0), arms)
            .rotated(Vec3::new(0.0, 0.0, FRAC_PI_4)),
        Prop::new("right_arm", limb, Vec3::new(0.7, 1.2, 0.0), arms)
            .rotated(Vec3::new(0.0, 0.0, -FRAC_PI_4)),
    ]
}
