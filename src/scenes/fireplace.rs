use glam::Vec3;
use std::f32::consts::FRAC_PI_2;

use super::common::AREA_SIZE;
use crate::types::{rgb, Light, LightKind, Material, Prop, Shape};

pub const FIREPLACE_CENTER_X: f32 = 100.0;

/// Camp at the end of the trail: fireplace block, a log, and its own lights
pub fn create_fireplace() -> (Vec<Prop>, Vec<Light>) {
    let x = FIREPLACE_CENTER_X;

    let props = vec![
        Prop::ground(Vec3::new(x, -1.0, 0.0), AREA_SIZE, Material::new(0x3b1f1f)),
        Prop::new(
            "fireplace",
            Shape::Box { width: 3.0, height: 3.0, depth: 3.0 },
            Vec3::new(x, 1.5, 0.0),
            Material::new(0xff4500),
        ),
        Prop::new(
            "log",
            Shape::Cylinder { radius_top: 0.5, radius_bottom: 0.5, height: 3.0 },
            Vec3::new(x, 0.5, -3.0),
            Material::new(0x8b4513),
        )
        .rotated(Vec3::new(0.0, 0.0, FRAC_PI_2)),
    ];

    let lights = vec![
        Light {
            kind: LightKind::Directional {
                target: [x, 0.0, 5.0],
                cast_shadow: false,
            },
            color: rgb(0xffffff),
            intensity: 1.0,
            position: [x + 10.0, 10.0, 10.0],
        },
        // Lights the camp model beside the fire
        Light {
            kind: LightKind::Point { range: 50.0 },
            color: rgb(0xffffff),
            intensity: 1.0,
            position: [x, 5.0, 5.0],
        },
    ];

    (props, lights)
}
