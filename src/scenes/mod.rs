mod common;
mod fireplace;
mod forest;
mod winter;

pub use common::{scatter, AREA_SIZE, FOREST_SALT, WINTER_SALT};
pub use fireplace::{create_fireplace, FIREPLACE_CENTER_X};
pub use forest::create_forest;
pub use winter::{create_winter, WINTER_CENTER_X};

use crate::config::SceneConfig;
use crate::math::CatmullRomCurve;
use crate::types::{rgb, Light, LightKind, PathRibbon, StagedScene};

/// Segments used when sampling the trail for drawing
pub const PATH_SEGMENTS: usize = 200;

/// Builds the forest, winter and fireplace areas plus the trail and global lighting
pub fn build_environments(config: &SceneConfig, curve: &CatmullRomCurve) -> StagedScene {
    let (camp_props, camp_lights) = create_fireplace();

    let props = create_forest(config.tree_count, config.seed)
        .into_iter()
        .chain(create_winter(config.tree_count, config.seed))
        .chain(camp_props)
        .collect();

    let lights = global_lights().into_iter().chain(camp_lights).collect();

    let path = PathRibbon {
        points: (0..=PATH_SEGMENTS)
            .map(|i| curve.point_at(i as f64 / PATH_SEGMENTS as f64).as_vec3().to_array())
            .collect(),
        radius: 0.2,
        color: rgb(0xffd700),
    };

    let scene = StagedScene {
        props,
        lights,
        path: Some(path),
    };
    log::info!(
        "Scene built: {} props, {} lights, trail length {:.1}",
        scene.props.len(),
        scene.lights.len(),
        curve.length()
    );
    scene
}

fn global_lights() -> [Light; 3] {
    [
        Light {
            kind: LightKind::Ambient,
            color: rgb(0xffffff),
            intensity: 0.5,
            position: [0.0; 3],
        },
        Light {
            kind: LightKind::Directional {
                target: [0.0; 3],
                cast_shadow: true,
            },
            color: rgb(0xffffff),
            intensity: 1.0,
            position: [5.0, 10.0, 5.0],
        },
        Light {
            kind: LightKind::Point { range: 50.0 },
            color: rgb(0xff8800),
            intensity: 1.0,
            position: [5.0, 10.0, 5.0],
        },
    ]
}
