use glam::Vec3;
use serde::Serialize;

use crate::math::AABB;

/// Per-frame state handed to the renderer
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Serialize, bytemuck::Pod, bytemuck::Zeroable)]
pub struct FrameUniform {
    pub actor_position: [f32; 3],
    pub progress: f32,
    pub actor_rotation: [f32; 4], // xyzw quaternion
    pub camera_position: [f32; 3],
    pub mode: u32, // 0 = follow path, 1 = free roam
    pub camera_target: [f32; 3],
    pub frame: u32,
}

/// Converts a 0xRRGGBB literal into linear-ish float rgb
pub fn rgb(hex: u32) -> [f32; 3] {
    [
        ((hex >> 16) & 0xff) as f32 / 255.0,
        ((hex >> 8) & 0xff) as f32 / 255.0,
        (hex & 0xff) as f32 / 255.0,
    ]
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct Material {
    pub color: [f32; 3],
    pub roughness: f32,
    pub metalness: f32,
}

impl Material {
    pub fn new(hex: u32) -> Self {
        Self {
            color: rgb(hex),
            roughness: 1.0,
            metalness: 0.0,
        }
    }

    pub fn with_surface(mut self, roughness: f32, metalness: f32) -> Self {
        self.roughness = roughness;
        self.metalness = metalness;
        self
    }
}

/// Primitive geometry, sized the way the renderer builds it (centered at the origin)
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Shape {
    Plane { width: f32, depth: f32 },
    Box { width: f32, height: f32, depth: f32 },
    Cylinder { radius_top: f32, radius_bottom: f32, height: f32 },
    Cone { radius: f32, height: f32, segments: u32 },
    Sphere { radius: f32 },
}

impl Shape {
    pub fn half_extents(&self) -> Vec3 {
        match *self {
            Shape::Plane { width, depth } => Vec3::new(width * 0.5, 0.0, depth * 0.5),
            Shape::Box { width, height, depth } => Vec3::new(width, height, depth) * 0.5,
            Shape::Cylinder { radius_top, radius_bottom, height } => {
                let r = radius_top.max(radius_bottom);
                Vec3::new(r, height * 0.5, r)
            }
            Shape::Cone { radius, height, .. } => Vec3::new(radius, height * 0.5, radius),
            Shape::Sphere { radius } => Vec3::splat(radius),
        }
    }
}

/// A single static mesh placed in the world
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Prop {
    pub name: &'static str,
    pub shape: Shape,
    pub position: [f32; 3],
    pub rotation: [f32; 3], // euler xyz, radians
    pub material: Material,
    pub cast_shadow: bool,
    pub receive_shadow: bool,
}

impl Prop {
    pub fn new(name: &'static str, shape: Shape, position: Vec3, material: Material) -> Self {
        Self {
            name,
            shape,
            position: position.to_array(),
            rotation: [0.0; 3],
            material,
            cast_shadow: true,
            receive_shadow: false,
        }
    }

    pub fn rotated(mut self, rotation: Vec3) -> Self {
        self.rotation = rotation.to_array();
        self
    }

    /// Ground planes are authored upright and laid flat
    pub fn ground(position: Vec3, size: f32, material: Material) -> Self {
        Self {
            cast_shadow: false,
            receive_shadow: true,
            ..Prop::new(
                "ground",
                Shape::Plane { width: size, depth: size },
                position,
                material,
            )
            .rotated(Vec3::new(-std::f32::consts::FRAC_PI_2, 0.0, 0.0))
        }
    }

    /// World-space bounds; rotated props fall back to a bounding sphere
    pub fn bounds(&self) -> AABB {
        let center = Vec3::from_array(self.position);
        let half = self.shape.half_extents();
        let extent = if self.rotation == [0.0; 3] {
            half
        } else {
            Vec3::splat(half.length())
        };
        AABB::new(center - extent, center + extent)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LightKind {
    Ambient,
    Point { range: f32 },
    Directional { target: [f32; 3], cast_shadow: bool },
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct Light {
    pub kind: LightKind,
    pub color: [f32; 3],
    pub intensity: f32,
    pub position: [f32; 3],
}

/// Sampled centerline of the path, drawn as a tube by the renderer
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PathRibbon {
    pub points: Vec<[f32; 3]>,
    pub radius: f32,
    pub color: [f32; 3],
}

/// Everything the renderer needs once at startup
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct StagedScene {
    pub props: Vec<Prop>,
    pub lights: Vec<Light>,
    pub path: Option<PathRibbon>,
}

impl StagedScene {
    pub fn count(&self, name: &str) -> usize {
        self.props.iter().filter(|p| p.name == name).count()
    }
}
