// src/shading.rs
//! Seasonal tint shader shared by bark and foliage.

use bevy::prelude::*;
use bevy::reflect::TypePath;
use bevy::render::render_resource::{AsBindGroup, ShaderRef};

use crate::forest::tree::TreeAssets;
use crate::manifest::CurrentScene;

/// Texture blended toward a time-driven tint, then multiplied by the scene
/// light color. Tint at time t is (sin t, cos t, 1), faded in by smoothstep.
#[derive(Asset, TypePath, AsBindGroup, Debug, Clone)]
pub struct SeasonalMaterial {
    #[texture(0)]
    #[sampler(1)]
    pub texture: Option<Handle<Image>>,

    #[uniform(2)]
    pub light_color: LinearRgba,

    #[uniform(3)]
    pub season_time: f32,
}

impl SeasonalMaterial {
    pub fn textured(texture: Handle<Image>) -> Self {
        Self {
            texture: Some(texture),
            light_color: LinearRgba::WHITE,
            season_time: 0.0,
        }
    }
}

impl Material for SeasonalMaterial {
    fn fragment_shader() -> ShaderRef {
        "shaders/seasonal.wgsl".into()
    }
}

/// Update: advance the foliage tint. Bark stays at time 0, so trunks keep
/// their texture while the leaves drift through the seasonal colors.
pub fn advance_season(
    time: Res<Time>,
    scene: Res<CurrentScene>,
    tree: Res<TreeAssets>,
    mut materials: ResMut<Assets<SeasonalMaterial>>,
) {
    if let Some(mat) = materials.get_mut(&tree.foliage_material) {
        mat.season_time += scene.0.tree.season_rate * time.delta_secs();
    }
}
