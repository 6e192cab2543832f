// src/environment.rs
//! Static dressing around the forest: the sky-box room and the cliffs.

use std::f32::consts::{FRAC_PI_2, PI};

use bevy::prelude::*;

use crate::manifest::CurrentScene;

/// Six inward-facing quads: sky on the walls and ceiling, ground on the floor.
pub fn spawn_room(
    mut commands: Commands,
    scene: Res<CurrentScene>,
    assets: Res<AssetServer>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let room = &scene.0.room;
    let center = Vec3::from(room.center);
    let (hw, hh, hd) = (room.width / 2.0, room.height / 2.0, room.depth / 2.0);

    let sky = materials.add(StandardMaterial {
        base_color_texture: Some(assets.load(room.sky_texture.as_str())),
        ..default()
    });
    let ground = materials.add(StandardMaterial {
        base_color_texture: Some(assets.load(room.ground_texture.as_str())),
        ..default()
    });

    // (quad size, offset from room center, rotation turning +Z inward, material)
    let faces: [(Vec2, Vec3, Quat, Handle<StandardMaterial>); 6] = [
        (
            Vec2::new(room.width, room.height),
            Vec3::new(0.0, 0.0, -hd),
            Quat::IDENTITY,
            sky.clone(),
        ),
        (
            Vec2::new(room.width, room.height),
            Vec3::new(0.0, 0.0, hd),
            Quat::from_rotation_y(PI),
            sky.clone(),
        ),
        (
            Vec2::new(room.depth, room.height),
            Vec3::new(-hw, 0.0, 0.0),
            Quat::from_rotation_y(FRAC_PI_2),
            sky.clone(),
        ),
        (
            Vec2::new(room.depth, room.height),
            Vec3::new(hw, 0.0, 0.0),
            Quat::from_rotation_y(-FRAC_PI_2),
            sky.clone(),
        ),
        (
            Vec2::new(room.width, room.depth),
            Vec3::new(0.0, hh, 0.0),
            Quat::from_rotation_x(FRAC_PI_2),
            sky,
        ),
        (
            Vec2::new(room.width, room.depth),
            Vec3::new(0.0, -hh, 0.0),
            Quat::from_rotation_x(-FRAC_PI_2),
            ground,
        ),
    ];

    for (size, offset, rotation, material) in faces {
        commands.spawn((
            Mesh3d(meshes.add(Rectangle::new(size.x, size.y))),
            MeshMaterial3d(material),
            Transform::from_translation(center + offset).with_rotation(rotation),
        ));
    }
}

/// Textured cuboids from the manifest; all share one material.
pub fn spawn_cliffs(
    mut commands: Commands,
    scene: Res<CurrentScene>,
    assets: Res<AssetServer>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let cliffs = &scene.0.cliffs;
    if cliffs.blocks.is_empty() {
        return;
    }

    let material = materials.add(StandardMaterial {
        base_color_texture: Some(assets.load(cliffs.texture.as_str())),
        ..default()
    });

    for block in &cliffs.blocks {
        let [w, h, d] = block.size;
        commands.spawn((
            Mesh3d(meshes.add(Cuboid::new(w, h, d))),
            MeshMaterial3d(material.clone()),
            Transform::from_translation(Vec3::from(block.position)),
        ));
    }
}
