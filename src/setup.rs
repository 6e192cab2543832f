use bevy::prelude::*;

use crate::manifest::CurrentScene;

#[derive(Component)]
pub struct MainCamera;

/// The recolorable overhead light.
#[derive(Component)]
pub struct SceneLight;

pub fn setup(mut commands: Commands, scene: Res<CurrentScene>) {
    let cam = &scene.0.camera;
    let lighting = &scene.0.lighting;

    // 1) Flat fill so the room interior never goes black
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: lighting.ambient_brightness,
        ..default()
    });

    // 2) Point light above the forest; clicks recolor it
    commands.spawn((
        PointLight {
            color: Color::WHITE,
            intensity: lighting.point_intensity,
            range: lighting.point_range,
            ..default()
        },
        Transform::from_translation(Vec3::from(lighting.point_position)),
        SceneLight,
    ));

    // 3) Camera
    commands.spawn((
        Camera3d::default(),
        Projection::from(PerspectiveProjection {
            fov: cam.fov_degrees.to_radians(),
            near: cam.near,
            far: cam.far,
            ..default()
        }),
        Transform::from_translation(Vec3::from(cam.position)),
        MainCamera,
    ));
}
