// src/forest/tree.rs
//! The template tree: one authored trunk/branch/leaf assembly, cloned per
//! placement. Clones share mesh and material handles, so recoloring a
//! material recolors every tree at once.

use bevy::prelude::*;

use crate::manifest::CurrentScene;
use crate::shading::SeasonalMaterial;

// Authored dimensions (meters). The trunk is centered on its local origin,
// so a tree at y = 0 sits exactly on the room floor at y = -5.
const TRUNK_RADIUS: f32 = 1.0;
const TRUNK_HEIGHT: f32 = 10.0;
const BRANCH_TOP_RADIUS: f32 = 0.5;
const BRANCH_BOTTOM_RADIUS: f32 = 0.8;
const BRANCH_LENGTHS: [f32; 2] = [5.0, 3.5];
const BRANCH_OFFSETS: [Vec3; 2] = [Vec3::new(0.9, 7.0, 0.0), Vec3::new(-0.7, 6.0, 0.0)];
const BRANCH_LEAN_DEG: [f32; 2] = [-15.0, 15.0];
const LEAF_RADII: [f32; 2] = [4.0, 3.0];
const LEAF_OFFSETS: [Vec3; 2] = [Vec3::new(3.0, 12.0, 0.0), Vec3::new(-3.0, 10.0, 2.0)];

/// Shared handles for every clone, plus the template's vertical coordinate.
#[derive(Resource)]
pub struct TreeAssets {
    pub trunk_mesh: Handle<Mesh>,
    pub branch_meshes: [Handle<Mesh>; 2],
    pub leaf_meshes: [Handle<Mesh>; 2],
    pub bark_material: Handle<SeasonalMaterial>,
    pub foliage_material: Handle<SeasonalMaterial>,
    /// Every clone inherits this as its y translation.
    pub base_y: f32,
}

/// Build the template's meshes and the two seasonal materials once.
pub fn init_tree_assets(
    mut commands: Commands,
    scene: Res<CurrentScene>,
    assets: Res<AssetServer>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<SeasonalMaterial>>,
) {
    let def = &scene.0.tree;

    let trunk_mesh = meshes.add(Cylinder::new(TRUNK_RADIUS, TRUNK_HEIGHT));
    let branch_meshes = BRANCH_LENGTHS.map(|len| {
        meshes.add(ConicalFrustum {
            radius_top: BRANCH_TOP_RADIUS,
            radius_bottom: BRANCH_BOTTOM_RADIUS,
            height: len,
        })
    });
    let leaf_meshes = LEAF_RADII.map(|r| meshes.add(Sphere::new(r)));

    let bark_material = materials.add(SeasonalMaterial::textured(assets.load(def.bark_texture.as_str())));
    let foliage_material =
        materials.add(SeasonalMaterial::textured(assets.load(def.foliage_texture.as_str())));

    commands.insert_resource(TreeAssets {
        trunk_mesh,
        branch_meshes,
        leaf_meshes,
        bark_material,
        foliage_material,
        base_y: 0.0,
    });
}

/// Clone the template into the scene with its trunk at `at`.
pub fn spawn_tree(commands: &mut Commands, tree: &TreeAssets, at: Vec3) -> Entity {
    commands
        .spawn((
            Mesh3d(tree.trunk_mesh.clone()),
            MeshMaterial3d(tree.bark_material.clone()),
            Transform::from_translation(at),
        ))
        .with_children(|trunk| {
            for i in 0..2 {
                trunk.spawn((
                    Mesh3d(tree.branch_meshes[i].clone()),
                    MeshMaterial3d(tree.bark_material.clone()),
                    Transform::from_translation(BRANCH_OFFSETS[i])
                        .with_rotation(Quat::from_rotation_z(BRANCH_LEAN_DEG[i].to_radians())),
                ));
                trunk.spawn((
                    Mesh3d(tree.leaf_meshes[i].clone()),
                    MeshMaterial3d(tree.foliage_material.clone()),
                    Transform::from_translation(LEAF_OFFSETS[i]),
                ));
            }
        })
        .id()
}
