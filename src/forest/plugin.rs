// src/forest/plugin.rs
//! Forest assembly: scatter placements, clone the template per placement.

use bevy::prelude::*;

use super::scatter::RejectionScatter;
use super::tree::{init_tree_assets, spawn_tree, TreeAssets};
use crate::manifest::{CurrentScene, SceneSeed};
use crate::state::ScenePhase;

pub struct ForestPlugin;

impl Plugin for ForestPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            OnEnter(ScenePhase::Ready),
            (init_tree_assets, plant_forest).chain(),
        );
    }
}

/// Build the placement set once, then clone one tree per entry. The set is
/// consumed here and never retained; the render loop does not re-scatter.
fn plant_forest(
    mut commands: Commands,
    scene: Res<CurrentScene>,
    seed: Res<SceneSeed>,
    tree: Res<TreeAssets>,
) {
    let f = &scene.0.forest;
    let scatter = RejectionScatter::new(f.count, f.min, f.max, f.spacing, f.tries);
    let mut rng = scatter.rng_for(*seed);

    match scatter.scatter_with(&mut rng) {
        Ok(points) => {
            let planted = points.len();
            for p in points {
                spawn_tree(&mut commands, &tree, Vec3::new(p.x, tree.base_y, p.y));
            }
            info!("Forest: planted {} trees, spacing >= {} m", planted, f.spacing);
        }
        Err(e) => warn!("Forest: not planted: {e}"),
    }
}
