use bevy::prelude::*;

mod actions;
mod environment;
mod forest;
mod input;
mod lighting;
mod manifest;
mod setup;
mod shading;
mod state;

// re-export the bits we actually need in main
use actions::ActionState;
use forest::ForestPlugin;
use input::{camera_controller, input_mapping_system};
use lighting::{init_light_cycle, recolor_on_click};
use manifest::SceneManifestAssetPlugin;
use shading::{advance_season, SeasonalMaterial};
use state::ScenePhase;

fn main() {
    App::new()
        // core engine plugins
        .add_plugins(DefaultPlugins)
        .add_plugins(MaterialPlugin::<SeasonalMaterial>::default())
        // your domain plugins
        .add_plugins(SceneManifestAssetPlugin) // loads + promotes the scene manifest
        .add_plugins(ForestPlugin)             // scatters & clones the trees
        // init resources & scene phase
        .init_resource::<ActionState>()
        .init_state::<ScenePhase>()
        // one-shot world build once the manifest is in
        .add_systems(
            OnEnter(ScenePhase::Ready),
            (
                setup::setup,
                environment::spawn_room,
                environment::spawn_cliffs,
                init_light_cycle,
            ),
        )
        // input + camera + light palette + leaf tint each frame
        .add_systems(
            Update,
            (input_mapping_system, camera_controller, recolor_on_click, advance_season)
                .run_if(in_state(ScenePhase::Ready)),
        )
        .run();
}
