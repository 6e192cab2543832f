use bevy::prelude::*;

/// Scene lifecycle: wait for the manifest asset, then build the world once.
#[derive(States, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ScenePhase {
    #[default]
    Loading,
    Ready,
}
