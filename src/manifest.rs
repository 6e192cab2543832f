// src/manifest.rs
//! Data-driven scene manifest + loader.

use bevy::asset::{io::Reader, AssetLoader, LoadContext};
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::state::ScenePhase;

// ---------- Public plugin to register asset+loader ----------

pub struct SceneManifestAssetPlugin;

impl Plugin for SceneManifestAssetPlugin {
    fn build(&self, app: &mut App) {
        app.init_asset::<SceneManifest>()
            .register_asset_loader(SceneManifestLoader)
            .init_resource::<SceneSettings>()
            .init_resource::<SceneManifestHandle>()
            .add_systems(Startup, load_manifest)
            .add_systems(Update, promote_manifest.run_if(in_state(ScenePhase::Loading)));
    }
}

// ---------- Runtime resources ----------

/// Configure where the scene manifest lives (relative to `assets/`).
#[derive(Resource, Clone)]
pub struct SceneSettings {
    pub manifest_path: String,
}
impl Default for SceneSettings {
    fn default() -> Self {
        Self { manifest_path: "scenes/forest.scene.ron".to_string() }
    }
}

/// Global scene seed; changing this reshuffles the forest and the light palette.
#[derive(Resource, Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SceneSeed(pub u64);

/// Handle to the loading/loaded manifest asset.
#[derive(Resource, Default)]
pub struct SceneManifestHandle(pub Handle<SceneManifest>);

/// The manifest, promoted to a plain resource once the asset is ready.
#[derive(Resource, Clone)]
pub struct CurrentScene(pub SceneManifest);

// ---------- Manifest (data form) ----------

#[derive(Asset, TypePath, Clone, Debug, Serialize, Deserialize)]
pub struct SceneManifest {
    #[serde(default = "default_seed")]
    pub seed: u64,
    #[serde(default)]
    pub camera: CameraDef,
    #[serde(default)]
    pub lighting: LightingDef,
    #[serde(default)]
    pub room: RoomDef,
    #[serde(default)]
    pub cliffs: CliffsDef,
    #[serde(default)]
    pub tree: TreeDef,
    #[serde(default)]
    pub forest: ForestDef,
}

fn default_seed() -> u64 {
    1337
}

impl Default for SceneManifest {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            camera: CameraDef::default(),
            lighting: LightingDef::default(),
            room: RoomDef::default(),
            cliffs: CliffsDef::default(),
            tree: TreeDef::default(),
            forest: ForestDef::default(),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CameraDef {
    pub position: [f32; 3],
    /// Vertical field of view (degrees).
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
    /// Strafe/advance speed (m/s) for the arrow keys.
    pub move_speed: f32,
    /// Yaw speed (rad/s) for the L/R keys.
    pub yaw_speed: f32,
}
impl Default for CameraDef {
    fn default() -> Self {
        Self {
            position: [0.0, 0.0, 30.0],
            fov_degrees: 75.0,
            near: 0.1,
            far: 1000.0,
            move_speed: 30.0,
            yaw_speed: 1.2,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LightingDef {
    /// Flat fill light (lux).
    pub ambient_brightness: f32,
    pub point_position: [f32; 3],
    /// Point light output (lumens).
    pub point_intensity: f32,
    /// Point light falloff range (meters).
    pub point_range: f32,
    /// Clicks per palette cycle; the cycle's last click resets to white.
    pub reset_every: u32,
}
impl Default for LightingDef {
    fn default() -> Self {
        Self {
            ambient_brightness: 300.0,
            point_position: [0.0, 200.0, 0.0],
            point_intensity: 1.0e8,
            point_range: 400.0,
            reset_every: 5,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RoomDef {
    pub width: f32,
    pub height: f32,
    pub depth: f32,
    pub center: [f32; 3],
    pub sky_texture: String,
    pub ground_texture: String,
}
impl Default for RoomDef {
    fn default() -> Self {
        Self {
            width: 300.0,
            height: 200.0,
            depth: 300.0,
            center: [0.0, 95.0, 0.0],
            sky_texture: "textures/sky.jpg".to_string(),
            ground_texture: "textures/ground.jpg".to_string(),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CliffsDef {
    pub texture: String,
    pub blocks: Vec<CliffBlockDef>,
}
impl Default for CliffsDef {
    fn default() -> Self {
        Self {
            texture: "textures/cliff.jpg".to_string(),
            blocks: vec![
                CliffBlockDef { size: [100.0, 50.0, 20.0], position: [-150.0, 50.0, -150.0] },
                CliffBlockDef { size: [120.0, 60.0, 30.0], position: [150.0, 40.0, 150.0] },
            ],
        }
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct CliffBlockDef {
    pub size: [f32; 3],
    pub position: [f32; 3],
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TreeDef {
    pub bark_texture: String,
    pub foliage_texture: String,
    /// Seasonal tint speed on the foliage shader (per second).
    pub season_rate: f32,
}
impl Default for TreeDef {
    fn default() -> Self {
        Self {
            bark_texture: "textures/tree.jpg".to_string(),
            foliage_texture: "textures/leaves.jpg".to_string(),
            season_rate: 0.3,
        }
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct ForestDef {
    pub count: usize,
    /// Square scatter bounds; both coordinates drawn from [min, max).
    pub min: f32,
    pub max: f32,
    /// Minimum distance between any two trees (meters).
    pub spacing: f32,
    #[serde(default = "default_tries")]
    pub tries: u32,
}

fn default_tries() -> u32 {
    10_000
}

impl Default for ForestDef {
    fn default() -> Self {
        Self { count: 200, min: -100.0, max: 100.0, spacing: 10.0, tries: default_tries() }
    }
}

// ---------- Startup / readiness systems ----------

/// Startup: request loading the manifest, store the handle.
fn load_manifest(
    mut handle_res: ResMut<SceneManifestHandle>,
    settings: Res<SceneSettings>,
    assets: Res<AssetServer>,
) {
    if handle_res.0.is_strong() { return; }
    let h: Handle<SceneManifest> = assets.load(settings.manifest_path.as_str());
    handle_res.0 = h;
    info!("Scene: loading manifest from '{}'", settings.manifest_path);
}

/// Update (while loading): once the asset is in, promote it to plain
/// resources and flip to `Ready` so the build systems fire.
fn promote_manifest(
    mut commands: Commands,
    handle_res: Res<SceneManifestHandle>,
    manifests: Res<Assets<SceneManifest>>,
    mut next_phase: ResMut<NextState<ScenePhase>>,
) {
    let Some(manifest) = manifests.get(&handle_res.0) else { return; };
    commands.insert_resource(SceneSeed(manifest.seed));
    commands.insert_resource(CurrentScene(manifest.clone()));
    next_phase.set(ScenePhase::Ready);
    info!(
        "Scene: manifest ready (seed={}, {} trees)",
        manifest.seed, manifest.forest.count
    );
}

// ---------- Asset loader for `.scene.ron` ----------

#[derive(Default)]
pub struct SceneManifestLoader;

impl AssetLoader for SceneManifestLoader {
    type Asset = SceneManifest;
    type Settings = ();
    type Error = SceneManifestLoadError;

    fn extensions(&self) -> &[&str] {
        &["scene.ron"]
    }

    async fn load(
        &self,
        reader: &mut dyn Reader,
        _settings: &Self::Settings,
        _load_context: &mut LoadContext<'_>,
    ) -> Result<Self::Asset, Self::Error> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes).await?;
        let manifest: SceneManifest =
            ron::de::from_bytes(&bytes).map_err(|e| SceneManifestLoadError::Ron(e.to_string()))?;
        Ok(manifest)
    }
}

#[derive(thiserror::Error, Debug)]
pub enum SceneManifestLoadError {
    #[error("I/O while reading scene manifest: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON parse error: {0}")]
    Ron(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_manifest_falls_back_to_shipped_scene() {
        let manifest: SceneManifest = ron::de::from_str("()").unwrap();

        assert_eq!(manifest.seed, 1337);
        assert_eq!(manifest.forest.count, 200);
        assert_eq!(manifest.forest.min, -100.0);
        assert_eq!(manifest.forest.max, 100.0);
        assert_eq!(manifest.forest.spacing, 10.0);
        assert_eq!(manifest.lighting.reset_every, 5);
        assert_eq!(manifest.cliffs.blocks.len(), 2);
        assert_eq!(manifest.room.center, [0.0, 95.0, 0.0]);
    }

    #[test]
    fn test_manifest_overrides_apply_per_field() {
        let src = r#"(
            seed: 7,
            forest: (count: 12, min: -20.0, max: 20.0, spacing: 2.5),
        )"#;
        let manifest: SceneManifest = ron::de::from_str(src).unwrap();

        assert_eq!(manifest.seed, 7);
        assert_eq!(manifest.forest.count, 12);
        assert_eq!(manifest.forest.spacing, 2.5);
        // Omitted knobs keep their defaults
        assert_eq!(manifest.forest.tries, 10_000);
        assert_eq!(manifest.camera.fov_degrees, 75.0);
    }

    #[test]
    fn test_unparseable_manifest_is_a_ron_error() {
        let err = ron::de::from_str::<SceneManifest>("(seed: \"nope\")").unwrap_err();
        let wrapped = SceneManifestLoadError::Ron(err.to_string());
        assert!(format!("{wrapped}").starts_with("RON parse error"));
    }
}
