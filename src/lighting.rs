// src/lighting.rs
//! Click-driven light palette: random colors, white again every Nth click.

use bevy::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::forest::tree::TreeAssets;
use crate::manifest::{CurrentScene, SceneSeed};
use crate::setup::SceneLight;
use crate::shading::SeasonalMaterial;

/// Clicks since the last reset to white.
#[derive(Resource, Default)]
pub struct LightCycle {
    clicks: u32,
}

/// Palette RNG stream, kept apart from the placement stream.
#[derive(Resource)]
pub struct PaletteRng(pub ChaCha8Rng);

pub fn init_light_cycle(mut commands: Commands, seed: Res<SceneSeed>) {
    let mix = seed.0 ^ 0x94D0_49BB_1331_11EBu64;
    commands.insert_resource(PaletteRng(ChaCha8Rng::seed_from_u64(mix)));
    commands.init_resource::<LightCycle>();
}

/// Advance the cycle: the Nth click resets to white, any other click picks a
/// uniformly random 24-bit color.
pub fn next_color(cycle: &mut LightCycle, reset_every: u32, rng: &mut impl Rng) -> Color {
    cycle.clicks += 1;
    if cycle.clicks >= reset_every.max(1) {
        cycle.clicks = 0;
        Color::WHITE
    } else {
        Color::srgb_u8(rng.random(), rng.random(), rng.random())
    }
}

/// On left click, recolor the point light and push the same color into both
/// tree materials' light uniforms.
pub fn recolor_on_click(
    buttons: Res<ButtonInput<MouseButton>>,
    scene: Res<CurrentScene>,
    mut cycle: ResMut<LightCycle>,
    mut palette: ResMut<PaletteRng>,
    tree: Res<TreeAssets>,
    mut lights: Query<&mut PointLight, With<SceneLight>>,
    mut materials: ResMut<Assets<SeasonalMaterial>>,
) {
    if !buttons.just_pressed(MouseButton::Left) {
        return;
    }

    let color = next_color(&mut cycle, scene.0.lighting.reset_every, &mut palette.0);

    for mut light in &mut lights {
        light.color = color;
    }
    for handle in [&tree.bark_material, &tree.foliage_material] {
        if let Some(mat) = materials.get_mut(handle) {
            mat.light_color = color.into();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(99)
    }

    #[test]
    fn test_every_fifth_click_resets_to_white() {
        let mut cycle = LightCycle::default();
        let mut rng = rng();

        for click in 1..=10u32 {
            let color = next_color(&mut cycle, 5, &mut rng);
            if click % 5 == 0 {
                assert_eq!(color, Color::WHITE, "click {click} should reset");
            } else {
                assert_ne!(color, Color::WHITE, "click {click} should stay random");
            }
        }
    }

    #[test]
    fn test_counter_wraps_after_reset() {
        let mut cycle = LightCycle::default();
        let mut rng = rng();

        for _ in 0..5 {
            next_color(&mut cycle, 5, &mut rng);
        }
        assert_eq!(cycle.clicks, 0);
    }

    #[test]
    fn test_reset_every_one_is_always_white() {
        let mut cycle = LightCycle::default();
        let mut rng = rng();

        for _ in 0..3 {
            assert_eq!(next_color(&mut cycle, 1, &mut rng), Color::WHITE);
        }
    }

    #[test]
    fn test_palette_is_deterministic_per_seed() {
        let mut a = LightCycle::default();
        let mut b = LightCycle::default();
        let mut rng_a = rng();
        let mut rng_b = rng();

        for _ in 0..4 {
            assert_eq!(next_color(&mut a, 5, &mut rng_a), next_color(&mut b, 5, &mut rng_b));
        }
    }
}
