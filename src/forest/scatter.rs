// src/forest/scatter.rs
//! Rejection-sampled tree placement inside a square (deterministic per seed).

use bevy::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::manifest::SceneSeed;

#[derive(Clone, Copy, Debug)]
pub struct ScatterParams {
    /// Placements to produce
    pub count: usize,
    /// Square sampling bounds; each coordinate drawn from [min, max)
    pub min: f32,
    pub max: f32,
    /// Minimum pairwise separation (meters)
    pub spacing: f32,
    /// Candidate draws allowed per placement before giving up
    pub tries: u32,
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ScatterError {
    #[error("no room for placement {placed} after {tries} candidates (count/spacing too tight for the square)")]
    Infeasible { placed: usize, tries: u32 },
}

pub struct RejectionScatter {
    params: ScatterParams,
}

impl RejectionScatter {
    pub fn new(count: usize, min: f32, max: f32, spacing: f32, tries: u32) -> Self {
        let s = spacing.max(0.0);
        let t = tries.max(1);
        Self { params: ScatterParams { count, min, max, spacing: s, tries: t } }
    }

    #[inline]
    pub fn rng_for(&self, seed: SceneSeed) -> ChaCha8Rng {
        // Stable per (seed, count); salt keeps the stream apart from other consumers
        let mix = (seed.0)
            ^ ((self.params.count as u64) << 24)
            ^ 0xC2B2_AE3D_27D4_EB4Fu64;
        ChaCha8Rng::seed_from_u64(mix)
    }

    /// Draw `count` points, each at least `spacing` away from all earlier ones.
    ///
    /// Candidates violating the spacing are discarded and redrawn, so a tight
    /// (count, spacing, area) combination can exhaust `tries` on a late
    /// placement; that surfaces as `ScatterError::Infeasible` rather than
    /// looping forever. Accepted points keep their generation order.
    pub fn scatter_with(&self, rng: &mut ChaCha8Rng) -> Result<Vec<Vec2>, ScatterError> {
        let ScatterParams { count, min, max, spacing, tries } = self.params;
        let s2 = spacing * spacing;

        let mut accepted: Vec<Vec2> = Vec::with_capacity(count);

        while accepted.len() < count {
            let mut placed = false;

            for _ in 0..tries {
                // rand panics on an empty range; a min == max square is a single point
                let x = if min < max { rng.random_range(min..max) } else { min };
                let z = if min < max { rng.random_range(min..max) } else { min };
                let candidate = Vec2::new(x, z);

                let clear = accepted
                    .iter()
                    .all(|p| p.distance_squared(candidate) >= s2);

                if clear {
                    accepted.push(candidate);
                    placed = true;
                    break;
                }
            }

            if !placed {
                return Err(ScatterError::Infeasible { placed: accepted.len(), tries });
            }
        }

        Ok(accepted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rng(seed: u64) -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(seed)
    }

    #[test]
    fn test_exact_count_and_pairwise_spacing() {
        let scatter = RejectionScatter::new(50, -100.0, 100.0, 10.0, 10_000);
        let points = scatter.scatter_with(&mut rng(7)).unwrap();

        assert_eq!(points.len(), 50);
        for i in 0..points.len() {
            for j in (i + 1)..points.len() {
                let d = points[i].distance(points[j]);
                assert!(d >= 10.0 - 1e-4, "pair ({i}, {j}) only {d} apart");
            }
        }
    }

    #[test]
    fn test_all_coordinates_inside_half_open_bounds() {
        let scatter = RejectionScatter::new(80, -100.0, 100.0, 5.0, 10_000);
        let points = scatter.scatter_with(&mut rng(11)).unwrap();

        for p in &points {
            assert!(p.x >= -100.0 && p.x < 100.0, "x out of bounds: {}", p.x);
            assert!(p.y >= -100.0 && p.y < 100.0, "z out of bounds: {}", p.y);
        }
    }

    #[test]
    fn test_deterministic_for_equal_seeds() {
        let scatter = RejectionScatter::new(30, -50.0, 50.0, 4.0, 10_000);
        let a = scatter.scatter_with(&mut rng(42)).unwrap();
        let b = scatter.scatter_with(&mut rng(42)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_single_placement_needs_no_spacing() {
        let scatter = RejectionScatter::new(1, -100.0, 100.0, 10.0, 10);
        let points = scatter.scatter_with(&mut rng(3)).unwrap();
        assert_eq!(points.len(), 1);
    }

    #[test]
    fn test_zero_count_yields_empty_set() {
        let scatter = RejectionScatter::new(0, -100.0, 100.0, 10.0, 10);
        let points = scatter.scatter_with(&mut rng(3)).unwrap();
        assert!(points.is_empty());
    }

    #[test]
    fn test_shipped_forest_configuration_is_feasible() {
        // 200 trees, 10 m apart, in a 200 m square
        let scatter = RejectionScatter::new(200, -100.0, 100.0, 10.0, 10_000);
        let points = scatter.scatter_with(&mut rng(1337)).unwrap();

        assert_eq!(points.len(), 200);
        for i in 0..points.len() {
            for j in (i + 1)..points.len() {
                assert!(points[i].distance(points[j]) >= 10.0 - 1e-4);
            }
        }
    }

    #[test]
    fn test_zero_spacing_never_rejects() {
        // With spacing 0 every candidate is clear, so one try per point suffices
        let scatter = RejectionScatter::new(500, 0.0, 1.0, 0.0, 1);
        let points = scatter.scatter_with(&mut rng(9)).unwrap();
        assert_eq!(points.len(), 500);
    }

    #[test]
    fn test_degenerate_square_collapses_to_single_point() {
        let scatter = RejectionScatter::new(3, 5.0, 5.0, 0.0, 1);
        let points = scatter.scatter_with(&mut rng(2)).unwrap();
        assert_eq!(points, vec![Vec2::splat(5.0); 3]);
    }

    #[test]
    fn test_infeasible_configuration_reports_instead_of_hanging() {
        // A 2 m square cannot hold ten points 10 m apart
        let scatter = RejectionScatter::new(10, -1.0, 1.0, 10.0, 100);
        let err = scatter.scatter_with(&mut rng(5)).unwrap_err();
        assert_eq!(err, ScatterError::Infeasible { placed: 1, tries: 100 });
    }

    #[test]
    fn test_insertion_order_is_generation_order() {
        // Asking for more points only appends: identically seeded runs with
        // different counts share a prefix, so earlier placements never move.
        let short = RejectionScatter::new(3, -50.0, 50.0, 1.0, 1_000);
        let long = RejectionScatter::new(5, -50.0, 50.0, 1.0, 1_000);
        let a = short.scatter_with(&mut rng(8)).unwrap();
        let b = long.scatter_with(&mut rng(8)).unwrap();
        assert_eq!(b[..3], a[..]);
    }
}
