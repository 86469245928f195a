// src/pattern_lib/generator.rs

use std::f64::consts::TAU;
use glam::DVec3;
use crate::pattern_lib::params::{PatternParameters, RadialMode, SpiralMode};
use crate::pattern_lib::transform::PlacementTransform;

/// Divergence between consecutive instances, in radians. Kept as the literal
/// 2.4 rather than 2π(1 - 1/φ); the pattern geometry depends on it.
pub const GOLDEN_ANGLE: f64 = 2.4;

pub struct SpiralPlacementGenerator;

impl SpiralPlacementGenerator {
    pub fn generate(params: &PatternParameters) -> Vec<PlacementTransform> {
        log::debug!(
            "Generating {} placements ({:?} spiral, pitch {}, secondary pitch {})",
            params.instance_count(),
            params.spiral_mode(),
            params.primary_pitch(),
            params.secondary_pitch(),
        );
        Self::placements(params).collect()
    }

    pub fn placements(params: &PatternParameters) -> Placements {
        Placements {
            params: *params,
            next_index: 1,
            remaining: params.instance_count(),
        }
    }

    /// Placement of instance `index` (1-based).
    pub fn placement_at(params: &PatternParameters, index: u32) -> PlacementTransform {
        let angle = index as f64 * GOLDEN_ANGLE;
        let height = match params.spiral_mode() {
            SpiralMode::Single => Self::single_spiral_height(params.primary_pitch(), index),
            SpiralMode::Dual => Self::dual_spiral_height(
                params.primary_pitch(),
                params.secondary_pitch(),
                index,
            ),
        };

        let (x, z) = match params.radial_mode() {
            RadialMode::Collapsed => (0.0, 0.0),
            RadialMode::Helical => {
                let radius = 0.5 * params.diameter();
                (radius * angle.sin(), radius * angle.cos())
            }
        };

        log::trace!("instance {}: angle {:.6} rad, height {:.6}", index, angle, height);
        PlacementTransform::new(index, angle, DVec3::new(x, height, z))
    }

    /// Rise of a helix of `pitch` after climbing through `index` golden angles.
    pub fn single_spiral_height(pitch: f64, index: u32) -> f64 {
        index as f64 * pitch * GOLDEN_ANGLE / TAU
    }

    /// Height where the secondary helix next reaches the instance's angular
    /// position, at least one full turn past the primary height.
    pub fn dual_spiral_height(primary_pitch: f64, secondary_pitch: f64, index: u32) -> f64 {
        let angle = index as f64 * GOLDEN_ANGLE;
        let primary_height = Self::single_spiral_height(primary_pitch, index);
        let intersect_angle = TAU * primary_height / secondary_pitch;

        // rem_euclid keeps the offset in [0, 2π) for either sign.
        let secondary_angle = intersect_angle - (intersect_angle - angle).rem_euclid(TAU) + TAU;
        secondary_angle * secondary_pitch / TAU
    }
}

/// Lazily yields placements in increasing instance order.
#[derive(Clone, Debug)]
pub struct Placements {
    params: PatternParameters,
    next_index: u32,
    remaining: u32,
}

impl Iterator for Placements {
    type Item = PlacementTransform;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let placement = SpiralPlacementGenerator::placement_at(&self.params, self.next_index);
        self.remaining -= 1;
        self.next_index = self.next_index.saturating_add(1);
        Some(placement)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Placements {}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() < eps
    }

    #[test]
    fn three_instance_single_spiral() {
        let params = PatternParameters::new(3, 0.1, 0.0, 10.0).unwrap();
        let placements = SpiralPlacementGenerator::generate(&params);

        assert_eq!(placements.len(), 3);
        let expected_angles = [2.4, 4.8, 7.2];
        let expected_heights = [0.03820, 0.07639, 0.11459];
        for (k, placement) in placements.iter().enumerate() {
            assert_eq!(placement.index, k as u32 + 1);
            assert!(approx_eq(placement.rotation_angle_radians, expected_angles[k], 1e-12));
            assert!(approx_eq(placement.height(), expected_heights[k], 1e-5));
            assert_eq!(placement.translation.x, 0.0);
            assert_eq!(placement.translation.z, 0.0);
        }
    }

    #[test]
    fn single_instance_dual_spiral() {
        let params = PatternParameters::new(1, 0.1, 0.05, 10.0).unwrap();
        let placement = SpiralPlacementGenerator::placement_at(&params, 1);

        let single_height = 0.1 * 2.4 / TAU;
        assert!(placement.height() > single_height);
        // intersect angle 4.8, offset 2.4, so the snapped angle is 2.4 + 2π.
        let expected = (2.4 + TAU) * 0.05 / TAU;
        assert!(approx_eq(placement.height(), expected, 1e-12));
    }

    #[test]
    fn helical_mode_places_copies_on_circle() {
        let params = PatternParameters::new(5, 0.1, 0.0, 10.0)
            .unwrap()
            .with_radial_mode(RadialMode::Helical);
        for placement in SpiralPlacementGenerator::placements(&params) {
            let t = placement.translation;
            assert!(approx_eq((t.x * t.x + t.z * t.z).sqrt(), 5.0, 1e-9));
            assert!(approx_eq(t.x, 5.0 * placement.rotation_angle_radians.sin(), 1e-12));
        }
    }

    #[test]
    fn radial_mode_does_not_change_height() {
        let collapsed = PatternParameters::new(4, 0.3, 0.07, 2.0).unwrap();
        let helical = collapsed.with_radial_mode(RadialMode::Helical);
        let a = SpiralPlacementGenerator::generate(&collapsed);
        let b = SpiralPlacementGenerator::generate(&helical);
        for (p, q) in a.iter().zip(b.iter()) {
            assert_eq!(p.height(), q.height());
            assert_eq!(p.rotation_angle_radians, q.rotation_angle_radians);
        }
    }

    #[test]
    fn placements_iterator_reports_exact_size() {
        let params = PatternParameters::new(6, 0.1, 0.0, 10.0).unwrap();
        let mut iter = SpiralPlacementGenerator::placements(&params);
        assert_eq!(iter.len(), 6);
        iter.next();
        iter.next();
        assert_eq!(iter.len(), 4);
        assert_eq!(iter.next().map(|p| p.index), Some(3));
        assert_eq!(iter.count(), 3);
    }
}
