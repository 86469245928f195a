// src/pattern_lib/transform.rs

use bytemuck::{Pod, Zeroable};
use glam::{DMat4, DQuat, DVec3};

/// Placement of one pattern instance: a rotation about the vertical (Y) axis
/// through the origin, then a translation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlacementTransform {
    pub index: u32, // 1-based
    pub rotation_angle_radians: f64,
    pub translation: DVec3,
}

impl PlacementTransform {
    pub fn new(index: u32, rotation_angle_radians: f64, translation: DVec3) -> Self {
        Self { index, rotation_angle_radians, translation }
    }

    pub fn height(&self) -> f64 {
        self.translation.y
    }

    // Rotation has no translation part of its own since it pivots on the
    // origin, so setting the translation afterwards is the same as composing.
    pub fn to_matrix(&self) -> DMat4 {
        DMat4::from_rotation_translation(
            DQuat::from_rotation_y(self.rotation_angle_radians),
            self.translation,
        )
    }

    pub fn to_instance_raw(&self) -> InstanceRaw {
        InstanceRaw { model: self.to_matrix().as_mat4().to_cols_array_2d() }
    }
}

/// Column-major model matrix, laid out for a per-instance vertex buffer.
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable, PartialEq)]
pub struct InstanceRaw {
    pub model: [[f32; 4]; 4],
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn matrix_moves_origin_to_translation() {
        let placement = PlacementTransform::new(1, 2.4, DVec3::new(0.0, 0.5, 0.0));
        let p = placement.to_matrix().transform_point3(DVec3::ZERO);
        assert!(approx_eq(p.x, 0.0));
        assert!(approx_eq(p.y, 0.5));
        assert!(approx_eq(p.z, 0.0));
    }

    #[test]
    fn matrix_rotates_about_vertical_axis() {
        let angle = 2.4_f64;
        let placement = PlacementTransform::new(1, angle, DVec3::new(0.0, 0.5, 0.0));
        let p = placement.to_matrix().transform_point3(DVec3::X);
        assert!(approx_eq(p.x, angle.cos()));
        assert!(approx_eq(p.y, 0.5));
        assert!(approx_eq(p.z, -angle.sin()));
    }

    #[test]
    fn instance_raw_is_sixteen_floats() {
        let placements = [
            PlacementTransform::new(1, 2.4, DVec3::new(0.0, 0.25, 0.0)),
            PlacementTransform::new(2, 4.8, DVec3::new(0.0, 0.5, 0.0)),
        ];
        let raws: Vec<InstanceRaw> = placements.iter().map(|p| p.to_instance_raw()).collect();
        let floats: &[f32] = bytemuck::cast_slice(&raws);
        assert_eq!(floats.len(), 32);
        // Translation lives in the fourth column.
        assert!((floats[13] - 0.25).abs() < 1e-6);
        assert!((floats[16 + 13] - 0.5).abs() < 1e-6);
        assert_eq!(floats[15], 1.0);
    }
}
