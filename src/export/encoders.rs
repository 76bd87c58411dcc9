//! Canonical string forms of attribute values.
//!
//! Floats use Rust's shortest round-trip formatting, so every encoded value
//! parses back to the exact same `f32`.

use glam::{Mat3, Quat, Vec2, Vec3, Vec4};
use itertools::Itertools;

pub fn encode_float(value: f32) -> String {
    value.to_string()
}

/// `"r, g, b, a"`
pub fn encode_color(color: Vec4) -> String {
    color.to_array().iter().join(", ")
}

pub fn encode_bool(value: bool) -> String {
    let encoded = if value { "1" } else { "0" };
    encoded.to_string()
}

/// `"x, y, z"`
pub fn encode_vec3(vector: Vec3) -> String {
    vector.to_array().iter().join(", ")
}

/// `"x, y"`
pub fn encode_vec2(vector: Vec2) -> String {
    vector.to_array().iter().join(", ")
}

/// Scale as a row-major 3x3 diagonal matrix.
pub fn encode_scale_matrix(scale: Vec3) -> String {
    encode_mat3_row_major(Mat3::from_diagonal(scale))
}

/// Rotation as a row-major 3x3 matrix without translation or scale.
pub fn encode_rotation_matrix(rotation: Quat) -> String {
    encode_mat3_row_major(Mat3::from_quat(rotation))
}

fn encode_mat3_row_major(matrix: Mat3) -> String {
    // glam stores columns; the transpose's columns are the rows.
    matrix.transpose().to_cols_array().iter().join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_floats(encoded: &str) -> Vec<f32> {
        encoded
            .split(", ")
            .map(|part| part.parse::<f32>().unwrap())
            .collect()
    }

    #[test]
    fn test_encode_color() {
        assert_eq!(encode_color(Vec4::new(1.0, 0.5, 0.25, 1.0)), "1, 0.5, 0.25, 1");
    }

    #[test]
    fn test_encode_bool() {
        assert_eq!(encode_bool(true), "1");
        assert_eq!(encode_bool(false), "0");
    }

    #[test]
    fn test_encode_vectors() {
        assert_eq!(encode_vec3(Vec3::new(1.5, -2.0, 0.0)), "1.5, -2, 0");
        assert_eq!(encode_vec2(Vec2::new(0.125, 3.0)), "0.125, 3");
    }

    #[test]
    fn test_floats_keep_full_precision() {
        let value = 0.1f32 + 0.2f32;
        assert_eq!(encode_float(value).parse::<f32>().unwrap(), value);
        assert_eq!(encode_float(1.0e-7).parse::<f32>().unwrap(), 1.0e-7);
    }

    #[test]
    fn test_encode_scale_matrix() {
        assert_eq!(
            encode_scale_matrix(Vec3::new(2.0, 3.0, 4.0)),
            "2, 0, 0, 0, 3, 0, 0, 0, 4"
        );
    }

    #[test]
    fn test_encode_identity_rotation() {
        assert_eq!(
            encode_rotation_matrix(Quat::IDENTITY),
            "1, 0, 0, 0, 1, 0, 0, 0, 1"
        );
    }

    #[test]
    fn test_encode_half_turn_about_y() {
        assert_eq!(
            encode_rotation_matrix(Quat::from_xyzw(0.0, 1.0, 0.0, 0.0)),
            "-1, 0, 0, 0, 1, 0, 0, 0, -1"
        );
    }

    #[test]
    fn test_rotation_matrix_is_row_major() {
        let encoded = encode_rotation_matrix(Quat::from_rotation_z(std::f32::consts::FRAC_PI_2));
        let values = parse_floats(&encoded);
        let expected = [0.0, -1.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0];

        assert_eq!(values.len(), 9);
        for (value, expected) in values.iter().zip(expected) {
            assert!((value - expected).abs() < 1e-6, "{} != {}", value, expected);
        }
    }

    #[test]
    fn test_non_finite_values_pass_through() {
        assert_eq!(encode_vec2(Vec2::new(f32::NAN, f32::INFINITY)), "NaN, inf");
    }
}
