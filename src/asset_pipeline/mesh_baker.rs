use crate::model::{Model, ModelPrimitive};

/// Concatenates primitives into one model, offsetting each primitive's
/// indices by the number of vertices baked before it.
pub fn bake_primitives(name: String, primitives: Vec<ModelPrimitive>) -> Model {
    let mut model = Model {
        name,
        ..Model::default()
    };

    for primitive in primitives {
        let vertex_offset = model.vertices.len() as u32;

        model.vertices.extend(primitive.vertices);
        model.normals.extend(primitive.normals);
        model.uvs.extend(primitive.uvs);
        model
            .indices
            .extend(primitive.indices.iter().map(|index| index + vertex_offset));
    }

    model
}

#[cfg(test)]
mod tests {
    use glam::{Vec2, Vec3};

    use super::*;

    fn triangle(x: f32) -> ModelPrimitive {
        ModelPrimitive {
            vertices: vec![Vec3::new(x, 0.0, 0.0), Vec3::new(x, 1.0, 0.0), Vec3::X],
            normals: vec![Vec3::Z; 3],
            uvs: vec![Vec2::ZERO, Vec2::Y, Vec2::X],
            indices: vec![0, 1, 2],
        }
    }

    #[test]
    fn test_bake_offsets_indices() {
        let model = bake_primitives("Quad".to_string(), vec![triangle(0.0), triangle(5.0)]);

        assert_eq!(model.name, "Quad");
        assert_eq!(model.vertices.len(), 6);
        assert_eq!(model.normals.len(), 6);
        assert_eq!(model.uvs.len(), 6);
        assert_eq!(model.indices, vec![0, 1, 2, 3, 4, 5]);
        assert_eq!(model.vertices[3], Vec3::new(5.0, 0.0, 0.0));
    }
}
