use glam::Vec4;
use serde::Deserialize;

pub const WHITE: Vec4 = Vec4::ONE;

/// Appearance models the renderer understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderKind {
    Diffuse,
    Specular,
    TransparentDiffuse,
    TransparentSpecular,
}

impl ShaderKind {
    pub fn from_name(name: &str) -> Option<ShaderKind> {
        match name {
            "Diffuse" => Some(ShaderKind::Diffuse),
            "Specular" => Some(ShaderKind::Specular),
            "Transparent/Diffuse" => Some(ShaderKind::TransparentDiffuse),
            "Transparent/Specular" => Some(ShaderKind::TransparentSpecular),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ShaderKind::Diffuse => "Diffuse",
            ShaderKind::Specular => "Specular",
            ShaderKind::TransparentDiffuse => "Transparent/Diffuse",
            ShaderKind::TransparentSpecular => "Transparent/Specular",
        }
    }

    pub fn is_transparent(self) -> bool {
        self.name().contains("Transparent")
    }
}

/// Material as authored in the host scene. The shader is kept as a free-form
/// name; it is only checked against [`ShaderKind`] when exported.
#[derive(Debug, Clone, PartialEq)]
pub struct MaterialData {
    pub name: String,
    pub shader: String,
    pub color: Vec4,
    pub specular_color: Vec4,
    pub shininess: f32,
}

impl MaterialData {
    pub fn new(name: impl Into<String>, shader: impl Into<String>, color: Vec4) -> Self {
        Self {
            name: name.into(),
            shader: shader.into(),
            color,
            specular_color: WHITE,
            shininess: 1.0,
        }
    }

    pub fn with_specular(mut self, specular_color: Vec4, shininess: f32) -> Self {
        self.specular_color = specular_color;
        self.shininess = shininess;
        self
    }
}

/// Optional hints carried in a glTF material's `extras`.
#[derive(Debug, Default, Deserialize)]
pub struct MaterialExtras {
    pub shader: Option<String>,
    pub specular: Option<[f32; 4]>,
    pub shininess: Option<f32>,
}
