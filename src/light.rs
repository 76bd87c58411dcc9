use std::fmt;

use glam::Vec4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightKind {
    Point,
    Directional,
    Spot,
    Area,
}

impl fmt::Display for LightKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LightKind::Point => "Point",
            LightKind::Directional => "Directional",
            LightKind::Spot => "Spot",
            LightKind::Area => "Area",
        };
        f.write_str(name)
    }
}

/// Light attached to a scene node. Point lights sit at the node's world
/// position, directional lights shine along the node's forward vector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    pub kind: LightKind,
    pub color: Vec4,
    pub intensity: f32,
    pub enabled: bool,
}

impl Light {
    pub fn new(kind: LightKind, color: Vec4, intensity: f32) -> Self {
        Self {
            kind,
            color,
            intensity,
            enabled: true,
        }
    }

    pub fn point(color: Vec4, intensity: f32) -> Self {
        Self::new(LightKind::Point, color, intensity)
    }

    pub fn directional(color: Vec4, intensity: f32) -> Self {
        Self::new(LightKind::Directional, color, intensity)
    }

    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }
}
