//! Serde utilities for glam types.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Serde proxy for Vec3
#[derive(Serialize, Deserialize)]
pub struct Vec3Def {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl From<Vec3> for Vec3Def {
    fn from(v: Vec3) -> Self {
        Self { x: v.x, y: v.y, z: v.z }
    }
}

impl From<Vec3Def> for Vec3 {
    fn from(def: Vec3Def) -> Self {
        Vec3::new(def.x, def.y, def.z)
    }
}

/// Use with `#[serde(with = "crate::serde_utils::vec3")]` on Vec3 fields.
pub mod vec3 {
    use super::Vec3Def;
    use glam::Vec3;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S>(v: &Vec3, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        Vec3Def::from(*v).serialize(s)
    }

    pub fn deserialize<'de, D>(d: D) -> Result<Vec3, D::Error>
    where
        D: Deserializer<'de>,
    {
        Vec3Def::deserialize(d).map(Vec3::from)
    }
}
