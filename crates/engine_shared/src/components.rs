// crates/engine_shared/src/components.rs
use glam::{Quat, Vec2, Vec3, Vec4};
use serde::{Deserialize, Serialize};

use crate::ids::LayerId;

#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CTransform {
    pub pos: Vec3,
    pub scale: Vec3,
    pub rotation: Quat,
}

impl Default for CTransform {
    fn default() -> Self {
        Self { pos: Vec3::ZERO, scale: Vec3::ONE, rotation: Quat::IDENTITY }
    }
}

impl CTransform {
    pub fn from_position(pos: Vec3) -> Self {
        Self { pos, ..Default::default() }
    }
}

#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CSprite {
    pub color: Vec4,
}

impl Default for CSprite {
    fn default() -> Self { Self { color: Vec4::ONE } }
}

/// Linear velocity of a 2D rigid body, in world units per second.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CVelocity {
    pub linear: Vec2,
}

/// Collision / classification layer the entity lives on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CLayer(pub LayerId);

/// Hierarchy link. The payload is an opaque parent handle owned by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CParent<H>(pub H);
