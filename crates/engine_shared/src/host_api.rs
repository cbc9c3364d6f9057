// crates/engine_shared/src/host_api.rs
//! The seam between the engine (host) and gameplay logic.
//!
//! Game logic never touches engine storage directly. It asks the host to
//! create, move, tag and destroy objects through `ObstacleHost`, and is driven
//! by the engine loop through `GameLogic`.

use std::fmt::Debug;

use glam::{Quat, Vec2, Vec3};

use crate::ids::{LayerId, PrefabId};

pub trait ObstacleHost {
    /// Opaque handle to a host-owned object.
    type Handle: Copy + Eq + Debug;

    /// Looks up a layer by name.
    fn resolve_layer(&self, name: &str) -> Option<LayerId>;

    /// Looks up a template by name.
    fn resolve_prefab(&self, name: &str) -> Option<PrefabId>;

    /// Creates a copy of `template` parented under `parent`.
    /// Returns `None` if the template or the parent no longer exist.
    fn instantiate(
        &mut self,
        template: PrefabId,
        position: Vec3,
        rotation: Quat,
        parent: Self::Handle,
    ) -> Option<Self::Handle>;

    fn set_position(&mut self, handle: Self::Handle, position: Vec3);
    fn set_scale(&mut self, handle: Self::Handle, scale: Vec3);
    fn set_layer(&mut self, handle: Self::Handle, layer: LayerId);

    /// Destroys `handle` and everything parented under it.
    fn destroy(&mut self, handle: Self::Handle);

    /// Direct children of `anchor`, queried at call time.
    fn children(&self, anchor: Self::Handle) -> Vec<Self::Handle>;

    fn layer(&self, handle: Self::Handle) -> Option<LayerId>;
    fn position(&self, handle: Self::Handle) -> Option<Vec3>;

    /// `None` when the object has no rigid body.
    fn velocity(&self, handle: Self::Handle) -> Option<Vec2>;

    /// Returns `false` when the object has no rigid body to write to.
    fn set_velocity(&mut self, handle: Self::Handle, velocity: Vec2) -> bool;
}

/// Per-frame gameplay hooks, driven explicitly by the engine loop.
pub trait GameLogic<H> {
    fn on_load(&mut self, _host: &mut H) {}
    fn update(&mut self, host: &mut H, dt: f32);
    fn on_unload(&mut self, _host: &mut H) {}
}
