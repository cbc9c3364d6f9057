// crates/obstacle_spawner/src/placer.rs
//! Where to spawn, and how many.
//!
//! A spawn event becomes a small cluster: one obstacle, an optional twin to
//! its right, and for small obstacles a short stack growing away from the
//! floor (or ceiling). Planning is pure; `ObstacleSpawner` hands the plan to
//! the host.

use glam::Vec3;

use crate::rng::SpawnRng;

/// Deepest stacking level; a cluster column is at most `MAX_STACK_DEPTH + 1` tall.
pub const MAX_STACK_DEPTH: u32 = 3;

/// Only obstacles strictly smaller than this stack.
pub const STACK_SIZE_LIMIT: f32 = 0.5;

/// Upper bound on placements from a single request.
pub const MAX_PLACEMENTS: usize = 2 * (MAX_STACK_DEPTH as usize + 1);

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlacementRequest {
    pub origin: Vec3,
    pub size: f32,
    pub spawn_down: bool,
    pub depth: u32,
}

/// One obstacle the host should create.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    pub position: Vec3,
    pub size: f32,
    pub spawn_down: bool,
    pub depth: u32,
    /// Whether this came from the sideways branch (or stacks on one that did).
    pub lateral: bool,
}

#[derive(Clone, Copy, Debug)]
pub struct ObstaclePlacer {
    offset: Vec3,
}

impl ObstaclePlacer {
    pub fn new(offset: Vec3) -> Self {
        Self { offset }
    }

    /// Where an obstacle of `size` lands for a request at `origin`.
    ///
    /// The offset is mirrored for upward spawns. Non-unit obstacles are
    /// pushed half their missing height outwards, so their outer face lines
    /// up with where a unit obstacle's would be.
    pub fn placed_position(&self, origin: Vec3, size: f32, spawn_down: bool) -> Vec3 {
        let sign = direction_sign(spawn_down);
        let correction = Vec3::NEG_Y * (0.5 * (1.0 - size));
        origin + sign * (self.offset + correction)
    }

    pub fn plan(&self, request: PlacementRequest, rng: &mut SpawnRng) -> Vec<Placement> {
        let mut out = Vec::with_capacity(MAX_PLACEMENTS);
        self.plan_into(request, false, rng, &mut out);
        out
    }

    fn plan_into(
        &self,
        request: PlacementRequest,
        lateral: bool,
        rng: &mut SpawnRng,
        out: &mut Vec<Placement>,
    ) {
        let PlacementRequest { origin, size, spawn_down, depth } = request;

        out.push(Placement {
            position: self.placed_position(origin, size, spawn_down),
            size,
            spawn_down,
            depth,
            lateral,
        });

        if depth == 0 && !lateral && rng.random_bool() {
            let beside = PlacementRequest {
                origin: origin + Vec3::X * size,
                ..request
            };
            self.plan_into(beside, true, rng, out);
        }

        if depth < MAX_STACK_DEPTH && size < STACK_SIZE_LIMIT && rng.chance(1.0 - size) {
            // Away from the floor when spawning down, away from the ceiling otherwise.
            let above = PlacementRequest {
                origin: origin + Vec3::Y * (size * direction_sign(spawn_down)),
                depth: depth + 1,
                ..request
            };
            self.plan_into(above, lateral, rng, out);
        }
    }
}

fn direction_sign(spawn_down: bool) -> f32 {
    if spawn_down { 1.0 } else { -1.0 }
}
