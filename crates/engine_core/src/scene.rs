// crates/engine_core/src/scene.rs
use engine_ecs::{Entity, World};
use engine_shared::{CLayer, CParent, CSprite, CTransform, CVelocity, LayerId};
use glam::Vec3;

use crate::layers::LayerRegistry;
use crate::prefab::PrefabLibrary;

/// Layer every entity lands on until something retags it.
pub const DEFAULT_LAYER: &str = "Default";

pub fn setup_default_world(world: &mut World) {
    world.register_component::<CTransform>();
    world.register_component::<CSprite>();
    world.register_component::<CVelocity>();
    world.register_component::<CLayer>();
    world.register_component::<CParent<Entity>>();
}

/// The headless scene: ECS storage plus the name tables the host exposes.
pub struct Scene {
    pub world: World,
    pub layers: LayerRegistry,
    pub prefabs: PrefabLibrary,
    default_layer: LayerId,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    pub fn new() -> Self {
        let mut world = World::new();
        setup_default_world(&mut world);

        let mut layers = LayerRegistry::default();
        let default_layer = layers.register(DEFAULT_LAYER).unwrap_or(LayerId(0));

        Self {
            world,
            layers,
            prefabs: PrefabLibrary::default(),
            default_layer,
        }
    }

    pub fn default_layer(&self) -> LayerId {
        self.default_layer
    }

    /// Spawns a root entity (no parent) at `position`.
    pub fn spawn_anchor(&mut self, position: Vec3) -> Entity {
        let entity = self.world.spawn();
        self.world.add_component(entity, CTransform::from_position(position));
        self.world.add_component(entity, CLayer(self.default_layer));
        entity
    }

    /// Spawns a plain entity parented under `parent`.
    pub fn spawn_child(&mut self, parent: Entity, transform: CTransform, layer: LayerId) -> Entity {
        let entity = self.world.spawn();
        self.world.add_component(entity, transform);
        self.world.add_component(entity, CLayer(layer));
        self.world.add_component(entity, CParent(parent));
        entity
    }

    pub fn children_of(&self, parent: Entity) -> Vec<Entity> {
        self.world
            .query::<CParent<Entity>>()
            .map(|links| {
                links
                    .iter()
                    .filter(|(_, link)| link.0 == parent)
                    .map(|(child, _)| *child)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Despawns `root` and its whole subtree. Returns how many entities went away.
    pub fn despawn_recursive(&mut self, root: Entity) -> usize {
        let mut pending = vec![root];
        let mut removed = 0;
        while let Some(entity) = pending.pop() {
            pending.extend(self.children_of(entity));
            if self.world.despawn(entity) {
                removed += 1;
            }
        }
        removed
    }
}
