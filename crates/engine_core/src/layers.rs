// crates/engine_core/src/layers.rs
use std::collections::HashMap;

use engine_shared::{LayerId, MAX_LAYERS};

/// Name -> id table for scene layers. Ids are handed out in registration
/// order and never reused.
#[derive(Default, Clone, Debug)]
pub struct LayerRegistry {
    name_to_id: HashMap<String, LayerId>,
    next_id: u32,
}

impl LayerRegistry {
    /// Registers `name`, or returns its existing id.
    /// `None` once all `MAX_LAYERS` slots are taken.
    pub fn register(&mut self, name: &str) -> Option<LayerId> {
        if let Some(&id) = self.name_to_id.get(name) {
            return Some(id);
        }
        if self.next_id >= MAX_LAYERS {
            return None;
        }
        let id = LayerId(self.next_id);
        self.name_to_id.insert(name.to_string(), id);
        self.next_id += 1;
        Some(id)
    }

    pub fn get_id(&self, name: &str) -> Option<LayerId> {
        self.name_to_id.get(name).copied()
    }
}
