// crates/engine_shared/src/ids.rs
//! Stable integer ids shared between the host and game logic.

use serde::{Deserialize, Serialize};

/// Hard cap on layers, matching a 32-bit layer mask.
pub const MAX_LAYERS: u32 = 32;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LayerId(pub u32);

/// Handle to a template registered in the host's prefab library.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PrefabId(pub u32);

