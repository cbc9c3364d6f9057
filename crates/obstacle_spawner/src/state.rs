// crates/obstacle_spawner/src/state.rs

use serde::{Deserialize, Serialize};

use crate::error::{Result, SpawnerError};

/// Mutable timer state. This is all that needs persisting to resume a
/// spawner mid-interval.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpawnerState {
    /// Seconds accumulated since the last spawn.
    pub elapsed: f32,
    /// Seconds until the next spawn, measured from the last one.
    pub next_spawn_in: f32,
}

impl SpawnerState {
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Decodes a snapshot, rejecting states the timer could never reach.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let state: Self = bincode::deserialize(bytes)?;
        state.validate()?;
        Ok(state)
    }

    /// `elapsed` must be finite and non-negative; `next_spawn_in` must be
    /// finite (it may be <= 0 when the configured mean is).
    pub fn validate(&self) -> Result<()> {
        if !self.elapsed.is_finite() || self.elapsed < 0.0 {
            return Err(SpawnerError::CorruptSnapshot(format!(
                "elapsed must be finite and >= 0, got {}",
                self.elapsed
            )));
        }
        if !self.next_spawn_in.is_finite() {
            return Err(SpawnerError::CorruptSnapshot(format!(
                "next_spawn_in must be finite, got {}",
                self.next_spawn_in
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod safety_tests {
    use super::*;

    #[test]
    fn test_layout_change_requires_version_ack() {
        let state = SpawnerState { elapsed: 0.0, next_spawn_in: 1.0 };
        let current_size =
            bincode::serialized_size(&state).expect("Serialization of SpawnerState must succeed");

        const EXPECTED_SIZE: u64 = 8;

        assert_eq!(
            current_size, EXPECTED_SIZE,
            "STRUCT LAYOUT CHANGED! Saved spawner snapshots will no longer load."
        );
    }

    #[test]
    fn truncated_snapshot_is_rejected() {
        let bytes = SpawnerState { elapsed: 0.25, next_spawn_in: 1.5 }.to_bytes().unwrap();
        let err = SpawnerState::from_bytes(&bytes[..5]).unwrap_err();
        assert!(matches!(err, SpawnerError::Snapshot(_)));
    }

    #[test]
    fn unreachable_states_are_rejected() {
        let cases = [
            SpawnerState { elapsed: -5.0, next_spawn_in: 1.0 },
            SpawnerState { elapsed: f32::NAN, next_spawn_in: 1.0 },
            SpawnerState { elapsed: 0.5, next_spawn_in: f32::NAN },
            SpawnerState { elapsed: f32::INFINITY, next_spawn_in: 1.0 },
        ];
        for state in cases {
            let bytes = state.to_bytes().unwrap();
            let err = SpawnerState::from_bytes(&bytes).unwrap_err();
            assert!(matches!(err, SpawnerError::CorruptSnapshot(_)), "{state:?} gave {err}");
        }

        let rapid_fire = SpawnerState { elapsed: 0.0, next_spawn_in: -0.5 };
        assert_eq!(SpawnerState::from_bytes(&rapid_fire.to_bytes().unwrap()).unwrap(), rapid_fire);
    }
}
