// crates/obstacle_spawner/src/error.rs
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SpawnerError {
    #[error("invalid spawner config: {0}")]
    InvalidConfig(String),
    #[error("{object} is on the obstacle layer but has no {component}")]
    MissingComponent {
        object: String,
        component: &'static str,
    },
    #[error("failed to read spawner config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse spawner config: {0}")]
    Parse(#[from] ron::error::SpannedError),
    #[error("spawner state snapshot is corrupt: {0}")]
    CorruptSnapshot(String),
    #[error("spawner state snapshot: {0}")]
    Snapshot(#[from] bincode::Error),
}

pub type Result<T, E = SpawnerError> = std::result::Result<T, E>;
