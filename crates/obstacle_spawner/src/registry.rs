// crates/obstacle_spawner/src/registry.rs
//! Operations over the obstacles currently alive under a spawner.
//!
//! Nothing is cached: the host is asked for the anchor's children on every
//! call and filtered by layer.

use engine_shared::{LayerId, ObstacleHost};
use tracing::{info, warn};

use crate::error::SpawnerError;

/// Outcome of a speed change.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SpeedReport {
    pub scaled: usize,
    /// Tagged obstacles without a rigid body.
    pub skipped: usize,
}

/// Direct children of `anchor` tagged with `layer`.
pub fn tagged_obstacles<H: ObstacleHost>(host: &H, anchor: H::Handle, layer: LayerId) -> Vec<H::Handle> {
    host.children(anchor)
        .into_iter()
        .filter(|child| host.layer(*child) == Some(layer))
        .collect()
}

/// Destroys every tagged child of `anchor`. Returns how many were destroyed.
pub fn clear_all<H: ObstacleHost>(host: &mut H, anchor: H::Handle, layer: LayerId) -> usize {
    let doomed = tagged_obstacles(host, anchor, layer);
    for obstacle in &doomed {
        host.destroy(*obstacle);
    }
    info!(count = doomed.len(), "cleared obstacles");
    doomed.len()
}

/// Scales the horizontal velocity of every tagged child by `multiplier`.
/// Children without a rigid body are skipped; the rest of the batch still runs.
pub fn modify_speed<H: ObstacleHost>(
    host: &mut H,
    anchor: H::Handle,
    layer: LayerId,
    multiplier: f32,
) -> SpeedReport {
    let mut report = SpeedReport::default();

    for obstacle in tagged_obstacles(host, anchor, layer) {
        let Some(mut velocity) = host.velocity(obstacle) else {
            let err = SpawnerError::MissingComponent {
                object: format!("{obstacle:?}"),
                component: "rigid body",
            };
            warn!("{err}, skipping");
            report.skipped += 1;
            continue;
        };

        velocity.x *= multiplier;
        if host.set_velocity(obstacle, velocity) {
            report.scaled += 1;
        } else {
            warn!(?obstacle, "host rejected velocity write, skipping");
            report.skipped += 1;
        }
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_host::TestHost;
    use glam::{Vec2, Vec3};

    fn populated() -> (TestHost, [u32; 4]) {
        let mut host = TestHost::new();
        let anchor = host.anchor;
        let moving = host.add(Some(anchor), Vec3::ZERO, TestHost::OBSTACLE_LAYER, Some(Vec2::new(-3.0, 1.5)));
        let still = host.add(Some(anchor), Vec3::ZERO, TestHost::OBSTACLE_LAYER, None);
        let sibling = host.add(Some(anchor), Vec3::ZERO, TestHost::DEFAULT_LAYER, Some(Vec2::new(-3.0, 1.5)));
        // Tagged, but not a direct child of the anchor.
        let nested = host.add(Some(sibling), Vec3::ZERO, TestHost::OBSTACLE_LAYER, Some(Vec2::new(-1.0, 0.0)));
        (host, [moving, still, sibling, nested])
    }

    #[test]
    fn tagged_obstacles_filters_by_layer_and_parent() {
        let (host, [moving, still, _, _]) = populated();
        assert_eq!(tagged_obstacles(&host, host.anchor, TestHost::OBSTACLE_LAYER), vec![moving, still]);
    }

    #[test]
    fn clear_all_leaves_untagged_children_and_anchor() {
        let (mut host, [moving, still, sibling, nested]) = populated();
        let anchor = host.anchor;

        assert_eq!(clear_all(&mut host, anchor, TestHost::OBSTACLE_LAYER), 2);
        assert!(!host.is_alive(moving));
        assert!(!host.is_alive(still));
        assert!(host.is_alive(sibling));
        assert!(host.is_alive(nested));
        assert!(host.is_alive(anchor));
    }

    #[test]
    fn modify_speed_scales_only_horizontal_and_skips_bodiless() {
        let (mut host, [moving, _, sibling, nested]) = populated();
        let anchor = host.anchor;

        let report = modify_speed(&mut host, anchor, TestHost::OBSTACLE_LAYER, 2.0);

        assert_eq!(report, SpeedReport { scaled: 1, skipped: 1 });
        assert_eq!(host.velocity(moving), Some(Vec2::new(-6.0, 1.5)));
        assert_eq!(host.velocity(sibling), Some(Vec2::new(-3.0, 1.5)));
        assert_eq!(host.velocity(nested), Some(Vec2::new(-1.0, 0.0)));
    }

    #[test]
    fn rejected_velocity_write_counts_as_skipped() {
        let (mut host, [moving, _, _, _]) = populated();
        let anchor = host.anchor;
        host.lock_body(moving);

        let report = modify_speed(&mut host, anchor, TestHost::OBSTACLE_LAYER, 2.0);

        assert_eq!(report, SpeedReport { scaled: 0, skipped: 2 });
        assert_eq!(host.velocity(moving), Some(Vec2::new(-3.0, 1.5)));
    }
}
