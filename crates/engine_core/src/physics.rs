// crates/engine_core/src/physics.rs
use engine_ecs::{Entity, World};
use engine_shared::{CTransform, CVelocity};

/// Explicit Euler step: every entity with both a body and a transform moves by
/// `velocity * dt` on the XY plane.
pub fn integrate_velocities(world: &mut World, dt: f32) {
    let Some(bodies) = world.query::<CVelocity>() else {
        return;
    };
    let moves: Vec<(Entity, glam::Vec2)> = bodies
        .iter()
        .map(|(entity, body)| (*entity, body.linear * dt))
        .collect();

    let Some(transforms) = world.query_mut::<CTransform>() else {
        return;
    };
    for (entity, delta) in moves {
        if let Some(transform) = transforms.get_mut(entity) {
            transform.pos += delta.extend(0.0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::setup_default_world;
    use glam::{Vec2, Vec3};

    #[test]
    fn moves_only_bodies() {
        let mut world = World::new();
        setup_default_world(&mut world);

        let moving = world.spawn();
        world.add_component(moving, CTransform::from_position(Vec3::new(0.0, 1.0, 2.0)));
        world.add_component(moving, CVelocity { linear: Vec2::new(-4.0, 2.0) });

        let fixed = world.spawn();
        world.add_component(fixed, CTransform::default());

        integrate_velocities(&mut world, 0.5);

        assert_eq!(
            world.get_component::<CTransform>(moving).unwrap().pos,
            Vec3::new(-2.0, 2.0, 2.0)
        );
        assert_eq!(world.get_component::<CTransform>(fixed).unwrap().pos, Vec3::ZERO);
    }
}
