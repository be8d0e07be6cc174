/*
 * Boid Module
 *
 * This module defines the flocking Boid and its behavior.
 * Each boid follows three main rules:
 * 1. Separation: Avoid crowding neighbors
 * 2. Alignment: Steer towards the average heading of neighbors
 * 3. Cohesion: Steer towards the average position of neighbors
 * plus a wall-avoidance steer that keeps it inside the world bounds.
 */

use glam::Vec2;
use rand::Rng;

use crate::config::FlockParams;
use crate::math;

#[derive(Clone)]
pub struct Boid {
    pub position: Vec2,
    pub velocity: Vec2,
}

impl Boid {
    // Spawn with a random position inside the world and a random velocity
    pub fn new(params: &FlockParams, rng: &mut impl Rng) -> Self {
        Self {
            position: Vec2::new(
                rng.gen_range(0.0..params.width),
                rng.gen_range(0.0..params.height),
            ),
            velocity: Vec2::new(rng.gen_range(-2.0..2.0), rng.gen_range(-2.0..2.0)),
        }
    }

    // Steer back toward the interior when inside the wall margin. The
    // correction goes straight into velocity, before the flocking
    // contributions, and clamps to max_force_wall rather than max_force.
    pub fn edges(&mut self, params: &FlockParams) {
        let mut push = Vec2::ZERO;

        if self.position.x < params.wall_margin {
            push.x = params.max_speed;
        } else if self.position.x > params.width - params.wall_margin {
            push.x = -params.max_speed;
        }

        if self.position.y < params.wall_margin {
            push.y = params.max_speed;
        } else if self.position.y > params.height - params.wall_margin {
            push.y = -params.max_speed;
        }

        if push.length() > 0.0 {
            let steer = push.normalize() * params.max_speed - self.velocity;
            self.velocity += math::limit(steer, params.max_force_wall);
        }
    }

    // Single pass over every other boid, accumulating the alignment and
    // cohesion sums (one shared neighbor counter) and the separation sum
    // (its own counter). `index` is this boid's slot in `boids`, so the
    // self-check is by index rather than identity.
    pub fn compute_behaviors(
        &self,
        index: usize,
        boids: &[Boid],
        params: &FlockParams,
    ) -> (Vec2, Vec2, Vec2) {
        let mut align_sum = Vec2::ZERO;
        let mut cohesion_sum = Vec2::ZERO;
        let mut separation_sum = Vec2::ZERO;
        let mut neighbor_total = 0;
        let mut separation_total = 0;

        for (i, other) in boids.iter().enumerate() {
            if i == index {
                continue;
            }

            let distance = self.position.distance(other.position);

            if distance < params.neighbor_radius {
                align_sum += other.velocity;
                cohesion_sum += other.position;
                neighbor_total += 1;
            }

            // A coincident pair has no defined away-direction and
            // contributes nothing to separation
            if distance < params.avoid_radius && distance != 0.0 {
                separation_sum += (self.position - other.position) / distance;
                separation_total += 1;
            }
        }

        let alignment = self.calculate_steering(align_sum, neighbor_total, true, false, params);
        let cohesion = self.calculate_steering(cohesion_sum, neighbor_total, false, true, params);
        let separation =
            self.calculate_steering(separation_sum, separation_total, true, false, params);

        (alignment, cohesion, separation)
    }

    // Turn an accumulated neighborhood sum into a bounded steering force:
    // take the mean, re-express it relative to our position for cohesion,
    // normalize to a max_speed desired velocity for alignment/separation,
    // then Reynolds steering = desired - velocity, clamped to max_force.
    fn calculate_steering(
        &self,
        sum: Vec2,
        total: usize,
        normalize: bool,
        subtract_pos: bool,
        params: &FlockParams,
    ) -> Vec2 {
        if total == 0 {
            return Vec2::ZERO;
        }

        let mut steer = sum / total as f32;
        if subtract_pos {
            steer -= self.position;
        }
        if normalize {
            steer = steer.normalize_or_zero() * params.max_speed;
        }
        steer -= self.velocity;
        math::limit(steer, params.max_force)
    }

    // Integrate one tick: each contribution is pre-scaled by max_force, the
    // combined velocity is capped at max_speed, then position advances
    pub fn update(&mut self, behaviors: (Vec2, Vec2, Vec2), params: &FlockParams) {
        let (alignment, cohesion, separation) = behaviors;

        self.velocity += (alignment + cohesion + separation) * params.max_force;
        self.velocity = math::limit(self.velocity, params.max_speed);
        self.position += self.velocity;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> FlockParams {
        FlockParams::default()
    }

    fn boid_at(x: f32, y: f32, vx: f32, vy: f32) -> Boid {
        Boid {
            position: Vec2::new(x, y),
            velocity: Vec2::new(vx, vy),
        }
    }

    #[test]
    fn empty_neighborhood_gives_zero_contributions() {
        let params = params();
        // Two boids far outside each other's radii
        let boids = vec![boid_at(100.0, 100.0, 1.0, 0.0), boid_at(700.0, 500.0, 0.0, 1.0)];

        let (alignment, cohesion, separation) = boids[0].compute_behaviors(0, &boids, &params);
        assert_eq!(alignment, Vec2::ZERO);
        assert_eq!(cohesion, Vec2::ZERO);
        assert_eq!(separation, Vec2::ZERO);
    }

    #[test]
    fn tick_without_neighbors_is_pure_integration() {
        let params = params();
        let mut boid = boid_at(400.0, 300.0, 3.0, -2.0);
        let before_velocity = boid.velocity;
        let before_position = boid.position;

        boid.update((Vec2::ZERO, Vec2::ZERO, Vec2::ZERO), &params);

        assert_eq!(boid.velocity, before_velocity);
        assert_eq!(boid.position, before_position + before_velocity);
    }

    #[test]
    fn coincident_pair_has_zero_separation() {
        let params = params();
        let boids = vec![boid_at(200.0, 200.0, 1.0, 0.0), boid_at(200.0, 200.0, -1.0, 0.0)];

        let (_, _, separation_a) = boids[0].compute_behaviors(0, &boids, &params);
        let (_, _, separation_b) = boids[1].compute_behaviors(1, &boids, &params);
        assert_eq!(separation_a, Vec2::ZERO);
        assert_eq!(separation_b, Vec2::ZERO);
    }

    #[test]
    fn each_contribution_clamps_to_max_force() {
        let params = params();
        // A tight cluster produces large raw sums in every behavior
        let boids = vec![
            boid_at(300.0, 300.0, 19.0, 0.0),
            boid_at(305.0, 300.0, -19.0, 3.0),
            boid_at(300.0, 304.0, 0.0, -19.0),
            boid_at(296.0, 297.0, 12.0, 12.0),
        ];

        for (i, boid) in boids.iter().enumerate() {
            let (alignment, cohesion, separation) = boid.compute_behaviors(i, &boids, &params);
            assert!(alignment.length() <= params.max_force + 1e-4);
            assert!(cohesion.length() <= params.max_force + 1e-4);
            assert!(separation.length() <= params.max_force + 1e-4);
        }
    }

    #[test]
    fn neighbors_inside_radius_produce_alignment_and_cohesion() {
        let params = params();
        let boids = vec![boid_at(300.0, 300.0, 0.0, 0.0), boid_at(320.0, 300.0, 0.0, 5.0)];

        let (alignment, cohesion, _) = boids[0].compute_behaviors(0, &boids, &params);
        assert!(alignment.length() > 0.0);
        assert!(cohesion.length() > 0.0);
    }

    #[test]
    fn zero_neighbor_radius_disables_alignment_and_cohesion() {
        let params = FlockParams {
            neighbor_radius: 0.0,
            ..FlockParams::default()
        };
        let boids = vec![boid_at(300.0, 300.0, 0.0, 0.0), boid_at(310.0, 300.0, 0.0, 5.0)];

        let (alignment, cohesion, separation) = boids[0].compute_behaviors(0, &boids, &params);
        assert_eq!(alignment, Vec2::ZERO);
        assert_eq!(cohesion, Vec2::ZERO);
        // Separation still sees the close neighbor
        assert!(separation.length() > 0.0);
    }

    #[test]
    fn wall_avoidance_pushes_inward_near_the_left_edge() {
        let params = params();
        let mut boid = boid_at(10.0, 300.0, 0.0, 0.0);

        boid.edges(&params);

        assert!(boid.velocity.x > 0.0);
        assert_eq!(boid.velocity.y, 0.0);
    }

    #[test]
    fn wall_avoidance_pushes_inward_near_the_far_corner() {
        let params = params();
        let mut boid = boid_at(795.0, 595.0, 0.0, 0.0);

        boid.edges(&params);

        assert!(boid.velocity.x < 0.0);
        assert!(boid.velocity.y < 0.0);
    }

    #[test]
    fn wall_avoidance_clamps_to_max_force_wall() {
        let params = params();
        let mut boid = boid_at(10.0, 300.0, 0.0, 0.0);

        boid.edges(&params);

        // From rest the full correction is clamped, so the applied delta
        // sits exactly at the wall force limit
        assert!((boid.velocity.length() - params.max_force_wall).abs() < 1e-5);
    }

    #[test]
    fn wall_avoidance_leaves_the_interior_alone() {
        let params = params();
        let mut boid = boid_at(400.0, 300.0, 2.0, 1.0);
        let before = boid.velocity;

        boid.edges(&params);

        assert_eq!(boid.velocity, before);
    }

    #[test]
    fn update_caps_speed_at_max_speed() {
        let params = params();
        let mut boid = boid_at(400.0, 300.0, params.max_speed, params.max_speed);

        let strong = Vec2::new(100.0, 100.0);
        boid.update((strong, strong, strong), &params);

        assert!(boid.velocity.length() <= params.max_speed + 1e-4);
    }
}
