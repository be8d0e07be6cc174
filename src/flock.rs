/*
 * Flock Simulation Module
 *
 * This module owns the boid collection and advances it one tick at a time.
 * Every boid's neighborhood scan reads a frozen snapshot of the previous
 * tick's state, so update order within a tick cannot leak into behavior and
 * the optional parallel path sees no concurrent writes.
 */

use rand::Rng;
use rayon::prelude::*;

use crate::boid::Boid;
use crate::config::FlockParams;

pub struct FlockSimulation {
    params: FlockParams,
    boids: Vec<Boid>,
}

impl FlockSimulation {
    pub fn new(params: FlockParams, rng: &mut impl Rng) -> Self {
        let boids = (0..params.num_boids)
            .map(|_| Boid::new(&params, rng))
            .collect();
        log::info!(
            "spawned {} boids in a {}x{} world",
            params.num_boids,
            params.width,
            params.height
        );
        Self { params, boids }
    }

    pub fn params(&self) -> &FlockParams {
        &self.params
    }

    pub fn params_mut(&mut self) -> &mut FlockParams {
        &mut self.params
    }

    pub fn boids(&self) -> &[Boid] {
        &self.boids
    }

    // Re-randomize the whole flock at the configured count
    pub fn reset(&mut self, rng: &mut impl Rng) {
        let params = self.params.clone();
        self.boids.clear();
        self.boids
            .extend((0..params.num_boids).map(|_| Boid::new(&params, rng)));
    }

    // Adjust the population to the configured count, keeping existing boids
    pub fn resize(&mut self, rng: &mut impl Rng) {
        let params = self.params.clone();
        if self.boids.len() > params.num_boids {
            self.boids.truncate(params.num_boids);
        } else {
            let missing = params.num_boids - self.boids.len();
            self.boids
                .extend((0..missing).map(|_| Boid::new(&params, rng)));
        }
    }

    // Advance the whole flock one tick. Per boid the order is: wall
    // avoidance, behavior computation against the snapshot, integration.
    pub fn tick(&mut self) {
        let snapshot = self.boids.clone();
        let params = &self.params;

        if params.parallel {
            self.boids.par_iter_mut().enumerate().for_each(|(i, boid)| {
                boid.edges(params);
                let behaviors = boid.compute_behaviors(i, &snapshot, params);
                boid.update(behaviors, params);
            });
        } else {
            for (i, boid) in self.boids.iter_mut().enumerate() {
                boid.edges(params);
                let behaviors = boid.compute_behaviors(i, &snapshot, params);
                boid.update(behaviors, params);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn small_params() -> FlockParams {
        FlockParams {
            num_boids: 40,
            ..FlockParams::default()
        }
    }

    #[test]
    fn population_is_stable_across_ticks() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut sim = FlockSimulation::new(small_params(), &mut rng);

        for _ in 0..50 {
            sim.tick();
        }

        assert_eq!(sim.boids().len(), 40);
    }

    #[test]
    fn speed_stays_capped_for_every_boid_on_every_tick() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut sim = FlockSimulation::new(small_params(), &mut rng);
        let max_speed = sim.params().max_speed;

        for _ in 0..100 {
            sim.tick();
            for boid in sim.boids() {
                assert!(boid.velocity.length() <= max_speed + 1e-4);
            }
        }
    }

    #[test]
    fn same_seed_reproduces_the_same_run() {
        let mut rng_a = StdRng::seed_from_u64(7);
        let mut rng_b = StdRng::seed_from_u64(7);
        let mut sim_a = FlockSimulation::new(small_params(), &mut rng_a);
        let mut sim_b = FlockSimulation::new(small_params(), &mut rng_b);

        for _ in 0..25 {
            sim_a.tick();
            sim_b.tick();
        }

        for (a, b) in sim_a.boids().iter().zip(sim_b.boids()) {
            assert_eq!(a.position, b.position);
            assert_eq!(a.velocity, b.velocity);
        }
    }

    #[test]
    fn parallel_tick_matches_sequential_tick() {
        let mut rng_a = StdRng::seed_from_u64(9);
        let mut rng_b = StdRng::seed_from_u64(9);
        let mut sequential = FlockSimulation::new(small_params(), &mut rng_a);
        let mut parallel = FlockSimulation::new(
            FlockParams {
                parallel: true,
                ..small_params()
            },
            &mut rng_b,
        );

        for _ in 0..10 {
            sequential.tick();
            parallel.tick();
        }

        for (a, b) in sequential.boids().iter().zip(parallel.boids()) {
            assert_eq!(a.position, b.position);
            assert_eq!(a.velocity, b.velocity);
        }
    }

    #[test]
    fn resize_grows_and_shrinks_to_the_configured_count() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut sim = FlockSimulation::new(small_params(), &mut rng);

        sim.params_mut().num_boids = 10;
        sim.resize(&mut rng);
        assert_eq!(sim.boids().len(), 10);

        sim.params_mut().num_boids = 60;
        sim.resize(&mut rng);
        assert_eq!(sim.boids().len(), 60);
    }
}
