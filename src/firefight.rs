/*
 * Firefight Simulation Module
 *
 * This module owns the firefighters and the fire set and advances both one
 * tick at a time. Every agent decides against the same pre-tick snapshot of
 * the fires, extinguish decrements land on the live fires one writer at a
 * time, and spent fires are culled at the end of the tick with surviving
 * indices remapped into agent targets.
 */

use rand::Rng;

use crate::config::FirefightParams;
use crate::fire::Fire;
use crate::firefighter::{Activity, Firefighter};

pub struct FirefightSimulation {
    params: FirefightParams,
    firefighters: Vec<Firefighter>,
    fires: Vec<Fire>,
}

impl FirefightSimulation {
    pub fn new(params: FirefightParams, rng: &mut impl Rng) -> Self {
        let firefighters = (0..params.num_boids)
            .map(|_| Firefighter::new(&params, rng))
            .collect();
        let fires = (0..params.num_fires)
            .map(|_| Fire::new(&params, rng))
            .collect();
        log::info!(
            "spawned {} firefighters and {} fires in a {}x{} world",
            params.num_boids,
            params.num_fires,
            params.width,
            params.height
        );
        Self {
            params,
            firefighters,
            fires,
        }
    }

    pub fn params(&self) -> &FirefightParams {
        &self.params
    }

    pub fn params_mut(&mut self) -> &mut FirefightParams {
        &mut self.params
    }

    pub fn firefighters(&self) -> &[Firefighter] {
        &self.firefighters
    }

    pub fn fires(&self) -> &[Fire] {
        &self.fires
    }

    // Light one additional fire
    pub fn spawn_fire(&mut self, rng: &mut impl Rng) {
        self.fires.push(Fire::new(&self.params, rng));
    }

    // Re-randomize all agents and fires at the configured counts
    pub fn reset(&mut self, rng: &mut impl Rng) {
        let params = self.params.clone();
        self.firefighters.clear();
        self.firefighters
            .extend((0..params.num_boids).map(|_| Firefighter::new(&params, rng)));
        self.fires.clear();
        self.fires
            .extend((0..params.num_fires).map(|_| Fire::new(&params, rng)));
    }

    // Advance one tick: snapshot the fires, update every agent, apply the
    // extinguish decrements, wrap positions, then cull what burned out
    pub fn tick(&mut self) {
        let snapshot = self.fires.clone();

        for fighter in &mut self.firefighters {
            match fighter.activity {
                Activity::Seeking => {
                    if let Some(hit) = fighter.seek(&snapshot, &self.params) {
                        let fire = &mut self.fires[hit];
                        fire.size = (fire.size - self.params.fire_shrink_amount).max(0.0);
                    }
                }
                Activity::ReturningToBase => fighter.return_to_base(&self.params),
            }
            fighter.wrap(&self.params);
        }

        self.cull_fires();
    }

    // Drop fires with nothing left to burn and fix up the index targets
    // that pointed into the old vector
    fn cull_fires(&mut self) {
        if !self.fires.iter().any(Fire::is_out) {
            return;
        }

        let mut remap = vec![None; self.fires.len()];
        let mut next = 0;
        for (i, fire) in self.fires.iter().enumerate() {
            if fire.is_out() {
                log::debug!("fire at ({:.0}, {:.0}) burned out", fire.position.x, fire.position.y);
            } else {
                remap[i] = Some(next);
                next += 1;
            }
        }

        self.fires.retain(|fire| !fire.is_out());

        for fighter in &mut self.firefighters {
            fighter.target = fighter.target.and_then(|i| remap[i]);
        }
    }
}
