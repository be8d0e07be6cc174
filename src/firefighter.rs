/*
 * Firefighter Module
 *
 * The task-driven boid. A firefighter carries a water budget, chases the
 * largest burning fire while it has water, and flies home to refill once
 * the budget runs out. Movement is heading-locked: velocity is recomputed
 * from scratch every tick, with no steering budget.
 */

use glam::Vec2;
use rand::Rng;

use crate::config::FirefightParams;
use crate::fire::Fire;
use crate::math;

// Lifecycle state of a firefighter
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Activity {
    Seeking,
    ReturningToBase,
}

#[derive(Clone, Debug)]
pub struct Firefighter {
    pub position: Vec2,
    pub velocity: Vec2,
    pub water: u32,
    // Index into the owning simulation's live fire vector. Re-acquired on
    // every Seeking tick and remapped by the simulation when fires are
    // culled, so it never dangles.
    pub target: Option<usize>,
    pub activity: Activity,
}

impl Firefighter {
    pub fn new(params: &FirefightParams, rng: &mut impl Rng) -> Self {
        Self {
            position: Vec2::new(
                rng.gen_range(0.0..params.width),
                rng.gen_range(0.0..params.height),
            ),
            velocity: Vec2::new(rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0)),
            water: params.water_capacity,
            target: None,
            activity: Activity::Seeking,
        }
    }

    // Index of the largest fire; on ties the first in vector order wins.
    // None when nothing is burning.
    pub fn select_target(fires: &[Fire]) -> Option<usize> {
        let mut best: Option<(usize, f32)> = None;

        for (i, fire) in fires.iter().enumerate() {
            match best {
                Some((_, size)) if fire.size <= size => {}
                _ => best = Some((i, fire.size)),
            }
        }

        best.map(|(i, _)| i)
    }

    // One Seeking step against the pre-tick fire snapshot. Target selection
    // is greedy and repeats every tick, so the agent may switch to a fire
    // that outgrew its current target mid-approach. Returns the index of a
    // fire this agent doused this step, if any.
    pub fn seek(&mut self, snapshot: &[Fire], params: &FirefightParams) -> Option<usize> {
        self.target = Self::select_target(snapshot);

        let Some(target) = self.target else {
            // Nothing burning: hold position until a fire appears
            self.velocity = Vec2::ZERO;
            return None;
        };

        let fire_position = snapshot[target].position;
        self.move_towards(fire_position, params.boid_speed);

        if self.position.distance(fire_position) < params.extinguish_radius {
            self.water -= 1;
            if self.water == 0 {
                self.activity = Activity::ReturningToBase;
            }
            return Some(target);
        }

        None
    }

    // One ReturningToBase step: fly home, refill to capacity once inside
    // the refill radius, then go back to seeking
    pub fn return_to_base(&mut self, params: &FirefightParams) {
        let home = params.home();
        self.move_towards(home, params.boid_speed);

        if self.position.distance(home) < params.refill_radius {
            self.water = params.water_capacity;
            self.activity = Activity::Seeking;
        }
    }

    fn move_towards(&mut self, point: Vec2, speed: f32) {
        self.velocity = math::heading(self.position, point) * speed;
        self.position += self.velocity;
    }

    // Wrap into [0, width) x [0, height)
    pub fn wrap(&mut self, params: &FirefightParams) {
        self.position.x = self.position.x.rem_euclid(params.width);
        self.position.y = self.position.y.rem_euclid(params.height);
    }
}
