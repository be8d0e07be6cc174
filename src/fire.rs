/*
 * Fire Module
 *
 * A fire is a depletable resource: a fixed position and a remaining size.
 * Firefighters shrink it; the owning simulation removes it once nothing is
 * left to burn.
 */

use glam::Vec2;
use rand::Rng;

use crate::config::FirefightParams;

// Fires spawn inset from the world edge so agents can surround them
const SPAWN_MARGIN: f32 = 100.0;

#[derive(Clone, Debug)]
pub struct Fire {
    pub position: Vec2,
    pub size: f32,
}

impl Fire {
    // Spawn at a random interior position with a size drawn from the
    // configured range
    pub fn new(params: &FirefightParams, rng: &mut impl Rng) -> Self {
        let inset_x = SPAWN_MARGIN.min(params.width / 4.0);
        let inset_y = SPAWN_MARGIN.min(params.height / 4.0);

        Self {
            position: Vec2::new(
                rng.gen_range(inset_x..params.width - inset_x),
                rng.gen_range(inset_y..params.height - inset_y),
            ),
            size: rng.gen_range(params.fire_size_min..=params.fire_size_max),
        }
    }

    pub fn is_out(&self) -> bool {
        self.size <= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn spawns_inside_the_world_with_a_size_in_range() {
        let params = FirefightParams::default();
        let mut rng = StdRng::seed_from_u64(11);

        for _ in 0..100 {
            let fire = Fire::new(&params, &mut rng);
            assert!(fire.position.x >= 0.0 && fire.position.x <= params.width);
            assert!(fire.position.y >= 0.0 && fire.position.y <= params.height);
            assert!(fire.size >= params.fire_size_min && fire.size <= params.fire_size_max);
            assert!(!fire.is_out());
        }
    }

    #[test]
    fn a_fully_shrunk_fire_is_out() {
        let fire = Fire {
            position: Vec2::new(10.0, 10.0),
            size: 0.0,
        };
        assert!(fire.is_out());
    }
}
