//! Cave generation
//!
//! Noise at a given density, smoothed by five rounds of a 7×7 majority vote.
//! A three-cell margin around the world stands in for the outside: it is solid
//! on closed edges and open otherwise, so open edges let caves run off the map.

use log::{info, warn};
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;
use serde::{Deserialize, Serialize};
use tilesand_simulation::{Material, MaterialKind};

use super::automaton::Automaton;
use super::brush::BrushActions;
use super::tiles::{WORLD_HEIGHT, WORLD_WIDTH};

const MARGIN: usize = 3;
const ROUNDS: usize = 5;
/// Walls needed among the 48 neighbors of the 7×7 window
const WALL_VOTES: usize = 24;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorOptions {
    /// Chance of each cell starting as wall
    pub density: f64,
    pub top_closed: bool,
    pub bottom_closed: bool,
    pub left_closed: bool,
    pub right_closed: bool,
    /// Fixed layout seed; `None` draws from the automaton's brush RNG
    pub seed: Option<u64>,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            density: 0.485,
            top_closed: false,
            bottom_closed: false,
            left_closed: false,
            right_closed: false,
            seed: None,
        }
    }
}

impl GeneratorOptions {
    /// All four edges closed
    pub fn closed(density: f64) -> Self {
        Self {
            density,
            top_closed: true,
            bottom_closed: true,
            left_closed: true,
            right_closed: true,
            seed: None,
        }
    }
}

pub struct CaveGenerator {
    options: GeneratorOptions,
    density: f64,
}

impl CaveGenerator {
    pub fn new(options: GeneratorOptions) -> Self {
        let density = if options.density.is_nan() {
            0.0
        } else {
            options.density.clamp(0.0, 1.0)
        };
        if density != options.density {
            warn!("Cave density {} clamped to {}", options.density, density);
        }
        Self { options, density }
    }

    pub fn density(&self) -> f64 {
        self.density
    }

    /// Row-major wall map of the world, `true` for wall
    pub fn carve(&self, rng: &mut impl Rng) -> Vec<bool> {
        let w = WORLD_WIDTH + 2 * MARGIN;
        let h = WORLD_HEIGHT + 2 * MARGIN;

        let mut current = vec![false; w * h];
        for y in 0..h {
            for x in 0..w {
                current[y * w + x] = if self.in_margin(x, y, w, h) {
                    self.margin_is_wall(x, y, w, h)
                } else {
                    rng.r#gen::<f64>() < self.density
                };
            }
        }

        // the margin never changes, so both buffers start from the same map
        let mut next = current.clone();
        for _ in 0..ROUNDS {
            for y in MARGIN..h - MARGIN {
                for x in MARGIN..w - MARGIN {
                    let mut walls = 0;
                    for ny in y - MARGIN..=y + MARGIN {
                        for nx in x - MARGIN..=x + MARGIN {
                            if (nx != x || ny != y) && current[ny * w + nx] {
                                walls += 1;
                            }
                        }
                    }
                    next[y * w + x] = walls >= WALL_VOTES;
                }
            }
            std::mem::swap(&mut current, &mut next);
        }

        let mut walls = Vec::with_capacity(WORLD_WIDTH * WORLD_HEIGHT);
        for y in 0..WORLD_HEIGHT {
            let row = (y + MARGIN) * w + MARGIN;
            walls.extend_from_slice(&current[row..row + WORLD_WIDTH]);
        }
        walls
    }

    fn in_margin(&self, x: usize, y: usize, w: usize, h: usize) -> bool {
        x < MARGIN || y < MARGIN || x >= w - MARGIN || y >= h - MARGIN
    }

    fn margin_is_wall(&self, x: usize, y: usize, w: usize, h: usize) -> bool {
        let o = &self.options;
        (x < MARGIN && o.left_closed)
            || (x >= w - MARGIN && o.right_closed)
            || (y < MARGIN && o.top_closed)
            || (y >= h - MARGIN && o.bottom_closed)
    }
}

impl Automaton {
    /// Replace the whole world with a freshly carved cave
    ///
    /// Walls are painted with the stone brush, so they get the same
    /// penetrability and exposure aging as hand-painted stone. Every tile is
    /// woken afterwards.
    pub fn generate(&mut self, options: &GeneratorOptions) {
        let generator = CaveGenerator::new(options.clone());
        let walls = match options.seed {
            Some(seed) => generator.carve(&mut Xoshiro256StarStar::seed_from_u64(seed)),
            None => generator.carve(&mut self.brush_rng),
        };

        let mut stone = Vec::new();
        for (cid, wall) in walls.iter().enumerate() {
            if *wall {
                let (x, y) = self.cell_pos(cid);
                stone.push(glam::IVec2::new(x as i32, y as i32));
            } else {
                self.set_cell(cid, Material::EMPTY);
            }
        }
        self.paint_points(&stone, BrushActions::for_kind(MaterialKind::Stone));

        self.clear_processed();
        self.activate_all();
        info!(
            "Generated cave: density {:.3}, {} of {} cells stone",
            generator.density(),
            stone.len(),
            walls.len()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn carve(options: GeneratorOptions) -> Vec<bool> {
        CaveGenerator::new(options).carve(&mut Xoshiro256StarStar::seed_from_u64(1))
    }

    #[test]
    fn test_default_options() {
        let options = GeneratorOptions::default();
        assert!((options.density - 0.485).abs() < f64::EPSILON);
        assert!(!options.top_closed && !options.left_closed);
        assert_eq!(options.seed, None);
    }

    #[test]
    fn test_empty_density_carves_nothing() {
        let walls = carve(GeneratorOptions {
            density: 0.0,
            ..GeneratorOptions::default()
        });
        assert_eq!(walls.len(), WORLD_WIDTH * WORLD_HEIGHT);
        assert!(walls.iter().all(|w| !w));
    }

    #[test]
    fn test_full_density_closed_is_solid() {
        let walls = carve(GeneratorOptions::closed(1.0));
        assert!(walls.iter().all(|w| *w));
    }

    #[test]
    fn test_full_density_open_erodes_corners() {
        let walls = carve(GeneratorOptions {
            density: 1.0,
            ..GeneratorOptions::default()
        });
        assert!(!walls[0]);
        assert!(walls[128 * WORLD_WIDTH + 128]);
        // mid-edge cells see 27 walls and hold
        assert!(walls[128]);
    }

    #[test]
    fn test_closed_edge_keeps_walls_along_it() {
        let walls = carve(GeneratorOptions {
            density: 0.0,
            top_closed: true,
            ..GeneratorOptions::default()
        });
        // a 3-deep solid margin gives row 0 only 21 walls, short of the vote
        assert!(walls.iter().all(|w| !w));

        let walls = carve(GeneratorOptions {
            density: 0.6,
            top_closed: true,
            ..GeneratorOptions::default()
        });
        let top = walls[..WORLD_WIDTH].iter().filter(|w| **w).count();
        let middle = walls[128 * WORLD_WIDTH..129 * WORLD_WIDTH]
            .iter()
            .filter(|w| **w)
            .count();
        assert!(top >= middle);
    }

    #[test]
    fn test_density_is_clamped() {
        let generator = CaveGenerator::new(GeneratorOptions {
            density: 3.0,
            ..GeneratorOptions::default()
        });
        assert_eq!(generator.density(), 1.0);

        let generator = CaveGenerator::new(GeneratorOptions {
            density: f64::NAN,
            ..GeneratorOptions::default()
        });
        assert_eq!(generator.density(), 0.0);
    }

    #[test]
    fn test_fixed_seed_is_reproducible() {
        let options = GeneratorOptions {
            seed: Some(42),
            ..GeneratorOptions::default()
        };
        let mut a = Automaton::seeded(1);
        let mut b = Automaton::seeded(2);
        a.generate(&options);
        b.generate(&options);
        let kinds = |automaton: &Automaton| -> Vec<MaterialKind> {
            automaton.materials().iter().map(|m| m.kind()).collect()
        };
        assert_eq!(kinds(&a), kinds(&b));
    }

    #[test]
    fn test_generate_fills_stone_and_wakes_everything() {
        let mut automaton = Automaton::seeded(9);
        automaton.apply_brush(MaterialKind::Water, 10, 10, 5);
        automaton.generate(&GeneratorOptions::closed(1.0));
        assert!(
            automaton
                .materials()
                .iter()
                .all(|m| m.is_kind(MaterialKind::Stone))
        );
        assert_eq!(automaton.wake_tiles().count(), 64);
        let color = automaton.palette().color_of(automaton.material(0));
        assert_eq!(&automaton.pixels()[..4], &color);
    }

    #[test]
    fn test_generate_open_world_is_empty() {
        let mut automaton = Automaton::seeded(9);
        automaton.apply_brush(MaterialKind::Sand, 100, 100, 9);
        automaton.generate(&GeneratorOptions {
            density: 0.0,
            ..GeneratorOptions::default()
        });
        assert!(automaton.materials().iter().all(|m| m.is_empty()));
    }
}
