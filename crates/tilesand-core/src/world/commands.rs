//! Whole-world commands issued between ticks

use log::debug;
use rand::Rng;
use tilesand_simulation::Material;

use super::automaton::Automaton;
use super::tiles::{CELL_COUNT, WORLD_HEIGHT, WORLD_WIDTH};

impl Automaton {
    /// Set every non-empty cell on fire
    pub fn erase(&mut self) {
        let mut burning = 0;
        for cid in 0..CELL_COUNT {
            if self.materials[cid].is_empty() {
                continue;
            }
            let face_left = self.brush_rng.gen_bool(0.5);
            let status = self.brush_rng.gen_range(0..4);
            self.set_cell(
                cid,
                Material::FIRE
                    .with_life(3)
                    .with_face_left(face_left)
                    .with_status_bits(status),
            );
            burning += 1;
        }
        self.activate_all();
        debug!("Erase: {} cells set on fire", burning);
    }

    /// Empty the world outright
    pub fn clear(&mut self) {
        for cid in 0..CELL_COUNT {
            self.set_cell(cid, Material::EMPTY);
        }
        self.clear_processed();
        self.activate_all();
        debug!("Cleared world");
    }

    /// `(x, y)` moves to `(255 - y, x)`
    pub fn rotate_clockwise(&mut self) {
        self.remap(|x, y| (WORLD_HEIGHT - 1 - y, x));
        debug!("Rotated clockwise");
    }

    /// `(x, y)` moves to `(y, 255 - x)`
    pub fn rotate_counter_clockwise(&mut self) {
        self.remap(|x, y| (y, WORLD_WIDTH - 1 - x));
        debug!("Rotated counter-clockwise");
    }

    /// Move every cell and its pixel to `to(x, y)`
    fn remap(&mut self, to: impl Fn(usize, usize) -> (usize, usize)) {
        let mut materials = vec![Material::EMPTY; CELL_COUNT];
        let mut pixels = vec![0; CELL_COUNT * 4];
        for (cid, material) in self.materials.iter().enumerate() {
            let (x, y) = self.cell_pos(cid);
            let (nx, ny) = to(x, y);
            let target = ny * WORLD_WIDTH + nx;
            materials[target] = *material;
            pixels[target * 4..target * 4 + 4].copy_from_slice(&self.pixels()[cid * 4..cid * 4 + 4]);
        }
        self.replace_cells(materials, pixels);
        self.activate_all();
    }

    pub fn pause(&mut self) {
        self.set_paused(true);
        debug!("Paused at tick {}", self.tick());
    }

    /// Resume and wake every tile, since the world may have been edited meanwhile
    pub fn resume(&mut self) {
        self.set_paused(false);
        self.activate_all();
        debug!("Resumed at tick {}", self.tick());
    }

    /// Returns whether the automaton is now paused
    pub fn toggle_pause(&mut self) -> bool {
        if self.is_paused() {
            self.resume();
        } else {
            self.pause();
        }
        self.is_paused()
    }
}
