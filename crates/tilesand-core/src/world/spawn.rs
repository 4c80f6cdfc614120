//! Spawn helpers shared by reactions and processors
//!
//! Each helper draws its randomness from the simulation ring in a fixed order
//! and writes through `set_cell_as_processed`.

use tilesand_simulation::{Material, MaterialStatus};

use super::automaton::Automaton;
use super::tiles::{WORLD_HEIGHT, WORLD_WIDTH};

impl Automaton {
    pub fn create_smoke(&mut self, cid: usize, life: u8) {
        let face_left = self.rng.next_bool();
        self.set_cell_as_processed(cid, Material::SMOKE.with_life(life).with_face_left(face_left));
    }

    pub fn create_steam(&mut self, cid: usize) {
        let life = self.rng.pick4(10, 20, 30);
        let face_left = self.rng.next_bool();
        self.set_cell_as_processed(cid, Material::STEAM.with_life(life).with_face_left(face_left));
    }

    /// Full-strength fire with a random flicker status
    pub fn create_fire(&mut self, cid: usize) {
        let face_left = self.rng.next_bool();
        let status = self.rng.pick0123();
        self.set_cell_as_processed(
            cid,
            Material::FIRE
                .with_life(3)
                .with_face_left(face_left)
                .with_status_bits(status),
        );
    }

    pub fn create_water(&mut self, cid: usize) {
        let face_left = self.rng.next_bool();
        self.set_cell_as_processed(cid, Material::WATER.with_face_left(face_left));
    }

    pub fn create_sand(&mut self, cid: usize, burned: bool) {
        let life = self.rng.pick0123();
        let penetrable = self.rng.chance256(170);
        let mut sand = Material::SAND.with_life(life).with_is_penetrable(penetrable);
        if burned {
            sand = sand.with_status(MaterialStatus::Burned);
        }
        self.set_cell_as_processed(cid, sand);
    }

    pub fn create_root(&mut self, cid: usize) {
        let life = u8::from(self.rng.next_bool());
        self.set_cell_as_processed(cid, Material::ROOT.with_life(life));
    }

    /// Only plants away from the world edge may ever bloom
    pub fn create_plant(&mut self, cid: usize) {
        let life = 1 + u8::from(self.rng.next_bool());
        let penetrable = self.rng.next_bool();
        let (x, y) = self.cell_pos(cid);
        let on_edge = x == 0 || y == 0 || x == WORLD_WIDTH - 1 || y == WORLD_HEIGHT - 1;
        let can_bloom = !on_edge && self.rng.chance256(13);
        self.set_cell_as_processed(
            cid,
            Material::PLANT
                .with_life(life)
                .with_is_penetrable(penetrable)
                .with_can_bloom(can_bloom),
        );
    }

    pub fn create_ant_hill(&mut self, cid: usize) {
        let life = self.rng.pick0123();
        let penetrable = self.rng.next_bool();
        self.set_cell_as_processed(
            cid,
            Material::ANT_HILL.with_life(life).with_is_penetrable(penetrable),
        );
    }

    /// Seed with a random life, as dropped by flowers and wilting plants
    pub fn create_seed(&mut self, cid: usize) {
        let life = self.rng.pick0123();
        self.set_cell_as_processed(cid, Material::SEED.with_life(life));
    }
}
