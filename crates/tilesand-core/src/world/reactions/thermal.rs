//! Fire and Ice reactions

use tilesand_simulation::{Material, MaterialStatus};

use super::freeze;
use crate::world::automaton::Automaton;

/// Melted ice: a random-depth, random-facing water cell
fn meltwater(automaton: &mut Automaton) -> Material {
    let life = automaton.rng.pick0123();
    let face_left = automaton.rng.next_bool();
    Material::WATER.with_life(life).with_face_left(face_left)
}

/// Fire boils water into steam and usually goes out
pub fn fire_to_water(
    automaton: &mut Automaton,
    _a: Material,
    _b: Material,
    cid_a: usize,
    cid_b: usize,
) -> bool {
    if automaton.rng.chance256(200) {
        automaton.create_steam(cid_b);
        if automaton.rng.chance256(180) {
            automaton.create_smoke(cid_a, 1);
        }
        return true;
    }
    false
}

pub fn fire_to_acid(
    automaton: &mut Automaton,
    _a: Material,
    _b: Material,
    cid_a: usize,
    cid_b: usize,
) -> bool {
    if automaton.rng.chance256(77) {
        automaton.create_fire(cid_b);
        return true;
    }
    automaton.swap_cells(cid_a, cid_b);
    true
}

pub fn fire_to_plant(
    automaton: &mut Automaton,
    _a: Material,
    b: Material,
    _cid_a: usize,
    cid_b: usize,
) -> bool {
    if automaton.rng.chance256(51) {
        automaton.create_fire(cid_b);
        return true;
    }
    if automaton.rng.chance256(51) {
        automaton.create_steam(cid_b);
        return true;
    }
    if automaton.rng.chance256(51) {
        automaton.create_smoke(cid_b, 1);
        return true;
    }
    automaton.set_cell(cid_b, b.with_status(MaterialStatus::Burned));
    false
}

pub fn fire_to_ice(
    automaton: &mut Automaton,
    _a: Material,
    b: Material,
    cid_a: usize,
    cid_b: usize,
) -> bool {
    if !automaton.rng.chance256(200) {
        return false;
    }
    let life = b.life();
    if life == 0 {
        let water = meltwater(automaton);
        automaton.set_cell_as_processed(cid_b, water);
        if automaton.rng.chance256(100) {
            automaton.create_smoke(cid_a, 1);
        }
    } else {
        automaton.set_cell_as_processed(cid_b, b.with_life(life - 1));
    }
    true
}

pub fn fire_to_ant(
    automaton: &mut Automaton,
    _a: Material,
    _b: Material,
    _cid_a: usize,
    cid_b: usize,
) -> bool {
    automaton.create_smoke(cid_b, 1);
    true
}

/// Fire singes a wasp; a wasp on its last life falls as burned sand
pub fn fire_to_wasp(
    automaton: &mut Automaton,
    _a: Material,
    b: Material,
    cid_a: usize,
    cid_b: usize,
) -> bool {
    let burned = b.with_status(MaterialStatus::Burned);
    automaton.set_cell(cid_b, burned);

    if automaton.rng.chance256(80) {
        let life = burned.life();
        if life > 1 {
            automaton.set_cell_as_processed(cid_b, burned.with_life(life - 1));
        } else {
            automaton.create_sand(cid_b, true);
            if automaton.rng.next_bool() {
                automaton.create_smoke(cid_a, 3);
            }
        }
        return true;
    }
    automaton.swap_cells(cid_a, cid_b);
    true
}

pub fn fire_to_ant_hill(
    automaton: &mut Automaton,
    a: Material,
    _b: Material,
    cid_a: usize,
    cid_b: usize,
) -> bool {
    match automaton.rng.pick4(80, 120, 160) {
        0 => {
            let status = automaton.rng.pick0123();
            let face_left = automaton.rng.next_bool();
            automaton.set_cell_as_processed(
                cid_b,
                Material::FIRE
                    .with_life(3)
                    .with_status_bits(status)
                    .with_face_left(face_left),
            );
            true
        }
        1 => {
            if automaton.rng.next_bool() {
                automaton.create_smoke(cid_b, 3);
            } else {
                automaton.create_sand(cid_b, true);
            }
            true
        }
        // the fire eats its way in
        2 => {
            automaton.set_cell_as_processed(cid_b, a);
            automaton.set_cell(cid_a, Material::EMPTY);
            true
        }
        _ => false,
    }
}

pub fn ice_to_water(
    automaton: &mut Automaton,
    a: Material,
    _b: Material,
    cid_a: usize,
    cid_b: usize,
) -> bool {
    match automaton.rng.pick4(10, 47, 60) {
        0 => {
            let life = u8::from(automaton.rng.next_bool());
            automaton.set_cell_as_processed(cid_b, Material::ICE.with_life(life));
            true
        }
        1 => {
            automaton.swap_cells(cid_a, cid_b);
            true
        }
        2 => {
            let life = a.life();
            if life > 0 {
                automaton.set_cell_as_processed(cid_a, Material::ICE.with_life(life - 1));
            } else {
                automaton.create_water(cid_a);
            }
            true
        }
        _ => false,
    }
}

/// Shared by Seed and Wasp targets: freeze, sink past, or nothing
fn freeze_or_sink(automaton: &mut Automaton, b: Material, cid_a: usize, cid_b: usize) -> bool {
    if b.is_frozen() {
        return false;
    }
    match automaton.rng.pick3(20, 60) {
        0 => {
            freeze(automaton, cid_b, b);
            true
        }
        1 => {
            automaton.swap_cells(cid_a, cid_b);
            true
        }
        _ => false,
    }
}

/// Freeze an unfrozen neighbor with chance `p/256`
fn freeze_neighbor(automaton: &mut Automaton, b: Material, cid_b: usize, p: u8) -> bool {
    if b.is_frozen() || !automaton.rng.chance256(p) {
        return false;
    }
    freeze(automaton, cid_b, b);
    true
}

pub fn ice_to_seed(
    automaton: &mut Automaton,
    _a: Material,
    b: Material,
    cid_a: usize,
    cid_b: usize,
) -> bool {
    freeze_or_sink(automaton, b, cid_a, cid_b)
}

pub fn ice_to_root(
    automaton: &mut Automaton,
    _a: Material,
    b: Material,
    _cid_a: usize,
    cid_b: usize,
) -> bool {
    freeze_neighbor(automaton, b, cid_b, 12)
}

pub fn ice_to_plant(
    automaton: &mut Automaton,
    _a: Material,
    b: Material,
    _cid_a: usize,
    cid_b: usize,
) -> bool {
    freeze_neighbor(automaton, b, cid_b, 14)
}

pub fn ice_to_flower(
    automaton: &mut Automaton,
    _a: Material,
    b: Material,
    _cid_a: usize,
    cid_b: usize,
) -> bool {
    freeze_neighbor(automaton, b, cid_b, 18)
}

pub fn ice_to_wasp(
    automaton: &mut Automaton,
    _a: Material,
    b: Material,
    cid_a: usize,
    cid_b: usize,
) -> bool {
    freeze_or_sink(automaton, b, cid_a, cid_b)
}

pub fn ice_to_acid(
    automaton: &mut Automaton,
    _a: Material,
    _b: Material,
    cid_a: usize,
    cid_b: usize,
) -> bool {
    if automaton.rng.chance256(20) {
        automaton.swap_cells(cid_a, cid_b);
        return true;
    }
    false
}

pub fn ice_to_fire(
    automaton: &mut Automaton,
    a: Material,
    _b: Material,
    cid_a: usize,
    cid_b: usize,
) -> bool {
    if automaton.rng.chance256(30) {
        automaton.create_smoke(cid_b, 1);
        return true;
    }
    if automaton.rng.chance256(100) {
        let life = a.life();
        if life == 0 {
            let water = meltwater(automaton);
            automaton.set_cell_as_processed(cid_a, water);
        } else {
            automaton.set_cell_as_processed(cid_a, a.with_life(life - 1));
        }
        return true;
    }
    false
}

/// Ice condenses steam into more ice, or falls through it
pub fn ice_to_steam(
    automaton: &mut Automaton,
    _a: Material,
    _b: Material,
    cid_a: usize,
    cid_b: usize,
) -> bool {
    if automaton.rng.chance256(20) {
        let life = u8::from(automaton.rng.next_bool());
        automaton.set_cell_as_processed(cid_b, Material::ICE.with_life(life));
        return true;
    }
    if automaton.rng.chance256(200) {
        automaton.swap_cells(cid_a, cid_b);
        return true;
    }
    false
}

pub fn ice_to_sand(
    automaton: &mut Automaton,
    _a: Material,
    b: Material,
    _cid_a: usize,
    cid_b: usize,
) -> bool {
    if automaton.rng.chance256(80) {
        freeze(automaton, cid_b, b);
        return true;
    }
    false
}
