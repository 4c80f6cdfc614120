//! Water and Acid reactions

use tilesand_simulation::{Material, MaterialStatus};

use crate::world::automaton::Automaton;

pub fn water_to_acid(
    automaton: &mut Automaton,
    _a: Material,
    _b: Material,
    cid_a: usize,
    cid_b: usize,
) -> bool {
    match automaton.rng.pick3(15, 30) {
        0 => {
            if automaton.rng.next_bool() {
                automaton.create_smoke(cid_b, 1);
            }
            automaton.create_steam(cid_a);
            true
        }
        1 => {
            automaton.swap_cells(cid_a, cid_b);
            true
        }
        _ => false,
    }
}

/// Water douses fire, often boiling off in the process
pub fn water_to_fire(
    automaton: &mut Automaton,
    _a: Material,
    _b: Material,
    cid_a: usize,
    cid_b: usize,
) -> bool {
    if automaton.rng.chance256(200) {
        automaton.create_smoke(cid_b, 1);
        if automaton.rng.chance256(150) {
            automaton.create_steam(cid_a);
        }
        return true;
    }
    false
}

pub fn water_to_ice(
    automaton: &mut Automaton,
    _a: Material,
    b: Material,
    cid_a: usize,
    cid_b: usize,
) -> bool {
    match automaton.rng.pick4(11, 19, 35) {
        // the water freezes
        0 => {
            let life = u8::from(automaton.rng.next_bool());
            automaton.set_cell_as_processed(cid_a, Material::ICE.with_life(life));
            true
        }
        1 => {
            automaton.swap_cells(cid_a, cid_b);
            true
        }
        // the ice melts a little
        2 => {
            let life = b.life();
            if life > 0 {
                automaton.set_cell_as_processed(cid_b, Material::ICE.with_life(life - 1));
            } else {
                automaton.create_water(cid_b);
            }
            true
        }
        _ => false,
    }
}

pub fn water_to_ant(
    automaton: &mut Automaton,
    _a: Material,
    _b: Material,
    cid_a: usize,
    cid_b: usize,
) -> bool {
    if automaton.rng.chance256(32) {
        automaton.swap_cells(cid_a, cid_b);
        return true;
    }
    false
}

/// Water washes an ant hill away
pub fn water_to_ant_hill(
    automaton: &mut Automaton,
    a: Material,
    _b: Material,
    cid_a: usize,
    cid_b: usize,
) -> bool {
    if automaton.rng.chance256(200) {
        return false;
    }
    automaton.set_cell_as_processed(cid_b, a);
    automaton.set_cell_as_processed(cid_a, Material::EMPTY);
    true
}

/// Water slowly erodes porous stone into sand
pub fn water_to_stone(
    automaton: &mut Automaton,
    _a: Material,
    b: Material,
    cid_a: usize,
    cid_b: usize,
) -> bool {
    if b.is_penetrable() && automaton.rng.chance256(2) {
        let burned = automaton.rng.next_bool();
        automaton.create_sand(cid_b, burned);
        automaton.swap_cells(cid_a, cid_b);
        return true;
    }
    false
}

pub fn acid_to_sand(
    automaton: &mut Automaton,
    _a: Material,
    b: Material,
    cid_a: usize,
    cid_b: usize,
) -> bool {
    if automaton.rng.chance256(10) {
        automaton.create_smoke(cid_b, 1);
        if automaton.rng.chance256(128) {
            automaton.create_smoke(cid_a, 1);
        }
        return true;
    }
    automaton.set_cell(cid_b, b.with_status(MaterialStatus::Acidic));
    true
}

pub fn acid_to_stone(
    automaton: &mut Automaton,
    _a: Material,
    b: Material,
    cid_a: usize,
    cid_b: usize,
) -> bool {
    if b.is_penetrable() && automaton.rng.chance256(10) {
        automaton.create_smoke(cid_a, 1);
        automaton.create_smoke(cid_b, 1);
        return true;
    }
    automaton.set_cell(cid_b, b.with_status(MaterialStatus::Acidic));
    true
}

pub fn acid_to_water(
    automaton: &mut Automaton,
    _a: Material,
    _b: Material,
    cid_a: usize,
    cid_b: usize,
) -> bool {
    match automaton.rng.pick3(15, 220) {
        0 => {
            if automaton.rng.next_bool() {
                automaton.create_smoke(cid_a, 1);
            }
            automaton.create_steam(cid_b);
            true
        }
        1 => {
            automaton.swap_cells(cid_a, cid_b);
            true
        }
        _ => false,
    }
}

pub fn acid_to_seed(
    automaton: &mut Automaton,
    _a: Material,
    b: Material,
    cid_a: usize,
    cid_b: usize,
) -> bool {
    match automaton.rng.pick3(1, 10) {
        0 => {
            if automaton.rng.chance256(60) {
                automaton.create_smoke(cid_a, 1);
            }
            if automaton.rng.next_bool() {
                automaton.create_smoke(cid_b, 1);
            } else {
                automaton.create_steam(cid_b);
            }
            true
        }
        1 => {
            // the seed floats up through the acid
            automaton.set_cell(cid_b, b.with_status(MaterialStatus::Acidic));
            automaton.swap_cells(cid_a, cid_b);
            true
        }
        _ => {
            automaton.set_cell(cid_b, b.with_status(MaterialStatus::Acidic));
            false
        }
    }
}

pub fn acid_to_fire(
    automaton: &mut Automaton,
    _a: Material,
    _b: Material,
    cid_a: usize,
    cid_b: usize,
) -> bool {
    if automaton.rng.chance256(26) {
        automaton.create_smoke(cid_b, 2);
        return true;
    }
    automaton.swap_cells(cid_a, cid_b);
    true
}

pub fn acid_to_root(
    automaton: &mut Automaton,
    _a: Material,
    b: Material,
    cid_a: usize,
    cid_b: usize,
) -> bool {
    if automaton.rng.chance256(10) {
        let life = b.life();
        if life > 0 {
            automaton.set_cell_as_processed(
                cid_b,
                b.with_life(life - 1).with_status(MaterialStatus::Acidic),
            );
        } else {
            automaton.create_smoke(cid_b, 1);
            if automaton.rng.next_bool() {
                automaton.create_smoke(cid_a, 1);
            }
        }
        return true;
    }
    automaton.set_cell(cid_b, b.with_status(MaterialStatus::Acidic));
    false
}

pub fn acid_to_plant(
    automaton: &mut Automaton,
    _a: Material,
    b: Material,
    cid_a: usize,
    cid_b: usize,
) -> bool {
    if automaton.rng.chance256(10) {
        let life = b.life();
        if life > 0 {
            automaton.set_cell_as_processed(
                cid_b,
                b.with_life(life - 1).with_status(MaterialStatus::Acidic),
            );
        } else {
            if automaton.rng.next_bool() {
                automaton.create_smoke(cid_b, 1);
            } else {
                automaton.create_steam(cid_b);
            }
            if automaton.rng.chance256(32) {
                automaton.create_smoke(cid_a, 1);
            }
        }
        return true;
    }
    automaton.set_cell(cid_b, b.with_status(MaterialStatus::Acidic));
    false
}

/// Acid wilts a flower into water
pub fn acid_to_flower(
    automaton: &mut Automaton,
    _a: Material,
    b: Material,
    cid_a: usize,
    cid_b: usize,
) -> bool {
    if automaton.rng.chance256(10) {
        if automaton.rng.next_bool() {
            automaton.create_smoke(cid_a, 1);
        }
        automaton.create_water(cid_b);
        return true;
    }
    automaton.set_cell(cid_b, b.with_status(MaterialStatus::Acidic));
    false
}

pub fn acid_to_ice(
    automaton: &mut Automaton,
    _a: Material,
    b: Material,
    cid_a: usize,
    cid_b: usize,
) -> bool {
    match automaton.rng.pick3(20, 150) {
        0 => {
            automaton.swap_cells(cid_a, cid_b);
            true
        }
        1 => {
            let life = b.life();
            if life == 0 {
                let water_life = automaton.rng.pick0123();
                let face_left = automaton.rng.next_bool();
                automaton.set_cell_as_processed(
                    cid_b,
                    Material::WATER.with_life(water_life).with_face_left(face_left),
                );
            } else {
                automaton.set_cell_as_processed(cid_b, b.with_life(life - 1));
            }
            true
        }
        _ => false,
    }
}

pub fn acid_to_ant_hill(
    automaton: &mut Automaton,
    a: Material,
    _b: Material,
    cid_a: usize,
    cid_b: usize,
) -> bool {
    match automaton.rng.pick3(16, 64) {
        0 => {
            automaton.set_cell_as_processed(cid_b, a);
            automaton.set_cell_as_processed(cid_a, Material::EMPTY);
            true
        }
        1 => {
            automaton.create_smoke(cid_b, 2);
            if automaton.rng.next_bool() {
                automaton.create_smoke(cid_a, 2);
            }
            true
        }
        _ => false,
    }
}

/// Acid burns an ant and trades places with it
pub fn acid_to_ant(
    automaton: &mut Automaton,
    _a: Material,
    b: Material,
    cid_a: usize,
    cid_b: usize,
) -> bool {
    let mut ant = b.with_status(MaterialStatus::Acidic);
    if automaton.rng.chance256(20) {
        let life = ant.life();
        if life > 1 {
            ant = ant.with_life(life - 1);
        } else {
            automaton.create_smoke(cid_b, 1);
            if automaton.rng.next_bool() {
                automaton.create_smoke(cid_a, 2);
            }
            return true;
        }
    }
    automaton.swap_cells(cid_a, cid_b);
    automaton.set_cell(cid_a, ant);
    true
}

pub fn acid_to_wasp(
    automaton: &mut Automaton,
    _a: Material,
    b: Material,
    cid_a: usize,
    cid_b: usize,
) -> bool {
    if automaton.rng.chance256(40) {
        let life = b.life();
        if life > 1 {
            automaton.set_cell_as_processed(
                cid_b,
                b.with_life(life - 1).with_status(MaterialStatus::Acidic),
            );
        } else {
            automaton.create_smoke(cid_b, 2);
            if automaton.rng.next_bool() {
                automaton.create_smoke(cid_a, 1);
            }
            return true;
        }
    }
    if automaton.rng.chance256(64) {
        automaton.swap_cells(cid_a, cid_b);
    }
    true
}
