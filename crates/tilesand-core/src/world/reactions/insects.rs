//! Ant and Wasp reactions

use tilesand_simulation::{Material, MaterialStatus};

use super::freeze;
use crate::world::automaton::Automaton;

/// Ants tunnel through porous stone, leaving a hill behind
pub fn ant_to_stone(
    automaton: &mut Automaton,
    _a: Material,
    b: Material,
    cid_a: usize,
    cid_b: usize,
) -> bool {
    if !b.is_penetrable() || !automaton.rng.chance256(2) {
        return false;
    }
    automaton.swap_cells(cid_a, cid_b);
    automaton.create_ant_hill(cid_a);
    true
}

pub fn ant_to_sand(
    automaton: &mut Automaton,
    a: Material,
    b: Material,
    cid_a: usize,
    cid_b: usize,
) -> bool {
    if !b.is_penetrable() {
        return false;
    }
    if automaton.rng.chance256(60) {
        automaton.set_cell_as_processed(cid_b, a);
        automaton.create_ant_hill(cid_a);
        return true;
    }
    false
}

/// Ants drown slowly; a drowned ant sinks as burned sand
pub fn ant_to_water(
    automaton: &mut Automaton,
    a: Material,
    _b: Material,
    cid_a: usize,
    cid_b: usize,
) -> bool {
    if automaton.rng.chance256(16) {
        let life = a.life();
        if life > 1 {
            automaton.set_cell_as_processed(cid_a, a.with_life(life - 1));
        } else {
            automaton.create_sand(cid_a, true);
        }
        return true;
    }
    if automaton.rng.chance256(64) {
        automaton.swap_cells(cid_a, cid_b);
        return true;
    }
    false
}

pub fn ant_to_acid(
    automaton: &mut Automaton,
    a: Material,
    _b: Material,
    cid_a: usize,
    cid_b: usize,
) -> bool {
    let mut ant = a.with_status(MaterialStatus::Acidic);
    if automaton.rng.chance256(20) {
        let life = ant.life();
        if life > 1 {
            ant = ant.with_life(life - 1);
        } else {
            automaton.create_smoke(cid_a, 1);
            if automaton.rng.next_bool() {
                automaton.create_smoke(cid_b, 2);
            }
            return true;
        }
    }
    automaton.swap_cells(cid_a, cid_b);
    automaton.set_cell(cid_b, ant);
    true
}

/// An ant walking into fire goes up in smoke
pub fn ant_to_fire(
    automaton: &mut Automaton,
    _a: Material,
    _b: Material,
    cid_a: usize,
    _cid_b: usize,
) -> bool {
    automaton.create_smoke(cid_a, 1);
    true
}

/// Ants eat wasp eggs; adult wasps fight back
pub fn ant_to_wasp(
    automaton: &mut Automaton,
    a: Material,
    b: Material,
    cid_a: usize,
    cid_b: usize,
) -> bool {
    if b.life() == 0 {
        if !automaton.rng.chance256(120) {
            return false;
        }
        automaton.set_cell_as_processed(cid_b, Material::EMPTY);
        automaton.set_cell_as_processed(cid_a, a.with_life((a.life() + 1).min(3)));
        return true;
    }
    wasp_to_ant(automaton, b, a, cid_b, cid_a)
}

/// Drinking fills the wasp's water flag
pub fn wasp_to_water(
    automaton: &mut Automaton,
    a: Material,
    _b: Material,
    cid_a: usize,
    cid_b: usize,
) -> bool {
    if a.wasp_has_water() || !automaton.rng.chance256(200) {
        return false;
    }
    automaton.set_cell_as_processed(cid_b, Material::EMPTY);
    automaton.set_cell_as_processed(cid_a, a.with_wasp_has_water(true));
    true
}

/// Wasps hunt ants. Eating one sets the ant flag and restores a life.
pub fn wasp_to_ant(
    automaton: &mut Automaton,
    a: Material,
    b: Material,
    cid_a: usize,
    cid_b: usize,
) -> bool {
    let fed = a.with_wasp_has_ant(true).with_life((a.life() + 1).min(3));

    if b.life() == 0 {
        if !automaton.rng.chance256(160) {
            return false;
        }
        automaton.set_cell_as_processed(cid_b, Material::EMPTY);
        automaton.set_cell_as_processed(cid_a, fed);
        return true;
    }

    if automaton.rng.chance256(230) {
        automaton.set_cell_as_processed(cid_b, Material::EMPTY);
        automaton.set_cell_as_processed(cid_a, fed);
    } else {
        // the ant wins and is left at full strength
        automaton.set_cell_as_processed(cid_a, Material::EMPTY);
        automaton.set_cell_as_processed(cid_b, b.with_life(3));
    }
    true
}

pub fn wasp_to_acid(
    automaton: &mut Automaton,
    a: Material,
    _b: Material,
    cid_a: usize,
    cid_b: usize,
) -> bool {
    if automaton.rng.chance256(40) {
        let life = a.life();
        if life > 1 {
            automaton.set_cell_as_processed(
                cid_a,
                a.with_life(life - 1).with_status(MaterialStatus::Acidic),
            );
        } else {
            automaton.create_smoke(cid_a, 1);
            if automaton.rng.next_bool() {
                automaton.create_smoke(cid_b, 2);
            }
            return true;
        }
    }
    if automaton.rng.chance256(64) {
        automaton.swap_cells(cid_a, cid_b);
    }
    true
}

pub fn wasp_to_fire(
    automaton: &mut Automaton,
    a: Material,
    _b: Material,
    cid_a: usize,
    cid_b: usize,
) -> bool {
    let burned = a.with_status(MaterialStatus::Burned);
    automaton.set_cell(cid_a, burned);

    if automaton.rng.chance256(80) {
        let life = burned.life();
        if life > 1 {
            automaton.set_cell_as_processed(cid_a, burned.with_life(life - 1));
        } else {
            automaton.create_sand(cid_a, true);
            if automaton.rng.next_bool() {
                automaton.create_smoke(cid_b, 3);
            }
        }
        return true;
    }
    automaton.swap_cells(cid_a, cid_b);
    true
}

/// Hot gas hurts a wasp with chance `hurt/256`, otherwise it flies through
fn wasp_in_gas(
    automaton: &mut Automaton,
    a: Material,
    cid_a: usize,
    cid_b: usize,
    hurt: u8,
    scorch: bool,
) -> bool {
    if automaton.rng.chance256(hurt) {
        let life = a.life();
        if life > 1 {
            let mut hurt = a.with_life(life - 1);
            if scorch {
                hurt = hurt.with_status(MaterialStatus::Burned);
            }
            automaton.set_cell_as_processed(cid_a, hurt);
        } else {
            automaton.create_sand(cid_a, true);
        }
        return true;
    }
    if automaton.rng.chance256(220) {
        automaton.swap_cells(cid_a, cid_b);
        return true;
    }
    false
}

pub fn wasp_to_steam(
    automaton: &mut Automaton,
    a: Material,
    _b: Material,
    cid_a: usize,
    cid_b: usize,
) -> bool {
    wasp_in_gas(automaton, a, cid_a, cid_b, 25, false)
}

pub fn wasp_to_smoke(
    automaton: &mut Automaton,
    a: Material,
    _b: Material,
    cid_a: usize,
    cid_b: usize,
) -> bool {
    wasp_in_gas(automaton, a, cid_a, cid_b, 50, true)
}

pub fn wasp_to_ice(
    automaton: &mut Automaton,
    a: Material,
    _b: Material,
    cid_a: usize,
    cid_b: usize,
) -> bool {
    match automaton.rng.pick3(20, 60) {
        0 => {
            freeze(automaton, cid_a, a);
            true
        }
        1 => {
            automaton.swap_cells(cid_a, cid_b);
            true
        }
        _ => false,
    }
}
