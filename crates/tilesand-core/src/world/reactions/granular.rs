//! Sand and Seed reactions

use tilesand_simulation::{Material, MaterialStatus};

use super::freeze;
use crate::world::automaton::Automaton;

/// Sand sinking into acid: mostly just corrodes, sometimes dissolves
pub fn sand_to_acid(
    automaton: &mut Automaton,
    a: Material,
    _b: Material,
    cid_a: usize,
    cid_b: usize,
) -> bool {
    match automaton.rng.pick3(5, 150) {
        0 => {
            automaton.create_smoke(cid_a, 1);
            if automaton.rng.chance256(128) {
                automaton.create_smoke(cid_b, 1);
            }
        }
        1 => {
            automaton.swap_cells(cid_a, cid_b);
            automaton.set_cell(cid_b, a.with_status(MaterialStatus::Acidic));
        }
        _ => automaton.set_cell(cid_a, a.with_status(MaterialStatus::Acidic)),
    }
    true
}

pub fn sand_to_fire(
    automaton: &mut Automaton,
    a: Material,
    _b: Material,
    cid_a: usize,
    cid_b: usize,
) -> bool {
    match automaton.rng.pick3(30, 220) {
        0 => {
            automaton.create_smoke(cid_b, 1);
            true
        }
        1 => {
            automaton.swap_cells(cid_a, cid_b);
            if automaton.rng.chance256(30) {
                automaton.set_cell(cid_b, a.with_status(MaterialStatus::Burned));
            }
            true
        }
        _ => {
            if automaton.rng.chance256(10) {
                automaton.set_cell(cid_a, a.with_status(MaterialStatus::Burned));
            }
            false
        }
    }
}

pub fn sand_to_ice(
    automaton: &mut Automaton,
    a: Material,
    _b: Material,
    cid_a: usize,
    _cid_b: usize,
) -> bool {
    if automaton.rng.chance256(80) {
        freeze(automaton, cid_a, a);
        return true;
    }
    false
}

pub fn seed_to_acid(
    automaton: &mut Automaton,
    a: Material,
    _b: Material,
    cid_a: usize,
    cid_b: usize,
) -> bool {
    match automaton.rng.pick3(1, 30) {
        0 => {
            if automaton.rng.chance256(60) {
                automaton.create_smoke(cid_b, 1);
            }
            if automaton.rng.next_bool() {
                automaton.create_smoke(cid_a, 1);
            } else {
                automaton.create_steam(cid_a);
            }
            true
        }
        1 => {
            // the seed sinks, corroded
            automaton.set_cell(cid_a, a.with_status(MaterialStatus::Acidic));
            automaton.swap_cells(cid_a, cid_b);
            true
        }
        _ => {
            automaton.set_cell(cid_a, a.with_status(MaterialStatus::Acidic));
            false
        }
    }
}

pub fn seed_to_ice(
    automaton: &mut Automaton,
    a: Material,
    _b: Material,
    cid_a: usize,
    _cid_b: usize,
) -> bool {
    if automaton.rng.chance256(100) {
        freeze(automaton, cid_a, a);
        return true;
    }
    false
}
