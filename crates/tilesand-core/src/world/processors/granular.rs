//! Sand, Seed and AntHill

use tilesand_simulation::{Material, MaterialKind};

use super::{thaw_check, turn_around};
use crate::world::automaton::Automaton;
use crate::world::neighbor_queries::NeighborQueries;

/// Falls straight down, sometimes diagonally first. Never flows sideways.
pub fn process_sand(
    automaton: &mut Automaton,
    kind: MaterialKind,
    material: Material,
    cid: usize,
    x: i32,
    y: i32,
) -> bool {
    if material.is_frozen() {
        return thaw_check(automaton, material, cid, x, y);
    }

    let dir = if automaton.rng.next_bool() { -1 } else { 1 };
    let diagonal_first = automaton.rng.chance256(30);
    let below = y + 1;
    let (first, second) = if diagonal_first {
        (x + dir, x)
    } else {
        (x, x + dir)
    };

    let mut can_react = false;
    for tx in [first, second] {
        let attempt = automaton.try_react_at(cid, material, kind, tx, below);
        if attempt.reacted {
            return true;
        }
        can_react |= attempt.can_react;
    }

    // nothing moved; the other diagonal may still be worth a visit
    can_react || automaton.can_react_at(kind, x - dir, below)
}

/// Heavy grain drifting along its facing; germinates between water and sand
pub fn process_seed(
    automaton: &mut Automaton,
    kind: MaterialKind,
    material: Material,
    cid: usize,
    x: i32,
    y: i32,
) -> bool {
    if material.is_frozen() {
        return thaw_check(automaton, material, cid, x, y);
    }

    let dir = if material.face_left() { -1 } else { 1 };
    let down = (x, y + 1);
    let diagonal = (x + dir, y + 1);
    let sideways = (x + dir, y);
    let checks: &[(i32, i32)] = match automaton.rng.pick3(26, 103) {
        0 => &[sideways, diagonal, down],
        1 => &[diagonal, down],
        _ => &[down, diagonal],
    };

    let mut can_react = false;
    for &(tx, ty) in checks {
        let attempt = automaton.try_react_at(cid, material, kind, tx, ty);
        if attempt.reacted {
            return true;
        }
        can_react |= attempt.can_react;
    }

    if !can_react {
        if turn_around(automaton, kind, material, cid, (x, y), dir, 1) {
            return true;
        }
        can_react = automaton.can_react_at(kind, x - dir, y + 1);
    }

    if automaton.phase().turn3 && NeighborQueries::touches_water_and_sand(automaton, x, y) {
        let life = automaton.rng.pick4(120, 180, 200);
        automaton.set_cell_as_processed(cid, Material::ROOT.with_life(life));
        return true;
    }

    can_react
}

/// Collapses into whatever it can react with below
pub fn process_ant_hill(
    automaton: &mut Automaton,
    kind: MaterialKind,
    material: Material,
    cid: usize,
    x: i32,
    y: i32,
) -> bool {
    automaton.try_react_at(cid, material, kind, x, y + 1).reacted
}
