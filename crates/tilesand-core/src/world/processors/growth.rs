//! Root, Plant and Flower
//!
//! Roots act on `turn3_shift1` and plants on `turn3_shift2`, so the two never
//! move in the same tick. On other ticks they only report whether a neighbor
//! offers a reaction, which keeps a growing tile awake between attempts.

use tilesand_simulation::{Material, MaterialKind, kind_sets};

use super::{cardinal, probe_cardinals, thaw_check};
use crate::world::automaton::Automaton;
use crate::world::neighbor_queries::NeighborQueries;
use crate::world::tiles::{WORLD_HEIGHT, WORLD_WIDTH};

/// Try one cardinal direction; fall back to probing all four
fn grow_toward(
    automaton: &mut Automaton,
    kind: MaterialKind,
    material: Material,
    cid: usize,
    (x, y): (i32, i32),
    direction: u8,
) -> bool {
    let (tx, ty) = cardinal(direction, x, y);
    if automaton.try_react_at(cid, material, kind, tx, ty).can_react {
        return true;
    }
    probe_cardinals(automaton, kind, x, y)
}

/// Young roots mostly dig down, grown ones reach for the surface
pub fn process_root(
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
    if !automaton.phase().turn3_shift1 {
        return probe_cardinals(automaton, kind, x, y);
    }

    let direction = if material.life() <= 1 {
        automaton.rng.pick4(51, 128, 192)
    } else {
        automaton.rng.pick4(77, 128, 192)
    };
    grow_toward(automaton, kind, material, cid, (x, y), direction)
}

/// Grows mostly upward, blooms when fully enclosed by plant, and falls back to
/// a seed once nothing supports it
pub fn process_plant(
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
    if !automaton.phase().turn3_shift2 {
        return probe_cardinals(automaton, kind, x, y);
    }

    if bloom(automaton, material, cid, x, y) {
        return true;
    }

    if !NeighborQueries::has_orthogonal_kind(automaton, x, y, kind_sets::PLANT_SUPPORTER) {
        automaton.create_seed(cid);
        return true;
    }

    let direction = automaton.rng.pick4(102, 153, 204);
    grow_toward(automaton, kind, material, cid, (x, y), direction)
}

/// The plant becomes a seed and its four neighbors become petals of one color
fn bloom(automaton: &mut Automaton, material: Material, cid: usize, x: i32, y: i32) -> bool {
    let interior =
        x > 0 && y > 0 && (x as usize) < WORLD_WIDTH - 1 && (y as usize) < WORLD_HEIGHT - 1;
    if !material.can_bloom() || material.life() != 3 || !interior || !automaton.rng.chance256(10) {
        return false;
    }

    let width = automaton.width();
    let petals = [cid - width, cid + width, cid - 1, cid + 1];
    if !petals
        .iter()
        .all(|&petal| automaton.material(petal).is_kind(MaterialKind::Plant))
    {
        return false;
    }

    automaton.create_seed(cid);
    let color = automaton.rng.pick0123();
    let flower = Material::FLOWER.with_life(color);
    automaton.set_cell_as_processed(petals[0], flower.with_is_top_petal(true));
    for &petal in &petals[1..] {
        automaton.set_cell_as_processed(petal, flower);
    }
    true
}

/// Static; the top petal now and then drops a seed into the gap below
pub fn process_flower(
    automaton: &mut Automaton,
    _kind: MaterialKind,
    material: Material,
    cid: usize,
    x: i32,
    y: i32,
) -> bool {
    if material.is_frozen() {
        return thaw_check(automaton, material, cid, x, y);
    }

    if automaton.phase().turn5
        && material.is_top_petal()
        && (y as usize) < WORLD_HEIGHT - 1
        && automaton.rng.chance256(5)
    {
        let below = cid + automaton.width();
        if automaton.material(below).is_empty() {
            automaton.create_seed(below);
            return true;
        }
    }
    false
}
