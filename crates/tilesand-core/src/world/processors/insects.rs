//! Ants and wasps
//!
//! Both kinds use life 0 for eggs. Eggs fall like a light grain (wasp eggs
//! only when nothing sticky holds them) and hatch on `turn5`. Adults walk or
//! fly along a three-way fan picked from their facing and turn around when
//! the chosen cell offers nothing.

use tilesand_simulation::{Material, MaterialKind, kind_sets};

use super::{cardinal, thaw_check};
use crate::world::automaton::Automaton;
use crate::world::tiles::{WORLD_HEIGHT, WORLD_WIDTH};

const EGG_SINKS_IN_WATER: u8 = 120;
const EGG_SINKS_IN_SAND: u8 = 4;

/// Replace an egg with a young adult of life 1 or 2 and random facings
fn hatch(automaton: &mut Automaton, adult: Material, cid: usize) {
    let life = 1 + u8::from(automaton.rng.next_bool());
    let face_left = automaton.rng.next_bool();
    let face_up = automaton.rng.next_bool();
    automaton.set_cell_as_processed(
        cid,
        adult.with_life(life).with_face_left(face_left).with_face_up(face_up),
    );
}

/// Flip either the horizontal or the vertical facing
fn turned(automaton: &mut Automaton, material: Material) -> Material {
    if automaton.rng.next_bool() {
        material.with_face_left(!material.face_left())
    } else {
        material.with_face_up(!material.face_up())
    }
}

/// Fan velocity from the facing flags
fn heading(material: Material) -> (i32, i32) {
    let vx = if material.face_left() { -1 } else { 1 };
    let vy = if material.face_up() { -1 } else { 1 };
    (vx, vy)
}

fn egg_swap(automaton: &mut Automaton, cid: usize, x: i32, y: i32) -> bool {
    let Some(target) = automaton.cell_id(x, y) else {
        return false;
    };
    if automaton.is_processed(target) {
        return false;
    }
    let sinks = match automaton.material(target).kind() {
        MaterialKind::Empty | MaterialKind::Steam | MaterialKind::Smoke => true,
        MaterialKind::Water => automaton.rng.chance256(EGG_SINKS_IN_WATER),
        MaterialKind::Sand => automaton.rng.chance256(EGG_SINKS_IN_SAND),
        _ => false,
    };
    if sinks {
        automaton.swap_cells(cid, target);
    }
    sinks
}

/// Sand-like fall for eggs; eggs always count as active
fn egg_fall(automaton: &mut Automaton, cid: usize, x: i32, y: i32) -> bool {
    let dir = if automaton.rng.next_bool() { -1 } else { 1 };
    let diagonal_first = automaton.rng.chance256(30);
    if y as usize >= WORLD_HEIGHT - 1 {
        return true;
    }

    let (first, second) = if diagonal_first {
        (x + dir, x)
    } else {
        (x, x + dir)
    };
    if !egg_swap(automaton, cid, first, y + 1) {
        egg_swap(automaton, cid, second, y + 1);
    }
    true
}

/// Ants dig, eat plants, lay eggs and starve. Always active while alive.
pub fn process_ant(
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

    let life = material.life();
    if life == 0 {
        if automaton.phase().turn5 && automaton.rng.chance256(2) {
            hatch(automaton, Material::ANT, cid);
            return true;
        }
        return egg_fall(automaton, cid, x, y);
    }

    // hunger, held off by food nearby
    if automaton.rng.chance256(1) {
        if life <= 1 {
            automaton.create_sand(cid, true);
        } else if !automaton.has_neighbor_kind(x, y, kind_sets::ANT_ALIVE) {
            automaton.set_cell_as_processed(cid, material.with_life(life - 1));
        }
        return true;
    }

    let on_side_wall = x == 0 || x as usize == WORLD_WIDTH - 1;
    if !on_side_wall
        && (y as usize) < WORLD_HEIGHT - 1
        && automaton.material_at(x, y + 1).is_in(kind_sets::ANT_FALLABLE)
    {
        let supported = [(x - 1, y), (x - 1, y + 1), (x + 1, y + 1), (x + 1, y)]
            .into_iter()
            .any(|(sx, sy)| automaton.material_at(sx, sy).is_in(kind_sets::ANT_SUPPORTER));
        if !supported {
            automaton.try_react_at(cid, material, kind, x, y + 1);
            return true;
        }
    }

    if !automaton.phase().turn3 {
        return true;
    }

    let mut ant = material;
    if life >= 2 && automaton.rng.chance256(1) {
        let (tx, ty) = cardinal(automaton.rng.pick0123(), x, y);
        let nest = automaton
            .cell_id(tx, ty)
            .filter(|&target| automaton.material(target).is_in(kind_sets::ANT_EGG_LAYABLE));
        if let Some(target) = nest {
            automaton.set_cell_as_processed(target, Material::ANT);
            ant = material.with_life(life - 1);
            automaton.set_cell(cid, ant);
        }
    }

    let (vx, vy) = heading(ant);
    let (tx, ty) = match automaton.rng.pick012() {
        0 => (x + vx, y),
        1 => (x + vx, y + vy),
        _ => (x, y + vy),
    };
    if automaton.try_react_at(cid, ant, kind, tx, ty).can_react {
        return true;
    }

    let ant = turned(automaton, ant);
    automaton.set_cell(cid, ant);
    true
}

/// Whether a wasp egg laid at `(x, y)` would be held in place
///
/// The left, right and top world edges hold an egg; the floor does not.
fn egg_anchored(automaton: &Automaton, x: i32, y: i32) -> bool {
    if x == 0 || y == 0 || x as usize == WORLD_WIDTH - 1 {
        return true;
    }
    [(x - 1, y), (x + 1, y), (x, y - 1), (x, y + 1)]
        .into_iter()
        .any(|(nx, ny)| automaton.material_at(nx, ny).is_in(kind_sets::WASP_EGG_STICKY))
}

/// Wasps fly every other tick, drink, hunt ants and lay eggs on sticky walls.
/// Always active while alive.
pub fn process_wasp(
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

    if material.life() == 0 {
        if automaton.phase().turn5 && automaton.rng.chance256(2) {
            hatch(automaton, Material::WASP, cid);
            return true;
        }
        if x == 0 || y == 0 || x as usize == WORLD_WIDTH - 1 {
            return true;
        }
        let stuck = [(x, y - 1), (x - 1, y), (x + 1, y)]
            .into_iter()
            .any(|(nx, ny)| automaton.material_at(nx, ny).is_in(kind_sets::WASP_EGG_STICKY));
        if stuck {
            return true;
        }
        return egg_fall(automaton, cid, x, y);
    }

    if !automaton.phase().turn2 {
        return true;
    }

    if material.wasp_has_water() && material.wasp_has_ant() && automaton.rng.chance256(20) {
        let (tx, ty) = cardinal(automaton.rng.pick0123(), x, y);
        let nest = automaton.cell_id(tx, ty).filter(|&target| {
            automaton.material(target).is_in(kind_sets::WASP_EGG_LAYABLE)
                && egg_anchored(automaton, tx, ty)
        });
        if let Some(target) = nest {
            automaton.set_cell_as_processed(target, Material::WASP);
            automaton.set_cell(
                cid,
                material.with_wasp_has_water(false).with_wasp_has_ant(false),
            );
            return true;
        }
    }

    let (vx, vy) = heading(material);
    let (tx, ty) = match automaton.rng.pick012() {
        0 => (x, y + vy),
        1 => (x + vx, y + vy),
        _ => (x + vx, y),
    };

    if !automaton.in_bounds(tx, ty) {
        let wasp = turned(automaton, material);
        automaton.set_cell(cid, wasp);
        return true;
    }

    let target_kind = automaton.material_at(tx, ty).kind();
    let attempt = automaton.try_react_at(cid, material, kind, tx, ty);
    if attempt.reacted {
        return true;
    }
    // a failed drink bounces like a wall, other blocked targets just wait
    if attempt.can_react && target_kind != MaterialKind::Water {
        return true;
    }
    let wasp = turned(automaton, material);
    automaton.set_cell(cid, wasp);
    true
}
