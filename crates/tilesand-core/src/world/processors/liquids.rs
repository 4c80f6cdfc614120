//! Water and Acid

use tilesand_simulation::{Material, MaterialKind};

use super::{Flow, thaw_check, turn_around};
use crate::world::automaton::Automaton;

const WATER_FLOW: Flow = Flow {
    flip: 50,
    order: (10, 60),
    dy: 1,
};

const ACID_FLOW: Flow = Flow {
    flip: 20,
    order: (5, 30),
    dy: 1,
};

/// Whether the cell directly above is open air
fn open_above(automaton: &Automaton, cid: usize, y: i32) -> bool {
    y > 0 && automaton.material(cid - automaton.width()).is_empty()
}

/// Flows down and sideways; a stuck cell under open air slowly evaporates
pub fn process_water(
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

    let (attempt, dir) = WATER_FLOW.run(automaton, kind, material, cid, x, y);
    if attempt.reacted || attempt.can_react {
        return true;
    }
    if turn_around(automaton, kind, material, cid, (x, y), dir, 1) {
        return true;
    }

    if automaton.phase().turn3 && open_above(automaton, cid, y) && automaton.rng.chance256(1) {
        automaton.set_cell_as_processed(cid, Material::STEAM.with_face_left(material.face_left()));
        return true;
    }
    false
}

/// Like water but runnier, and it fumes into smoke instead of steam
pub fn process_acid(
    automaton: &mut Automaton,
    kind: MaterialKind,
    material: Material,
    cid: usize,
    x: i32,
    y: i32,
) -> bool {
    let (attempt, dir) = ACID_FLOW.run(automaton, kind, material, cid, x, y);
    if attempt.reacted || attempt.can_react {
        return true;
    }
    if turn_around(automaton, kind, material, cid, (x, y), dir, 1) {
        return true;
    }

    if automaton.phase().turn5 && open_above(automaton, cid, y) && automaton.rng.chance256(5) {
        automaton.create_smoke(cid, 2);
        return true;
    }
    false
}
