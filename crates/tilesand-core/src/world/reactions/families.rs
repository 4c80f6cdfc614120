//! Parameterized reaction families
//!
//! The chance parameters are const generics so every instance is still a plain
//! `fn` pointer that fits in the reaction table.

use tilesand_simulation::{Material, MaterialKind, MaterialStatus};

use crate::world::automaton::Automaton;

/// Swap A and B with chance `P/256`. `P == 255` swaps without drawing a byte.
pub fn swap<const P: u8>(
    automaton: &mut Automaton,
    _a: Material,
    _b: Material,
    cid_a: usize,
    cid_b: usize,
) -> bool {
    if P == u8::MAX || automaton.rng.chance256(P) {
        automaton.swap_cells(cid_a, cid_b);
        return true;
    }
    false
}

/// Unconditional move into the target
pub fn always_swap(
    automaton: &mut Automaton,
    a: Material,
    b: Material,
    cid_a: usize,
    cid_b: usize,
) -> bool {
    swap::<{ u8::MAX }>(automaton, a, b, cid_a, cid_b)
}

/// Fire (A) scorches B
///
/// B is always marked Burned. With chance `IGNITE` B catches fire; either way
/// the fire itself may then burn out into Smoke with chance `SMOKE`.
pub fn fire_burn<const IGNITE: u8, const SMOKE: u8>(
    automaton: &mut Automaton,
    _a: Material,
    b: Material,
    cid_a: usize,
    cid_b: usize,
) -> bool {
    automaton.set_cell(cid_b, b.with_status(MaterialStatus::Burned));

    if automaton.rng.chance256(IGNITE) {
        automaton.create_fire(cid_b);
        if automaton.rng.chance256(SMOKE) {
            automaton.create_smoke(cid_a, 3);
        }
        return true;
    }

    if automaton.rng.chance256(SMOKE) {
        automaton.create_smoke(cid_a, 3);
        return true;
    }
    false
}

/// A full-strength root (A) spends one life to grow into B
///
/// Sealed (non-penetrable) ant hills are skipped. The offshoot is usually a
/// Root, occasionally a Plant.
pub fn root_growth<const P: u8>(
    automaton: &mut Automaton,
    a: Material,
    b: Material,
    cid_a: usize,
    cid_b: usize,
) -> bool {
    let life = a.life();
    if (b.is_kind(MaterialKind::AntHill) && !b.is_penetrable())
        || life < 3
        || !automaton.rng.chance256(P)
    {
        return false;
    }

    automaton.set_cell_as_processed(cid_a, a.with_life(life - 1));
    if automaton.rng.chance256(32) {
        automaton.create_plant(cid_b);
    } else {
        automaton.create_root(cid_b);
    }
    true
}

/// A living plant (A) spends one life to sprout a new Plant in B
pub fn plant_growth<const P: u8>(
    automaton: &mut Automaton,
    a: Material,
    _b: Material,
    cid_a: usize,
    cid_b: usize,
) -> bool {
    let life = a.life();
    if life == 0 || !automaton.rng.chance256(P) {
        return false;
    }

    automaton.set_cell_as_processed(cid_a, a.with_life(life - 1));
    automaton.create_plant(cid_b);
    true
}

/// A hungry ant (A) eats B, moving into its cell and leaving an ant hill behind
pub fn ant_eat<const P: u8>(
    automaton: &mut Automaton,
    a: Material,
    _b: Material,
    cid_a: usize,
    cid_b: usize,
) -> bool {
    let life = a.life();
    if life == 3 || !automaton.rng.chance256(P) {
        return false;
    }

    automaton.create_ant_hill(cid_a);
    automaton.set_cell_as_processed(cid_b, a.with_life(life + 1));
    true
}
