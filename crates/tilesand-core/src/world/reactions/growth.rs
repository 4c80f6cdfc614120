//! Root and Plant reactions
//!
//! Roots and plants pass life (nutrients) between each other. Roots draw it
//! from water and soil, plants push it upward and spend it on new growth.

use tilesand_simulation::Material;

use super::{freeze, strengthen, weaken};
use crate::world::automaton::Automaton;

pub fn root_to_seed(
    automaton: &mut Automaton,
    _a: Material,
    _b: Material,
    _cid_a: usize,
    cid_b: usize,
) -> bool {
    if !automaton.rng.chance256(20) {
        return false;
    }
    if automaton.rng.next_bool() {
        automaton.create_root(cid_b);
    } else {
        automaton.create_sand(cid_b, false);
    }
    true
}

/// Roots drink: gain a life, occasionally draining the water
pub fn root_to_water(
    automaton: &mut Automaton,
    a: Material,
    _b: Material,
    cid_a: usize,
    cid_b: usize,
) -> bool {
    if a.life() < 3 && automaton.rng.chance256(16) {
        strengthen(automaton, cid_a, a);
        if automaton.rng.chance256(64) {
            automaton.set_cell_as_processed(cid_b, Material::EMPTY);
        }
        return true;
    }
    false
}

/// Roots feed from soil and, at full strength, burrow into porous cells
fn root_to_soil(
    automaton: &mut Automaton,
    a: Material,
    b: Material,
    cid_a: usize,
    cid_b: usize,
    feed: u8,
) -> bool {
    let life = a.life();
    if life < 3 && automaton.rng.chance256(feed) {
        strengthen(automaton, cid_a, a);
        return true;
    }
    if life == 3 && b.is_penetrable() && automaton.rng.chance256(10) {
        automaton.set_cell_as_processed(cid_a, a.with_life(2));
        automaton.create_root(cid_b);
        return true;
    }
    false
}

pub fn root_to_sand(
    automaton: &mut Automaton,
    a: Material,
    b: Material,
    cid_a: usize,
    cid_b: usize,
) -> bool {
    root_to_soil(automaton, a, b, cid_a, cid_b, 8)
}

pub fn root_to_stone(
    automaton: &mut Automaton,
    a: Material,
    b: Material,
    cid_a: usize,
    cid_b: usize,
) -> bool {
    root_to_soil(automaton, a, b, cid_a, cid_b, 60)
}

/// Neighboring roots even out their life
pub fn root_to_root(
    automaton: &mut Automaton,
    a: Material,
    b: Material,
    cid_a: usize,
    cid_b: usize,
) -> bool {
    let (life_a, life_b) = (a.life(), b.life());
    if life_a == life_b || !automaton.rng.chance256(50) {
        return false;
    }
    if life_a > life_b {
        weaken(automaton, cid_a, a);
        strengthen(automaton, cid_b, b);
    } else {
        strengthen(automaton, cid_a, a);
        weaken(automaton, cid_b, b);
    }
    true
}

/// Roots push life up into plants, or take over porous ones
pub fn root_to_plant(
    automaton: &mut Automaton,
    a: Material,
    b: Material,
    cid_a: usize,
    cid_b: usize,
) -> bool {
    if a.life() == 0 || b.life() == 3 {
        return false;
    }
    if b.is_penetrable() && automaton.rng.chance256(60) {
        weaken(automaton, cid_a, a);
        automaton.create_root(cid_b);
        return true;
    }
    if automaton.rng.chance256(180) {
        weaken(automaton, cid_a, a);
        strengthen(automaton, cid_b, b);
        return true;
    }
    false
}

pub fn root_to_ice(
    automaton: &mut Automaton,
    a: Material,
    _b: Material,
    cid_a: usize,
    _cid_b: usize,
) -> bool {
    if automaton.rng.chance256(12) {
        freeze(automaton, cid_a, a);
        return true;
    }
    false
}

pub fn plant_to_water(
    automaton: &mut Automaton,
    a: Material,
    _b: Material,
    cid_a: usize,
    cid_b: usize,
) -> bool {
    if automaton.rng.chance256(10) && a.life() < 3 {
        strengthen(automaton, cid_a, a);
        automaton.set_cell_as_processed(cid_b, Material::EMPTY);
        return true;
    }
    false
}

pub fn plant_to_seed(
    automaton: &mut Automaton,
    _a: Material,
    _b: Material,
    _cid_a: usize,
    cid_b: usize,
) -> bool {
    match automaton.rng.pick3(20, 25) {
        0 => {
            automaton.create_plant(cid_b);
            true
        }
        1 => {
            automaton.create_root(cid_b);
            true
        }
        _ => false,
    }
}

/// Plants pull life back out of roots
pub fn plant_to_root(
    automaton: &mut Automaton,
    a: Material,
    b: Material,
    cid_a: usize,
    cid_b: usize,
) -> bool {
    if b.life() == 0 || a.life() == 3 {
        return false;
    }
    if automaton.rng.chance256(1) {
        automaton.create_plant(cid_b);
        return true;
    }
    if automaton.rng.chance256(180) {
        strengthen(automaton, cid_a, a);
        weaken(automaton, cid_b, b);
        return true;
    }
    false
}

/// Life flows from A to B within a plant
pub fn plant_to_plant(
    automaton: &mut Automaton,
    a: Material,
    b: Material,
    cid_a: usize,
    cid_b: usize,
) -> bool {
    if a.life() == 0 || b.life() == 3 || !automaton.rng.chance256(77) {
        return false;
    }
    weaken(automaton, cid_a, a);
    strengthen(automaton, cid_b, b);
    true
}

pub fn plant_to_ice(
    automaton: &mut Automaton,
    a: Material,
    _b: Material,
    cid_a: usize,
    _cid_b: usize,
) -> bool {
    if automaton.rng.chance256(14) {
        freeze(automaton, cid_a, a);
        return true;
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use tilesand_simulation::{MaterialKind, SimRng};

    fn scripted(script: &[u8]) -> Automaton {
        let mut automaton = Automaton::with_rng(SimRng::scripted(script).unwrap(), 0);
        automaton.set_tick(1);
        automaton
    }

    #[test]
    fn test_root_drinks_water() {
        let mut automaton = scripted(&[0, 100]);
        let root = Material::ROOT.with_life(1);
        automaton.set_cell(1, Material::WATER);
        assert!(root_to_water(&mut automaton, root, Material::WATER, 0, 1));
        assert_eq!(automaton.material(0).life(), 2);
        assert_eq!(automaton.material(1), Material::WATER);

        // a full root is not thirsty
        let mut automaton = scripted(&[0]);
        let full = Material::ROOT.with_life(3);
        assert!(!root_to_water(&mut automaton, full, Material::WATER, 0, 1));
    }

    #[test]
    fn test_root_burrows_into_porous_sand() {
        let mut automaton = scripted(&[0]);
        let root = Material::ROOT.with_life(3);
        let sand = Material::SAND.with_is_penetrable(true);
        assert!(root_to_sand(&mut automaton, root, sand, 0, 1));
        assert_eq!(automaton.material(0).life(), 2);
        assert!(automaton.material(1).is_kind(MaterialKind::Root));

        let mut automaton = scripted(&[0]);
        let solid = Material::SAND.with_is_penetrable(false);
        assert!(!root_to_sand(&mut automaton, root, solid, 0, 1));
    }

    #[test]
    fn test_roots_balance_life() {
        let mut automaton = scripted(&[0]);
        let strong = Material::ROOT.with_life(3);
        let weak = Material::ROOT.with_life(1);
        assert!(root_to_root(&mut automaton, strong, weak, 0, 1));
        assert_eq!(automaton.material(0).life(), 2);
        assert_eq!(automaton.material(1).life(), 2);

        let mut automaton = scripted(&[0]);
        assert!(!root_to_root(&mut automaton, weak, weak, 0, 1));
        assert_eq!(automaton.rng.ring().cursor(), 0);
    }

    #[test]
    fn test_root_feeds_plant() {
        let mut automaton = scripted(&[100, 100]);
        let root = Material::ROOT.with_life(2);
        let plant = Material::PLANT.with_life(1).with_is_penetrable(true);
        assert!(root_to_plant(&mut automaton, root, plant, 0, 1));
        assert_eq!(automaton.material(0).life(), 1);
        assert_eq!(automaton.material(1), plant.with_life(2));
    }

    #[test]
    fn test_plant_to_plant_moves_life() {
        let mut automaton = scripted(&[0]);
        let giver = Material::PLANT.with_life(2);
        let taker = Material::PLANT.with_life(3);
        assert!(!plant_to_plant(&mut automaton, giver, taker, 0, 1));

        let taker = Material::PLANT.with_life(1);
        assert!(plant_to_plant(&mut automaton, giver, taker, 0, 1));
        assert_eq!(automaton.material(0).life(), 1);
        assert_eq!(automaton.material(1).life(), 2);
    }

    #[test]
    fn test_plant_drinks_water() {
        let mut automaton = scripted(&[5]);
        automaton.set_cell(1, Material::WATER);
        let plant = Material::PLANT.with_life(1);
        assert!(plant_to_water(&mut automaton, plant, Material::WATER, 0, 1));
        assert_eq!(automaton.material(0).life(), 2);
        assert_eq!(automaton.material(1), Material::EMPTY);
    }

    #[test]
    fn test_plant_sprouts_seed() {
        let mut automaton = scripted(&[22, 1]);
        assert!(plant_to_seed(&mut automaton, Material::PLANT, Material::SEED, 0, 1));
        assert_eq!(automaton.material(1), Material::ROOT.with_life(1));
    }
}
