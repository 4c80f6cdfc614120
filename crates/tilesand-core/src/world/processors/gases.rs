//! Fire, Smoke and Steam: everything that rises

use tilesand_simulation::{Material, MaterialKind, kind_sets};

use super::{Flow, turn_around};
use crate::world::automaton::Automaton;

const FIRE_FLOW: Flow = Flow {
    flip: 100,
    order: (30, 128),
    dy: -1,
};

const SMOKE_FLOW: Flow = Flow {
    flip: 100,
    order: (20, 80),
    dy: -1,
};

const STEAM_FLOW: Flow = Flow {
    flip: 85,
    order: (15, 65),
    dy: -1,
};

/// Burns down one life at a time and leaves smoke behind
pub fn process_fire(
    automaton: &mut Automaton,
    kind: MaterialKind,
    material: Material,
    cid: usize,
    x: i32,
    y: i32,
) -> bool {
    if automaton.rng.chance256(20) {
        let life = material.life();
        if life == 0 {
            automaton.create_smoke(cid, 3);
        } else {
            automaton.set_cell_as_processed(cid, material.with_life(life - 1));
        }
        return true;
    }

    let (attempt, dir) = FIRE_FLOW.run(automaton, kind, material, cid, x, y);
    if attempt.reacted || attempt.can_react {
        return true;
    }
    turn_around(automaton, kind, material, cid, (x, y), dir, -1)
}

pub fn process_smoke(
    automaton: &mut Automaton,
    kind: MaterialKind,
    material: Material,
    cid: usize,
    x: i32,
    y: i32,
) -> bool {
    if automaton.rng.chance256(3) {
        let life = material.life();
        if life == 0 {
            automaton.set_cell_as_processed(cid, Material::EMPTY);
            return true;
        }
        // thins out but keeps moving this tick
        automaton.set_cell(cid, material.with_life(life - 1));
    }

    let (attempt, dir) = SMOKE_FLOW.run(automaton, kind, material, cid, x, y);
    if attempt.reacted || attempt.can_react {
        return true;
    }
    turn_around(automaton, kind, material, cid, (x, y), dir, 1)
}

/// Rises until something condensable caps it, then rains out or vanishes.
/// Always active.
pub fn process_steam(
    automaton: &mut Automaton,
    kind: MaterialKind,
    material: Material,
    cid: usize,
    x: i32,
    y: i32,
) -> bool {
    let capped = y == 0
        || !automaton
            .material(cid - automaton.width())
            .is_in(kind_sets::NON_CONDENSABLE);
    if capped && automaton.rng.chance256(5) {
        if automaton.rng.next_bool() {
            automaton.create_water(cid);
        } else {
            automaton.set_cell_as_processed(cid, Material::EMPTY);
        }
        return true;
    }

    let (attempt, dir) = STEAM_FLOW.run(automaton, kind, material, cid, x, y);
    if !attempt.reacted {
        turn_around(automaton, kind, material, cid, (x, y), dir, 1);
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use tilesand_simulation::SimRng;

    fn scripted(script: &[u8], tick: u32) -> Automaton {
        let mut automaton = Automaton::with_rng(SimRng::scripted(script).unwrap(), 0);
        automaton.set_tick(tick);
        automaton
    }

    fn put(automaton: &mut Automaton, x: i32, y: i32, material: Material) -> usize {
        let cid = automaton.cell_id(x, y).unwrap();
        automaton.set_cell(cid, material);
        cid
    }

    #[test]
    fn test_fire_burns_down() {
        let mut automaton = scripted(&[0], 1);
        let fire = Material::FIRE.with_life(2);
        let cid = put(&mut automaton, 10, 10, fire);
        assert!(process_fire(&mut automaton, MaterialKind::Fire, fire, cid, 10, 10));
        assert_eq!(automaton.material(cid), fire.with_life(1));

        // spent fire becomes smoke
        let mut automaton = scripted(&[0], 1);
        let cid = put(&mut automaton, 10, 10, Material::FIRE);
        assert!(process_fire(&mut automaton, MaterialKind::Fire, Material::FIRE, cid, 10, 10));
        let smoke = automaton.material(cid);
        assert!(smoke.is_kind(MaterialKind::Smoke));
        assert_eq!(smoke.life(), 3);
    }

    #[test]
    fn test_fire_rises() {
        // no decay, no flip, straight up first
        let fire = Material::FIRE.with_life(3);
        let mut automaton = scripted(&[200], 1);
        let cid = put(&mut automaton, 10, 10, fire);
        assert!(process_fire(&mut automaton, MaterialKind::Fire, fire, cid, 10, 10));
        assert_eq!(automaton.material_at(10, 9), fire);
        assert_eq!(automaton.material(cid), Material::EMPTY);
    }

    #[test]
    fn test_smoke_vanishes() {
        let mut automaton = scripted(&[0], 1);
        let cid = put(&mut automaton, 10, 10, Material::SMOKE);
        assert!(process_smoke(&mut automaton, MaterialKind::Smoke, Material::SMOKE, cid, 10, 10));
        assert_eq!(automaton.material(cid), Material::EMPTY);
    }

    #[test]
    fn test_smoke_thins_while_rising() {
        // decay roll 0, then no flip, straight up
        let smoke = Material::SMOKE.with_life(2);
        let mut automaton = scripted(&[0, 200, 200], 1);
        let cid = put(&mut automaton, 10, 10, smoke);
        assert!(process_smoke(&mut automaton, MaterialKind::Smoke, smoke, cid, 10, 10));
        assert_eq!(automaton.material_at(10, 9), smoke.with_life(1));
    }

    #[test]
    fn test_smoke_in_a_sealed_pocket_sleeps() {
        let mut automaton = scripted(&[200], 1);
        for (dx, dy) in [(-1, -1), (0, -1), (1, -1), (-1, 0), (1, 0), (-1, 1), (1, 1)] {
            put(&mut automaton, 10 + dx, 10 + dy, Material::STONE);
        }
        let cid = put(&mut automaton, 10, 10, Material::SMOKE);
        assert!(!process_smoke(&mut automaton, MaterialKind::Smoke, Material::SMOKE, cid, 10, 10));
    }

    #[test]
    fn test_steam_condenses_under_stone() {
        // capped; condense roll 0, bool 1 -> water
        let mut automaton = scripted(&[0, 1], 1);
        put(&mut automaton, 10, 9, Material::STONE);
        let cid = put(&mut automaton, 10, 10, Material::STEAM);
        assert!(process_steam(&mut automaton, MaterialKind::Steam, Material::STEAM, cid, 10, 10));
        assert!(automaton.material(cid).is_kind(MaterialKind::Water));
    }

    #[test]
    fn test_steam_under_open_air_rises() {
        let mut automaton = scripted(&[200], 1);
        let cid = put(&mut automaton, 10, 10, Material::STEAM);
        assert!(process_steam(&mut automaton, MaterialKind::Steam, Material::STEAM, cid, 10, 10));
        assert_eq!(automaton.material_at(10, 9), Material::STEAM);
    }

    #[test]
    fn test_steam_is_always_active() {
        let mut automaton = scripted(&[200], 1);
        for (dx, dy) in [(-1, -1), (0, -1), (1, -1), (-1, 0), (1, 0), (-1, 1), (0, 1), (1, 1)] {
            put(&mut automaton, 10 + dx, 10 + dy, Material::SAND);
        }
        let cid = put(&mut automaton, 10, 10, Material::STEAM);
        assert!(process_steam(&mut automaton, MaterialKind::Steam, Material::STEAM, cid, 10, 10));
        assert_eq!(automaton.material(cid), Material::STEAM);
    }
}
