//! Ice

use tilesand_simulation::{Material, MaterialKind};

use crate::world::automaton::Automaton;
use crate::world::neighbor_queries::NeighborQueries;

/// Melts slowly in warm surroundings and otherwise sinks one cell at a time
///
/// Always active, so a block of ice keeps its tile awake while it melts.
pub fn process_ice(
    automaton: &mut Automaton,
    kind: MaterialKind,
    material: Material,
    cid: usize,
    x: i32,
    y: i32,
) -> bool {
    if automaton.rng.chance256(32) && automaton.phase().turn5 {
        let temperature = NeighborQueries::temperature(automaton, x, y);
        if automaton.rng.chance256(temperature) {
            let life = material.life();
            if life == 0 {
                automaton.create_water(cid);
            } else {
                automaton.set_cell_as_processed(cid, material.with_life(life - 1));
            }
            return true;
        }
    }

    let dir = if automaton.rng.next_bool() { -1 } else { 1 };
    let tx = if automaton.rng.chance256(10) { x + dir } else { x };
    automaton.try_react_at(cid, material, kind, tx, y + 1);
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

    #[test]
    fn test_ice_sinks_one_cell() {
        let mut automaton = scripted(&[200], 1);
        let cid = automaton.cell_id(10, 10).unwrap();
        automaton.set_cell(cid, Material::ICE.with_life(3));
        assert!(process_ice(
            &mut automaton,
            MaterialKind::Ice,
            Material::ICE.with_life(3),
            cid,
            10,
            10
        ));
        assert_eq!(automaton.material_at(10, 11), Material::ICE.with_life(3));
    }

    #[test]
    fn test_ice_melts_on_turn5() {
        let mut automaton = scripted(&[0], 5);
        let cid = automaton.cell_id(10, 10).unwrap();
        automaton.set_cell(cid, Material::ICE.with_life(2));
        assert!(process_ice(
            &mut automaton,
            MaterialKind::Ice,
            Material::ICE.with_life(2),
            cid,
            10,
            10
        ));
        assert_eq!(automaton.material(cid), Material::ICE.with_life(1));

        let mut automaton = scripted(&[0], 5);
        automaton.set_cell(cid, Material::ICE);
        assert!(process_ice(&mut automaton, MaterialKind::Ice, Material::ICE, cid, 10, 10));
        assert!(automaton.material(cid).is_kind(MaterialKind::Water));
    }

    #[test]
    fn test_ice_surrounded_by_ice_never_melts() {
        // four cold neighbors take the temperature to 3
        let mut automaton = scripted(&[0, 3, 200, 200], 5);
        for (x, y) in [(9, 10), (11, 10), (10, 9), (10, 11)] {
            let cid = automaton.cell_id(x, y).unwrap();
            automaton.set_cell(cid, Material::ICE);
        }
        let cid = automaton.cell_id(10, 10).unwrap();
        automaton.set_cell(cid, Material::ICE);
        assert!(process_ice(&mut automaton, MaterialKind::Ice, Material::ICE, cid, 10, 10));
        assert_eq!(automaton.material(cid), Material::ICE);
    }
}
