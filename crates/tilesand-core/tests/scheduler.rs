//! Tile wake propagation and the once-per-tick guarantee

use glam::IVec2;
use tilesand_core::{Automaton, GeneratorOptions};
use tilesand_core::simulation::{Material, MaterialKind};
use tilesand_core::world::TileMask;

fn put(automaton: &mut Automaton, x: i32, y: i32, material: Material) -> usize {
    let cid = automaton.cell_id(x, y).unwrap();
    automaton.set_cell(cid, material);
    cid
}

fn mask(tiles: &[(i32, i32)]) -> TileMask {
    let mut mask = TileMask::NONE;
    for &(x, y) in tiles {
        mask.wake(IVec2::new(x, y));
    }
    mask
}

fn sand_count(automaton: &Automaton) -> usize {
    automaton
        .materials()
        .iter()
        .filter(|m| m.is_kind(MaterialKind::Sand))
        .count()
}

// ============================================================================
// Wake propagation
// ============================================================================

#[test]
fn test_empty_world_goes_to_sleep() {
    let mut automaton = Automaton::seeded(1);
    automaton.activate_all();
    let stats = automaton.update();
    assert_eq!(stats.active_tiles, 64);
    assert_eq!(stats.cells_processed, 0);
    assert!(automaton.wake_tiles().is_empty());
}

#[test]
fn test_activity_on_right_column_wakes_right_neighbor() {
    let mut automaton = Automaton::seeded(2);
    put(&mut automaton, 31, 10, Material::SAND);
    automaton.activate_all();
    automaton.update();
    assert_eq!(automaton.wake_tiles(), mask(&[(0, 0), (1, 0)]));
}

#[test]
fn test_activity_in_a_corner_wakes_the_diagonal() {
    let mut automaton = Automaton::seeded(3);
    put(&mut automaton, 31, 31, Material::SAND);
    automaton.activate_all();
    automaton.update();
    assert_eq!(
        automaton.wake_tiles(),
        mask(&[(0, 0), (1, 0), (0, 1), (1, 1)])
    );
}

#[test]
fn test_activity_inside_a_tile_stays_local() {
    let mut automaton = Automaton::seeded(4);
    put(&mut automaton, 100, 100, Material::SAND);
    automaton.activate_all();
    automaton.update();
    assert_eq!(automaton.wake_tiles(), mask(&[(3, 3)]));
}

#[test]
fn test_resting_grain_does_not_keep_its_tile_awake() {
    let mut automaton = Automaton::seeded(5);
    put(&mut automaton, 100, 255, Material::SAND);
    automaton.activate_all();
    let stats = automaton.update();
    assert_eq!(stats.cells_processed, 1);
    assert_eq!(stats.active_cells, 0);
    assert!(automaton.wake_tiles().is_empty());
}

#[test]
fn test_grain_crosses_tile_rows_without_stalling() {
    let mut automaton = Automaton::seeded(6);
    automaton.apply_brush(MaterialKind::Sand, 40, 28, 1);
    for _ in 0..8 {
        automaton.update();
    }
    let cid = automaton
        .materials()
        .iter()
        .position(|m| m.is_kind(MaterialKind::Sand))
        .unwrap();
    assert_eq!(automaton.cell_pos(cid).1, 36);
}

// ============================================================================
// Once per tick
// ============================================================================

#[test]
fn test_every_changed_cell_is_stamped() {
    let mut automaton = Automaton::seeded(7);
    automaton.apply_brush(MaterialKind::Sand, 64, 40, 31);
    automaton.apply_brush(MaterialKind::Sand, 190, 120, 21);

    for _ in 0..20 {
        let before = automaton.materials().to_vec();
        automaton.update();
        for (cid, old) in before.iter().enumerate() {
            if automaton.material(cid) != *old {
                assert!(automaton.is_processed(cid), "cell {cid} changed unstamped");
            }
        }
    }
}

#[test]
fn test_boxed_water_claims_its_cell_before_the_sand_above() {
    // water always reports activity against stone, even when it does not move;
    // the sand above is scanned later and must not swap into its cell
    let mut automaton = Automaton::seeded(12);
    automaton.set_tick(1);
    for (x, y) in [(9, 11), (10, 11), (11, 11), (11, 10)] {
        put(&mut automaton, x, y, Material::STONE);
    }
    let water = put(&mut automaton, 10, 10, Material::WATER);
    put(&mut automaton, 10, 9, Material::SAND);

    assert!(automaton.process_cell(10, 10));
    assert!(automaton.is_processed(water));
    let settled = automaton.material(water);

    automaton.process_cell(10, 9);
    assert_eq!(automaton.material(water), settled);
    assert!(!automaton.material(water).is_kind(MaterialKind::Sand));
}

#[test]
fn test_every_active_cell_is_stamped() {
    let mut automaton = Automaton::seeded(13);
    automaton.generate(&GeneratorOptions {
        seed: Some(5),
        ..GeneratorOptions::closed(0.45)
    });
    automaton.apply_brush(MaterialKind::Water, 60, 40, 25);
    automaton.apply_brush(MaterialKind::Smoke, 180, 200, 15);
    automaton.apply_brush(MaterialKind::Sand, 128, 30, 21);

    for tick in 1..=5 {
        automaton.set_tick(tick);
        for y in (0..256).rev() {
            for x in 0..256 {
                if automaton.process_cell(x, y) {
                    let cid = automaton.cell_id(x as i32, y as i32).unwrap();
                    assert!(automaton.is_processed(cid), "({x}, {y}) active but unstamped");
                }
            }
        }
    }
}

#[test]
fn test_sand_is_conserved() {
    let mut automaton = Automaton::seeded(8);
    automaton.apply_brush(MaterialKind::Sand, 64, 40, 31);
    automaton.apply_brush(MaterialKind::Water, 64, 120, 31);
    automaton.apply_brush(MaterialKind::Water, 180, 30, 21);
    let grains = sand_count(&automaton);

    for _ in 0..200 {
        automaton.update();
        assert_eq!(sand_count(&automaton), grains);
    }
}

#[test]
fn test_no_grain_moves_twice_in_a_tick() {
    // a full column: each grain may drop at most one row per tick, so the
    // lowest grain sets the pace for the whole column
    let mut automaton = Automaton::seeded(9);
    for y in 0..256 {
        put(&mut automaton, 76, y, Material::STONE);
        put(&mut automaton, 78, y, Material::STONE);
    }
    for y in 0..20 {
        put(&mut automaton, 77, y, Material::SAND);
    }
    automaton.activate_all();

    for tick in 1..=10 {
        automaton.update();
        let top = (0..256)
            .find(|y| automaton.material_at(77, *y).is_kind(MaterialKind::Sand))
            .unwrap();
        let bottom = (0..256)
            .rev()
            .find(|y| automaton.material_at(77, *y).is_kind(MaterialKind::Sand))
            .unwrap();
        assert_eq!(bottom, 19 + tick);
        assert!(top <= tick);
    }
    assert_eq!(sand_count(&automaton), 20);
}

#[test]
fn test_paused_world_does_not_move() {
    let mut automaton = Automaton::seeded(10);
    automaton.apply_brush(MaterialKind::Water, 128, 50, 11);
    let materials = automaton.materials().to_vec();
    automaton.pause();
    for _ in 0..5 {
        automaton.update();
    }
    assert_eq!(automaton.materials(), materials.as_slice());
    assert_eq!(automaton.tick(), 5);

    automaton.resume();
    automaton.update();
    assert_ne!(automaton.materials(), materials.as_slice());
}
