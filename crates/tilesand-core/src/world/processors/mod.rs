//! Per-kind cell behavior
//!
//! A processor runs once per unprocessed cell of its kind per tick and reports
//! whether the cell had, or could have had, an effect. Only that report keeps
//! a tile awake, so a processor that waits for its turn phase must still
//! probe its neighbors on off ticks.

mod gases;
mod granular;
mod growth;
mod ice;
mod insects;
mod liquids;

use tilesand_simulation::{Material, MaterialKind, MaterialStatus};

use super::automaton::{Automaton, ReactAttempt};
use super::neighbor_queries::NeighborQueries;

pub use gases::{process_fire, process_smoke, process_steam};
pub use granular::{process_ant_hill, process_sand, process_seed};
pub use growth::{process_flower, process_plant, process_root};
pub use ice::process_ice;
pub use insects::{process_ant, process_wasp};
pub use liquids::{process_acid, process_water};

/// `(automaton, kind, material, cell, x, y) -> active`
pub type ProcessorFn = fn(&mut Automaton, MaterialKind, Material, usize, i32, i32) -> bool;

/// Processor per kind; kinds without one never act on their own
#[derive(Clone, Copy)]
pub struct ProcessorTable {
    entries: [Option<ProcessorFn>; MaterialKind::COUNT],
}

impl Default for ProcessorTable {
    fn default() -> Self {
        Self::empty()
    }
}

impl ProcessorTable {
    pub const fn empty() -> Self {
        Self {
            entries: [None; MaterialKind::COUNT],
        }
    }

    pub fn register(&mut self, kind: MaterialKind, processor: ProcessorFn) {
        self.entries[kind.index()] = Some(processor);
    }

    #[inline]
    pub fn lookup(&self, kind: MaterialKind) -> Option<ProcessorFn> {
        self.entries[kind.index()]
    }

    pub fn is_registered(&self, kind: MaterialKind) -> bool {
        self.entries[kind.index()].is_some()
    }

    /// Every kind but Empty and Stone
    pub fn standard() -> Self {
        use MaterialKind::*;

        let mut t = Self::empty();
        t.register(Sand, process_sand);
        t.register(Water, process_water);
        t.register(Seed, process_seed);
        t.register(AntHill, process_ant_hill);
        t.register(Acid, process_acid);
        t.register(Fire, process_fire);
        t.register(Ice, process_ice);
        t.register(Smoke, process_smoke);
        t.register(Steam, process_steam);
        t.register(Root, process_root);
        t.register(Plant, process_plant);
        t.register(Flower, process_flower);
        t.register(Ant, process_ant);
        t.register(Wasp, process_wasp);
        t
    }
}

impl std::fmt::Debug for ProcessorTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(MaterialKind::ALL.into_iter().filter(|k| self.is_registered(*k)))
            .finish()
    }
}

/// Frozen cells only wait to thaw
///
/// On a `turn5_shift1` tick the cell returns to Normal with a chance equal to
/// its temperature. Always active so the tile keeps checking.
pub(crate) fn thaw_check(automaton: &mut Automaton, material: Material, cid: usize, x: i32, y: i32) -> bool {
    if automaton.phase().turn5_shift1 {
        let temperature = NeighborQueries::temperature(automaton, x, y);
        if automaton.rng.chance256(temperature) {
            automaton.set_cell_as_processed(cid, material.with_status(MaterialStatus::Normal));
        }
    }
    true
}

/// A weighted three-way move: straight, diagonal and sideways
///
/// The preferred side comes from the cell's facing, inverted with chance
/// `flip`. `order` holds the `pick3` thresholds choosing between
/// sideways-diagonal-straight, diagonal-straight-sideways and
/// straight-diagonal-sideways.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Flow {
    pub flip: u8,
    pub order: (u8, u8),
    /// 1 for falling, -1 for rising
    pub dy: i32,
}

impl Flow {
    /// Try the three moves in order, stopping at the first that reacted.
    /// Also returns the horizontal direction used.
    pub fn run(
        self,
        automaton: &mut Automaton,
        kind: MaterialKind,
        material: Material,
        cid: usize,
        x: i32,
        y: i32,
    ) -> (ReactAttempt, i32) {
        let mut left = material.face_left();
        if automaton.rng.chance256(self.flip) {
            left = !left;
        }
        let dir = if left { -1 } else { 1 };

        let straight = (x, y + self.dy);
        let diagonal = (x + dir, y + self.dy);
        let sideways = (x + dir, y);
        let order = match automaton.rng.pick3(self.order.0, self.order.1) {
            0 => [sideways, diagonal, straight],
            1 => [diagonal, straight, sideways],
            _ => [straight, diagonal, sideways],
        };

        let mut outcome = ReactAttempt::NONE;
        for (tx, ty) in order {
            let attempt = automaton.try_react_at(cid, material, kind, tx, ty);
            if attempt.can_react {
                outcome.can_react = true;
                if attempt.reacted {
                    outcome.reacted = true;
                    break;
                }
            }
        }
        (outcome, dir)
    }
}

/// Flip the facing when the other side offers a reaction
///
/// Probes `(x - dir, y)` and `(x - dir, y + dy)`.
pub(crate) fn turn_around(
    automaton: &mut Automaton,
    kind: MaterialKind,
    material: Material,
    cid: usize,
    (x, y): (i32, i32),
    dir: i32,
    dy: i32,
) -> bool {
    if automaton.can_react_at(kind, x - dir, y) || automaton.can_react_at(kind, x - dir, y + dy) {
        automaton.set_cell(cid, material.with_face_left(!material.face_left()));
        return true;
    }
    false
}

/// Cardinal step: 0 up, 1 down, 2 left, anything else right
#[inline]
pub(crate) fn cardinal(direction: u8, x: i32, y: i32) -> (i32, i32) {
    match direction {
        0 => (x, y - 1),
        1 => (x, y + 1),
        2 => (x - 1, y),
        _ => (x + 1, y),
    }
}

/// Whether any of up, down, left, right offers a reaction
pub(crate) fn probe_cardinals(automaton: &Automaton, kind: MaterialKind, x: i32, y: i32) -> bool {
    (0..4).any(|d| {
        let (tx, ty) = cardinal(d, x, y);
        automaton.can_react_at(kind, tx, ty)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tilesand_simulation::SimRng;

    #[test]
    fn test_standard_table_skips_inert_kinds() {
        let table = ProcessorTable::standard();
        assert!(table.lookup(MaterialKind::Empty).is_none());
        assert!(table.lookup(MaterialKind::Stone).is_none());
        let registered = MaterialKind::ALL
            .into_iter()
            .filter(|k| table.is_registered(*k))
            .count();
        assert_eq!(registered, 14);
    }

    #[test]
    fn test_cardinal_steps() {
        assert_eq!(cardinal(0, 5, 5), (5, 4));
        assert_eq!(cardinal(1, 5, 5), (5, 6));
        assert_eq!(cardinal(2, 5, 5), (4, 5));
        assert_eq!(cardinal(3, 5, 5), (6, 5));
    }

    #[test]
    fn test_thaw_only_on_its_phase() {
        let mut automaton = Automaton::with_rng(SimRng::scripted(&[0]).unwrap(), 0);
        let frozen = Material::SAND.with_status(MaterialStatus::Frozen);
        let cid = automaton.cell_id(10, 10).unwrap();
        automaton.set_cell(cid, frozen);

        automaton.set_tick(2);
        assert!(thaw_check(&mut automaton, frozen, cid, 10, 10));
        assert!(automaton.material(cid).is_frozen());
        assert_eq!(automaton.rng.ring().cursor(), 0);

        automaton.set_tick(6);
        assert!(thaw_check(&mut automaton, frozen, cid, 10, 10));
        assert_eq!(automaton.material(cid), Material::SAND);
    }

    #[test]
    fn test_probe_cardinals_ignores_diagonals() {
        let mut automaton = Automaton::seeded(3);
        automaton.activate_all();
        let root = MaterialKind::Root;
        // roots react with stone; only the diagonals keep it
        for (dx, dy) in NeighborQueries::MOORE {
            let cid = automaton.cell_id(20 + dx, 20 + dy).unwrap();
            automaton.set_cell(cid, Material::STONE.with_is_penetrable(false));
        }
        for d in 0..4 {
            let (x, y) = cardinal(d, 20, 20);
            let cid = automaton.cell_id(x, y).unwrap();
            automaton.set_cell(cid, Material::FLOWER);
        }
        assert!(!probe_cardinals(&automaton, root, 20, 20));

        let cid = automaton.cell_id(20, 19).unwrap();
        automaton.set_cell(cid, Material::EMPTY);
        assert!(probe_cardinals(&automaton, root, 20, 20));
    }
}
