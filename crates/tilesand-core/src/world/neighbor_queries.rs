//! Neighbor cell queries

use tilesand_simulation::{MaterialKind, MaterialKindSet};

use super::automaton::Automaton;

/// Neighbor queries - stateless methods over an automaton's grid
pub struct NeighborQueries;

impl NeighborQueries {
    /// Offsets of the 8 neighbors
    ///
    /// Order: NW, N, NE, W, E, SW, S, SE
    pub const MOORE: [(i32, i32); 8] = [
        (-1, -1),
        (0, -1),
        (1, -1),
        (-1, 0),
        (1, 0),
        (-1, 1),
        (0, 1),
        (1, 1),
    ];

    /// Offsets of the 4 orthogonal neighbors
    ///
    /// Order: W, E, N, S
    pub const ORTHOGONAL: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

    /// Whether any in-bounds 8-neighbor of `(x, y)` is in `set`
    pub fn has_neighbor_kind(automaton: &Automaton, x: i32, y: i32, set: MaterialKindSet) -> bool {
        Self::MOORE.iter().any(|(dx, dy)| {
            automaton
                .cell_id(x + dx, y + dy)
                .is_some_and(|cid| automaton.material(cid).is_in(set))
        })
    }

    /// Cold contributed by one cell: Ice 63, anything Frozen 17
    pub fn cold(automaton: &Automaton, x: i32, y: i32) -> u8 {
        let material = automaton.material_at(x, y);
        if material.is_kind(MaterialKind::Ice) {
            63
        } else if material.is_frozen() {
            17
        } else {
            0
        }
    }

    /// 255 minus the cold of the 4 orthogonal neighbors; lower is colder
    pub fn temperature(automaton: &Automaton, x: i32, y: i32) -> u8 {
        Self::ORTHOGONAL
            .iter()
            .fold(255u8, |temp, (dx, dy)| temp - Self::cold(automaton, x + dx, y + dy))
    }

    /// Whether an 8-neighbor is Water and another is Sand
    pub fn touches_water_and_sand(automaton: &Automaton, x: i32, y: i32) -> bool {
        let mut water = false;
        let mut sand = false;
        for (dx, dy) in Self::MOORE {
            let Some(cid) = automaton.cell_id(x + dx, y + dy) else {
                continue;
            };
            match automaton.material(cid).kind() {
                MaterialKind::Water => water = true,
                MaterialKind::Sand => sand = true,
                _ => {}
            }
            if water && sand {
                return true;
            }
        }
        false
    }

    /// Whether any in-bounds orthogonal neighbor is in `set`
    pub fn has_orthogonal_kind(automaton: &Automaton, x: i32, y: i32, set: MaterialKindSet) -> bool {
        Self::ORTHOGONAL.iter().any(|(dx, dy)| {
            automaton
                .cell_id(x + dx, y + dy)
                .is_some_and(|cid| automaton.material(cid).is_in(set))
        })
    }
}
