//! Pairwise material reactions
//!
//! A reaction resolves what happens when a cell of kind A meets a neighbor of
//! kind B. Lookup is by ordered pair, so `(Fire, Water)` and `(Water, Fire)` are
//! separate entries. A missing entry means "no reaction", which is a normal
//! state and not a gap in the table.

mod families;
mod granular;
mod growth;
mod insects;
mod liquids;
mod thermal;

use tilesand_simulation::{Material, MaterialKind, MaterialStatus};

use super::automaton::Automaton;

pub use families::{always_swap, ant_eat, fire_burn, plant_growth, root_growth, swap};
pub use granular::*;
pub use growth::*;
pub use insects::*;
pub use liquids::*;
pub use thermal::*;

/// `(automaton, material_a, material_b, cell_a, cell_b) -> fired`
pub type ReactionFn = fn(&mut Automaton, Material, Material, usize, usize) -> bool;

/// Dispatch table indexed by `[kind_a][kind_b]`
#[derive(Clone, Copy)]
pub struct ReactionTable {
    entries: [[Option<ReactionFn>; MaterialKind::COUNT]; MaterialKind::COUNT],
}

impl Default for ReactionTable {
    fn default() -> Self {
        Self::empty()
    }
}

impl ReactionTable {
    pub const fn empty() -> Self {
        Self {
            entries: [[None; MaterialKind::COUNT]; MaterialKind::COUNT],
        }
    }

    /// Install (or replace) the reaction for `a` meeting `b`
    pub fn register(&mut self, a: MaterialKind, b: MaterialKind, reaction: ReactionFn) {
        self.entries[a.index()][b.index()] = Some(reaction);
    }

    pub fn register_many(&mut self, a: MaterialKind, targets: &[MaterialKind], reaction: ReactionFn) {
        for b in targets {
            self.register(a, *b, reaction);
        }
    }

    #[inline]
    pub fn lookup(&self, a: MaterialKind, b: MaterialKind) -> Option<ReactionFn> {
        self.entries[a.index()][b.index()]
    }

    #[inline]
    pub fn is_registered(&self, a: MaterialKind, b: MaterialKind) -> bool {
        self.entries[a.index()][b.index()].is_some()
    }

    /// Number of registered pairs
    pub fn len(&self) -> usize {
        self.entries.iter().flatten().filter(|e| e.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Kinds `a` has any reaction with
    pub fn targets_of(&self, a: MaterialKind) -> impl Iterator<Item = MaterialKind> + '_ {
        MaterialKind::ALL
            .into_iter()
            .filter(move |b| self.is_registered(a, *b))
    }

    /// Every reaction of the game
    pub fn standard() -> Self {
        use MaterialKind::*;

        let mut t = Self::empty();
        let gases = [Empty, Steam, Smoke];

        t.register_many(Sand, &gases, always_swap);
        t.register(Sand, Water, swap::<180>);
        t.register(Sand, Acid, sand_to_acid);
        t.register(Sand, Fire, sand_to_fire);
        t.register(Sand, Ice, sand_to_ice);

        t.register_many(Water, &gases, always_swap);
        t.register(Water, Acid, water_to_acid);
        t.register(Water, Fire, water_to_fire);
        t.register(Water, Ice, water_to_ice);
        t.register(Water, Ant, water_to_ant);
        t.register(Water, AntHill, water_to_ant_hill);
        t.register(Water, Stone, water_to_stone);

        t.register_many(Seed, &gases, always_swap);
        t.register(Seed, Water, swap::<100>);
        t.register(Seed, Acid, seed_to_acid);
        t.register(Seed, Ice, seed_to_ice);

        t.register_many(Acid, &gases, always_swap);
        t.register(Acid, Sand, acid_to_sand);
        t.register(Acid, Stone, acid_to_stone);
        t.register(Acid, Water, acid_to_water);
        t.register(Acid, Seed, acid_to_seed);
        t.register(Acid, Fire, acid_to_fire);
        t.register(Acid, Root, acid_to_root);
        t.register(Acid, Plant, acid_to_plant);
        t.register(Acid, Flower, acid_to_flower);
        t.register(Acid, Ice, acid_to_ice);
        t.register(Acid, AntHill, acid_to_ant_hill);
        t.register(Acid, Ant, acid_to_ant);
        t.register(Acid, Wasp, acid_to_wasp);

        t.register(Fire, Empty, always_swap);
        t.register_many(Fire, &[Steam, Smoke], swap::<128>);
        t.register(Fire, Water, fire_to_water);
        t.register(Fire, Acid, fire_to_acid);
        t.register(Fire, Plant, fire_to_plant);
        t.register(Fire, Ice, fire_to_ice);
        t.register(Fire, Ant, fire_to_ant);
        t.register(Fire, Wasp, fire_to_wasp);
        t.register(Fire, AntHill, fire_to_ant_hill);
        t.register(Fire, Seed, fire_burn::<60, 20>);
        t.register(Fire, Root, fire_burn::<40, 30>);
        t.register(Fire, Flower, fire_burn::<80, 20>);
        t.register(Fire, Sand, fire_burn::<0, 10>);
        t.register(Fire, Stone, fire_burn::<0, 5>);

        t.register_many(Ice, &[Empty, Smoke], always_swap);
        t.register(Ice, Water, ice_to_water);
        t.register(Ice, Seed, ice_to_seed);
        t.register(Ice, Root, ice_to_root);
        t.register(Ice, Plant, ice_to_plant);
        t.register(Ice, Flower, ice_to_flower);
        t.register(Ice, Wasp, ice_to_wasp);
        t.register(Ice, Acid, ice_to_acid);
        t.register(Ice, Fire, ice_to_fire);
        t.register(Ice, Steam, ice_to_steam);
        t.register(Ice, Sand, ice_to_sand);

        t.register(Smoke, Empty, always_swap);
        t.register(Smoke, Steam, swap::<40>);

        t.register(Steam, Empty, always_swap);
        t.register(Steam, Smoke, swap::<60>);
        t.register(Steam, Water, swap::<200>);

        t.register_many(Root, &[Empty, Steam, Smoke, AntHill], root_growth::<40>);
        t.register(Root, Seed, root_to_seed);
        t.register(Root, Water, root_to_water);
        t.register(Root, Sand, root_to_sand);
        t.register(Root, Stone, root_to_stone);
        t.register(Root, Root, root_to_root);
        t.register(Root, Plant, root_to_plant);
        t.register(Root, Ice, root_to_ice);

        t.register_many(Plant, &[Empty, Steam, Smoke, AntHill], plant_growth::<30>);
        t.register(Plant, Water, plant_to_water);
        t.register(Plant, Seed, plant_to_seed);
        t.register(Plant, Root, plant_to_root);
        t.register(Plant, Plant, plant_to_plant);
        t.register(Plant, Ice, plant_to_ice);

        t.register_many(AntHill, &gases, always_swap);
        t.register(AntHill, Water, swap::<60>);

        t.register_many(Ant, &[Empty, Steam, Smoke, AntHill], always_swap);
        t.register_many(Ant, &[Seed, Root, Plant, Flower], ant_eat::<40>);
        t.register(Ant, Stone, ant_to_stone);
        t.register(Ant, Sand, ant_to_sand);
        t.register(Ant, Water, ant_to_water);
        t.register(Ant, Acid, ant_to_acid);
        t.register(Ant, Fire, ant_to_fire);
        t.register(Ant, Wasp, ant_to_wasp);

        t.register(Wasp, Empty, always_swap);
        t.register(Wasp, Water, wasp_to_water);
        t.register(Wasp, Ant, wasp_to_ant);
        t.register(Wasp, Acid, wasp_to_acid);
        t.register(Wasp, Fire, wasp_to_fire);
        t.register(Wasp, Steam, wasp_to_steam);
        t.register(Wasp, Smoke, wasp_to_smoke);
        t.register(Wasp, Ice, wasp_to_ice);

        t
    }
}

impl std::fmt::Debug for ReactionTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReactionTable")
            .field("registered", &self.len())
            .finish()
    }
}

/// Mark the cell Frozen and finalize it
#[inline]
pub(crate) fn freeze(automaton: &mut Automaton, cid: usize, material: Material) {
    automaton.set_cell_as_processed(cid, material.with_status(MaterialStatus::Frozen));
}

/// Lower life by one and finalize
#[inline]
pub(crate) fn weaken(automaton: &mut Automaton, cid: usize, material: Material) {
    automaton.set_cell_as_processed(cid, material.with_life(material.life().saturating_sub(1)));
}

/// Raise life by one (capped at 3) and finalize
#[inline]
pub(crate) fn strengthen(automaton: &mut Automaton, cid: usize, material: Material) {
    automaton.set_cell_as_processed(cid, material.with_life((material.life() + 1).min(3)));
}
