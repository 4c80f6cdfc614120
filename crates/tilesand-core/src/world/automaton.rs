//! The grid and its tick loop
//!
//! `Automaton` owns every per-cell array (materials, RGBA pixels, processed
//! stamps) together with the tile wake mask and the shared byte ring. A tick
//! scans only the tiles woken by the previous tick, bottom row first, and
//! hands every unprocessed cell to the processor registered for its kind.

use log::{info, trace};
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256StarStar;
use tilesand_simulation::{ByteRing, Material, MaterialKind, MaterialKindSet, Palette, SimRng};

use super::neighbor_queries::NeighborQueries;
use super::processors::ProcessorTable;
use super::reactions::ReactionTable;
use super::stats::{SimStats, TickStats};
use super::tiles::{
    CELL_COUNT, TILE_COUNT, TILE_SIZE, TileMask, WORLD_HEIGHT, WORLD_WIDTH, tile_origin,
};
use super::turn_phase::TurnPhase;
use crate::config::SimulationConfig;
use crate::error::ConfigError;

/// Outcome of [`Automaton::try_react_at`]
///
/// `can_react` without `reacted` means the direction holds potential activity
/// but was blocked this tick, which keeps the tile awake.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReactAttempt {
    pub can_react: bool,
    pub reacted: bool,
}

impl ReactAttempt {
    pub const NONE: Self = Self {
        can_react: false,
        reacted: false,
    };
    pub const BLOCKED: Self = Self {
        can_react: true,
        reacted: false,
    };
}

pub struct Automaton {
    pub(crate) materials: Vec<Material>,
    pixels: Vec<u8>,
    processed: Vec<u32>,
    tick: u32,
    phase: TurnPhase,
    wake: TileMask,
    paused: bool,
    seed: u64,
    pub(crate) rng: SimRng,
    pub(crate) brush_rng: Xoshiro256StarStar,
    reactions: ReactionTable,
    processors: ProcessorTable,
    palette: Palette,
    pub(crate) stats: TickStats,
}

impl Automaton {
    /// Build an automaton from validated configuration
    ///
    /// A missing seed is drawn from `rand` and logged so the run can be replayed.
    pub fn new(config: &SimulationConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let seed = config.seed.unwrap_or_else(rand::random);
        let ring = ByteRing::seeded(seed, config.ring_size)?;
        info!(
            "Creating {}x{} automaton (seed {}, ring {} bytes)",
            WORLD_WIDTH, WORLD_HEIGHT, seed, config.ring_size
        );
        Ok(Self::with_rng(SimRng::new(ring), seed))
    }

    /// Default ring size, fixed seed
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(SimRng::seeded(seed), seed)
    }

    /// Use a prepared byte source; `seed` drives brushes and generation
    pub fn with_rng(rng: SimRng, seed: u64) -> Self {
        Self::with_palette(rng, seed, Palette::default())
    }

    pub fn with_palette(rng: SimRng, seed: u64, palette: Palette) -> Self {
        let empty = palette.color_of(Material::EMPTY);
        Self {
            materials: vec![Material::EMPTY; CELL_COUNT],
            pixels: empty.repeat(CELL_COUNT),
            processed: vec![0; CELL_COUNT],
            tick: 0,
            phase: TurnPhase::for_tick(0),
            wake: TileMask::NONE,
            paused: false,
            seed,
            rng,
            brush_rng: Xoshiro256StarStar::seed_from_u64(seed),
            reactions: ReactionTable::standard(),
            processors: ProcessorTable::standard(),
            palette,
            stats: TickStats::default(),
        }
    }

    pub const fn width(&self) -> usize {
        WORLD_WIDTH
    }

    pub const fn height(&self) -> usize {
        WORLD_HEIGHT
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn tick(&self) -> u32 {
        self.tick
    }

    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    /// Jump to `tick` without simulating, e.g. to land on a growth phase
    pub fn set_tick(&mut self, tick: u32) {
        self.tick = tick;
        self.phase = TurnPhase::for_tick(tick);
    }

    pub fn stats(&self) -> TickStats {
        self.stats
    }

    pub fn rng_mut(&mut self) -> &mut SimRng {
        &mut self.rng
    }

    pub fn reactions(&self) -> &ReactionTable {
        &self.reactions
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    // ===== Cell access =====

    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < WORLD_WIDTH && (y as usize) < WORLD_HEIGHT
    }

    #[inline]
    pub fn cell_id(&self, x: i32, y: i32) -> Option<usize> {
        self.in_bounds(x, y)
            .then(|| y as usize * WORLD_WIDTH + x as usize)
    }

    #[inline]
    pub fn cell_pos(&self, cid: usize) -> (usize, usize) {
        (cid % WORLD_WIDTH, cid / WORLD_WIDTH)
    }

    #[inline]
    pub fn material(&self, cid: usize) -> Material {
        self.materials[cid]
    }

    /// Empty outside the world
    #[inline]
    pub fn material_at(&self, x: i32, y: i32) -> Material {
        self.cell_id(x, y)
            .map_or(Material::EMPTY, |cid| self.materials[cid])
    }

    pub fn materials(&self) -> &[Material] {
        &self.materials
    }

    /// Write a material and its color
    #[inline]
    pub fn set_cell(&mut self, cid: usize, material: Material) {
        self.materials[cid] = material;
        let color = self.palette.color_of(material);
        self.pixels[cid * 4..cid * 4 + 4].copy_from_slice(&color);
    }

    /// Write a material and finalize the cell for this tick
    #[inline]
    pub fn set_cell_as_processed(&mut self, cid: usize, material: Material) {
        self.set_cell(cid, material);
        self.processed[cid] = self.tick;
    }

    /// Exchange two cells and finalize both for this tick
    pub fn swap_cells(&mut self, a: usize, b: usize) {
        self.materials.swap(a, b);
        for i in 0..4 {
            self.pixels.swap(a * 4 + i, b * 4 + i);
        }
        self.processed[a] = self.tick;
        self.processed[b] = self.tick;
        self.stats.record_swap();
    }

    #[inline]
    pub fn is_processed(&self, cid: usize) -> bool {
        self.processed[cid] == self.tick
    }

    pub(crate) fn clear_processed(&mut self) {
        self.processed.fill(0);
    }

    /// Whether any of the 8 neighbors of `(x, y)` is in `set`
    pub fn has_neighbor_kind(&self, x: i32, y: i32, set: MaterialKindSet) -> bool {
        NeighborQueries::has_neighbor_kind(self, x, y, set)
    }

    // ===== Reactions =====

    /// Try the reaction between `material` at `origin` and the cell at `(x, y)`
    ///
    /// Out of bounds and unregistered pairs give [`ReactAttempt::NONE`]. A
    /// target already finalized this tick gives [`ReactAttempt::BLOCKED`]
    /// before the table is consulted.
    pub fn try_react_at(
        &mut self,
        origin: usize,
        material: Material,
        kind: MaterialKind,
        x: i32,
        y: i32,
    ) -> ReactAttempt {
        let Some(target) = self.cell_id(x, y) else {
            return ReactAttempt::NONE;
        };
        if self.processed[target] == self.tick {
            return ReactAttempt::BLOCKED;
        }
        let other = self.materials[target];
        let Some(reaction) = self.reactions.lookup(kind, other.kind()) else {
            return ReactAttempt::NONE;
        };
        let reacted = reaction(self, material, other, origin, target);
        if reacted {
            self.stats.record_reaction();
        }
        ReactAttempt {
            can_react: true,
            reacted,
        }
    }

    /// In bounds and a reaction is registered for the pair. Ignores processed stamps.
    pub fn can_react_at(&self, kind: MaterialKind, x: i32, y: i32) -> bool {
        self.cell_id(x, y).is_some_and(|cid| {
            self.reactions
                .is_registered(kind, self.materials[cid].kind())
        })
    }

    // ===== Scheduling =====

    pub fn wake_tiles(&self) -> TileMask {
        self.wake
    }

    pub fn activate_all(&mut self) {
        self.wake = TileMask::ALL;
    }

    pub(crate) fn wake_mut(&mut self) -> &mut TileMask {
        &mut self.wake
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub(crate) fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    fn advance_tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
        if self.tick == 0 {
            // stale stamps from the previous lap would read as processed
            self.processed.fill(0);
            self.tick = 1;
        }
        self.phase = TurnPhase::for_tick(self.tick);
        self.stats = TickStats::for_tick(self.tick);
    }

    /// Advance the world by one tick
    ///
    /// While paused only the tick counter moves; the wake mask is kept so the
    /// world resumes where it stopped.
    pub fn update(&mut self) -> TickStats {
        self.advance_tick();
        if self.paused {
            return self.stats;
        }

        let active = std::mem::take(&mut self.wake);
        self.stats.active_tiles = active.count();

        let ascending = self.rng.next_bool();
        for i in 0..TILE_COUNT {
            let index = if ascending { i } else { TILE_COUNT - 1 - i };
            if active.contains_index(index) {
                self.update_tile(index);
            }
        }

        trace!(
            "tick {}: {} tiles, {} cells, {} active, {} swaps, {} reactions, {} tiles next",
            self.tick,
            self.stats.active_tiles,
            self.stats.cells_processed,
            self.stats.active_cells,
            self.stats.swaps,
            self.stats.reactions,
            self.wake.count()
        );
        self.stats
    }

    fn update_tile(&mut self, index: usize) {
        let (x0, y0) = tile_origin(index);
        let left_to_right = self.rng.next_bool();
        for y in (y0..y0 + TILE_SIZE).rev() {
            for i in 0..TILE_SIZE {
                let x = if left_to_right {
                    x0 + i
                } else {
                    x0 + TILE_SIZE - 1 - i
                };
                self.process_cell(x, y);
            }
        }
    }

    /// Run the processor of the cell at `(x, y)` once, as the tick loop does
    ///
    /// Returns whether the processor reported activity. An active cell is
    /// stamped even when it changed in place or did not change at all, so no
    /// later processor writes it this tick; the owning tile (and any tile
    /// across a touched edge) is then woken for the next tick.
    pub fn process_cell(&mut self, x: usize, y: usize) -> bool {
        let cid = y * WORLD_WIDTH + x;
        if self.processed[cid] == self.tick {
            return false;
        }
        let material = self.materials[cid];
        let kind = material.kind();
        let Some(processor) = self.processors.lookup(kind) else {
            return false;
        };

        self.stats.record_cell_processed();
        let active = processor(self, kind, material, cid, x as i32, y as i32);
        if active {
            self.processed[cid] = self.tick;
            self.stats.record_active_cell();
            self.wake.wake_around_cell(x, y);
        }
        active
    }

    // ===== Display =====

    /// RGBA bytes, 4 per cell, row-major
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Copy the color buffer into `target`; returns the number of bytes written
    pub fn draw_into(&self, target: &mut [u8]) -> usize {
        let n = target.len().min(self.pixels.len());
        target[..n].copy_from_slice(&self.pixels[..n]);
        n
    }

    /// Recompute every pixel from its material
    pub(crate) fn repaint(&mut self) {
        for cid in 0..CELL_COUNT {
            let color = self.palette.color_of(self.materials[cid]);
            self.pixels[cid * 4..cid * 4 + 4].copy_from_slice(&color);
        }
    }

    /// Replace both per-cell arrays at once, keeping them in step
    pub(crate) fn replace_cells(&mut self, materials: Vec<Material>, pixels: Vec<u8>) {
        debug_assert_eq!(materials.len(), CELL_COUNT);
        debug_assert_eq!(pixels.len(), CELL_COUNT * 4);
        self.materials = materials;
        self.pixels = pixels;
    }
}

impl std::fmt::Debug for Automaton {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Automaton")
            .field("tick", &self.tick)
            .field("seed", &self.seed)
            .field("paused", &self.paused)
            .field("wake", &self.wake)
            .field("rng", &self.rng)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tilesand_simulation::MaterialStatus;

    fn put(automaton: &mut Automaton, x: i32, y: i32, material: Material) -> usize {
        let cid = automaton.cell_id(x, y).unwrap();
        automaton.set_cell(cid, material);
        cid
    }

    #[test]
    fn test_new_world_is_empty() {
        let automaton = Automaton::seeded(1);
        assert_eq!(automaton.materials().len(), CELL_COUNT);
        assert!(automaton.materials().iter().all(|m| m.is_empty()));
        assert_eq!(automaton.pixels().len(), CELL_COUNT * 4);
        assert!(automaton.pixels().iter().all(|b| *b == 0));
        assert!(automaton.wake_tiles().is_empty());
    }

    #[test]
    fn test_new_from_config() {
        let config = SimulationConfig {
            seed: Some(77),
            ring_size: 1024,
            ..SimulationConfig::default()
        };
        let automaton = Automaton::new(&config).unwrap();
        assert_eq!(automaton.seed(), 77);
        assert_eq!(automaton.rng.ring().len(), 1024);

        let bad = SimulationConfig {
            ring_size: 3,
            ..SimulationConfig::default()
        };
        assert!(Automaton::new(&bad).is_err());
    }

    #[test]
    fn test_bounds_and_sentinels() {
        let automaton = Automaton::seeded(1);
        assert!(automaton.in_bounds(0, 0));
        assert!(automaton.in_bounds(255, 255));
        assert!(!automaton.in_bounds(-1, 0));
        assert!(!automaton.in_bounds(0, 256));
        assert_eq!(automaton.cell_id(3, 2), Some(2 * 256 + 3));
        assert_eq!(automaton.cell_id(256, 0), None);
        assert_eq!(automaton.material_at(-5, 9), Material::EMPTY);
        assert_eq!(automaton.cell_pos(2 * 256 + 3), (3, 2));
    }

    #[test]
    fn test_set_cell_writes_color() {
        let mut automaton = Automaton::seeded(1);
        let cid = put(&mut automaton, 10, 10, Material::WATER);
        let expected = automaton.palette().color_of(Material::WATER);
        assert_eq!(&automaton.pixels()[cid * 4..cid * 4 + 4], &expected);
    }

    #[test]
    fn test_swap_moves_colors_and_stamps() {
        let mut automaton = Automaton::seeded(1);
        automaton.set_tick(5);
        let a = put(&mut automaton, 1, 1, Material::SAND);
        let b = put(&mut automaton, 1, 2, Material::EMPTY);
        let sand_color = automaton.palette().color_of(Material::SAND);

        automaton.swap_cells(a, b);

        assert_eq!(automaton.material(b), Material::SAND);
        assert_eq!(automaton.material(a), Material::EMPTY);
        assert_eq!(&automaton.pixels()[b * 4..b * 4 + 4], &sand_color);
        assert!(automaton.is_processed(a));
        assert!(automaton.is_processed(b));
        assert_eq!(automaton.stats().swaps, 1);
    }

    #[test]
    fn test_try_react_at_outcomes() {
        let mut automaton = Automaton::seeded(1);
        automaton.set_tick(4);
        let sand = put(&mut automaton, 5, 5, Material::SAND);

        // off the world
        let attempt = automaton.try_react_at(sand, Material::SAND, MaterialKind::Sand, 5, -1);
        assert_eq!(attempt, ReactAttempt::NONE);

        // no Sand -> Stone reaction
        put(&mut automaton, 5, 6, Material::STONE);
        let attempt = automaton.try_react_at(sand, Material::SAND, MaterialKind::Sand, 5, 6);
        assert_eq!(attempt, ReactAttempt::NONE);

        // target already finalized
        let target = put(&mut automaton, 6, 6, Material::EMPTY);
        automaton.set_cell_as_processed(target, Material::EMPTY);
        let attempt = automaton.try_react_at(sand, Material::SAND, MaterialKind::Sand, 6, 6);
        assert_eq!(attempt, ReactAttempt::BLOCKED);

        // always_swap into Empty
        put(&mut automaton, 4, 6, Material::EMPTY);
        let attempt = automaton.try_react_at(sand, Material::SAND, MaterialKind::Sand, 4, 6);
        assert_eq!(
            attempt,
            ReactAttempt {
                can_react: true,
                reacted: true
            }
        );
        assert_eq!(automaton.material_at(4, 6), Material::SAND);
        assert_eq!(automaton.stats().reactions, 1);
    }

    #[test]
    fn test_can_react_at_ignores_stamps() {
        let mut automaton = Automaton::seeded(1);
        automaton.set_tick(3);
        let cid = put(&mut automaton, 0, 1, Material::EMPTY);
        automaton.set_cell_as_processed(cid, Material::EMPTY);
        assert!(automaton.can_react_at(MaterialKind::Sand, 0, 1));
        assert!(!automaton.can_react_at(MaterialKind::Sand, 0, 256));
        put(&mut automaton, 0, 2, Material::STONE);
        assert!(!automaton.can_react_at(MaterialKind::Sand, 0, 2));
    }

    #[test]
    fn test_sleeping_world_does_nothing() {
        let mut automaton = Automaton::seeded(1);
        put(&mut automaton, 100, 100, Material::SAND);
        let stats = automaton.update();
        assert_eq!(stats.tick, 1);
        assert_eq!(stats.active_tiles, 0);
        assert_eq!(stats.cells_processed, 0);
        assert_eq!(automaton.material_at(100, 100), Material::SAND);
    }

    #[test]
    fn test_paused_update_keeps_wake_mask() {
        let mut automaton = Automaton::seeded(1);
        put(&mut automaton, 100, 100, Material::SAND);
        automaton.activate_all();
        automaton.set_paused(true);

        let stats = automaton.update();
        assert_eq!(stats.cells_processed, 0);
        assert_eq!(automaton.wake_tiles(), TileMask::ALL);
        assert_eq!(automaton.material_at(100, 100), Material::SAND);
        assert_eq!(automaton.tick(), 1);
    }

    #[test]
    fn test_frozen_cell_keeps_tile_awake() {
        let mut automaton = Automaton::seeded(1);
        put(
            &mut automaton,
            40,
            40,
            Material::SAND.with_status(MaterialStatus::Frozen),
        );
        put(&mut automaton, 40, 41, Material::STONE);
        automaton.activate_all();
        let stats = automaton.update();
        assert_eq!(stats.active_tiles, 64);
        assert_eq!(stats.cells_processed, 1);
        assert!(automaton.wake_tiles().is_awake(glam::IVec2::new(1, 1)));
        assert_eq!(automaton.wake_tiles().count(), 1);
    }

    #[test]
    fn test_tick_wrap_clears_stamps() {
        let mut automaton = Automaton::seeded(1);
        automaton.set_tick(u32::MAX);
        let cid = put(&mut automaton, 0, 0, Material::SAND);
        automaton.set_cell_as_processed(cid, Material::SAND);
        automaton.update();
        assert_eq!(automaton.tick(), 1);
        assert!(!automaton.is_processed(cid));
    }

    #[test]
    fn test_draw_into() {
        let mut automaton = Automaton::seeded(1);
        put(&mut automaton, 0, 0, Material::WATER);
        let mut frame = vec![0u8; CELL_COUNT * 4];
        assert_eq!(automaton.draw_into(&mut frame), CELL_COUNT * 4);
        assert_eq!(frame, automaton.pixels());

        let mut short = vec![0u8; 8];
        assert_eq!(automaton.draw_into(&mut short), 8);
    }
}
