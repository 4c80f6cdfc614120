//! Tile partition and the wake mask

use glam::IVec2;

/// World width in cells
pub const WORLD_WIDTH: usize = 256;
/// World height in cells
pub const WORLD_HEIGHT: usize = 256;
pub const CELL_COUNT: usize = WORLD_WIDTH * WORLD_HEIGHT;

/// Edge length of a square tile in cells
pub const TILE_SIZE: usize = 32;
pub const TILES_X: usize = WORLD_WIDTH / TILE_SIZE;
pub const TILES_Y: usize = WORLD_HEIGHT / TILE_SIZE;
pub const TILE_COUNT: usize = TILES_X * TILES_Y;

const _: () = assert!(TILE_COUNT == 64, "one wake bit per tile in a u64");

/// Tile coordinates of the tile holding cell `(x, y)`
#[inline]
pub fn tile_of_cell(x: usize, y: usize) -> IVec2 {
    IVec2::new((x / TILE_SIZE) as i32, (y / TILE_SIZE) as i32)
}

/// Top-left cell of tile `index`
#[inline]
pub fn tile_origin(index: usize) -> (usize, usize) {
    ((index % TILES_X) * TILE_SIZE, (index / TILES_X) * TILE_SIZE)
}

/// One bit per tile, set when the tile must be scanned on the next tick
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct TileMask(u64);

impl TileMask {
    pub const NONE: Self = Self(0);
    pub const ALL: Self = Self(u64::MAX);

    pub const fn from_bits(bits: u64) -> Self {
        Self(bits)
    }

    pub const fn bits(self) -> u64 {
        self.0
    }

    #[inline]
    pub const fn index(tile: IVec2) -> usize {
        tile.y as usize * TILES_X + tile.x as usize
    }

    #[inline]
    pub fn wake(&mut self, tile: IVec2) {
        self.wake_index(Self::index(tile));
    }

    #[inline]
    pub fn wake_index(&mut self, index: usize) {
        self.0 |= 1 << index;
    }

    pub fn is_awake(self, tile: IVec2) -> bool {
        self.contains_index(Self::index(tile))
    }

    #[inline]
    pub fn contains_index(self, index: usize) -> bool {
        self.0 & (1 << index) != 0
    }

    pub fn count(self) -> u32 {
        self.0.count_ones()
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Awake tile indices, ascending
    pub fn iter(self) -> impl Iterator<Item = usize> {
        (0..TILE_COUNT).filter(move |i| self.contains_index(*i))
    }

    /// Awake tile coordinates, ascending by index
    pub fn positions(self) -> impl Iterator<Item = IVec2> {
        self.iter()
            .map(|i| IVec2::new((i % TILES_X) as i32, (i / TILES_X) as i32))
    }

    /// Wake the tile of an active cell, plus the neighbor across every
    /// tile edge the cell touches (and the corner tile on two edges)
    pub fn wake_around_cell(&mut self, x: usize, y: usize) {
        let tile = tile_of_cell(x, y);
        let (lx, ly) = (x % TILE_SIZE, y % TILE_SIZE);

        let x_lo = if lx == 0 { (tile.x - 1).max(0) } else { tile.x };
        let x_hi = if lx == TILE_SIZE - 1 {
            (tile.x + 1).min(TILES_X as i32 - 1)
        } else {
            tile.x
        };
        let y_lo = if ly == 0 { (tile.y - 1).max(0) } else { tile.y };
        let y_hi = if ly == TILE_SIZE - 1 {
            (tile.y + 1).min(TILES_Y as i32 - 1)
        } else {
            tile.y
        };

        for ty in y_lo..=y_hi {
            for tx in x_lo..=x_hi {
                self.wake(IVec2::new(tx, ty));
            }
        }
    }

    /// Wake every tile overlapping the inclusive cell rectangle grown by one cell
    pub fn wake_region(&mut self, min: IVec2, max: IVec2) {
        let last = IVec2::new(WORLD_WIDTH as i32 - 1, WORLD_HEIGHT as i32 - 1);
        let (lo, hi) = (min - IVec2::ONE, max + IVec2::ONE);
        if lo.x > hi.x || lo.y > hi.y || hi.x < 0 || hi.y < 0 || lo.x > last.x || lo.y > last.y {
            return;
        }
        let lo = lo.clamp(IVec2::ZERO, last);
        let hi = hi.clamp(IVec2::ZERO, last);
        let tile_lo = lo / TILE_SIZE as i32;
        let tile_hi = hi / TILE_SIZE as i32;
        for ty in tile_lo.y..=tile_hi.y {
            for tx in tile_lo.x..=tile_hi.x {
                self.wake(IVec2::new(tx, ty));
            }
        }
    }
}
