//! Per-tick simulation statistics

use serde::{Deserialize, Serialize};

/// Hooks the automaton calls while it mutates the grid
pub trait SimStats {
    /// A processor ran on a cell
    fn record_cell_processed(&mut self);

    /// A processor reported activity for its cell
    fn record_active_cell(&mut self);

    /// Two cells exchanged contents
    fn record_swap(&mut self);

    /// A registered reaction fired
    fn record_reaction(&mut self);
}

/// Counters for one call to `Automaton::update`, reset at the start of every tick
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickStats {
    pub tick: u32,
    pub active_tiles: u32,
    pub cells_processed: u32,
    pub active_cells: u32,
    pub swaps: u32,
    pub reactions: u32,
}

impl TickStats {
    pub fn for_tick(tick: u32) -> Self {
        Self {
            tick,
            ..Self::default()
        }
    }
}

impl SimStats for TickStats {
    fn record_cell_processed(&mut self) {
        self.cells_processed += 1;
    }

    fn record_active_cell(&mut self) {
        self.active_cells += 1;
    }

    fn record_swap(&mut self) {
        self.swaps += 1;
    }

    fn record_reaction(&mut self) {
        self.reactions += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_tick_starts_at_zero() {
        let stats = TickStats::for_tick(42);
        assert_eq!(stats.tick, 42);
        assert_eq!(stats.cells_processed, 0);
        assert_eq!(stats.swaps, 0);
    }

    #[test]
    fn test_counters() {
        let mut stats = TickStats::default();
        for _ in 0..3 {
            stats.record_cell_processed();
        }
        stats.record_active_cell();
        stats.record_swap();
        stats.record_swap();
        stats.record_reaction();

        assert_eq!(stats.cells_processed, 3);
        assert_eq!(stats.active_cells, 1);
        assert_eq!(stats.swaps, 2);
        assert_eq!(stats.reactions, 1);
    }

    #[test]
    fn test_ron_round_trip() {
        let stats = TickStats {
            tick: 7,
            active_tiles: 2,
            cells_processed: 100,
            active_cells: 12,
            swaps: 9,
            reactions: 11,
        };
        let text = ron::to_string(&stats).unwrap();
        let back: TickStats = ron::from_str(&text).unwrap();
        assert_eq!(back, stats);
    }
}
