//! The automaton and everything that acts on its grid

mod automaton;
pub mod brush;
mod commands;
pub mod generation;
mod neighbor_queries;
pub mod processors;
pub mod reactions;
mod spawn;
pub mod stats;
pub mod tiles;
mod turn_phase;

pub use automaton::{Automaton, ReactAttempt};
pub use brush::{BrushAction, BrushActions, circle_points};
pub use generation::{CaveGenerator, GeneratorOptions};
pub use neighbor_queries::NeighborQueries;
pub use processors::{ProcessorFn, ProcessorTable};
pub use reactions::{ReactionFn, ReactionTable};
pub use stats::{SimStats, TickStats};
pub use tiles::{
    CELL_COUNT, TILE_COUNT, TILE_SIZE, TILES_X, TILES_Y, TileMask, WORLD_HEIGHT, WORLD_WIDTH,
};
pub use turn_phase::TurnPhase;
