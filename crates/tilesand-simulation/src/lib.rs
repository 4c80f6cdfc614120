//! Leaf data types for tilesand
//!
//! This crate provides the value types the engine is built from:
//! - Packed materials (Material, MaterialKind, MaterialStatus, StateFlags)
//! - Kind sets (MaterialKindSet, kind_sets)
//! - The default color table (Palette)
//! - The byte-ring random source (ByteRing, SimRng)

mod materials;
mod palette;
mod rng;

pub use materials::{
    Material, MaterialKind, MaterialKindSet, MaterialStatus, ParseKindError, StateFlags, kind_sets,
};
pub use palette::{DEFAULT_PALETTE, Palette, Rgba};
pub use rng::{ByteRing, DEFAULT_RING_SIZE, RngError, SimRng};
