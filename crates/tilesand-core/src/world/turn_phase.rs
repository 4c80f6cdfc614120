//! Per-tick phase flags for slow-acting materials

/// Tick-modulo flags, recomputed once at the start of every tick
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TurnPhase {
    /// Wasp adults act
    pub turn2: bool,
    /// Ants act, seeds germinate, water evaporates
    pub turn3: bool,
    /// Roots grow
    pub turn3_shift1: bool,
    /// Plants grow and bloom
    pub turn3_shift2: bool,
    /// Eggs hatch, ice melts, flowers drop seeds, acid evaporates
    pub turn5: bool,
    /// Frozen cells try to thaw
    pub turn5_shift1: bool,
}

impl TurnPhase {
    pub const fn for_tick(tick: u32) -> Self {
        Self {
            turn2: tick % 2 == 0,
            turn3: tick % 3 == 0,
            turn3_shift1: tick % 3 == 1,
            turn3_shift2: tick % 3 == 2,
            turn5: tick % 5 == 0,
            turn5_shift1: tick % 5 == 1,
        }
    }
}
