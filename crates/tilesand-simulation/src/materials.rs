//! Packed material values and kind sets
//!
//! A [`Material`] is a plain `u32` holding four fields:
//!
//! | bits   | field  |
//! |--------|--------|
//! | 0..4   | kind   |
//! | 4..6   | life   |
//! | 6..8   | status |
//! | 8..16  | state  |
//! | 16..32 | reserved, always zero |
//!
//! State bits are shared between unrelated kinds (see [`StateFlags`]), so the
//! alias accessors check ownership in debug builds.

use std::fmt;
use std::str::FromStr;

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const KIND_MASK: u32 = 0x0F;
const LIFE_SHIFT: u32 = 4;
const STATUS_SHIFT: u32 = 6;
const STATE_SHIFT: u32 = 8;
const FIELD2_MASK: u32 = 0b11;
const USED_BITS: u32 = 0xFFFF;

/// The sixteen material kinds, in their packed order
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaterialKind {
    Empty = 0,
    Stone = 1,
    Sand = 2,
    Water = 3,
    Seed = 4,
    Ant = 5,
    Wasp = 6,
    Acid = 7,
    Fire = 8,
    Ice = 9,
    Smoke = 10,
    Steam = 11,
    Root = 12,
    Plant = 13,
    Flower = 14,
    AntHill = 15,
}

impl MaterialKind {
    pub const COUNT: usize = 16;

    pub const ALL: [MaterialKind; Self::COUNT] = [
        MaterialKind::Empty,
        MaterialKind::Stone,
        MaterialKind::Sand,
        MaterialKind::Water,
        MaterialKind::Seed,
        MaterialKind::Ant,
        MaterialKind::Wasp,
        MaterialKind::Acid,
        MaterialKind::Fire,
        MaterialKind::Ice,
        MaterialKind::Smoke,
        MaterialKind::Steam,
        MaterialKind::Root,
        MaterialKind::Plant,
        MaterialKind::Flower,
        MaterialKind::AntHill,
    ];

    /// Decode a kind from its low 4 bits (higher bits are ignored)
    pub const fn from_bits(bits: u8) -> Self {
        Self::ALL[(bits & KIND_MASK as u8) as usize]
    }

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Single-bit mask of this kind inside a [`MaterialKindSet`]
    #[inline]
    pub const fn bit(self) -> u16 {
        1 << (self as u16)
    }

    #[inline]
    pub const fn is_in(self, set: MaterialKindSet) -> bool {
        set.contains(self)
    }

    pub const fn name(self) -> &'static str {
        match self {
            MaterialKind::Empty => "empty",
            MaterialKind::Stone => "stone",
            MaterialKind::Sand => "sand",
            MaterialKind::Water => "water",
            MaterialKind::Seed => "seed",
            MaterialKind::Ant => "ant",
            MaterialKind::Wasp => "wasp",
            MaterialKind::Acid => "acid",
            MaterialKind::Fire => "fire",
            MaterialKind::Ice => "ice",
            MaterialKind::Smoke => "smoke",
            MaterialKind::Steam => "steam",
            MaterialKind::Root => "root",
            MaterialKind::Plant => "plant",
            MaterialKind::Flower => "flower",
            MaterialKind::AntHill => "ant_hill",
        }
    }
}

impl fmt::Display for MaterialKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a material kind name is not recognized
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown material kind '{0}'")]
pub struct ParseKindError(pub String);

impl FromStr for MaterialKind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .map(|c| c.to_ascii_lowercase())
            .collect();
        MaterialKind::ALL
            .into_iter()
            .find(|kind| kind.name().replace('_', "") == normalized)
            .ok_or_else(|| ParseKindError(s.to_string()))
    }
}

/// Cross-cutting damage overlay
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MaterialStatus {
    Normal = 0,
    Burned = 1,
    Acidic = 2,
    Frozen = 3,
}

impl MaterialStatus {
    pub const ALL: [MaterialStatus; 4] = [
        MaterialStatus::Normal,
        MaterialStatus::Burned,
        MaterialStatus::Acidic,
        MaterialStatus::Frozen,
    ];

    pub const fn from_bits(bits: u8) -> Self {
        Self::ALL[(bits & FIELD2_MASK as u8) as usize]
    }
}

bitflags! {
    /// Kind-specific state byte
    ///
    /// `FACE_LEFT` and `FACE_UP` are shared by every directional mover. The
    /// generic `FLAG_*` bits are reused under different names per kind.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct StateFlags: u8 {
        const FACE_LEFT = 1 << 0;
        const FACE_UP = 1 << 1;
        const FLAG_A = 1 << 2;
        const FLAG_B = 1 << 3;
        const FLAG_C = 1 << 4;
        const FLAG_D = 1 << 5;
        const FLAG_E = 1 << 6;
        const FLAG_F = 1 << 7;
    }
}

impl StateFlags {
    /// Stone, Sand, Plant, AntHill: roots and ants may tunnel through
    pub const IS_PENETRABLE: Self = Self::FLAG_A;
    /// Flower: the petal that drops seeds
    pub const IS_TOP_PETAL: Self = Self::FLAG_A;
    /// Wasp: has drunk water
    pub const WASP_HAS_WATER: Self = Self::FLAG_B;
    /// Wasp: has eaten an ant
    pub const WASP_HAS_ANT: Self = Self::FLAG_C;
    /// Plant: may turn into a flower
    pub const CAN_BLOOM: Self = Self::FLAG_D;
}

/// Set of material kinds stored as a 16-bit mask
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MaterialKindSet(u16);

impl MaterialKindSet {
    pub const EMPTY: Self = Self(0);
    pub const ALL: Self = Self(u16::MAX);

    pub const fn new(kinds: &[MaterialKind]) -> Self {
        let mut bits = 0u16;
        let mut i = 0;
        while i < kinds.len() {
            bits |= kinds[i].bit();
            i += 1;
        }
        Self(bits)
    }

    pub const fn from_bits(bits: u16) -> Self {
        Self(bits)
    }

    #[inline]
    pub const fn bits(self) -> u16 {
        self.0
    }

    #[inline]
    pub const fn contains(self, kind: MaterialKind) -> bool {
        self.0 & kind.bit() != 0
    }

    pub const fn with(self, kind: MaterialKind) -> Self {
        Self(self.0 | kind.bit())
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn iter(self) -> impl Iterator<Item = MaterialKind> {
        MaterialKind::ALL
            .into_iter()
            .filter(move |kind| self.contains(*kind))
    }
}

impl fmt::Debug for MaterialKindSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Kind sets consulted by processors and reactions
pub mod kind_sets {
    use super::MaterialKind::*;
    use super::MaterialKindSet;

    /// Cells a root may grow into
    pub const ROOT_GROWABLE: MaterialKindSet =
        MaterialKindSet::new(&[AntHill, Empty, Steam, Smoke, Plant]);
    /// Cells a plant may grow into
    pub const PLANT_GROWABLE: MaterialKindSet =
        MaterialKindSet::new(&[Empty, AntHill, Steam, Smoke, Root]);
    /// Neighbors that keep a plant from reverting to a seed
    pub const PLANT_SUPPORTER: MaterialKindSet =
        MaterialKindSet::new(&[Stone, Sand, Seed, Root, Plant, Flower]);
    /// Neighbors an ant can cling to
    pub const ANT_SUPPORTER: MaterialKindSet =
        MaterialKindSet::new(&[Stone, Sand, Seed, AntHill, Root, Plant, Flower, Ant]);
    /// Living matter an ant eats; its presence also stops hunger
    pub const ANT_ALIVE: MaterialKindSet = MaterialKindSet::new(&[Seed, Root, Plant, Flower, AntHill]);
    pub const ANT_EGG_LAYABLE: MaterialKindSet =
        MaterialKindSet::new(&[Empty, AntHill, Steam, Smoke, Root, Plant, Flower]);
    /// Cells an unsupported ant falls through
    pub const ANT_FALLABLE: MaterialKindSet =
        MaterialKindSet::new(&[Empty, Steam, Smoke, Fire, Water, Acid]);
    pub const WASP_EGG_STICKY: MaterialKindSet =
        MaterialKindSet::new(&[Stone, Sand, Seed, Root, Plant, Flower]);
    pub const WASP_EGG_LAYABLE: MaterialKindSet =
        MaterialKindSet::new(&[Empty, AntHill, Steam, Smoke, Plant]);
    pub const FREEZABLE: MaterialKindSet = MaterialKindSet::new(&[Empty, Steam, Smoke, Plant]);
    pub const PLANT_FOOD: MaterialKindSet = MaterialKindSet::new(&[Water, Sand]);
    /// Cells above steam that keep it from condensing
    pub const NON_CONDENSABLE: MaterialKindSet =
        MaterialKindSet::new(&[Empty, Steam, Smoke, Water, Acid, Fire]);

    pub(crate) const PENETRABLE_OWNERS: MaterialKindSet =
        MaterialKindSet::new(&[Stone, Sand, Plant, AntHill]);
    pub(crate) const TOP_PETAL_OWNERS: MaterialKindSet = MaterialKindSet::new(&[Flower]);
    pub(crate) const BLOOM_OWNERS: MaterialKindSet = MaterialKindSet::new(&[Plant]);
    pub(crate) const WASP_OWNERS: MaterialKindSet = MaterialKindSet::new(&[Wasp]);
}

/// One packed grid cell
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Material(u32);

impl Material {
    pub const EMPTY: Material = Material::of(MaterialKind::Empty);
    pub const STONE: Material = Material::of(MaterialKind::Stone);
    pub const SAND: Material = Material::of(MaterialKind::Sand);
    pub const WATER: Material = Material::of(MaterialKind::Water);
    pub const SEED: Material = Material::of(MaterialKind::Seed);
    pub const ANT: Material = Material::of(MaterialKind::Ant);
    pub const WASP: Material = Material::of(MaterialKind::Wasp);
    pub const ACID: Material = Material::of(MaterialKind::Acid);
    pub const FIRE: Material = Material::of(MaterialKind::Fire);
    pub const ICE: Material = Material::of(MaterialKind::Ice);
    pub const SMOKE: Material = Material::of(MaterialKind::Smoke);
    pub const STEAM: Material = Material::of(MaterialKind::Steam);
    pub const ROOT: Material = Material::of(MaterialKind::Root);
    pub const PLANT: Material = Material::of(MaterialKind::Plant);
    pub const FLOWER: Material = Material::of(MaterialKind::Flower);
    pub const ANT_HILL: Material = Material::of(MaterialKind::AntHill);

    /// A material of `kind` with every other field zero
    pub const fn of(kind: MaterialKind) -> Self {
        Self(kind as u32)
    }

    /// Rebuild from a raw word, dropping reserved bits
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw & USED_BITS)
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn kind(self) -> MaterialKind {
        MaterialKind::from_bits((self.0 & KIND_MASK) as u8)
    }

    #[inline]
    pub const fn is_kind(self, kind: MaterialKind) -> bool {
        self.0 & KIND_MASK == kind as u32
    }

    #[inline]
    pub const fn is_in(self, set: MaterialKindSet) -> bool {
        set.contains(self.kind())
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.is_kind(MaterialKind::Empty)
    }

    #[must_use]
    pub const fn with_kind(self, kind: MaterialKind) -> Self {
        Self((self.0 & !KIND_MASK) | kind as u32)
    }

    #[inline]
    pub const fn life(self) -> u8 {
        ((self.0 >> LIFE_SHIFT) & FIELD2_MASK) as u8
    }

    /// Store `life & 3`
    #[must_use]
    pub const fn with_life(self, life: u8) -> Self {
        Self(
            (self.0 & !(FIELD2_MASK << LIFE_SHIFT))
                | ((life as u32 & FIELD2_MASK) << LIFE_SHIFT),
        )
    }

    #[inline]
    pub const fn status(self) -> MaterialStatus {
        MaterialStatus::from_bits(self.status_bits())
    }

    #[inline]
    pub const fn status_bits(self) -> u8 {
        ((self.0 >> STATUS_SHIFT) & FIELD2_MASK) as u8
    }

    #[must_use]
    pub const fn with_status(self, status: MaterialStatus) -> Self {
        self.with_status_bits(status as u8)
    }

    /// Store `status & 3`
    #[must_use]
    pub const fn with_status_bits(self, status: u8) -> Self {
        Self(
            (self.0 & !(FIELD2_MASK << STATUS_SHIFT))
                | ((status as u32 & FIELD2_MASK) << STATUS_SHIFT),
        )
    }

    #[inline]
    pub const fn is_frozen(self) -> bool {
        self.status_bits() == MaterialStatus::Frozen as u8
    }

    /// Raw state byte, without any ownership check
    #[inline]
    pub const fn state(self) -> StateFlags {
        StateFlags::from_bits_retain((self.0 >> STATE_SHIFT) as u8)
    }

    #[must_use]
    pub const fn with_state(self, state: StateFlags) -> Self {
        Self((self.0 & !(0xFF << STATE_SHIFT)) | ((state.bits() as u32) << STATE_SHIFT))
    }

    #[inline]
    fn flag(self, flag: StateFlags) -> bool {
        self.state().contains(flag)
    }

    #[inline]
    fn with_flag(self, flag: StateFlags, on: bool) -> Self {
        let mut state = self.state();
        state.set(flag, on);
        self.with_state(state)
    }

    #[inline]
    fn assert_owner(self, owners: MaterialKindSet, alias: &str) {
        debug_assert!(
            self.is_in(owners),
            "{alias} is not a flag of {:?}",
            self.kind()
        );
    }

    pub fn face_left(self) -> bool {
        self.flag(StateFlags::FACE_LEFT)
    }

    #[must_use]
    pub fn with_face_left(self, on: bool) -> Self {
        self.with_flag(StateFlags::FACE_LEFT, on)
    }

    pub fn face_up(self) -> bool {
        self.flag(StateFlags::FACE_UP)
    }

    #[must_use]
    pub fn with_face_up(self, on: bool) -> Self {
        self.with_flag(StateFlags::FACE_UP, on)
    }

    pub fn is_penetrable(self) -> bool {
        self.assert_owner(kind_sets::PENETRABLE_OWNERS, "is_penetrable");
        self.flag(StateFlags::IS_PENETRABLE)
    }

    #[must_use]
    pub fn with_is_penetrable(self, on: bool) -> Self {
        self.assert_owner(kind_sets::PENETRABLE_OWNERS, "is_penetrable");
        self.with_flag(StateFlags::IS_PENETRABLE, on)
    }

    pub fn is_top_petal(self) -> bool {
        self.assert_owner(kind_sets::TOP_PETAL_OWNERS, "is_top_petal");
        self.flag(StateFlags::IS_TOP_PETAL)
    }

    #[must_use]
    pub fn with_is_top_petal(self, on: bool) -> Self {
        self.assert_owner(kind_sets::TOP_PETAL_OWNERS, "is_top_petal");
        self.with_flag(StateFlags::IS_TOP_PETAL, on)
    }

    pub fn can_bloom(self) -> bool {
        self.assert_owner(kind_sets::BLOOM_OWNERS, "can_bloom");
        self.flag(StateFlags::CAN_BLOOM)
    }

    #[must_use]
    pub fn with_can_bloom(self, on: bool) -> Self {
        self.assert_owner(kind_sets::BLOOM_OWNERS, "can_bloom");
        self.with_flag(StateFlags::CAN_BLOOM, on)
    }

    pub fn wasp_has_water(self) -> bool {
        self.assert_owner(kind_sets::WASP_OWNERS, "wasp_has_water");
        self.flag(StateFlags::WASP_HAS_WATER)
    }

    #[must_use]
    pub fn with_wasp_has_water(self, on: bool) -> Self {
        self.assert_owner(kind_sets::WASP_OWNERS, "wasp_has_water");
        self.with_flag(StateFlags::WASP_HAS_WATER, on)
    }

    pub fn wasp_has_ant(self) -> bool {
        self.assert_owner(kind_sets::WASP_OWNERS, "wasp_has_ant");
        self.flag(StateFlags::WASP_HAS_ANT)
    }

    #[must_use]
    pub fn with_wasp_has_ant(self, on: bool) -> Self {
        self.assert_owner(kind_sets::WASP_OWNERS, "wasp_has_ant");
        self.with_flag(StateFlags::WASP_HAS_ANT, on)
    }

    /// Index into a 256-entry palette: `kind * 16 + status * 4 + life`
    #[inline]
    pub const fn palette_index(self) -> usize {
        (self.0 & KIND_MASK) as usize * 16 + self.status_bits() as usize * 4 + self.life() as usize
    }
}

impl From<MaterialKind> for Material {
    fn from(kind: MaterialKind) -> Self {
        Material::of(kind)
    }
}

impl fmt::Debug for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Material")
            .field("kind", &self.kind())
            .field("life", &self.life())
            .field("status", &self.status())
            .field("state", &self.state())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn every_material() -> impl Iterator<Item = Material> {
        MaterialKind::ALL.into_iter().flat_map(|kind| {
            MaterialStatus::ALL.into_iter().flat_map(move |status| {
                (0..4u8).flat_map(move |life| {
                    (0..=255u8).map(move |state| {
                        Material::of(kind)
                            .with_status(status)
                            .with_life(life)
                            .with_state(StateFlags::from_bits_retain(state))
                    })
                })
            })
        })
    }

    #[test]
    fn test_fields_round_trip_exhaustively() {
        let mut count = 0;
        for kind in MaterialKind::ALL {
            for status in MaterialStatus::ALL {
                for life in 0..4u8 {
                    for state in 0..=255u8 {
                        let flags = StateFlags::from_bits_retain(state);
                        let m = Material::of(kind)
                            .with_status(status)
                            .with_life(life)
                            .with_state(flags);
                        assert_eq!(m.kind(), kind);
                        assert_eq!(m.status(), status);
                        assert_eq!(m.life(), life);
                        assert_eq!(m.state(), flags);
                        assert_eq!(m.raw() >> 16, 0);
                        count += 1;
                    }
                }
            }
        }
        assert_eq!(count, 16 * 4 * 4 * 256);
    }

    #[test]
    fn test_with_own_value_is_noop() {
        for m in every_material() {
            assert_eq!(m.with_kind(m.kind()), m);
            assert_eq!(m.with_life(m.life()), m);
            assert_eq!(m.with_status(m.status()), m);
            assert_eq!(m.with_state(m.state()), m);
            assert_eq!(m.with_face_left(m.face_left()), m);
            assert_eq!(m.with_face_up(m.face_up()), m);
        }
    }

    #[test]
    fn test_setting_one_field_leaves_others() {
        for m in every_material() {
            let other_life = (m.life() + 1) & 3;
            let changed = m.with_life(other_life);
            assert_eq!(changed.kind(), m.kind());
            assert_eq!(changed.status(), m.status());
            assert_eq!(changed.state(), m.state());
            assert_eq!(changed.life(), other_life);

            let other_status = MaterialStatus::from_bits(m.status_bits() + 1);
            let changed = m.with_status(other_status);
            assert_eq!(changed.kind(), m.kind());
            assert_eq!(changed.life(), m.life());
            assert_eq!(changed.state(), m.state());

            let changed = m.with_face_left(!m.face_left());
            assert_eq!(changed.kind(), m.kind());
            assert_eq!(changed.life(), m.life());
            assert_eq!(changed.status(), m.status());
            assert_eq!(changed.face_up(), m.face_up());
            assert_eq!(
                changed.state() & !StateFlags::FACE_LEFT,
                m.state() & !StateFlags::FACE_LEFT
            );

            let other_kind = MaterialKind::from_bits(m.kind() as u8 + 1);
            let changed = m.with_kind(other_kind);
            assert_eq!(changed.kind(), other_kind);
            assert_eq!(changed.life(), m.life());
            assert_eq!(changed.status(), m.status());
            assert_eq!(changed.state(), m.state());
        }
    }

    #[test]
    fn test_life_and_status_are_masked() {
        for v in 0..8u8 {
            assert_eq!(Material::SAND.with_life(v).life(), v & 3);
            assert_eq!(Material::SAND.with_status_bits(v).status_bits(), v & 3);
            assert!(Material::SAND.with_life(v).is_kind(MaterialKind::Sand));
            assert!(Material::SAND.with_status_bits(v).is_kind(MaterialKind::Sand));
        }
    }

    #[test]
    fn test_alias_flags_on_owning_kinds() {
        let stone = Material::STONE.with_is_penetrable(true);
        assert!(stone.is_penetrable());
        assert!(!stone.with_is_penetrable(false).is_penetrable());

        let flower = Material::FLOWER.with_is_top_petal(true).with_life(2);
        assert!(flower.is_top_petal());
        assert_eq!(flower.life(), 2);

        let plant = Material::PLANT.with_can_bloom(true).with_is_penetrable(true);
        assert!(plant.can_bloom());
        assert!(plant.is_penetrable());

        let wasp = Material::WASP.with_wasp_has_water(true);
        assert!(wasp.wasp_has_water());
        assert!(!wasp.wasp_has_ant());
        let wasp = wasp.with_wasp_has_ant(true).with_wasp_has_water(false);
        assert!(wasp.wasp_has_ant());
        assert!(!wasp.wasp_has_water());
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "is_top_petal")]
    fn test_alias_on_foreign_kind_panics_in_debug() {
        let _ = Material::SAND.with_is_top_petal(true);
    }

    #[test]
    fn test_kind_set_membership_exhaustive() {
        for a in MaterialKind::ALL {
            for b in MaterialKind::ALL {
                let set = MaterialKindSet::new(&[a]);
                assert_eq!(b.is_in(set), a == b);
                let pair = MaterialKindSet::new(&[a, b]);
                assert!(a.is_in(pair));
                assert!(b.is_in(pair));
                for c in MaterialKind::ALL {
                    assert_eq!(c.is_in(pair), c == a || c == b);
                }
            }
        }
    }

    #[test]
    fn test_kind_set_from_every_mask() {
        for bits in 0..=u16::MAX {
            let set = MaterialKindSet::from_bits(bits);
            let rebuilt = MaterialKindSet::new(&set.iter().collect::<Vec<_>>());
            assert_eq!(rebuilt, set);
            assert_eq!(set.len(), bits.count_ones() as usize);
        }
    }

    #[test]
    fn test_named_sets() {
        use kind_sets::*;
        assert!(MaterialKind::Plant.is_in(ROOT_GROWABLE));
        assert!(!MaterialKind::Root.is_in(ROOT_GROWABLE));
        assert!(MaterialKind::Root.is_in(PLANT_GROWABLE));
        assert!(MaterialKind::Ant.is_in(ANT_SUPPORTER));
        assert!(!MaterialKind::Water.is_in(ANT_SUPPORTER));
        assert!(MaterialKind::Fire.is_in(NON_CONDENSABLE));
        assert!(!MaterialKind::Stone.is_in(NON_CONDENSABLE));
        assert_eq!(PLANT_FOOD.len(), 2);
        assert!(MaterialKind::Steam.is_in(FREEZABLE));
        assert!(!MaterialKind::Water.is_in(FREEZABLE));
    }

    #[test]
    fn test_palette_index() {
        let m = Material::FLOWER
            .with_status(MaterialStatus::Acidic)
            .with_life(3);
        assert_eq!(m.palette_index(), 14 * 16 + 2 * 4 + 3);
        assert_eq!(Material::EMPTY.palette_index(), 0);
        assert_eq!(
            Material::ANT_HILL
                .with_status(MaterialStatus::Frozen)
                .with_life(3)
                .palette_index(),
            255
        );
    }

    #[test]
    fn test_kind_from_str() {
        assert_eq!("sand".parse::<MaterialKind>(), Ok(MaterialKind::Sand));
        assert_eq!("Ant_Hill".parse::<MaterialKind>(), Ok(MaterialKind::AntHill));
        assert_eq!("anthill".parse::<MaterialKind>(), Ok(MaterialKind::AntHill));
        assert!("lava".parse::<MaterialKind>().is_err());
        for kind in MaterialKind::ALL {
            assert_eq!(kind.to_string().parse::<MaterialKind>(), Ok(kind));
        }
    }

    #[test]
    fn test_from_raw_drops_reserved_bits() {
        let m = Material::from_raw(0xABCD_0000 | Material::WATER.raw());
        assert_eq!(m, Material::WATER);
    }
}
