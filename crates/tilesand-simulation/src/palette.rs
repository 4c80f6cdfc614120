//! Default material colors
//!
//! Sixteen entries per kind, laid out as `status * 4 + life`.

use crate::materials::Material;

/// RGBA bytes in memory order
pub type Rgba = [u8; 4];

/// 256-entry color table indexed by [`Material::palette_index`]
#[derive(Clone, PartialEq, Eq)]
pub struct Palette {
    colors: [Rgba; 256],
}

impl Palette {
    /// Build from `0xRRGGBBAA` words
    pub const fn from_words(words: &[u32; 256]) -> Self {
        let mut colors = [[0u8; 4]; 256];
        let mut i = 0;
        while i < 256 {
            colors[i] = words[i].to_be_bytes();
            i += 1;
        }
        Self { colors }
    }

    pub const fn from_colors(colors: [Rgba; 256]) -> Self {
        Self { colors }
    }

    #[inline]
    pub fn color_of(&self, material: Material) -> Rgba {
        self.colors[material.palette_index()]
    }

    pub fn colors(&self) -> &[Rgba; 256] {
        &self.colors
    }
}

impl Default for Palette {
    fn default() -> Self {
        DEFAULT_PALETTE
    }
}

impl std::fmt::Debug for Palette {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Palette").finish_non_exhaustive()
    }
}

pub const DEFAULT_PALETTE: Palette = Palette::from_words(&DEFAULT_WORDS);

#[rustfmt::skip]
const DEFAULT_WORDS: [u32; 256] = [
    // Empty
    0x00000000, 0x00000000, 0x00000000, 0x00000000,
    0x00000000, 0x00000000, 0x00000000, 0x00000000,
    0x00000000, 0x00000000, 0x00000000, 0x00000000,
    0x00000000, 0x00000000, 0x00000000, 0x00000000,
    // Stone
    0x839BC6FF, 0x6D7E9CFF, 0x4D5A6EFF, 0x2D3640FF,
    0x8F340CFF, 0x772A06FF, 0x662606FF, 0x300E03FF,
    0x279800FF, 0x3A9100FF, 0x508320FF, 0x567560FF,
    0x7299E3FF, 0x6183BFFF, 0x445C80FF, 0x2C3C4FFF,
    // Sand
    0x9C8A15FF, 0xC0B51AFF, 0xD4C64BFF, 0xECE760FF,
    0x21160FFF, 0x3D2518FF, 0x57442FFF, 0x544E38FF,
    0x6C7312FF, 0x98A117FF, 0x9DC41EFF, 0x98EE27FF,
    0x8F782DFF, 0xBE9C3EFF, 0xC5A13DFF, 0xF0C948FF,
    // Water
    0x00ADD8FF, 0x00ADD8FF, 0x00ADD8FF, 0x00ADD8FF,
    0x00ADD8FF, 0x00ADD8FF, 0x00ADD8FF, 0x00ADD8FF,
    0x00ADD8FF, 0x00ADD8FF, 0x00ADD8FF, 0x00ADD8FF,
    0x00ADD8FF, 0x00ADD8FF, 0x00ADD8FF, 0x00ADD8FF,
    // Seed
    0x414709FF, 0x5D6B18FF, 0x768E25FF, 0x96C635FF,
    0x3E1F09FF, 0x683C15FF, 0x935922FF, 0xE39055FF,
    0x174709FF, 0x2A6B18FF, 0x418E25FF, 0x59C635FF,
    0x3F3B15FF, 0x616126FF, 0x908D40FF, 0xA4AE56FF,
    // Ant
    0xF3B8B2FF, 0x973831FF, 0xC83F30FF, 0xF33737FF,
    0x973E0AFF, 0x813319FF, 0xC65B2AFF, 0xDE7E24FF,
    0xC3DB4AFF, 0xA1B52DFF, 0xD1D72BFF, 0xEDF57DFF,
    0xD797DEFF, 0x97544FFF, 0xCD594DFF, 0xF05858FF,
    // Wasp
    0xF9EA3DFF, 0xCFA400FF, 0xFFCF2EFF, 0xFFF2A6FF,
    0xC07F3AFF, 0x3B1F00FF, 0x5A2B00FF, 0x7A3D00FF,
    0xCDE245FF, 0xCCF52EFF, 0xB3E622FF, 0x8FD11AFF,
    0xD6CF88FF, 0xE3E9C5FF, 0xEFF3DBFF, 0xF7F9E6FF,
    // Acid
    0x1FF52AFF, 0x1FF52AFF, 0x1FF52AFF, 0x1FF52AFF,
    0x1FF52AFF, 0x1FF52AFF, 0x1FF52AFF, 0x1FF52AFF,
    0x1FF52AFF, 0x1FF52AFF, 0x1FF52AFF, 0x1FF52AFF,
    0x1FF52AFF, 0x1FF52AFF, 0x1FF52AFF, 0x1FF52AFF,
    // Fire
    0x792911FF, 0xC63E1CFF, 0xE38D54FF, 0xEDE19BFF,
    0x763420FF, 0x9B2E13FF, 0xE77A31FF, 0xE9D45BFF,
    0x642613FF, 0xB6310FFF, 0xCC6A29FF, 0xCCB844FF,
    0x471709FF, 0xA0361BFF, 0xD26A25FF, 0xDEC011FF,
    // Ice
    0x225587FF, 0x4F8DC7FF, 0x7DA4DCFF, 0x80C9E3FF,
    0x225587FF, 0x4F8DC7FF, 0x7DA4DCFF, 0x80C9E3FF,
    0x225587FF, 0x4F8DC7FF, 0x7DA4DCFF, 0x80C9E3FF,
    0x225587FF, 0x4F8DC7FF, 0x7DA4DCFF, 0x80C9E3FF,
    // Smoke
    0x817B70FF, 0x817B70FF, 0x817B70FF, 0x817B70FF,
    0x817B70FF, 0x817B70FF, 0x817B70FF, 0x817B70FF,
    0x817B70FF, 0x817B70FF, 0x817B70FF, 0x817B70FF,
    0x817B70FF, 0x817B70FF, 0x817B70FF, 0x817B70FF,
    // Steam
    0x88C8CFFF, 0x88C8CFFF, 0x88C8CFFF, 0x88C8CFFF,
    0x88C8CFFF, 0x88C8CFFF, 0x88C8CFFF, 0x88C8CFFF,
    0x88C8CFFF, 0x88C8CFFF, 0x88C8CFFF, 0x88C8CFFF,
    0x88C8CFFF, 0x88C8CFFF, 0x88C8CFFF, 0x88C8CFFF,
    // Root
    0xC2923AFF, 0xAE8930FF, 0x94712CFF, 0x5C480FFF,
    0x7C5A24FF, 0x644E2AFF, 0x544425FF, 0x392E11FF,
    0xB8AC3AFF, 0xA09C3AFF, 0x888C3AFF, 0x67641CFF,
    0xA0B0C9FF, 0x8C98ABFF, 0x78868DFF, 0x5A635EFF,
    // Plant
    0x173012FF, 0x23501BFF, 0x2F7424FF, 0x49A83AFF,
    0x231304FF, 0x3D2308FF, 0x5A360DFF, 0x7B5220FF,
    0x2A3F10FF, 0x3E5E14FF, 0x5C861BFF, 0x86B92AFF,
    0x1F3430FF, 0x2E4F49FF, 0x3D6A63FF, 0x5F8F88FF,
    // Flower
    0x1079E2FF, 0x10E2BBFF, 0xE210D4FF, 0xD7E210FF,
    0x7A4521FF, 0x3D928AFF, 0x7A2D6FFF, 0x8A7421FF,
    0x2AB8A0FF, 0x29773FFF, 0xB828B8FF, 0xB8B828FF,
    0x5A9DC7FF, 0x43716EFF, 0xC75AC7FF, 0xC7C75AFF,
    // AntHill
    0x160C14FF, 0x1C0815FF, 0x27091DFF, 0x2A0920FF,
    0x140E09FF, 0x1D140CFF, 0x20170FFF, 0x271D14FF,
    0x140E09FF, 0x1D140CFF, 0x20170FFF, 0x271D14FF,
    0x140E09FF, 0x1D140CFF, 0x20170FFF, 0x271D14FF,];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::materials::{MaterialKind, MaterialStatus};

    #[test]
    fn test_empty_is_transparent() {
        let palette = Palette::default();
        for status in MaterialStatus::ALL {
            for life in 0..4 {
                let m = Material::EMPTY.with_status(status).with_life(life);
                assert_eq!(palette.color_of(m)[3], 0);
            }
        }
    }

    #[test]
    fn test_water_is_single_color() {
        let palette = Palette::default();
        let base = palette.color_of(Material::WATER);
        assert_eq!(base, [0x00, 0xAD, 0xD8, 0xFF]);
        for status in MaterialStatus::ALL {
            for life in 0..4 {
                let m = Material::WATER.with_status(status).with_life(life);
                assert_eq!(palette.color_of(m), base);
            }
        }
    }

    #[test]
    fn test_every_non_empty_kind_is_opaque() {
        let palette = Palette::default();
        for kind in MaterialKind::ALL.into_iter().skip(1) {
            assert_eq!(palette.color_of(Material::of(kind))[3], 0xFF, "{kind}");
        }
    }

    #[test]
    fn test_life_selects_variant() {
        let palette = Palette::default();
        assert_ne!(
            palette.color_of(Material::SAND.with_life(0)),
            palette.color_of(Material::SAND.with_life(3))
        );
        assert_eq!(palette.color_of(Material::STONE), [0x83, 0x9B, 0xC6, 0xFF]);
    }
}
