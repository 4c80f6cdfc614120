//! Writing the world to disk as a PNG or as ASCII art

use std::path::Path;

use anyhow::{Context, Result};
use image::{ImageBuffer, Rgba};
use tilesand_core::Automaton;
use tilesand_simulation::MaterialKind;

/// One character per kind
pub fn glyph(kind: MaterialKind) -> char {
    match kind {
        MaterialKind::Empty => ' ',
        MaterialKind::Stone => '#',
        MaterialKind::Sand => '.',
        MaterialKind::Water => '~',
        MaterialKind::Seed => ',',
        MaterialKind::Ant => 'a',
        MaterialKind::Wasp => 'w',
        MaterialKind::Acid => '%',
        MaterialKind::Fire => '^',
        MaterialKind::Ice => '=',
        MaterialKind::Smoke => '\'',
        MaterialKind::Steam => '"',
        MaterialKind::Root => 'r',
        MaterialKind::Plant => 'p',
        MaterialKind::Flower => '*',
        MaterialKind::AntHill => 'h',
    }
}

/// The whole grid, one line per row
pub fn render_ascii(automaton: &Automaton) -> String {
    let width = automaton.width();
    let mut out = String::with_capacity((width + 1) * automaton.height());
    for row in automaton.materials().chunks(width) {
        out.extend(row.iter().map(|m| glyph(m.kind())));
        out.push('\n');
    }
    out
}

pub fn save_ascii(automaton: &Automaton, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    std::fs::write(path, render_ascii(automaton))
        .with_context(|| format!("Failed to write {}", path.display()))?;
    log::info!("ASCII snapshot saved to {}", path.display());
    Ok(())
}

/// Save the pixel buffer as an RGBA PNG
pub fn save_png(automaton: &Automaton, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let img: ImageBuffer<Rgba<u8>, _> = ImageBuffer::from_raw(
        automaton.width() as u32,
        automaton.height() as u32,
        automaton.pixels().to_vec(),
    )
    .ok_or_else(|| anyhow::anyhow!("Failed to create image buffer"))?;

    img.save(path)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    log::info!("PNG snapshot saved to {}", path.display());
    Ok(())
}
