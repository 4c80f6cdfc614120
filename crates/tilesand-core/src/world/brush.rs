//! Painting materials into the world
//!
//! Every kind owns one [`BrushActions`] pair. The first pass runs on every
//! point of the brush circle, then the optional second pass runs on the same
//! points so it can look at what the first pass left around it. Brush
//! randomness comes from the automaton's brush RNG, never the simulation ring.

use glam::IVec2;
use log::debug;
use rand::Rng;
use tilesand_simulation::{Material, MaterialKind};

use super::automaton::Automaton;
use super::tiles::{WORLD_HEIGHT, WORLD_WIDTH};

/// Produce the material to write at `(x, y)`
pub type BrushAction = fn(&mut Automaton, i32, i32) -> Material;

#[derive(Clone, Copy)]
pub struct BrushActions {
    pub first: BrushAction,
    pub second: Option<BrushAction>,
}

impl BrushActions {
    const fn single(first: BrushAction) -> Self {
        Self {
            first,
            second: None,
        }
    }

    pub fn for_kind(kind: MaterialKind) -> Self {
        match kind {
            MaterialKind::Empty => Self::single(|_, _, _| Material::EMPTY),
            MaterialKind::Stone => Self {
                first: stone_pass1,
                second: Some(stone_pass2),
            },
            MaterialKind::Sand => Self::single(sand),
            MaterialKind::Water => Self::single(water),
            MaterialKind::Seed => Self::single(seed),
            MaterialKind::Ant => Self::single(ant),
            MaterialKind::Wasp => Self::single(wasp),
            MaterialKind::Acid => Self::single(acid),
            MaterialKind::Fire => Self::single(fire),
            MaterialKind::Ice => Self::single(ice),
            MaterialKind::Smoke => Self::single(|_, _, _| Material::SMOKE),
            MaterialKind::Steam => Self::single(|_, _, _| Material::STEAM),
            MaterialKind::Root => Self::single(|_, _, _| Material::ROOT),
            MaterialKind::Plant => Self::single(|_, _, _| Material::PLANT),
            MaterialKind::Flower => Self::single(|_, _, _| Material::FLOWER),
            MaterialKind::AntHill => Self::single(|_, _, _| Material::ANT_HILL),
        }
    }
}

impl std::fmt::Debug for BrushActions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BrushActions")
            .field("second", &self.second.is_some())
            .finish_non_exhaustive()
    }
}

fn stone_pass1(automaton: &mut Automaton, _x: i32, _y: i32) -> Material {
    let penetrable = automaton.brush_rng.gen_range(0..100) < 51;
    Material::STONE.with_is_penetrable(penetrable)
}

/// Age stone by how exposed it is: open cells above wear it young, open
/// cells below make it old
fn stone_pass2(automaton: &mut Automaton, x: i32, y: i32) -> Material {
    let current = automaton.material_at(x, y);
    if !current.is_kind(MaterialKind::Stone) {
        return current;
    }

    let open = |dy: i32| -> i32 {
        (1..=3)
            .filter(|i| !automaton.material_at(x, y + dy * i).is_kind(MaterialKind::Stone))
            .count() as i32
    };
    let (above, below) = (open(-1), open(1));

    let rng = &mut automaton.brush_rng;
    let mut life = if rng.gen_bool(0.5) { 2 } else { 1 };
    if rng.gen_range(0..256) < above * 75 + 20 {
        life = 0;
    }
    if rng.gen_range(0..256) < below * 75 + 20 {
        life = 3;
    }
    current.with_life(life)
}

fn sand(automaton: &mut Automaton, _x: i32, _y: i32) -> Material {
    let rng = &mut automaton.brush_rng;
    let life = rng.gen_range(0..4);
    Material::SAND
        .with_life(life)
        .with_is_penetrable(rng.gen_range(0..100) < 66)
}

fn water(automaton: &mut Automaton, _x: i32, _y: i32) -> Material {
    let rng = &mut automaton.brush_rng;
    let life = rng.gen_range(0..4);
    Material::WATER.with_life(life).with_face_left(rng.gen_bool(0.5))
}

fn seed(automaton: &mut Automaton, _x: i32, _y: i32) -> Material {
    Material::SEED.with_life(automaton.brush_rng.gen_range(0..4))
}

fn acid(automaton: &mut Automaton, _x: i32, _y: i32) -> Material {
    Material::ACID.with_face_left(automaton.brush_rng.gen_bool(0.5))
}

fn fire(automaton: &mut Automaton, _x: i32, _y: i32) -> Material {
    let rng = &mut automaton.brush_rng;
    let face_left = rng.gen_bool(0.5);
    Material::FIRE
        .with_life(3)
        .with_face_left(face_left)
        .with_status_bits(rng.gen_range(0..4))
}

/// Mostly full-strength, one in ten a little weaker
fn ice(automaton: &mut Automaton, _x: i32, _y: i32) -> Material {
    let life = if automaton.brush_rng.gen_range(0..100) < 10 {
        2
    } else {
        3
    };
    Material::ICE.with_life(life)
}

/// Adults only
fn wasp(automaton: &mut Automaton, _x: i32, _y: i32) -> Material {
    let rng = &mut automaton.brush_rng;
    let life = rng.gen_range(1..=3);
    let face_left = rng.gen_bool(0.5);
    Material::WASP
        .with_life(life)
        .with_face_left(face_left)
        .with_face_up(rng.gen_bool(0.5))
}

/// Painted ants start as eggs
fn ant(automaton: &mut Automaton, _x: i32, _y: i32) -> Material {
    let rng = &mut automaton.brush_rng;
    let face_left = rng.gen_bool(0.5);
    Material::ANT
        .with_face_left(face_left)
        .with_face_up(rng.gen_bool(0.5))
}

/// In-bounds points of a filled circle, row by row
///
/// A diameter of 0 or 1 yields the center alone.
pub fn circle_points(cx: i32, cy: i32, diameter: u32) -> Vec<IVec2> {
    let radius = (diameter / 2) as i32;
    let mut points = Vec::new();
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            if dx * dx + dy * dy > radius * radius {
                continue;
            }
            let (x, y) = (cx + dx, cy + dy);
            if x >= 0 && y >= 0 && (x as usize) < WORLD_WIDTH && (y as usize) < WORLD_HEIGHT {
                points.push(IVec2::new(x, y));
            }
        }
    }
    points
}

impl Automaton {
    /// Paint a circle of `kind` centered on `(cx, cy)`
    ///
    /// Returns the number of cells written. Painted cells are left
    /// unprocessed so they act on the next tick.
    pub fn apply_brush(&mut self, kind: MaterialKind, cx: i32, cy: i32, diameter: u32) -> usize {
        let points = circle_points(cx, cy, diameter);
        if points.is_empty() {
            return 0;
        }
        let actions = BrushActions::for_kind(kind);
        self.paint_points(&points, actions);

        let (min, max) = points
            .iter()
            .fold((points[0], points[0]), |(lo, hi), p| (lo.min(*p), hi.max(*p)));
        self.wake_mut().wake_region(min, max);

        debug!(
            "Painted {} {} cells at ({}, {}), diameter {}",
            points.len(),
            kind.name(),
            cx,
            cy,
            diameter
        );
        points.len()
    }

    /// Run both passes of `actions` over `points` without waking anything
    pub(crate) fn paint_points(&mut self, points: &[IVec2], actions: BrushActions) {
        for pass in [Some(actions.first), actions.second].into_iter().flatten() {
            for point in points {
                let material = pass(self, point.x, point.y);
                let cid = point.y as usize * self.width() + point.x as usize;
                self.set_cell(cid, material);
            }
        }
    }
}
