//! Level domain: static geometry, read-only after level build except for
//! destructible boxes.

use bevy::math::Rect;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::content::RectDef;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum SurfaceKind {
    Ground,
    Platform,
    Wall,
    /// Destructible; the only surface that can be removed during play.
    Box,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Surface {
    pub id: u32,
    pub kind: SurfaceKind,
    pub bounds: Rect,
}

#[derive(Resource, Debug, Clone, Default)]
pub struct StaticGeometry {
    surfaces: Vec<Surface>,
}

impl StaticGeometry {
    /// Surface ids are the index of each definition in the level file.
    pub fn from_defs(defs: &[RectDef]) -> Self {
        let surfaces = defs
            .iter()
            .enumerate()
            .map(|(index, def)| Surface {
                id: index as u32,
                kind: def.kind,
                bounds: rect_from_top_left(def.x, def.y, def.width, def.height),
            })
            .collect();
        Self { surfaces }
    }

    pub fn surfaces(&self) -> &[Surface] {
        &self.surfaces
    }

    pub fn solids(&self) -> impl Iterator<Item = Rect> + '_ {
        self.surfaces.iter().map(|surface| surface.bounds)
    }

    /// Removes a destructible box. Any other surface kind is left in place.
    pub fn remove_box(&mut self, id: u32) -> bool {
        let Some(index) = self
            .surfaces
            .iter()
            .position(|surface| surface.id == id && surface.kind == SurfaceKind::Box)
        else {
            return false;
        };
        self.surfaces.remove(index);
        true
    }
}

pub fn rect_from_top_left(x: f32, y: f32, width: f32, height: f32) -> Rect {
    Rect::new(x, y, x + width, y + height)
}
