//! Drag-Transformation relativ zum Snapshot vor Gestenbeginn.

use super::proximity::HighlightEntry;
use crate::core::{CornerId, Cuboid, Face};
use glam::Vec2;

/// Welcher Teil eines Quaders wird per Drag verschoben?
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragTarget {
    /// Einzelner Eckpunkt
    Point(CornerId),
    /// Kante (beide Endpunkte)
    Line(CornerId, CornerId),
    /// Ganzer Quader (starre Verschiebung)
    Cuboid,
}

impl DragTarget {
    /// Leitet das Drag-Ziel aus dem ersten Nähe-Kandidaten ab (kein Kandidat → ganzer Quader).
    pub fn from_highlight(entry: Option<&HighlightEntry>) -> Self {
        match entry {
            Some(HighlightEntry::PointHighlight { corner, .. }) => DragTarget::Point(*corner),
            Some(HighlightEntry::LineHighlight { corners, .. }) => {
                DragTarget::Line(corners.0, corners.1)
            }
            None => DragTarget::Cuboid,
        }
    }
}

/// Wendet den absoluten Versatz `offset` auf den Snapshot `initial` an.
///
/// Der Versatz ist immer (aktuell − Drag-Start), nie inkrementell. Nicht
/// betroffene Ecken bleiben bitgenau auf dem Snapshot-Wert.
pub fn cuboid_drag_move(initial: &Cuboid, offset: Vec2, target: DragTarget) -> Cuboid {
    let mut moved = initial.clone();
    match target {
        DragTarget::Cuboid => {
            moved.front_points = initial.front_points.translated(offset);
            moved.back_points = initial.back_points.map(|b| b.translated(offset));
        }
        DragTarget::Point(corner) => translate_corner(&mut moved, corner, offset),
        DragTarget::Line(a, b) => {
            translate_corner(&mut moved, a, offset);
            if b != a {
                translate_corner(&mut moved, b, offset);
            }
        }
    }
    moved
}

fn translate_corner(cuboid: &mut Cuboid, id: CornerId, offset: Vec2) {
    let quad = match id.face {
        Face::Front => Some(&mut cuboid.front_points),
        Face::Back => cuboid.back_points.as_mut(),
    };
    if let Some(quad) = quad {
        *quad.get_mut(id.corner) += offset;
    }
}
