//! Nähe-Abfrage: Ecken und Kanten eines Quaders innerhalb eines Toleranzradius.

use super::lines::distance_to_segment;
use crate::core::{Corner, CornerId, Cuboid, Face};
use glam::Vec2;

/// Hover-/Drag-Kandidat innerhalb eines Quaders.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HighlightEntry {
    /// Einzelner Eckpunkt
    PointHighlight { corner: CornerId, point: Vec2 },
    /// Kante zwischen zwei Eckpunkten
    LineHighlight {
        corners: (CornerId, CornerId),
        segment: (Vec2, Vec2),
    },
}

/// Die vier Kanten einer Fläche als Ecken-Paare.
const FACE_EDGES: [(Corner, Corner); 4] = [
    (Corner::Tl, Corner::Tr),
    (Corner::Tr, Corner::Br),
    (Corner::Br, Corner::Bl),
    (Corner::Bl, Corner::Tl),
];

/// Alle Kanten eines Quaders: Vorderfläche, Rückfläche, Seitenlinien.
pub fn cuboid_edges(cuboid: &Cuboid) -> Vec<(CornerId, CornerId)> {
    let mut edges: Vec<(CornerId, CornerId)> = FACE_EDGES
        .iter()
        .map(|&(a, b)| (CornerId::front(a), CornerId::front(b)))
        .collect();

    if cuboid.back_points.is_some() {
        edges.extend(
            FACE_EDGES
                .iter()
                .map(|&(a, b)| (CornerId::back(a), CornerId::back(b))),
        );
        edges.extend(
            Corner::ALL
                .iter()
                .map(|&c| (CornerId::new(Face::Front, c), CornerId::new(Face::Back, c))),
        );
    }
    edges
}

/// Seitenlinien (Vorder-Ecke i → Rück-Ecke i) in der Reihenfolge tl, tr, bl, br.
pub fn side_lines(cuboid: &Cuboid) -> Option<[(Vec2, Vec2); 4]> {
    let back = cuboid.back_points?;
    let front = cuboid.front_points;
    Some(Corner::ALL.map(|c| (front.get(c), back.get(c))))
}

/// Ecken und Kanten im Umkreis `scope` um `cursor`.
///
/// Reihenfolge: Ecken (nächste zuerst), danach Kanten (nächste zuerst).
/// Cursor und Quader müssen im selben Koordinatenraum liegen.
pub fn close_points_or_lines(cursor: Vec2, cuboid: &Cuboid, scope: f32) -> Vec<HighlightEntry> {
    let mut points: Vec<(f32, HighlightEntry)> = cuboid
        .corners()
        .into_iter()
        .filter_map(|(corner, point)| {
            let distance = cursor.distance(point);
            (distance <= scope).then_some((distance, HighlightEntry::PointHighlight { corner, point }))
        })
        .collect();

    let mut lines: Vec<(f32, HighlightEntry)> = cuboid_edges(cuboid)
        .into_iter()
        .filter_map(|(a, b)| {
            let pa = cuboid.corner(a)?;
            let pb = cuboid.corner(b)?;
            let distance = distance_to_segment(cursor, pa, pb);
            (distance <= scope).then_some((
                distance,
                HighlightEntry::LineHighlight {
                    corners: (a, b),
                    segment: (pa, pb),
                },
            ))
        })
        .collect();

    let by_distance =
        |a: &(f32, HighlightEntry), b: &(f32, HighlightEntry)| a.0.total_cmp(&b.0);
    points.sort_by(by_distance);
    lines.sort_by(by_distance);

    points
        .into_iter()
        .chain(lines)
        .map(|(_, entry)| entry)
        .collect()
}
