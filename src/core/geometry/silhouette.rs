//! Hover-Silhouette: konvexe Hülle aller Ecken und Punkt-in-Polygon-Test.

use crate::core::Cuboid;
use glam::Vec2;

/// Konvexe Außenkontur über alle vorhandenen Ecken (8, bzw. 4 ohne Rückfläche).
pub fn hover_silhouette(cuboid: &Cuboid) -> Vec<Vec2> {
    let points: Vec<Vec2> = cuboid.corners().into_iter().map(|(_, p)| p).collect();
    convex_hull(&points)
}

/// Konvexe Hülle (Monotone Chain), gegen den Uhrzeigersinn, ohne kollineare Punkte.
pub fn convex_hull(points: &[Vec2]) -> Vec<Vec2> {
    let mut sorted = points.to_vec();
    sorted.sort_by(|a, b| {
        a.x.partial_cmp(&b.x)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(a.y.partial_cmp(&b.y).unwrap_or(std::cmp::Ordering::Equal))
    });
    sorted.dedup();

    if sorted.len() < 3 {
        return sorted;
    }

    let mut hull: Vec<Vec2> = Vec::with_capacity(sorted.len() * 2);

    // Untere Hülle
    for &p in &sorted {
        while hull.len() >= 2 && turn(hull[hull.len() - 2], hull[hull.len() - 1], p) <= 0.0 {
            hull.pop();
        }
        hull.push(p);
    }

    // Obere Hülle
    let lower_len = hull.len() + 1;
    for &p in sorted.iter().rev().skip(1) {
        while hull.len() >= lower_len && turn(hull[hull.len() - 2], hull[hull.len() - 1], p) <= 0.0
        {
            hull.pop();
        }
        hull.push(p);
    }

    hull.pop();
    hull
}

fn turn(o: Vec2, a: Vec2, b: Vec2) -> f32 {
    (a - o).perp_dot(b - o)
}

/// Prüft ob ein Punkt auf einem Liniensegment liegt.
fn point_on_segment(point: Vec2, a: Vec2, b: Vec2) -> bool {
    let ab = b - a;
    let ap = point - a;
    let cross = ab.perp_dot(ap).abs();
    if cross > 1e-4 * ab.length().max(1.0) {
        return false;
    }

    let dot = ap.dot(ab);
    dot >= 0.0 && dot <= ab.length_squared()
}

/// Prüft ob ein Punkt innerhalb eines Polygons liegt (Ray-Casting, Rand zählt als innen).
pub fn point_in_polygon(point: Vec2, polygon: &[Vec2]) -> bool {
    let Some(&last) = polygon.last() else {
        return false;
    };
    if polygon.len() < 3 {
        return false;
    }

    let mut inside = false;
    let mut previous = last;

    for &current in polygon {
        if point_on_segment(point, previous, current) {
            return true;
        }

        let crosses = (current.y > point.y) != (previous.y > point.y)
            && point.x
                < (previous.x - current.x) * (point.y - current.y) / (previous.y - current.y)
                    + current.x;

        if crosses {
            inside = !inside;
        }

        previous = current;
    }

    inside
}

/// True wenn `point` innerhalb der Hover-Silhouette des Quaders liegt.
pub fn silhouette_contains(cuboid: &Cuboid, point: Vec2) -> bool {
    point_in_polygon(point, &hover_silhouette(cuboid))
}
