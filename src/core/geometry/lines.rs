//! Linien-Primitive: Schnittpunkt zweier Geraden, Punkt-Segment-Abstand.

use glam::Vec2;

/// Relative Toleranz, unter der zwei Geraden als parallel gelten.
const PARALLEL_EPSILON: f32 = 1e-6;

/// Schnittpunkt der unendlichen Geraden durch (`a1`, `a2`) und (`b1`, `b2`).
///
/// Löst das 2×2-System `a1 + s·(a2−a1) = b1 + t·(b2−b1)`.
/// Gibt `None` zurück bei (nahezu) parallelen oder degenerierten Geraden.
pub fn line_intersection(a1: Vec2, a2: Vec2, b1: Vec2, b2: Vec2) -> Option<Vec2> {
    let da = a2 - a1;
    let db = b2 - b1;
    let scale = da.length() * db.length();
    if scale <= f32::EPSILON {
        return None;
    }

    let det = da.perp_dot(db);
    if det.abs() <= PARALLEL_EPSILON * scale {
        return None;
    }

    let s = (b1 - a1).perp_dot(db) / det;
    Some(a1 + da * s)
}

/// Nächster Punkt auf dem Segment `a`–`b` zu `point`.
pub fn closest_point_on_segment(point: Vec2, a: Vec2, b: Vec2) -> Vec2 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq <= f32::EPSILON {
        return a;
    }
    let t = ((point - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    a + ab * t
}

/// Abstand eines Punkts zum Segment `a`–`b`.
pub fn distance_to_segment(point: Vec2, a: Vec2, b: Vec2) -> f32 {
    point.distance(closest_point_on_segment(point, a, b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn intersection_of_crossing_lines() {
        let hit = line_intersection(
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 10.0),
            Vec2::new(0.0, 10.0),
            Vec2::new(10.0, 0.0),
        )
        .expect("Geraden schneiden sich");
        assert_relative_eq!(hit.x, 5.0);
        assert_relative_eq!(hit.y, 5.0);
    }

    #[test]
    fn intersection_outside_segments_is_reported() {
        // Geraden, nicht Segmente: Schnitt liegt hinter beiden Startpunkten
        let hit = line_intersection(
            Vec2::new(1.0, 0.0),
            Vec2::new(2.0, 0.0),
            Vec2::new(-3.0, 1.0),
            Vec2::new(-3.0, 2.0),
        )
        .expect("Geraden schneiden sich");
        assert_relative_eq!(hit.x, -3.0);
        assert_relative_eq!(hit.y, 0.0);
    }

    #[test]
    fn parallel_lines_have_no_intersection() {
        assert!(line_intersection(
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 5.0),
            Vec2::new(0.0, 3.0),
            Vec2::new(20.0, 13.0),
        )
        .is_none());
    }

    #[test]
    fn degenerate_line_has_no_intersection() {
        let p = Vec2::new(3.0, 3.0);
        assert!(line_intersection(p, p, Vec2::ZERO, Vec2::X).is_none());
    }

    #[test]
    fn segment_distance_clamps_to_endpoints() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(10.0, 0.0);
        assert_relative_eq!(distance_to_segment(Vec2::new(5.0, 3.0), a, b), 3.0);
        assert_relative_eq!(distance_to_segment(Vec2::new(-4.0, 3.0), a, b), 5.0);
        assert_relative_eq!(distance_to_segment(Vec2::new(2.0, 2.0), a, a), 8.0_f32.sqrt());
    }
}
