//! Rückflächen-Konstruktion aus einer gezogenen Tiefenkante.
//!
//! Die rechte Kante der Rückfläche ist durch `top`/`bottom` fest vorgegeben.
//! Die linke Kante ergibt sich über den Fluchtpunkt der beiden rechten
//! Seitenlinien: Die Gerade von `front.bl` zum Fluchtpunkt wird mit der um
//! die Vorderflächen-Breite versetzten unteren Kante geschnitten.

use super::lines::line_intersection;
use crate::core::PlaneQuad;
use glam::Vec2;

/// Konstruiert die Rückfläche; bei parallelen Seitenlinien exakte Parallelverschiebung.
pub fn back_face_from_depth_edge(front: &PlaneQuad, top: Vec2, bottom: Vec2) -> PlaneQuad {
    perspective_back_face(front, top, bottom)
        .unwrap_or_else(|| translated_back_face(front, top, bottom))
}

/// Fluchtpunkt-Variante. `None` wenn einer der beiden Schnitte nicht eindeutig ist.
pub fn perspective_back_face(front: &PlaneQuad, top: Vec2, bottom: Vec2) -> Option<PlaneQuad> {
    let vanishing = line_intersection(front.br, bottom, front.tr, top)?;

    let offset_bottom = bottom - (front.br - front.bl);
    let left = line_intersection(front.bl, vanishing, bottom, offset_bottom)?;

    let width = bottom.x - left.x;
    Some(PlaneQuad {
        tl: Vec2::new(top.x - width, top.y),
        tr: top,
        bl: Vec2::new(bottom.x - width, bottom.y),
        br: bottom,
    })
}

/// Breitenerhaltende horizontale Verschiebung der Tiefenkante.
pub fn translated_back_face(front: &PlaneQuad, top: Vec2, bottom: Vec2) -> PlaneQuad {
    let width = front.width();
    PlaneQuad {
        tl: Vec2::new(top.x - width, top.y),
        tr: top,
        bl: Vec2::new(bottom.x - width, bottom.y),
        br: bottom,
    }
}

/// Oberer Treiberpunkt senkrecht über `bottom`.
///
/// Höhe = Vorderflächen-Höhe × `depth_scale`. Bei `depth_scale == 1.0` sind die
/// Seitenlinien parallel und die Konstruktion fällt auf die Verschiebung zurück.
pub fn synthesize_top(front: &PlaneQuad, bottom: Vec2, depth_scale: f32) -> Vec2 {
    Vec2::new(bottom.x, bottom.y - front.height() * depth_scale)
}
