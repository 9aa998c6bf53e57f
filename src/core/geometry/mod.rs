//! Geometrie-Engine: reine Funktionen ohne Zustand.
//!
//! - `lines`     : Geradenschnitt, Punkt-Segment-Abstand
//! - `back_face` : Rückflächen-Konstruktion (Fluchtpunkt bzw. Parallelverschiebung)
//! - `silhouette`: konvexe Hover-Kontur, Punkt-in-Polygon
//! - `proximity` : Ecken-/Kanten-Kandidaten im Toleranzradius
//! - `drag`      : Snapshot-relative Drag-Transformation

pub mod back_face;
pub mod drag;
pub mod lines;
pub mod proximity;
pub mod silhouette;

pub use back_face::{back_face_from_depth_edge, synthesize_top};
pub use drag::{cuboid_drag_move, DragTarget};
pub use lines::{distance_to_segment, line_intersection};
pub use proximity::{close_points_or_lines, cuboid_edges, side_lines, HighlightEntry};
pub use silhouette::{hover_silhouette, point_in_polygon, silhouette_contains};
