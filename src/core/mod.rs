//! Kern-Datenstrukturen: Quader-Modell, Ansicht und Geometrie.

pub mod cuboid;
pub mod geometry;
pub mod view;

pub use cuboid::{
    cuboids_from_json, cuboids_to_json, Corner, CornerId, Cuboid, DrawingCuboid, Face, PlaneQuad,
};
pub use view::ViewTransform;
