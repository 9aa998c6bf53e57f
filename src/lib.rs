//! Cuboid Annotator Library.
//! Zeichnen und Bearbeiten perspektivischer Quader auf Bildern, als Library
//! exportiert für Hosts, Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod render;
pub mod shared;

pub use app::{
    AppController, AppIntent, AppState, CuboidTool, DrawingStatus, HostEvent, ImageInfo, Key,
    PointerButton, PointerEvent,
};
pub use core::{
    cuboids_from_json, cuboids_to_json, Corner, CornerId, Cuboid, DrawingCuboid, Face, PlaneQuad,
    ViewTransform,
};
pub use render::{DrawCall, DrawRecorder, DrawStyle, RenderAdapter};
pub use shared::EditorOptions;
