//! State-Definitionen und Konstruktor für das Quader-Werkzeug.

use crate::core::geometry::{back_face_from_depth_edge, synthesize_top};
use crate::core::{DrawingCuboid, PlaneQuad};
use glam::Vec2;

/// Minimale Kantenlänge, ab der eine Vorderfläche als aufgezogen gilt.
pub(crate) const MIN_FACE_EXTENT: f32 = 1e-3;

/// Phasen des Zeichen-Ablaufs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawingStatus {
    /// Kein Quader in Arbeit
    Ready,
    /// Erster Klick gesetzt, Vorderfläche folgt dem Cursor
    FirstPoint,
    /// Vorderfläche fixiert, Rückfläche folgt dem Cursor
    Cuboid,
}

/// Quader-Zeichenwerkzeug
pub struct CuboidTool {
    pub(crate) status: DrawingStatus,
    /// Quader in Arbeit (exklusiv im Besitz des Tools bis zum Commit)
    pub(crate) drawing: Option<DrawingCuboid>,
    /// Bildposition des ersten Klicks (Anker der Vorderfläche)
    pub(crate) first_click: Option<Vec2>,
}

impl CuboidTool {
    /// Erstellt ein neues Werkzeug im Zustand `Ready`.
    pub fn new() -> Self {
        Self {
            status: DrawingStatus::Ready,
            drawing: None,
            first_click: None,
        }
    }

    pub fn status(&self) -> DrawingStatus {
        self.status
    }

    /// Quader in Arbeit (für Rendering).
    pub fn drawing(&self) -> Option<&DrawingCuboid> {
        self.drawing.as_ref()
    }

    pub fn first_click(&self) -> Option<Vec2> {
        self.first_click
    }

    /// Vorderfläche zwischen erstem Klick und `cursor`.
    pub(crate) fn front_for_cursor(&self, cursor: Vec2) -> Option<PlaneQuad> {
        self.first_click
            .map(|anchor| PlaneQuad::from_corners(anchor, cursor))
    }

    /// Rückfläche für `cursor` als untere rechte Ecke.
    ///
    /// `depth_scale` kommt bei jedem Aufruf aus den aktuellen Optionen.
    pub(crate) fn back_for_cursor(&self, cursor: Vec2, depth_scale: f32) -> Option<PlaneQuad> {
        let front = self.drawing.as_ref()?.front_points;
        let top = synthesize_top(&front, cursor, depth_scale);
        Some(back_face_from_depth_edge(&front, top, cursor))
    }

    /// True wenn eine Fläche in beiden Richtungen Ausdehnung hat.
    pub(crate) fn has_extent(quad: &PlaneQuad) -> bool {
        (quad.br.x - quad.tl.x).abs() > MIN_FACE_EXTENT
            && (quad.br.y - quad.tl.y).abs() > MIN_FACE_EXTENT
    }
}

impl Default for CuboidTool {
    fn default() -> Self {
        Self::new()
    }
}
