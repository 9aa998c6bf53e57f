//! Lifecycle-Methoden des CuboidTool (Klick, Move, Abbruch, Statustext).

use super::super::ToolAction;
use super::state::{CuboidTool, DrawingStatus};
use crate::core::{DrawingCuboid, PlaneQuad};
use glam::Vec2;

impl CuboidTool {
    /// Statustext für den Host (z.B. Statusleiste).
    pub fn status_text(&self) -> &str {
        match self.status {
            DrawingStatus::Ready => "Ersten Eckpunkt der Vorderfläche klicken",
            DrawingStatus::FirstPoint => "Gegenüberliegenden Eckpunkt klicken",
            DrawingStatus::Cuboid => "Tiefe wählen und klicken (Escape bricht ab)",
        }
    }

    /// Hat das Werkzeug angefangene Eingaben?
    pub fn has_pending_input(&self) -> bool {
        self.status != DrawingStatus::Ready
    }

    /// Erster Klick: legt `seed` als Zeichen-Quader an, alle Ecken auf `pos`.
    ///
    /// Wird nur im Zustand `Ready` angenommen.
    pub fn begin(&mut self, mut seed: DrawingCuboid, pos: Vec2) -> ToolAction {
        if self.status != DrawingStatus::Ready {
            return ToolAction::Ignored;
        }
        seed.front_points = PlaneQuad::collapsed(pos);
        seed.back_points = None;
        self.drawing = Some(seed);
        self.first_click = Some(pos);
        self.status = DrawingStatus::FirstPoint;
        ToolAction::Continue
    }

    /// Folgeklick in `FirstPoint` bzw. `Cuboid`.
    pub fn on_click(&mut self, pos: Vec2, depth_scale: f32) -> ToolAction {
        match self.status {
            DrawingStatus::Ready => ToolAction::Ignored,
            DrawingStatus::FirstPoint => {
                let Some(front) = self.front_for_cursor(pos) else {
                    return ToolAction::Ignored;
                };
                if !Self::has_extent(&front) {
                    log::debug!("Vorderfläche ohne Ausdehnung, Klick ignoriert");
                    return ToolAction::Ignored;
                }
                if let Some(drawing) = self.drawing.as_mut() {
                    drawing.front_points = front;
                }
                self.status = DrawingStatus::Cuboid;
                ToolAction::Continue
            }
            DrawingStatus::Cuboid => {
                let back = self.back_for_cursor(pos, depth_scale);
                let Some(mut cuboid) = self.drawing.take() else {
                    self.reset();
                    return ToolAction::Ignored;
                };
                cuboid.back_points = back;
                self.reset();
                ToolAction::Committed(cuboid)
            }
        }
    }

    /// Mausbewegung: aktualisiert die jeweils offene Fläche. Gibt `true` zurück bei Änderung.
    pub fn on_move(&mut self, pos: Vec2, depth_scale: f32) -> bool {
        match self.status {
            DrawingStatus::Ready => false,
            DrawingStatus::FirstPoint => {
                let Some(front) = self.front_for_cursor(pos) else {
                    return false;
                };
                match self.drawing.as_mut() {
                    Some(drawing) => {
                        drawing.front_points = front;
                        true
                    }
                    None => false,
                }
            }
            DrawingStatus::Cuboid => {
                let Some(back) = self.back_for_cursor(pos, depth_scale) else {
                    return false;
                };
                match self.drawing.as_mut() {
                    Some(drawing) => {
                        drawing.back_points = Some(back);
                        true
                    }
                    None => false,
                }
            }
        }
    }

    /// Verwirft den Quader in Arbeit. Gibt `true` zurück wenn etwas verworfen wurde.
    pub fn cancel(&mut self) -> bool {
        let had_input = self.has_pending_input();
        self.reset();
        had_input
    }

    /// Werkzeug-Zustand zurücksetzen.
    pub fn reset(&mut self) {
        self.drawing = None;
        self.first_click = None;
        self.status = DrawingStatus::Ready;
    }
}
