//! Zeichen-Primitive und Aufzeichnungs-Adapter.

use glam::Vec2;

/// RGBA-Farbe (0.0–1.0).
pub type Color = [f32; 4];

/// Stil eines Zeichenaufrufs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawStyle {
    pub color: Color,
    /// Linienstärke in Screen-Pixeln
    pub thickness: f32,
}

impl DrawStyle {
    pub const fn new(color: Color, thickness: f32) -> Self {
        Self { color, thickness }
    }
}

/// Zeichen-Schnittstelle des Hosts (Canvas, GPU, Test-Recorder).
///
/// Alle Koordinaten sind Screen-Koordinaten.
pub trait RenderAdapter {
    /// Löscht die Zeichenfläche.
    fn clear(&mut self);
    fn draw_line(&mut self, from: Vec2, to: Vec2, style: DrawStyle);
    /// Polygonzug; `closed` verbindet den letzten mit dem ersten Punkt.
    fn draw_polygon(&mut self, points: &[Vec2], style: DrawStyle, closed: bool);
    fn fill_polygon(&mut self, points: &[Vec2], color: Color);
    fn draw_circle(&mut self, center: Vec2, radius: f32, style: DrawStyle, filled: bool);
    fn draw_text(&mut self, position: Vec2, text: &str, style: DrawStyle);
}

/// Ein aufgezeichneter Zeichenaufruf.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Clear,
    Line {
        from: Vec2,
        to: Vec2,
        style: DrawStyle,
    },
    Polygon {
        points: Vec<Vec2>,
        style: DrawStyle,
        closed: bool,
    },
    FillPolygon {
        points: Vec<Vec2>,
        color: Color,
    },
    Circle {
        center: Vec2,
        radius: f32,
        style: DrawStyle,
        filled: bool,
    },
    Text {
        position: Vec2,
        text: String,
        style: DrawStyle,
    },
}

/// Adapter, der alle Aufrufe als [`DrawCall`] protokolliert.
///
/// `clear` leert das Protokoll nicht, sondern wird selbst aufgezeichnet;
/// `take_calls` übergibt das Protokoll an den Aufrufer.
#[derive(Debug, Default)]
pub struct DrawRecorder {
    calls: Vec<DrawCall>,
}

impl DrawRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    /// Gibt das Protokoll zurück und beginnt ein neues.
    pub fn take_calls(&mut self) -> Vec<DrawCall> {
        std::mem::take(&mut self.calls)
    }
}

impl RenderAdapter for DrawRecorder {
    fn clear(&mut self) {
        self.calls.push(DrawCall::Clear);
    }

    fn draw_line(&mut self, from: Vec2, to: Vec2, style: DrawStyle) {
        self.calls.push(DrawCall::Line { from, to, style });
    }

    fn draw_polygon(&mut self, points: &[Vec2], style: DrawStyle, closed: bool) {
        self.calls.push(DrawCall::Polygon {
            points: points.to_vec(),
            style,
            closed,
        });
    }

    fn fill_polygon(&mut self, points: &[Vec2], color: Color) {
        self.calls.push(DrawCall::FillPolygon {
            points: points.to_vec(),
            color,
        });
    }

    fn draw_circle(&mut self, center: Vec2, radius: f32, style: DrawStyle, filled: bool) {
        self.calls.push(DrawCall::Circle {
            center,
            radius,
            style,
            filled,
        });
    }

    fn draw_text(&mut self, position: Vec2, text: &str, style: DrawStyle) {
        self.calls.push(DrawCall::Text {
            position,
            text: text.to_owned(),
            style,
        });
    }
}
