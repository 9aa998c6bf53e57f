//! Zoom/Pan-Transformation zwischen Screen- und Bildkoordinaten.

use glam::Vec2;

/// 2D-Ansicht mit Zoom und Pan (Bild → Screen: `p * zoom + pan`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    /// Zoom-Level (1.0 = ein Bildpixel pro Screenpixel)
    pub zoom: f32,
    /// Screen-Position des Bildursprungs
    pub pan: Vec2,
}

impl ViewTransform {
    /// Minimaler Zoom-Faktor.
    pub const ZOOM_MIN: f32 = 0.01;
    /// Maximaler Zoom-Faktor.
    pub const ZOOM_MAX: f32 = 1000.0;

    /// Erstellt eine Ansicht ohne Zoom und Pan.
    pub fn new() -> Self {
        Self {
            zoom: 1.0,
            pan: Vec2::ZERO,
        }
    }

    /// Setzt den Zoom (geclampt auf den gültigen Bereich).
    pub fn set_zoom(&mut self, zoom: f32) {
        self.zoom = zoom.clamp(Self::ZOOM_MIN, Self::ZOOM_MAX);
    }

    /// Verschiebt die Ansicht in Screen-Pixeln.
    pub fn pan_by(&mut self, delta: Vec2) {
        self.pan += delta;
    }

    /// Screen → gezoomter Raum (nur Pan entfernt).
    pub fn screen_to_zoomed(&self, screen: Vec2) -> Vec2 {
        screen - self.pan
    }

    /// Screen → Bildkoordinaten.
    pub fn screen_to_image(&self, screen: Vec2) -> Vec2 {
        self.screen_to_zoomed(screen) / self.zoom
    }

    /// Bild → Screen.
    pub fn image_to_screen(&self, image: Vec2) -> Vec2 {
        image * self.zoom + self.pan
    }

    /// Rechnet einen Screen-Pixel-Radius in Bildeinheiten um.
    pub fn screen_radius_to_image(&self, radius_px: f32) -> f32 {
        radius_px / self.zoom
    }
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self::new()
    }
}
