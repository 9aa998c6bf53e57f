//! Zeichenwerkzeuge.
//!
//! Werkzeuge halten nur ihren eigenen Zeichenzustand und liefern fertige
//! Quader als reine Daten zurück; die Übernahme in die Liste erfolgt zentral
//! in `handlers::editing`.

/// Quader-Werkzeug mit dreistufigem Klick-Ablauf.
pub mod cuboid;

pub use cuboid::{CuboidTool, DrawingStatus};

use crate::core::Cuboid;

/// Rückgabe von `on_click`: steuert den Tool-Flow.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolAction {
    /// Klick registriert, Phase gewechselt, weitere Eingabe nötig
    Continue,
    /// Klick hatte keine Wirkung (z.B. Vorderfläche ohne Ausdehnung)
    Ignored,
    /// Quader fertig, Übernahme in die Liste
    Committed(Cuboid),
}
