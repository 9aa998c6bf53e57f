//! Zentrale Konfiguration für das Quader-Werkzeug.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

// ── Hit-Test ────────────────────────────────────────────────────────

/// Toleranzradius für Ecken-/Kanten-Treffer in Screen-Pixeln.
pub const HIT_SCOPE_PX: f32 = 5.0;

// ── Konstruktion ────────────────────────────────────────────────────

/// Höhe der Rückfläche relativ zur Vorderfläche beim Zeichnen (1.0 = parallele Seitenlinien).
pub const DEPTH_SCALE: f32 = 0.8;

// ── Rendering ───────────────────────────────────────────────────────

/// Linienstärke der Quader-Kanten in Screen-Pixeln.
pub const LINE_WIDTH: f32 = 2.0;
/// Radius der Eckmarker bei Hover/Selektion.
pub const CORNER_MARKER_RADIUS: f32 = 5.0;
/// Radius bzw. Linienstärke hervorgehobener Ecken/Kanten.
pub const HIGHLIGHT_THICKNESS: f32 = 8.0;
/// Vertikaler Abstand des Order-Labels über der Ecke `tl`.
pub const LABEL_OFFSET: f32 = 5.0;
/// Standard-Konturfarbe gültiger Quader (RGBA: Blau).
pub const STROKE_COLOR_VALID: [f32; 4] = [0.4, 0.4, 1.0, 1.0];
/// Standard-Füllfarbe gültiger Quader (RGBA: Blau, halbtransparent).
pub const FILL_COLOR_VALID: [f32; 4] = [0.4, 0.4, 1.0, 0.3];
/// Konturfarbe ungültiger Quader (RGBA: Rot).
pub const STROKE_COLOR_INVALID: [f32; 4] = [1.0, 0.2, 0.2, 1.0];
/// Füllfarbe ungültiger Quader (RGBA: Rot, halbtransparent).
pub const FILL_COLOR_INVALID: [f32; 4] = [1.0, 0.2, 0.2, 0.3];

// ── History ─────────────────────────────────────────────────────────

/// Maximale Anzahl Undo-Schritte.
pub const HISTORY_DEPTH: usize = 200;

/// Kontur- und Füllfarbe.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ColorSet {
    pub stroke: [f32; 4],
    pub fill: [f32; 4],
}

/// Farben eines Attributs für gültige und ungültige Quader.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct AttributeColors {
    pub valid: ColorSet,
    pub invalid: ColorSet,
}

impl AttributeColors {
    /// Farbsatz je nach Gültigkeit.
    pub fn for_validity(&self, valid: bool) -> ColorSet {
        if valid {
            self.valid
        } else {
            self.invalid
        }
    }
}

impl Default for AttributeColors {
    fn default() -> Self {
        Self {
            valid: ColorSet {
                stroke: STROKE_COLOR_VALID,
                fill: FILL_COLOR_VALID,
            },
            invalid: ColorSet {
                stroke: STROKE_COLOR_INVALID,
                fill: FILL_COLOR_INVALID,
            },
        }
    }
}

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Optionen des Quader-Werkzeugs.
/// Wird als `cuboid_annotator.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorOptions {
    /// Hit-Test-Toleranz (Screen-Pixel)
    pub hit_scope_px: f32,
    /// Rückflächen-Höhe relativ zur Vorderfläche beim Zeichnen
    pub depth_scale: f32,
    /// Linienstärke (Screen-Pixel)
    pub line_width: f32,
    /// Radius der Eckmarker
    pub corner_marker_radius: f32,
    /// Radius/Stärke der Hover-Hervorhebung
    pub highlight_thickness: f32,
    /// Abstand des Labels über der Vorderfläche
    pub label_offset: f32,
    /// Order-Nummer am Quader anzeigen
    pub show_order: bool,
    /// Label-Text komplett ausblenden
    pub hidden_text: bool,
    /// Attribut neu gezeichneter Quader
    pub default_attribute: String,
    /// Maximale Undo-Tiefe
    pub history_depth: usize,
    /// Farben für Attribute ohne eigenen Eintrag
    pub default_colors: AttributeColors,
    /// Farben je Attribut
    pub attribute_colors: IndexMap<String, AttributeColors>,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            hit_scope_px: HIT_SCOPE_PX,
            depth_scale: DEPTH_SCALE,
            line_width: LINE_WIDTH,
            corner_marker_radius: CORNER_MARKER_RADIUS,
            highlight_thickness: HIGHLIGHT_THICKNESS,
            label_offset: LABEL_OFFSET,
            show_order: true,
            hidden_text: false,
            default_attribute: String::new(),
            history_depth: HISTORY_DEPTH,
            default_colors: AttributeColors::default(),
            attribute_colors: IndexMap::new(),
        }
    }
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("cuboid_annotator"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("cuboid_annotator.toml")
    }

    /// Farbsatz für Attribut und Gültigkeit (Fallback: `default_colors`).
    pub fn colors_for(&self, attribute: &str, valid: bool) -> ColorSet {
        self.attribute_colors
            .get(attribute)
            .unwrap_or(&self.default_colors)
            .for_validity(valid)
    }
}
