//! Eingabe-Events vom Host und Benachrichtigungen an den Host.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Maustaste eines Pointer-Events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerButton {
    /// Linke Taste (Zeichnen, Drag)
    Primary,
    /// Rechte Taste (Selektion, Löschen per Doppelklick)
    Secondary,
    /// Mittlere Taste (wird ignoriert)
    Middle,
}

/// Pointer-Event in Screen-Koordinaten.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    /// Position in Screen-Pixeln (Canvas-relativ)
    #[serde(with = "crate::core::cuboid::point_serde")]
    pub position: Vec2,
    pub button: PointerButton,
    /// Ctrl/Cmd gedrückt
    #[serde(default)]
    pub ctrl: bool,
}

impl PointerEvent {
    /// Linke Taste ohne Modifier.
    pub fn primary(x: f32, y: f32) -> Self {
        Self {
            position: Vec2::new(x, y),
            button: PointerButton::Primary,
            ctrl: false,
        }
    }

    /// Rechte Taste ohne Modifier.
    pub fn secondary(x: f32, y: f32) -> Self {
        Self {
            button: PointerButton::Secondary,
            ..Self::primary(x, y)
        }
    }

    /// Setzt den Ctrl-Modifier.
    pub fn with_ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }
}

/// Tastatur-Eingaben, die das Werkzeug auswertet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Key {
    /// Abbrechen: Zeichnen → verwerfen, Drag → zurücksetzen, sonst Selektion aufheben
    Escape,
    /// Selektierten Quader löschen
    Delete,
    /// Wie `Delete`
    Backspace,
    /// Pan-Modus des Hosts (unterdrückt Zeichnen/Drag solange gedrückt)
    Space,
}

/// Benachrichtigungen an den Host (werden gesammelt und vom Host abgeholt).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HostEvent {
    /// Anzahl der Quader hat sich geändert
    UpdatePageNumber,
    /// Ergebnisliste wurde verändert
    UpdateResult,
    /// Selektion hat sich geändert
    SelectedChange,
}

/// Eingabe des Hosts an den Controller (z.B. aus einer aufgezeichneten Session).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AppIntent {
    MouseDown(PointerEvent),
    MouseMove(PointerEvent),
    MouseUp(PointerEvent),
    RightDoubleClick(PointerEvent),
    KeyDown { key: Key },
    KeyUp { key: Key },
    DeleteSelected,
    Undo,
    Redo,
    /// Zoom und Pan setzen
    SetView {
        zoom: f32,
        #[serde(with = "crate::core::cuboid::point_serde")]
        pan: Vec2,
    },
}
