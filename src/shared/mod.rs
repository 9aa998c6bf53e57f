//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält die Laufzeit-Konfiguration, die von `app` und `render`
//! gemeinsam gelesen wird.

pub mod options;

pub use options::{AttributeColors, ColorSet, EditorOptions};
pub use options::{DEPTH_SCALE, HIT_SCOPE_PX};
