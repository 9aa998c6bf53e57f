//! Feature-Handler für die Eingabe-Verarbeitung.
//!
//! Jeder Handler gruppiert die Zustandsänderungen eines Feature-Bereichs.
//! Der Controller dispatcht an die passende Handler-Funktion.

pub mod drawing;
pub mod editing;
pub mod history;
pub mod interaction;
