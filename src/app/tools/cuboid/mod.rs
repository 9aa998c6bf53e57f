//! Quader-Zeichenwerkzeug: Vorderfläche aufziehen, Tiefe per Maus bestimmen.
//!
//! **Ablauf:** Ready → (Klick) FirstPoint → (Klick) Cuboid → (Klick) Commit → Ready
//!
//! - `FirstPoint`: Jede Mausbewegung spannt die Vorderfläche als achsparalleles
//!   Rechteck zwischen erstem Klick und Cursor auf.
//! - `Cuboid`: Der Cursor ist die untere rechte Ecke der Rückfläche; die obere
//!   rechte Ecke wird senkrecht darüber synthetisiert, der Rest über die
//!   Fluchtpunkt-Konstruktion der Geometrie-Engine.
//!
//! Aufgeteilt in:
//! - `state`    : Phasen, Tool-Struct, Hilfsmethoden
//! - `lifecycle`: Klick-/Move-Übergänge, Abbruch, Statustext

mod lifecycle;
mod state;

pub use state::{CuboidTool, DrawingStatus};

#[cfg(test)]
mod tests;
