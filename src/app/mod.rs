//! Application-Layer: Controller, State, Events und Handler.

pub mod controller;
pub mod events;
pub mod handlers;
pub mod history;
/// Application State
///
/// Dieses Modul verwaltet den Zustand des Werkzeugs (Quader-Liste, Selektion, Gesten).
pub mod state;
pub mod tools;

pub use controller::AppController;
pub use events::{AppIntent, HostEvent, Key, PointerButton, PointerEvent};
pub use history::CuboidHistory;
pub use state::{AppState, DragInfo, ImageInfo, SelectionState};
pub use tools::{CuboidTool, DrawingStatus, ToolAction};
