//! Handler für Undo/Redo-Operationen.

use crate::app::events::HostEvent;
use crate::app::AppState;
use crate::core::Cuboid;

/// Führt einen Undo-Schritt aus, falls vorhanden.
pub fn undo(state: &mut AppState) -> bool {
    match state.history.undo() {
        Some(list) => {
            restore(state, list);
            log::info!("Undo ausgeführt");
            true
        }
        None => {
            log::debug!("Undo: nichts zu tun");
            false
        }
    }
}

/// Führt einen Redo-Schritt aus, falls vorhanden.
pub fn redo(state: &mut AppState) -> bool {
    match state.history.redo() {
        Some(list) => {
            restore(state, list);
            log::info!("Redo ausgeführt");
            true
        }
        None => {
            log::debug!("Redo: nichts zu tun");
            false
        }
    }
}

fn restore(state: &mut AppState, list: Vec<Cuboid>) {
    let previous_len = state.cuboids.len();
    state.replace_cuboids(list);
    state.clear_gestures();
    state.drop_stale_selection();
    if state.cuboids.len() != previous_len {
        state.emit(HostEvent::UpdatePageNumber);
    }
    state.emit(HostEvent::UpdateResult);
}
