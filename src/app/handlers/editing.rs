//! Handler für Listen-Mutationen: Commit, Löschen, Ersetzen.

use crate::app::events::HostEvent;
use crate::app::AppState;
use crate::core::Cuboid;

/// Übernimmt einen fertig gezeichneten Quader in die Liste und selektiert ihn.
pub fn commit_cuboid(state: &mut AppState, cuboid: Cuboid) {
    let id = cuboid.id.clone();
    log::info!("Quader {} übernommen (order {})", id, cuboid.order);
    state.cuboids.insert(id.clone(), cuboid);
    state.set_selected(Some(id));
    state.record_history();
    state.emit(HostEvent::UpdatePageNumber);
    state.emit(HostEvent::UpdateResult);
}

/// Entfernt einen Quader per ID und hebt die Selektion auf.
///
/// Gibt `true` zurück wenn der Quader existierte.
pub fn delete_cuboid(state: &mut AppState, id: &str) -> bool {
    if state.cuboids.shift_remove(id).is_none() {
        log::debug!("Löschen: Quader {} nicht vorhanden", id);
        return false;
    }
    state.set_selected(None);
    if state.selection.hover_id.as_deref() == Some(id) {
        state.selection.hover_id = None;
    }
    if state.drag.as_ref().is_some_and(|d| d.initial.id == id) {
        state.drag = None;
    }
    state.highlights.clear();
    state.record_history();
    state.emit(HostEvent::UpdatePageNumber);
    state.emit(HostEvent::UpdateResult);
    log::info!("Quader {} gelöscht", id);
    true
}

/// Löscht den selektierten Quader, falls vorhanden.
pub fn delete_selected(state: &mut AppState) -> bool {
    match state.selection.selected_id.clone() {
        Some(id) => delete_cuboid(state, &id),
        None => {
            log::debug!("Löschen: keine Selektion");
            false
        }
    }
}

/// Ersetzt den selektierten Quader. Die ID bleibt die des selektierten Eintrags.
pub fn update_selected_cuboid(state: &mut AppState, mut cuboid: Cuboid) -> bool {
    let Some(id) = state.selection.selected_id.clone() else {
        log::debug!("Update: keine Selektion");
        return false;
    };
    let Some(entry) = state.cuboids.get_mut(&id) else {
        return false;
    };
    cuboid.id = id;
    *entry = cuboid;
    true
}

/// Übernimmt eine neue Liste vom Host und setzt den Verlauf zurück.
pub fn set_cuboid_list(state: &mut AppState, list: Vec<Cuboid>) {
    let previous_len = state.cuboids.len();
    state.replace_cuboids(list);
    state.clear_gestures();
    state.drop_stale_selection();
    let list = state.cuboid_list();
    state.history.init(list);
    if state.cuboids.len() != previous_len {
        state.emit(HostEvent::UpdatePageNumber);
    }
    log::info!("{} Quader geladen", state.cuboids.len());
}
