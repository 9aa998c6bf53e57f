//! Handler für Hover, Selektion und Drag-Gesten auf bestehenden Quadern.

use crate::app::events::HostEvent;
use crate::app::state::DragInfo;
use crate::app::AppState;
use crate::core::geometry::{
    close_points_or_lines, cuboid_drag_move, silhouette_contains, DragTarget, HighlightEntry,
};
use glam::Vec2;

/// Hit-Test-Radius in Bildeinheiten für den aktuellen Zoom.
pub fn hit_scope(state: &AppState) -> f32 {
    state.view.screen_radius_to_image(state.options.hit_scope_px)
}

/// Erster angezeigter Quader (Listenreihenfolge), dessen Silhouette `image_pos` enthält.
pub fn hovered_cuboid_id(state: &AppState, image_pos: Vec2) -> Option<String> {
    state
        .visible_cuboids()
        .find(|c| silhouette_contains(c, image_pos))
        .map(|c| c.id.clone())
}

/// Ecken-/Kanten-Kandidaten des selektierten Quaders am Cursor.
pub fn selected_candidates(state: &AppState, image_pos: Vec2) -> Vec<HighlightEntry> {
    state
        .selected_cuboid()
        .map(|c| close_points_or_lines(image_pos, c, hit_scope(state)))
        .unwrap_or_default()
}

/// Aktualisiert Hover-ID und Hover-Kandidaten. Gibt `true` zurück bei Änderung.
pub fn update_hover(state: &mut AppState, image_pos: Vec2) -> bool {
    let hover_id = hovered_cuboid_id(state, image_pos);
    let highlights = selected_candidates(state, image_pos);
    let changed = hover_id != state.selection.hover_id || highlights != state.highlights;
    state.selection.hover_id = hover_id;
    state.highlights = highlights;
    changed
}

/// Primärdruck: armiert einen Drag, falls der gehoverte Quader bereits selektiert ist.
///
/// Erwartet einen aktuellen Hover-Zustand (`update_hover` an derselben Position).
pub fn begin_drag(state: &mut AppState, screen_pos: Vec2) -> bool {
    let image_pos = state.view.screen_to_image(screen_pos);

    let Some(selected_id) = state.selection.selected_id.clone() else {
        return false;
    };
    if !state.selection.is_hovered_and_selected(&selected_id) {
        return false;
    }
    let Some(initial) = state.cuboids.get(&selected_id).cloned() else {
        return false;
    };

    let candidates = close_points_or_lines(image_pos, &initial, hit_scope(state));
    let target = DragTarget::from_highlight(candidates.first());
    log::debug!("Drag gestartet auf {} ({:?})", selected_id, target);

    state.drag = Some(DragInfo {
        drag_start: state.view.screen_to_zoomed(screen_pos),
        initial,
        target,
        moved: false,
    });
    state.highlights.clear();
    true
}

/// Drag-Bewegung: wendet den absoluten Versatz auf den Snapshot an.
pub fn drag_move(state: &mut AppState, screen_pos: Vec2) -> bool {
    let zoomed = state.view.screen_to_zoomed(screen_pos);
    let zoom = state.view.zoom;
    let Some(drag) = state.drag.as_mut() else {
        return false;
    };

    let offset = (zoomed - drag.drag_start) / zoom;
    let moved = cuboid_drag_move(&drag.initial, offset, drag.target);
    if offset != Vec2::ZERO {
        drag.moved = true;
    }
    match state.cuboids.get_mut(&moved.id) {
        Some(entry) => {
            *entry = moved;
            true
        }
        None => {
            state.drag = None;
            false
        }
    }
}

/// Loslassen nach einem Drag.
///
/// Gibt `true` zurück wenn der Drag bewegt wurde und damit abgeschlossen ist.
/// Unbewegte Drags werden nur verworfen; der Aufrufer behandelt das Loslassen
/// dann als gewöhnlichen Klick.
pub fn end_drag(state: &mut AppState) -> bool {
    let Some(drag) = state.drag.take() else {
        return false;
    };
    if !drag.moved {
        return false;
    }
    state.record_history();
    state.emit(HostEvent::UpdateResult);
    log::info!("Quader {} verschoben ({:?})", drag.initial.id, drag.target);
    true
}

/// Bricht einen laufenden Drag ab und stellt den Snapshot wieder her.
pub fn cancel_drag(state: &mut AppState) -> bool {
    let Some(drag) = state.drag.take() else {
        return false;
    };
    if let Some(entry) = state.cuboids.get_mut(&drag.initial.id) {
        *entry = drag.initial;
    }
    state.swallow_release = true;
    log::info!("Drag abgebrochen");
    true
}

/// Sekundärklick: selektiert den gehoverten Quader.
pub fn select_hovered(state: &mut AppState, image_pos: Vec2) -> bool {
    update_hover(state, image_pos);
    match state.selection.hover_id.clone() {
        Some(id) => {
            state.set_selected(Some(id));
            state.highlights = selected_candidates(state, image_pos);
            true
        }
        None => false,
    }
}

/// Hebt die Selektion auf.
pub fn clear_selection(state: &mut AppState) -> bool {
    if state.selection.selected_id.is_none() {
        return false;
    }
    state.set_selected(None);
    true
}
