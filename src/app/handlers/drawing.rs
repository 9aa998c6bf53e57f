//! Handler für das Zeichnen neuer Quader.

use super::editing;
use crate::app::tools::ToolAction;
use crate::app::AppState;
use crate::core::{Cuboid, PlaneQuad};
use glam::Vec2;

/// Primärklick in Bildkoordinaten: startet, erweitert oder committet den Quader in Arbeit.
pub fn primary_click(state: &mut AppState, image_pos: Vec2, ctrl: bool) -> bool {
    let action = if state.tool.has_pending_input() {
        state.tool.on_click(image_pos, state.options.depth_scale)
    } else {
        let seed = new_drawing_cuboid(state, image_pos, ctrl);
        state.selection.hover_id = None;
        state.highlights.clear();
        state.tool.begin(seed, image_pos)
    };

    match action {
        ToolAction::Continue => true,
        ToolAction::Ignored => false,
        ToolAction::Committed(cuboid) => {
            editing::commit_cuboid(state, cuboid);
            true
        }
    }
}

/// Cursor-Bewegung während des Zeichnens.
pub fn pointer_move(state: &mut AppState, image_pos: Vec2) -> bool {
    state.tool.on_move(image_pos, state.options.depth_scale)
}

/// Verwirft den Quader in Arbeit.
pub fn cancel(state: &mut AppState) -> bool {
    let cancelled = state.tool.cancel();
    if cancelled {
        log::info!("Zeichnen abgebrochen");
    }
    cancelled
}

fn new_drawing_cuboid(state: &mut AppState, pos: Vec2, ctrl: bool) -> Cuboid {
    Cuboid {
        id: state.next_cuboid_id(),
        source_id: state.source_id.clone(),
        attribute: state.options.default_attribute.clone(),
        valid: !ctrl,
        order: state.next_order(),
        text_attribute: String::new(),
        front_points: PlaneQuad::collapsed(pos),
        back_points: None,
    }
}
