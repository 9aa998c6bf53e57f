//! Übersetzt den App-State in Zeichenaufrufe.
//!
//! Jeder Frame wird vollständig aus dem State neu aufgebaut; es gibt keine
//! Zähler oder Caches, zwei Aufrufe ohne Zustandsänderung erzeugen dieselbe
//! Aufrufsequenz.

use super::types::{DrawStyle, RenderAdapter};
use crate::app::AppState;
use crate::core::geometry::{side_lines, HighlightEntry};
use crate::core::{Cuboid, ViewTransform};
use crate::shared::EditorOptions;
use glam::Vec2;

/// Zeichnet einen kompletten Frame.
pub fn render_frame(state: &AppState, adapter: &mut dyn RenderAdapter) {
    adapter.clear();

    let selected_id = state.selection.selected_id.as_deref();
    let hover_id = state.selection.hover_id.as_deref();

    for cuboid in state.visible_cuboids() {
        let id = Some(cuboid.id.as_str());
        let emphasized = id == selected_id || id == hover_id;
        draw_cuboid(adapter, cuboid, &state.view, &state.options, emphasized);
    }

    if let Some(drawing) = state.tool.drawing() {
        draw_cuboid(adapter, drawing, &state.view, &state.options, false);
    }

    // Selektierter Quader oben auf
    if let Some(selected) = state.selected_cuboid() {
        draw_cuboid(adapter, selected, &state.view, &state.options, true);

        if state.drag.is_none() {
            let color = state
                .options
                .colors_for(&selected.attribute, selected.valid)
                .stroke;
            draw_highlights(adapter, &state.highlights, &state.view, &state.options, color);
        }
    }
}

/// Zeichnet einen Quader (Bildkoordinaten werden hier nach Screen transformiert).
pub fn draw_cuboid(
    adapter: &mut dyn RenderAdapter,
    cuboid: &Cuboid,
    view: &ViewTransform,
    options: &EditorOptions,
    emphasized: bool,
) {
    let screen = cuboid.map_points(|p| view.image_to_screen(p));
    let colors = options.colors_for(&cuboid.attribute, cuboid.valid);
    let stroke = DrawStyle::new(colors.stroke, options.line_width);

    if let Some(lines) = side_lines(&screen) {
        for (from, to) in lines {
            adapter.draw_line(from, to, stroke);
        }
    }
    if let Some(back) = &screen.back_points {
        adapter.draw_polygon(&back.outline(), stroke, true);
    }

    if emphasized {
        for (_, point) in screen.corners() {
            adapter.draw_circle(point, options.corner_marker_radius, stroke, true);
        }
    }

    let front = screen.front_points.outline();
    adapter.fill_polygon(&front, colors.fill);
    adapter.draw_polygon(&front, stroke, true);

    if !options.hidden_text && options.show_order && cuboid.order > 0 {
        let anchor = screen.front_points.tl - Vec2::new(0.0, options.label_offset);
        adapter.draw_text(anchor, &cuboid.order.to_string(), stroke);
    }
}

fn draw_highlights(
    adapter: &mut dyn RenderAdapter,
    highlights: &[HighlightEntry],
    view: &ViewTransform,
    options: &EditorOptions,
    color: [f32; 4],
) {
    let style = DrawStyle::new(color, options.highlight_thickness);
    for entry in highlights {
        match *entry {
            HighlightEntry::PointHighlight { point, .. } => {
                let center = view.image_to_screen(point);
                adapter.draw_circle(center, options.highlight_thickness, style, true);
            }
            HighlightEntry::LineHighlight { segment, .. } => {
                adapter.draw_line(
                    view.image_to_screen(segment.0),
                    view.image_to_screen(segment.1),
                    style,
                );
            }
        }
    }
}
