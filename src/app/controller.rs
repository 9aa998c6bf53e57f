//! Application Controller für zentrale Event-Verarbeitung.

use super::events::{AppIntent, HostEvent, Key, PointerButton, PointerEvent};
use super::handlers;
use super::state::ImageInfo;
use super::AppState;
use crate::core::Cuboid;
use crate::render::{render_frame, RenderAdapter};
use crate::shared::EditorOptions;
use glam::Vec2;

/// Orchestriert Eingabe-Events auf den AppState und zeichnet nach jeder Änderung neu.
///
/// Alle Pointer-Handler geben zurück, ob das Event verarbeitet wurde.
pub struct AppController<R: RenderAdapter> {
    pub state: AppState,
    renderer: R,
}

impl<R: RenderAdapter> AppController<R> {
    /// Erstellt einen neuen Controller mit Standard-Optionen.
    pub fn new(renderer: R) -> Self {
        Self::with_options(renderer, EditorOptions::default())
    }

    pub fn with_options(renderer: R, options: EditorOptions) -> Self {
        Self {
            state: AppState::with_options(options),
            renderer,
        }
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// Verarbeitet einen Intent (z.B. aus einer aufgezeichneten Session).
    pub fn handle_intent(&mut self, intent: AppIntent) -> bool {
        match intent {
            AppIntent::MouseDown(event) => self.on_mouse_down(event),
            AppIntent::MouseMove(event) => self.on_mouse_move(event),
            AppIntent::MouseUp(event) => self.on_mouse_up(event),
            AppIntent::RightDoubleClick(event) => self.on_right_dbl_click(event),
            AppIntent::KeyDown { key } => self.on_key_down(key),
            AppIntent::KeyUp { key } => self.on_key_up(key),
            AppIntent::DeleteSelected => {
                let changed = handlers::editing::delete_selected(&mut self.state);
                self.redraw_if(changed)
            }
            AppIntent::Undo => self.undo(),
            AppIntent::Redo => self.redo(),
            AppIntent::SetView { zoom, pan } => {
                self.set_view(zoom, pan);
                true
            }
        }
    }

    // === Host-API ===

    /// Übernimmt eine Quader-Liste vom Host (setzt History zurück).
    pub fn set_cuboid_list(&mut self, list: Vec<Cuboid>) {
        handlers::editing::set_cuboid_list(&mut self.state, list);
        self.render();
    }

    /// Aktuelle Liste in Z-Reihenfolge.
    pub fn cuboid_list(&self) -> Vec<Cuboid> {
        self.state.cuboid_list()
    }

    /// Löscht einen Quader per ID.
    pub fn delete_cuboid(&mut self, id: &str) -> bool {
        let changed = handlers::editing::delete_cuboid(&mut self.state, id);
        self.redraw_if(changed)
    }

    /// Ersetzt den selektierten Quader.
    pub fn update_selected_cuboid(&mut self, cuboid: Cuboid) -> bool {
        let changed = handlers::editing::update_selected_cuboid(&mut self.state, cuboid);
        self.redraw_if(changed)
    }

    /// Setzt das Hintergrundbild; ohne Bild werden alle Eingaben ignoriert.
    pub fn set_image(&mut self, image: Option<ImageInfo>) {
        self.state.image = image;
        if image.is_none() {
            self.state.clear_gestures();
        }
        self.render();
    }

    pub fn set_view(&mut self, zoom: f32, pan: Vec2) {
        self.state.view.set_zoom(zoom);
        self.state.view.pan = pan;
        self.render();
    }

    /// Setzt die Quellen-ID; angezeigt werden nur Quader dieser Quelle.
    pub fn set_source_id(&mut self, source_id: impl Into<String>) {
        self.state.source_id = source_id.into();
        self.refresh_visibility();
    }

    /// Beschränkt die Anzeige auf die gegebenen Attribute (leer = alle).
    pub fn set_attribute_lock_list(&mut self, attributes: Vec<String>) {
        self.state.attribute_lock_list = attributes;
        self.refresh_visibility();
    }

    /// Blendet alle Quader außer dem selektierten aus.
    pub fn set_hidden(&mut self, hidden: bool) {
        self.state.hidden = hidden;
        self.refresh_visibility();
    }

    /// Holt alle seit dem letzten Aufruf gesammelten Host-Benachrichtigungen ab.
    pub fn drain_events(&mut self) -> Vec<HostEvent> {
        std::mem::take(&mut self.state.pending_events)
    }

    pub fn undo(&mut self) -> bool {
        let changed = handlers::history::undo(&mut self.state);
        self.redraw_if(changed)
    }

    pub fn redo(&mut self) -> bool {
        let changed = handlers::history::redo(&mut self.state);
        self.redraw_if(changed)
    }

    /// Vollständiges Neuzeichnen aus dem aktuellen Zustand.
    pub fn render(&mut self) {
        render_frame(&self.state, &mut self.renderer);
    }

    // === Pointer ===

    pub fn on_mouse_down(&mut self, event: PointerEvent) -> bool {
        if self.state.image.is_none() || event.button != PointerButton::Primary {
            return false;
        }
        self.state.swallow_release = false;
        if self.state.space_pressed || event.ctrl || self.state.tool.has_pending_input() {
            return false;
        }
        let image_pos = self.state.view.screen_to_image(event.position);
        let hover_changed = handlers::interaction::update_hover(&mut self.state, image_pos);
        let armed = handlers::interaction::begin_drag(&mut self.state, event.position);
        self.redraw_if(hover_changed || armed);
        armed
    }

    pub fn on_mouse_move(&mut self, event: PointerEvent) -> bool {
        if self.state.image.is_none() {
            return false;
        }
        let changed = if self.state.drag.is_some() {
            handlers::interaction::drag_move(&mut self.state, event.position)
        } else {
            let image_pos = self.state.view.screen_to_image(event.position);
            if self.state.tool.has_pending_input() {
                handlers::drawing::pointer_move(&mut self.state, image_pos)
            } else {
                handlers::interaction::update_hover(&mut self.state, image_pos)
            }
        };
        self.redraw_if(changed)
    }

    pub fn on_mouse_up(&mut self, event: PointerEvent) -> bool {
        if self.state.image.is_none() {
            return false;
        }
        let image_pos = self.state.view.screen_to_image(event.position);
        let changed = match event.button {
            PointerButton::Primary => {
                if handlers::interaction::end_drag(&mut self.state) {
                    true
                } else if std::mem::take(&mut self.state.swallow_release)
                    || self.state.space_pressed
                {
                    false
                } else {
                    handlers::drawing::primary_click(&mut self.state, image_pos, event.ctrl)
                }
            }
            PointerButton::Secondary => {
                if self.state.tool.has_pending_input() || self.state.drag.is_some() {
                    false
                } else {
                    handlers::interaction::select_hovered(&mut self.state, image_pos)
                }
            }
            PointerButton::Middle => false,
        };
        self.redraw_if(changed)
    }

    /// Doppelter Rechtsklick: löscht den Quader, wenn er gehovert und selektiert ist.
    pub fn on_right_dbl_click(&mut self, event: PointerEvent) -> bool {
        if self.state.image.is_none() || self.state.drag.is_some() {
            return false;
        }
        let image_pos = self.state.view.screen_to_image(event.position);
        handlers::interaction::update_hover(&mut self.state, image_pos);
        let Some(id) = self.state.selection.hover_id.clone() else {
            return false;
        };
        if !self.state.selection.is_hovered_and_selected(&id) {
            return false;
        }
        let changed = handlers::editing::delete_cuboid(&mut self.state, &id);
        self.redraw_if(changed)
    }

    // === Tastatur ===

    pub fn on_key_down(&mut self, key: Key) -> bool {
        let changed = match key {
            Key::Space => {
                self.state.space_pressed = true;
                false
            }
            Key::Escape => {
                handlers::drawing::cancel(&mut self.state)
                    || handlers::interaction::cancel_drag(&mut self.state)
                    || handlers::interaction::clear_selection(&mut self.state)
            }
            Key::Delete | Key::Backspace => {
                if self.state.image.is_none() || self.state.drag.is_some() {
                    false
                } else {
                    handlers::editing::delete_selected(&mut self.state)
                }
            }
        };
        self.redraw_if(changed)
    }

    pub fn on_key_up(&mut self, key: Key) -> bool {
        if key == Key::Space {
            self.state.space_pressed = false;
        }
        false
    }

    fn refresh_visibility(&mut self) {
        self.state.selection.hover_id = None;
        self.state.highlights.clear();
        self.render();
    }

    fn redraw_if(&mut self, changed: bool) -> bool {
        if changed {
            self.render();
        }
        changed
    }
}
