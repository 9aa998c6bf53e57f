//! Application State: zentrale Datenhaltung des Quader-Werkzeugs.

use super::events::HostEvent;
use super::history::CuboidHistory;
use super::tools::CuboidTool;
use crate::core::geometry::{DragTarget, HighlightEntry};
use crate::core::{Cuboid, ViewTransform};
use crate::shared::EditorOptions;
use glam::Vec2;
use indexmap::IndexMap;

/// Größe des geladenen Hintergrundbilds (Pixel).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImageInfo {
    pub width: u32,
    pub height: u32,
}

/// Auswahl- und Hover-Zustand
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    /// Aktuell selektierter Quader (höchstens einer)
    pub selected_id: Option<String>,
    /// Quader unter dem Cursor (erster Treffer in Listenreihenfolge)
    pub hover_id: Option<String>,
}

impl SelectionState {
    /// Erstellt einen leeren Selektionszustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// True wenn `id` sowohl gehovert als auch selektiert ist.
    pub fn is_hovered_and_selected(&self, id: &str) -> bool {
        self.hover_id.as_deref() == Some(id) && self.selected_id.as_deref() == Some(id)
    }
}

/// Zustand einer laufenden Drag-Geste.
#[derive(Debug, Clone)]
pub struct DragInfo {
    /// Startposition im gezoomten Raum (Screen minus Pan)
    pub drag_start: Vec2,
    /// Snapshot des Quaders vor Gestenbeginn
    pub initial: Cuboid,
    /// Verschobener Teil des Quaders
    pub target: DragTarget,
    /// Wurde seit dem Drücken bewegt?
    pub moved: bool,
}

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Quader-Liste, Reihenfolge = Z-Reihenfolge
    pub cuboids: IndexMap<String, Cuboid>,
    /// Selektion und Hover
    pub selection: SelectionState,
    /// Aktive Drag-Geste
    pub drag: Option<DragInfo>,
    /// Hover-Kandidaten (Ecken/Kanten) des selektierten Quaders
    pub highlights: Vec<HighlightEntry>,
    /// Zeichenwerkzeug
    pub tool: CuboidTool,
    /// Zoom/Pan
    pub view: ViewTransform,
    /// Hintergrundbild (None = kein Bild geladen, alle Eingaben werden ignoriert)
    pub image: Option<ImageInfo>,
    /// Quellen-ID des aktuellen Bilds (neue Quader, Sichtbarkeit)
    pub source_id: String,
    /// Nur Quader mit diesen Attributen anzeigen (leer = alle)
    pub attribute_lock_list: Vec<String>,
    /// Alle Quader außer dem selektierten ausblenden
    pub hidden: bool,
    /// Leertaste gedrückt (Pan-Modus des Hosts)
    pub space_pressed: bool,
    /// Nächstes Loslassen ignorieren (Drag wurde per Escape abgebrochen)
    pub swallow_release: bool,
    /// Laufzeit-Optionen
    pub options: EditorOptions,
    /// Undo/Redo-History (Snapshot-basiert)
    pub history: CuboidHistory,
    /// Gesammelte Benachrichtigungen für den Host
    pub pending_events: Vec<HostEvent>,
    next_id_seq: u64,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt einen leeren App-State mit den gegebenen Optionen.
    pub fn with_options(options: EditorOptions) -> Self {
        Self {
            cuboids: IndexMap::new(),
            selection: SelectionState::new(),
            drag: None,
            highlights: Vec::new(),
            tool: CuboidTool::new(),
            view: ViewTransform::new(),
            image: None,
            source_id: String::new(),
            attribute_lock_list: Vec::new(),
            hidden: false,
            space_pressed: false,
            swallow_release: false,
            history: CuboidHistory::new_with_capacity(options.history_depth),
            options,
            pending_events: Vec::new(),
            next_id_seq: 0,
        }
    }

    /// Reiht eine Host-Benachrichtigung ein.
    pub fn emit(&mut self, event: HostEvent) {
        self.pending_events.push(event);
    }

    /// Setzt die Selektion; meldet `SelectedChange` nur bei tatsächlicher Änderung.
    pub fn set_selected(&mut self, id: Option<String>) {
        if self.selection.selected_id != id {
            self.selection.selected_id = id;
            self.highlights.clear();
            self.emit(HostEvent::SelectedChange);
        }
    }

    /// Erzeugt eine neue, in der Liste noch nicht vorhandene Quader-ID.
    pub fn next_cuboid_id(&mut self) -> String {
        loop {
            self.next_id_seq += 1;
            let id = format!("cuboid-{}", self.next_id_seq);
            if !self.cuboids.contains_key(&id) {
                return id;
            }
        }
    }

    /// Order-Nummer für einen neuen Quader (Maximum + 1).
    pub fn next_order(&self) -> u32 {
        self.cuboids
            .values()
            .map(|c| c.order)
            .max()
            .map_or(1, |max| max.saturating_add(1))
    }

    pub fn selected_cuboid(&self) -> Option<&Cuboid> {
        let id = self.selection.selected_id.as_ref()?;
        self.cuboids.get(id)
    }

    /// Angezeigte Quader in Listenreihenfolge.
    ///
    /// Gefiltert nach `source_id`, Attribut-Sperrliste und `hidden`. Der
    /// selektierte Quader ist immer enthalten.
    pub fn visible_cuboids(&self) -> impl Iterator<Item = &Cuboid> + '_ {
        let selected_id = self.selection.selected_id.as_deref();
        self.cuboids.values().filter(move |c| {
            if selected_id == Some(c.id.as_str()) {
                return true;
            }
            !self.hidden
                && c.source_id == self.source_id
                && (self.attribute_lock_list.is_empty()
                    || self.attribute_lock_list.contains(&c.attribute))
        })
    }

    /// Liste als Vec in Z-Reihenfolge (Host-Schema, History-Snapshot).
    pub fn cuboid_list(&self) -> Vec<Cuboid> {
        self.cuboids.values().cloned().collect()
    }

    /// Ersetzt die Liste. Doppelte IDs: letzter Eintrag gewinnt.
    pub fn replace_cuboids(&mut self, list: Vec<Cuboid>) {
        let incoming = list.len();
        let mut map = IndexMap::with_capacity(incoming);
        for cuboid in list {
            map.insert(cuboid.id.clone(), cuboid);
        }
        if map.len() != incoming {
            log::warn!(
                "{} doppelte Quader-IDs verworfen (letzter Eintrag gewinnt)",
                incoming - map.len()
            );
        }
        self.cuboids = map;
    }

    /// Hebt Selektion und Hover auf, wenn ihr Quader nicht mehr in der Liste steht.
    pub fn drop_stale_selection(&mut self) {
        let hover_missing = self
            .selection
            .hover_id
            .as_ref()
            .is_some_and(|id| !self.cuboids.contains_key(id));
        if hover_missing {
            self.selection.hover_id = None;
        }
        let selected_missing = self
            .selection
            .selected_id
            .as_ref()
            .is_some_and(|id| !self.cuboids.contains_key(id));
        if selected_missing {
            self.set_selected(None);
        }
    }

    /// Abbrechen aller laufenden Gesten (Zeichnen, Drag, Hover-Kandidaten).
    pub fn clear_gestures(&mut self) {
        self.tool.reset();
        self.drag = None;
        self.highlights.clear();
    }

    /// Undo/Redo helpers
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Gibt zurück, ob ein Redo-Schritt verfügbar ist.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Checkpoint des aktuellen Stands für Undo.
    pub fn record_history(&mut self) {
        let list = self.cuboid_list();
        self.history.push_history(list);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
