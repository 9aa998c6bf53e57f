use crate::core::Cuboid;

/// Snapshot-basierter Undo/Redo-Speicher für die Quader-Liste.
///
/// `current` ist immer der zuletzt eingecheckte Zustand; Undo/Redo verschieben
/// ihn zwischen den beiden Stacks und liefern den wiederherzustellenden Stand.
#[derive(Default)]
pub struct CuboidHistory {
    undo_stack: Vec<Vec<Cuboid>>,
    redo_stack: Vec<Vec<Cuboid>>,
    current: Vec<Cuboid>,
    max_depth: usize,
}

impl CuboidHistory {
    /// Erstellt einen neuen History-Speicher mit maximaler Tiefe.
    pub fn new_with_capacity(max_depth: usize) -> Self {
        Self {
            undo_stack: Vec::with_capacity(max_depth.min(64)),
            redo_stack: Vec::new(),
            current: Vec::new(),
            max_depth: max_depth.max(1),
        }
    }

    /// Setzt den Verlauf zurück und übernimmt `list` als Ausgangszustand.
    pub fn init(&mut self, list: Vec<Cuboid>) {
        self.undo_stack.clear();
        self.redo_stack.clear();
        self.current = list;
    }

    /// Checkpoint nach einer abgeschlossenen Geste. Leert den Redo-Stack.
    pub fn push_history(&mut self, list: Vec<Cuboid>) {
        if self.undo_stack.len() >= self.max_depth {
            self.undo_stack.remove(0);
        }
        let previous = std::mem::replace(&mut self.current, list);
        self.undo_stack.push(previous);
        self.redo_stack.clear();
    }

    /// Prüft ob Undo möglich ist.
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Prüft ob Redo möglich ist.
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Geht einen Schritt zurück und liefert den wiederherzustellenden Stand.
    pub fn undo(&mut self) -> Option<Vec<Cuboid>> {
        let prev = self.undo_stack.pop()?;
        let current = std::mem::replace(&mut self.current, prev);
        self.redo_stack.push(current);
        Some(self.current.clone())
    }

    /// Geht einen Schritt vor und liefert den wiederherzustellenden Stand.
    pub fn redo(&mut self) -> Option<Vec<Cuboid>> {
        let next = self.redo_stack.pop()?;
        let current = std::mem::replace(&mut self.current, next);
        self.undo_stack.push(current);
        Some(self.current.clone())
    }
}
