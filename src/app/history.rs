//! Undo/Redo für Linienweg-Bearbeitungen.

use crate::core::RoutePath;
use std::collections::VecDeque;
use std::sync::Arc;

/// Zustand des Linienwegs vor einer Mutation.
///
/// Arc-Klon (Copy-on-Write): Der Snapshot kostet O(1), die eigentliche Kopie
/// entsteht erst beim nächsten `Arc::make_mut()` im Use-Case.
#[derive(Debug, Clone)]
pub struct Snapshot {
    /// Linienweg inklusive Endmarkierung
    pub path: Arc<RoutePath>,
}

impl Snapshot {
    /// Erstellt einen Snapshot des Linienwegs
    pub fn of(path: &Arc<RoutePath>) -> Self {
        Self {
            path: Arc::clone(path),
        }
    }
}

/// Undo/Redo-Stapel mit begrenzter Tiefe
#[derive(Debug, Default)]
pub struct EditHistory {
    undo_stack: VecDeque<Snapshot>,
    redo_stack: VecDeque<Snapshot>,
    max_depth: usize,
}

impl EditHistory {
    /// Erstellt einen Verlauf mit maximaler Tiefe.
    pub fn new_with_capacity(max_depth: usize) -> Self {
        Self {
            undo_stack: VecDeque::with_capacity(max_depth),
            redo_stack: VecDeque::with_capacity(max_depth),
            max_depth,
        }
    }

    /// Vermerkt einen Snapshot vor einer Mutation und verwirft den Redo-Stapel.
    pub fn record_snapshot(&mut self, snap: Snapshot) {
        Self::push_bounded(&mut self.undo_stack, snap, self.max_depth);
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

    /// Nimmt den letzten Undo-Eintrag; `current` wandert auf den Redo-Stapel.
    pub fn pop_undo_with_current(&mut self, current: Snapshot) -> Option<Snapshot> {
        let prev = self.undo_stack.pop_back()?;
        Self::push_bounded(&mut self.redo_stack, current, self.max_depth);
        Some(prev)
    }

    /// Nimmt den letzten Redo-Eintrag; `current` wandert auf den Undo-Stapel.
    pub fn pop_redo_with_current(&mut self, current: Snapshot) -> Option<Snapshot> {
        let next = self.redo_stack.pop_back()?;
        Self::push_bounded(&mut self.undo_stack, current, self.max_depth);
        Some(next)
    }

    fn push_bounded(stack: &mut VecDeque<Snapshot>, snap: Snapshot, max_depth: usize) {
        if max_depth == 0 {
            return;
        }
        if stack.len() >= max_depth {
            stack.pop_front();
        }
        stack.push_back(snap);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::test_fixtures::bus_path;

    fn snapshot_with_segments(count: u64) -> Snapshot {
        let chain: Vec<(u64, u64, u64)> = (0..count).map(|i| (100 + i, i, i + 1)).collect();
        Snapshot::of(&Arc::new(bus_path(&chain)))
    }

    #[test]
    fn empty_history_cannot_undo_or_redo() {
        let history = EditHistory::new_with_capacity(10);
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn undo_then_redo_swaps_snapshots() {
        let mut history = EditHistory::new_with_capacity(10);
        history.record_snapshot(snapshot_with_segments(2));

        let restored = history
            .pop_undo_with_current(snapshot_with_segments(3))
            .expect("undo vorhanden");
        assert_eq!(restored.path.len(), 2);
        assert!(history.can_redo());

        let redone = history
            .pop_redo_with_current(restored)
            .expect("redo vorhanden");
        assert_eq!(redone.path.len(), 3);
        assert!(history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn new_record_clears_redo_stack() {
        let mut history = EditHistory::new_with_capacity(10);
        history.record_snapshot(snapshot_with_segments(1));
        let _ = history.pop_undo_with_current(snapshot_with_segments(2));
        assert!(history.can_redo());

        history.record_snapshot(snapshot_with_segments(4));
        assert!(!history.can_redo());
    }

    #[test]
    fn respects_max_depth_and_drops_oldest() {
        let mut history = EditHistory::new_with_capacity(3);
        for i in 1..=5 {
            history.record_snapshot(snapshot_with_segments(i));
        }

        let mut lengths = Vec::new();
        while let Some(snap) = history.pop_undo_with_current(snapshot_with_segments(9)) {
            lengths.push(snap.path.len());
        }
        assert_eq!(lengths, vec![5, 4, 3]);
    }

    #[test]
    fn snapshot_shares_path_until_mutated() {
        let path = Arc::new(bus_path(&[(1, 1, 2)]));
        let snap = Snapshot::of(&path);
        assert!(Arc::ptr_eq(&path, &snap.path));
    }
}
