//! Verlauf der ausgeführten Editor-Commands je Kurve (Diagnose und Tests).

use super::EditorCommand;
use crate::core::EditMode;
use std::collections::VecDeque;

/// Ein ausgeführter Command mit der Kurve, auf der er lief.
#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    pub mode: EditMode,
    pub curve_id: u32,
    pub command: EditorCommand,
}

/// Ringpuffer der zuletzt ausgeführten Commands.
#[derive(Debug, Default)]
pub struct CommandLog {
    entries: VecDeque<LogEntry>,
}

impl CommandLog {
    /// Maximale Anzahl gehaltener Einträge; der älteste fällt zuerst heraus.
    pub const CAPACITY: usize = 512;

    /// Erstellt ein leeres Log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Hält einen Command für die Kurve (Modus, ID) fest.
    ///
    /// Frame-Ticks werden nicht aufgezeichnet.
    pub fn record(&mut self, mode: EditMode, curve_id: u32, command: &EditorCommand) {
        if matches!(command, EditorCommand::AdvanceAnimation { .. }) {
            return;
        }
        if self.entries.len() == Self::CAPACITY {
            self.entries.pop_front();
        }
        self.entries.push_back(LogEntry {
            mode,
            curve_id,
            command: command.clone(),
        });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Zuletzt ausgeführter Command.
    pub fn last(&self) -> Option<&EditorCommand> {
        self.entries.back().map(|e| &e.command)
    }

    /// Alle Einträge, älteste zuerst.
    pub fn entries(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }

    /// Commands, die auf der Kurve (Modus, ID) liefen.
    pub fn for_curve(&self, mode: EditMode, curve_id: u32) -> impl Iterator<Item = &EditorCommand> {
        self.entries
            .iter()
            .filter(move |e| e.mode == mode && e.curve_id == curve_id)
            .map(|e| &e.command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn oldest_entry_drops_out_at_capacity() {
        let mut log = CommandLog::new();
        log.record(EditMode::Normal, 7, &EditorCommand::RebuildHandles);
        for _ in 0..CommandLog::CAPACITY {
            log.record(EditMode::Normal, 0, &EditorCommand::ResampleCurve);
        }
        assert_eq!(log.len(), CommandLog::CAPACITY);
        assert_eq!(log.for_curve(EditMode::Normal, 7).count(), 0);
    }

    #[test]
    fn entries_are_grouped_by_curve() {
        let mut log = CommandLog::new();
        log.record(EditMode::Normal, 0, &EditorCommand::ResampleCurve);
        log.record(EditMode::Bezier, 2, &EditorCommand::RebuildHandles);
        log.record(EditMode::Bezier, 2, &EditorCommand::AdvanceAnimation { dt: 0.016 });

        let bezier: Vec<_> = log.for_curve(EditMode::Bezier, 2).collect();
        assert_eq!(bezier, vec![&EditorCommand::RebuildHandles]);
        assert_eq!(log.last(), Some(&EditorCommand::RebuildHandles));
        assert_eq!(log.len(), 2);
    }
}
