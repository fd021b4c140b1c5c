//! Sitzungs-Speicher für Kurven, adressiert über (Modus, ID).

use crate::core::{Curve, EditMode};
use std::collections::HashMap;

/// Hält bearbeitete Kurven, solange der Editor läuft (keine Persistenz).
#[derive(Debug, Default)]
pub struct CurveStore {
    curves: HashMap<(EditMode, u32), Curve>,
}

impl CurveStore {
    /// Erstellt einen leeren Speicher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Liefert die Kurve zu (Modus, ID) oder die Startkurve des Modus.
    pub fn load(&self, mode: EditMode, id: u32) -> Curve {
        self.curves
            .get(&(mode, id))
            .cloned()
            .unwrap_or_else(|| mode.default_curve())
    }

    /// Legt eine Kurve ab (überschreibt vorhandene).
    pub fn store(&mut self, mode: EditMode, id: u32, curve: Curve) {
        self.curves.insert((mode, id), curve);
    }

    /// Anzahl abgelegter Kurven.
    pub fn len(&self) -> usize {
        self.curves.len()
    }

    /// Gibt `true` zurück, wenn keine Kurve abgelegt ist.
    pub fn is_empty(&self) -> bool {
        self.curves.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_ids_yield_mode_default() {
        let store = CurveStore::new();
        assert_eq!(store.load(EditMode::Elastic, 9), EditMode::Elastic.default_curve());
        assert!(store.is_empty());
    }

    #[test]
    fn stored_curves_are_returned() {
        let mut store = CurveStore::new();
        let mut curve = EditMode::Normal.default_curve();
        curve.insert_point(0.4, 0.9).expect("Einfügen");
        store.store(EditMode::Normal, 1, curve.clone());
        assert_eq!(store.load(EditMode::Normal, 1), curve);
        assert_eq!(store.load(EditMode::Normal, 2), EditMode::Normal.default_curve());
        assert_eq!(store.len(), 1);
    }
}
