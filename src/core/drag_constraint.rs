//! Modifier-Einschränkungen beim Ziehen von Bézier-Handles.
//!
//! Einschränkungen rasten auf der steigenden Flanke der jeweiligen Taste
//! ein und lösen sich auf der fallenden Flanke. Winkel und Längen werden
//! in Bildschirm-skalierten Einheiten gemessen.

use glam::DVec2;

/// Aktive Einschränkungswünsche eines Drag-Schritts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DragModifiers {
    /// y auf den näheren Anker einrasten
    pub snap: bool,
    /// Winkel festhalten, Länge folgt
    pub lock_angle: bool,
    /// Länge festhalten, Winkel folgt
    pub lock_length: bool,
}

/// Geometrie eines Bézier-Handles zum Zeitpunkt eines Drag-Schritts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BezierDragGeometry {
    /// Anker, an dem das Handle hängt
    pub origin: DVec2,
    /// Aktuelle (zuletzt übernommene) Handle-Position
    pub current: DVec2,
    /// y des Start-Ankers des Segments
    pub start_y: f64,
    /// y des End-Ankers des Segments
    pub end_y: f64,
    /// Pixel pro Graph-Einheit (x, y), Beträge
    pub pixels_per_unit: DVec2,
}

/// Eingerastete Einschränkungen eines laufenden Bézier-Drags.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BezierDragState {
    snap_y: Option<f64>,
    locked_direction: Option<DVec2>,
    locked_length: Option<f64>,
    previous: DragModifiers,
}

impl BezierDragState {
    /// Gibt `true` zurück, wenn mindestens eine Einschränkung eingerastet ist.
    pub fn is_constrained(&self) -> bool {
        self.snap_y.is_some() || self.locked_direction.is_some() || self.locked_length.is_some()
    }

    /// Wendet die Einschränkungen auf die vorgeschlagene Position an.
    ///
    /// `keep_angle` im Ergebnis meldet, ob beim Kürzen der Winkel zu halten ist.
    pub fn constrain(
        &mut self,
        modifiers: DragModifiers,
        geometry: &BezierDragGeometry,
        proposed: DVec2,
    ) -> (DVec2, bool) {
        self.update_edges(modifiers, geometry);

        let scale = geometry.pixels_per_unit.abs().max(DVec2::splat(f64::EPSILON));
        let mut offset = (proposed - geometry.origin) * scale;

        if let Some(direction) = self.locked_direction {
            offset = direction * offset.dot(direction).max(0.0);
        }
        if let Some(length) = self.locked_length {
            let direction = offset.normalize_or_zero();
            if direction != DVec2::ZERO {
                offset = direction * length;
            }
        }

        let mut result = geometry.origin + offset / scale;
        if let Some(y) = self.snap_y {
            result.y = y;
        }
        (result, self.locked_direction.is_some())
    }

    /// Löst alle Einschränkungen (Drag-Ende).
    pub fn release(&mut self) {
        *self = Self::default();
    }

    fn update_edges(&mut self, modifiers: DragModifiers, geometry: &BezierDragGeometry) {
        let scale = geometry.pixels_per_unit.abs();
        let current = (geometry.current - geometry.origin) * scale;

        match (self.previous.snap, modifiers.snap) {
            (false, true) => {
                let to_start = (geometry.current.y - geometry.start_y).abs();
                let to_end = (geometry.current.y - geometry.end_y).abs();
                self.snap_y = Some(if to_start <= to_end {
                    geometry.start_y
                } else {
                    geometry.end_y
                });
            }
            (true, false) => self.snap_y = None,
            _ => {}
        }

        match (self.previous.lock_angle, modifiers.lock_angle) {
            (false, true) => {
                let direction = current.normalize_or_zero();
                self.locked_direction = (direction != DVec2::ZERO).then_some(direction);
            }
            (true, false) => self.locked_direction = None,
            _ => {}
        }

        match (self.previous.lock_length, modifiers.lock_length) {
            (false, true) => self.locked_length = Some(current.length()),
            (true, false) => self.locked_length = None,
            _ => {}
        }

        self.previous = modifiers;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn geometry(current: DVec2) -> BezierDragGeometry {
        BezierDragGeometry {
            origin: DVec2::ZERO,
            current,
            start_y: 0.0,
            end_y: 1.0,
            pixels_per_unit: DVec2::new(400.0, -300.0),
        }
    }

    #[test]
    fn test_unconstrained_passes_through() {
        let mut state = BezierDragState::default();
        let g = geometry(DVec2::new(0.4, 0.0));
        let (pos, keep) = state.constrain(DragModifiers::default(), &g, DVec2::new(0.3, 0.2));
        assert_relative_eq!(pos.x, 0.3, epsilon = 1e-12);
        assert_relative_eq!(pos.y, 0.2, epsilon = 1e-12);
        assert!(!keep);
        assert!(!state.is_constrained());
    }

    #[test]
    fn test_snap_engages_on_rising_edge_to_nearer_anchor() {
        let mut state = BezierDragState::default();
        let snap = DragModifiers {
            snap: true,
            ..Default::default()
        };
        let g = geometry(DVec2::new(0.4, 0.8));
        let (pos, _) = state.constrain(snap, &g, DVec2::new(0.3, 0.2));
        // Beim Einrasten war End-Anker (y=1) näher
        assert_eq!(pos.y, 1.0);

        // Taste gehalten: Ziel bleibt, auch wenn das Handle jetzt näher am Start wäre
        let g = geometry(DVec2::new(0.3, 0.1));
        let (pos, _) = state.constrain(snap, &g, DVec2::new(0.3, 0.1));
        assert_eq!(pos.y, 1.0);

        // Fallende Flanke löst
        let (pos, _) = state.constrain(DragModifiers::default(), &g, DVec2::new(0.3, 0.1));
        assert_relative_eq!(pos.y, 0.1, epsilon = 1e-12);
    }

    #[test]
    fn test_lock_angle_projects_onto_direction() {
        let mut state = BezierDragState::default();
        let lock = DragModifiers {
            lock_angle: true,
            ..Default::default()
        };
        let g = geometry(DVec2::new(0.3, 0.0));
        let (pos, keep) = state.constrain(lock, &g, DVec2::new(0.5, 0.4));
        assert!(keep);
        assert_relative_eq!(pos.x, 0.5, epsilon = 1e-12);
        assert_relative_eq!(pos.y, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_lock_length_keeps_screen_length() {
        let mut state = BezierDragState::default();
        let lock = DragModifiers {
            lock_length: true,
            ..Default::default()
        };
        let g = geometry(DVec2::new(0.25, 0.0)); // 100 px lang
        let (pos, _) = state.constrain(lock, &g, DVec2::new(0.0, 0.5));
        let screen = pos * DVec2::new(400.0, 300.0);
        assert_relative_eq!(screen.length(), 100.0, epsilon = 1e-9);
        assert_relative_eq!(pos.x, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_release_clears_everything() {
        let mut state = BezierDragState::default();
        let all = DragModifiers {
            snap: true,
            lock_angle: true,
            lock_length: true,
        };
        state.constrain(all, &geometry(DVec2::new(0.2, 0.2)), DVec2::new(0.2, 0.2));
        assert!(state.is_constrained());
        state.release();
        assert!(!state.is_constrained());
    }
}
